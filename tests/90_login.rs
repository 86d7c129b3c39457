mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn login_with_unknown_account_fails() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/login", server.base_url))
        .json(&json!({
            "email": "nobody@example.com",
            "password": "wrong-password"
        }))
        .send()
        .await?;

    // 401 Login failed with a live database, 500 without one.
    assert!(
        res.status() == StatusCode::UNAUTHORIZED
            || res.status() == StatusCode::INTERNAL_SERVER_ERROR,
        "unexpected status {}",
        res.status()
    );

    let status = res.status();
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], false);
    if status == StatusCode::UNAUTHORIZED {
        assert_eq!(body["message"], "Login failed");
    }
    Ok(())
}

#[tokio::test]
async fn login_with_correct_credentials_issues_a_token() -> Result<()> {
    let server = common::ensure_server().await?;
    if !common::db_ready(server).await {
        return Ok(());
    }
    let client = reqwest::Client::new();

    let email = format!("login-test-{}@example.com", common::fresh_emp_no());
    let res = client
        .post(format!("{}/users/add", server.base_url))
        .header("authorization", format!("Bearer {}", common::auth_token()))
        .json(&json!({"email": email, "password": "correct horse"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .post(format!("{}/login", server.base_url))
        .json(&json!({"email": email, "password": "correct horse"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], true);
    assert_eq!(body["message"], "Login successfully");
    let token = body["data"].as_str().unwrap_or_default();
    assert!(!token.is_empty(), "token should be non-empty");

    // Wrong password on a real account
    let res = client
        .post(format!("{}/login", server.base_url))
        .json(&json!({"email": email, "password": "wrong"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn login_without_body_is_a_client_error() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/login", server.base_url))
        .send()
        .await?;
    assert!(
        res.status().is_client_error(),
        "expected client error, got {}",
        res.status()
    );
    Ok(())
}
