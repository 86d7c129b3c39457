mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn health_answers() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await?;
    assert!(
        res.status() == StatusCode::OK || res.status() == StatusCode::SERVICE_UNAVAILABLE,
        "unexpected health status {}",
        res.status()
    );

    let body = res.json::<serde_json::Value>().await?;
    assert!(body.get("status").is_some(), "health body: {}", body);
    Ok(())
}

#[tokio::test]
async fn salary_find_needs_no_token() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    // Unknown key: 404 Not Found envelope with a live database, 500 without
    // one. Never the 401 auth envelope.
    let res = client
        .get(format!("{}/salary/find?emp_no=999999999", server.base_url))
        .send()
        .await?;
    assert!(
        res.status() == StatusCode::NOT_FOUND
            || res.status() == StatusCode::INTERNAL_SERVER_ERROR,
        "unexpected status {}",
        res.status()
    );

    let status = res.status();
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], false);
    if status == StatusCode::NOT_FOUND {
        assert_eq!(body["data"], "empty");
        assert_eq!(body["message"], "Not Found");
    }
    Ok(())
}

#[tokio::test]
async fn non_numeric_keys_get_the_not_found_envelope() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    // Query keys that do not parse skip the store entirely and answer with
    // the fixed 404 body, never an extractor's plain-text 400.
    for url in [
        format!("{}/salary/find?emp_no=abc", server.base_url),
        format!("{}/title/find?emp_no=ten", server.base_url),
    ] {
        let res = client.get(url).send().await?;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body = res.json::<serde_json::Value>().await?;
        assert_eq!(
            body,
            json!({"data": "empty", "message": "Not Found", "status": false})
        );
    }

    // Path segments behave the same way behind the auth gate.
    let res = client
        .get(format!("{}/users/find/abc", server.base_url))
        .header("authorization", format!("Bearer {}", common::auth_token()))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Not Found");

    let res = client
        .delete(format!("{}/users/remove/abc", server.base_url))
        .header("authorization", format!("Bearer {}", common::auth_token()))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Id does not match /  no records found");

    Ok(())
}

#[tokio::test]
async fn title_update_needs_no_token() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .put(format!("{}/title/update", server.base_url))
        .json(&json!({
            "emp_no": 999999999,
            "title": "Senior Engineer",
            "from_date": "2020-01-01",
            "to_date": "2024-01-01"
        }))
        .send()
        .await?;
    assert!(
        res.status() == StatusCode::NOT_FOUND
            || res.status() == StatusCode::INTERNAL_SERVER_ERROR,
        "unexpected status {}",
        res.status()
    );

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], false);
    Ok(())
}
