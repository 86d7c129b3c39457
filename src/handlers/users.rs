use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};

use crate::api::input::{as_text, only};
use crate::api::{Envelope, HandlerResult};
use crate::auth::{generate_jwt, Claims};
use crate::database::repositories::UserRepo;
use crate::error::ApiError;
use crate::mail;
use crate::middleware::AuthUser;
use crate::state::AppState;
use crate::validation::{self, rules};

/// GET /users/findall
pub async fn show_all(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> HandlerResult {
    let repo = UserRepo::new(state.pool.clone());
    if repo.count().await? == 0 {
        return Ok(Envelope::not_found());
    }
    let users = repo.all().await?;
    tracing::debug!("user list requested by {}", auth.email);
    Ok(Envelope::record(users))
}

/// POST /users/add
pub async fn store(State(state): State<AppState>, Json(body): Json<Value>) -> HandlerResult {
    let input = only(&body, &["email", "password"]);

    let validation = validation::validate(
        &input,
        rules::NEW_USER_ADD_RULES,
        rules::NEW_USER_MESSAGE,
        &state.pool,
    )
    .await?;
    if validation.fails() {
        return Ok(Envelope::validation_failed(
            validation.first_message(),
            "User registration fail",
        ));
    }

    let email = require_text(&input, "email")?;
    let password = require_text(&input, "password")?;
    let hash = bcrypt::hash(&password, bcrypt::DEFAULT_COST)?;

    let repo = UserRepo::new(state.pool.clone());
    let user = repo.create(&email, &hash).await?;

    mail::dispatch_welcome(state.mailer.clone(), user.email);
    Ok(Envelope::created("User save successful"))
}

/// GET /users/find/:id
pub async fn show_id(State(state): State<AppState>, Path(id): Path<String>) -> HandlerResult {
    let Some(id) = super::parse_key(&id) else {
        return Ok(Envelope::not_found());
    };
    let repo = UserRepo::new(state.pool.clone());
    match repo.find_by_id(id).await? {
        Some(user) => Ok(Envelope::record(user)),
        None => Ok(Envelope::not_found()),
    }
}

/// PUT /users/update/:id
///
/// Persists email and password. Runs the same rule table as creation, so an
/// update that keeps the current email trips the `unique` rule; that matches
/// the original API.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> HandlerResult {
    let Some(id) = super::parse_key(&id) else {
        return Ok(Envelope::update_target_missing());
    };
    let repo = UserRepo::new(state.pool.clone());
    if repo.find_by_id(id).await?.is_none() {
        return Ok(Envelope::update_target_missing());
    }

    let input = only(&body, &["email", "password"]);
    let validation = validation::validate(
        &input,
        rules::NEW_USER_ADD_RULES,
        rules::NEW_USER_MESSAGE,
        &state.pool,
    )
    .await?;
    if validation.fails() {
        return Ok(Envelope::validation_failed(
            validation.first_message(),
            "User registration fail",
        ));
    }

    let email = require_text(&input, "email")?;
    let password = require_text(&input, "password")?;
    let hash = bcrypt::hash(&password, bcrypt::DEFAULT_COST)?;
    repo.update(id, &email, &hash).await?;

    Ok(Envelope::updated("user Update successfull"))
}

/// DELETE /users/remove/:id
pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> HandlerResult {
    let Some(id) = super::parse_key(&id) else {
        return Ok(Envelope::remove_target_missing());
    };
    let repo = UserRepo::new(state.pool.clone());
    if repo.find_by_id(id).await?.is_none() {
        return Ok(Envelope::remove_target_missing());
    }
    repo.delete_by_id(id).await?;
    Ok(Envelope::deleted())
}

/// POST /login
pub async fn login(State(state): State<AppState>, Json(body): Json<Value>) -> HandlerResult {
    let input = only(&body, &["email", "password"]);
    let email = as_text(&input, "email").unwrap_or_default();
    let password = as_text(&input, "password").unwrap_or_default();

    let repo = UserRepo::new(state.pool.clone());
    let user = match repo.find_by_email(&email).await? {
        Some(user) => user,
        None => return Ok(login_failed()),
    };
    if !bcrypt::verify(&password, &user.password)? {
        return Ok(login_failed());
    }

    let token = generate_jwt(&Claims::new(user.id, user.email))?;
    Ok(Envelope::success(json!(token), "Login successfully"))
}

fn login_failed() -> Envelope {
    Envelope::failure(StatusCode::UNAUTHORIZED, Value::Null, "Login failed")
}

fn require_text(input: &serde_json::Map<String, Value>, field: &str) -> Result<String, ApiError> {
    as_text(input, field)
        .ok_or_else(|| ApiError::Internal(format!("{} missing after validation", field)))
}
