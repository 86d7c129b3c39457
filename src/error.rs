use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

/// Errors that escape a handler.
///
/// Handled failure paths (not-found branches, validation failures) are
/// explicit [`crate::api::Envelope`] responses and never travel through this
/// type. What remains here is the auth gate rejection and store/runtime
/// errors, which fall through to a generic 500 envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Required token")]
    Unauthorized,

    #[error("token generation failed: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("password hash error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "data": "JWT token need in header ",
                    "message": "Required token",
                    "status": false
                })),
            )
                .into_response(),
            ApiError::Database(err) => {
                tracing::error!("database error: {}", err);
                internal_error()
            }
            ApiError::Token(err) => {
                tracing::error!("jwt error: {}", err);
                internal_error()
            }
            ApiError::PasswordHash(err) => {
                tracing::error!("bcrypt error: {}", err);
                internal_error()
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {}", msg);
                internal_error()
            }
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "data": "internal error",
            "message": "Internal Server Error",
            "status": false
        })),
    )
        .into_response()
}
