use axum::{extract::Request, http::HeaderMap, middleware::Next, response::Response};

use crate::auth::{validate_jwt, Claims};
use crate::error::ApiError;

/// Authenticated principal extracted from a verified JWT.
///
/// Handlers behind [`jwt_check`] receive this via request extensions and must
/// not re-validate authentication themselves.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: i32,
    pub email: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
        }
    }
}

/// Bearer-token gate for the user and employee route groups.
///
/// Any failure (missing header, malformed scheme, bad signature, expired
/// token) yields the fixed 401 "Required token" envelope.
pub async fn jwt_check(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer(&headers).ok_or(ApiError::Unauthorized)?;
    let claims = validate_jwt(&token).map_err(|_| ApiError::Unauthorized)?;

    request.extensions_mut().insert(AuthUser::from(claims));
    Ok(next.run(request).await)
}

fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let auth_str = headers.get("authorization")?.to_str().ok()?;
    let token = auth_str.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}
