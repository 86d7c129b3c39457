use axum::{extract::Request, middleware::Next, response::Response};

/// Logs every inbound request before it reaches a handler.
pub async fn request_log(request: Request, next: Next) -> Response {
    tracing::info!("request url is {} {}", request.method(), request.uri());
    next.run(request).await
}
