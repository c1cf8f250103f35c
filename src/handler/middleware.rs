//! Middleware for request processing
//!
//! Request logging and content-type enforcement. Both are stateless; the
//! contract layer stays the single owner of body validation.

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use std::time::Instant;

use super::{ErrorBody, ErrorInfo};

/// Content-type enforcement middleware
///
/// Request bodies must be JSON; anything else is rejected up front with 415
/// instead of letting the extractor produce a less specific error.
pub async fn content_type_middleware(request: Request, next: Next) -> Result<Response, Response> {
    if matches!(request.method(), &axum::http::Method::POST | &axum::http::Method::PUT) {
        let content_type = request
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if !is_json_content_type(content_type) {
            let body = ErrorBody::new(ErrorInfo::new(
                "INVALID_CONTENT_TYPE",
                "Content-Type must be application/json",
            ));
            return Err((StatusCode::UNSUPPORTED_MEDIA_TYPE, Json(body)).into_response());
        }
    }

    Ok(next.run(request).await)
}

/// Request logging middleware
///
/// Logs method, path, status, and timing for every request.
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    tracing::info!(method = %method, uri = %uri, "Request started");

    let response = next.run(request).await;
    let duration = start.elapsed();

    tracing::info!(
        method = %method,
        uri = %uri,
        status = %response.status(),
        duration_ms = %duration.as_millis(),
        "Request completed"
    );

    response
}

/// Check whether a Content-Type header value carries JSON.
fn is_json_content_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(str::trim)
        .is_some_and(|mime| mime.eq_ignore_ascii_case("application/json"))
}
