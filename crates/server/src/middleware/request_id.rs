//! Request ID middleware for request tracing and correlation.
//!
//! Every request gets an ID: the `x-request-id` header supplied by an
//! upstream proxy if it passes a sanity check, otherwise a fresh UUID v4.
//! The ID is recorded in the current tracing span, tagged onto the Sentry
//! scope, and echoed back in the response headers.

use axum::http::HeaderMap;
use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Upstream IDs longer than this are replaced rather than logged verbatim.
const MAX_REQUEST_ID_LEN: usize = 64;

/// Middleware that ensures every request carries a usable request ID.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = inbound_request_id(request.headers())
        .map_or_else(|| Uuid::new_v4().to_string(), ToOwned::to_owned);

    // Record in current span for structured logging
    Span::current().record("request_id", &request_id);

    // Tag the Sentry scope so captured errors correlate with the request
    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &request_id);
    });

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

/// Accept an upstream request ID only if it is printable, non-empty, and
/// short enough to log.
fn inbound_request_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|id| !id.is_empty() && id.len() <= MAX_REQUEST_ID_LEN)
}
