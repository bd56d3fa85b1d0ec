//! Request context extraction for REST handlers.

use axum::body::Body;
use axum::http::header::HeaderName;
use axum::http::{HeaderMap, HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;

/// Header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Per-request context derived from headers.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Request ID for tracing/correlation.
    pub request_id: String,
}

fn request_id_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

fn add_request_id_header(response: &mut Response, request_id: &str) {
    if let Ok(value) = HeaderValue::from_str(request_id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }
}

/// Middleware that injects a request context and echoes the request ID.
///
/// A caller-supplied `x-request-id` is reused; otherwise a fresh ULID is
/// generated. The ID is attached as a request extension and echoed on the
/// response.
pub async fn context_middleware(req: Request<Body>, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();
    let request_id =
        request_id_from_headers(&parts.headers).unwrap_or_else(|| ulid::Ulid::new().to_string());

    parts.extensions.insert(RequestContext {
        request_id: request_id.clone(),
    });

    let mut response = next.run(Request::from_parts(parts, body)).await;
    add_request_id_header(&mut response, &request_id);
    response
}
