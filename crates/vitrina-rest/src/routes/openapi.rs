//! Handler serving the generated `OpenAPI` document.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::openapi::openapi_json;

/// Handler for `GET /openapi.json`.
pub async fn get_openapi_json() -> Response {
    match openapi_json() {
        Ok(json) => (
            StatusCode::OK,
            [("content-type", "application/json")],
            json,
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to serialize OpenAPI document");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
