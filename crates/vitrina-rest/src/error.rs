//! API error types and HTTP status mapping.
//!
//! Every failure serializes as `{"error": {"message", "code"}}`, with an
//! optional `details` list for validation errors. Codes come verbatim from
//! the catalog layer; they are a compatibility contract with existing
//! clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use vitrina_catalog::CatalogError;

/// Result type alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// REST-level error with an HTTP status mapping.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request (400) - invalid or out-of-bounds input.
    #[error("Bad request: {message}")]
    BadRequest {
        /// Human-readable error message.
        message: String,
        /// Stable machine-readable code.
        code: &'static str,
        /// Per-parameter failure details.
        details: Vec<FieldError>,
    },

    /// Not found (404) - requested product(s) absent from the catalog.
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message.
        message: String,
        /// Stable machine-readable code.
        code: &'static str,
    },

    /// Internal server error (500) - unexpected failure.
    #[error("Internal error: {message}")]
    Internal {
        /// Human-readable error message.
        message: String,
    },
}

impl ApiError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the stable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::BadRequest { code, .. } | Self::NotFound { code, .. } => code,
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Returns the human-readable error message.
    ///
    /// Internal errors always surface a generic message; whatever detail
    /// they carried stays in the logs.
    #[must_use]
    pub fn public_message(&self) -> &str {
        match self {
            Self::BadRequest { message, .. } | Self::NotFound { message, .. } => message,
            Self::Internal { .. } => "Internal server error",
        }
    }
}

/// One per-parameter validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FieldError {
    /// The offending parameter name.
    pub field: String,
    /// What went wrong with it.
    pub message: String,
}

/// Wire shape of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// The error payload.
    pub error: ErrorDetail,
}

/// Detailed error information.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDetail {
    /// Human-readable error message.
    pub message: String,
    /// Stable machine-readable code.
    pub code: String,
    /// Per-parameter failure details (validation errors only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        let details = match err {
            ApiError::BadRequest { details, .. } if !details.is_empty() => {
                Some(details.clone())
            }
            _ => None,
        };
        Self {
            error: ErrorDetail {
                message: err.public_message().to_string(),
                code: err.error_code().to_string(),
                details,
            },
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Validation {
                message,
                code,
                field,
            } => Self::BadRequest {
                details: vec![FieldError {
                    field: field.to_string(),
                    message: message.clone(),
                }],
                message,
                code,
            },
            CatalogError::NotFound { message, code } => Self::NotFound { message, code },
            CatalogError::Internal { message } => Self::Internal { message },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Internal { .. }) {
            tracing::error!(error = %self, "internal error while handling request");
        }
        let status = self.status_code();
        let body = ErrorResponse::from(&self);
        (status, axum::Json(body)).into_response()
    }
}
