//! # vitrina-rest
//!
//! REST facade for the Vitrina product catalog.
//!
//! This crate maps HTTP requests onto [`vitrina_catalog`] operations and
//! catalog results/errors onto JSON responses:
//!
//! - **Routes**: listing (paginated, searchable), single and bulk lookup,
//!   price/rating/specification filtering, aggregate statistics
//! - **Errors**: stable `{error: {message, code}}` envelopes with
//!   per-parameter detail entries for validation failures
//! - **Observability**: request-ID echo middleware and Prometheus request
//!   metrics
//! - **Docs**: `OpenAPI` document served at `/openapi.json`
//!
//! ## Example
//!
//! ```rust,ignore
//! use vitrina_rest::router::catalog_router;
//! use vitrina_rest::state::RestState;
//!
//! // Mount the catalog API under /api in the host router
//! let app = axum::Router::new()
//!     .nest("/api", catalog_router(RestState::seeded()));
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod context;
pub mod error;
pub mod metrics;
pub mod openapi;
pub mod router;
pub mod routes;
pub mod state;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ApiError, ApiResult};
    pub use crate::router::catalog_router;
    pub use crate::state::{RestConfig, RestState};
}

pub use error::{ApiError, ApiResult};
pub use openapi::{openapi, openapi_json, CatalogApiDoc};
pub use router::catalog_router;
pub use state::{RestConfig, RestState};
