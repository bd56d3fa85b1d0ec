//! Catalog REST router setup.
//!
//! Provides the router builder for mounting catalog endpoints.

use axum::middleware;
use axum::Router;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::context::context_middleware;
use crate::metrics::metrics_middleware;
use crate::routes;
use crate::state::RestState;

/// Creates the catalog REST router.
///
/// The router is designed to be nested under `/api` in the main server:
///
/// ```rust,ignore
/// use vitrina_rest::router::catalog_router;
///
/// let app = axum::Router::new()
///     .nest("/api", catalog_router(state));
/// ```
///
/// # Endpoints
///
/// - `GET /products` - Paginated list with optional search
/// - `GET /products/stats` - Aggregate statistics
/// - `GET /products/bulk` - Bulk lookup by id list
/// - `GET /products/price-range` - Price-range filter
/// - `GET /products/top-rated` - Minimum-rating filter
/// - `GET /products/search/specs` - Specification search
/// - `GET /products/{id}` - Single lookup
/// - `GET /openapi.json` - `OpenAPI` document
pub fn catalog_router(state: RestState) -> Router {
    let router = Router::new()
        .route(
            "/openapi.json",
            axum::routing::get(routes::openapi::get_openapi_json),
        )
        .merge(routes::products::routes())
        .merge(routes::stats::routes())
        .layer(middleware::from_fn(context_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http());

    let router = match state.config.concurrency_limit {
        Some(limit) => router.layer(ConcurrencyLimitLayer::new(limit)),
        None => router,
    };

    router.with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::RestConfig;

    #[test]
    fn test_router_creation() {
        let _router = catalog_router(RestState::seeded());
        // Router should be created without panicking
    }

    #[test]
    fn test_router_with_concurrency_limit() {
        let state = RestState::seeded().with_config(RestConfig {
            concurrency_limit: Some(8),
        });
        let _router = catalog_router(state);
    }
}
