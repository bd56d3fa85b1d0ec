//! Handler for the `/products/stats` endpoint.

use axum::extract::{Extension, State};
use axum::routing::get;
use axum::{Json, Router};
use tracing::instrument;

use vitrina_catalog::service;

use crate::context::RequestContext;
use crate::state::RestState;
use crate::types::StatsResponse;

/// Creates the stats route.
pub fn routes() -> Router<RestState> {
    Router::new().route("/products/stats", get(get_product_stats))
}

/// Aggregate catalog statistics.
///
/// Computed fresh per request from the full catalog: counts, averages,
/// ranges, plus category, price-segment, and rating-distribution
/// breakdowns.
#[utoipa::path(
    get,
    path = "/products/stats",
    responses(
        (status = 200, description = "Catalog statistics", body = StatsResponse),
        (status = 500, description = "Internal error", body = crate::error::ErrorResponse),
    ),
    tag = "Statistics"
)]
#[instrument(skip_all, fields(request_id = %ctx.request_id))]
pub(crate) async fn get_product_stats(
    Extension(ctx): Extension<RequestContext>,
    State(state): State<RestState>,
) -> Json<StatsResponse> {
    let report = service::catalog_stats(&state.catalog);
    Json(StatsResponse::from(report))
}
