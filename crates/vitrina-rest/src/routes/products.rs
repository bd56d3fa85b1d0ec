//! Product endpoint handlers.
//!
//! - `GET /products` - Paginated list with optional free-text search
//! - `GET /products/bulk` - Bulk lookup by comma-separated ids
//! - `GET /products/price-range` - Inclusive price-range filter
//! - `GET /products/top-rated` - Minimum-rating filter
//! - `GET /products/search/specs` - Specification value search
//! - `GET /products/{id}` - Single lookup
//!
//! Handlers stay thin: extract raw parameters, call the catalog service,
//! wrap the typed result in its envelope. Validation and not-found
//! conditions surface as [`ApiError`] values.

use axum::extract::{Extension, Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use tracing::instrument;

use vitrina_catalog::service;

use crate::context::RequestContext;
use crate::error::ApiResult;
use crate::state::RestState;
use crate::types::{
    BulkProductsResponse, BulkQuery, GetProductResponse, ListProductsResponse, ListQuery,
    PriceRangeQuery, PriceRangeResponse, RatingQuery, RatingResponse, SpecQuery,
    SpecSearchResponse,
};

/// Creates product routes.
pub fn routes() -> Router<RestState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/bulk", get(get_bulk_products))
        .route("/products/price-range", get(products_by_price_range))
        .route("/products/top-rated", get(products_by_rating))
        .route("/products/search/specs", get(search_by_specification))
        .route("/products/:id", get(get_product))
}

/// List products with pagination and optional search.
#[utoipa::path(
    get,
    path = "/products",
    params(ListQuery),
    responses(
        (status = 200, description = "Paginated product list", body = ListProductsResponse),
        (status = 400, description = "Invalid pagination or search term", body = crate::error::ErrorResponse),
    ),
    tag = "Products"
)]
#[instrument(skip_all, fields(request_id = %ctx.request_id))]
pub(crate) async fn list_products(
    Extension(ctx): Extension<RequestContext>,
    State(state): State<RestState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<ListProductsResponse>> {
    let page = service::list_products(
        &state.catalog,
        query.page.as_deref(),
        query.limit.as_deref(),
        query.q.as_deref(),
    )?;
    Ok(Json(ListProductsResponse::from(page)))
}

/// Look up a single product by id.
#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = String, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = GetProductResponse),
        (status = 404, description = "Product not found", body = crate::error::ErrorResponse),
    ),
    tag = "Products"
)]
#[instrument(skip_all, fields(request_id = %ctx.request_id, id = %id))]
pub(crate) async fn get_product(
    Extension(ctx): Extension<RequestContext>,
    State(state): State<RestState>,
    Path(id): Path<String>,
) -> ApiResult<Json<GetProductResponse>> {
    let product = service::get_product(&state.catalog, &id)?;
    Ok(Json(GetProductResponse::from(product)))
}

/// Look up multiple products by a comma-separated id list.
#[utoipa::path(
    get,
    path = "/products/bulk",
    params(BulkQuery),
    responses(
        (status = 200, description = "All requested products found", body = BulkProductsResponse),
        (status = 400, description = "Malformed id list", body = crate::error::ErrorResponse),
        (status = 404, description = "One or more ids not found", body = crate::error::ErrorResponse),
    ),
    tag = "Products"
)]
#[instrument(skip_all, fields(request_id = %ctx.request_id))]
pub(crate) async fn get_bulk_products(
    Extension(ctx): Extension<RequestContext>,
    State(state): State<RestState>,
    Query(query): Query<BulkQuery>,
) -> ApiResult<Json<BulkProductsResponse>> {
    let bulk = service::get_bulk_products(&state.catalog, query.ids.as_deref())?;
    Ok(Json(BulkProductsResponse::from(bulk)))
}

/// Filter products by an inclusive price range.
#[utoipa::path(
    get,
    path = "/products/price-range",
    params(PriceRangeQuery),
    responses(
        (status = 200, description = "Filtered products with analysis", body = PriceRangeResponse),
        (status = 400, description = "Invalid price bounds", body = crate::error::ErrorResponse),
    ),
    tag = "Products"
)]
#[instrument(skip_all, fields(request_id = %ctx.request_id))]
pub(crate) async fn products_by_price_range(
    Extension(ctx): Extension<RequestContext>,
    State(state): State<RestState>,
    Query(query): Query<PriceRangeQuery>,
) -> ApiResult<Json<PriceRangeResponse>> {
    let result = service::products_by_price_range(
        &state.catalog,
        query.min_price.as_deref(),
        query.max_price.as_deref(),
    )?;
    Ok(Json(PriceRangeResponse::from(result)))
}

/// Filter products by minimum rating.
#[utoipa::path(
    get,
    path = "/products/top-rated",
    params(RatingQuery),
    responses(
        (status = 200, description = "Filtered products with analysis", body = RatingResponse),
        (status = 400, description = "Invalid rating bound", body = crate::error::ErrorResponse),
    ),
    tag = "Products"
)]
#[instrument(skip_all, fields(request_id = %ctx.request_id))]
pub(crate) async fn products_by_rating(
    Extension(ctx): Extension<RequestContext>,
    State(state): State<RestState>,
    Query(query): Query<RatingQuery>,
) -> ApiResult<Json<RatingResponse>> {
    let result = service::products_by_rating(&state.catalog, query.min_rating.as_deref())?;
    Ok(Json(RatingResponse::from(result)))
}

/// Search products by specification value.
#[utoipa::path(
    get,
    path = "/products/search/specs",
    params(SpecQuery),
    responses(
        (status = 200, description = "Matching products with analysis", body = SpecSearchResponse),
        (status = 400, description = "Missing or invalid term", body = crate::error::ErrorResponse),
    ),
    tag = "Products"
)]
#[instrument(skip_all, fields(request_id = %ctx.request_id))]
pub(crate) async fn search_by_specification(
    Extension(ctx): Extension<RequestContext>,
    State(state): State<RestState>,
    Query(query): Query<SpecQuery>,
) -> ApiResult<Json<SpecSearchResponse>> {
    let result = service::products_by_specification(&state.catalog, query.spec.as_deref())?;
    Ok(Json(SpecSearchResponse::from(result)))
}
