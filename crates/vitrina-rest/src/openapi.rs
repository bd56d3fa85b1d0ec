//! `OpenAPI` (3.1) specification generation for the catalog REST API.

use utoipa::OpenApi;

/// `OpenAPI` documentation for the catalog REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vitrina Products API",
        description = "RESTful API over a fixed in-memory product catalog: paginated listing, search, bulk lookup, price/rating/specification filtering, and aggregate statistics."
    ),
    paths(
        crate::routes::products::list_products,
        crate::routes::products::get_product,
        crate::routes::products::get_bulk_products,
        crate::routes::products::products_by_price_range,
        crate::routes::products::products_by_rating,
        crate::routes::products::search_by_specification,
        crate::routes::stats::get_product_stats,
    ),
    components(
        schemas(
            vitrina_catalog::Product,
            vitrina_catalog::query::PageInfo,
            vitrina_catalog::stats::RangeStat,
            vitrina_catalog::stats::CatalogStats,
            vitrina_catalog::stats::CategoryBucket,
            vitrina_catalog::stats::PriceSegment,
            vitrina_catalog::stats::PriceSegments,
            vitrina_catalog::stats::RatingBand,
            vitrina_catalog::stats::RatingDistribution,
            vitrina_catalog::stats::StatsReport,
            vitrina_catalog::analysis::NoMatches,
            vitrina_catalog::analysis::PriceRangeSummary,
            vitrina_catalog::analysis::PriceRangeAnalysis,
            vitrina_catalog::analysis::RatingSummary,
            vitrina_catalog::analysis::RatingAnalysis,
            vitrina_catalog::analysis::SpecFrequency,
            vitrina_catalog::analysis::SpecSummary,
            vitrina_catalog::analysis::SpecAnalysis,
            crate::types::PriceRangeEcho,
            crate::types::ListProductsResponse,
            crate::types::GetProductResponse,
            crate::types::BulkProductsResponse,
            crate::types::StatsResponse,
            crate::types::PriceRangeResponse,
            crate::types::RatingResponse,
            crate::types::SpecSearchResponse,
            crate::error::ErrorResponse,
            crate::error::ErrorDetail,
            crate::error::FieldError,
        )
    ),
    tags(
        (name = "Products", description = "Product listing, lookup, and filtering"),
        (name = "Statistics", description = "Aggregate catalog statistics"),
    ),
)]
pub struct CatalogApiDoc;

/// Returns the generated `OpenAPI` spec.
#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    CatalogApiDoc::openapi()
}

/// Returns the generated `OpenAPI` spec serialized as pretty JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails (should not happen).
pub fn openapi_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&openapi())
}
