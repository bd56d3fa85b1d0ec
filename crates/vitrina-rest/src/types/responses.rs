//! Success response envelopes.
//!
//! Every success payload carries `success: true` plus operation-specific
//! fields; the shapes mirror what existing clients already parse.

use serde::{Deserialize, Serialize};

use vitrina_catalog::analysis::{PriceRangeAnalysis, RatingAnalysis, SpecAnalysis};
use vitrina_catalog::query::PageInfo;
use vitrina_catalog::service::{
    BulkLookup, PriceRangeResult, ProductPage, RatingResult, SpecSearchResult,
};
use vitrina_catalog::stats::StatsReport;
use vitrina_catalog::Product;

/// Price bounds echoed back by the price-range endpoint.
///
/// An unbounded maximum serializes as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PriceRangeEcho {
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound; `null` when unbounded.
    pub max: Option<f64>,
}

/// Response from `GET /products`.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListProductsResponse {
    /// Always true for success responses.
    pub success: bool,
    /// The page slice.
    pub data: Vec<Product>,
    /// Pagination metadata.
    pub pagination: PageInfo,
    /// The sanitized search term that was applied (possibly empty).
    pub search_term: String,
}

impl From<ProductPage> for ListProductsResponse {
    fn from(page: ProductPage) -> Self {
        Self {
            success: true,
            data: page.products,
            pagination: page.pagination,
            search_term: page.search_term,
        }
    }
}

/// Response from `GET /products/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct GetProductResponse {
    /// Always true for success responses.
    pub success: bool,
    /// The product.
    pub data: Product,
    /// Always true; a miss is a 404, never a success envelope.
    pub found: bool,
}

impl From<Product> for GetProductResponse {
    fn from(product: Product) -> Self {
        Self {
            success: true,
            data: product,
            found: true,
        }
    }
}

/// Response from `GET /products/bulk`.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkProductsResponse {
    /// Always true for success responses.
    pub success: bool,
    /// Matched products, in catalog order.
    pub data: Vec<Product>,
    /// Number of matched products.
    pub count: usize,
    /// The ids the caller asked for, in request order.
    pub requested_ids: Vec<u64>,
    /// The ids that matched, in catalog order.
    pub found_ids: Vec<u64>,
}

impl From<BulkLookup> for BulkProductsResponse {
    fn from(bulk: BulkLookup) -> Self {
        Self {
            success: true,
            data: bulk.products,
            count: bulk.count,
            requested_ids: bulk.requested_ids,
            found_ids: bulk.found_ids,
        }
    }
}

/// Response from `GET /products/stats`.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StatsResponse {
    /// Always true for success responses.
    pub success: bool,
    /// The statistics report.
    pub data: StatsReport,
}

impl From<StatsReport> for StatsResponse {
    fn from(report: StatsReport) -> Self {
        Self {
            success: true,
            data: report,
        }
    }
}

/// Response from `GET /products/price-range`.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriceRangeResponse {
    /// Always true for success responses.
    pub success: bool,
    /// Matched products, in catalog order.
    pub data: Vec<Product>,
    /// Number of matched products.
    pub count: usize,
    /// The normalized bounds that were applied.
    pub price_range: PriceRangeEcho,
    /// Secondary analysis over the matches.
    pub analysis: PriceRangeAnalysis,
}

impl From<PriceRangeResult> for PriceRangeResponse {
    fn from(result: PriceRangeResult) -> Self {
        Self {
            success: true,
            data: result.products,
            count: result.count,
            price_range: PriceRangeEcho {
                min: result.bounds.min,
                max: result.bounds.max.is_finite().then_some(result.bounds.max),
            },
            analysis: result.analysis,
        }
    }
}

/// Response from `GET /products/top-rated`.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RatingResponse {
    /// Always true for success responses.
    pub success: bool,
    /// Matched products, in catalog order.
    pub data: Vec<Product>,
    /// Number of matched products.
    pub count: usize,
    /// The normalized minimum rating that was applied.
    pub min_rating: f64,
    /// Secondary analysis over the matches.
    pub analysis: RatingAnalysis,
}

impl From<RatingResult> for RatingResponse {
    fn from(result: RatingResult) -> Self {
        Self {
            success: true,
            data: result.products,
            count: result.count,
            min_rating: result.min_rating,
            analysis: result.analysis,
        }
    }
}

/// Response from `GET /products/search/specs`.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpecSearchResponse {
    /// Always true for success responses.
    pub success: bool,
    /// Matched products, in catalog order.
    pub data: Vec<Product>,
    /// Number of matched products.
    pub count: usize,
    /// The sanitized term that was applied.
    pub search_term: String,
    /// Secondary analysis over the matches.
    pub analysis: SpecAnalysis,
}

impl From<SpecSearchResult> for SpecSearchResponse {
    fn from(result: SpecSearchResult) -> Self {
        Self {
            success: true,
            data: result.products,
            count: result.count,
            search_term: result.search_term,
            analysis: result.analysis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrina_catalog::{service, ProductCatalog};

    #[test]
    fn test_list_envelope() {
        let catalog = ProductCatalog::seed();
        let page = service::list_products(&catalog, Some("1"), Some("3"), None).expect("list");
        let json =
            serde_json::to_value(ListProductsResponse::from(page)).expect("serialization failed");

        assert_eq!(json["success"], true);
        assert_eq!(json["data"].as_array().map(Vec::len), Some(3));
        assert_eq!(json["pagination"]["totalPages"], 4);
        assert_eq!(json["searchTerm"], "");
    }

    #[test]
    fn test_bulk_envelope() {
        let catalog = ProductCatalog::seed();
        let bulk = service::get_bulk_products(&catalog, Some("3,1")).expect("bulk");
        let json =
            serde_json::to_value(BulkProductsResponse::from(bulk)).expect("serialization failed");

        assert_eq!(json["count"], 2);
        assert_eq!(json["requestedIds"], serde_json::json!([3, 1]));
        assert_eq!(json["foundIds"], serde_json::json!([1, 3]));
    }

    #[test]
    fn test_price_range_envelope_unbounded_max_is_null() {
        let catalog = ProductCatalog::seed();
        let result =
            service::products_by_price_range(&catalog, Some("500"), None).expect("filter");
        let json =
            serde_json::to_value(PriceRangeResponse::from(result)).expect("serialization failed");

        assert_eq!(json["priceRange"]["min"], 500.0);
        assert_eq!(json["priceRange"]["max"], serde_json::Value::Null);
        assert!(json["analysis"].get("bestValue").is_some());
    }

    #[test]
    fn test_spec_search_envelope_no_matches() {
        let catalog = ProductCatalog::seed();
        let result =
            service::products_by_specification(&catalog, Some("zzzz")).expect("search");
        let json =
            serde_json::to_value(SpecSearchResponse::from(result)).expect("serialization failed");

        assert_eq!(json["count"], 0);
        assert!(json["analysis"].get("suggestions").is_some());
    }
}
