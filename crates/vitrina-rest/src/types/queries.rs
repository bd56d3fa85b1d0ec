//! Query-parameter types.
//!
//! Every field arrives as raw text and is normalized by the catalog's
//! validation layer, so malformed input surfaces as a stable
//! `{error: {message, code}}` envelope instead of a framework rejection.

use serde::Deserialize;

/// Query parameters for the paginated list endpoint.
#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
pub struct ListQuery {
    /// 1-based page number (default 1, max 1000).
    pub page: Option<String>,

    /// Page size (default 10, max 100).
    pub limit: Option<String>,

    /// Optional free-text search over name and description.
    pub q: Option<String>,
}

/// Query parameters for the bulk lookup endpoint.
#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
pub struct BulkQuery {
    /// Comma-separated product ids (at most 20).
    pub ids: Option<String>,
}

/// Query parameters for the price-range filter endpoint.
#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct PriceRangeQuery {
    /// Inclusive lower price bound (default 0).
    pub min_price: Option<String>,

    /// Inclusive upper price bound (default unbounded, max 1,000,000).
    pub max_price: Option<String>,
}

/// Query parameters for the rating filter endpoint.
#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct RatingQuery {
    /// Inclusive minimum rating in `[0, 5]` (default 0).
    pub min_rating: Option<String>,
}

/// Query parameters for the specification search endpoint.
#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
pub struct SpecQuery {
    /// Specification term to search for (1..=200 characters).
    pub spec: Option<String>,
}
