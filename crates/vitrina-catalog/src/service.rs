//! Per-operation orchestration.
//!
//! One function per logical operation. Each delegates validation, runs the
//! query engine over the catalog, raises not-found conditions, and shapes
//! the typed result the REST layer serializes. All operations are stateless
//! request/response transforms.

use chrono::Utc;
use tracing::debug;

use crate::analysis::{
    analyze_price_range, analyze_rating, analyze_specification, PriceRangeAnalysis,
    RatingAnalysis, SpecAnalysis,
};
use crate::error::{CatalogError, CatalogResult};
use crate::product::Product;
use crate::query::{self, PageInfo};
use crate::stats::{categorize, compute_stats, price_segments, rating_distribution, StatsReport};
use crate::store::ProductCatalog;
use crate::validate;

/// Result of the paginated list operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    /// The page slice.
    pub products: Vec<Product>,
    /// Pagination metadata.
    pub pagination: PageInfo,
    /// The sanitized search term that was applied (possibly empty).
    pub search_term: String,
}

/// Result of the bulk lookup operation.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkLookup {
    /// Matched products, in catalog order.
    pub products: Vec<Product>,
    /// Number of matched products.
    pub count: usize,
    /// The ids the caller asked for, in request order.
    pub requested_ids: Vec<u64>,
    /// The ids that matched, in catalog order.
    pub found_ids: Vec<u64>,
}

/// Result of the price-range filter operation.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRangeResult {
    /// Matched products, in catalog order.
    pub products: Vec<Product>,
    /// Number of matched products.
    pub count: usize,
    /// The normalized bounds that were applied.
    pub bounds: validate::PriceBounds,
    /// Secondary analysis over the matches.
    pub analysis: PriceRangeAnalysis,
}

/// Result of the rating filter operation.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingResult {
    /// Matched products, in catalog order.
    pub products: Vec<Product>,
    /// Number of matched products.
    pub count: usize,
    /// The normalized minimum rating that was applied.
    pub min_rating: f64,
    /// Secondary analysis over the matches.
    pub analysis: RatingAnalysis,
}

/// Result of the specification search operation.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecSearchResult {
    /// Matched products, in catalog order.
    pub products: Vec<Product>,
    /// Number of matched products.
    pub count: usize,
    /// The sanitized term that was applied.
    pub search_term: String,
    /// Secondary analysis over the matches.
    pub analysis: SpecAnalysis,
}

/// Lists products with pagination and optional free-text search.
///
/// # Errors
///
/// Validation errors for out-of-bounds pagination or an over-long term.
pub fn list_products(
    catalog: &ProductCatalog,
    page: Option<&str>,
    limit: Option<&str>,
    query: Option<&str>,
) -> CatalogResult<ProductPage> {
    let params = validate::validate_pagination(page, limit)?;
    let term = validate::validate_search_term(query)?;

    let paginated = query::paginate(catalog.products(), params.page, params.limit, &term);
    debug!(
        page = params.page,
        limit = params.limit,
        total = paginated.pagination.total,
        "listed products"
    );

    Ok(ProductPage {
        products: paginated.products,
        pagination: paginated.pagination,
        search_term: term,
    })
}

/// Looks up a single product by its textual id.
///
/// # Errors
///
/// `PRODUCT_NOT_FOUND` when the id has no catalog entry; a non-numeric id
/// is treated the same way.
pub fn get_product(catalog: &ProductCatalog, raw_id: &str) -> CatalogResult<Product> {
    catalog
        .by_raw_id(raw_id)
        .cloned()
        .ok_or_else(|| CatalogError::product_not_found(raw_id.trim()))
}

/// Looks up multiple products from a comma-separated id list.
///
/// The store silently drops unmatched ids; this operation then turns a
/// partial match into a `PRODUCTS_NOT_FOUND` error naming the missing ids.
///
/// # Errors
///
/// Validation errors for a malformed list, or `PRODUCTS_NOT_FOUND`.
pub fn get_bulk_products(catalog: &ProductCatalog, raw_ids: Option<&str>) -> CatalogResult<BulkLookup> {
    let requested = validate::validate_ids(raw_ids)?;
    let products = catalog.by_ids(&requested);

    if products.len() != requested.len() {
        let missing: Vec<u64> = requested
            .iter()
            .copied()
            .filter(|id| !products.iter().any(|p| p.id == *id))
            .collect();
        return Err(CatalogError::products_not_found(&missing));
    }

    let found_ids = products.iter().map(|p| p.id).collect();
    let count = products.len();
    Ok(BulkLookup {
        products,
        count,
        requested_ids: requested,
        found_ids,
    })
}

/// Computes the full statistics report over the catalog.
#[must_use]
pub fn catalog_stats(catalog: &ProductCatalog) -> StatsReport {
    let products = catalog.products();
    StatsReport {
        stats: compute_stats(products),
        categories: categorize(products),
        price_segments: price_segments(products),
        rating_distribution: rating_distribution(products),
        last_updated: Utc::now(),
    }
}

/// Filters products by an inclusive price range.
///
/// # Errors
///
/// Validation errors for negative, inverted, or over-cap bounds.
pub fn products_by_price_range(
    catalog: &ProductCatalog,
    min_price: Option<&str>,
    max_price: Option<&str>,
) -> CatalogResult<PriceRangeResult> {
    let bounds = validate::validate_price_range(min_price, max_price)?;
    let products = query::filter_by_price_range(catalog.products(), bounds.min, bounds.max);
    let analysis = analyze_price_range(&products, bounds.min, bounds.max);

    let count = products.len();
    Ok(PriceRangeResult {
        products,
        count,
        bounds,
        analysis,
    })
}

/// Filters products by an inclusive minimum rating.
///
/// # Errors
///
/// Validation errors for an out-of-range rating.
pub fn products_by_rating(
    catalog: &ProductCatalog,
    min_rating: Option<&str>,
) -> CatalogResult<RatingResult> {
    let min = validate::validate_min_rating(min_rating)?;
    let products = query::filter_by_rating(catalog.products(), min);
    let analysis = analyze_rating(&products);

    let count = products.len();
    Ok(RatingResult {
        products,
        count,
        min_rating: min,
        analysis,
    })
}

/// Searches products by specification value.
///
/// # Errors
///
/// Validation errors for a missing, empty, or over-long term.
pub fn products_by_specification(
    catalog: &ProductCatalog,
    spec: Option<&str>,
) -> CatalogResult<SpecSearchResult> {
    let term = validate::validate_spec_term(spec)?;
    let products = query::search_by_specification(catalog.products(), &term);
    let analysis = analyze_specification(&products, &term);

    let count = products.len();
    Ok(SpecSearchResult {
        products,
        count,
        search_term: term,
        analysis,
    })
}
