//! Pure query functions over a product sequence.
//!
//! Every function here is a read-only transform: it takes a slice of
//! products plus already-normalized parameters and returns a fresh view.
//! Parameter validation happens upstream in [`crate::validate`].

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Case-insensitive substring search against product name or description.
///
/// An empty or whitespace-only term yields an empty result. Callers that
/// want "no filter" must skip the call entirely; this policy is part of the
/// API contract.
#[must_use]
pub fn search(products: &[Product], term: &str) -> Vec<Product> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }
    products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&term) || p.description.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

/// Case-insensitive substring search against any specification value.
///
/// Same empty-term policy as [`search`].
#[must_use]
pub fn search_by_specification(products: &[Product], term: &str) -> Vec<Product> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }
    products
        .iter()
        .filter(|p| p.specs.values().any(|v| v.to_lowercase().contains(&term)))
        .cloned()
        .collect()
}

/// Keeps products with `min <= price <= max` (inclusive on both ends).
#[must_use]
pub fn filter_by_price_range(products: &[Product], min: f64, max: f64) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.price >= min && p.price <= max)
        .cloned()
        .collect()
}

/// Keeps products with `rating >= min_rating` (inclusive).
#[must_use]
pub fn filter_by_rating(products: &[Product], min_rating: f64) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.rating >= min_rating)
        .cloned()
        .collect()
}

/// Pagination metadata for a sliced result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// 1-based page number.
    pub page: u32,
    /// Page size.
    pub limit: u32,
    /// Size of the full (possibly search-filtered) set.
    pub total: usize,
    /// `ceil(total / limit)`; defined as 0 when `limit` is 0.
    pub total_pages: usize,
    /// Whether a further page exists.
    pub has_next: bool,
    /// Whether a previous page exists (`page > 1`).
    pub has_prev: bool,
}

/// A page slice plus its pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Paginated {
    /// The sliced product sequence.
    pub products: Vec<Product>,
    /// Metadata describing the slice.
    pub pagination: PageInfo,
}

/// Slices a (possibly search-filtered) product sequence into one page.
///
/// When `term` is non-empty the sequence is first narrowed with [`search`];
/// `total` then refers to the filtered set. Parameters are expected to be
/// normalized already and are not re-validated here.
#[must_use]
pub fn paginate(products: &[Product], page: u32, limit: u32, term: &str) -> Paginated {
    let filtered = if term.trim().is_empty() {
        products.to_vec()
    } else {
        search(products, term)
    };

    let total = filtered.len();
    let limit_usize = limit as usize;
    let start = (page.saturating_sub(1) as usize).saturating_mul(limit_usize);
    let end = start.saturating_add(limit_usize);

    let slice = if start >= total {
        Vec::new()
    } else {
        filtered[start..end.min(total)].to_vec()
    };

    let total_pages = if limit == 0 { 0 } else { total.div_ceil(limit_usize) };

    Paginated {
        products: slice,
        pagination: PageInfo {
            page,
            limit,
            total,
            total_pages,
            has_next: end < total,
            has_prev: page > 1,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ProductCatalog;

    fn catalog() -> ProductCatalog {
        ProductCatalog::seed()
    }

    #[test]
    fn test_search_matches_name_and_description() {
        let catalog = catalog();

        let by_name = search(catalog.products(), "iphone");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, 1);

        // "chip" appears only in descriptions.
        let by_description = search(catalog.products(), "chip M2");
        let ids: Vec<u64> = by_description.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 5]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = catalog();
        assert_eq!(search(catalog.products(), "SONY").len(), 1);
        assert_eq!(search(catalog.products(), "sony").len(), 1);
    }

    #[test]
    fn test_empty_term_returns_nothing() {
        let catalog = catalog();
        assert!(search(catalog.products(), "").is_empty());
        assert!(search(catalog.products(), "   ").is_empty());
        assert!(search_by_specification(catalog.products(), "").is_empty());
        assert!(search_by_specification(catalog.products(), "  ").is_empty());
    }

    #[test]
    fn test_search_by_specification_matches_values() {
        let catalog = catalog();

        let bluetooth = search_by_specification(catalog.products(), "bluetooth");
        let ids: Vec<u64> = bluetooth.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4, 7]);

        // Spec keys are not searched, only values.
        assert!(search_by_specification(catalog.products(), "Almacenamiento").is_empty());
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let catalog = catalog();

        // Exact-price range includes the product itself, for every product.
        for p in catalog.products() {
            let hits = filter_by_price_range(catalog.products(), p.price, p.price);
            assert!(hits.iter().any(|h| h.id == p.id), "product {} missing", p.id);
        }

        let under_400 = filter_by_price_range(catalog.products(), 0.0, 399.99);
        let ids: Vec<u64> = under_400.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4, 7, 8, 10]);
    }

    #[test]
    fn test_rating_filter_is_inclusive() {
        let catalog = catalog();

        let top = filter_by_rating(catalog.products(), 4.8);
        let ids: Vec<u64> = top.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 4, 5, 9]);

        assert_eq!(filter_by_rating(catalog.products(), 0.0).len(), 10);
        assert!(filter_by_rating(catalog.products(), 5.0).is_empty());
    }

    #[test]
    fn test_paginate_arithmetic() {
        let catalog = catalog();

        let page = paginate(catalog.products(), 1, 3, "");
        assert_eq!(page.products.len(), 3);
        assert_eq!(page.pagination.total, 10);
        assert_eq!(page.pagination.total_pages, 4);
        assert!(page.pagination.has_next);
        assert!(!page.pagination.has_prev);

        let last = paginate(catalog.products(), 4, 3, "");
        assert_eq!(last.products.len(), 1);
        assert!(!last.pagination.has_next);
        assert!(last.pagination.has_prev);
    }

    #[test]
    fn test_paginate_past_the_end() {
        let catalog = catalog();
        let page = paginate(catalog.products(), 50, 10, "");
        assert!(page.products.is_empty());
        assert_eq!(page.pagination.total, 10);
        assert!(!page.pagination.has_next);
        assert!(page.pagination.has_prev);
    }

    #[test]
    fn test_paginate_with_search_term() {
        let catalog = catalog();
        let page = paginate(catalog.products(), 1, 10, "consola");
        assert_eq!(page.pagination.total, 2);
        assert_eq!(page.pagination.total_pages, 1);
        let ids: Vec<u64> = page.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![8, 9]);
    }

    #[test]
    fn test_paginate_zero_limit_defines_zero_pages() {
        let catalog = catalog();
        let page = paginate(catalog.products(), 1, 0, "");
        assert!(page.products.is_empty());
        assert_eq!(page.pagination.total_pages, 0);
        assert_eq!(page.pagination.total, 10);
    }

    #[test]
    fn test_page_info_serialization() {
        let info = PageInfo {
            page: 2,
            limit: 5,
            total: 10,
            total_pages: 2,
            has_next: false,
            has_prev: true,
        };
        let json = serde_json::to_value(&info).expect("serialization failed");
        assert_eq!(json["totalPages"], 2);
        assert_eq!(json["hasNext"], false);
        assert_eq!(json["hasPrev"], true);
    }
}
