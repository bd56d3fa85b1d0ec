//! Parameter validation and normalization.
//!
//! Every validator takes the raw textual input as it arrived at the
//! boundary, returns a normalized and bounded value, and fails fast with a
//! [`CatalogError::Validation`] carrying a stable code. Nothing here
//! panics; a failed validation is an ordinary value.

use crate::error::{CatalogError, CatalogResult};

/// Hard cap on the page number.
pub const MAX_PAGE: u32 = 1000;
/// Hard cap on the page size.
pub const MAX_LIMIT: u32 = 100;
/// Hard cap on the free-text search term length.
pub const MAX_QUERY_LEN: usize = 100;
/// Hard cap on the specification term length.
pub const MAX_SPEC_LEN: usize = 200;
/// Hard cap on a single price bound.
pub const MAX_PRICE: f64 = 1_000_000.0;
/// Hard cap on the rating bound.
pub const MAX_RATING: f64 = 5.0;
/// Hard cap on the bulk id list length.
pub const MAX_BULK_IDS: usize = 20;

/// Normalized pagination parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    /// 1-based page number in `1..=1000`.
    pub page: u32,
    /// Page size in `1..=100`.
    pub limit: u32,
}

/// Normalized price bounds. `max` is `f64::INFINITY` when unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBounds {
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound.
    pub max: f64,
}

/// Validates pagination parameters.
///
/// Absent values default to page 1 / limit 10. Non-integer input is
/// rejected the same way as an out-of-range value.
///
/// # Errors
///
/// `INVALID_PAGE`, `PAGE_TOO_LARGE`, `INVALID_LIMIT`, or `LIMIT_TOO_LARGE`.
pub fn validate_pagination(page: Option<&str>, limit: Option<&str>) -> CatalogResult<PageParams> {
    let page = match trimmed(page) {
        None => 1,
        Some(raw) => {
            let value: i64 = raw.parse().map_err(|_| CatalogError::invalid_page())?;
            if value < 1 {
                return Err(CatalogError::invalid_page());
            }
            if value > i64::from(MAX_PAGE) {
                return Err(CatalogError::page_too_large());
            }
            u32::try_from(value).map_err(|_| CatalogError::page_too_large())?
        }
    };

    let limit = match trimmed(limit) {
        None => 10,
        Some(raw) => {
            let value: i64 = raw.parse().map_err(|_| CatalogError::invalid_limit())?;
            if value < 1 {
                return Err(CatalogError::invalid_limit());
            }
            if value > i64::from(MAX_LIMIT) {
                return Err(CatalogError::limit_too_large());
            }
            u32::try_from(value).map_err(|_| CatalogError::limit_too_large())?
        }
    };

    Ok(PageParams { page, limit })
}

/// Validates and sanitizes the free-text search term.
///
/// Absent input normalizes to an empty term (which downstream search treats
/// as "match nothing"). Angle brackets are stripped after the length check.
///
/// # Errors
///
/// `QUERY_TOO_LONG` when the raw term exceeds 100 characters.
pub fn validate_search_term(query: Option<&str>) -> CatalogResult<String> {
    let Some(raw) = query else {
        return Ok(String::new());
    };
    if raw.chars().count() > MAX_QUERY_LEN {
        return Err(CatalogError::query_too_long());
    }
    Ok(sanitize_term(raw))
}

/// Validates price bounds.
///
/// Absent or unparseable values fall back to the defaults (min 0, max
/// unbounded); the cap applies only to an explicitly supplied maximum.
///
/// # Errors
///
/// `NEGATIVE_MIN_PRICE`, `NEGATIVE_MAX_PRICE`, `INVALID_PRICE_RANGE`, or
/// `PRICE_TOO_HIGH`.
pub fn validate_price_range(
    min_price: Option<&str>,
    max_price: Option<&str>,
) -> CatalogResult<PriceBounds> {
    let min = parse_float_or(min_price, 0.0);
    let max = parse_float_or(max_price, f64::INFINITY);

    if min < 0.0 {
        return Err(CatalogError::negative_min_price());
    }
    if max < 0.0 {
        return Err(CatalogError::negative_max_price());
    }
    if min > max {
        return Err(CatalogError::invalid_price_range());
    }
    if max.is_finite() && max > MAX_PRICE {
        return Err(CatalogError::price_too_high());
    }
    if min > MAX_PRICE {
        return Err(CatalogError::price_too_high());
    }

    Ok(PriceBounds { min, max })
}

/// Validates the minimum rating bound.
///
/// Absent or unparseable input defaults to 0.
///
/// # Errors
///
/// `NEGATIVE_RATING` or `RATING_TOO_HIGH`.
pub fn validate_min_rating(min_rating: Option<&str>) -> CatalogResult<f64> {
    let min = parse_float_or(min_rating, 0.0);
    if min < 0.0 {
        return Err(CatalogError::negative_rating());
    }
    if min > MAX_RATING {
        return Err(CatalogError::rating_too_high());
    }
    Ok(min)
}

/// Validates and sanitizes the specification search term.
///
/// # Errors
///
/// `MISSING_SPEC`, `EMPTY_SPEC`, or `SPEC_TOO_LONG`.
pub fn validate_spec_term(spec: Option<&str>) -> CatalogResult<String> {
    let Some(raw) = spec else {
        return Err(CatalogError::missing_spec());
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::empty_spec());
    }
    if trimmed.chars().count() > MAX_SPEC_LEN {
        return Err(CatalogError::spec_too_long());
    }
    Ok(strip_angle_brackets(trimmed))
}

/// Parses a comma-separated id list into positive integers.
///
/// # Errors
///
/// `MISSING_IDS`, `TOO_MANY_IDS`, or `INVALID_ID` (any token that is not a
/// positive integer).
pub fn validate_ids(ids: Option<&str>) -> CatalogResult<Vec<u64>> {
    let Some(raw) = trimmed(ids) else {
        return Err(CatalogError::missing_ids());
    };

    let tokens: Vec<&str> = raw.split(',').map(str::trim).collect();
    if tokens.len() > MAX_BULK_IDS {
        return Err(CatalogError::too_many_ids());
    }

    let mut parsed = Vec::with_capacity(tokens.len());
    for token in tokens {
        let id: u64 = token
            .parse()
            .map_err(|_| CatalogError::invalid_id(token))?;
        if id == 0 {
            return Err(CatalogError::invalid_id(token));
        }
        parsed.push(id);
    }
    Ok(parsed)
}

/// Trims a term and strips angle brackets, the one character class the
/// original API refused to echo back.
#[must_use]
pub fn sanitize_term(raw: &str) -> String {
    strip_angle_brackets(raw.trim())
}

fn strip_angle_brackets(value: &str) -> String {
    value.chars().filter(|c| *c != '<' && *c != '>').collect()
}

fn trimmed(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_float_or(value: Option<&str>, default: f64) -> f64 {
    trimmed(value)
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(err: &CatalogError) -> &'static str {
        err.code()
    }

    #[test]
    fn test_pagination_defaults() {
        let params = validate_pagination(None, None).expect("defaults");
        assert_eq!(params, PageParams { page: 1, limit: 10 });
    }

    #[test]
    fn test_pagination_bounds() {
        assert_eq!(
            code(&validate_pagination(Some("0"), None).unwrap_err()),
            "INVALID_PAGE"
        );
        assert_eq!(
            code(&validate_pagination(Some("-3"), None).unwrap_err()),
            "INVALID_PAGE"
        );
        assert_eq!(
            code(&validate_pagination(Some("1001"), None).unwrap_err()),
            "PAGE_TOO_LARGE"
        );
        assert_eq!(
            code(&validate_pagination(None, Some("0")).unwrap_err()),
            "INVALID_LIMIT"
        );
        assert_eq!(
            code(&validate_pagination(None, Some("101")).unwrap_err()),
            "LIMIT_TOO_LARGE"
        );

        let params = validate_pagination(Some("1000"), Some("100")).expect("at the caps");
        assert_eq!(params.page, 1000);
        assert_eq!(params.limit, 100);
    }

    #[test]
    fn test_pagination_rejects_non_integers() {
        assert_eq!(
            code(&validate_pagination(Some("abc"), None).unwrap_err()),
            "INVALID_PAGE"
        );
        assert_eq!(
            code(&validate_pagination(Some("2.5"), None).unwrap_err()),
            "INVALID_PAGE"
        );
        assert_eq!(
            code(&validate_pagination(None, Some("ten")).unwrap_err()),
            "INVALID_LIMIT"
        );
    }

    #[test]
    fn test_search_term_sanitization() {
        assert_eq!(validate_search_term(None).expect("absent"), "");
        assert_eq!(validate_search_term(Some("  iphone  ")).expect("trim"), "iphone");
        assert_eq!(
            validate_search_term(Some("<script>alert</script>")).expect("strip"),
            "scriptalert/script"
        );

        let long = "x".repeat(101);
        assert_eq!(
            code(&validate_search_term(Some(&long)).unwrap_err()),
            "QUERY_TOO_LONG"
        );
    }

    #[test]
    fn test_price_range_defaults_and_bounds() {
        let bounds = validate_price_range(None, None).expect("defaults");
        assert_eq!(bounds.min, 0.0);
        assert!(bounds.max.is_infinite());

        // Unparseable input falls back to the defaults.
        let bounds = validate_price_range(Some("cheap"), Some("expensive")).expect("fallback");
        assert_eq!(bounds.min, 0.0);
        assert!(bounds.max.is_infinite());

        assert_eq!(
            code(&validate_price_range(Some("-1"), None).unwrap_err()),
            "NEGATIVE_MIN_PRICE"
        );
        assert_eq!(
            code(&validate_price_range(None, Some("-5")).unwrap_err()),
            "NEGATIVE_MAX_PRICE"
        );
        assert_eq!(
            code(&validate_price_range(Some("500"), Some("100")).unwrap_err()),
            "INVALID_PRICE_RANGE"
        );
        assert_eq!(
            code(&validate_price_range(None, Some("1000001")).unwrap_err()),
            "PRICE_TOO_HIGH"
        );
        assert_eq!(
            code(&validate_price_range(Some("2000000"), None).unwrap_err()),
            "PRICE_TOO_HIGH"
        );
    }

    #[test]
    fn test_min_rating_bounds() {
        assert_eq!(validate_min_rating(None).expect("default"), 0.0);
        assert_eq!(validate_min_rating(Some("4.5")).expect("parsed"), 4.5);
        assert_eq!(validate_min_rating(Some("great")).expect("fallback"), 0.0);
        assert_eq!(
            code(&validate_min_rating(Some("-0.1")).unwrap_err()),
            "NEGATIVE_RATING"
        );
        assert_eq!(
            code(&validate_min_rating(Some("5.1")).unwrap_err()),
            "RATING_TOO_HIGH"
        );
    }

    #[test]
    fn test_spec_term() {
        assert_eq!(code(&validate_spec_term(None).unwrap_err()), "MISSING_SPEC");
        assert_eq!(
            code(&validate_spec_term(Some("   ")).unwrap_err()),
            "EMPTY_SPEC"
        );
        let long = "x".repeat(201);
        assert_eq!(
            code(&validate_spec_term(Some(&long)).unwrap_err()),
            "SPEC_TOO_LONG"
        );
        assert_eq!(
            validate_spec_term(Some(" <b>OLED</b> ")).expect("sanitized"),
            "bOLED/b"
        );
    }

    #[test]
    fn test_ids_list() {
        assert_eq!(code(&validate_ids(None).unwrap_err()), "MISSING_IDS");
        assert_eq!(code(&validate_ids(Some("  ")).unwrap_err()), "MISSING_IDS");

        assert_eq!(
            validate_ids(Some("1, 2,3")).expect("parsed"),
            vec![1, 2, 3]
        );

        assert_eq!(code(&validate_ids(Some("1,,3")).unwrap_err()), "INVALID_ID");
        assert_eq!(code(&validate_ids(Some("1,abc")).unwrap_err()), "INVALID_ID");
        assert_eq!(code(&validate_ids(Some("0")).unwrap_err()), "INVALID_ID");
        assert_eq!(code(&validate_ids(Some("-2")).unwrap_err()), "INVALID_ID");

        let twenty_one = (1..=21)
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(",");
        assert_eq!(
            code(&validate_ids(Some(&twenty_one)).unwrap_err()),
            "TOO_MANY_IDS"
        );

        let twenty = (1..=20)
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(",");
        assert_eq!(validate_ids(Some(&twenty)).expect("at the cap").len(), 20);
    }
}
