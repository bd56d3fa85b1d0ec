//! Error types for catalog operations.
//!
//! Error codes are stable strings consumed by existing clients; the REST
//! layer maps them to HTTP statuses without rewriting them.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Caller input is out of bounds or malformed. Always recoverable.
    #[error("{message}")]
    Validation {
        /// Human-readable error message.
        message: String,
        /// Stable machine-readable code (e.g. `INVALID_PAGE`).
        code: &'static str,
        /// The offending parameter name.
        field: &'static str,
    },

    /// A requested product (or set of products) is absent from the catalog.
    #[error("{message}")]
    NotFound {
        /// Human-readable error message.
        message: String,
        /// Stable machine-readable code (e.g. `PRODUCT_NOT_FOUND`).
        code: &'static str,
    },

    /// Unexpected failure in aggregate computation or result shaping.
    #[error("{message}")]
    Internal {
        /// Human-readable error message.
        message: String,
    },
}

impl CatalogError {
    /// Page number below 1 or not an integer.
    #[must_use]
    pub fn invalid_page() -> Self {
        Self::Validation {
            message: "Page number must be an integer greater than 0".to_string(),
            code: "INVALID_PAGE",
            field: "page",
        }
    }

    /// Page number above the 1000-page cap.
    #[must_use]
    pub fn page_too_large() -> Self {
        Self::Validation {
            message: "Page number cannot be greater than 1000".to_string(),
            code: "PAGE_TOO_LARGE",
            field: "page",
        }
    }

    /// Page size below 1 or not an integer.
    #[must_use]
    pub fn invalid_limit() -> Self {
        Self::Validation {
            message: "Limit must be an integer greater than 0".to_string(),
            code: "INVALID_LIMIT",
            field: "limit",
        }
    }

    /// Page size above the 100-item cap.
    #[must_use]
    pub fn limit_too_large() -> Self {
        Self::Validation {
            message: "Limit cannot be greater than 100".to_string(),
            code: "LIMIT_TOO_LARGE",
            field: "limit",
        }
    }

    /// Search term longer than 100 characters.
    #[must_use]
    pub fn query_too_long() -> Self {
        Self::Validation {
            message: "Search term cannot exceed 100 characters".to_string(),
            code: "QUERY_TOO_LONG",
            field: "q",
        }
    }

    /// Negative minimum price.
    #[must_use]
    pub fn negative_min_price() -> Self {
        Self::Validation {
            message: "Minimum price cannot be negative".to_string(),
            code: "NEGATIVE_MIN_PRICE",
            field: "minPrice",
        }
    }

    /// Negative maximum price.
    #[must_use]
    pub fn negative_max_price() -> Self {
        Self::Validation {
            message: "Maximum price cannot be negative".to_string(),
            code: "NEGATIVE_MAX_PRICE",
            field: "maxPrice",
        }
    }

    /// Minimum price above maximum price.
    #[must_use]
    pub fn invalid_price_range() -> Self {
        Self::Validation {
            message: "Minimum price cannot be greater than maximum price".to_string(),
            code: "INVALID_PRICE_RANGE",
            field: "minPrice",
        }
    }

    /// Maximum price above the $1,000,000 cap.
    #[must_use]
    pub fn price_too_high() -> Self {
        Self::Validation {
            message: "Maximum price cannot exceed $1,000,000".to_string(),
            code: "PRICE_TOO_HIGH",
            field: "maxPrice",
        }
    }

    /// Negative minimum rating.
    #[must_use]
    pub fn negative_rating() -> Self {
        Self::Validation {
            message: "Minimum rating cannot be negative".to_string(),
            code: "NEGATIVE_RATING",
            field: "minRating",
        }
    }

    /// Minimum rating above 5.
    #[must_use]
    pub fn rating_too_high() -> Self {
        Self::Validation {
            message: "Minimum rating cannot be greater than 5".to_string(),
            code: "RATING_TOO_HIGH",
            field: "minRating",
        }
    }

    /// Specification term absent from the request.
    #[must_use]
    pub fn missing_spec() -> Self {
        Self::Validation {
            message: "Specification term is required".to_string(),
            code: "MISSING_SPEC",
            field: "spec",
        }
    }

    /// Specification term empty after trimming.
    #[must_use]
    pub fn empty_spec() -> Self {
        Self::Validation {
            message: "Specification term cannot be empty".to_string(),
            code: "EMPTY_SPEC",
            field: "spec",
        }
    }

    /// Specification term longer than 200 characters.
    #[must_use]
    pub fn spec_too_long() -> Self {
        Self::Validation {
            message: "Specification term cannot exceed 200 characters".to_string(),
            code: "SPEC_TOO_LONG",
            field: "spec",
        }
    }

    /// Bulk id list absent from the request.
    #[must_use]
    pub fn missing_ids() -> Self {
        Self::Validation {
            message: "The ids parameter is required".to_string(),
            code: "MISSING_IDS",
            field: "ids",
        }
    }

    /// Bulk id list longer than 20 entries.
    #[must_use]
    pub fn too_many_ids() -> Self {
        Self::Validation {
            message: "Cannot request more than 20 products at a time".to_string(),
            code: "TOO_MANY_IDS",
            field: "ids",
        }
    }

    /// A bulk id token that is not a positive integer.
    #[must_use]
    pub fn invalid_id(token: &str) -> Self {
        Self::Validation {
            message: format!("Invalid id: {token}"),
            code: "INVALID_ID",
            field: "ids",
        }
    }

    /// Single lookup for an id with no catalog entry.
    #[must_use]
    pub fn product_not_found(raw_id: &str) -> Self {
        Self::NotFound {
            message: format!("Product with id {raw_id} not found"),
            code: "PRODUCT_NOT_FOUND",
        }
    }

    /// Bulk lookup where one or more ids have no catalog entry.
    #[must_use]
    pub fn products_not_found(missing: &[u64]) -> Self {
        let ids = missing
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Self::NotFound {
            message: format!("The following products were not found: {ids}"),
            code: "PRODUCTS_NOT_FOUND",
        }
    }

    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Validation { code, .. } | Self::NotFound { code, .. } => code,
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Returns the human-readable error message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. }
            | Self::NotFound { message, .. }
            | Self::Internal { message } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_codes() {
        assert_eq!(CatalogError::invalid_page().code(), "INVALID_PAGE");
        assert_eq!(CatalogError::limit_too_large().code(), "LIMIT_TOO_LARGE");
        assert_eq!(CatalogError::too_many_ids().code(), "TOO_MANY_IDS");
        assert_eq!(
            CatalogError::invalid_price_range().code(),
            "INVALID_PRICE_RANGE"
        );
    }

    #[test]
    fn test_not_found_messages() {
        let err = CatalogError::products_not_found(&[3, 99]);
        assert_eq!(err.code(), "PRODUCTS_NOT_FOUND");
        assert!(err.message().contains("3, 99"));

        let err = CatalogError::product_not_found("42");
        assert_eq!(err.code(), "PRODUCT_NOT_FOUND");
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn test_internal_code() {
        let err = CatalogError::Internal {
            message: "stats failed".to_string(),
        };
        assert_eq!(err.code(), "INTERNAL_ERROR");
    }
}
