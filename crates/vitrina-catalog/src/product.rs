//! The product record and its business rules.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An immutable product record.
///
/// Business rules (enforced on caller-supplied data, not on the static seed):
/// name at most 200 characters, description at most 1000 characters, price in
/// `[0, 1_000_000]`, rating in `[0, 5]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Positive integer, unique across the catalog, stable for the process
    /// lifetime.
    pub id: u64,

    /// Display name.
    pub name: String,

    /// Price in currency units.
    pub price: f64,

    /// Free-text description.
    pub description: String,

    /// URI-formatted image location. Existence is not validated.
    pub image_url: String,

    /// Rating in `[0, 5]` inclusive.
    pub rating: f64,

    /// Named technical attributes (e.g. "Pantalla" -> "6.1 pulgadas").
    /// Keys are unique per product; ordering is irrelevant.
    pub specs: BTreeMap<String, String>,
}

impl Product {
    /// Rating-per-currency-unit value score used by the best-value analysis.
    ///
    /// A zero price yields an infinite score, which sorts such products
    /// ahead of every paid one.
    #[must_use]
    pub fn value_score(&self) -> f64 {
        self.rating / self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: 7,
            name: "AirPods Pro 2".to_string(),
            price: 249.99,
            description: "Auriculares inalámbricos".to_string(),
            image_url: "https://example.com/images/airpods-pro-2.jpg".to_string(),
            rating: 4.7,
            specs: BTreeMap::from([("Tipo".to_string(), "Intraaurales".to_string())]),
        }
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(sample()).expect("serialization failed");
        assert_eq!(json["imageUrl"], "https://example.com/images/airpods-pro-2.jpg");
        assert_eq!(json["id"], 7);
        assert_eq!(json["specs"]["Tipo"], "Intraaurales");
    }

    #[test]
    fn test_roundtrip() {
        let product = sample();
        let json = serde_json::to_string(&product).expect("serialization failed");
        let parsed: Product = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(parsed, product);
    }

    #[test]
    fn test_value_score() {
        let product = sample();
        assert!((product.value_score() - 4.7 / 249.99).abs() < f64::EPSILON);

        let free = Product {
            price: 0.0,
            ..sample()
        };
        assert!(free.value_score().is_infinite());
    }
}
