//! Secondary analysis payloads attached to filter and search results.
//!
//! Every analysis has two shapes: a summary over the matched products, or a
//! fixed suggestion payload when nothing matched. The empty shape is
//! computed without touching the (empty) product set, so no averaging or
//! reducing ever runs over zero elements.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::product::Product;
use crate::stats::{rating_distribution, RatingDistribution};

/// Suggestion payload returned when a filter or search matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NoMatches {
    /// Human-readable explanation.
    pub message: String,
    /// Hints for widening the query.
    pub suggestions: Vec<String>,
}

fn mean(values: impl Iterator<Item = f64>, count: usize) -> f64 {
    values.sum::<f64>() / count as f64
}

// ---------------------------------------------------------------------------
// Price range analysis
// ---------------------------------------------------------------------------

/// Summary over a non-empty price-range result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriceRangeSummary {
    /// Mean price of the matched products.
    pub average_price: f64,
    /// Mean rating of the matched products.
    pub average_rating: f64,
    /// Share of the requested price span covered by the matched prices, in
    /// percent. `None` when the requested span is unbounded or zero-width.
    pub price_range_utilization: Option<f64>,
    /// The matched product with the highest rating/price ratio.
    pub best_value: Product,
}

/// Analysis attached to a price-range filter result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum PriceRangeAnalysis {
    /// At least one product matched.
    Matches(Box<PriceRangeSummary>),
    /// Nothing matched; fixed suggestions instead of arithmetic.
    Empty(NoMatches),
}

/// Analyzes a price-range filter result.
#[must_use]
pub fn analyze_price_range(products: &[Product], min: f64, max: f64) -> PriceRangeAnalysis {
    if products.is_empty() {
        return PriceRangeAnalysis::Empty(NoMatches {
            message: "No products found in the requested price range".to_string(),
            suggestions: vec![
                "Try widening the price range".to_string(),
                "Check that the bounds are correct".to_string(),
            ],
        });
    }

    let count = products.len();
    let span = max - min;
    let utilization = if span.is_finite() && span > 0.0 {
        let lowest = products.iter().map(|p| p.price).fold(f64::INFINITY, f64::min);
        let highest = products
            .iter()
            .map(|p| p.price)
            .fold(f64::NEG_INFINITY, f64::max);
        Some(((highest - lowest) / span) * 100.0)
    } else {
        None
    };

    let best_value = products
        .iter()
        .skip(1)
        .fold(&products[0], |best, current| {
            if current.value_score() > best.value_score() {
                current
            } else {
                best
            }
        })
        .clone();

    PriceRangeAnalysis::Matches(Box::new(PriceRangeSummary {
        average_price: mean(products.iter().map(|p| p.price), count),
        average_rating: mean(products.iter().map(|p| p.rating), count),
        price_range_utilization: utilization,
        best_value,
    }))
}

// ---------------------------------------------------------------------------
// Rating analysis
// ---------------------------------------------------------------------------

/// Summary over a non-empty rating filter result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    /// Mean price of the matched products.
    pub average_price: f64,
    /// Mean rating of the matched products.
    pub average_rating: f64,
    /// Rating distribution of the matched subset.
    pub rating_distribution: RatingDistribution,
    /// Up to three highest-rated matches, rating descending.
    pub top_rated: Vec<Product>,
}

/// Analysis attached to a rating filter result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum RatingAnalysis {
    /// At least one product matched.
    Matches(Box<RatingSummary>),
    /// Nothing matched; fixed suggestions instead of arithmetic.
    Empty(NoMatches),
}

/// Analyzes a rating filter result.
#[must_use]
pub fn analyze_rating(products: &[Product]) -> RatingAnalysis {
    if products.is_empty() {
        return RatingAnalysis::Empty(NoMatches {
            message: "No products found with the requested rating".to_string(),
            suggestions: vec![
                "Try lowering the minimum rating".to_string(),
                "Check that the value is between 0 and 5".to_string(),
            ],
        });
    }

    let count = products.len();
    let mut top_rated = products.to_vec();
    top_rated.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));
    top_rated.truncate(3);

    RatingAnalysis::Matches(Box::new(RatingSummary {
        average_price: mean(products.iter().map(|p| p.price), count),
        average_rating: mean(products.iter().map(|p| p.rating), count),
        rating_distribution: rating_distribution(products),
        top_rated,
    }))
}

// ---------------------------------------------------------------------------
// Specification search analysis
// ---------------------------------------------------------------------------

/// How often a specification name appeared among the matched values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SpecFrequency {
    /// The specification name (e.g. "Pantalla").
    pub specification: String,
    /// Number of matched products whose value under this name matched the
    /// search term.
    pub count: usize,
}

/// Summary over a non-empty specification search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpecSummary {
    /// Mean price of the matched products.
    pub average_price: f64,
    /// Mean rating of the matched products.
    pub average_rating: f64,
    /// Up to five most common matched specification names.
    pub common_specifications: Vec<SpecFrequency>,
    /// Up to three matched products, in catalog order.
    pub related_products: Vec<Product>,
}

/// Analysis attached to a specification search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum SpecAnalysis {
    /// At least one product matched.
    Matches(Box<SpecSummary>),
    /// Nothing matched; fixed suggestions instead of arithmetic.
    Empty(NoMatches),
}

/// Analyzes a specification search result.
#[must_use]
pub fn analyze_specification(products: &[Product], term: &str) -> SpecAnalysis {
    if products.is_empty() {
        return SpecAnalysis::Empty(NoMatches {
            message: "No products found with the requested specification".to_string(),
            suggestions: vec![
                "Try a more general term".to_string(),
                "Check the spelling of the search term".to_string(),
            ],
        });
    }

    let needle = term.to_lowercase();
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for p in products {
        for (name, value) in &p.specs {
            if value.to_lowercase().contains(&needle) {
                *counts.entry(name.as_str()).or_insert(0) += 1;
            }
        }
    }

    let mut common: Vec<SpecFrequency> = counts
        .into_iter()
        .map(|(specification, count)| SpecFrequency {
            specification: specification.to_string(),
            count,
        })
        .collect();
    common.sort_by(|a, b| b.count.cmp(&a.count));
    common.truncate(5);

    let count = products.len();
    SpecAnalysis::Matches(Box::new(SpecSummary {
        average_price: mean(products.iter().map(|p| p.price), count),
        average_rating: mean(products.iter().map(|p| p.rating), count),
        common_specifications: common,
        related_products: products.iter().take(3).cloned().collect(),
    }))
}
