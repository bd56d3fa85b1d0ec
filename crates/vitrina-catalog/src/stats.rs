//! Aggregate statistics over a product sequence.
//!
//! [`compute_stats`] produces the base aggregate; the category, price
//! segment, and rating distribution breakdowns are deterministic
//! post-processing over the same input. Bucket names, segment keys, and
//! threshold values are wire contract.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Minimum and maximum of a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RangeStat {
    /// Smallest observed value (0 for an empty input).
    pub min: f64,
    /// Largest observed value (0 for an empty input).
    pub max: f64,
}

/// Base aggregate over a product sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    /// Number of products.
    pub total: usize,
    /// Arithmetic mean of prices (0 for an empty input).
    pub average_price: f64,
    /// Arithmetic mean of ratings (0 for an empty input).
    pub average_rating: f64,
    /// Observed price range.
    pub price_range: RangeStat,
    /// Observed rating range.
    pub rating_range: RangeStat,
}

/// Computes the base aggregate.
///
/// An empty input yields all-zero counts, averages, and ranges rather than
/// NaN from an empty reduce.
#[must_use]
pub fn compute_stats(products: &[Product]) -> CatalogStats {
    if products.is_empty() {
        return CatalogStats {
            total: 0,
            average_price: 0.0,
            average_rating: 0.0,
            price_range: RangeStat { min: 0.0, max: 0.0 },
            rating_range: RangeStat { min: 0.0, max: 0.0 },
        };
    }

    let count = products.len() as f64;
    let price_sum: f64 = products.iter().map(|p| p.price).sum();
    let rating_sum: f64 = products.iter().map(|p| p.rating).sum();

    CatalogStats {
        total: products.len(),
        average_price: price_sum / count,
        average_rating: rating_sum / count,
        price_range: RangeStat {
            min: products.iter().map(|p| p.price).fold(f64::INFINITY, f64::min),
            max: products.iter().map(|p| p.price).fold(f64::NEG_INFINITY, f64::max),
        },
        rating_range: RangeStat {
            min: products.iter().map(|p| p.rating).fold(f64::INFINITY, f64::min),
            max: products.iter().map(|p| p.rating).fold(f64::NEG_INFINITY, f64::max),
        },
    }
}

/// One category bucket in the category breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBucket {
    /// Number of products in the bucket.
    pub count: usize,
    /// Mean price of the bucket.
    pub average_price: f64,
    /// Mean rating of the bucket.
    pub average_rating: f64,
    /// The bucketed products, in catalog order.
    pub products: Vec<Product>,
}

/// Buckets products by name keyword.
///
/// Bucket names ("Smartphones", "Laptops", "Tablets", "Audio", "Gaming",
/// "Wearables", "Otros") are part of the response contract.
#[must_use]
pub fn categorize(products: &[Product]) -> BTreeMap<String, CategoryBucket> {
    let mut grouped: BTreeMap<String, Vec<Product>> = BTreeMap::new();
    for p in products {
        grouped
            .entry(category_of(&p.name).to_string())
            .or_default()
            .push(p.clone());
    }

    grouped
        .into_iter()
        .map(|(name, members)| {
            let count = members.len();
            let denom = count as f64;
            let average_price = members.iter().map(|p| p.price).sum::<f64>() / denom;
            let average_rating = members.iter().map(|p| p.rating).sum::<f64>() / denom;
            (
                name,
                CategoryBucket {
                    count,
                    average_price,
                    average_rating,
                    products: members,
                },
            )
        })
        .collect()
}

fn category_of(name: &str) -> &'static str {
    let name = name.to_lowercase();
    if name.contains("iphone") || name.contains("galaxy") {
        "Smartphones"
    } else if name.contains("macbook") || name.contains("dell") {
        "Laptops"
    } else if name.contains("ipad") {
        "Tablets"
    } else if name.contains("airpods") || name.contains("sony") {
        "Audio"
    } else if name.contains("nintendo") || name.contains("playstation") {
        "Gaming"
    } else if name.contains("apple watch") {
        "Wearables"
    } else {
        "Otros"
    }
}

/// One fixed price segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PriceSegment {
    /// Lower bound of the segment (inclusive).
    pub min: f64,
    /// Upper bound of the segment (exclusive); `None` when unbounded.
    pub max: Option<f64>,
    /// Number of products in the segment.
    pub count: usize,
    /// The segmented products, in catalog order.
    pub products: Vec<Product>,
}

/// Price segmentation at the fixed thresholds {300, 800, 1200}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriceSegments {
    /// Price below 300.
    pub budget: PriceSegment,
    /// Price in `[300, 800)`.
    pub mid_range: PriceSegment,
    /// Price in `[800, 1200)`.
    pub premium: PriceSegment,
    /// Price at or above 1200.
    pub luxury: PriceSegment,
}

/// Segments products into the fixed price bands.
#[must_use]
pub fn price_segments(products: &[Product]) -> PriceSegments {
    let mut segments = PriceSegments {
        budget: empty_segment(0.0, Some(300.0)),
        mid_range: empty_segment(300.0, Some(800.0)),
        premium: empty_segment(800.0, Some(1200.0)),
        luxury: empty_segment(1200.0, None),
    };

    for p in products {
        let segment = if p.price < 300.0 {
            &mut segments.budget
        } else if p.price < 800.0 {
            &mut segments.mid_range
        } else if p.price < 1200.0 {
            &mut segments.premium
        } else {
            &mut segments.luxury
        };
        segment.count += 1;
        segment.products.push(p.clone());
    }

    segments
}

fn empty_segment(min: f64, max: Option<f64>) -> PriceSegment {
    PriceSegment {
        min,
        max,
        count: 0,
        products: Vec::new(),
    }
}

/// One band of the rating distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RatingBand {
    /// Lower bound of the band (inclusive).
    pub min: f64,
    /// Upper bound of the band.
    pub max: f64,
    /// Number of products in the band.
    pub count: usize,
    /// Share of the input, in percent (0 for an empty input).
    pub percentage: f64,
}

/// Rating distribution at the fixed thresholds {4.5, 4.0, 3.0}.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RatingDistribution {
    /// Rating at or above 4.5.
    pub excellent: RatingBand,
    /// Rating in `[4.0, 4.5)`.
    pub good: RatingBand,
    /// Rating in `[3.0, 4.0)`.
    pub average: RatingBand,
    /// Rating below 3.0.
    pub poor: RatingBand,
}

/// Computes the rating distribution.
///
/// Percentages are 0 (not NaN) for an empty input.
#[must_use]
pub fn rating_distribution(products: &[Product]) -> RatingDistribution {
    let mut excellent = 0usize;
    let mut good = 0usize;
    let mut average = 0usize;
    let mut poor = 0usize;

    for p in products {
        if p.rating >= 4.5 {
            excellent += 1;
        } else if p.rating >= 4.0 {
            good += 1;
        } else if p.rating >= 3.0 {
            average += 1;
        } else {
            poor += 1;
        }
    }

    let total = products.len();
    let band = |min: f64, max: f64, count: usize| RatingBand {
        min,
        max,
        count,
        percentage: if total == 0 {
            0.0
        } else {
            (count as f64 / total as f64) * 100.0
        },
    };

    RatingDistribution {
        excellent: band(4.5, 5.0, excellent),
        good: band(4.0, 4.5, good),
        average: band(3.0, 4.0, average),
        poor: band(0.0, 3.0, poor),
    }
}

/// The full statistics payload: base aggregate plus derived breakdowns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    /// Base aggregate over the catalog.
    #[serde(flatten)]
    pub stats: CatalogStats,
    /// Category breakdown keyed by bucket name.
    pub categories: BTreeMap<String, CategoryBucket>,
    /// Fixed price segmentation.
    pub price_segments: PriceSegments,
    /// Fixed rating distribution.
    pub rating_distribution: RatingDistribution,
    /// When this report was computed.
    pub last_updated: DateTime<Utc>,
}
