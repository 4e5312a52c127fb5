//! Derived statistics for pages and categories

use serde::Serialize;

use super::{DiversityMetric, PriceRange};

/// Per-page research stats with preformatted display strings
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStats {
    pub items_analyzed: u64,
    pub items_featured: u64,
    pub selectivity: f64,
    pub rejection_rate: f64,
    pub has_stats: bool,
    pub avg_rating: Option<f64>,
    pub total_reviews: Option<u64>,
    pub price_range: Option<PriceRange>,
    pub diversity_metric: Option<DiversityMetric>,
    pub reviews_display: Option<String>,
    pub price_display: Option<String>,
    pub rating_display: Option<String>,
    pub diversity_display: Option<String>,
}

/// Category-level totals across all of its pages
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAggregate {
    pub total_analyzed: u64,
    pub total_featured: u64,
    pub selectivity: f64,
    pub rejection_rate: f64,
    pub total_pages: usize,
    /// One entry per metric type, in first-seen order
    pub diversity_metrics: Vec<DiversityMetric>,
    pub has_stats: bool,
}
