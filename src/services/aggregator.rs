//! Aggregator service for research statistics
//!
//! Selectivity is the share of analyzed items that made the final list;
//! rejection is the share that was filtered out. Both are percentages
//! rounded to one decimal.

use crate::types::{
    Category, CategoryAggregate, DiversityMetric, PageMeta, PageStats, PriceRange, SiteConfig,
    SiteStats,
};

/// Round the exact binary value to one decimal place. Exact ties (x.25,
/// x.75) round away from zero; everything else goes to the nearest digit.
fn round1(value: f64) -> f64 {
    let magnitude = value.abs();
    let quarters = magnitude * 4.0;
    let rounded = if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        (magnitude * 10.0).ceil() / 10.0
    } else {
        format!("{:.1}", magnitude).parse().unwrap_or(magnitude)
    };
    rounded.copysign(value)
}

/// featured / analyzed × 100, one decimal. Zero when either count is zero.
pub fn selectivity(featured: u64, analyzed: u64) -> f64 {
    if analyzed == 0 || featured == 0 {
        return 0.0;
    }
    round1(featured as f64 / analyzed as f64 * 100.0)
}

/// 100 − selectivity, one decimal. Zero when nothing was analyzed.
pub fn rejection_rate(featured: u64, analyzed: u64) -> f64 {
    if analyzed == 0 {
        return 0.0;
    }
    round1(100.0 - selectivity(featured, analyzed))
}

/// Fixed one-decimal rendering: 10.0 → "10.0"
pub fn format_percent(value: f64) -> String {
    format!("{:.1}", value)
}

/// Format number with thousands separators: 12345 → "12,345"
pub fn format_number(n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let s = n.to_string();
    let len = s.len();
    let mut result = String::with_capacity(len + len / 3);

    // Digits are ASCII, so byte indexing is safe
    for (i, ch) in s.bytes().enumerate() {
        if i > 0 && (len - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(ch as char);
    }

    result
}

fn format_price_range(range: &PriceRange) -> String {
    match range {
        PriceRange::Display(s) => s.clone(),
        PriceRange::Bounds { min, max, .. } => {
            let bound = |v: &Option<f64>| v.map(|n| format!("{:.2}", n)).unwrap_or("?".into());
            format!("${}-${}", bound(min), bound(max))
        }
    }
}

/// Aggregator for page, category and site statistics
pub struct Aggregator;

impl Aggregator {
    /// Stats for one page summary, with display strings for present metadata
    pub fn page_stats(page: &PageMeta) -> PageStats {
        let analyzed = page.analyzed();
        let featured = page.featured();
        let metadata = page.metadata.clone().unwrap_or_default();

        PageStats {
            items_analyzed: analyzed,
            items_featured: featured,
            selectivity: selectivity(featured, analyzed),
            rejection_rate: rejection_rate(featured, analyzed),
            has_stats: analyzed > 0,
            reviews_display: metadata
                .total_reviews
                .filter(|&n| n > 0)
                .map(|n| format!("{}+ verified reviews", format_number(n))),
            price_display: metadata.price_range.as_ref().map(format_price_range),
            rating_display: metadata
                .avg_rating
                .filter(|&r| r != 0.0)
                .map(|r| format!("{:.1}★ average", r)),
            diversity_display: metadata
                .diversity_metric
                .as_ref()
                .map(|m| format!("{} {}", m.count, m.label)),
            avg_rating: metadata.avg_rating,
            total_reviews: metadata.total_reviews,
            price_range: metadata.price_range,
            diversity_metric: metadata.diversity_metric,
        }
    }

    /// Sum page counts and merge diversity metrics (max count per type)
    pub fn category_stats(category: &Category) -> CategoryAggregate {
        let mut total_analyzed: u64 = 0;
        let mut total_featured: u64 = 0;
        let mut diversity_metrics: Vec<DiversityMetric> = Vec::new();

        for page in &category.pages {
            total_analyzed = total_analyzed.saturating_add(page.analyzed());
            total_featured = total_featured.saturating_add(page.featured());

            if let Some(metric) = page.diversity_metric() {
                match diversity_metrics.iter_mut().find(|m| m.kind == metric.kind) {
                    Some(existing) => existing.count = existing.count.max(metric.count),
                    None => diversity_metrics.push(metric.clone()),
                }
            }
        }

        CategoryAggregate {
            total_analyzed,
            total_featured,
            selectivity: selectivity(total_featured, total_analyzed),
            rejection_rate: rejection_rate(total_featured, total_analyzed),
            total_pages: category.pages.len(),
            diversity_metrics,
            has_stats: total_analyzed > 0,
        }
    }

    /// Configured site stats, or totals derived from categories and articles
    pub fn site_stats(config: &SiteConfig) -> SiteStats {
        if let Some(stats) = &config.stats {
            return stats.clone();
        }

        let mut stats = SiteStats {
            total_categories: config.categories.len() as u64,
            total_articles: Some(config.articles.len() as u64),
            total_articles_published: Some(
                config.articles.iter().filter(|a| a.is_published()).count() as u64,
            ),
            ..Default::default()
        };

        for category in &config.categories {
            let aggregate = Self::category_stats(category);
            stats.total_items_analyzed = stats
                .total_items_analyzed
                .saturating_add(aggregate.total_analyzed);
            stats.total_items_featured = stats
                .total_items_featured
                .saturating_add(aggregate.total_featured);
            stats.total_pages = stats
                .total_pages
                .saturating_add(aggregate.total_pages as u64);
        }

        stats
    }
}
