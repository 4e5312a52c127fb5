//! `picksite stats` subcommand: research aggregates per category

use clap::Args;
use serde::Serialize;

use crate::services::aggregator::{format_number, format_percent, Aggregator};
use crate::types::{CategoryAggregate, SiteConfig, SiteStats};

/// Show site and per-category research stats
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    pub site: SiteStats,
    pub categories: Vec<CategoryReport>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryReport {
    pub category_id: String,
    pub category_title: String,
    #[serde(flatten)]
    pub stats: CategoryAggregate,
}

impl StatsReport {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            site: Aggregator::site_stats(config),
            categories: config
                .categories
                .iter()
                .map(|c| CategoryReport {
                    category_id: c.category_id.clone(),
                    category_title: c.category_title.clone(),
                    stats: Aggregator::category_stats(c),
                })
                .collect(),
        }
    }

    /// Plain-text table with a totals line
    pub fn to_table(&self) -> String {
        let width = self
            .categories
            .iter()
            .map(|c| c.category_id.len())
            .max()
            .unwrap_or(0)
            .max("CATEGORY".len());

        let mut out = format!(
            "{:<width$}  {:>5}  {:>10}  {:>8}  {:>9}  {:>9}\n",
            "CATEGORY", "PAGES", "ANALYZED", "FEATURED", "SELECTED", "FILTERED",
        );
        for category in &self.categories {
            let s = &category.stats;
            out.push_str(&format!(
                "{:<width$}  {:>5}  {:>10}  {:>8}  {:>8}%  {:>8}%\n",
                category.category_id,
                s.total_pages,
                format_number(s.total_analyzed),
                format_number(s.total_featured),
                format_percent(s.selectivity),
                format_percent(s.rejection_rate),
            ));
        }

        let site = &self.site;
        out.push_str(&format!(
            "\n{} categories, {} pages, {} analyzed, {} featured\n",
            site.total_categories,
            site.total_pages,
            format_number(site.total_items_analyzed),
            format_number(site.total_items_featured),
        ));
        out
    }
}

impl StatsArgs {
    pub fn run(self, config: &SiteConfig) -> anyhow::Result<()> {
        let report = StatsReport::from_config(config);
        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print!("{}", report.to_table());
        }
        Ok(())
    }
}
