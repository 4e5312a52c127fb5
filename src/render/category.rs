//! Category index page

use askama::Template;

use super::layout::{document, PageHead};
use super::{page_href, short_date, SiteContext, StatView};
use crate::services::aggregator::{format_percent, selectivity, Aggregator};
use crate::types::{Category, PageMeta, Result};

#[derive(Template)]
#[template(path = "category.html")]
struct CategoryTemplate<'a> {
    title: &'a str,
    lower_title: String,
    /// Empty without an icon prompt
    hero_logo: String,
    research_badge: String,
    total_analyzed: u64,
    total_featured: u64,
    /// Empty without research stats
    stats: Vec<StatView>,
    description_html: &'a str,
    pages: Vec<PageCardView<'a>>,
}

/// Summary card linking to one page of a category
struct PageCardView<'a> {
    href: String,
    title: &'a str,
    analyzed: u64,
    featured: u64,
    metric: String,
    selected: String,
    updated: String,
}

impl<'a> PageCardView<'a> {
    fn new(category_id: &str, page: &'a PageMeta) -> Self {
        let analyzed = page.analyzed();
        let featured = page.featured();
        Self {
            href: page_href(category_id, &page.page_id),
            title: &page.page_title,
            analyzed,
            featured,
            metric: page
                .diversity_metric()
                .map(|m| format!("{} {}", m.count, m.label))
                .unwrap_or_default(),
            selected: if featured > 0 && analyzed > 0 {
                format!("Top {}% selected", format_percent(selectivity(featured, analyzed)))
            } else {
                String::new()
            },
            updated: page.last_updated.as_deref().map(short_date).unwrap_or_default(),
        }
    }
}

/// Full document for a category. `description_html` is inserted verbatim.
pub fn render_category(ctx: &SiteContext<'_>, category: &Category, description_html: &str) -> Result<String> {
    let stats = Aggregator::category_stats(category);

    let mut cells = Vec::new();
    if stats.has_stats {
        cells.push(StatView::new(stats.total_analyzed, "Items Analyzed"));
        for metric in &stats.diversity_metrics {
            cells.push(StatView::new(metric.count, &metric.label));
        }
        if stats.rejection_rate > 0.0 {
            cells.push(StatView::new(
                format!("{}%", format_percent(stats.rejection_rate)),
                "Filtered Out",
            ));
        }
        cells.push(StatView::new(stats.total_featured, "Expert Picks"));
        let guides = if stats.total_pages == 1 { "Guide" } else { "Guides" };
        cells.push(StatView::new(stats.total_pages, guides));
    }

    let has_hero = category.icon_prompt.as_deref().is_some_and(|p| !p.is_empty());
    let template = CategoryTemplate {
        title: &category.category_title,
        lower_title: category.category_title.to_lowercase(),
        hero_logo: if has_hero {
            ctx.store.category_logo_url(&category.category_id)
        } else {
            String::new()
        },
        research_badge: format!(
            "{} analyzed → {} picks (Top {}%)",
            stats.total_analyzed,
            stats.total_featured,
            format_percent(stats.selectivity)
        ),
        total_analyzed: stats.total_analyzed,
        total_featured: stats.total_featured,
        stats: cells,
        description_html,
        pages: category
            .pages
            .iter()
            .map(|page| PageCardView::new(&category.category_id, page))
            .collect(),
    };

    let description = ctx
        .config
        .site_description
        .as_deref()
        .unwrap_or(&ctx.content.meta_description);
    document(ctx, &PageHead::new(&category.category_title, description), &template.render()?)
}
