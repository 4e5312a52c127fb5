//! Content pages and the content-type → layout registry

use askama::Template;

use super::items::item_card;
use super::layout::{document, PageHead};
use super::sections::{BuyerGuide, ComparisonTable, Faq, FinalVerdict, PlaceMap, RelatedArticles};
use super::{category_href, short_date, SiteContext, StatView};
use crate::services::aggregator::{format_percent, Aggregator};
use crate::types::{Category, ContentType, PageContent, PageMeta, Result};

/// Content-type specific sections around the base page
pub trait PageLayout: Send + Sync {
    /// Layout name, emitted as the page's `data-layout` attribute (e.g., "commerce")
    fn name(&self) -> &'static str;

    /// Rendered after the introduction, before the items
    fn header_slot(&self, _page: &PageContent) -> Result<String> {
        Ok(String::new())
    }

    /// Rendered after the FAQ, before related content
    fn footer_slot(&self, _page: &PageContent) -> Result<String> {
        Ok(String::new())
    }
}

/// Pick the layout for a page content type
pub fn page_layout(content_type: &ContentType) -> &'static dyn PageLayout {
    match content_type {
        ContentType::PhysicalProduct | ContentType::ServiceOffer => &CommercePage,
        ContentType::Place => &PlacePage,
        _ => &BasePage,
    }
}

pub struct BasePage;

impl PageLayout for BasePage {
    fn name(&self) -> &'static str {
        "base"
    }
}

pub struct CommercePage;

impl PageLayout for CommercePage {
    fn name(&self) -> &'static str {
        "commerce"
    }

    fn header_slot(&self, page: &PageContent) -> Result<String> {
        if !page.comparison_enabled() {
            return Ok(String::new());
        }
        Ok(ComparisonTable::new(&page.items).render()?)
    }

    fn footer_slot(&self, page: &PageContent) -> Result<String> {
        let mut out = BuyerGuide {
            sections: &page.buyer_guide,
        }
        .render()?;
        if let Some(recommendation) = &page.final_recommendation {
            out.push_str(&FinalVerdict::new(recommendation).render()?);
        }
        Ok(out)
    }
}

pub struct PlacePage;

impl PageLayout for PlacePage {
    fn name(&self) -> &'static str {
        "place"
    }

    fn footer_slot(&self, page: &PageContent) -> Result<String> {
        match page.location_map().filter(|m| !m.places.is_empty()) {
            Some(map) => Ok(PlaceMap::new(map).render()?),
            None => Ok(String::new()),
        }
    }
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    layout: &'static str,
    category_href: String,
    category_title: &'a str,
    page_title: &'a str,
    heading: &'a str,
    last_updated: String,
    research_badge: String,
    /// Commerce pages only
    disclosure: &'a str,
    stats_title: &'static str,
    /// Empty without research stats
    stats: Vec<StatView>,
    introduction: &'a str,
    header_slot: String,
    items_heading: &'static str,
    /// Rendered by the content type's card
    cards: Vec<String>,
    faq: String,
    footer_slot: String,
    related: String,
}

/// Full document for one content page
pub fn render_page(
    ctx: &SiteContext<'_>,
    category: &Category,
    meta: &PageMeta,
    page: &PageContent,
) -> Result<String> {
    let layout = page_layout(&page.page_content_type);
    let card = item_card(&page.page_content_type);
    let stats = Aggregator::page_stats(meta);
    let is_commerce = page.page_content_type.is_commerce();

    let (research_badge, stat_cells) = if stats.has_stats {
        let badge = format!(
            "{} analyzed → {} picks (Top {}%)",
            stats.items_analyzed,
            stats.items_featured,
            format_percent(stats.selectivity)
        );
        let analyzed_label = if is_commerce { "Products Analyzed" } else { "Items Analyzed" };
        let mut cells =
            vec![StatView::new(stats.items_analyzed, analyzed_label).with_note("We researched every highly-rated option")];
        if let Some(metric) = meta.diversity_metric() {
            cells.push(StatView::new(metric.count, &metric.label).with_note("Comprehensive coverage"));
        }
        cells.push(
            StatView::new(format!("{}%", format_percent(stats.rejection_rate)), "Filtered Out")
                .with_note("Only the best made our list"),
        );
        cells.push(StatView::new(stats.items_featured, "Top Picks").with_note("Our expert recommendations"));
        (badge, cells)
    } else {
        (String::new(), Vec::new())
    };

    let template = PageTemplate {
        layout: layout.name(),
        category_href: category_href(&category.category_id),
        category_title: &category.category_title,
        page_title: &page.page_title,
        heading: if page.h1.is_empty() { page.page_title.as_str() } else { page.h1.as_str() },
        last_updated: page.last_updated.as_deref().map(short_date).unwrap_or_default(),
        research_badge,
        disclosure: if is_commerce {
            page.disclosure.as_deref().unwrap_or_default()
        } else {
            ""
        },
        stats_title: if is_commerce { "Our Research Process" } else { "Our Selection Process" },
        stats: stat_cells,
        introduction: &page.introduction,
        header_slot: layout.header_slot(page)?,
        items_heading: if is_commerce { "Detailed Reviews" } else { "Complete List" },
        cards: page
            .items
            .iter()
            .map(|item| card.render(item))
            .collect::<Result<_>>()?,
        faq: Faq { items: &page.faq }.render()?,
        footer_slot: layout.footer_slot(page)?,
        related: RelatedArticles {
            pages: page.related_pages(),
        }
        .render()?,
    };

    let description = if page.meta_description.is_empty() {
        &page.introduction
    } else {
        &page.meta_description
    };
    let mut head = PageHead::new(&page.page_title, description).with_keywords(&page.seo_keywords);
    head.json_ld = page.schema.clone();
    document(ctx, &head, &template.render()?)
}
