//! Home page: hero, trust badges, categories, featured guides, about

use askama::Template;

use super::blog::ArticleCardView;
use super::layout::{document, PageHead};
use super::{category_href, plural, LinkView, Pair, SiteContext};
use crate::services::aggregator::{format_number, format_percent, selectivity, Aggregator};
use crate::types::{Result, TrustBadgeMode};

const FEATURED_ARTICLE_LIMIT: usize = 3;

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate<'a> {
    hero_layout: &'a str,
    hero_background: &'a str,
    /// Empty when the badge is disabled
    hero_badge: &'a str,
    hero_badge_style: &'a str,
    /// Carries markup such as `<br />`
    headline: &'a str,
    subheadline: &'a str,
    hero_cta: LinkView,
    badges_enabled: bool,
    badges_style: &'a str,
    /// Trust indicators are shown instead when empty
    badges: Vec<Pair>,
    trust_indicators: &'a [String],
    categories_enabled: bool,
    categories_title: &'a str,
    grid_layout: &'a str,
    grid_columns: u32,
    categories: Vec<CategoryCardView>,
    articles: Vec<ArticleCardView>,
    about_title: &'a str,
    about_content: &'a str,
}

/// Category tile linking to its index page
struct CategoryCardView {
    href: String,
    logo: String,
    title: String,
    /// "3 pages"
    pages: String,
}

pub fn render_home(ctx: &SiteContext<'_>) -> Result<String> {
    let components = &ctx.theme.components;
    let hero = &ctx.content.hero;

    let template = HomeTemplate {
        hero_layout: &components.hero.layout,
        hero_background: &components.hero.background_style,
        hero_badge: if components.hero.badge.enabled {
            hero.badge.text.as_str()
        } else {
            ""
        },
        hero_badge_style: &components.hero.badge.style,
        headline: &hero.headline,
        subheadline: &hero.subheadline,
        hero_cta: LinkView {
            url: hero.cta.url.clone(),
            text: hero.cta.text.clone(),
        },
        badges_enabled: components.trust_badges.enabled,
        badges_style: &components.trust_badges.style,
        badges: trust_badges(ctx),
        trust_indicators: &ctx.content.trust_indicators,
        categories_enabled: components.categories_section.enabled,
        categories_title: &ctx.content.categories_section.title,
        grid_layout: &components.categories_section.layout,
        grid_columns: components.categories_section.columns,
        categories: ctx
            .config
            .categories
            .iter()
            .map(|category| CategoryCardView {
                href: category_href(&category.category_id),
                logo: ctx.store.category_logo_url(&category.category_id),
                title: category.category_title.clone(),
                pages: plural(category.pages.len(), "page", "pages"),
            })
            .collect(),
        articles: ctx
            .config
            .featured_articles(FEATURED_ARTICLE_LIMIT)
            .into_iter()
            .map(|article| ArticleCardView::new(article, None))
            .collect(),
        about_title: &ctx.content.about.title,
        about_content: &ctx.content.about.content,
    };

    let head = PageHead::new(&ctx.content.branding.site_name, &ctx.content.meta_description)
        .with_keywords(&ctx.content.seo_keywords);
    document(ctx, &head, &template.render()?)
}

/// Stat or custom badges; empty means the trust indicators stand in
fn trust_badges(ctx: &SiteContext<'_>) -> Vec<Pair> {
    let badges = &ctx.theme.components.trust_badges;
    let badge = |value: String, label: &str| Pair {
        label: label.to_string(),
        value,
    };

    match badges.mode {
        TrustBadgeMode::Auto => {
            let stats = Aggregator::site_stats(ctx.config);
            if stats.total_items_analyzed == 0 {
                return Vec::new();
            }
            let top = selectivity(stats.total_items_featured, stats.total_items_analyzed);
            vec![
                badge(format!("{}+", format_number(stats.total_items_analyzed)), "Items Analyzed"),
                badge(stats.total_items_featured.to_string(), "Expert Picks"),
                badge(format!("Top {}%", format_percent(top)), "Selected"),
            ]
        }
        TrustBadgeMode::Custom => badges
            .custom_badges
            .iter()
            .map(|custom| badge(custom.value.clone(), &custom.label))
            .collect(),
    }
}
