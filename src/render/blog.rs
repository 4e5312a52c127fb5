//! Blog index, tag pages and article pages

use askama::Template;

use super::layout::{document, PageHead};
use super::{article_href, capitalize, long_date, page_href, plural, tag_href, SiteContext, TagLink};
use crate::types::{ArticleMeta, Result};

const MORE_ARTICLES_LIMIT: usize = 3;
const CARD_TAG_LIMIT: usize = 2;

/// Listing card for one article (`partials/article_card.html`)
pub(crate) struct ArticleCardView {
    pub href: String,
    pub tags: Vec<TagLink>,
    pub title: String,
    pub excerpt: String,
    pub date: String,
}

impl ArticleCardView {
    /// `active_tag` is highlighted on tag pages
    pub fn new(article: &ArticleMeta, active_tag: Option<&str>) -> Self {
        Self {
            href: article_href(&article.article_slug),
            tags: article
                .tags
                .iter()
                .take(CARD_TAG_LIMIT)
                .map(|tag| TagLink {
                    href: tag_href(tag),
                    name: tag.clone(),
                    active: active_tag == Some(tag.as_str()),
                })
                .collect(),
            title: article.article_title.clone(),
            excerpt: article.excerpt.clone(),
            date: long_date(&article.published_date),
        }
    }
}

/// Tag filter row entries; `active` is `None` on the main index
fn tag_links(tags: &[String], active: Option<&str>) -> Vec<TagLink> {
    tags.iter()
        .map(|tag| TagLink {
            href: tag_href(tag),
            name: tag.clone(),
            active: active == Some(tag.as_str()),
        })
        .collect()
}

#[derive(Template)]
#[template(path = "blog/index.html")]
struct BlogIndexTemplate<'a> {
    description: &'a str,
    all_active: bool,
    tag_links: Vec<TagLink>,
    articles: Vec<ArticleCardView>,
}

pub fn render_blog_index(ctx: &SiteContext<'_>) -> Result<String> {
    let template = BlogIndexTemplate {
        description: &ctx.content.branding.description,
        all_active: true,
        tag_links: tag_links(&ctx.config.article_tags(), None),
        articles: ctx
            .config
            .published_articles()
            .into_iter()
            .map(|article| ArticleCardView::new(article, None))
            .collect(),
    };

    let description = format!("Guides, tips, and tutorials from {}.", ctx.content.branding.site_name);
    document(ctx, &PageHead::new("Guides & Articles", description), &template.render()?)
}

#[derive(Template)]
#[template(path = "blog/tag.html")]
struct TagTemplate<'a> {
    tag: &'a str,
    /// "2 articles"
    count: String,
    all_active: bool,
    tag_links: Vec<TagLink>,
    articles: Vec<ArticleCardView>,
}

/// Index of published articles carrying `tag`; `None` when there are none
pub fn render_tag(ctx: &SiteContext<'_>, tag: &str) -> Result<Option<String>> {
    let tagged: Vec<&ArticleMeta> = ctx
        .config
        .published_articles()
        .into_iter()
        .filter(|a| a.tags.iter().any(|t| t == tag))
        .collect();
    if tagged.is_empty() {
        return Ok(None);
    }

    let template = TagTemplate {
        tag,
        count: plural(tagged.len(), "article", "articles"),
        all_active: false,
        tag_links: tag_links(&ctx.config.article_tags(), Some(tag)),
        articles: tagged
            .into_iter()
            .map(|article| ArticleCardView::new(article, Some(tag)))
            .collect(),
    };

    let head = PageHead::new(
        format!("{} Guides & Articles", capitalize(tag)),
        format!("Guides and articles tagged with \"{}\".", tag),
    );
    document(ctx, &head, &template.render()?).map(Some)
}

#[derive(Template)]
#[template(path = "blog/article.html")]
struct ArticleTemplate<'a> {
    title: &'a str,
    tag_links: Vec<TagLink>,
    dates: String,
    /// Escaped on output; rendered client-side
    markdown: &'a str,
    related: Vec<RelatedPick<'a>>,
    more: Vec<MoreArticle<'a>>,
}

struct RelatedPick<'a> {
    href: String,
    title: &'a str,
    category: &'a str,
}

struct MoreArticle<'a> {
    href: String,
    title: &'a str,
    excerpt: &'a str,
}

/// Article page. The markdown body is embedded escaped for client-side rendering.
pub fn render_article(ctx: &SiteContext<'_>, article: &ArticleMeta, markdown: &str) -> Result<String> {
    let mut dates = format!("Published {}", long_date(&article.published_date));
    if !article.last_updated.is_empty() && article.last_updated != article.published_date {
        dates.push_str(&format!(" · Updated {}", long_date(&article.last_updated)));
    }

    let template = ArticleTemplate {
        title: &article.article_title,
        tag_links: tag_links(&article.tags, None),
        dates,
        markdown,
        // Related page ids resolve across all categories; unknown ids are dropped
        related: article
            .related_pages
            .iter()
            .filter_map(|id| ctx.config.find_page(id))
            .map(|(category, page)| RelatedPick {
                href: page_href(&category.category_id, &page.page_id),
                title: &page.page_title,
                category: &category.category_title,
            })
            .collect(),
        more: ctx
            .config
            .articles
            .iter()
            .filter(|a| a.is_published() && a.article_slug != article.article_slug)
            .take(MORE_ARTICLES_LIMIT)
            .map(|other| MoreArticle {
                href: article_href(&other.article_slug),
                title: &other.article_title,
                excerpt: &other.excerpt,
            })
            .collect(),
    };

    let head = PageHead::new(&article.article_title, &article.meta_description)
        .with_keywords(&article.tags);
    document(ctx, &head, &template.render()?)
}
