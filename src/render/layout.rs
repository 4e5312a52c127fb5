//! Document shell shared by every page: head, header nav, footer

use askama::Template;

use super::theme::ThemeVars;
use super::SiteContext;
use crate::types::{Link, Result};

const NAV_TRUST_LIMIT: usize = 2;

/// Per-page `<head>` metadata
#[derive(Debug, Clone, Default)]
pub struct PageHead {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    /// schema.org JSON-LD block
    pub json_ld: Option<serde_json::Value>,
}

impl PageHead {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn with_keywords(mut self, keywords: &[String]) -> Self {
        self.keywords = keywords.to_vec();
        self
    }
}

#[derive(Template)]
#[template(path = "layout.html")]
struct LayoutTemplate<'a> {
    title: String,
    description: &'a str,
    keywords: String,
    font_url: String,
    css: String,
    /// Empty when the page has no schema
    json_ld: String,
    site_name: &'a str,
    /// Empty when no logo is configured
    logo_url: &'a str,
    logo_width: u32,
    logo_height: u32,
    nav_trust: &'a [String],
    trust: &'a [String],
    about: &'a str,
    links: &'a [Link],
    copyright: &'a str,
    body: &'a str,
}

/// Wrap a rendered `<main>` body in the full document
pub fn document(ctx: &SiteContext<'_>, head: &PageHead, body: &str) -> Result<String> {
    let vars = ThemeVars::from_theme(ctx.theme);
    let content = ctx.content;
    let site_name = content.branding.site_name.as_str();

    let title = if head.title.is_empty() || head.title == site_name {
        site_name.to_string()
    } else {
        format!("{} | {}", head.title, site_name)
    };
    // `</` inside JSON strings would end the script element early
    let json_ld = head
        .json_ld
        .as_ref()
        .map(|value| value.to_string().replace("</", "<\\/"))
        .unwrap_or_default();
    let (logo_url, logo_width, logo_height) = match (ctx.theme.logo_url(), &ctx.theme.logo) {
        (Some(url), Some(logo)) => (url, logo.width, logo.height),
        _ => ("", 0, 0),
    };
    let trust = content.trust_indicators.as_slice();

    let template = LayoutTemplate {
        title,
        description: &head.description,
        keywords: head.keywords.join(", "),
        font_url: vars.font_stylesheet_url(),
        css: vars.css(),
        json_ld,
        site_name,
        logo_url,
        logo_width,
        logo_height,
        nav_trust: &trust[..trust.len().min(NAV_TRUST_LIMIT)],
        trust,
        about: &content.footer.about_text,
        links: &content.footer.links,
        copyright: &content.footer.copyright,
        body,
    };
    Ok(template.render()?)
}
