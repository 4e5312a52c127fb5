//! HTML rendering
//!
//! Markup lives in askama templates under `templates/`. Page layouts and
//! item cards are chosen by content type through two registries
//! ([`page_layout`] and [`item_card`]). Unknown content types fall back to
//! the base layout and base card.

pub mod blog;
pub mod category;
pub mod home;
mod items;
pub mod layout;
pub mod not_found;
mod page;
mod sections;
pub mod theme;

pub use items::{item_card, ItemCardRenderer};
pub use page::{page_layout, render_page, PageLayout};

use chrono::{DateTime, NaiveDate};

use crate::services::store::ContentStore;
use crate::types::{SiteConfig, SiteContent, ThemeConfig};

/// Site-wide documents shared by every page render
#[derive(Clone, Copy)]
pub struct SiteContext<'a> {
    pub config: &'a SiteConfig,
    pub content: &'a SiteContent,
    pub theme: &'a ThemeConfig,
    /// Used for asset URLs only
    pub store: &'a ContentStore,
}

// ============================================================================
// Template views
// ============================================================================

/// Anchor target and text
#[derive(Default)]
pub(crate) struct LinkView {
    pub url: String,
    pub text: String,
}

/// Label with its display value (attributes, badges)
pub(crate) struct Pair {
    pub label: String,
    pub value: String,
}

/// One cell of a stats grid; an empty note is not shown
pub(crate) struct StatView {
    pub value: String,
    pub label: String,
    pub note: &'static str,
}

impl StatView {
    pub fn new(value: impl ToString, label: impl Into<String>) -> Self {
        Self {
            value: value.to_string(),
            label: label.into(),
            note: "",
        }
    }

    pub fn with_note(mut self, note: &'static str) -> Self {
        self.note = note;
        self
    }
}

/// Tag link in a filter row or article header
pub(crate) struct TagLink {
    pub href: String,
    pub name: String,
    pub active: bool,
}

// ============================================================================
// Route hrefs
// ============================================================================

pub fn category_href(category_id: &str) -> String {
    format!("/{}", category_id)
}

pub fn page_href(category_id: &str, page_id: &str) -> String {
    format!("/{}/{}", category_id, page_id)
}

pub fn article_href(slug: &str) -> String {
    format!("/blog/{}", slug)
}

pub fn tag_href(tag: &str) -> String {
    format!("/blog/tag/{}", tag)
}

// ============================================================================
// Formatting
// ============================================================================

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| NaiveDate::parse_from_str(raw.get(..10)?, "%Y-%m-%d").ok())
}

/// "March 5, 2026"; unparseable input is returned unchanged
pub fn long_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// "3/5/2026"
pub fn short_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => raw.to_string(),
    }
}

/// Uppercase the first character ("tools" → "Tools")
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// "1 page" / "3 pages"
pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::PathBuf;

    use super::SiteContext;
    use crate::services::store::{ContentStore, DirSource};
    use crate::types::{Branding, Footer, Link, SiteConfig, SiteContent, ThemeConfig};

    /// Owned site documents for render tests
    pub struct Fixture {
        pub config: SiteConfig,
        pub content: SiteContent,
        pub theme: ThemeConfig,
        pub store: ContentStore,
    }

    impl Fixture {
        pub fn new() -> Self {
            let content = SiteContent {
                branding: Branding {
                    site_name: "Wood Shop".into(),
                    tagline: "Tools that last".into(),
                    description: String::new(),
                },
                trust_indicators: vec![
                    "Independent".into(),
                    "Hands-on".into(),
                    "Updated monthly".into(),
                ],
                footer: Footer {
                    about_text: "We test saws.".into(),
                    copyright: "© 2026 Wood Shop".into(),
                    links: vec![Link {
                        text: "About".into(),
                        url: "/about".into(),
                    }],
                },
                ..Default::default()
            };
            let store = ContentStore::new(Box::new(
                DirSource::new(PathBuf::from("/mirror"))
                    .with_public_url("https://cdn.example.com", "shop"),
            ));
            Self {
                config: SiteConfig {
                    site_id: "shop".into(),
                    site_title: "Wood Shop".into(),
                    ..Default::default()
                },
                content,
                theme: ThemeConfig::default(),
                store,
            }
        }

        pub fn ctx(&self) -> SiteContext<'_> {
            SiteContext {
                config: &self.config,
                content: &self.content,
                theme: &self.theme,
                store: &self.store,
            }
        }
    }
}
