//! Content store client
//!
//! Reads site documents from the remote store by conventional path. Site
//! config and site content are required; theme and category descriptions
//! fall back to defaults so a page never fails on non-critical content.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, warn};

use super::normalizer;
use crate::types::{PageContent, Result, SiteConfig, SiteContent, SiteError, ThemeConfig};

/// Default HTTP request timeout in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Somewhere site documents can be read from by relative path
pub trait ContentSource: Send + Sync {
    /// Human-readable location for logs (URL or directory)
    fn describe(&self) -> String;

    /// Fetch a document as text. Missing documents are `SiteError::NotFound`.
    fn fetch_text(&self, path: &str) -> Result<String>;

    /// Public URL for an asset path (images are not fetched, only linked)
    fn asset_url(&self, path: &str) -> String;
}

/// Plain HTTP GET against the remote store
pub struct HttpSource {
    root: String,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    /// `base_url` is the store root; documents live under `{base_url}/{site_id}`
    pub fn new(base_url: &str, site_id: &str, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| SiteError::Fetch(format!("HTTP client error: {}", e)))?;

        Ok(Self {
            root: join_root(base_url, site_id),
            client,
        })
    }
}

impl ContentSource for HttpSource {
    fn describe(&self) -> String {
        self.root.clone()
    }

    fn fetch_text(&self, path: &str) -> Result<String> {
        let url = self.asset_url(path);
        debug!(%url, "fetching");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| SiteError::Fetch(format!("HTTP request failed for {}: {}", url, e)))?;

        check_status(response.status(), path)?;

        response
            .text()
            .map_err(|e| SiteError::Fetch(format!("failed to read body of {}: {}", url, e)))
    }

    fn asset_url(&self, path: &str) -> String {
        format!("{}/{}", self.root, path.trim_start_matches('/'))
    }
}

/// Any non-success status means the document is unavailable
fn check_status(status: reqwest::StatusCode, path: &str) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(SiteError::NotFound(format!("{} ({})", path, status)))
    }
}

/// A local mirror of the store laid out with the same relative paths
pub struct DirSource {
    root: PathBuf,
    /// Prefix used for asset links in rendered pages
    public_url: String,
}

impl DirSource {
    pub fn new(root: PathBuf) -> Self {
        let public_url = root.to_string_lossy().trim_end_matches('/').to_string();
        Self { root, public_url }
    }

    /// Link assets to a public URL instead of the local directory
    pub fn with_public_url(mut self, base_url: &str, site_id: &str) -> Self {
        self.public_url = join_root(base_url, site_id);
        self
    }
}

impl ContentSource for DirSource {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    fn fetch_text(&self, path: &str) -> Result<String> {
        let full = self.root.join(path.trim_start_matches('/'));
        debug!(path = %full.display(), "reading");
        fs::read_to_string(&full).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SiteError::NotFound(path.to_string()),
            _ => SiteError::Io(e),
        })
    }

    fn asset_url(&self, path: &str) -> String {
        format!("{}/{}", self.public_url, path.trim_start_matches('/'))
    }
}

fn join_root(base_url: &str, site_id: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let site = site_id.trim_matches('/');
    if site.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, site)
    }
}

// ============================================================================
// Conventional document paths
// ============================================================================

pub const SITE_CONFIG_PATH: &str = "site-config.json";
pub const SITE_CONTENT_PATH: &str = "site-content.json";
pub const THEME_CONFIG_PATH: &str = "theme-config.json";
pub const SITE_HEADER_LOGO_PATH: &str = "site-header-logo-image.png";

pub fn category_description_path(category_id: &str) -> String {
    format!("categories/{}/category-description.html", category_id)
}

pub fn page_content_path(category_id: &str, page_id: &str) -> String {
    format!(
        "categories/{}/pages/{}/page-content.json",
        category_id, page_id
    )
}

pub fn article_content_path(slug: &str) -> String {
    format!("articles/{}/article-content.md", slug)
}

pub fn category_logo_path(category_id: &str) -> String {
    format!("categories/{}/category-logo-image.png", category_id)
}

pub fn page_logo_path(category_id: &str, page_id: &str) -> String {
    format!(
        "categories/{}/pages/{}/page-logo-image.png",
        category_id, page_id
    )
}

/// Typed access to one site's documents
pub struct ContentStore {
    source: Box<dyn ContentSource>,
}

impl ContentStore {
    pub fn new(source: Box<dyn ContentSource>) -> Self {
        Self { source }
    }

    pub fn describe(&self) -> String {
        self.source.describe()
    }

    pub fn site_config(&self) -> Result<SiteConfig> {
        let raw = self.source.fetch_text(SITE_CONFIG_PATH)?;
        normalizer::decode(&raw)
    }

    pub fn site_content(&self) -> Result<SiteContent> {
        let raw = self.source.fetch_text(SITE_CONTENT_PATH)?;
        normalizer::decode(&raw)
    }

    /// Theme config, or the built-in default when missing or invalid
    pub fn theme_config(&self) -> ThemeConfig {
        match self
            .source
            .fetch_text(THEME_CONFIG_PATH)
            .and_then(|raw| normalizer::decode(&raw))
        {
            Ok(theme) => theme,
            Err(e) if e.is_not_found() => {
                warn!("theme config not found, using defaults");
                ThemeConfig::default()
            }
            Err(e) => {
                warn!(error = %e, "failed to load theme config, using defaults");
                ThemeConfig::default()
            }
        }
    }

    /// Category description HTML, empty when unavailable
    pub fn category_description(&self, category_id: &str) -> String {
        match self
            .source
            .fetch_text(&category_description_path(category_id))
        {
            Ok(html) => html,
            Err(e) => {
                debug!(category = category_id, error = %e, "no category description");
                String::new()
            }
        }
    }

    pub fn page_content(&self, category_id: &str, page_id: &str) -> Result<PageContent> {
        let raw = self
            .source
            .fetch_text(&page_content_path(category_id, page_id))?;
        normalizer::decode(&raw)
    }

    /// Raw markdown body of an article
    pub fn article_content(&self, slug: &str) -> Result<String> {
        self.source.fetch_text(&article_content_path(slug))
    }

    pub fn category_logo_url(&self, category_id: &str) -> String {
        self.source.asset_url(&category_logo_path(category_id))
    }

    pub fn page_logo_url(&self, category_id: &str, page_id: &str) -> String {
        self.source.asset_url(&page_logo_path(category_id, page_id))
    }

    pub fn site_header_logo_url(&self) -> String {
        self.source.asset_url(SITE_HEADER_LOGO_PATH)
    }
}
