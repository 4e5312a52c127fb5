//! Static export of a whole site
//!
//! Site config, site content and theme are fetched once per build. Every
//! route is then fetched and rendered in parallel; a route whose content is
//! missing is logged, counted and skipped instead of failing the build.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::store::ContentStore;
use crate::render::blog::{render_article, render_blog_index, render_tag};
use crate::render::category::render_category;
use crate::render::home::render_home;
use crate::render::not_found::render_not_found;
use crate::render::{render_page, SiteContext};
use crate::types::{Result, SiteConfig, SiteContent, ThemeConfig};

/// One addressable page of the site
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Category { category: String },
    Page { category: String, page: String },
    BlogIndex,
    Tag { tag: String },
    Article { slug: String },
    NotFound,
}

impl Route {
    /// Parse a URL path such as `/saws/table-saws` or `/blog/tag/tools`
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Home,
            ["blog"] => Self::BlogIndex,
            ["blog", "tag", tag] => Self::Tag { tag: tag.to_string() },
            ["blog", slug] => Self::Article { slug: slug.to_string() },
            [category] => Self::Category {
                category: category.to_string(),
            },
            [category, page] => Self::Page {
                category: category.to_string(),
                page: page.to_string(),
            },
            _ => Self::NotFound,
        }
    }

    pub fn href(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Category { category } => format!("/{}", category),
            Self::Page { category, page } => format!("/{}/{}", category, page),
            Self::BlogIndex => "/blog".to_string(),
            Self::Tag { tag } => format!("/blog/tag/{}", tag),
            Self::Article { slug } => format!("/blog/{}", slug),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// File under the output directory; directory routes get `index.html`
    pub fn output_path(&self) -> PathBuf {
        match self {
            Self::NotFound => PathBuf::from("404.html"),
            _ => {
                let mut path: PathBuf = self.href().split('/').filter(|s| !s.is_empty()).collect();
                path.push("index.html");
                path
            }
        }
    }

    /// Ids become directory names, so they must be single plain segments
    fn is_writable(&self) -> bool {
        let safe = |s: &str| !s.is_empty() && s != "." && s != ".." && !s.contains(['/', '\\']);
        match self {
            Self::Home | Self::BlogIndex | Self::NotFound => true,
            Self::Category { category } => safe(category),
            Self::Page { category, page } => safe(category) && safe(page),
            Self::Tag { tag } => safe(tag),
            Self::Article { slug } => safe(slug),
        }
    }
}

/// Outcome of rendering one route
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Page(String),
    NotFound(String),
}

impl Rendered {
    pub fn html(&self) -> &str {
        match self {
            Self::Page(html) | Self::NotFound(html) => html,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Summary of a finished build
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildReport {
    pub out_dir: PathBuf,
    /// Pages written, including `404.html`
    pub written: usize,
    /// Routes skipped because their content was missing
    pub not_found: Vec<String>,
}

/// Renders routes against one site's documents
pub struct SiteBuilder {
    store: ContentStore,
    config: SiteConfig,
    content: SiteContent,
    theme: ThemeConfig,
}

impl SiteBuilder {
    /// Fetch the site-wide documents. Site config and site content are required.
    pub fn load(store: ContentStore) -> Result<Self> {
        info!(source = %store.describe(), "loading site");
        let config = store.site_config()?;
        let content = store.site_content()?;
        let theme = store.theme_config();
        debug!(
            categories = config.categories.len(),
            articles = config.articles.len(),
            "site config loaded"
        );

        Ok(Self {
            store,
            config,
            content,
            theme,
        })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    fn ctx(&self) -> SiteContext<'_> {
        SiteContext {
            config: &self.config,
            content: &self.content,
            theme: &self.theme,
            store: &self.store,
        }
    }

    /// Every route of the site, excluding `404`
    pub fn routes(&self) -> Vec<Route> {
        let mut routes = vec![Route::Home];
        for category in &self.config.categories {
            routes.push(Route::Category {
                category: category.category_id.clone(),
            });
            routes.extend(category.pages.iter().map(|p| Route::Page {
                category: category.category_id.clone(),
                page: p.page_id.clone(),
            }));
        }
        routes.push(Route::BlogIndex);
        routes.extend(
            self.config
                .article_tags()
                .into_iter()
                .map(|tag| Route::Tag { tag }),
        );
        routes.extend(self.config.published_articles().into_iter().map(|a| Route::Article {
            slug: a.article_slug.clone(),
        }));
        routes
    }

    fn not_found(&self) -> Result<Rendered> {
        Ok(Rendered::NotFound(render_not_found(&self.ctx())?))
    }

    /// Render a single route. Missing entities and failed fetches render as
    /// not-found; only template failures are errors.
    pub fn render_route(&self, route: &Route) -> Result<Rendered> {
        let ctx = self.ctx();
        let html = match route {
            Route::Home => render_home(&ctx)?,
            Route::Category { category } => match self.config.category(category) {
                Some(cat) => {
                    let description = self.store.category_description(category);
                    render_category(&ctx, cat, &description)?
                }
                None => return self.not_found(),
            },
            Route::Page { category, page } => {
                let Some(cat) = self.config.category(category) else {
                    return self.not_found();
                };
                let Some(meta) = cat.page(page) else {
                    return self.not_found();
                };
                match self.store.page_content(category, page) {
                    Ok(content) => render_page(&ctx, cat, meta, &content)?,
                    Err(e) => {
                        warn!(route = %route.href(), error = %e, "page content unavailable");
                        return self.not_found();
                    }
                }
            }
            Route::BlogIndex => render_blog_index(&ctx)?,
            Route::Tag { tag } => match render_tag(&ctx, tag)? {
                Some(html) => html,
                None => return self.not_found(),
            },
            Route::Article { slug } => {
                let Some(article) = self.config.article(slug) else {
                    return self.not_found();
                };
                match self.store.article_content(slug) {
                    Ok(markdown) => render_article(&ctx, article, &markdown)?,
                    Err(e) => {
                        warn!(route = %route.href(), error = %e, "article content unavailable");
                        return self.not_found();
                    }
                }
            }
            Route::NotFound => return self.not_found(),
        };
        Ok(Rendered::Page(html))
    }

    /// Render every route into `out_dir`
    pub fn build(&self, out_dir: &Path) -> Result<BuildReport> {
        let routes = self.routes();
        info!(routes = routes.len(), out = %out_dir.display(), "building site");

        let rendered: Vec<(&Route, Rendered)> = routes
            .par_iter()
            .map(|route| self.render_route(route).map(|rendered| (route, rendered)))
            .collect::<Result<_>>()?;

        let mut report = BuildReport {
            out_dir: out_dir.to_path_buf(),
            ..Default::default()
        };

        for (route, result) in rendered {
            if !route.is_writable() {
                warn!(route = %route.href(), "skipping route with unsafe path");
                report.not_found.push(route.href());
                continue;
            }
            match result {
                Rendered::Page(html) => {
                    write_page(out_dir, &route.output_path(), &html)?;
                    report.written += 1;
                }
                Rendered::NotFound(_) => {
                    warn!(route = %route.href(), "not found, skipped");
                    report.not_found.push(route.href());
                }
            }
        }

        write_page(out_dir, &Route::NotFound.output_path(), self.not_found()?.html())?;
        report.written += 1;

        info!(
            written = report.written,
            skipped = report.not_found.len(),
            "build complete"
        );
        Ok(report)
    }
}

fn write_page(out_dir: &Path, relative: &Path, html: &str) -> Result<()> {
    let path = out_dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, html)?;
    debug!(path = %path.display(), "wrote page");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::store::{
        article_content_path, page_content_path, DirSource, SITE_CONFIG_PATH, SITE_CONTENT_PATH,
    };
    use tempfile::TempDir;

    fn write(dir: &Path, path: &str, content: &str) {
        let full = dir.join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, content).unwrap();
    }

    fn mirror() -> TempDir {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            SITE_CONFIG_PATH,
            r#"{"site_id": "shop", "site_title": "Shop",
                "categories": [{"category_id": "saws", "category_title": "Saws", "pages": [
                    {"page_id": "table", "page_title": "Table Saws", "items_analyzed": 50, "items_featured": 5},
                    {"page_id": "missing", "page_title": "Missing"}]}],
                "articles": [
                    {"article_slug": "intro", "article_title": "Intro", "status": "published", "published_date": "2026-01-01", "tags": ["basics"]},
                    {"article_slug": "hidden", "status": "draft", "tags": ["wip"]}]}"#,
        );
        write(
            dir.path(),
            SITE_CONTENT_PATH,
            r#"{"branding": {"site_name": "Shop"}, "footer": {"copyright": "(c) Shop"}}"#,
        );
        write(
            dir.path(),
            &page_content_path("saws", "table"),
            r#"{"page_content_type": "physical_product", "page_title": "Best Table Saws", "items": [{"rank": 1, "name": "Saw A"}]}"#,
        );
        write(dir.path(), &article_content_path("intro"), "# Intro\n");
        dir
    }

    fn builder(dir: &TempDir) -> SiteBuilder {
        let store = ContentStore::new(Box::new(DirSource::new(dir.path().to_path_buf())));
        SiteBuilder::load(store).unwrap()
    }

    // ========== Route ==========

    #[test]
    fn test_route_parse() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/blog/"), Route::BlogIndex);
        assert_eq!(Route::parse("/blog/tag/tools"), Route::Tag { tag: "tools".into() });
        assert_eq!(Route::parse("/blog/intro"), Route::Article { slug: "intro".into() });
        assert_eq!(Route::parse("saws"), Route::Category { category: "saws".into() });
        assert_eq!(
            Route::parse("/saws/table"),
            Route::Page { category: "saws".into(), page: "table".into() }
        );
        assert_eq!(Route::parse("/a/b/c"), Route::NotFound);
    }

    #[test]
    fn test_output_paths() {
        assert_eq!(Route::Home.output_path(), PathBuf::from("index.html"));
        assert_eq!(
            Route::Page { category: "saws".into(), page: "table".into() }.output_path(),
            PathBuf::from("saws/table/index.html")
        );
        assert_eq!(
            Route::Tag { tag: "tools".into() }.output_path(),
            PathBuf::from("blog/tag/tools/index.html")
        );
        assert_eq!(Route::NotFound.output_path(), PathBuf::from("404.html"));
    }

    #[test]
    fn test_unsafe_ids_not_writable() {
        assert!(!Route::Category { category: "..".into() }.is_writable());
        assert!(!Route::Article { slug: "a/../../b".into() }.is_writable());
        assert!(Route::Article { slug: "first-saw".into() }.is_writable());
    }

    // ========== render_route ==========

    #[test]
    fn test_routes_cover_site() {
        let dir = mirror();
        let routes = builder(&dir).routes();
        assert_eq!(
            routes,
            vec![
                Route::Home,
                Route::Category { category: "saws".into() },
                Route::Page { category: "saws".into(), page: "table".into() },
                Route::Page { category: "saws".into(), page: "missing".into() },
                Route::BlogIndex,
                Route::Tag { tag: "basics".into() },
                Route::Article { slug: "intro".into() },
            ]
        );
    }

    #[test]
    fn test_render_route_page() {
        let dir = mirror();
        let rendered = builder(&dir).render_route(&Route::parse("/saws/table")).unwrap();
        assert!(!rendered.is_not_found());
        assert!(rendered.html().contains("Saw A"));
    }

    #[test]
    fn test_render_route_missing_entities() {
        let dir = mirror();
        let b = builder(&dir);
        for path in ["/nope", "/saws/nope", "/saws/missing", "/blog/hidden", "/blog/tag/wip"] {
            assert!(b.render_route(&Route::parse(path)).unwrap().is_not_found(), "{}", path);
        }
    }

    #[test]
    fn test_load_requires_site_content() {
        let dir = mirror();
        fs::remove_file(dir.path().join(SITE_CONTENT_PATH)).unwrap();
        let store = ContentStore::new(Box::new(DirSource::new(dir.path().to_path_buf())));
        assert!(SiteBuilder::load(store).is_err());
    }

    // ========== build ==========

    #[test]
    fn test_build_writes_pages_and_skips_missing() {
        let dir = mirror();
        let out = TempDir::new().unwrap();
        let report = builder(&dir).build(out.path()).unwrap();

        for file in [
            "index.html",
            "saws/index.html",
            "saws/table/index.html",
            "blog/index.html",
            "blog/tag/basics/index.html",
            "blog/intro/index.html",
            "404.html",
        ] {
            assert!(out.path().join(file).is_file(), "{}", file);
        }
        assert!(!out.path().join("saws/missing").exists());
        assert_eq!(report.written, 7);
        assert_eq!(report.not_found, vec!["/saws/missing".to_string()]);
    }
}
