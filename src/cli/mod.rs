mod stats;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use crate::config::{Overrides, Settings};
use crate::services::{Rendered, Route, SiteBuilder};
use stats::StatsArgs;

/// Static site generator for data-driven review and recommendation sites
#[derive(Parser)]
#[command(name = "picksite")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: ./picksite.toml, then ~/.picksite/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Content store root URL (overrides CONTENT_BASE_URL)
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Site id under the content store root (overrides SITE_ID)
    #[arg(long, global = true, value_name = "ID")]
    site: Option<String>,

    /// Read content from a local mirror of the store instead of HTTP
    #[arg(long, global = true, value_name = "DIR")]
    content_dir: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Export the whole site as static HTML
    Build {
        /// Output directory (overrides PICKSITE_OUT_DIR)
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },

    /// Show research statistics
    Stats(StatsArgs),

    /// Render one route to stdout (`render saws table-saws`, `render blog intro`)
    Render {
        /// Category id, or `blog`
        category: String,

        /// Page id, or article slug under `blog`
        page: Option<String>,
    },
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            config_file: self.config.clone(),
            base_url: self.base_url.clone(),
            site_id: self.site.clone(),
            content_dir: self.content_dir.clone(),
            out_dir: match &self.command {
                Commands::Build { out } => out.clone(),
                _ => None,
            },
        }
    }

    pub fn run(self) -> anyhow::Result<()> {
        let settings = Settings::load(&self.overrides())?;
        let store = settings.store()?;

        match self.command {
            Commands::Build { .. } => {
                let builder = SiteBuilder::load(store).context("failed to load site")?;
                let report = builder
                    .build(&settings.out_dir)
                    .with_context(|| format!("failed to write {}", settings.out_dir.display()))?;

                println!(
                    "Built {} pages into {}",
                    report.written,
                    report.out_dir.display()
                );
                if !report.not_found.is_empty() {
                    println!("Skipped {} missing:", report.not_found.len());
                    for route in &report.not_found {
                        println!("  {}", route);
                    }
                }
                Ok(())
            }
            Commands::Stats(args) => {
                let config = store.site_config().context("failed to load site config")?;
                args.run(&config)
            }
            Commands::Render { category, page } => {
                let route = match page {
                    Some(page) => Route::parse(&format!("/{}/{}", category, page)),
                    None => Route::parse(&category),
                };
                let builder = SiteBuilder::load(store).context("failed to load site")?;
                info!(route = %route.href(), "rendering");
                match builder.render_route(&route).context("failed to render route")? {
                    Rendered::Page(html) => {
                        println!("{}", html);
                        Ok(())
                    }
                    Rendered::NotFound(_) => anyhow::bail!("not found: {}", route.href()),
                }
            }
        }
    }
}
