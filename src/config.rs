//! Layered settings: defaults → TOML file → environment → CLI flags

use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::services::store::{ContentStore, DirSource, HttpSource, REQUEST_TIMEOUT_SECS};
use crate::types::{Result, SiteError};

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "picksite.toml";

pub const ENV_BASE_URL: &str = "CONTENT_BASE_URL";
pub const ENV_SITE_ID: &str = "SITE_ID";
pub const ENV_CONTENT_DIR: &str = "PICKSITE_CONTENT_DIR";
pub const ENV_OUT_DIR: &str = "PICKSITE_OUT_DIR";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    /// Content store root URL
    pub base_url: Option<String>,
    pub site_id: String,
    /// Local mirror of the store; takes precedence over `base_url` for reads
    pub content_dir: Option<PathBuf>,
    pub out_dir: PathBuf,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: None,
            site_id: String::new(),
            content_dir: None,
            out_dir: PathBuf::from("out"),
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Settings as written in a TOML file; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileSettings {
    base_url: Option<String>,
    site_id: Option<String>,
    content_dir: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    request_timeout_secs: Option<u64>,
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_file: Option<PathBuf>,
    pub base_url: Option<String>,
    pub site_id: Option<String>,
    pub content_dir: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
}

impl Settings {
    /// Load all layers from the real environment
    pub fn load(overrides: &Overrides) -> Result<Self> {
        Self::load_with(overrides, |key| std::env::var(key).ok())
    }

    /// Load all layers with an injectable environment lookup
    pub fn load_with(overrides: &Overrides, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(path) = config_file(overrides.config_file.as_deref())? {
            debug!(path = %path.display(), "reading config file");
            settings.apply_file(&path)?;
        }

        let env = |key: &str| env(key).filter(|v| !v.trim().is_empty());
        if let Some(v) = env(ENV_BASE_URL) {
            settings.base_url = Some(v);
        }
        if let Some(v) = env(ENV_SITE_ID) {
            settings.site_id = v;
        }
        if let Some(v) = env(ENV_CONTENT_DIR) {
            settings.content_dir = Some(PathBuf::from(v));
        }
        if let Some(v) = env(ENV_OUT_DIR) {
            settings.out_dir = PathBuf::from(v);
        }

        if let Some(v) = &overrides.base_url {
            settings.base_url = Some(v.clone());
        }
        if let Some(v) = &overrides.site_id {
            settings.site_id = v.clone();
        }
        if let Some(v) = &overrides.content_dir {
            settings.content_dir = Some(v.clone());
        }
        if let Some(v) = &overrides.out_dir {
            settings.out_dir = v.clone();
        }

        settings.validate()?;
        Ok(settings)
    }

    fn apply_file(&mut self, path: &Path) -> Result<()> {
        let raw = fs::read_to_string(path).map_err(|e| {
            SiteError::Config(format!("failed to read config file '{}': {}", path.display(), e))
        })?;
        let file: FileSettings = toml::from_str(&raw).map_err(|e| {
            SiteError::Config(format!("invalid config file '{}': {}", path.display(), e))
        })?;

        if file.base_url.is_some() {
            self.base_url = file.base_url;
        }
        if let Some(v) = file.site_id {
            self.site_id = v;
        }
        if file.content_dir.is_some() {
            self.content_dir = file.content_dir;
        }
        if let Some(v) = file.out_dir {
            self.out_dir = v;
        }
        if let Some(v) = file.request_timeout_secs {
            self.request_timeout_secs = v;
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.base_url.is_none() && self.content_dir.is_none() {
            return Err(SiteError::Config(format!(
                "no content source: set {} or {} (or --base-url / --content-dir)",
                ENV_BASE_URL, ENV_CONTENT_DIR
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(SiteError::Config(
                "request_timeout_secs must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Content store for these settings: local mirror if configured, else HTTP
    pub fn store(&self) -> Result<ContentStore> {
        match (&self.content_dir, &self.base_url) {
            (Some(dir), base_url) => {
                let mut source = DirSource::new(dir.clone());
                if let Some(base_url) = base_url {
                    source = source.with_public_url(base_url, &self.site_id);
                }
                Ok(ContentStore::new(Box::new(source)))
            }
            (None, Some(base_url)) => {
                let source = HttpSource::new(base_url, &self.site_id, self.request_timeout_secs)?;
                Ok(ContentStore::new(Box::new(source)))
            }
            (None, None) => Err(SiteError::Config("no content source configured".into())),
        }
    }
}

/// Explicit path (must exist), else `./picksite.toml`, else `~/.picksite/config.toml`
fn config_file(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(SiteError::Config(format!(
                "config file '{}' not found",
                path.display()
            )));
        }
        return Ok(Some(path.to_path_buf()));
    }

    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Ok(Some(local));
    }

    Ok(BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".picksite").join("config.toml"))
        .filter(|path| path.is_file()))
}
