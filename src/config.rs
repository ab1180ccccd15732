use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const API_URL_ENV: &str = "GITEXPLORE_API_URL";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ExplorerConfig {
    pub api_base_url: String,
    pub user_agent: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        ExplorerConfig {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: concat!("gitexplore/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ExplorerConfig {
    /// Resolves the effective config: flag, then environment, then file, then defaults.
    pub fn load(api_url_flag: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = match Self::config_path() {
            Some(path) => Self::load_from(&path)?,
            None => ExplorerConfig::default(),
        };

        let env_url = std::env::var(API_URL_ENV).ok();
        config.apply_overrides(api_url_flag, env_url.as_deref());
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(ExplorerConfig::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(serde_json::from_str(&contents).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed config {}: {}", path.display(), e);
            ExplorerConfig::default()
        }))
    }

    pub fn config_path() -> Option<PathBuf> {
        let home = std::env::var_os("HOME")?;
        Some(PathBuf::from(home).join(".config").join("gitexplore").join("config.json"))
    }

    fn apply_overrides(&mut self, flag: Option<&str>, env: Option<&str>) {
        let chosen = flag.or(env).map(str::trim).filter(|url| !url.is_empty());
        if let Some(url) = chosen {
            self.api_base_url = url.to_string();
        }
        self.api_base_url = self.api_base_url.trim_end_matches('/').to_string();
    }
}
