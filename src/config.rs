use crate::error::{MediAssistError, Result};
use mediassist_common::{ApiBase, TOP_DOCTOR_COUNT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Environment variable overriding the configured API URL
pub const API_URL_ENV: &str = "MEDIASSIST_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: Option<String>,
    pub timeout_seconds: u64,
    pub top_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            timeout_seconds: 15,
            top_count: TOP_DOCTOR_COUNT,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Like `load`, but an unreadable file yields defaults
    pub fn load_lenient() -> Result<Self> {
        Ok(Self::load_lenient_from(&Self::config_path()?))
    }

    pub fn load_lenient_from(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => config,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ignoring unreadable config");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MediAssistError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("mediassist").join("config.json"))
    }

    /// API base to query
    ///
    /// Environment first, then the config file, then the built-in default.
    pub fn api_base(&self) -> Result<ApiBase> {
        let env = std::env::var(API_URL_ENV).ok();
        self.resolve_api_base(env.as_deref())
    }

    pub fn resolve_api_base(&self, env: Option<&str>) -> Result<ApiBase> {
        if let Some(url) = env.filter(|v| !v.trim().is_empty()) {
            return Ok(ApiBase::new(url)?);
        }
        match &self.api_url {
            Some(url) => Ok(ApiBase::new(url)?),
            None => Ok(ApiBase::default()),
        }
    }

    pub fn set_api_url(&mut self, url: String) -> Result<()> {
        let base = ApiBase::new(&url)?;
        self.api_url = Some(base.as_str().to_string());
        Ok(())
    }
}
