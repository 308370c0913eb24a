//! Configuration for hubq.
//!
//! Config directory resolution order:
//! 1. Explicit path passed to Config::with_dir()
//! 2. HUBQ_CONFIG_DIR environment variable
//! 3. Default: platform config dir (e.g. ~/.config/hubq)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::params::FilterParams;
use crate::sidebar::search_url;
use crate::{Error, Result};

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_VAR: &str = "HUBQ_CONFIG_DIR";

/// Search service the listing navigates to.
pub const DEFAULT_SEARCH_ORIGIN: &str = "http://64.225.77.157:3000";

/// hubq configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding config.toml.
    #[serde(skip)]
    pub config_dir: PathBuf,

    /// Origin that encoded query strings are appended to.
    #[serde(default = "default_search_origin")]
    pub search_origin: String,
}

fn default_search_origin() -> String {
    DEFAULT_SEARCH_ORIGIN.to_string()
}

impl Config {
    /// Create a default config rooted at the given directory.
    pub fn with_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            search_origin: default_search_origin(),
        }
    }

    /// Create a default config using the standard directory resolution.
    pub fn default_location() -> Result<Self> {
        let config_dir = resolve_config_dir()?;
        Ok(Self::with_dir(config_dir))
    }

    /// Load config.toml from the resolved directory, or use defaults.
    pub fn load() -> Result<Self> {
        let config_dir = resolve_config_dir()?;
        Self::load_from(&config_dir)
    }

    /// Load config.toml from a specific directory, or use defaults.
    pub fn load_from(config_dir: &Path) -> Result<Self> {
        let config_path = config_dir.join("config.toml");

        if config_path.exists() {
            tracing::debug!(path = %config_path.display(), "loading config");
            let contents = std::fs::read_to_string(&config_path)?;
            let mut config: Config = toml::from_str(&contents)
                .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
            config.config_dir = config_dir.to_path_buf();
            Ok(config)
        } else {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            Ok(Self::with_dir(config_dir))
        }
    }

    /// Save config to config.toml, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(self.config_path(), contents)?;
        Ok(())
    }

    /// Write the config unless one already exists (or `force` is set).
    pub fn init(&self, force: bool) -> Result<()> {
        let path = self.config_path();
        if path.exists() && !force {
            return Err(Error::ConfigExists(path));
        }
        self.save()
    }

    /// Path to config.toml.
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Full search URL for a filter record.
    pub fn search_url(&self, params: &FilterParams) -> String {
        search_url(&self.search_origin, params)
    }
}

/// Resolve the config directory using the standard resolution order.
fn resolve_config_dir() -> Result<PathBuf> {
    // 1. Environment variable
    if let Ok(path) = std::env::var(CONFIG_DIR_VAR) {
        return Ok(PathBuf::from(path));
    }

    // 2. Platform config directory
    if let Some(proj_dirs) = ProjectDirs::from("", "", "hubq") {
        return Ok(proj_dirs.config_dir().to_path_buf());
    }

    // 3. Fallback to ~/.config/hubq
    let home = std::env::var("HOME")
        .map_err(|_| Error::Config("Could not determine home directory".to_string()))?;
    Ok(PathBuf::from(home).join(".config/hubq"))
}
