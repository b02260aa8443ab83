//! Configuration file handling
//!
//! The config lives at `<config dir>/artgrid/config.toml`. Every key is
//! optional; missing keys fall back to their defaults.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_ENDPOINT;
use crate::http::DEFAULT_TIMEOUT;
use crate::pagination::DEFAULT_ROWS_PER_PAGE;

const CONFIG_FILE: &str = "config.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtgridConfig {
    pub api: ApiConfig,
    pub tui: TuiConfig,
    pub log: LogConfig,
}

/// Remote collection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Collection endpoint, queried with `?page=N`
    pub endpoint: String,
    /// Rows per page (also sent as the API `limit`)
    pub rows_per_page: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

/// Terminal UI settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    pub theme: TuiTheme,
    /// Page loaded on startup
    pub start_page: u32,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: TuiTheme::default(),
            start_page: 1,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `env_logger` filter, overridden by `ARTGRID_LOG`
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Color theme selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TuiTheme {
    #[default]
    CatppuccinMocha,
    CatppuccinLatte,
    Dracula,
    Nord,
}

impl TuiTheme {
    pub fn all() -> &'static [TuiTheme] {
        &[
            TuiTheme::CatppuccinMocha,
            TuiTheme::CatppuccinLatte,
            TuiTheme::Dracula,
            TuiTheme::Nord,
        ]
    }

    pub fn next(self) -> TuiTheme {
        match self {
            TuiTheme::CatppuccinMocha => TuiTheme::CatppuccinLatte,
            TuiTheme::CatppuccinLatte => TuiTheme::Dracula,
            TuiTheme::Dracula => TuiTheme::Nord,
            TuiTheme::Nord => TuiTheme::CatppuccinMocha,
        }
    }
}

impl fmt::Display for TuiTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TuiTheme::CatppuccinMocha => "catppuccin-mocha",
            TuiTheme::CatppuccinLatte => "catppuccin-latte",
            TuiTheme::Dracula => "dracula",
            TuiTheme::Nord => "nord",
        };
        f.write_str(name)
    }
}

impl ArtgridConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "artgrid").context("Could not determine home directory")
    }

    /// Directory holding the config file
    pub fn config_dir() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.config_dir().to_path_buf())
    }

    /// Directory holding the log file
    pub fn data_dir() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.data_local_dir().to_path_buf())
    }

    /// Default config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load from `path`, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Save to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    /// Apply command-line overrides on top of the file values
    pub fn with_overrides(mut self, endpoint: Option<String>, rows: Option<u32>) -> Self {
        if let Some(endpoint) = endpoint {
            self.api.endpoint = endpoint;
        }
        if let Some(rows) = rows {
            self.api.rows_per_page = rows;
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs.max(1))
    }

    pub fn rows_per_page(&self) -> u32 {
        self.api.rows_per_page.max(1)
    }
}
