//! Configuration loading and data path resolution
//!
//! Bootstrap configuration lives in a small TOML file. Every setting has a
//! built-in default, so a missing file never stops the dashboard.
//!
//! Config file resolution priority:
//! 1. Command-line argument (highest priority)
//! 2. `PLEDGE_CONFIG` environment variable
//! 3. User config directory (`<config_dir>/pledge/config.toml`)
//! 4. Built-in defaults (fallback)

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::dates::Month;
use crate::{Error, Result};

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "PLEDGE_CONFIG";

/// Environment variable naming the source data file
pub const DATA_ENV_VAR: &str = "PLEDGE_DATA";

/// Data file used when nothing else names one
pub const DEFAULT_DATA_PATH: &str = "data/data.csv";

/// Longest delivery timeline window, in months
pub const MAX_TIMELINE_MONTHS: usize = 1200;

/// Dashboard configuration loaded from TOML
///
/// ```toml
/// data_path = "data/data.csv"
/// tracked_parties = ["National", "ACT", "NZ First"]
/// top_categories = 10
///
/// [timeline]
/// start = "2023-12"
/// end = "2026-11"
///
/// [logging]
/// level = "info"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardConfig {
    /// Source data file (optional; see [`resolve_data_path`])
    #[serde(default)]
    pub data_path: Option<PathBuf>,

    /// Parties shown in the per-party breakdown, in display order
    #[serde(default = "default_tracked_parties")]
    pub tracked_parties: Vec<String>,

    /// Number of categories kept in the top-category view
    #[serde(default = "default_top_categories")]
    pub top_categories: usize,

    /// Number of commitments kept in the upcoming due dates view
    #[serde(default = "default_upcoming_limit")]
    pub upcoming_limit: usize,

    /// Rows per page of the commitment list
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Month window of the delivery timeline
    #[serde(default)]
    pub timeline: TimelineWindow,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Inclusive month window of the delivery timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TimelineWindow {
    pub start: Month,
    pub end: Month,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_tracked_parties() -> Vec<String> {
    vec!["National".to_string(), "ACT".to_string(), "NZ First".to_string()]
}

fn default_top_categories() -> usize {
    10
}

fn default_upcoming_limit() -> usize {
    8
}

fn default_page_size() -> usize {
    100
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TimelineWindow {
    /// December 2023 through November 2026
    fn default() -> Self {
        Self {
            start: Month::from_parts(2023, 12),
            end: Month::from_parts(2026, 11),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            tracked_parties: default_tracked_parties(),
            top_categories: default_top_categories(),
            upcoming_limit: default_upcoming_limit(),
            page_size: default_page_size(),
            timeline: TimelineWindow::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DashboardConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Resolve the config file and load it, degrading to defaults.
    ///
    /// Nothing is logged; the returned [`ConfigSource`] says how the
    /// configuration was found so the caller can report it once logging is
    /// up. A file that exists but fails to parse or validate is an error.
    pub fn resolve(cli_arg: Option<&Path>) -> Result<(Self, ConfigSource)> {
        match resolve_config_path(cli_arg) {
            Some(path) if path.exists() => {
                let config = Self::load(&path)?;
                Ok((config, ConfigSource::File(path)))
            }
            Some(path) => Ok((Self::default(), ConfigSource::Missing(path))),
            None => Ok((Self::default(), ConfigSource::Defaults)),
        }
    }

    /// [`resolve`](Self::resolve) and log the outcome.
    ///
    /// A missing file logs a warning and yields defaults.
    pub fn load_or_default(cli_arg: Option<&Path>) -> Result<Self> {
        let (config, source) = Self::resolve(cli_arg)?;
        source.log();
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.timeline.start > self.timeline.end {
            return Err(Error::Config(format!(
                "timeline start {} is after end {}",
                self.timeline.start, self.timeline.end
            )));
        }
        let months = Month::span(self.timeline.start, self.timeline.end);
        if months > MAX_TIMELINE_MONTHS {
            return Err(Error::Config(format!(
                "timeline window covers {} months, at most {} allowed",
                months, MAX_TIMELINE_MONTHS
            )));
        }
        if self.page_size == 0 {
            return Err(Error::Config("page_size must be at least 1".to_string()));
        }
        if self.tracked_parties.iter().any(|p| p.trim().is_empty()) {
            return Err(Error::Config("tracked_parties contains an empty name".to_string()));
        }
        Ok(())
    }
}

/// How [`DashboardConfig::resolve`] found the configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Loaded from this file
    File(PathBuf),
    /// This file was named but does not exist; defaults are in use
    Missing(PathBuf),
    /// No file was named or found; defaults are in use
    Defaults,
}

impl ConfigSource {
    /// Report the resolution outcome; a named but missing file is a warning
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => info!("Configuration loaded from {}", path.display()),
            ConfigSource::Missing(path) => warn!(
                "Config file {} not found, using built-in defaults",
                path.display()
            ),
            ConfigSource::Defaults => info!("No config file found, using built-in defaults"),
        }
    }
}

/// Pick the config file path by priority.
///
/// Explicit paths (argument or environment) are returned even when missing
/// so the caller can report them; the user config directory is only returned
/// when the file exists there.
pub fn resolve_config_path(cli_arg: Option<&Path>) -> Option<PathBuf> {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return Some(path.to_path_buf());
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    // Priority 3: User config directory
    dirs::config_dir()
        .map(|d| d.join("pledge").join("config.toml"))
        .filter(|p| p.exists())
}

/// Pick the source data file by priority: argument, `PLEDGE_DATA`,
/// configuration, then [`DEFAULT_DATA_PATH`]
pub fn resolve_data_path(cli_arg: Option<&Path>, config: &DashboardConfig) -> PathBuf {
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    if let Ok(path) = std::env::var(DATA_ENV_VAR) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    config
        .data_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH))
}
