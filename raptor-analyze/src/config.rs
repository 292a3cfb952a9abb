//! Configuration loading for raptor-analyze.
//!
//! Supports loading configuration from TOML files, with sensible defaults
//! for all settings.

use anyhow::{Context, Result};
use raptor_analyze_core::{MeanInterval, StatsError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration for raptor-analyze.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Settings for report output.
    pub report: ReportConfig,
    /// Settings for statistic computation.
    pub stats: StatsConfig,
    /// Settings for discovering log files.
    pub walk: WalkConfig,
}

/// Configuration for report output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Whether to write a CSV file into every summarized directory.
    pub csv: bool,
    /// Name of the CSV file written into each summarized directory.
    pub csv_file_name: String,
    /// Whether to color the terminal report.
    pub colors: bool,
}

/// Configuration for statistic computation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Percentage of samples kept around the median (0 disables trimming).
    pub mean_interval: f64,
}

/// Configuration for discovering log files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// File extension identifying log files.
    pub log_extension: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            csv: false,
            csv_file_name: DEFAULT_CSV_FILE.to_string(),
            colors: true,
        }
    }
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            log_extension: "json".to_string(),
        }
    }
}

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = ".raptor-analyze.toml";

/// Default name of the per-run CSV file.
pub const DEFAULT_CSV_FILE: &str = "results.csv";

/// Validated settings shared by every directory of a walk.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkOptions {
    /// CSV file name to write into each run directory, if CSV output is enabled.
    pub csv_file_name: Option<String>,
    /// Trimmed window, if enabled.
    pub mean_interval: Option<MeanInterval>,
    pub log_extension: String,
    pub colors: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            csv_file_name: None,
            mean_interval: None,
            log_extension: "json".to_string(),
            colors: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from the given file if it exists, otherwise use defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be parsed.
    pub fn load_or_default(path: &Path) -> Result<Config> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Validate the configuration and produce the options used by the walker.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::Configuration`] if the mean interval is negative or
    /// rounds above 100%.
    pub fn options(&self) -> Result<WalkOptions, StatsError> {
        let mean_interval = MeanInterval::from_percent(self.stats.mean_interval)?;

        Ok(WalkOptions {
            csv_file_name: self.report.csv.then(|| self.report.csv_file_name.clone()),
            mean_interval,
            log_extension: self.walk.log_extension.clone(),
            colors: self.report.colors,
        })
    }
}
