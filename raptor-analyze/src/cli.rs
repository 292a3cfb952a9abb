//! Command-line interface for raptor-analyze.

use crate::config::{Config, DEFAULT_CONFIG_FILE};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "raptor-analyze")]
#[command(about = "Summarize raptor page-load benchmark logs across a directory tree")]
#[command(version)]
pub struct Cli {
    /// Directory containing raptor logs to analyze (relative paths start at the executable's directory)
    #[arg(short, long)]
    pub directory: PathBuf,

    /// Enable CSV output, optionally naming the file written into each run directory
    #[arg(short, long, num_args = 0..=1, value_name = "FILE", default_missing_value = "")]
    pub csv: Option<String>,

    /// Percentage of samples kept around the median before computing statistics
    #[arg(short, long, visible_alias = "mean_value", value_name = "PERCENT")]
    pub mean_value: Option<f64>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to config file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply CLI overrides to the configuration.
    ///
    /// CLI arguments take precedence over config file values.
    /// A bare `--csv` enables CSV output with the configured file name.
    pub fn apply_to_config(&self, config: &mut Config) {
        if let Some(csv) = &self.csv {
            config.report.csv = true;
            if !csv.is_empty() {
                config.report.csv_file_name = csv.clone();
            }
        }

        if let Some(mean_value) = self.mean_value {
            config.stats.mean_interval = mean_value;
        }

        if self.no_color {
            config.report.colors = false;
        }
    }

    /// Resolve the root directory against `base` unless it is already absolute.
    pub fn root_directory(&self, base: &Path) -> PathBuf {
        if self.directory.is_absolute() {
            self.directory.clone()
        } else {
            base.join(&self.directory)
        }
    }
}
