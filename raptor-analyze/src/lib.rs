//! raptor-analyze: summary statistics for raptor page-load benchmark logs
//!
//! This library walks a directory tree of raptor JSON logs and reports
//! per-website timing statistics for every directory that holds logs.

pub mod cli;
pub mod config;
pub mod walker;

// Re-export core types for convenience
pub use raptor_analyze_core::{
    CsvReporter, MeanInterval, MetricName, Reporter, RunReport, StatsError, Summary,
    TerminalReporter,
};

// Re-export main types from this crate
pub use cli::Cli;
pub use config::{Config, WalkOptions};
pub use walker::{
    analyze, exit_code, RunError, RunFailure, WalkError, WalkSummary, Walker, EXIT_INVALID_INPUT,
    EXIT_RUN_FAILED, EXIT_SUCCESS,
};
