//! Core types and utilities for raptor-analyze.
//!
//! This crate loads raptor page-load logs, computes per-website summary
//! statistics and renders them for the terminal or as CSV.

pub mod loader;
pub mod metric;
pub mod report;
pub mod stats;

// Re-export main types for convenience
pub use loader::{load_log, load_run, LoadError, RaptorLog, RunSamples, Suite};
pub use metric::MetricName;
pub use report::{
    CsvReporter, MetricOutcome, MetricReport, ReportError, Reporter, RunReport, TerminalReporter,
};
pub use stats::{compute, summarize, MeanInterval, StatsError, Summary};
