use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::loader::RunSamples;
use crate::metric::MetricName;
use crate::stats::{self, MeanInterval, StatsError, Summary};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result of summarizing one metric of a run.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricOutcome {
    Summarized(Summary),
    Skipped(StatsError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricReport {
    pub metric: MetricName,
    pub outcome: MetricOutcome,
}

/// Everything reported for the logs of one directory.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Base name of the run directory.
    pub label: String,
    pub directory: PathBuf,
    pub metrics: Vec<MetricReport>,
}

impl RunReport {
    /// Summarize every metric of a run.
    pub fn build(directory: &Path, samples: &RunSamples, interval: Option<MeanInterval>) -> Self {
        let metrics = samples
            .iter()
            .map(|(metric, values)| MetricReport {
                metric,
                outcome: match stats::compute(values, interval) {
                    Ok(summary) => MetricOutcome::Summarized(summary),
                    Err(e) => MetricOutcome::Skipped(e),
                },
            })
            .collect();

        Self {
            label: run_label(directory),
            directory: directory.to_path_buf(),
            metrics,
        }
    }

    /// Metrics that produced statistics, in report order.
    pub fn summaries(&self) -> impl Iterator<Item = (MetricName, &Summary)> {
        self.metrics.iter().filter_map(|m| match &m.outcome {
            MetricOutcome::Summarized(summary) => Some((m.metric, summary)),
            MetricOutcome::Skipped(_) => None,
        })
    }

    /// Number of metrics skipped for lack of samples.
    pub fn skipped_count(&self) -> usize {
        self.metrics
            .iter()
            .filter(|m| matches!(m.outcome, MetricOutcome::Skipped(_)))
            .count()
    }
}

/// The label a run is reported under: the final component of its directory.
pub fn run_label(directory: &Path) -> String {
    directory
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| directory.display().to_string())
}

/// Format a statistic the way it is shown in reports.
///
/// Always includes a fractional part, e.g. `200.0`.
pub fn format_value(value: f64) -> String {
    format!("{:?}", value)
}

pub trait Reporter {
    fn report(&mut self, run: &RunReport) -> Result<(), ReportError>;
}

mod csv_file;
mod terminal;
pub use csv_file::CsvReporter;
pub use terminal::TerminalReporter;
