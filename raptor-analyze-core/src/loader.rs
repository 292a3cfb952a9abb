//! Loading of raptor JSON logs into per-metric sample sets.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::metric::MetricName;

/// Errors that can occur while loading a run's log files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The log file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The log file is not valid JSON or lacks the expected `suites` field.
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A raptor log document. Only the suites are of interest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaptorLog {
    pub suites: Vec<Suite>,
}

/// One named measurement inside a log's `suites` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suite {
    pub name: String,
    /// Page-load time for this suite.
    pub value: f64,
}

impl RaptorLog {
    /// Parse a log document from its JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Samples gathered from the log files directly inside one directory.
///
/// Every metric has a bucket, even when no suite matched it.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSamples {
    samples: BTreeMap<MetricName, Vec<f64>>,
}

impl Default for RunSamples {
    fn default() -> Self {
        Self::new()
    }
}

impl RunSamples {
    /// Create an empty set of buckets, one per metric.
    pub fn new() -> Self {
        Self {
            samples: MetricName::ALL.into_iter().map(|m| (m, Vec::new())).collect(),
        }
    }

    /// Add every suite of a log to the buckets of the metrics it matches.
    pub fn add_log(&mut self, log: &RaptorLog) {
        for suite in &log.suites {
            for metric in MetricName::matching(&suite.name) {
                self.push(metric, suite.value);
            }
        }
    }

    /// Append a single sample to a metric's bucket.
    pub fn push(&mut self, metric: MetricName, value: f64) {
        self.samples.entry(metric).or_default().push(value);
    }

    /// Samples recorded for a metric.
    pub fn get(&self, metric: MetricName) -> &[f64] {
        self.samples.get(&metric).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over all metrics and their samples in report order.
    pub fn iter(&self) -> impl Iterator<Item = (MetricName, &[f64])> {
        self.samples.iter().map(|(m, s)| (*m, s.as_slice()))
    }

    /// Total number of samples across all metrics.
    pub fn total_samples(&self) -> usize {
        self.samples.values().map(Vec::len).sum()
    }
}

/// Load a single log file.
pub fn load_log(path: &Path) -> Result<RaptorLog, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    RaptorLog::from_json(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load all log files of a run and merge their samples.
///
/// The first file that fails to load aborts the whole run.
pub fn load_run<P: AsRef<Path>>(paths: &[P]) -> Result<RunSamples, LoadError> {
    let mut samples = RunSamples::new();

    for path in paths {
        let log = load_log(path.as_ref())?;
        debug!(
            path = %path.as_ref().display(),
            suites = log.suites.len(),
            "loaded log"
        );
        samples.add_log(&log);
    }

    debug!(
        files = paths.len(),
        samples = samples.total_samples(),
        "loaded run"
    );

    Ok(samples)
}
