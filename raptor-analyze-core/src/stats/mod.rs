use statrs::statistics::Statistics;
use thiserror::Error;

/// Errors raised while computing summary statistics.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// Statistics were requested over an empty sample set.
    #[error("no samples")]
    EmptySample,

    /// The mean interval cannot be applied.
    #[error("{0}")]
    Configuration(String),
}

/// Summary statistics for one metric of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub average: f64,
    /// Spread between the largest and smallest sample.
    pub max_difference: f64,
    pub maximum: f64,
    pub minimum: f64,
    /// Largest absolute distance of any sample from the average.
    pub max_deviation: f64,
    /// Number of samples the statistics were computed over.
    pub sample_count: usize,
}

/// Compute summary statistics, optionally over a trimmed window only.
///
/// Fails with [`StatsError::EmptySample`] if no samples remain after trimming.
pub fn compute(samples: &[f64], interval: Option<MeanInterval>) -> Result<Summary, StatsError> {
    match interval {
        Some(interval) => summarize(&interval.trim(samples)),
        None => summarize(samples),
    }
}

/// Compute summary statistics over the given samples as-is.
pub fn summarize(samples: &[f64]) -> Result<Summary, StatsError> {
    if samples.is_empty() {
        return Err(StatsError::EmptySample);
    }

    let maximum = Statistics::max(samples);
    let minimum = Statistics::min(samples);
    // Rounding must not push the mean outside the sample range.
    let average = Statistics::mean(samples).clamp(minimum, maximum);
    let max_deviation = Statistics::abs_max(samples.iter().map(|x| x - average));

    Ok(Summary {
        average,
        max_difference: maximum - minimum,
        maximum,
        minimum,
        max_deviation,
        sample_count: samples.len(),
    })
}

mod interval;
pub use interval::MeanInterval;
