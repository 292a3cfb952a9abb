use std::fs::File;
use std::path::PathBuf;

use tracing::debug;

use super::{format_value, ReportError, Reporter, RunReport};

/// Column headers written at the top of every results file.
pub const CSV_HEADER: [&str; 6] = [
    "",
    "Average",
    "Maximum Difference",
    "Maximum",
    "Minimum",
    "Maximum Deviation from Average",
];

/// A reporter that writes each run's statistics to a CSV file inside the run directory.
///
/// The file is recreated for every run, so it only ever holds the rows of
/// the most recent run of that directory.
#[derive(Debug, Clone)]
pub struct CsvReporter {
    file_name: String,
}

impl CsvReporter {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    /// Where the results of a run are written.
    pub fn output_path(&self, run: &RunReport) -> PathBuf {
        run.directory.join(&self.file_name)
    }
}

impl Reporter for CsvReporter {
    fn report(&mut self, run: &RunReport) -> Result<(), ReportError> {
        let path = self.output_path(run);
        let mut writer = csv::Writer::from_writer(File::create(&path)?);

        writer.write_record(CSV_HEADER)?;
        for (metric, summary) in run.summaries() {
            writer.write_record([
                metric.to_string(),
                format_value(summary.average),
                format_value(summary.max_difference),
                format_value(summary.maximum),
                format_value(summary.minimum),
                format_value(summary.max_deviation),
            ])?;
        }
        writer.flush()?;

        debug!(path = %path.display(), "wrote csv results");
        Ok(())
    }
}
