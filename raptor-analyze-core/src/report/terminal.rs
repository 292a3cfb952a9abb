use std::io::{self, Write};

use colored::Colorize;

use super::{format_value, MetricOutcome, ReportError, Reporter, RunReport};
use crate::metric::MetricName;
use crate::stats::Summary;

const SEPARATOR: &str = "-----------------------";

/// A reporter that prints run statistics as plain text.
pub struct TerminalReporter<W: Write = io::Stdout> {
    writer: W,
    /// Whether to use colors in output (defaults to true).
    use_colors: bool,
}

impl TerminalReporter {
    /// Create a reporter printing to stdout with colors.
    pub fn new() -> Self {
        Self {
            writer: io::stdout(),
            use_colors: true,
        }
    }

    /// Create a reporter printing to stdout with color output disabled.
    pub fn without_colors() -> Self {
        Self {
            writer: io::stdout(),
            use_colors: false,
        }
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalReporter<W> {
    /// Create a reporter printing to an arbitrary writer.
    pub fn with_writer(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Consume the reporter, returning its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Print a one-line message to the report output.
    pub fn notice(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", message)
    }

    fn print_header(&mut self, label: &str, metric: MetricName) -> io::Result<()> {
        let header = format!("Results for {} : {}", label, metric);
        if self.use_colors {
            writeln!(self.writer, "{}", header.bold())
        } else {
            writeln!(self.writer, "{}", header)
        }
    }

    fn print_summary(
        &mut self,
        label: &str,
        metric: MetricName,
        summary: &Summary,
    ) -> io::Result<()> {
        writeln!(self.writer, "{}", SEPARATOR)?;
        self.print_header(label, metric)?;

        let rows = [
            ("Average", summary.average),
            ("Maximum Difference (max - min)", summary.max_difference),
            ("Maximum", summary.maximum),
            ("Minimum", summary.minimum),
            ("Maximum Deviation from Average", summary.max_deviation),
        ];
        for (caption, value) in rows {
            writeln!(self.writer, "{}", caption)?;
            writeln!(self.writer, "{}", format_value(value))?;
        }

        writeln!(self.writer, "{}", SEPARATOR)?;
        Ok(())
    }

    fn print_skipped(&mut self, label: &str, metric: MetricName, reason: &str) -> io::Result<()> {
        let line = format!("No results for {} : {} ({})", label, metric, reason);
        if self.use_colors {
            writeln!(self.writer, "{}", line.yellow())
        } else {
            writeln!(self.writer, "{}", line)
        }
    }
}

impl<W: Write> Reporter for TerminalReporter<W> {
    fn report(&mut self, run: &RunReport) -> Result<(), ReportError> {
        for metric in &run.metrics {
            match &metric.outcome {
                MetricOutcome::Summarized(summary) => {
                    self.print_summary(&run.label, metric.metric, summary)?
                }
                MetricOutcome::Skipped(reason) => {
                    self.print_skipped(&run.label, metric.metric, &reason.to_string())?
                }
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::RunSamples;
    use std::path::Path;

    fn render(run: &RunReport) -> String {
        let mut reporter = TerminalReporter::with_writer(Vec::new(), false);
        reporter.report(run).unwrap();
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_summary_block_layout() {
        let mut samples = RunSamples::new();
        samples.push(MetricName::Amazon, 100.0);
        samples.push(MetricName::Amazon, 200.0);
        let run = RunReport::build(Path::new("/logs/run1"), &samples, None);

        let output = render(&run);
        let expected_amazon = "\
-----------------------
Results for run1 : amazon
Average
150.0
Maximum Difference (max - min)
100.0
Maximum
200.0
Minimum
100.0
Maximum Deviation from Average
50.0
-----------------------
";
        assert!(output.starts_with(expected_amazon));
        assert!(output.contains("No results for run1 : facebook (no samples)\n"));
        assert!(output.contains("No results for run1 : google (no samples)\n"));
        assert!(output.ends_with("No results for run1 : youtube (no samples)\n"));
    }

    #[test]
    fn test_metrics_in_fixed_order() {
        let mut samples = RunSamples::new();
        samples.push(MetricName::Youtube, 1.0);
        samples.push(MetricName::Facebook, 2.0);
        let run = RunReport::build(Path::new("nightly"), &samples, None);

        let output = render(&run);
        let facebook = output.find("Results for nightly : facebook").unwrap();
        let youtube = output.find("Results for nightly : youtube").unwrap();
        assert!(facebook < youtube);
    }

    #[test]
    fn test_notice() {
        let mut reporter = TerminalReporter::with_writer(Vec::new(), false);
        reporter.notice("No runs were detected.").unwrap();
        assert_eq!(reporter.into_inner(), b"No runs were detected.\n");
    }

    #[test]
    fn test_report_to_stdout() {
        let mut reporter = TerminalReporter::without_colors();
        let run = RunReport::build(Path::new("empty"), &RunSamples::new(), None);
        assert!(reporter.report(&run).is_ok());
    }
}
