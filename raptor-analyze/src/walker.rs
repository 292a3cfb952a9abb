//! Recursive discovery and summarization of raptor runs.
//!
//! Every directory holding log files is one run. Subdirectories are walked
//! and reported first, then the directory's own logs, so a report only ever
//! covers the files directly inside its directory.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use raptor_analyze_core::{
    load_run, CsvReporter, LoadError, ReportError, Reporter, RunReport, TerminalReporter,
};

use crate::config::{Config, WalkOptions};

/// Exit code for a completed walk where every run was reported.
pub const EXIT_SUCCESS: u8 = 0;
/// Exit code for an invalid root directory or configuration.
pub const EXIT_INVALID_INPUT: u8 = 1;
/// Exit code when at least one run could not be analyzed.
pub const EXIT_RUN_FAILED: u8 = 2;

/// Errors that stop the whole walk.
#[derive(Debug, Error)]
pub enum WalkError {
    /// The root directory does not exist or is not a directory.
    #[error("Invalid path to logs: {}", .0.display())]
    InvalidRoot(PathBuf),

    /// Writing to the report output failed.
    #[error("Failed to write report output: {0}")]
    Output(#[from] io::Error),
}

/// Errors that fail a single run without stopping the walk.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to read directory: {0}")]
    ReadDir(#[source] io::Error),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

/// A directory whose run could not be reported.
#[derive(Debug)]
pub struct RunFailure {
    pub directory: PathBuf,
    pub error: RunError,
}

/// What a walk did.
#[derive(Debug, Default)]
pub struct WalkSummary {
    /// Number of runs whose statistics were reported.
    pub runs_reported: usize,
    /// Number of metric summaries skipped because they had no samples.
    pub skipped_metrics: usize,
    /// Directories without any entries.
    pub empty_directories: Vec<PathBuf>,
    pub failures: Vec<RunFailure>,
}

impl WalkSummary {
    /// Whether every discovered run was reported.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Entries of one directory, split into log files and subdirectories.
#[derive(Debug, Default, PartialEq)]
struct DirectoryListing {
    logs: Vec<PathBuf>,
    subdirectories: Vec<PathBuf>,
    /// Whether the directory had any entries at all.
    is_empty: bool,
}

impl DirectoryListing {
    fn read(directory: &Path, log_extension: &str) -> io::Result<Self> {
        let mut entries = std::fs::read_dir(directory)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<io::Result<Vec<_>>>()?;
        entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let is_empty = entries.is_empty();
        let suffix = format!(".{}", log_extension);
        let logs = entries
            .iter()
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.ends_with(&suffix))
            })
            .cloned()
            .collect();
        let subdirectories = entries.into_iter().filter(|path| path.is_dir()).collect();

        Ok(Self {
            logs,
            subdirectories,
            is_empty,
        })
    }
}

/// Walks a directory tree, reporting one run per directory with log files.
pub struct Walker<W: Write> {
    options: WalkOptions,
    terminal: TerminalReporter<W>,
    csv: Option<CsvReporter>,
}

impl<W: Write> Walker<W> {
    /// Create a walker reporting to an arbitrary writer.
    pub fn with_writer(options: WalkOptions, writer: W) -> Self {
        let terminal = TerminalReporter::with_writer(writer, options.colors);
        let csv = options.csv_file_name.clone().map(CsvReporter::new);
        Self {
            options,
            terminal,
            csv,
        }
    }

    /// Consume the walker, returning the report writer.
    pub fn into_inner(self) -> W {
        self.terminal.into_inner()
    }

    /// Walk the tree under `root`, reporting every run found.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::InvalidRoot`] if `root` is not an existing
    /// directory. Failures of individual runs are collected in the summary.
    pub fn run(&mut self, root: &Path) -> Result<WalkSummary, WalkError> {
        if !root.is_dir() {
            let err = WalkError::InvalidRoot(root.to_path_buf());
            self.terminal.notice(&err.to_string())?;
            return Err(err);
        }

        let mut summary = WalkSummary::default();
        self.walk(root, &mut summary)?;

        info!(
            runs = summary.runs_reported,
            failures = summary.failures.len(),
            "walk finished"
        );
        Ok(summary)
    }

    fn walk(&mut self, directory: &Path, summary: &mut WalkSummary) -> Result<(), WalkError> {
        debug!(directory = %directory.display(), "entering directory");

        let listing = match DirectoryListing::read(directory, &self.options.log_extension) {
            Ok(listing) => listing,
            Err(e) => {
                self.record_failure(directory, RunError::ReadDir(e), summary)?;
                return Ok(());
            }
        };

        if listing.is_empty {
            self.terminal
                .notice(&format!("No runs were detected in {}.", directory.display()))?;
            summary.empty_directories.push(directory.to_path_buf());
            return Ok(());
        }

        for subdirectory in &listing.subdirectories {
            self.walk(subdirectory, summary)?;
        }

        if listing.logs.is_empty() {
            return Ok(());
        }
        if !listing.logs.iter().all(|path| path.is_file()) {
            warn!(
                directory = %directory.display(),
                "skipping run: not every log path is a regular file"
            );
            return Ok(());
        }

        match self.analyze_run(directory, &listing.logs) {
            Ok(report) => {
                summary.runs_reported += 1;
                summary.skipped_metrics += report.skipped_count();
            }
            Err(e) => self.record_failure(directory, e, summary)?,
        }
        Ok(())
    }

    /// Load, summarize and report the logs of one directory.
    fn analyze_run(&mut self, directory: &Path, logs: &[PathBuf]) -> Result<RunReport, RunError> {
        let samples = load_run(logs)?;
        let report = RunReport::build(directory, &samples, self.options.mean_interval);

        self.terminal.report(&report)?;
        if let Some(csv) = &mut self.csv {
            csv.report(&report)?;
        }

        Ok(report)
    }

    fn record_failure(
        &mut self,
        directory: &Path,
        error: RunError,
        summary: &mut WalkSummary,
    ) -> Result<(), WalkError> {
        warn!(directory = %directory.display(), error = %error, "run failed");
        self.terminal.notice(&format!(
            "Failed to analyze {}: {}",
            directory.display(),
            error
        ))?;
        summary.failures.push(RunFailure {
            directory: directory.to_path_buf(),
            error,
        });
        Ok(())
    }
}

/// Map the outcome of a walk to the process exit code.
pub fn exit_code(outcome: &Result<WalkSummary, WalkError>) -> u8 {
    match outcome {
        Ok(summary) if summary.is_success() => EXIT_SUCCESS,
        Ok(_) => EXIT_RUN_FAILED,
        Err(WalkError::InvalidRoot(_)) => EXIT_INVALID_INPUT,
        Err(WalkError::Output(_)) => EXIT_RUN_FAILED,
    }
}

/// Validate `config`, walk `root` and report to `writer`, returning the exit code.
///
/// An invalid configuration is reported before anything is walked.
pub fn analyze<W: Write>(config: &Config, root: &Path, writer: &mut W) -> u8 {
    let options = match config.options() {
        Ok(options) => options,
        Err(e) => {
            warn!(error = %e, "invalid configuration");
            // The exit code already reports the failure if the notice cannot be written.
            let _ = writeln!(writer, "Invalid configuration: {}", e);
            return EXIT_INVALID_INPUT;
        }
    };

    let mut walker = Walker::with_writer(options, writer);
    let outcome = walker.run(root);
    if let Ok(summary) = &outcome {
        if !summary.is_success() {
            warn!(
                failed = summary.failures.len(),
                total = summary.failures.len() + summary.runs_reported,
                "some runs failed"
            );
        }
    }
    exit_code(&outcome)
}
