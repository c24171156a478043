// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! File iteration driver
//!
//! A [`Run`] owns everything that must not leak between runs: the reporter
//! (and with it the once-probed reporting mode) and the run summary. Each
//! line goes through strip, classify, normalize, report and count, in that
//! order.
//!
//! # Example
//!
//! ```
//! use lava_report::driver::Run;
//! use lava_report::reporter::{LavaTestCase, Reporter};
//!
//! let reporter = Reporter::new(LavaTestCase::default(), Vec::new(), "", true);
//! let mut run = Run::new(reporter);
//! run.process_line("boot: PASS");
//! run.process_line("# boot: FAIL");
//!
//! assert_eq!(run.summary().total, 1);
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use lava_results::{TestCaseResult, is_comment, parse_line, split_lines};
use tracing::{debug, info, warn};

use crate::error::DriverError;
use crate::reporter::{Delivery, LavaTestCase, NativeReporter, Reporter, ReportingMode};
use crate::summary::RunSummary;

/// Run-scoped settings for the reporting pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Prepended to every reported test case name
    pub prefix: String,
    /// Always emit signals, even if the native command exists
    pub force_signal: bool,
    /// Exit non-zero when any failure was reported
    pub fail_on_failure: bool,
    /// Native reporting command
    pub command: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            force_signal: false,
            fail_on_failure: true,
            command: crate::reporter::DEFAULT_COMMAND.to_string(),
        }
    }
}

/// Final state of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Counts of reported results
    pub summary: RunSummary,
    /// Reporting mode in effect when the run ended
    pub mode: ReportingMode,
    /// Native command name or `signals`
    pub mode_label: String,
}

/// One reporting run over any number of result files
pub struct Run<N, W> {
    reporter: Reporter<N, W>,
    summary: RunSummary,
}

impl<W: Write> Run<LavaTestCase, W> {
    /// Build a run that reports through `lava-test-case` or signals on `out`
    pub fn from_options(options: &RunOptions, out: W) -> Self {
        let native = LavaTestCase::new(options.command.as_str());
        Self::new(Reporter::new(
            native,
            out,
            options.prefix.as_str(),
            options.force_signal,
        ))
    }
}

impl<N: NativeReporter, W: Write> Run<N, W> {
    /// Start a run with an empty summary
    pub fn new(reporter: Reporter<N, W>) -> Self {
        Self {
            reporter,
            summary: RunSummary::default(),
        }
    }

    /// Feed one raw line through the pipeline
    ///
    /// Returns the result if the line was reported.
    pub fn process_line(&mut self, raw: &str) -> Option<TestCaseResult> {
        if is_comment(raw) {
            return None;
        }
        let Some(result) = parse_line(raw) else {
            debug!(line = raw, "No result on line");
            return None;
        };

        if self.reporter.report(&result.name, result.outcome) == Delivery::Failed {
            debug!(name = %result.name, "Result counted but not delivered");
        }
        self.summary.record(result.outcome);
        Some(result)
    }

    /// Process every line from `reader`
    ///
    /// A bare `\r` ends a line just like `\n` or `\r\n`. Invalid UTF-8 is
    /// replaced rather than rejected. Returns the number of results reported.
    ///
    /// # Errors
    ///
    /// Returns an IO error if reading fails; results already reported stay
    /// counted.
    pub fn process_reader<R: BufRead>(&mut self, reader: R) -> io::Result<usize> {
        let mut reported = 0;
        for chunk in reader.split(b'\n') {
            let chunk = chunk?;
            let text = String::from_utf8_lossy(&chunk);
            for line in split_lines(&text) {
                if self.process_line(line).is_some() {
                    reported += 1;
                }
            }
        }
        Ok(reported)
    }

    /// Process one result file
    ///
    /// # Errors
    ///
    /// Returns `DriverError::NotFound` if the file does not exist and
    /// `DriverError::Io` for any other read failure.
    pub fn process_file(&mut self, path: &Path) -> Result<usize, DriverError> {
        info!(path = %path.display(), "Parsing");
        let file = File::open(path).map_err(|e| DriverError::from_io(path.to_path_buf(), e))?;
        self.process_reader(BufReader::new(file))
            .map_err(|e| DriverError::from_io(path.to_path_buf(), e))
    }

    /// Process each file in turn, logging and skipping unreadable ones
    pub fn process_files(&mut self, paths: &[PathBuf]) {
        for path in paths {
            if let Err(e) = self.process_file(path) {
                warn!(error = %e, "Skipping result file");
            }
        }
    }

    /// Counts so far
    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    /// Access the reporter
    pub fn reporter(&self) -> &Reporter<N, W> {
        &self.reporter
    }

    /// End the run
    pub fn finish(self) -> RunOutcome {
        self.finish_with_output().0
    }

    /// End the run and hand back the signal output stream
    pub fn finish_with_output(mut self) -> (RunOutcome, W) {
        let outcome = RunOutcome {
            summary: self.summary,
            mode: self.reporter.mode(),
            mode_label: self.reporter.mode_label(),
        };
        (outcome, self.reporter.into_output())
    }
}
