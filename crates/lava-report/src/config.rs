//! Configuration for lava-report
//!
//! This module provides the command line and environment configuration for
//! a reporting run: where to find result files, how to name test cases, and
//! how to report them.

use std::path::PathBuf;

use clap::Parser;

use crate::discover::DEFAULT_EXTENSION;
use crate::driver::RunOptions;
use crate::reporter::DEFAULT_COMMAND;
use crate::summary::SummaryFormat;

/// Parse test result files and report them to LAVA
#[derive(Parser, Debug, Clone)]
#[command(name = "lava-report")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Root directory searched recursively for result files
    ///
    /// Only used when no files are given explicitly.
    #[arg(short, long, env = "LAVA_REPORT_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Result file to parse (repeatable)
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Additional result files
    ///
    /// Arguments that are not existing files are ignored.
    #[arg(value_name = "FILES")]
    pub extra_files: Vec<PathBuf>,

    /// Prefix prepended to every test case name
    #[arg(short, long, env = "LAVA_REPORT_PREFIX", default_value = "")]
    pub prefix: String,

    /// Exit successfully even when a test failed
    #[arg(long, default_value = "false")]
    pub no_exit_on_fail: bool,

    /// Quiet mode - only warnings and errors, and no summary
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,

    /// Enable verbose logging (debug level)
    ///
    /// Logs every dropped line and every delivered result. Logs are written
    /// to stderr so they never mix with signals on stdout.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Do not print the end-of-run summary
    #[arg(long, default_value = "false")]
    pub no_summary: bool,

    /// Emit signal lines even if the native command exists
    #[arg(long, default_value = "false")]
    pub force_signal: bool,

    /// Native reporting command
    #[arg(long, env = "LAVA_REPORT_COMMAND", default_value = DEFAULT_COMMAND)]
    pub command: String,

    /// Extension of result files found under the root
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Format of the end-of-run summary
    #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
    pub summary_format: SummaryFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            files: Vec::new(),
            extra_files: Vec::new(),
            prefix: String::new(),
            no_exit_on_fail: false,
            quiet: false,
            verbose: false,
            no_summary: false,
            force_signal: false,
            command: DEFAULT_COMMAND.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            summary_format: SummaryFormat::Text,
        }
    }
}

impl Config {
    /// Explicitly requested files
    ///
    /// `--file` paths are kept as given so that missing ones can be
    /// reported; positional paths are only kept if they are existing files.
    #[must_use]
    pub fn explicit_files(&self) -> Vec<PathBuf> {
        let mut files = self.files.clone();
        for path in &self.extra_files {
            if path.is_file() {
                files.push(path.clone());
            } else {
                tracing::debug!(path = %path.display(), "Ignoring argument that is not a file");
            }
        }
        files
    }

    /// Whether a failed test makes the process exit non-zero
    #[must_use]
    pub fn fail_on_failure(&self) -> bool {
        !self.no_exit_on_fail
    }

    /// Whether the end-of-run summary is printed
    #[must_use]
    pub fn summary_enabled(&self) -> bool {
        !self.no_summary && !self.quiet
    }

    /// Settings for the reporting pipeline
    #[must_use]
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            prefix: self.prefix.clone(),
            force_signal: self.force_signal,
            fail_on_failure: self.fail_on_failure(),
            command: self.command.clone(),
        }
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}
