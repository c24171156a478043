// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Result reporting
//!
//! Each result is delivered either through the native `lava-test-case`
//! command or as a `LAVA_SIGNAL_TESTCASE` line on the output stream. The
//! choice is made once per run and degrades to signals whenever the native
//! path misbehaves:
//!
//! - a non-zero exit falls back to a signal for that one result
//! - a launch failure falls back and switches the run to signals for good

use std::env;
use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use lava_results::Outcome;
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::error::ReportError;

/// Native reporting command used when none is configured
pub const DEFAULT_COMMAND: &str = "lava-test-case";

/// A native way of recording a test outcome with the harness
pub trait NativeReporter {
    /// Name shown in logs and in the run summary
    fn name(&self) -> &str;

    /// Check whether the command can be found
    fn is_available(&self) -> bool;

    /// Record `outcome` for the fully prefixed test case `name`
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Launch` if the command cannot be started and
    /// `ReportError::Exit` if it exits unsuccessfully.
    fn record(&self, name: &str, outcome: Outcome) -> Result<(), ReportError>;
}

/// The `lava-test-case` executable, invoked as
/// `<command> <name> --result <pass|fail|skip>`
#[derive(Debug, Clone)]
pub struct LavaTestCase {
    command: String,
}

impl LavaTestCase {
    /// Use `command` as the reporting executable
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Resolve the command to an executable path
    #[must_use]
    pub fn locate(&self) -> Option<PathBuf> {
        find_executable(OsStr::new(&self.command))
    }
}

impl Default for LavaTestCase {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND)
    }
}

impl NativeReporter for LavaTestCase {
    fn name(&self) -> &str {
        &self.command
    }

    fn is_available(&self) -> bool {
        self.locate().is_some()
    }

    fn record(&self, name: &str, outcome: Outcome) -> Result<(), ReportError> {
        let status = Command::new(&self.command)
            .arg(name)
            .args(["--result", outcome.as_command_arg()])
            .status()
            .map_err(|source| ReportError::Launch {
                command: self.command.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ReportError::Exit {
                command: self.command.clone(),
                status,
            })
        }
    }
}

/// Find `command` the way a shell would
///
/// A command containing a path separator is checked as given; a bare name
/// is searched for in each `PATH` entry.
#[must_use]
pub fn find_executable(command: &OsStr) -> Option<PathBuf> {
    let as_path = Path::new(command);
    if as_path.components().count() > 1 {
        return is_executable(as_path).then(|| as_path.to_path_buf());
    }

    let path_var = env::var_os("PATH")?;
    env::split_paths(&path_var)
        .flat_map(|dir| candidates(&dir, command))
        .find(|candidate| is_executable(candidate))
}

#[cfg(windows)]
fn candidates(dir: &Path, command: &OsStr) -> Vec<PathBuf> {
    let base = dir.join(command);
    let mut exe = base.clone().into_os_string();
    exe.push(".exe");
    vec![base, PathBuf::from(exe)]
}

#[cfg(not(windows))]
fn candidates(dir: &Path, command: &OsStr) -> Vec<PathBuf> {
    vec![dir.join(command)]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// How results are delivered for the current run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportingMode {
    /// Through the native reporting command
    Native,
    /// As signal lines on the output stream
    Signal,
}

/// How a single result ended up being delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Recorded by the native command
    Native,
    /// Written as a signal line
    Signal,
    /// Neither path succeeded; the failure was logged
    Failed,
}

/// Format a signal line, including its blank-line padding
///
/// The padding keeps the harness's log scraper from gluing the signal to
/// neighbouring output.
#[must_use]
pub fn format_signal(prefix: &str, name: &str, outcome: Outcome) -> String {
    format!(
        "\n<<<LAVA_SIGNAL_TESTCASE TEST_CASE_ID={prefix}{name} RESULT={}>>>\n\n",
        outcome.as_signal()
    )
}

/// Delivers results using the run's reporting strategy
///
/// The availability probe runs at most once, on first use.
pub struct Reporter<N, W> {
    native: N,
    out: W,
    prefix: String,
    force_signal: bool,
    mode: Option<ReportingMode>,
}

impl<N: NativeReporter, W: Write> Reporter<N, W> {
    /// Create a reporter writing signals to `out`
    pub fn new(native: N, out: W, prefix: impl Into<String>, force_signal: bool) -> Self {
        Self {
            native,
            out,
            prefix: prefix.into(),
            force_signal,
            mode: None,
        }
    }

    /// The reporting mode, probing for the native command if not yet known
    pub fn mode(&mut self) -> ReportingMode {
        if let Some(mode) = self.mode {
            return mode;
        }

        let mode = if self.force_signal {
            ReportingMode::Signal
        } else if self.native.is_available() {
            ReportingMode::Native
        } else {
            ReportingMode::Signal
        };
        debug!(command = self.native.name(), ?mode, "Selected reporting mode");
        self.mode = Some(mode);
        mode
    }

    /// Label for the current mode, as shown in the run summary
    pub fn mode_label(&mut self) -> String {
        match self.mode() {
            ReportingMode::Native => self.native.name().to_string(),
            ReportingMode::Signal => "signals".to_string(),
        }
    }

    /// Report one result; never fails
    pub fn report(&mut self, name: &str, outcome: Outcome) -> Delivery {
        if self.mode() == ReportingMode::Native {
            let full_name = format!("{}{}", self.prefix, name);
            match self.native.record(&full_name, outcome) {
                Ok(()) => {
                    debug!(name = %full_name, %outcome, "Recorded with native command");
                    return Delivery::Native;
                }
                Err(e) => {
                    warn!(error = %e, "Native reporting failed; falling back to signal");
                    if e.is_launch_failure() {
                        warn!(
                            command = self.native.name(),
                            "Using signals for the rest of the run"
                        );
                        self.mode = Some(ReportingMode::Signal);
                    }
                }
            }
        }

        match self.emit_signal(name, outcome) {
            Ok(()) => Delivery::Signal,
            Err(e) => {
                error!(error = %e, name, "Could not report result");
                Delivery::Failed
            }
        }
    }

    fn emit_signal(&mut self, name: &str, outcome: Outcome) -> Result<(), ReportError> {
        self.out
            .write_all(format_signal(&self.prefix, name, outcome).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    /// Access the native reporter
    pub fn native(&self) -> &N {
        &self.native
    }

    /// Consume the reporter and return the signal output stream
    pub fn into_output(self) -> W {
        self.out
    }
}
