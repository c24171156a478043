// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for lava-report
//!
//! None of these abort a run. The reporter and driver log them and carry on.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors from delivering a single result
#[derive(Debug, Error)]
pub enum ReportError {
    /// The native command could not be started at all
    #[error("failed to launch {command}: {source}")]
    Launch {
        /// Command that was invoked
        command: String,
        /// Underlying spawn error
        #[source]
        source: std::io::Error,
    },

    /// The native command ran but reported failure
    #[error("{command} exited with {status}")]
    Exit {
        /// Command that was invoked
        command: String,
        /// Exit status of the command
        status: ExitStatus,
    },

    /// Writing a signal line to the output stream failed
    #[error("failed to write signal: {0}")]
    Signal(#[from] std::io::Error),
}

impl ReportError {
    /// Whether the native command is unusable for the rest of the run
    #[must_use]
    pub fn is_launch_failure(&self) -> bool {
        matches!(self, Self::Launch { .. })
    }
}

/// Errors from reading one result file
#[derive(Debug, Error)]
pub enum DriverError {
    /// The path does not exist
    #[error("Not a file: {}", path.display())]
    NotFound {
        /// Path that was requested
        path: PathBuf,
    },

    /// The file exists but could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

impl DriverError {
    pub(crate) fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}
