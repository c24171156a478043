// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Result file discovery

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

/// Extension of result files when none is configured
pub const DEFAULT_EXTENSION: &str = "res";

/// Build the list of result files to process
///
/// Explicit files take precedence; paths that are not regular files are
/// logged and skipped. Without explicit files, `root` is walked recursively
/// for files ending in `.<extension>`, in path order.
#[must_use]
pub fn collect_files(root: &Path, explicit: &[PathBuf], extension: &str) -> Vec<PathBuf> {
    if !explicit.is_empty() {
        return explicit
            .iter()
            .filter(|path| {
                let is_file = path.is_file();
                if !is_file {
                    warn!(path = %path.display(), "Not a file");
                }
                is_file
            })
            .cloned()
            .collect();
    }

    if !root.is_dir() {
        debug!(root = %root.display(), "Search root is not a directory");
        return Vec::new();
    }

    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "Skipping unreadable path");
                None
            }
        })
        .map(walkdir::DirEntry::into_path)
        .filter(|path| path.extension() == Some(OsStr::new(extension)) && path.is_file())
        .collect()
}
