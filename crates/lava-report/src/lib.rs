//! lava-report library
//!
//! This module exports the reporting pipeline of lava-report for use in
//! integration tests and as a library: discovery of result files, the
//! per-run driver, the reporting strategy and the run summary.

pub mod config;
pub mod discover;
pub mod driver;
pub mod error;
pub mod reporter;
pub mod summary;

#[cfg(test)]
mod test_support;
