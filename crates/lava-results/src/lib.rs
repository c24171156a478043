// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! lava-results: Tolerant test-result log parsing for lava-report
//!
//! This library crate turns free-form result lines, as printed by many
//! different test runners, into normalized `(name, outcome)` pairs. Parsing
//! never fails: lines that do not look like results are simply dropped.
//!
//! # Example
//!
//! ```
//! use lava_results::{Outcome, parse_log};
//!
//! let log = "# kselftest\nboot: PASS\nTEST_CASE_ID=dma RESULT=abort\n";
//! let results = parse_log(log);
//!
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[1].name, "dma");
//! assert_eq!(results[1].outcome, Outcome::Fail);
//! ```

#![warn(missing_docs)]

pub mod ansi;
pub mod classify;
pub mod outcome;

pub use classify::{
    LineRule, ParsedRecord, classify, is_comment, parse_line, parse_log, split_lines,
};
pub use outcome::{Outcome, TestCaseResult, normalize};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::classify::{is_comment, parse_line};
    pub use crate::outcome::{Outcome, TestCaseResult};
}
