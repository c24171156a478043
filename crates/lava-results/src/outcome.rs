// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Test outcome types and result-token normalization

use std::fmt;

use serde::{Deserialize, Serialize};

/// A normalized test outcome
///
/// Every result token a runner may print is folded into one of these three
/// values by [`normalize`]. Tokens that do not fold are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Test passed (also covers expected failures)
    Pass,
    /// Test failed, errored or aborted
    Fail,
    /// Test was skipped
    Skip,
}

impl Outcome {
    /// Upper-case label used in the LAVA signal protocol
    #[must_use]
    pub fn as_signal(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Skip => "SKIP",
        }
    }

    /// Lower-case label passed to `lava-test-case --result`
    #[must_use]
    pub fn as_command_arg(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::Skip => "skip",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_signal())
    }
}

/// A test case name paired with its normalized outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCaseResult {
    /// Test case name, trimmed and without the name prefix
    pub name: String,
    /// Normalized outcome
    pub outcome: Outcome,
}

/// Normalize a raw result token into an [`Outcome`]
///
/// Only the leading run of ASCII letters is considered, so trailing noise
/// such as `PASS.` or `fail(3)` is ignored. Matching is case-insensitive.
///
/// | token | outcome |
/// |---|---|
/// | `PASS`, `XFAIL` | [`Outcome::Pass`] |
/// | `FAIL`, `ERROR`, `ABORT` | [`Outcome::Fail`] |
/// | `SKIP` | [`Outcome::Skip`] |
///
/// Anything else, including an empty token, yields `None`.
#[must_use]
pub fn normalize(token: &str) -> Option<Outcome> {
    let end = token
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(token.len());
    let word = token[..end].to_ascii_uppercase();

    match word.as_str() {
        "PASS" | "XFAIL" => Some(Outcome::Pass),
        "FAIL" | "ERROR" | "ABORT" => Some(Outcome::Fail),
        "SKIP" => Some(Outcome::Skip),
        _ => None,
    }
}
