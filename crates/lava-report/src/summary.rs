// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Run summary and exit status

use clap::ValueEnum;
use lava_results::Outcome;
use serde::Serialize;

use crate::reporter::ReportingMode;

/// Per-outcome counts for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Results reported
    pub total: usize,
    /// Results reported as pass
    pub pass: usize,
    /// Results reported as fail
    pub fail: usize,
    /// Results reported as skip
    pub skip: usize,
}

impl RunSummary {
    /// Count one reported result
    pub fn record(&mut self, outcome: Outcome) {
        self.total += 1;
        match outcome {
            Outcome::Pass => self.pass += 1,
            Outcome::Fail => self.fail += 1,
            Outcome::Skip => self.skip += 1,
        }
    }

    /// Check if any failure was reported
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.fail > 0
    }

    /// Process exit status for this run
    ///
    /// `1` when a failure was reported and `fail_on_failure` is set, `0`
    /// otherwise.
    #[must_use]
    pub fn exit_status(&self, fail_on_failure: bool) -> u8 {
        u8::from(fail_on_failure && self.has_failures())
    }

    /// Render the end-of-run summary
    ///
    /// `mode_label` is the native command name or `signals`.
    #[must_use]
    pub fn render(&self, format: SummaryFormat, mode: ReportingMode, mode_label: &str) -> String {
        match format {
            SummaryFormat::Text => format!(
                "Summary: TOTAL={} PASS={} FAIL={} SKIP={} (mode: {mode_label})",
                self.total, self.pass, self.fail, self.skip
            ),
            SummaryFormat::Json => {
                let report = SummaryReport {
                    counts: self,
                    mode,
                };
                serde_json::to_string(&report).unwrap_or_default()
            }
        }
    }
}

#[derive(Serialize)]
struct SummaryReport<'a> {
    #[serde(flatten)]
    counts: &'a RunSummary,
    mode: ReportingMode,
}

/// Output format for the run summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    /// One human-readable line
    #[default]
    Text,
    /// A single JSON object
    Json,
}
