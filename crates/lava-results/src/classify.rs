// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Line classification
//!
//! A result line is matched against four rules in a fixed priority order.
//! Structured shapes come first so that a line such as
//! `TEST_CASE_ID=foo RESULT=PASS` is never read as the loose
//! `<name> <token>` shape.
//!
//! | priority | rule | example |
//! |---|---|---|
//! | 1 | [`LineRule::SignalEmbedded`] | `<<<LAVA_SIGNAL_TESTCASE TEST_CASE_ID=foo RESULT=pass>>>` |
//! | 2 | [`LineRule::KeyValue`] | `TEST_CASE_ID=foo RESULT=pass (12ms)` |
//! | 3 | [`LineRule::NameColon`] | `foo bar : PASS` |
//! | 4 | [`LineRule::NameSpace`] | `foo PASS` |
//!
//! Once a rule matches, later rules are not tried, even if the token it
//! captured is not a recognized result.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::ansi;
use crate::outcome::{TestCaseResult, normalize};

/// The line shapes understood by [`classify`], highest priority first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineRule {
    /// A pre-existing `LAVA_SIGNAL_TESTCASE` line
    SignalEmbedded,
    /// `TEST_CASE_ID=<name> ... RESULT=<token>` without the signal wrapper
    KeyValue,
    /// `<name> : <token>`
    NameColon,
    /// `<name> <token>`
    NameSpace,
}

impl LineRule {
    /// All rules in the order they are tried
    pub const ALL: [Self; 4] = [
        Self::SignalEmbedded,
        Self::KeyValue,
        Self::NameColon,
        Self::NameSpace,
    ];

    fn regex(self) -> &'static Regex {
        match self {
            Self::SignalEmbedded => &SIGNAL_RE,
            Self::KeyValue => &KEY_VALUE_RE,
            Self::NameColon => &NAME_COLON_RE,
            Self::NameSpace => &NAME_SPACE_RE,
        }
    }
}

static SIGNAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^.*LAVA_SIGNAL_TESTCASE.*TEST_CASE_ID=([^\s>]+).*RESULT=([A-Za-z]+)")
        .expect("static regex must compile")
});

static KEY_VALUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^.*TEST_CASE_ID=([^\s>]+).*RESULT=([A-Za-z]+)")
        .expect("static regex must compile")
});

static NAME_COLON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([^:\s][^:]*)\s*:\s*([A-Za-z]+)").expect("static regex must compile")
});

static NAME_SPACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\S+)\s+([A-Za-z]+)").expect("static regex must compile")
});

/// A raw (name, token) pair extracted from one line
///
/// Both fields borrow from the classified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParsedRecord<'a> {
    /// Test case name, trimmed and non-empty
    pub name: &'a str,
    /// Raw result token, a run of ASCII letters
    pub token: &'a str,
    /// Rule that produced this record
    pub rule: LineRule,
}

impl ParsedRecord<'_> {
    /// Normalize the token and pair it with an owned copy of the name
    #[must_use]
    pub fn to_result(&self) -> Option<TestCaseResult> {
        normalize(self.token).map(|outcome| TestCaseResult {
            name: self.name.to_string(),
            outcome,
        })
    }
}

/// Classify a stripped, trimmed line
///
/// Returns the record produced by the first matching rule, or `None` when
/// the line is blank or matches no rule.
#[must_use]
pub fn classify(line: &str) -> Option<ParsedRecord<'_>> {
    if line.trim().is_empty() {
        return None;
    }

    LineRule::ALL.into_iter().find_map(|rule| {
        let caps = rule.regex().captures(line)?;
        let name = caps.get(1)?.as_str().trim();
        let token = caps.get(2)?.as_str();
        if name.is_empty() {
            return None;
        }
        Some(ParsedRecord { name, token, rule })
    })
}

/// Check whether a raw line is a `#` comment
#[must_use]
pub fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// Parse one raw log line into a normalized result
///
/// Strips control sequences, trims, classifies and normalizes. Comment
/// handling is left to the caller; see [`is_comment`].
///
/// # Example
///
/// ```
/// use lava_results::{Outcome, parse_line};
///
/// let result = parse_line("\x1b[32mboot_test: pass\x1b[0m").unwrap();
/// assert_eq!(result.name, "boot_test");
/// assert_eq!(result.outcome, Outcome::Pass);
///
/// assert!(parse_line("just-one-word").is_none());
/// ```
#[must_use]
pub fn parse_line(raw: &str) -> Option<TestCaseResult> {
    let stripped = ansi::strip(raw);
    let record = classify(stripped.trim())?;
    let result = record.to_result();
    if result.is_none() {
        tracing::trace!(rule = ?record.rule, token = record.token, "unrecognized result token");
    }
    result
}

/// Split text into lines, treating `\n`, `\r\n` and a bare `\r` as line ends
///
/// Serial consoles and progress output often end records with a lone
/// carriage return. Empty pieces are yielded too; they never classify.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\r', '\n'])
}

/// Parse every non-comment line of an in-memory log
#[must_use]
pub fn parse_log(text: &str) -> Vec<TestCaseResult> {
    split_lines(text)
        .filter(|line| !is_comment(line))
        .filter_map(parse_line)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Outcome;
    use similar_asserts::assert_eq;

    fn record(line: &str) -> ParsedRecord<'_> {
        classify(line).unwrap_or_else(|| panic!("expected a match for {line:?}"))
    }

    #[test]
    fn test_signal_embedded_line() {
        let r = record("<<<LAVA_SIGNAL_TESTCASE TEST_CASE_ID=usb_probe RESULT=pass>>>");
        assert_eq!(r.rule, LineRule::SignalEmbedded);
        assert_eq!(r.name, "usb_probe");
        assert_eq!(r.token, "pass");
    }

    #[test]
    fn test_signal_embedded_is_case_insensitive() {
        let r = record("<<<lava_signal_testcase test_case_id=usb_probe result=FAIL>>>");
        assert_eq!(r.rule, LineRule::SignalEmbedded);
        assert_eq!(r.name, "usb_probe");
        assert_eq!(r.token, "FAIL");
    }

    #[test]
    fn test_signal_name_stops_at_closing_marker() {
        let r = record("<<<LAVA_SIGNAL_TESTCASE TEST_CASE_ID=wifi>>> RESULT=skip");
        assert_eq!(r.name, "wifi");
        assert_eq!(r.token, "skip");
    }

    #[test]
    fn test_key_value_line_with_noise() {
        let r = record("[  12.3] TEST_CASE_ID=foo RESULT=FAIL noise");
        assert_eq!(r.rule, LineRule::KeyValue);
        assert_eq!(r.name, "foo");
        assert_eq!(r.token, "FAIL");
    }

    #[test]
    fn test_key_value_token_is_letter_run() {
        let r = record("TEST_CASE_ID=foo RESULT=pass123");
        assert_eq!(r.token, "pass");
    }

    #[test]
    fn test_name_colon_line() {
        let r = record("cpu hotplug stress : PASS");
        assert_eq!(r.rule, LineRule::NameColon);
        assert_eq!(r.name, "cpu hotplug stress");
        assert_eq!(r.token, "PASS");
    }

    #[test]
    fn test_name_colon_uses_first_colon() {
        let r = record("mytest: PASS: extra: FAIL");
        assert_eq!(r.name, "mytest");
        assert_eq!(r.token, "PASS");
    }

    #[test]
    fn test_name_colon_rejects_empty_name() {
        // No name before the colon, so only the loose rule applies
        let r = record(": PASS");
        assert_eq!(r.rule, LineRule::NameSpace);
        assert_eq!(r.name, ":");
    }

    #[test]
    fn test_name_space_line() {
        let r = record("gpio_loopback SKIP because no jumper");
        assert_eq!(r.rule, LineRule::NameSpace);
        assert_eq!(r.name, "gpio_loopback");
        assert_eq!(r.token, "SKIP");
    }

    #[test]
    fn test_key_value_wins_over_name_space() {
        let r = record("TEST_CASE_ID=foo RESULT=PASS");
        assert_eq!(r.rule, LineRule::KeyValue);
        assert_eq!(r.name, "foo");
    }

    #[test]
    fn test_signal_wins_over_name_colon() {
        let r = record("note: <<<LAVA_SIGNAL_TESTCASE TEST_CASE_ID=a RESULT=skip>>>");
        assert_eq!(r.rule, LineRule::SignalEmbedded);
        assert_eq!(r.name, "a");
    }

    #[test]
    fn test_name_colon_wins_over_name_space() {
        let r = record("boot: FAIL");
        assert_eq!(r.rule, LineRule::NameColon);
        assert_eq!(r.name, "boot");
    }

    #[test]
    fn test_no_match() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("   "), None);
        assert_eq!(classify("lonely"), None);
        assert_eq!(classify("name 42"), None);
    }

    #[test]
    fn test_matched_rule_does_not_fall_through() {
        // The colon rule matches with token "done", so the result is
        // discarded rather than retried as "status PASS"
        assert_eq!(parse_line("status: done PASS"), None);
    }

    #[test]
    fn test_parse_line_end_to_end() {
        let result = parse_line("mytest: PASS").expect("should parse");
        assert_eq!(result.name, "mytest");
        assert_eq!(result.outcome, Outcome::Pass);

        let result = parse_line("TEST_CASE_ID=foo RESULT=FAIL noise").expect("should parse");
        assert_eq!(result.name, "foo");
        assert_eq!(result.outcome, Outcome::Fail);
    }

    #[test]
    fn test_parse_line_strips_escape_sequences() {
        let result = parse_line("\x1b[1;32m  net_ping   PASS\x1b[0m\r").expect("should parse");
        assert_eq!(result.name, "net_ping");
        assert_eq!(result.outcome, Outcome::Pass);
    }

    #[test]
    fn test_parse_line_aliases() {
        assert_eq!(
            parse_line("flaky XFAIL").map(|r| r.outcome),
            Some(Outcome::Pass)
        );
        assert_eq!(
            parse_line("crashy: error").map(|r| r.outcome),
            Some(Outcome::Fail)
        );
        assert_eq!(parse_line("weird: bogus"), None);
    }

    #[test]
    fn test_is_comment() {
        assert!(is_comment("# header"));
        assert!(is_comment("   #indented"));
        assert!(!is_comment("test # PASS"));
        assert!(!is_comment(""));
    }

    #[test]
    fn test_split_lines_on_bare_carriage_return() {
        let lines: Vec<&str> = split_lines("a PASS\rb FAIL\r\nc SKIP\n").collect();
        assert_eq!(lines, vec!["a PASS", "b FAIL", "", "c SKIP", ""]);
    }

    #[test]
    fn test_parse_log_carriage_return_separates_records() {
        let results = parse_log("a PASS\rb FAIL\r# c FAIL\rd: skip");
        assert_eq!(
            results,
            vec![
                TestCaseResult {
                    name: "a".to_string(),
                    outcome: Outcome::Pass,
                },
                TestCaseResult {
                    name: "b".to_string(),
                    outcome: Outcome::Fail,
                },
                TestCaseResult {
                    name: "d".to_string(),
                    outcome: Outcome::Skip,
                },
            ]
        );
    }

    #[test]
    fn test_parse_log_skips_comments_and_noise() {
        let log = "# generated by runner\nboot: PASS\n\nrandom chatter here!\n# x FAIL\nTEST_CASE_ID=dma RESULT=skip\n";
        let results = parse_log(log);
        assert_eq!(
            results,
            vec![
                TestCaseResult {
                    name: "boot".to_string(),
                    outcome: Outcome::Pass,
                },
                TestCaseResult {
                    name: "dma".to_string(),
                    outcome: Outcome::Skip,
                },
            ]
        );
    }
}
