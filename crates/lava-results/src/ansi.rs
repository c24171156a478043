// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Terminal control-sequence stripping
//!
//! Result logs captured from a serial console or a coloured test runner
//! carry ANSI/VT100 CSI sequences such as `\x1b[0;32m`. They are removed
//! before any line is classified.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// ESC, `[`, parameter bytes, intermediate bytes, final byte.
///
/// The final byte is optional so a sequence cut off at end of line is still
/// consumed, and a lone ESC with no `[` is dropped on its own.
static CSI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1B(?:\[[0-?]*[ -/]*[@-~]?)?").expect("static regex must compile")
});

/// Remove all terminal escape sequences from `line`
///
/// The result never contains an ESC byte, so stripping twice is the same as
/// stripping once. Lines without ESC are returned borrowed.
///
/// # Example
///
/// ```
/// use lava_results::ansi::strip;
///
/// assert_eq!(strip("\x1b[32mboot: PASS\x1b[0m"), "boot: PASS");
/// ```
#[must_use]
pub fn strip(line: &str) -> Cow<'_, str> {
    if !line.contains('\x1b') {
        return Cow::Borrowed(line);
    }
    CSI_RE.replace_all(line, "")
}
