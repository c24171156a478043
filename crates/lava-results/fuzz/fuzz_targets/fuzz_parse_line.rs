// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for result line parsing
//!
//! Input is decoded the same way result files are read, replacing invalid
//! UTF-8, so every byte string exercises the classifier.

#![no_main]

use libfuzzer_sys::fuzz_target;

use lava_results::{is_comment, parse_line};

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);

    for line in input.lines() {
        if is_comment(line) {
            continue;
        }
        if let Some(result) = parse_line(line) {
            assert!(!result.name.is_empty());
        }
    }
});
