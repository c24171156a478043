// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for control-sequence stripping

#![no_main]

use libfuzzer_sys::fuzz_target;

use lava_results::ansi::strip;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);
    let once = strip(&input);

    assert!(!once.contains('\x1b'));
    assert_eq!(strip(&once), once);
});
