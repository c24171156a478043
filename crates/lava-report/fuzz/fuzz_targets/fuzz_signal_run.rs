// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for a whole signal-mode run over arbitrary file contents
//!
//! Every counted result must produce exactly one signal line.

#![no_main]

use libfuzzer_sys::fuzz_target;

use lava_report::driver::{Run, RunOptions};

fuzz_target!(|data: &[u8]| {
    let options = RunOptions {
        force_signal: true,
        ..Default::default()
    };
    let mut run = Run::from_options(&options, Vec::new());
    let reported = run.process_reader(data).expect("in-memory read cannot fail");

    let (outcome, out) = run.finish_with_output();
    let summary = outcome.summary;
    assert_eq!(summary.total, reported);
    assert_eq!(summary.total, summary.pass + summary.fail + summary.skip);

    let out = String::from_utf8(out).expect("signals are UTF-8");
    let signals = out.split('\n').filter(|line| !line.is_empty());
    assert_eq!(signals.count(), reported);
});
