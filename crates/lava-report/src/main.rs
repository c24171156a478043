//! lava-report: report test results to LAVA
//!
//! Parses result files from any test runner and records each result with
//! `lava-test-case`, or as `LAVA_SIGNAL_TESTCASE` lines when the command is
//! not available.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::anyhow;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lava_report::config::Config;
use lava_report::discover::collect_files;
use lava_report::driver::Run;

fn main() -> anyhow::Result<ExitCode> {
    let config = Config::parse();

    // Logs go to stderr; stdout carries the signal protocol
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(config.log_level().into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {e}"))?;

    if let Ok(cwd) = std::env::current_dir() {
        info!(cwd = %cwd.display(), "Starting lava-report");
    }

    let files = collect_files(&config.root, &config.explicit_files(), &config.extension);
    if files.is_empty() {
        info!(
            root = %config.root.display(),
            extension = %config.extension,
            "No result files found. Nothing to do."
        );
        return Ok(ExitCode::SUCCESS);
    }

    let mut run = Run::from_options(&config.run_options(), io::stdout());
    run.process_files(&files);
    let outcome = run.finish();

    if config.summary_enabled() {
        eprintln!(
            "{}",
            outcome
                .summary
                .render(config.summary_format, outcome.mode, &outcome.mode_label)
        );
    }

    Ok(ExitCode::from(
        outcome.summary.exit_status(config.fail_on_failure()),
    ))
}
