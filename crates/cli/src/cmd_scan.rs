// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scan command implementation.
//!
//! Wires the CLI options to the library: configure logging, compile
//! the pattern, build the source set, run the scan loop, and map the
//! outcome to an exit code.

use std::io::{self, Write};

use anyhow::Context;

use scour::cli::Cli;
use scour::exit::ExitCode;
use scour::logging;
use scour::pattern::Pattern;
use scour::scan::{self, ScanSummary};
use scour::severity::Severity;
use scour::source;

/// Run the scan command.
pub fn run(cli: &Cli, pattern: &str) -> ExitCode {
    // Logging comes up first; failures before this point cannot reach
    // a sink, so they land on stderr directly.
    if let Err(err) = configure_logging(cli) {
        eprintln!("scour: {err:#}");
        return ExitCode::UnhandledFailure;
    }

    match execute(cli, pattern) {
        Ok(summary) if summary.sources_failed > 0 => {
            tracing::warn!("{} source(s) could not be read", summary.sources_failed);
            ExitCode::PartialFailure
        }
        Ok(_) => ExitCode::Success,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::UnhandledFailure
        }
    }
}

/// Build and install the dispatcher for this run.
fn configure_logging(cli: &Cli) -> anyhow::Result<()> {
    let severity = Severity::from_flag_count(cli.verbose);
    let dispatch = logging::dispatch(severity, cli.log_file.as_deref())?;
    tracing::dispatcher::set_global_default(dispatch).context("logging already configured")?;
    tracing::debug!("log threshold {}", severity);
    Ok(())
}

/// Compile the pattern and stream every source through the scan loop.
fn execute(cli: &Cli, pattern: &str) -> anyhow::Result<ScanSummary> {
    // A malformed pattern must fail before any source is opened.
    let pattern = Pattern::new(pattern)?;
    tracing::debug!(
        "pattern `{}` compiled ({})",
        pattern.as_str(),
        if pattern.is_literal() { "literal" } else { "regex" }
    );

    let sources = source::source_set(&cli.sources);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = scan::scan(&sources, &pattern, &cli.scan_config(), &mut out)
        .context("failed to write matches")?;
    out.flush().context("failed to write matches")?;

    tracing::info!(
        "scanned {} of {} source(s): {} of {} line(s) matched",
        summary.sources_scanned,
        sources.len(),
        summary.lines_matched,
        summary.lines_read
    );

    Ok(summary)
}
