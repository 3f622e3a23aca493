// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Log sink configuration.
//!
//! Builds the `tracing` dispatcher for a run: a console sink on
//! stderr plus an optional file sink. Both sinks see every record at
//! or above the active severity; adding the file never silences the
//! console.

use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;
use tracing::Dispatch;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;

use crate::severity::Severity;

/// The log file could not be opened for writing. Fatal before any
/// scanning begins.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("cannot open log file {path}: {source}")]
    Create {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Build the dispatcher for this run.
///
/// The severity sets the default filter directive and `RUST_LOG`
/// overrides it when set. The log file is opened in truncate mode, so
/// a run never inherits records from a prior one. The returned handle
/// is installed once by the driver, or scoped with
/// `tracing::dispatcher::with_default` in tests.
pub fn dispatch(severity: Severity, log_file: Option<&Path>) -> Result<Dispatch, LogError> {
    let filter = EnvFilter::builder()
        .with_default_directive(severity.level_filter().into())
        .from_env_lossy();

    let console = fmt::layer()
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);

    let file = log_file
        .map(|path| {
            let file = File::create(path).map_err(|source| LogError::Create {
                path: path.display().to_string(),
                source,
            })?;
            Ok(fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Arc::new(file)))
        })
        .transpose()?;

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file);
    Ok(Dispatch::new(subscriber))
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
