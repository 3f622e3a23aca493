// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Logging severity and the verbosity-flag mapping.
//!
//! `-v` may be repeated; each occurrence moves one rung down the
//! ladder from `Critical` toward `Debug`, saturating at `Debug`.

use std::fmt;

use tracing_subscriber::filter::LevelFilter;

/// Ordered logging severity, least verbose first.
///
/// Exactly one severity is active per process run. The derived `Ord`
/// follows declaration order, so `Severity::Debug` is the greatest
/// (most verbose) value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical,
    Fatal,
    Error,
    Warning,
    Info,
    Debug,
}

/// The verbosity ladder, indexed by `-v` count.
const LADDER: [Severity; 6] = [
    Severity::Critical,
    Severity::Fatal,
    Severity::Error,
    Severity::Warning,
    Severity::Info,
    Severity::Debug,
];

impl Severity {
    /// Map a repeated `-v` count to a severity.
    ///
    /// Counts past the end of the ladder saturate at `Debug` rather
    /// than failing.
    pub fn from_flag_count(count: u8) -> Self {
        LADDER[usize::from(count).min(LADDER.len() - 1)]
    }

    /// The `tracing` filter equivalent of this severity.
    ///
    /// `tracing` has no level above `error`, so `Critical` and `Fatal`
    /// collapse onto `ERROR` alongside `Error`.
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Severity::Critical | Severity::Fatal | Severity::Error => LevelFilter::ERROR,
            Severity::Warning => LevelFilter::WARN,
            Severity::Info => LevelFilter::INFO,
            Severity::Debug => LevelFilter::DEBUG,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Critical => "CRITICAL",
            Severity::Fatal => "FATAL",
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
#[path = "severity_tests.rs"]
mod tests;
