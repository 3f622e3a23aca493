// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process exit codes.
//!
//! Codes are stable across releases: new outcomes get new named
//! entries and existing entries are never renumbered.

use std::process;

/// Exit code of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// The scan completed and every source was read to the end.
    Success = 0,
    /// A failure no component recovered from: bad arguments, a
    /// malformed pattern, an unopenable log file, or an error caught
    /// at the driver boundary.
    UnhandledFailure = 1,
    /// The scan completed but at least one source was skipped.
    PartialFailure = 2,
}

impl ExitCode {
    /// Numeric value handed to the operating system.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitCode> for process::ExitCode {
    fn from(code: ExitCode) -> Self {
        process::ExitCode::from(code.code())
    }
}

#[cfg(test)]
#[path = "exit_tests.rs"]
mod tests;
