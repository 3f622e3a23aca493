// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Library surface behind the `scour` binary.
//!
//! Pattern compilation, source resolution, and the streaming scan
//! loop, plus the verbosity and log sink scaffolding around them.

pub mod cli;
pub mod exit;
pub mod logging;
pub mod pattern;
pub mod scan;
pub mod severity;
pub mod source;


pub use exit::ExitCode;
pub use pattern::{Pattern, PatternError};
pub use scan::{ScanConfig, ScanSummary};
pub use severity::Severity;
pub use source::{Source, SourceError};
