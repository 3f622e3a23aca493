//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use clap_complete::Shell;

use crate::scan::ScanConfig;

/// A streaming line scanner that prints lines matching a pattern
#[derive(Parser, Debug)]
#[command(name = "scour")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Pattern to search for (regular expression)
    #[arg(value_name = "PATTERN", required_unless_present = "completions")]
    pub pattern: Option<String>,

    /// Files to scan; `-` or no files reads standard input
    #[arg(value_name = "FILE")]
    pub sources: Vec<PathBuf>,

    /// Prefix each match with its 1-based line number
    #[arg(short = 'n', long = "line-number")]
    pub line_number: bool,

    /// Prefix each match with the name of its source
    #[arg(short = 'H', long = "with-filename")]
    pub with_filename: bool,

    /// Increase log verbosity (repeat for more; RUST_LOG overrides)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Duplicate log output into this file (truncated each run)
    #[arg(
        short = 'l',
        long = "log-file",
        value_name = "PATH",
        env = "SCOUR_LOG_FILE"
    )]
    pub log_file: Option<PathBuf>,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Annotation switches for the scan loop.
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            source_names: self.with_filename,
            line_numbers: self.line_number,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
