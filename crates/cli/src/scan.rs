// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The scan loop: streams each source in order and writes annotated
//! matches as they are found.
//!
//! Lines are read one at a time; sources are never slurped. The line
//! counter is 1-based and resets per source. Per-source failures are
//! reported and skipped so the remaining sources still get scanned.

use std::io::{self, BufRead, Write};

use crate::pattern::Pattern;
use crate::source::Source;

/// Output annotation switches for the scan loop.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScanConfig {
    /// Prefix each match with the name of its source (`-H`).
    pub source_names: bool,
    /// Prefix each match with its 1-based line number (`-n`).
    pub line_numbers: bool,
}

/// Counters accumulated over one scan run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    /// Sources read to end of stream.
    pub sources_scanned: usize,
    /// Sources skipped on open or abandoned mid-stream.
    pub sources_failed: usize,
    /// Lines read across all sources.
    pub lines_read: u64,
    /// Lines that matched and were written out.
    pub lines_matched: u64,
}

/// One matching line plus its provenance. Built per match, written
/// immediately, never retained across lines.
struct MatchRecord<'a> {
    source: &'a str,
    line_number: u64,
    text: &'a str,
}

impl MatchRecord<'_> {
    /// Write `[<source>: ][<line>: ]<text>\n`. The source name comes
    /// first when both annotations are on.
    fn write_to<W: Write>(&self, config: &ScanConfig, out: &mut W) -> io::Result<()> {
        if config.source_names {
            write!(out, "{}: ", self.source)?;
        }
        if config.line_numbers {
            write!(out, "{}: ", self.line_number)?;
        }
        out.write_all(self.text.as_bytes())?;
        out.write_all(b"\n")
    }
}

/// How one source's iteration ended. Output-write failures propagate
/// as errors instead.
#[derive(Debug)]
enum SourceOutcome {
    Completed,
    ReadFailed,
}

/// Scan every source in order, writing matches to `out` as they are
/// found.
///
/// Open and read failures are logged and the source skipped; the
/// error path out of this function is reserved for output-write
/// failures, which abort the whole scan.
pub fn scan<W: Write>(
    sources: &[Source],
    pattern: &Pattern,
    config: &ScanConfig,
    out: &mut W,
) -> io::Result<ScanSummary> {
    let mut summary = ScanSummary::default();

    for source in sources {
        let name = source.name();
        tracing::debug!("scanning {}", name);

        let reader = match source.open() {
            Ok(reader) => reader,
            Err(err) => {
                tracing::error!("{}", err);
                summary.sources_failed += 1;
                continue;
            }
        };

        match scan_source(&name, reader, pattern, config, out, &mut summary)? {
            SourceOutcome::Completed => summary.sources_scanned += 1,
            SourceOutcome::ReadFailed => summary.sources_failed += 1,
        }
    }

    Ok(summary)
}

/// Stream one open source, returning `ReadFailed` when a mid-stream
/// read error abandons it.
fn scan_source<W: Write>(
    name: &str,
    mut reader: impl BufRead,
    pattern: &Pattern,
    config: &ScanConfig,
    out: &mut W,
    summary: &mut ScanSummary,
) -> io::Result<SourceOutcome> {
    let mut line = String::new();
    let mut line_number: u64 = 0;

    loop {
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => return Ok(SourceOutcome::Completed),
            Ok(_) => {}
            Err(err) => {
                tracing::error!("{}: read failed at line {}: {}", name, line_number + 1, err);
                return Ok(SourceOutcome::ReadFailed);
            }
        }

        line_number += 1;
        summary.lines_read += 1;

        let text = trim_line_terminator(&line);
        if pattern.is_match(text) {
            summary.lines_matched += 1;
            let record = MatchRecord { source: name, line_number, text };
            record.write_to(config, out)?;
        }
    }
}

/// Strip one trailing `\n` or `\r\n`; the matcher sees line content
/// without its terminator.
fn trim_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
