// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern compilation and line matching.
//!
//! Two-tier matching hierarchy:
//! - plain literals (no regex metacharacter): memchr::memmem
//! - everything else: the regex crate

use memchr::memmem;
use regex::Regex;
use thiserror::Error;

/// A malformed pattern, rejected at compile time before any source is
/// opened.
#[derive(Debug, Error)]
#[error("invalid pattern: {0}")]
pub struct PatternError(#[from] regex::Error);

/// A compiled pattern exposing a single line-matching predicate.
#[derive(Debug)]
pub struct Pattern {
    text: String,
    matcher: Matcher,
}

#[derive(Debug)]
enum Matcher {
    /// Substring search for patterns with no regex syntax.
    Literal(memmem::Finder<'static>),
    /// Full regular expression.
    Regex(Regex),
}

impl Pattern {
    /// Compile `pattern`, failing on malformed regex syntax.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let matcher = if is_plain_literal(pattern) {
            Matcher::Literal(memmem::Finder::new(pattern).into_owned())
        } else {
            Matcher::Regex(Regex::new(pattern)?)
        };
        Ok(Self { text: pattern.to_string(), matcher })
    }

    /// Whether `line` contains at least one occurrence of the pattern.
    ///
    /// Pure and total: no input line can make this fail.
    pub fn is_match(&self, line: &str) -> bool {
        match &self.matcher {
            Matcher::Literal(finder) => finder.find(line.as_bytes()).is_some(),
            Matcher::Regex(regex) => regex.is_match(line),
        }
    }

    /// The original pattern text, for diagnostics.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True when the literal fast path is active.
    pub fn is_literal(&self) -> bool {
        matches!(self.matcher, Matcher::Literal(_))
    }
}

/// A pattern without metacharacters matches as a plain substring.
fn is_plain_literal(pattern: &str) -> bool {
    !pattern.chars().any(regex_syntax::is_meta_character)
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
