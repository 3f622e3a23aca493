// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Input source resolution and opening.
//!
//! A source is either standard input (named `-`) or a file path. The
//! source set preserves command-line order, which is scan order.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Annotation name for standard input.
pub const STDIN_NAME: &str = "-";

/// One unopenable source. The scan loop reports it, skips the source,
/// and continues with the rest of the set.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("{path}: not a regular file")]
    NotRegular { path: String },
}

/// A single input line stream, not yet opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// The process's standard input.
    Stdin,
    /// A file path as given on the command line.
    File(PathBuf),
}

impl Source {
    /// Interpret one command-line path; `-` denotes standard input.
    pub fn from_arg(path: &Path) -> Self {
        if path.as_os_str() == STDIN_NAME {
            Source::Stdin
        } else {
            Source::File(path.to_path_buf())
        }
    }

    /// The name used in match annotations and failure reports.
    pub fn name(&self) -> String {
        match self {
            Source::Stdin => STDIN_NAME.to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }

    /// Open a buffered line reader over this source.
    ///
    /// The reader owns the underlying handle, so dropping it releases
    /// the handle on every exit path.
    pub fn open(&self) -> Result<Box<dyn BufRead>, SourceError> {
        match self {
            Source::Stdin => Ok(Box::new(io::stdin().lock())),
            Source::File(path) => {
                let open_error = |source| SourceError::Open {
                    path: path.display().to_string(),
                    source,
                };
                let meta = fs::metadata(path).map_err(open_error)?;
                if !meta.is_file() {
                    return Err(SourceError::NotRegular {
                        path: path.display().to_string(),
                    });
                }
                let file = File::open(path).map_err(open_error)?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

/// Build the ordered source set from command-line paths.
///
/// An empty list means read standard input.
pub fn source_set(paths: &[PathBuf]) -> Vec<Source> {
    if paths.is_empty() {
        vec![Source::Stdin]
    } else {
        paths.iter().map(|path| Source::from_arg(path)).collect()
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
