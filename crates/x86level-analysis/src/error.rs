//! Analysis error types.

use std::io;

use thiserror::Error;

/// Error type for stream scanning.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Reading the input failed. Lines before `line` were already recorded.
    #[error("read error at line {line}: {source}")]
    Read {
        line: u64,
        #[source]
        source: io::Error,
    },

    /// A line exceeded the length limit. Lines before `line` were already
    /// recorded.
    #[error("line {line} exceeds {limit} bytes")]
    LineTooLong { line: u64, limit: usize },
}

impl ScanError {
    /// Creates a new Read error.
    pub fn read(line: u64, source: io::Error) -> Self {
        Self::Read { line, source }
    }

    /// Creates a new LineTooLong error.
    pub fn line_too_long(line: u64, limit: usize) -> Self {
        Self::LineTooLong { line, limit }
    }

    /// Returns the 1-based line number at which scanning stopped.
    pub fn line(&self) -> u64 {
        match self {
            Self::Read { line, .. } | Self::LineTooLong { line, .. } => *line,
        }
    }
}
