//! Catalog error types.

use thiserror::Error;

/// Error type for catalog construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A table entry is not strictly greater than the one before it.
    #[error("table {table} is not strictly sorted at index {index}: {previous:?} then {next:?}")]
    Unsorted {
        table: &'static str,
        index: usize,
        previous: String,
        next: String,
    },
}

impl CatalogError {
    /// Creates a new Unsorted error.
    pub fn unsorted(table: &'static str, index: usize, previous: &str, next: &str) -> Self {
        Self::Unsorted {
            table,
            index,
            previous: previous.to_string(),
            next: next.to_string(),
        }
    }
}
