//! Error types for table loading and sampling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Errors that can occur while loading or sampling tables.
#[derive(Debug, Error)]
pub enum TableError {
    /// No table exists for the requested category.
    #[error("table not found: {0}")]
    CategoryNotFound(String),

    /// More distinct entries were requested than the table holds.
    #[error("table '{category}' has {available} entries, {requested} requested")]
    InsufficientEntries {
        /// Table name.
        category: String,
        /// Number of entries asked for.
        requested: usize,
        /// Number of entries in the table.
        available: usize,
    },

    /// A table file or directory could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
