//! # Storage Error Types
//!
//! Error types for data-file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                │
//! │                                                                     │
//! │  std::io::Error (open/read/write failure)                           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError (this module) ← adds the file path, classifies          │
//! │       │                     parse failures with line numbers        │
//! │       ▼                                                             │
//! │  apps/cli ← storage errors are the one fatal class: they            │
//! │             propagate out of main and terminate the process         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Data-file operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a data file failed.
    ///
    /// ## When This Occurs
    /// - Missing directory, permission denied, disk full
    /// - NOT a missing data file: those load as empty stores
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line in a data file does not match the expected record shape.
    ///
    /// ## When This Occurs
    /// - Wrong field count (an embedded comma corrupts the record -
    ///   the format has no escaping, by design)
    /// - A quantity or price field fails to parse
    /// - A sales line whose field count is not a multiple of three
    #[error("{}:{line}: malformed record: {reason}", path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

impl StoreError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a malformed-record error for a 1-based line number.
    pub fn malformed(path: impl Into<PathBuf>, line: usize, reason: impl Into<String>) -> Self {
        StoreError::Malformed {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message_carries_location() {
        let err = StoreError::malformed("products.txt", 3, "expected 4 fields, found 5");
        assert_eq!(
            err.to_string(),
            "products.txt:3: malformed record: expected 4 fields, found 5"
        );
    }
}
