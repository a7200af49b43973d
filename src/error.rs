//! Error types for memdb
//!
//! Provides a unified error type for recoverable failures.
//!
//! Contract violations (reading a string from an integer column, addressing
//! a column that does not exist, advancing an iterator past the end) are
//! programming errors and panic instead of returning one of these.

use thiserror::Error;

use crate::row::Row;

/// Result type alias using MemDbError
pub type Result<T> = std::result::Result<T, MemDbError>;

/// Unified error type for memdb operations
#[derive(Debug, Error)]
pub enum MemDbError {
    // -------------------------------------------------------------------------
    // Schema Errors
    // -------------------------------------------------------------------------
    #[error("Schema must declare at least one column")]
    EmptySchema,

    #[error("Column '{name}' is declared more than once")]
    DuplicateColumn { name: String },

    #[error("Primary column '{name}' is not declared in the schema")]
    UnknownPrimaryColumn { name: String },

    // -------------------------------------------------------------------------
    // Table Errors
    // -------------------------------------------------------------------------
    /// A strict insert found an existing row with the same key.
    /// The rejected row is handed back to the caller.
    #[error("Duplicate key: a row with the same (index, primary) key already exists")]
    DuplicateKey { row: Box<Row> },

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MemDbError {
    /// Take back the row rejected by a strict insert, if this is one
    pub fn into_row(self) -> Option<Row> {
        match self {
            MemDbError::DuplicateKey { row } => Some(*row),
            _ => None,
        }
    }
}
