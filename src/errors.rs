/*!
 * Error types for the mojifix application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when validating or applying the replacement table
#[derive(Error, Debug)]
pub enum TableError {
    /// Error when one entry's replacement contains another entry's corrupted pattern,
    /// which would let a second pass rewrite already-corrected text
    #[error("cascading table entries: replacement for {source_pattern:?} contains corrupted pattern {pattern:?}")]
    Cascade {
        /// The corrupted pattern whose replacement is at fault
        source_pattern: String,
        /// The corrupted pattern found inside the replacement
        pattern: String,
    },

    /// Error when a table entry has an empty corrupted pattern
    #[error("empty corrupted pattern in replacement table")]
    EmptyPattern,
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error decoding file contents in strict mode
    #[error("Decode error: {0}")]
    Decode(String),

    /// Error from the replacement table
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
