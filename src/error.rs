//! Error types for the Quarry library.
//!
//! This module provides error handling for all Quarry operations. All errors
//! are represented by the [`QuarryError`] enum, which provides detailed
//! information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use quarry::error::{QuarryError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(QuarryError::query("Invalid query"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Quarry operations.
///
/// This enum represents all possible errors that can occur in the Quarry
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum QuarryError {
    /// I/O errors (reading queries from stdin, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (normalization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Query-related errors (tokenization, invalid queries, etc.)
    #[error("Query error: {0}")]
    Query(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with QuarryError.
pub type Result<T> = std::result::Result<T, QuarryError>;

impl QuarryError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        QuarryError::Analysis(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        QuarryError::Query(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        QuarryError::Query(msg.into()) // Parse errors are treated as query errors
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        QuarryError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        QuarryError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = QuarryError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = QuarryError::query("Test query error");
        assert_eq!(error.to_string(), "Query error: Test query error");

        let error = QuarryError::other("Test other error");
        assert_eq!(error.to_string(), "Error: Test other error");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let quarry_error = QuarryError::from(io_error);

        match quarry_error {
            QuarryError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
