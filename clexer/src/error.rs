//! Error handling module for the clexer CLI.
//!
//! The lexer itself never fails; everything here comes from the
//! surrounding I/O, configuration and argument validation.

use thiserror::Error;

/// Main error type for the clexer CLI application.
#[derive(Error, Debug)]
pub enum ClexerError {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An input or output file could not be used.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// A command-line value was rejected.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using ClexerError.
pub type Result<T> = std::result::Result<T, ClexerError>;
