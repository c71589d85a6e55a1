//! Error handling module for the tokt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;
use tokscan_lex::ScanError;

/// Main error type for the tokt CLI application.
///
/// This enum represents all possible errors that can occur
/// during the execution of tokt commands.
#[derive(Error, Debug)]
pub enum TokError {
    /// Error when the configuration cannot be found or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input file cannot be opened.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when the scanner hits a fatal read fault.
    #[error("Scan failed: {0}")]
    Scan(#[from] ScanError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using TokError.
///
/// This type alias simplifies function signatures by providing
/// a consistent result type throughout the application.
pub type Result<T> = std::result::Result<T, TokError>;
