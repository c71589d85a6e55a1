//! Common types and utilities for tokt commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TokError};

// ============================================================================
// Output Format
// ============================================================================

/// Supported token dump formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One tab-separated line per token
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl OutputFormat {
    /// Parse a string into an OutputFormat.
    ///
    /// # Arguments
    /// * `s` - The string to parse (case-insensitive)
    ///
    /// # Returns
    /// * `Option<OutputFormat>` - The parsed format or None if invalid
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" | "jsonl" => Some(Self::Json),
            _ => None,
        }
    }
}

// ============================================================================
// Inputs
// ============================================================================

/// Where a command reads source text from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl Input {
    /// Build the input list from command-line paths.
    ///
    /// No paths, or a lone `-`, means standard input.
    pub fn from_paths(paths: &[PathBuf]) -> Vec<Input> {
        if paths.is_empty() {
            return vec![Input::Stdin];
        }
        paths
            .iter()
            .map(|p| {
                if p.as_os_str() == "-" {
                    Input::Stdin
                } else {
                    Input::File(p.clone())
                }
            })
            .collect()
    }

    /// Open the input for reading.
    pub fn open(&self) -> Result<Box<dyn Read>> {
        match self {
            Input::Stdin => Ok(Box::new(io::stdin())),
            Input::File(path) => {
                validate_input_file(path)?;
                let file = File::open(path).map_err(|e| {
                    TokError::FileOperation(format!("{}: {}", path.display(), e))
                })?;
                Ok(Box::new(file))
            },
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Stdin => f.write_str("<stdin>"),
            Input::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Check that a path exists and is a regular file.
fn validate_input_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(TokError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(TokError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }
    Ok(())
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when an unknown format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown format:";

    /// Error when a check exceeds the illegal character budget.
    pub const TOO_MANY_ILLEGAL: &str = "illegal character(s) found, limit is";
}
