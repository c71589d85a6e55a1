//! Command modules for the tokt CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand is implemented in its own file following a standardized pattern.

pub mod traits;
pub mod common;

pub mod lex;
pub mod check;

// Re-export command types and functions
pub use lex::{LexArgs, run_lex};
pub use check::{CheckArgs, run_check};
