//! Command trait and common types for the tokt CLI.
//!
//! This module defines the standard command trait that all commands
//! implement to ensure consistency across the application.

use std::io::Write;

use crate::config::Config;
use crate::error::Result;

/// Standard command trait that all tokt commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments and
    /// effective configuration.
    fn new(args: Self::Args, config: Config) -> Self;

    /// Execute the command, writing its report to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Command execution result with metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Number of inputs scanned.
    pub items_processed: usize,

    /// Number of tokens produced, `Eof` excluded.
    pub tokens: usize,

    /// Number of illegal tokens seen.
    pub illegal: usize,
}

impl CommandResult {
    /// Fold another result into this one.
    pub fn merge(&mut self, other: CommandResult) {
        self.items_processed += other.items_processed;
        self.tokens += other.tokens;
        self.illegal += other.illegal;
    }
}
