//! Check command implementation.
//!
//! This module scans each input and reports every illegal character with
//! its location. The command fails when the count exceeds the configured
//! limit.

use std::io::Write;
use std::path::PathBuf;

use tokscan_lex::{Scanner, TokenKind};
use tracing::{debug, info};

use crate::commands::common::{error_messages, Input};
use crate::commands::traits::{Command, CommandResult};
use crate::config::Config;
use crate::error::{Result, TokError};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Input files; empty or `-` means standard input.
    pub input: Vec<PathBuf>,
    /// Override for the illegal character limit.
    pub max_illegal: Option<usize>,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
    config: Config,
}

impl CheckCommand {
    /// Execute the command.
    pub fn run(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let limit = self.max_illegal();
        let mut total = CommandResult::default();

        for input in Input::from_paths(&self.args.input) {
            total.merge(self.check_input(&input, out)?);
        }

        writeln!(
            out,
            "checked {} file(s): {} token(s), {} illegal",
            total.items_processed, total.tokens, total.illegal
        )?;
        out.flush()?;

        if total.illegal > limit {
            return Err(TokError::Validation(format!(
                "{} {} {}",
                total.illegal,
                error_messages::TOO_MANY_ILLEGAL,
                limit
            )));
        }

        info!(illegal = total.illegal, limit, "check passed");
        Ok(total)
    }

    /// Get the effective illegal character limit.
    fn max_illegal(&self) -> usize {
        self.args
            .max_illegal
            .unwrap_or(self.config.check.max_illegal)
    }

    fn check_input(&self, input: &Input, out: &mut dyn Write) -> Result<CommandResult> {
        debug!(input = %input, "checking");
        let mut result = CommandResult {
            items_processed: 1,
            ..CommandResult::default()
        };

        for token in Scanner::new(input.open()?) {
            let token = token?;
            result.tokens += 1;
            if token.kind() == TokenKind::Illegal {
                result.illegal += 1;
                writeln!(
                    out,
                    "{}:{}: illegal character '{}'",
                    input,
                    token.pos(),
                    token.literal()
                )?;
            }
        }

        Ok(result)
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CommandResult;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self, out: &mut dyn Write) -> Result<Self::Output> {
        self.run(out)
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs, config: Config, out: &mut dyn Write) -> Result<CommandResult> {
    let command = CheckCommand::new(args, config);
    debug!(command = CheckCommand::name(), "running");
    command.execute(out)
}
