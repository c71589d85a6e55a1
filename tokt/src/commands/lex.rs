//! Lex command implementation.
//!
//! This module scans each input and dumps every token, `Eof` included, as
//! text or JSON lines.

use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;
use tokscan_lex::{Scanner, Token, TokenKind};
use tracing::{debug, info};

use crate::commands::common::{error_messages, Input, OutputFormat};
use crate::commands::traits::{Command, CommandResult};
use crate::config::Config;
use crate::error::{Result, TokError};

/// Arguments for the lex command.
#[derive(Debug, Clone, Default)]
pub struct LexArgs {
    /// Input files; empty or `-` means standard input.
    pub input: Vec<PathBuf>,
    /// Output format override.
    pub format: Option<String>,
    /// Omit positions from the dump.
    pub no_positions: bool,
}

/// One token as written in JSON output.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column: Option<u32>,
    kind: &'static str,
    literal: &'a str,
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
    config: Config,
}

impl LexCommand {
    /// Execute the command.
    pub fn run(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let format = self.output_format()?;
        let inputs = Input::from_paths(&self.args.input);
        let label = inputs.len() > 1;

        let mut total = CommandResult::default();
        for input in &inputs {
            total.merge(self.dump_input(input, format, label, out)?);
        }
        out.flush()?;

        info!(
            files = total.items_processed,
            tokens = total.tokens,
            illegal = total.illegal,
            "lex complete"
        );
        Ok(total)
    }

    /// Get the effective output format.
    fn output_format(&self) -> Result<OutputFormat> {
        match &self.args.format {
            Some(name) => OutputFormat::from_str(name).ok_or_else(|| {
                TokError::Validation(format!("{} {}", error_messages::UNKNOWN_FORMAT, name))
            }),
            None => Ok(self.config.format),
        }
    }

    fn show_positions(&self) -> bool {
        self.config.show_positions && !self.args.no_positions
    }

    /// Scan one input to `Eof`, writing every token.
    fn dump_input(
        &self,
        input: &Input,
        format: OutputFormat,
        label: bool,
        out: &mut dyn Write,
    ) -> Result<CommandResult> {
        debug!(input = %input, "scanning");
        let mut scanner = Scanner::new(input.open()?);
        let mut result = CommandResult {
            items_processed: 1,
            ..CommandResult::default()
        };

        loop {
            let token = scanner.next_token()?;
            let file = label.then(|| input.to_string());
            match format {
                OutputFormat::Text => self.write_text(file.as_deref(), &token, out)?,
                OutputFormat::Json => self.write_json(file, &token, out)?,
            }

            if token.is_eof() {
                break;
            }
            result.tokens += 1;
            if token.kind() == TokenKind::Illegal {
                result.illegal += 1;
            }
        }

        Ok(result)
    }

    fn write_text(&self, file: Option<&str>, token: &Token, out: &mut dyn Write) -> Result<()> {
        if let Some(file) = file {
            write!(out, "{}:", file)?;
        }
        if self.show_positions() {
            write!(out, "{}\t", token.pos())?;
        }
        if token.literal().is_empty() {
            writeln!(out, "{}", token.kind())?;
        } else {
            writeln!(out, "{}\t{}", token.kind(), token.literal())?;
        }
        Ok(())
    }

    fn write_json(&self, file: Option<String>, token: &Token, out: &mut dyn Write) -> Result<()> {
        let show = self.show_positions();
        let record = TokenRecord {
            file,
            line: show.then_some(token.pos().line),
            column: show.then_some(token.pos().column),
            kind: token.kind().as_str(),
            literal: token.literal(),
        };
        serde_json::to_writer(&mut *out, &record)?;
        writeln!(out)?;
        Ok(())
    }
}

impl Command for LexCommand {
    type Args = LexArgs;
    type Output = CommandResult;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self, out: &mut dyn Write) -> Result<Self::Output> {
        self.run(out)
    }

    fn name() -> &'static str {
        "lex"
    }
}

/// Run the lex command.
pub fn run_lex(args: LexArgs, config: Config, out: &mut dyn Write) -> Result<CommandResult> {
    let command = LexCommand::new(args, config);
    debug!(command = LexCommand::name(), "running");
    command.execute(out)
}
