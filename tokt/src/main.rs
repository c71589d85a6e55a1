//! Tokt CLI - A command-line token dump and check tool.
//!
//! This is the main entry point for the tokt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_check, run_lex, CheckArgs, LexArgs};
use config::Config;
use error::{Result, TokError};

/// Tokt - dump and check the tokens of source files
///
/// Tokt runs the tokscan scanner over files or standard input and
/// prints the resulting tokens or reports illegal characters.
#[derive(Parser, Debug)]
#[command(name = "tokt")]
#[command(author = "Tokscan Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Dump and check the tokens of source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "TOKT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "TOKT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "TOKT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the tokt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every token of the inputs
    ///
    /// Scans each input to end of stream and prints one token per line,
    /// the final EOF token included.
    Lex(LexCommand),

    /// Report illegal characters
    ///
    /// Scans each input and lists every illegal character with its
    /// location. Fails when the count exceeds the allowed maximum.
    Check(CheckCommand),

    /// Print the effective configuration
    ///
    /// Shows the settings in use after the config file search, as TOML.
    Config,
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Input files (default: standard input; `-` also means standard input)
    input: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Omit line and column from the output
    #[arg(long)]
    no_positions: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Input files (default: standard input; `-` also means standard input)
    input: Vec<PathBuf>,

    /// Number of illegal characters tolerated (default: from config)
    #[arg(short, long)]
    max_illegal: Option<usize>,
}

/// Main entry point for the tokt CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.no_color)?;

    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Execute the selected command
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_command(cli.command, config, &mut out)
}

/// Initialize the logging system.
///
/// Logs go to stderr so that stdout carries only command output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| TokError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config, out: &mut dyn Write) -> Result<()> {
    match command {
        Commands::Lex(args) => execute_lex(args, config, out),
        Commands::Check(args) => execute_check(args, config, out),
        Commands::Config => execute_config(&config, out),
    }
}

/// Execute the lex command.
fn execute_lex(args: LexCommand, config: Config, out: &mut dyn Write) -> Result<()> {
    let lex_args = LexArgs {
        input: args.input,
        format: args.format,
        no_positions: args.no_positions,
    };
    run_lex(lex_args, config, out).map(|_| ())
}

/// Execute the check command.
fn execute_check(args: CheckCommand, config: Config, out: &mut dyn Write) -> Result<()> {
    let check_args = CheckArgs {
        input: args.input,
        max_illegal: args.max_illegal,
    };
    run_check(check_args, config, out).map(|_| ())
}

/// Execute the config command.
fn execute_config(config: &Config, out: &mut dyn Write) -> Result<()> {
    out.write_all(config.to_toml()?.as_bytes())?;
    out.flush()?;
    Ok(())
}
