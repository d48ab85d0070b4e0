//! dfalex CLI - dump the token stream of a source text.
//!
//! This is the main entry point for the dfalex CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{common::OutputFormat, run_keywords, run_tokenize, KeywordsArgs, TokenizeArgs};
use config::Config;
use error::{CliError, Result};

/// dfalex - a table-driven lexical analyzer
///
/// Scans source text into `<KIND, lexeme>` tokens and reports malformed
/// input as diagnostics.
#[derive(Parser, Debug)]
#[command(name = "dfalex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize source text", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "DFALEX_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "DFALEX_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "DFALEX_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the dfalex CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenize a file or standard input
    ///
    /// Without a file, only the first line of standard input is scanned
    /// unless `--all` is given.
    Tokenize(TokenizeCommand),

    /// List the active keywords
    Keywords,
}

/// Arguments for the tokenize subcommand.
#[derive(Parser, Debug)]
struct TokenizeCommand {
    /// Source file (default: standard input)
    file: Option<PathBuf>,

    /// Read all of standard input instead of its first line
    #[arg(short, long)]
    all: bool,

    /// Output format (default: from config, else repr)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Exit with an error if any error token is produced
    #[arg(long)]
    deny_errors: bool,
}

/// Main entry point for the dfalex CLI.
///
/// Parses command-line arguments, loads configuration, initializes logging,
/// and dispatches to the appropriate command handler.
fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Initialize logging
    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    // Execute the selected command
    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Records from the scanner crates arrive through the `log` bridge that
/// `try_init` installs. Everything goes to stderr so stdout only carries
/// the token dump.
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
        .map_err(|e| CliError::Config(format!("Failed to initialize logging: {}", e)))?;

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
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokenize(args) => execute_tokenize(args, config),
        Commands::Keywords => run_keywords(KeywordsArgs::default(), config),
    }
}

/// Execute the tokenize command.
fn execute_tokenize(args: TokenizeCommand, config: Config) -> Result<()> {
    let tokenize_args = TokenizeArgs {
        file: args.file,
        all: args.all,
        format: args.format,
        deny_errors: args.deny_errors,
    };
    run_tokenize(tokenize_args, config)
}
