//! wiigt - token dump and check tool for wiig source files.
//!
//! This is the main entry point for the wiigt CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers, which feed whole source files through the lexer.

mod commands;
mod config;
mod error;

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_check, run_tokens, CheckArgs, TokensArgs};
use config::{Config, OutputFormat};
use error::{Result, WiigtError};

/// wiigt - Inspect how wiig source text is tokenized
#[derive(Parser, Debug)]
#[command(name = "wiigt")]
#[command(author = "Wiig Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect how wiig source text is tokenized", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "WIIGT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "WIIGT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "WIIGT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the wiigt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of each input
    ///
    /// Reads each file (or stdin when none is given, or for `-`) and prints
    /// one token per line, or a JSON document with `--format json`.
    Tokens(TokensCommand),

    /// Report illegal characters in each input
    ///
    /// Exits with an error when any are found unless `--allow-illegal` is
    /// passed.
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Input files (default: stdin)
    inputs: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Omit the terminating EOF token
    #[arg(long)]
    no_eof: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Input files (default: stdin)
    inputs: Vec<PathBuf>,

    /// Report illegal tokens without failing
    #[arg(long)]
    allow_illegal: bool,
}

/// Main entry point for the wiigt CLI.
///
/// Parses command-line arguments, loads configuration, initializes logging,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, config_path) = Config::load(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;
    if let Some(path) = &config_path {
        debug!(path = %path.display(), "loaded configuration");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_command(cli.command, &config, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with token output.
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
        .map_err(|e| WiigtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Execute the selected command.
fn execute_command(command: Commands, config: &Config, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Tokens(args) => {
            let tokens_args = TokensArgs {
                inputs: args.inputs,
                format: args.format,
                no_eof: args.no_eof,
            };
            run_tokens(tokens_args, config, out)
        }
        Commands::Check(args) => {
            let check_args = CheckArgs {
                inputs: args.inputs,
                allow_illegal: args.allow_illegal,
            };
            run_check(check_args, config, out)
        }
    }
}
