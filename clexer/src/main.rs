//! clexer CLI - tokenizes C-like expressions.
//!
//! This is the main entry point for the clexer CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers, which print token listings and write report documents.

mod commands;
mod config;
mod error;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_batch, run_config, run_kinds, run_lex, BatchArgs, ConfigArgs, LexArgs};
use config::Config;
use error::{ClexerError, Result};

/// clexer - lexical analyzer for C-like expressions
///
/// Splits an expression into keywords, datatypes, identifiers, literals,
/// operators and delimiters, and reports the result.
#[derive(Parser, Debug)]
#[command(name = "clexer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexical analyzer for C-like expressions", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "CLEXER_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CLEXER_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "CLEXER_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the clexer CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenize one expression
    ///
    /// Reads the expression from the command line, or prompts for one line
    /// on stdin, prints the token listing and writes the report document.
    Lex(LexCommand),

    /// Tokenize every line of one or more files
    ///
    /// Lines are processed in parallel and printed in input order.
    Batch(BatchCommand),

    /// List every token kind name
    Kinds,

    /// Show the effective configuration or write it to a file
    Config(ConfigCommand),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Expression to tokenize (prompted for when omitted)
    expression: Option<String>,

    /// Listing format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Report output path (default: from config)
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// Do not write the report document
    #[arg(long, conflicts_with = "report")]
    no_report: bool,
}

/// Arguments for the batch subcommand.
#[derive(Parser, Debug)]
struct BatchCommand {
    /// Input files, one expression per line
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Number of parallel jobs
    #[arg(short, long)]
    jobs: Option<u32>,

    /// Listing format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,
}

/// Arguments for the config subcommand.
#[derive(Parser, Debug)]
struct ConfigCommand {
    /// Write the configuration to this path instead of printing it
    #[arg(short, long)]
    write: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(short, long, requires = "write")]
    force: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the selected command.
fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    execute_command(cli.command, verbose, config)
}

/// Initialize the logging system.
///
/// Log events go to stderr so stdout carries only listings.
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
        .map_err(|e| ClexerError::Config(format!("Failed to initialize logging: {}", e)))?;

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
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Lex(args) => run_lex(
            LexArgs {
                verbose,
                expression: args.expression,
                format: args.format,
                report: args.report,
                no_report: args.no_report,
            },
            config,
        ),
        Commands::Batch(args) => run_batch(
            BatchArgs {
                verbose,
                files: args.files,
                jobs: args.jobs,
                format: args.format,
            },
            config,
        ),
        Commands::Kinds => run_kinds(),
        Commands::Config(args) => run_config(
            ConfigArgs {
                write: args.write,
                force: args.force,
            },
            config,
        ),
    }
}
