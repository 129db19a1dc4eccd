//! # andamio CLI entry point
//!
//! Parses command-line arguments, loads configuration, initializes tracing
//! and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use andamio_cli::check::{run_check, CheckArgs};
use andamio_cli::commitment::{run_commitment, CommitmentArgs};
use andamio_cli::config::{CliConfig, OutputFormat};
use andamio_cli::slt::{run_slt, SltArgs};
use andamio_cli::task::{run_task, TaskArgs};

/// Andamio commitment hashing toolkit.
///
/// Computes and verifies the SLT, task and evidence commitment hashes that
/// Andamio validators store on chain, byte-for-byte compatible with the
/// on-chain serialization.
#[derive(Parser, Debug)]
#[command(name = "andamio", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format (overrides config and ANDAMIO_OUTPUT).
    #[arg(long, value_enum, global = true)]
    output: Option<OutputFormat>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// SLT list hashes.
    Slt(SltArgs),

    /// Project task hashes.
    Task(TaskArgs),

    /// Evidence commitment hashes.
    Commitment(CommitmentArgs),

    /// Hash, policy ID and asset name format checks.
    Check(CheckArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match CliConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::from(2);
        }
    };

    init_tracing(cli.verbose, cli.log_json || config.log_json);

    let output = cli.output.unwrap_or(config.output);
    tracing::debug!(?output, config = ?cli.config, "andamio CLI starting");

    let result = match &cli.command {
        Commands::Slt(args) => run_slt(args, output),
        Commands::Task(args) => run_task(args, output),
        Commands::Commitment(args) => run_commitment(args, output),
        Commands::Check(args) => run_check(args, output),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

/// Logs go to stderr so stdout carries only results. `RUST_LOG` applies
/// when no `-v` flag is given.
fn init_tracing(verbose: u8, json: bool) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
