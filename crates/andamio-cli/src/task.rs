//! # Task Subcommand
//!
//! Computes, verifies and debugs project task hashes. The input file holds
//! a task object:
//!
//! ```json
//! {
//!   "content": "Open Task #1",
//!   "expiration": 1769027280000,
//!   "lovelaceAmount": 15000000,
//!   "nativeAssets": [["<policy>.<name>", 1]]
//! }
//! ```

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Subcommand};

use andamio_hash::{debug_task_bytes, task_digest, TaskData, VerificationResult};

use crate::config::OutputFormat;

/// Arguments for the `andamio task` subcommand.
#[derive(Args, Debug)]
pub struct TaskArgs {
    #[command(subcommand)]
    pub command: TaskCommand,
}

/// Task subcommands.
#[derive(Subcommand, Debug)]
pub enum TaskCommand {
    /// Compute the hash of a task.
    Hash {
        /// Task JSON (`-` for stdin).
        #[arg(value_name = "FILE", default_value = "-")]
        file: PathBuf,
    },

    /// Verify a task against an expected hash.
    Verify {
        /// Task JSON (`-` for stdin).
        #[arg(value_name = "FILE", default_value = "-")]
        file: PathBuf,
        /// Expected hash (64 hex chars, either case).
        #[arg(long)]
        expected: String,
    },

    /// Print the pre-hash encoded bytes of a task as hex.
    Debug {
        /// Task JSON (`-` for stdin).
        #[arg(value_name = "FILE", default_value = "-")]
        file: PathBuf,
    },
}

/// Execute the task subcommand.
pub fn run_task(args: &TaskArgs, output: OutputFormat) -> Result<u8> {
    match &args.command {
        TaskCommand::Hash { file } => cmd_hash(file, output),
        TaskCommand::Verify { file, expected } => cmd_verify(file, expected, output),
        TaskCommand::Debug { file } => cmd_debug(file, output),
    }
}

fn load_task(file: &Path) -> Result<TaskData> {
    let task: TaskData = crate::read_json(file)?;
    if task.content.chars().count() > 140 {
        tracing::warn!(
            chars = task.content.chars().count(),
            "task content is longer than the recommended 140 characters"
        );
    }
    Ok(task)
}

fn cmd_hash(file: &Path, output: OutputFormat) -> Result<u8> {
    let task = load_task(file)?;
    crate::print_hash(output, "task", &task_digest(&task).to_hex())?;
    Ok(0)
}

fn cmd_verify(file: &Path, expected: &str, output: OutputFormat) -> Result<u8> {
    let task = load_task(file)?;
    let result = VerificationResult::compare(&task_digest(&task), expected);
    crate::print_verification(output, &result)
}

fn cmd_debug(file: &Path, output: OutputFormat) -> Result<u8> {
    let task = load_task(file)?;
    let encoded = debug_task_bytes(&task);
    match output {
        OutputFormat::Hex => println!("{encoded}"),
        OutputFormat::Json => {
            let out = serde_json::json!({
                "encoded": encoded,
                "hash": task_digest(&task).to_hex(),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(0)
}
