//! # Commitment Subcommand
//!
//! Computes and verifies evidence commitment hashes, and prints the
//! canonical text that is hashed. Any JSON document is accepted.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use andamio_core::to_canonical_string;
use andamio_hash::{commitment_digest, verify_commitment_hash_detailed};

use crate::config::OutputFormat;

/// Arguments for the `andamio commitment` subcommand.
#[derive(Args, Debug)]
pub struct CommitmentArgs {
    #[command(subcommand)]
    pub command: CommitmentCommand,
}

/// Commitment subcommands.
#[derive(Subcommand, Debug)]
pub enum CommitmentCommand {
    /// Compute the commitment hash of an evidence document.
    Hash {
        /// Evidence JSON (`-` for stdin).
        #[arg(value_name = "FILE", default_value = "-")]
        file: PathBuf,
    },

    /// Verify an evidence document against an expected hash.
    Verify {
        /// Evidence JSON (`-` for stdin).
        #[arg(value_name = "FILE", default_value = "-")]
        file: PathBuf,
        /// Expected hash (64 hex chars, either case).
        #[arg(long)]
        expected: String,
    },

    /// Print the canonical text of an evidence document.
    Normalize {
        /// Evidence JSON (`-` for stdin).
        #[arg(value_name = "FILE", default_value = "-")]
        file: PathBuf,
    },
}

/// Execute the commitment subcommand.
pub fn run_commitment(args: &CommitmentArgs, output: OutputFormat) -> Result<u8> {
    match &args.command {
        CommitmentCommand::Hash { file } => cmd_hash(file, output),
        CommitmentCommand::Verify { file, expected } => cmd_verify(file, expected, output),
        CommitmentCommand::Normalize { file } => cmd_normalize(file),
    }
}

fn load_evidence(file: &Path) -> Result<serde_json::Value> {
    crate::read_json(file)
}

fn cmd_hash(file: &Path, output: OutputFormat) -> Result<u8> {
    let evidence = load_evidence(file)?;
    let digest = commitment_digest(&evidence).context("failed to canonicalize evidence")?;
    crate::print_hash(output, "commitment", &digest.to_hex())?;
    Ok(0)
}

fn cmd_verify(file: &Path, expected: &str, output: OutputFormat) -> Result<u8> {
    let evidence = load_evidence(file)?;
    let result = verify_commitment_hash_detailed(&evidence, expected);
    tracing::debug!(valid = result.valid, message = %result.message, "commitment verification");
    crate::print_verification(output, &result)
}

fn cmd_normalize(file: &Path) -> Result<u8> {
    let evidence = load_evidence(file)?;
    let text = to_canonical_string(&evidence).context("failed to canonicalize evidence")?;
    println!("{text}");
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_doc(dir: &Path) -> PathBuf {
        let path = dir.join("evidence.json");
        std::fs::write(&path, r#"{ "b": null, "a": "  x  " }"#).unwrap();
        path
    }

    #[test]
    fn hash_and_normalize_succeed() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_doc(dir.path());
        for command in [
            CommitmentCommand::Hash { file: file.clone() },
            CommitmentCommand::Normalize { file },
        ] {
            let args = CommitmentArgs { command };
            assert_eq!(run_commitment(&args, OutputFormat::Hex).unwrap(), 0);
        }
    }

    #[test]
    fn verify_known_vector() {
        let dir = tempfile::tempdir().unwrap();
        let args = CommitmentArgs {
            command: CommitmentCommand::Verify {
                file: write_doc(dir.path()),
                expected: "41ad34cdfd227032f76501171b8a070dddcc117230ecb79474e323998fd06092"
                    .to_string(),
            },
        };
        assert_eq!(run_commitment(&args, OutputFormat::Json).unwrap(), 0);
    }

    #[test]
    fn verify_mismatch_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        let args = CommitmentArgs {
            command: CommitmentCommand::Verify {
                file: write_doc(dir.path()),
                expected: "f".repeat(64),
            },
        };
        assert_eq!(run_commitment(&args, OutputFormat::Hex).unwrap(), 1);
    }
}
