//! # SLT Subcommand
//!
//! Computes and verifies SLT list hashes. The input file holds a JSON array
//! of strings in module order.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Subcommand};

use andamio_hash::{slt_digest, VerificationResult};

use crate::config::OutputFormat;

/// Arguments for the `andamio slt` subcommand.
#[derive(Args, Debug)]
pub struct SltArgs {
    #[command(subcommand)]
    pub command: SltCommand,
}

/// SLT subcommands.
#[derive(Subcommand, Debug)]
pub enum SltCommand {
    /// Compute the hash of an SLT list.
    Hash {
        /// JSON array of SLT strings (`-` for stdin).
        #[arg(value_name = "FILE", default_value = "-")]
        file: PathBuf,
    },

    /// Verify an SLT list against an expected hash.
    Verify {
        /// JSON array of SLT strings (`-` for stdin).
        #[arg(value_name = "FILE", default_value = "-")]
        file: PathBuf,
        /// Expected hash (64 hex chars, either case).
        #[arg(long)]
        expected: String,
    },
}

/// Execute the SLT subcommand.
pub fn run_slt(args: &SltArgs, output: OutputFormat) -> Result<u8> {
    match &args.command {
        SltCommand::Hash { file } => cmd_hash(file, output),
        SltCommand::Verify { file, expected } => cmd_verify(file, expected, output),
    }
}

fn load_slts(file: &Path) -> Result<Vec<String>> {
    let slts: Vec<String> = crate::read_json(file)?;
    tracing::info!(count = slts.len(), file = %file.display(), "loaded SLTs");
    Ok(slts)
}

fn cmd_hash(file: &Path, output: OutputFormat) -> Result<u8> {
    let slts = load_slts(file)?;
    crate::print_hash(output, "slt", &slt_digest(&slts).to_hex())?;
    Ok(0)
}

fn cmd_verify(file: &Path, expected: &str, output: OutputFormat) -> Result<u8> {
    let slts = load_slts(file)?;
    let result = VerificationResult::compare(&slt_digest(&slts), expected);
    crate::print_verification(output, &result)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODULE_101_HASH: &str =
        "eff7d90a6ed2eaf32b523efb25d95f748166158bcce048717a4920478be052cf";

    fn write_module(dir: &Path) -> PathBuf {
        let path = dir.join("slts.json");
        std::fs::write(
            &path,
            r#"["I can set up a Typescript development environment.",
                "I can use Github CLI to create an issue.",
                "I can run the Andamio T3 App Template locally."]"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn hash_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let args = SltArgs {
            command: SltCommand::Hash {
                file: write_module(dir.path()),
            },
        };
        assert_eq!(run_slt(&args, OutputFormat::Hex).unwrap(), 0);
    }

    #[test]
    fn verify_known_vector() {
        let dir = tempfile::tempdir().unwrap();
        let args = SltArgs {
            command: SltCommand::Verify {
                file: write_module(dir.path()),
                expected: MODULE_101_HASH.to_uppercase(),
            },
        };
        assert_eq!(run_slt(&args, OutputFormat::Json).unwrap(), 0);
    }

    #[test]
    fn verify_mismatch_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        let args = SltArgs {
            command: SltCommand::Verify {
                file: write_module(dir.path()),
                expected: "0".repeat(64),
            },
        };
        assert_eq!(run_slt(&args, OutputFormat::Hex).unwrap(), 1);
    }

    #[test]
    fn rejects_non_string_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "[1, 2]").unwrap();
        let args = SltArgs {
            command: SltCommand::Hash { file: path },
        };
        assert!(run_slt(&args, OutputFormat::Hex).is_err());
    }
}
