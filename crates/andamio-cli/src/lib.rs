//! # andamio-cli — Command-Line Access to Andamio Hashes
//!
//! Provides the `andamio` binary for computing and checking the hashes
//! Andamio validators store on chain.
//!
//! ## Subcommands
//!
//! - `andamio slt` — SLT list hashes.
//! - `andamio task` — project task hashes and their pre-hash encoding.
//! - `andamio commitment` — evidence commitment hashes and canonical text.
//! - `andamio check` — hash, policy ID, and asset name format checks.
//!
//! Inputs are JSON files; `-` reads standard input.
//!
//! ```bash
//! andamio slt hash module-101.json
//! andamio task verify task.json --expected c4c6affd…
//! echo '{"b":2,"a":1}' | andamio --output json commitment hash -
//! ```
//!
//! Exit codes: `0` success or match, `1` mismatch / invalid format,
//! `2` operational error.

pub mod check;
pub mod commitment;
pub mod config;
pub mod slt;
pub mod task;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use andamio_hash::VerificationResult;

use crate::config::OutputFormat;

/// Read an input file, or standard input when `path` is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read standard input")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read file: {}", path.display()))
}

/// Read and deserialize a JSON input.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = read_input(path)?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse JSON: {}", path.display()))
}

/// Print a computed hash.
pub fn print_hash(format: OutputFormat, kind: &str, hash: &str) -> Result<()> {
    match format {
        OutputFormat::Hex => println!("{hash}"),
        OutputFormat::Json => {
            let out = serde_json::json!({ "kind": kind, "hash": hash });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}

/// Print a verification result and return its exit code.
pub fn print_verification(format: OutputFormat, result: &VerificationResult) -> Result<u8> {
    match format {
        OutputFormat::Hex => {
            let status = if result.valid { "OK" } else { "FAIL" };
            println!("{status}: {}", result.message);
            if !result.valid && !result.computed_hash.is_empty() {
                println!("  computed: {}", result.computed_hash);
                println!("  expected: {}", result.expected_hash);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
    }
    Ok(verification_exit_code(result))
}

/// `0` for a match, `1` otherwise.
pub fn verification_exit_code(result: &VerificationResult) -> u8 {
    u8::from(!result.valid)
}
