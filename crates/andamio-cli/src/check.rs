//! # Check Subcommand
//!
//! Format checks for values that end up in hashes or asset references.
//! Prints `OK` or `INVALID` and exits `0` or `1` accordingly.

use anyhow::Result;
use clap::{Args, Subcommand};

use andamio_core::{AndamioError, AssetName, HashDigest, PolicyId};

use crate::config::OutputFormat;

/// Arguments for the `andamio check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(subcommand)]
    pub command: CheckCommand,
}

/// Check subcommands.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Check that a value is a 64-hex-character hash.
    Hash {
        /// Value to check.
        value: String,
    },

    /// Check that a value is a 56-hex-character policy ID.
    PolicyId {
        /// Value to check.
        value: String,
    },

    /// Check that a value is an even-length hex asset name of at most 64 chars.
    AssetName {
        /// Value to check.
        value: String,
    },
}

impl CheckCommand {
    fn kind(&self) -> &'static str {
        match self {
            Self::Hash { .. } => "hash",
            Self::PolicyId { .. } => "policy-id",
            Self::AssetName { .. } => "asset-name",
        }
    }

    fn value(&self) -> &str {
        match self {
            Self::Hash { value } | Self::PolicyId { value } | Self::AssetName { value } => value,
        }
    }
}

/// Parse the value into its validated type and return its lowercase form.
fn validate(command: &CheckCommand) -> Result<String, AndamioError> {
    Ok(match command {
        CheckCommand::Hash { value } => HashDigest::from_hex(value)?.to_hex(),
        CheckCommand::PolicyId { value } => PolicyId::new(value.as_str())?.to_string(),
        CheckCommand::AssetName { value } => AssetName::new(value.as_str())?.to_string(),
    })
}

/// Execute the check subcommand.
pub fn run_check(args: &CheckArgs, output: OutputFormat) -> Result<u8> {
    let kind = args.command.kind();
    let outcome = validate(&args.command);
    if let Err(e) = &outcome {
        tracing::debug!(kind, error = %e, "check failed");
    }
    match output {
        OutputFormat::Hex => match &outcome {
            Ok(_) => println!("OK: {kind}"),
            Err(e) => println!("INVALID: {kind} ({e})"),
        },
        OutputFormat::Json => {
            let out = match &outcome {
                Ok(normalized) => serde_json::json!({
                    "kind": kind,
                    "value": args.command.value(),
                    "valid": true,
                    "normalized": normalized,
                }),
                Err(e) => serde_json::json!({
                    "kind": kind,
                    "value": args.command.value(),
                    "valid": false,
                    "error": e.to_string(),
                }),
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(u8::from(outcome.is_err()))
}
