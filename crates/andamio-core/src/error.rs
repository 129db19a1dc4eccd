//! # Error Hierarchy
//!
//! Structured error types for the commitment toolkit, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Hash mismatches and malformed expected hashes are *not* errors. Verifying
//! untrusted input is the normal use case, so those outcomes are reported as
//! `false` or as a structured verification result by the pipelines.

use thiserror::Error;

/// Top-level error type for the commitment toolkit.
#[derive(Error, Debug)]
pub enum AndamioError {
    /// Binary encoding failed.
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// Canonical serialization failed.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// Domain primitive validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from the Plutus-compatible binary encoder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// A definite byte string exceeds what a two-byte length field can carry.
    #[error("byte string of {len} bytes exceeds the {max}-byte encoding limit")]
    TooLarge {
        /// Length of the rejected payload.
        len: usize,
        /// Largest length the encoder can frame.
        max: usize,
    },
}

/// Errors during canonical serialization of evidence documents.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// JSON serialization failed during canonicalization.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// Validation errors for hex-encoded primitives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A digest string is not 64 hexadecimal characters.
    #[error("invalid hash format: \"{0}\" (expected 64 hex chars)")]
    InvalidHash(String),

    /// A policy identifier is not 56 hexadecimal characters.
    #[error("invalid policy ID: \"{0}\" (expected 56 hex chars)")]
    InvalidPolicyId(String),

    /// An asset name is not an even-length hex string of at most 64 chars.
    #[error("invalid asset name: \"{0}\" (expected even-length hex, at most 64 chars)")]
    InvalidAssetName(String),
}
