//! # Verification Layer
//!
//! Hash comparison and structured reporting shared by every pipeline.
//!
//! A malformed expected hash and a mismatching one are both ordinary
//! outcomes, not errors: callers routinely verify hashes they read from
//! untrusted transactions or user input.

use andamio_core::{is_valid_hash_hex, HashDigest};
use serde::{Deserialize, Serialize};

/// Message for an expected hash that fails the 64-hex-character check.
pub const MSG_FORMAT_INVALID: &str = "Invalid hash format: expected 64 hexadecimal characters";

/// Message for a well-formed expected hash that does not match.
pub const MSG_MISMATCH: &str = "Hash mismatch: content does not match the expected hash";

/// Message for a successful match.
pub const MSG_MATCH: &str = "Hash verified: content matches the expected hash";

/// Outcome of a detailed verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    /// Whether the computed hash equals the expected hash.
    pub valid: bool,
    /// Hash recomputed from the supplied content, lowercase hex. Empty when
    /// the content could not be hashed.
    pub computed_hash: String,
    /// The expected hash exactly as supplied.
    pub expected_hash: String,
    /// Human-readable explanation of the outcome.
    pub message: String,
}

impl VerificationResult {
    /// Compare a computed digest against an expected hex string.
    ///
    /// The format of `expected` is checked first so that a malformed hash is
    /// reported as such rather than as a content mismatch.
    pub fn compare(computed: &HashDigest, expected: &str) -> Self {
        let computed_hash = computed.to_hex();
        let (valid, message) = if !is_valid_hash_hex(expected) {
            (false, MSG_FORMAT_INVALID)
        } else if computed_hash.eq_ignore_ascii_case(expected) {
            (true, MSG_MATCH)
        } else {
            (false, MSG_MISMATCH)
        };
        Self {
            valid,
            computed_hash,
            expected_hash: expected.to_string(),
            message: message.to_string(),
        }
    }

    /// Result for a malformed expected hash, reported without hashing.
    pub fn format_invalid(expected: &str) -> Self {
        Self {
            valid: false,
            computed_hash: String::new(),
            expected_hash: expected.to_string(),
            message: MSG_FORMAT_INVALID.to_string(),
        }
    }

    /// Result for content that could not be hashed at all.
    pub fn failed(expected: &str, reason: impl std::fmt::Display) -> Self {
        Self {
            valid: false,
            computed_hash: String::new(),
            expected_hash: expected.to_string(),
            message: format!("Hash computation failed: {reason}"),
        }
    }

    /// True if the failure was caused by a malformed expected hash.
    pub fn is_format_error(&self) -> bool {
        !self.valid && self.message == MSG_FORMAT_INVALID
    }
}

/// Case-insensitive comparison of a computed digest with an expected hex hash.
pub fn hashes_match(computed: &HashDigest, expected: &str) -> bool {
    computed.matches_hex(expected)
}

/// True if `hash` is 64 hex characters, either case.
pub fn is_valid_hash_format(hash: &str) -> bool {
    is_valid_hash_hex(hash)
}
