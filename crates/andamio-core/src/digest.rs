//! # Blake2b-256 Digests
//!
//! Defines [`HashDigest`], the 32-byte digest every pipeline produces, and
//! [`blake2b_256()`], the only way to compute one.
//!
//! ## Security Invariant
//!
//! `blake2b_256()` accepts only [`DigestInput`] types: encoder output
//! ([`PlutusBytes`]) and canonical evidence text ([`CanonicalBytes`]). The
//! trait is sealed, so no code path can hash bytes that skipped encoding or
//! canonicalization.
//!
//! ## Hex Form
//!
//! Digests are rendered as 64 lowercase hex characters. Parsing accepts
//! either case.

use std::fmt;
use std::str::FromStr;

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use serde::{Deserialize, Serialize};

use crate::canonical::CanonicalBytes;
use crate::error::ValidationError;
use crate::plutus::PlutusBytes;

type Blake2b256 = Blake2b<U32>;

/// Digest length in bytes.
pub const DIGEST_LEN: usize = 32;

/// Digest length in hex characters.
pub const DIGEST_HEX_LEN: usize = DIGEST_LEN * 2;

mod sealed {
    pub trait Sealed {}
    impl Sealed for crate::canonical::CanonicalBytes {}
    impl Sealed for crate::plutus::PlutusBytes {}
}

/// Byte sequences that may be fed to [`blake2b_256()`].
pub trait DigestInput: sealed::Sealed {
    /// The bytes to hash.
    fn digest_bytes(&self) -> &[u8];
}

impl DigestInput for PlutusBytes {
    fn digest_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl DigestInput for CanonicalBytes {
    fn digest_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// A Blake2b-256 digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HashDigest([u8; DIGEST_LEN]);

impl HashDigest {
    /// Wrap raw digest bytes.
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse a 64-character hex string, either case.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidHash`] if the input is not exactly
    /// 64 hex characters.
    pub fn from_hex(hex: &str) -> Result<Self, ValidationError> {
        if !is_valid_hash_hex(hex) {
            return Err(ValidationError::InvalidHash(hex.to_string()));
        }
        let mut bytes = [0u8; DIGEST_LEN];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&hex[2 * i..2 * i + 2], 16)
                .map_err(|_| ValidationError::InvalidHash(hex.to_string()))?;
        }
        Ok(Self(bytes))
    }

    /// Access the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Return the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        to_hex(&self.0)
    }

    /// Compare against a hex string, ignoring case.
    ///
    /// Malformed input never matches.
    pub fn matches_hex(&self, expected: &str) -> bool {
        is_valid_hash_hex(expected) && self.to_hex().eq_ignore_ascii_case(expected)
    }
}

impl fmt::Display for HashDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for HashDigest {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for HashDigest {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<HashDigest> for String {
    fn from(digest: HashDigest) -> Self {
        digest.to_hex()
    }
}

/// Compute the Blake2b-256 digest of encoded or canonical bytes.
pub fn blake2b_256(data: &impl DigestInput) -> HashDigest {
    let hash = Blake2b256::digest(data.digest_bytes());
    let mut bytes = [0u8; DIGEST_LEN];
    bytes.copy_from_slice(&hash);
    HashDigest(bytes)
}

/// True if `s` is exactly 64 hexadecimal characters, either case.
pub fn is_valid_hash_hex(s: &str) -> bool {
    s.len() == DIGEST_HEX_LEN && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Encode bytes as a lowercase hex string.
pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
