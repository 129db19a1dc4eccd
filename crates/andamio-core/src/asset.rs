//! # Native Asset Identifiers
//!
//! Format checks and validated newtypes for Cardano policy IDs and asset
//! names. These are shape checks only; nothing here consults a network or
//! the per-network policy tables.
//!
//! - Policy ID: 56 hex characters (a 28-byte script hash).
//! - Asset name: even-length hex, at most 64 characters (0–32 bytes).

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Hex length of a policy ID.
pub const POLICY_ID_HEX_LEN: usize = 56;

/// Maximum hex length of an asset name.
pub const ASSET_NAME_MAX_HEX_LEN: usize = 64;

fn is_hex(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// True if `s` is a 56-character hex string.
pub fn is_valid_policy_id(s: &str) -> bool {
    s.len() == POLICY_ID_HEX_LEN && is_hex(s)
}

/// True if `s` is an even-length hex string of at most 64 characters.
///
/// The empty string is a valid asset name.
pub fn is_valid_asset_name(s: &str) -> bool {
    s.len() <= ASSET_NAME_MAX_HEX_LEN && s.len() % 2 == 0 && is_hex(s)
}

/// A minting policy identifier, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PolicyId(String);

impl PolicyId {
    /// Validate and wrap a policy ID.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPolicyId`] if `value` is not 56
    /// hex characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if !is_valid_policy_id(&s) {
            return Err(ValidationError::InvalidPolicyId(s));
        }
        Ok(Self(s.to_ascii_lowercase()))
    }

    /// Access the policy ID string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PolicyId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PolicyId> for String {
    fn from(id: PolicyId) -> Self {
        id.0
    }
}

impl std::fmt::Display for PolicyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A hex-encoded asset name, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssetName(String);

impl AssetName {
    /// Validate and wrap an asset name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidAssetName`] if `value` is not an
    /// even-length hex string of at most 64 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if !is_valid_asset_name(&s) {
            return Err(ValidationError::InvalidAssetName(s));
        }
        Ok(Self(s.to_ascii_lowercase()))
    }

    /// Access the asset name hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AssetName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AssetName> for String {
    fn from(name: AssetName) -> Self {
        name.0
    }
}

impl std::fmt::Display for AssetName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
