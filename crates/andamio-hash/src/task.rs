//! # Task Hash Pipeline
//!
//! Hashes a project task the way the project validator does. The task is a
//! constructor-0 record whose four fields are encoded in a fixed order:
//!
//! 1. `content` — UTF-8 bytes through the chunking primitive.
//! 2. `expiration` — POSIX time in milliseconds.
//! 3. `lovelaceAmount` — reward in lovelace.
//! 4. `nativeAssets` — list of `[assetClassId, quantity]` pairs; an empty
//!    list is `0x80`, a non-empty one is an indefinite list of `0x82` pairs.
//!
//! The order above is the encoding order. It does not depend on struct field
//! order or on the key order of a JSON input.

use andamio_core::{blake2b_256, HashDigest, PlutusBytes, PlutusData};
use serde::{Deserialize, Serialize};

use crate::verify::{hashes_match, is_valid_hash_format};

/// One native-asset reward entry.
///
/// Serialized as a two-element JSON array `[assetClassId, quantity]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, i64)", into = "(String, i64)")]
pub struct NativeAsset {
    /// Asset class identifier as the chain stores it.
    pub asset_class_id: String,
    /// Number of units.
    pub quantity: i64,
}

impl NativeAsset {
    /// Create an asset entry.
    pub fn new(asset_class_id: impl Into<String>, quantity: i64) -> Self {
        Self {
            asset_class_id: asset_class_id.into(),
            quantity,
        }
    }
}

impl From<(String, i64)> for NativeAsset {
    fn from((asset_class_id, quantity): (String, i64)) -> Self {
        Self {
            asset_class_id,
            quantity,
        }
    }
}

impl From<NativeAsset> for (String, i64) {
    fn from(asset: NativeAsset) -> Self {
        (asset.asset_class_id, asset.quantity)
    }
}

/// A project task as committed on chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskData {
    /// Task description. Up to 140 characters is recommended but not enforced.
    pub content: String,
    /// Expiration as POSIX milliseconds.
    pub expiration: i64,
    /// Reward in lovelace.
    pub lovelace_amount: i64,
    /// Native-asset rewards, in encoding order.
    #[serde(default)]
    pub native_assets: Vec<NativeAsset>,
}

impl TaskData {
    /// Create a task without native-asset rewards.
    pub fn new(content: impl Into<String>, expiration: i64, lovelace_amount: i64) -> Self {
        Self {
            content: content.into(),
            expiration,
            lovelace_amount,
            native_assets: Vec::new(),
        }
    }

    /// Append a native-asset reward.
    pub fn with_asset(mut self, asset_class_id: impl Into<String>, quantity: i64) -> Self {
        self.native_assets.push(NativeAsset::new(asset_class_id, quantity));
        self
    }

    /// Build the on-chain data value for this task.
    pub fn to_plutus_data(&self) -> PlutusData {
        let assets = self
            .native_assets
            .iter()
            .map(|a| {
                PlutusData::pair(
                    PlutusData::text(&a.asset_class_id),
                    PlutusData::Int(a.quantity),
                )
            })
            .collect();
        PlutusData::Constr(vec![
            PlutusData::text(&self.content),
            PlutusData::Int(self.expiration),
            PlutusData::Int(self.lovelace_amount),
            PlutusData::List(assets),
        ])
    }

    /// Encode this task to the bytes the validator hashes.
    pub fn encode(&self) -> PlutusBytes {
        self.to_plutus_data().to_bytes()
    }
}

/// Compute the task digest.
pub fn task_digest(task: &TaskData) -> HashDigest {
    let bytes = task.encode();
    let digest = blake2b_256(&bytes);
    tracing::debug!(
        asset_count = task.native_assets.len(),
        encoded_len = bytes.len(),
        digest = %digest,
        "computed task hash"
    );
    digest
}

/// Compute the task hash as lowercase hex.
pub fn compute_task_hash(task: &TaskData) -> String {
    task_digest(task).to_hex()
}

/// Recompute the task hash and compare it with `expected`, ignoring case.
pub fn verify_task_hash(task: &TaskData, expected: &str) -> bool {
    hashes_match(&task_digest(task), expected)
}

/// True if `hash` has the shape of a task hash (64 hex characters).
pub fn is_valid_task_hash(hash: &str) -> bool {
    is_valid_hash_format(hash)
}

/// Pre-hash encoded bytes of `task` as lowercase hex.
///
/// Diagnostic only: compare this against bytes observed on chain when a
/// hash does not match. Hashing never depends on it.
pub fn debug_task_bytes(task: &TaskData) -> String {
    let hex = task.encode().to_hex();
    tracing::trace!(encoded = %hex, "task encoding");
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_task() -> TaskData {
        TaskData::new("Open Task #1", 1_769_027_280_000, 15_000_000)
    }

    #[test]
    fn open_task_vector() {
        let hash = compute_task_hash(&open_task());
        assert_eq!(
            hash,
            "c4c6affd3a575d56dc98f0e172928b5c5dd170ce13b1db4a9ae82f2d07223cb2"
        );
        assert_eq!(hash.len(), 64);
        assert!(is_valid_task_hash(&hash));
    }

    #[test]
    fn expiration_change_changes_hash() {
        let mut later = open_task();
        later.expiration += 1;
        let hash = compute_task_hash(&later);
        assert_ne!(hash, compute_task_hash(&open_task()));
        assert_eq!(
            hash,
            "ff9e538ef8c3001a37b8c401428a80bd4fc81d819df60f193c25314d8e0fe42b"
        );
    }

    #[test]
    fn empty_assets_encode_as_definite_empty_array() {
        let hex = debug_task_bytes(&open_task());
        assert_eq!(
            hex,
            "d8799f4c4f70656e205461736b2023311b0000019be23e1c801a00e4e1c080ff"
        );
        // Last two bytes: 0x80 for the asset list, 0xff closing the fields.
        assert!(hex.ends_with("80ff"));
        assert!(!hex.contains("9fff"));
    }

    #[test]
    fn assets_encode_as_pairs() {
        let task = TaskData::new("Complete the module", 1_735_689_600_000, 5_000_000)
            .with_asset("abc123.746f6b656e", 100)
            .with_asset("def456.6e6674", 1);
        assert_eq!(
            compute_task_hash(&task),
            "b49046e151e9e51ed8714bad313f104f35954cfbbcc9fe74becf9f4019b295c3"
        );
        assert!(debug_task_bytes(&task).contains("9f8251"));
    }

    #[test]
    fn long_content_and_asset_id_are_chunked() {
        let task =
            TaskData::new("x".repeat(65), 0, 1).with_asset(format!("{}.abc", "p".repeat(56)), 5);
        let hex = debug_task_bytes(&task);
        assert!(hex.starts_with("d8799f5f5840"));
        assert_eq!(
            compute_task_hash(&task),
            "60e4a68cd9028d5dfaf85ed62136119efe08387998c535c1322e24b72ac92f7c"
        );
    }

    #[test]
    fn verify_roundtrip_and_tamper() {
        let task = open_task();
        let hash = compute_task_hash(&task);
        assert!(verify_task_hash(&task, &hash));
        assert!(verify_task_hash(&task, &hash.to_uppercase()));
        let mut tampered = hash.clone();
        tampered.replace_range(63..64, if hash.ends_with('0') { "1" } else { "0" });
        assert!(!verify_task_hash(&task, &tampered));
        assert!(!verify_task_hash(&task, "short"));
    }

    #[test]
    fn deserializes_camel_case_json_in_any_key_order() {
        let json = r#"{
            "nativeAssets": [["abc123.746f6b656e", 100], ["def456.6e6674", 1]],
            "lovelaceAmount": 5000000,
            "expiration": 1735689600000,
            "content": "Complete the module"
        }"#;
        let task: TaskData = serde_json::from_str(json).unwrap();
        assert_eq!(task.native_assets[1], NativeAsset::new("def456.6e6674", 1));
        assert_eq!(
            compute_task_hash(&task),
            "b49046e151e9e51ed8714bad313f104f35954cfbbcc9fe74becf9f4019b295c3"
        );
    }

    #[test]
    fn native_assets_default_to_empty() {
        let json = r#"{"content":"Open Task #1","expiration":1769027280000,"lovelaceAmount":15000000}"#;
        let task: TaskData = serde_json::from_str(json).unwrap();
        assert_eq!(task, open_task());
    }

    #[test]
    fn rejects_non_integer_fields_at_the_boundary() {
        let json = r#"{"content":"t","expiration":"soon","lovelaceAmount":1}"#;
        assert!(serde_json::from_str::<TaskData>(json).is_err());
        let json = r#"{"content":"t","expiration":1.5,"lovelaceAmount":1}"#;
        assert!(serde_json::from_str::<TaskData>(json).is_err());
    }

    #[test]
    fn serializes_assets_as_arrays() {
        let task = open_task().with_asset("a.b", 2);
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["nativeAssets"], serde_json::json!([["a.b", 2]]));
        assert_eq!(json["lovelaceAmount"], serde_json::json!(15_000_000));
    }
}
