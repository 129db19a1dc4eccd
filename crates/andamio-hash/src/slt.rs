//! # SLT Hash Pipeline
//!
//! Hashes an ordered list of Student Learning Targets the way the course
//! module validator does: a list of byte strings, each string routed
//! through the chain's chunking primitive (regardless of its length),
//! serialized and hashed with Blake2b-256.

use andamio_core::{blake2b_256, HashDigest, PlutusBytes, PlutusData};

use crate::verify::{hashes_match, is_valid_hash_format};

/// Build the on-chain data value for a list of SLTs.
pub fn slts_to_plutus_data<S: AsRef<str>>(slts: &[S]) -> PlutusData {
    PlutusData::List(slts.iter().map(|s| PlutusData::text(s.as_ref())).collect())
}

/// Encode a list of SLTs to the bytes the validator hashes.
pub fn encode_slts<S: AsRef<str>>(slts: &[S]) -> PlutusBytes {
    slts_to_plutus_data(slts).to_bytes()
}

/// Compute the SLT digest.
pub fn slt_digest<S: AsRef<str>>(slts: &[S]) -> HashDigest {
    let bytes = encode_slts(slts);
    let digest = blake2b_256(&bytes);
    tracing::debug!(
        slt_count = slts.len(),
        encoded_len = bytes.len(),
        digest = %digest,
        "computed SLT hash"
    );
    digest
}

/// Compute the SLT hash as lowercase hex.
pub fn compute_slt_hash<S: AsRef<str>>(slts: &[S]) -> String {
    slt_digest(slts).to_hex()
}

/// Recompute the SLT hash and compare it with `expected`, ignoring case.
pub fn verify_slt_hash<S: AsRef<str>>(slts: &[S], expected: &str) -> bool {
    hashes_match(&slt_digest(slts), expected)
}

/// True if `hash` has the shape of an SLT hash (64 hex characters).
pub fn is_valid_slt_hash(hash: &str) -> bool {
    is_valid_hash_format(hash)
}

/// Former name of [`compute_slt_hash()`].
#[deprecated(since = "0.2.0", note = "use `compute_slt_hash`")]
pub fn hash_slts<S: AsRef<str>>(slts: &[S]) -> String {
    compute_slt_hash(slts)
}
