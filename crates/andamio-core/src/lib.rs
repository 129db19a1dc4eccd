#![deny(missing_docs)]

//! # andamio-core — Foundational Types for Andamio Commitment Hashing
//!
//! This crate defines the encoding substrate every hash pipeline shares. It
//! has no internal crate dependencies — only `serde`, `serde_json`,
//! `serde_jcs`, `blake2`, and `thiserror` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **One encoder.** [`PlutusData`] and the primitives in [`plutus`] are the
//!    single implementation of the chain's framing rules. Pipelines describe
//!    their inputs as data trees; they never emit framing bytes themselves.
//!
//! 2. **Typed digest inputs.** [`blake2b_256()`] accepts only [`PlutusBytes`]
//!    or [`CanonicalBytes`], so a digest can only be taken over encoder or
//!    canonicalizer output.
//!
//! 3. **Mismatch is not an error.** Validators return `bool`; only genuinely
//!    unrepresentable input (e.g. an oversized byte string) is an `Err`.
//!
//! 4. **[`AndamioError`] hierarchy.** Structured errors with `thiserror` — no
//!    `Box<dyn Error>`, no `.unwrap()` outside tests.

pub mod asset;
pub mod canonical;
pub mod digest;
pub mod error;
pub mod plutus;

// Re-export primary types at crate root for ergonomic imports.
pub use asset::{is_valid_asset_name, is_valid_policy_id, AssetName, PolicyId};
pub use canonical::{normalize, to_canonical_string, CanonicalBytes};
pub use digest::{blake2b_256, is_valid_hash_hex, DigestInput, HashDigest, DIGEST_HEX_LEN};
pub use error::{AndamioError, CanonicalizationError, EncodingError, ValidationError};
pub use plutus::{
    encode_byte_string, encode_chunked_byte_string, encode_constructor, encode_definite_array,
    encode_indefinite_array, encode_integer, encode_unsigned, PlutusBytes, PlutusData,
    CHUNK_SIZE, MAX_BYTE_STRING_LEN,
};
