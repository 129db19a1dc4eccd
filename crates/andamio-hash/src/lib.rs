//! # andamio-hash — On-Chain Compatible Hash Pipelines
//!
//! Off-chain computation of the hashes Andamio validators store on chain:
//!
//! - **SLT hash** ([`slt`]) — a course module's list of learning targets.
//! - **Task hash** ([`task`]) — a project task record with its rewards.
//! - **Commitment hash** ([`commitment`]) — evidence submitted for an
//!   assignment or task, committed without revealing its content.
//!
//! Each pipeline assembles its input into an [`andamio_core::PlutusData`]
//! tree (or canonical evidence text), serializes it with the shared encoder
//! and hashes it with Blake2b-256. [`verify`] holds the comparison and
//! reporting logic the pipelines share.
//!
//! Every function is a pure computation: no I/O, no shared state, safe to
//! call from any number of threads.

pub mod commitment;
pub mod slt;
pub mod task;
pub mod verify;

pub use commitment::{
    commitment_digest, compute_commitment_hash, is_valid_commitment_hash,
    verify_commitment_hash, verify_commitment_hash_detailed,
};
pub use slt::{compute_slt_hash, encode_slts, is_valid_slt_hash, slt_digest, verify_slt_hash};
pub use task::{
    compute_task_hash, debug_task_bytes, is_valid_task_hash, task_digest, verify_task_hash,
    NativeAsset, TaskData,
};
pub use verify::{hashes_match, is_valid_hash_format, VerificationResult};
