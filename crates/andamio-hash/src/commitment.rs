//! # Commitment Hash Pipeline
//!
//! Hashes an evidence document (typically rich-text editor JSON) so that the
//! digest can be committed on chain without revealing the content.
//!
//! Pipeline: [`normalize`](andamio_core::normalize) → JCS text → UTF-8 →
//! Blake2b-256 → lowercase hex. Documents that differ only in key order or
//! in leading/trailing whitespace of string values hash identically.

use andamio_core::{blake2b_256, CanonicalBytes, CanonicalizationError, HashDigest};
use serde::Serialize;

use crate::verify::{hashes_match, is_valid_hash_format, VerificationResult};

/// Compute the commitment digest of an evidence document.
///
/// # Errors
///
/// Returns [`CanonicalizationError`] if `evidence` cannot be represented as
/// JSON. A `serde_json::Value` always can.
pub fn commitment_digest(evidence: &impl Serialize) -> Result<HashDigest, CanonicalizationError> {
    let canonical = CanonicalBytes::new(evidence)?;
    let digest = blake2b_256(&canonical);
    tracing::debug!(
        canonical_len = canonical.len(),
        digest = %digest,
        "computed commitment hash"
    );
    Ok(digest)
}

/// Compute the commitment hash as lowercase hex.
///
/// # Errors
///
/// See [`commitment_digest()`].
pub fn compute_commitment_hash(evidence: &impl Serialize) -> Result<String, CanonicalizationError> {
    Ok(commitment_digest(evidence)?.to_hex())
}

/// Recompute the commitment hash and compare it with `expected`.
///
/// Evidence that cannot be canonicalized never verifies.
pub fn verify_commitment_hash(evidence: &impl Serialize, expected: &str) -> bool {
    match commitment_digest(evidence) {
        Ok(digest) => hashes_match(&digest, expected),
        Err(e) => {
            tracing::warn!(error = %e, "evidence could not be canonicalized");
            false
        }
    }
}

/// Verify with a structured result that distinguishes a malformed expected
/// hash from a content mismatch and from a match.
///
/// The expected hash is format-checked before the evidence is touched, so a
/// malformed expected hash is reported as such even for evidence that cannot
/// be canonicalized.
pub fn verify_commitment_hash_detailed(
    evidence: &impl Serialize,
    expected: &str,
) -> VerificationResult {
    if !is_valid_hash_format(expected) {
        return VerificationResult::format_invalid(expected);
    }
    match commitment_digest(evidence) {
        Ok(digest) => VerificationResult::compare(&digest, expected),
        Err(e) => VerificationResult::failed(expected, e),
    }
}

/// True if `hash` has the shape of a commitment hash (64 hex characters).
pub fn is_valid_commitment_hash(hash: &str) -> bool {
    is_valid_hash_format(hash)
}

/// Former name of [`compute_commitment_hash()`].
///
/// # Errors
///
/// See [`commitment_digest()`].
#[deprecated(since = "0.2.0", note = "use `compute_commitment_hash`")]
pub fn compute_assignment_info_hash(
    evidence: &impl Serialize,
) -> Result<String, CanonicalizationError> {
    compute_commitment_hash(evidence)
}

/// Former name of [`verify_commitment_hash()`].
#[deprecated(since = "0.2.0", note = "use `verify_commitment_hash`")]
pub fn verify_assignment_info_hash(evidence: &impl Serialize, expected: &str) -> bool {
    verify_commitment_hash(evidence, expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::{MSG_FORMAT_INVALID, MSG_MATCH, MSG_MISMATCH};
    use serde_json::json;
    use std::collections::HashMap;

    fn editor_doc() -> serde_json::Value {
        json!({
            "type": "doc",
            "content": [{
                "type": "paragraph",
                "content": [{"type": "text", "text": "  Hello world  "}]
            }]
        })
    }

    const EDITOR_DOC_HASH: &str =
        "7bf21e089603ce320ce1054b9be0b7f5aa636369d5f7a43b5ac2708bec72a9c1";

    #[test]
    fn editor_document_vector() {
        assert_eq!(compute_commitment_hash(&editor_doc()).unwrap(), EDITOR_DOC_HASH);
    }

    #[test]
    fn whitespace_and_key_order_do_not_matter() {
        let reordered: serde_json::Value = serde_json::from_str(
            r#"{"content":[{"content":[{"text":"Hello world","type":"text"}],"type":"paragraph"}],"type":"doc"}"#,
        )
        .unwrap();
        assert_eq!(compute_commitment_hash(&reordered).unwrap(), EDITOR_DOC_HASH);
    }

    #[test]
    fn typed_input_hashes_like_json() {
        let mut map = HashMap::new();
        map.insert("b", 2);
        map.insert("a", 1);
        assert_eq!(
            compute_commitment_hash(&map).unwrap(),
            compute_commitment_hash(&json!({"a": 1, "b": 2})).unwrap()
        );
    }

    #[test]
    fn verify_roundtrip() {
        let doc = editor_doc();
        let hash = compute_commitment_hash(&doc).unwrap();
        assert!(verify_commitment_hash(&doc, &hash));
        assert!(verify_commitment_hash(&doc, &hash.to_uppercase()));
        assert!(!verify_commitment_hash(&doc, &hash.replacen('7', "8", 1)));
    }

    #[test]
    fn detailed_distinguishes_outcomes() {
        let doc = editor_doc();

        let ok = verify_commitment_hash_detailed(&doc, EDITOR_DOC_HASH);
        assert!(ok.valid);
        assert_eq!(ok.message, MSG_MATCH);

        let bad_format = verify_commitment_hash_detailed(&doc, "1234");
        assert!(!bad_format.valid);
        assert_eq!(bad_format.message, MSG_FORMAT_INVALID);

        let mismatch = verify_commitment_hash_detailed(&doc, &"0".repeat(64));
        assert!(!mismatch.valid);
        assert_eq!(mismatch.message, MSG_MISMATCH);
        assert_eq!(mismatch.computed_hash, EDITOR_DOC_HASH);
    }

    #[test]
    fn non_string_keys_fail_canonicalization() {
        let mut map = HashMap::new();
        map.insert(vec![1u8], 1);
        assert!(compute_commitment_hash(&map).is_err());
        assert!(!verify_commitment_hash(&map, EDITOR_DOC_HASH));
        let result = verify_commitment_hash_detailed(&map, EDITOR_DOC_HASH);
        assert!(!result.valid);
        assert!(result.computed_hash.is_empty());
    }

    #[test]
    fn malformed_expected_hash_reported_before_canonicalization() {
        let mut map = HashMap::new();
        map.insert(vec![1u8], 1);
        let result = verify_commitment_hash_detailed(&map, "not-a-hash");
        assert!(!result.valid);
        assert!(result.is_format_error());
        assert_eq!(result.message, MSG_FORMAT_INVALID);
        assert!(result.computed_hash.is_empty());
        assert_eq!(result.expected_hash, "not-a-hash");
    }

    #[test]
    fn format_validator() {
        assert!(is_valid_commitment_hash(EDITOR_DOC_HASH));
        assert!(!is_valid_commitment_hash(""));
    }

    #[test]
    #[allow(deprecated)]
    fn deprecated_aliases_match() {
        let doc = editor_doc();
        assert_eq!(compute_assignment_info_hash(&doc).unwrap(), EDITOR_DOC_HASH);
        assert!(verify_assignment_info_hash(&doc, EDITOR_DOC_HASH));
    }
}
