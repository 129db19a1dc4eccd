//! # Canonical Normalization — Evidence Documents
//!
//! This module defines [`normalize()`] and [`CanonicalBytes`], the sole
//! construction path for evidence bytes used in commitment hashing.
//!
//! ## Normalization Rules
//!
//! Applied recursively, depth first:
//!
//! 1. `null` stays `null`.
//! 2. Strings are trimmed at both ends; internal whitespace is untouched.
//! 3. Numbers and booleans pass through unchanged.
//! 4. Arrays keep their order; each element is normalized.
//! 5. Object keys are sorted ascending by code point; each value is
//!    normalized. Explicit `null` values are kept.
//!
//! The whitespace set is the ECMAScript `String.prototype.trim` set (Unicode
//! `White_Space` without U+0085, plus U+FEFF), since the documents being
//! committed are produced and hashed by a JavaScript editor as well.
//!
//! ## Text Form
//!
//! After normalization, serialization uses `serde_jcs` for RFC 8785 output:
//! sorted keys, compact separators, ECMAScript number formatting. This is
//! byte-identical to `JSON.stringify` over the normalized tree.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::CanonicalizationError;

/// Bytes produced exclusively by normalization followed by JCS serialization.
///
/// The inner `Vec<u8>` is private; downstream code cannot construct
/// `CanonicalBytes` except through [`CanonicalBytes::new()`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Construct canonical bytes from any serializable value.
    ///
    /// This is the ONLY way to construct `CanonicalBytes`. Every commitment
    /// hash flows through this constructor.
    ///
    /// # Errors
    ///
    /// Returns [`CanonicalizationError::SerializationFailed`] if the value
    /// cannot be represented as JSON (e.g. a map with non-string keys).
    pub fn new(obj: &impl Serialize) -> Result<Self, CanonicalizationError> {
        let value = serde_json::to_value(obj)?;
        let normalized = normalize(&value);
        let text = serde_jcs::to_string(&normalized)?;
        Ok(Self(text.into_bytes()))
    }

    /// Access the canonical bytes for digest computation.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume and return the inner byte vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Number of canonical bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Normalize a JSON value tree. Total and idempotent.
pub fn normalize(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(trim_ecmascript(s).to_string()),
        Value::Array(items) => Value::Array(items.iter().map(normalize).collect()),
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort_unstable();
            let mut sorted = Map::with_capacity(map.len());
            for key in keys {
                if let Some(v) = map.get(key) {
                    sorted.insert(key.clone(), normalize(v));
                }
            }
            Value::Object(sorted)
        }
        // Null, Bool and Number pass through unchanged.
        other => other.clone(),
    }
}

/// Render the normalized form of `obj` as canonical JSON text.
///
/// # Errors
///
/// Same conditions as [`CanonicalBytes::new()`].
pub fn to_canonical_string(obj: &impl Serialize) -> Result<String, CanonicalizationError> {
    let value = serde_json::to_value(obj)?;
    Ok(serde_jcs::to_string(&normalize(&value))?)
}

fn is_ecmascript_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

fn trim_ecmascript(s: &str) -> &str {
    s.trim_matches(is_ecmascript_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn canonical_str(v: &Value) -> String {
        let cb = CanonicalBytes::new(v).expect("should canonicalize");
        String::from_utf8(cb.into_bytes()).unwrap()
    }

    #[test]
    fn sorts_keys() {
        assert_eq!(canonical_str(&json!({"z": 1, "m": 2, "a": 3})), r#"{"a":3,"m":2,"z":1}"#);
    }

    #[test]
    fn sorts_nested_keys_and_keeps_array_order() {
        let data = json!({"outer": {"b": 2, "a": 1}, "list": [3, 2, 1]});
        assert_eq!(canonical_str(&data), r#"{"list":[3,2,1],"outer":{"a":1,"b":2}}"#);
    }

    #[test]
    fn trims_string_values_only() {
        let data = json!({" key ": "  padded value \n", "b": ["\tx", "y  "]});
        assert_eq!(
            normalize(&data),
            json!({" key ": "padded value", "b": ["x", "y"]})
        );
    }

    #[test]
    fn keeps_internal_whitespace() {
        assert_eq!(normalize(&json!("  a  b  ")), json!("a  b"));
    }

    #[test]
    fn trims_ecmascript_whitespace_set() {
        assert_eq!(normalize(&json!("\u{FEFF}\u{00A0}x\u{3000}\u{2029}")), json!("x"));
        // NEL is not whitespace for String.prototype.trim.
        assert_eq!(normalize(&json!("\u{0085}x")), json!("\u{0085}x"));
    }

    #[test]
    fn keeps_explicit_null() {
        assert_eq!(canonical_str(&json!({"b": null, "a": " x "})), r#"{"a":"x","b":null}"#);
    }

    #[test]
    fn scalars_pass_through() {
        assert_eq!(normalize(&json!(null)), json!(null));
        assert_eq!(normalize(&json!(true)), json!(true));
        assert_eq!(normalize(&json!(-42)), json!(-42));
        assert_eq!(normalize(&json!(1.5)), json!(1.5));
    }

    #[test]
    fn key_order_does_not_matter() {
        let a: Value = serde_json::from_str(r#"{"a":1,"b":2}"#).unwrap();
        let b: Value = serde_json::from_str(r#"{"b":2,"a":1}"#).unwrap();
        assert_eq!(canonical_str(&a), canonical_str(&b));
    }

    #[test]
    fn integral_float_prints_like_javascript() {
        assert_eq!(canonical_str(&json!({"n": 2.0})), r#"{"n":2}"#);
    }

    #[test]
    fn empty_containers() {
        assert_eq!(canonical_str(&json!({})), "{}");
        assert_eq!(canonical_str(&json!([])), "[]");
    }

    #[test]
    fn unicode_passes_through_unescaped() {
        let s = canonical_str(&json!({"name": "\u{00e9}t\u{00e9}"}));
        assert_eq!(s, "{\"name\":\"\u{00e9}t\u{00e9}\"}");
    }

    #[test]
    fn to_canonical_string_matches_bytes() {
        let data = json!({"b": " 1 ", "a": [null]});
        let text = to_canonical_string(&data).unwrap();
        assert_eq!(text.as_bytes(), CanonicalBytes::new(&data).unwrap().as_bytes());
        assert_eq!(text, r#"{"a":[null],"b":"1"}"#);
    }

    #[test]
    fn len_and_is_empty() {
        let cb = CanonicalBytes::new(&json!({"a": 1})).unwrap();
        assert_eq!(cb.len(), 7);
        assert!(!cb.is_empty());
    }
}
