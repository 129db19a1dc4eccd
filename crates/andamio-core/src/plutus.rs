//! # Plutus-Compatible Binary Encoding
//!
//! Reproduces the subset of CBOR that the on-chain validator emits when it
//! serializes `BuiltinData` before hashing. Every length prefix, chunk
//! boundary and break byte here must match the chain exactly: a single
//! divergent byte yields a different Blake2b-256 digest and the off-chain
//! value silently stops matching on-chain state.
//!
//! ## Framing Rules
//!
//! | Item | Encoding |
//! |------|----------|
//! | byte string, len 0–23 | `0x40 + len`, payload |
//! | byte string, len 24–255 | `0x58`, 1 length byte, payload |
//! | byte string, len 256–65535 | `0x59`, 2 length bytes, payload |
//! | chunked byte string, len > 64 | `0x5f`, 64-byte definite chunks, `0xff` |
//! | integer | major type 0 / 1, minimal width (`0x18`, `0x19`, `0x1a`, `0x1b`) |
//! | non-empty list | `0x9f`, items, `0xff` |
//! | empty list | `0x80` |
//! | constructor 0 | `0xd8 0x79`, then the fields as a list |
//!
//! Multi-byte length and integer fields are big-endian. This is not a
//! general CBOR encoder and there is no decoder.

use crate::digest::to_hex;
use crate::error::EncodingError;

/// Size of each slice in a chunked byte string.
pub const CHUNK_SIZE: usize = 64;

/// Longest payload a definite byte string header can describe here.
pub const MAX_BYTE_STRING_LEN: usize = 65_535;

const MAJOR_UNSIGNED: u8 = 0x00;
const MAJOR_NEGATIVE: u8 = 0x20;
const MAJOR_BYTES: u8 = 0x40;
const MAJOR_ARRAY: u8 = 0x80;

const INDEFINITE_BYTES: u8 = 0x5f;
const INDEFINITE_ARRAY: u8 = 0x9f;
const BREAK: u8 = 0xff;

/// CBOR tag 121: Plutus constructor alternative 0.
const CONSTR_0_TAG: [u8; 2] = [0xd8, 0x79];

// ---------------------------------------------------------------------------
// Low-level writers
// ---------------------------------------------------------------------------

/// Write a CBOR initial byte plus argument using the shortest width.
fn write_head(out: &mut Vec<u8>, major: u8, value: u64) {
    if value < 24 {
        out.push(major | value as u8);
    } else if value <= u64::from(u8::MAX) {
        out.push(major | 0x18);
        out.push(value as u8);
    } else if value <= u64::from(u16::MAX) {
        out.push(major | 0x19);
        out.extend_from_slice(&(value as u16).to_be_bytes());
    } else if value <= u64::from(u32::MAX) {
        out.push(major | 0x1a);
        out.extend_from_slice(&(value as u32).to_be_bytes());
    } else {
        out.push(major | 0x1b);
        out.extend_from_slice(&value.to_be_bytes());
    }
}

/// Caller guarantees `bytes.len() <= MAX_BYTE_STRING_LEN`.
fn write_definite_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
    write_head(out, MAJOR_BYTES, bytes.len() as u64);
    out.extend_from_slice(bytes);
}

fn write_chunked_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
    if bytes.len() <= CHUNK_SIZE {
        write_definite_bytes(out, bytes);
        return;
    }
    out.push(INDEFINITE_BYTES);
    for chunk in bytes.chunks(CHUNK_SIZE) {
        write_definite_bytes(out, chunk);
    }
    out.push(BREAK);
}

fn write_integer(out: &mut Vec<u8>, n: i64) {
    if n >= 0 {
        write_head(out, MAJOR_UNSIGNED, n as u64);
    } else {
        // -1 - n is non-negative for every negative i64, including i64::MIN.
        write_head(out, MAJOR_NEGATIVE, (-1 - n) as u64);
    }
}

// ---------------------------------------------------------------------------
// Primitive encoders
// ---------------------------------------------------------------------------

/// Encode `bytes` as a single definite-length byte string.
///
/// # Errors
///
/// Returns [`EncodingError::TooLarge`] when the payload is longer than
/// [`MAX_BYTE_STRING_LEN`].
pub fn encode_byte_string(bytes: &[u8]) -> Result<Vec<u8>, EncodingError> {
    if bytes.len() > MAX_BYTE_STRING_LEN {
        return Err(EncodingError::TooLarge {
            len: bytes.len(),
            max: MAX_BYTE_STRING_LEN,
        });
    }
    let mut out = Vec::with_capacity(bytes.len() + 3);
    write_definite_bytes(&mut out, bytes);
    Ok(out)
}

/// Encode `bytes` the way the chain's string-to-bytes primitive does.
///
/// Payloads of at most [`CHUNK_SIZE`] bytes are a plain definite byte
/// string. Longer payloads become an indefinite byte string made of
/// consecutive 64-byte chunks, the last one possibly shorter.
pub fn encode_chunked_byte_string(bytes: &[u8]) -> Vec<u8> {
    let chunks = bytes.len().div_ceil(CHUNK_SIZE);
    let mut out = Vec::with_capacity(bytes.len() + 2 * chunks + 2);
    write_chunked_bytes(&mut out, bytes);
    out
}

/// Encode a signed integer with the minimal-width CBOR rule.
pub fn encode_integer(n: i64) -> Vec<u8> {
    let mut out = Vec::with_capacity(9);
    write_integer(&mut out, n);
    out
}

/// Encode an unsigned integer over the full 64-bit range.
pub fn encode_unsigned(n: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(9);
    write_head(&mut out, MAJOR_UNSIGNED, n);
    out
}

/// Wrap already-encoded items in an indefinite-length array.
///
/// An empty slice encodes as the definite empty array `0x80`, never as
/// `0x9f 0xff`.
pub fn encode_indefinite_array(items: &[Vec<u8>]) -> Vec<u8> {
    if items.is_empty() {
        return vec![MAJOR_ARRAY];
    }
    let body: usize = items.iter().map(Vec::len).sum();
    let mut out = Vec::with_capacity(body + 2);
    out.push(INDEFINITE_ARRAY);
    for item in items {
        out.extend_from_slice(item);
    }
    out.push(BREAK);
    out
}

/// Wrap already-encoded items in a definite-length array (`0x80 + n` for
/// small `n`).
pub fn encode_definite_array(items: &[Vec<u8>]) -> Vec<u8> {
    let body: usize = items.iter().map(Vec::len).sum();
    let mut out = Vec::with_capacity(body + 9);
    write_head(&mut out, MAJOR_ARRAY, items.len() as u64);
    for item in items {
        out.extend_from_slice(item);
    }
    out
}

/// Encode constructor alternative 0 over already-encoded fields.
pub fn encode_constructor(fields: &[Vec<u8>]) -> Vec<u8> {
    let array = encode_indefinite_array(fields);
    let mut out = Vec::with_capacity(CONSTR_0_TAG.len() + array.len());
    out.extend_from_slice(&CONSTR_0_TAG);
    out.extend_from_slice(&array);
    out
}

// ---------------------------------------------------------------------------
// Data tree
// ---------------------------------------------------------------------------

/// An on-chain data value assembled by a hash pipeline.
///
/// Each pipeline describes its input as a `PlutusData` tree and calls
/// [`PlutusData::to_bytes()`]; the framing logic lives only in this module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlutusData {
    /// Constructor alternative 0 with ordered fields.
    Constr(Vec<PlutusData>),
    /// List; indefinite when non-empty, `0x80` when empty.
    List(Vec<PlutusData>),
    /// Fixed-arity definite array, e.g. `0x82` for a pair.
    Tuple(Vec<PlutusData>),
    /// Byte string, chunked when longer than [`CHUNK_SIZE`].
    Bytes(Vec<u8>),
    /// Signed integer.
    Int(i64),
}

impl PlutusData {
    /// Byte string holding the UTF-8 bytes of `s`.
    pub fn text(s: &str) -> Self {
        Self::Bytes(s.as_bytes().to_vec())
    }

    /// Two-element definite array.
    pub fn pair(first: PlutusData, second: PlutusData) -> Self {
        Self::Tuple(vec![first, second])
    }

    /// Serialize the tree.
    pub fn to_bytes(&self) -> PlutusBytes {
        let mut out = Vec::new();
        self.write(&mut out);
        PlutusBytes(out)
    }

    fn write(&self, out: &mut Vec<u8>) {
        match self {
            Self::Constr(fields) => {
                out.extend_from_slice(&CONSTR_0_TAG);
                write_list(out, fields);
            }
            Self::List(items) => write_list(out, items),
            Self::Tuple(items) => {
                write_head(out, MAJOR_ARRAY, items.len() as u64);
                for item in items {
                    item.write(out);
                }
            }
            Self::Bytes(bytes) => write_chunked_bytes(out, bytes),
            Self::Int(n) => write_integer(out, *n),
        }
    }
}

fn write_list(out: &mut Vec<u8>, items: &[PlutusData]) {
    if items.is_empty() {
        out.push(MAJOR_ARRAY);
        return;
    }
    out.push(INDEFINITE_ARRAY);
    for item in items {
        item.write(out);
    }
    out.push(BREAK);
}

/// Bytes produced exclusively by [`PlutusData::to_bytes()`].
///
/// The inner `Vec<u8>` is private, so hashing code that accepts
/// `&PlutusBytes` can only ever see encoder output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlutusBytes(Vec<u8>);

impl PlutusBytes {
    /// Access the encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume and return the inner byte vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Number of encoded bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing was encoded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex rendering, for comparison against chain-observed bytes.
    pub fn to_hex(&self) -> String {
        to_hex(&self.0)
    }
}

impl AsRef<[u8]> for PlutusBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
