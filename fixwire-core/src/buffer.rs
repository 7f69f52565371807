//! In-memory encode/decode on exact-width slices
//!
//! These are the whole-buffer forms of the fixwire codecs: one fixed-width
//! integer to or from a slice of exactly its encoded width, big-endian.
//! Decoding is a pure reinterpretation with no length handling of its own;
//! callers guarantee the slice holds at least the encoded width, normally by
//! only ever decoding buffers produced by the matching encode function.
//!
//! Signed forms reuse the unsigned bit pattern via a two's-complement cast.
//! That keeps raw byte comparison order-preserving for unsigned values, but
//! NOT for negative signed values (a negative value encodes with its high
//! bit set and so sorts above every non-negative one). This is a known
//! property of the format, not a bug.

use crate::constants::{WIDTH_32, WIDTH_64};

/// Encode a u32 as 4 big-endian bytes
pub fn encode_uint32(v: u32) -> [u8; WIDTH_32] {
    v.to_be_bytes()
}

/// Decode a u32 from the first 4 bytes of `data`
///
/// # Panics
///
/// Panics if `data` is shorter than 4 bytes. Short input is a precondition
/// violation at this layer, not a handled error.
pub fn decode_uint32(data: &[u8]) -> u32 {
    let mut buf = [0u8; WIDTH_32];
    buf.copy_from_slice(&data[..WIDTH_32]);
    u32::from_be_bytes(buf)
}

/// Encode an i32 as 4 big-endian bytes, two's-complement
pub fn encode_int32(v: i32) -> [u8; WIDTH_32] {
    encode_uint32(v as u32)
}

/// Decode an i32 from the first 4 bytes of `data`
///
/// # Panics
///
/// Panics if `data` is shorter than 4 bytes.
pub fn decode_int32(data: &[u8]) -> i32 {
    decode_uint32(data) as i32
}

/// Encode a u64 as 8 big-endian bytes
pub fn encode_uint64(v: u64) -> [u8; WIDTH_64] {
    v.to_be_bytes()
}

/// Decode a u64 from the first 8 bytes of `data`
///
/// # Panics
///
/// Panics if `data` is shorter than 8 bytes.
pub fn decode_uint64(data: &[u8]) -> u64 {
    let mut buf = [0u8; WIDTH_64];
    buf.copy_from_slice(&data[..WIDTH_64]);
    u64::from_be_bytes(buf)
}

/// Encode an i64 as 8 big-endian bytes, two's-complement
pub fn encode_int64(v: i64) -> [u8; WIDTH_64] {
    encode_uint64(v as u64)
}

/// Decode an i64 from the first 8 bytes of `data`
///
/// # Panics
///
/// Panics if `data` is shorter than 8 bytes.
pub fn decode_int64(data: &[u8]) -> i64 {
    decode_uint64(data) as i64
}
