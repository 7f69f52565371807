//! The built-in singleton coders
//!
//! Four process-wide coders, one per wire type, bound to the buffer
//! primitives. They are constructed lazily on first use and are read-only
//! afterwards, so unsynchronized concurrent use is fine. Their hard-coded
//! signatures can only mismatch through a build-time inconsistency, so a
//! construction failure here is fatal rather than recoverable.

use crate::buffer;
use crate::coder::{CustomCoder, WireType};
use bytes::Bytes;
use once_cell::sync::Lazy;

fn enc_uint32(v: u32) -> Bytes {
    Bytes::copy_from_slice(&buffer::encode_uint32(v))
}

fn dec_uint32(data: &[u8]) -> u32 {
    buffer::decode_uint32(data)
}

fn enc_int32(v: i32) -> Bytes {
    Bytes::copy_from_slice(&buffer::encode_int32(v))
}

fn dec_int32(data: &[u8]) -> i32 {
    buffer::decode_int32(data)
}

fn enc_uint64(v: u64) -> Bytes {
    Bytes::copy_from_slice(&buffer::encode_uint64(v))
}

fn dec_uint64(data: &[u8]) -> u64 {
    buffer::decode_uint64(data)
}

fn enc_int64(v: i64) -> Bytes {
    Bytes::copy_from_slice(&buffer::encode_int64(v))
}

fn dec_int64(data: &[u8]) -> i64 {
    buffer::decode_int64(data)
}

/// Built-in coder for 32-bit unsigned integers
pub static UINT32: Lazy<CustomCoder<u32>> = Lazy::new(|| {
    CustomCoder::new("uint32", WireType::Uint32, enc_uint32, dec_uint32)
        .expect("built-in uint32 coder signature is fixed at build time")
});

/// Built-in coder for 32-bit signed integers
pub static INT32: Lazy<CustomCoder<i32>> = Lazy::new(|| {
    CustomCoder::new("int32", WireType::Int32, enc_int32, dec_int32)
        .expect("built-in int32 coder signature is fixed at build time")
});

/// Built-in coder for 64-bit unsigned integers
pub static UINT64: Lazy<CustomCoder<u64>> = Lazy::new(|| {
    CustomCoder::new("uint64", WireType::Uint64, enc_uint64, dec_uint64)
        .expect("built-in uint64 coder signature is fixed at build time")
});

/// Built-in coder for 64-bit signed integers
pub static INT64: Lazy<CustomCoder<i64>> = Lazy::new(|| {
    CustomCoder::new("int64", WireType::Int64, enc_int64, dec_int64)
        .expect("built-in int64 coder signature is fixed at build time")
});
