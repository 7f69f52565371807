//! Stream encode/decode against `std::io` readers and writers
//!
//! Same wire format as the buffer primitives, but sourced from or sunk to a
//! caller-owned byte stream with explicit error propagation. Encoding
//! serializes into a stack buffer and issues one `write_all`. Decoding must
//! collect exactly the encoded width before interpreting anything, and a
//! single read on a stream may return fewer bytes than requested (sockets
//! and pipes deliver data in arbitrary chunk sizes), so the decoder loops,
//! tracking bytes-remaining, until the buffer is full or the stream fails.
//!
//! Any read or write error propagates unchanged and partial data is
//! discarded; nothing is retried except `ErrorKind::Interrupted`, per the
//! standard library's own `read_exact` convention. A zero-length read
//! before the width is satisfied means end-of-stream and surfaces as
//! [`CoderError::UnexpectedEof`], so a stalled stream cannot spin the loop.
//!
//! Calls block for as long as the underlying stream blocks. One stream, one
//! call: a stream instance must not be shared by two concurrent calls.

use crate::buffer;
use crate::constants::{WIDTH_32, WIDTH_64};
use crate::error::CoderError;
use crate::Result;
use std::io::{ErrorKind, Read, Write};
use tracing::trace;

/// Read exactly `buf.len()` bytes, looping over partial reads
fn read_full<R: Read>(r: &mut R, buf: &mut [u8]) -> Result<()> {
    let expected = buf.len();
    let mut filled = 0;
    while filled < expected {
        match r.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(CoderError::UnexpectedEof {
                    expected,
                    actual: filled,
                })
            }
            Ok(n) => {
                filled += n;
                if filled < expected {
                    trace!("partial read: {} of {} bytes accumulated", filled, expected);
                }
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// Encode a u32 as 4 big-endian bytes onto `w`
pub fn encode_uint32<W: Write>(value: u32, w: &mut W) -> Result<()> {
    w.write_all(&buffer::encode_uint32(value))?;
    Ok(())
}

/// Decode a u32 from exactly 4 big-endian bytes read off `r`
pub fn decode_uint32<R: Read>(r: &mut R) -> Result<u32> {
    let mut buf = [0u8; WIDTH_32];
    read_full(r, &mut buf)?;
    Ok(buffer::decode_uint32(&buf))
}

/// Encode an i32 as 4 big-endian two's-complement bytes onto `w`
pub fn encode_int32<W: Write>(value: i32, w: &mut W) -> Result<()> {
    encode_uint32(value as u32, w)
}

/// Decode an i32 from exactly 4 big-endian bytes read off `r`
pub fn decode_int32<R: Read>(r: &mut R) -> Result<i32> {
    let ret = decode_uint32(r)?;
    Ok(ret as i32)
}

/// Encode a u64 as 8 big-endian bytes onto `w`
pub fn encode_uint64<W: Write>(value: u64, w: &mut W) -> Result<()> {
    w.write_all(&buffer::encode_uint64(value))?;
    Ok(())
}

/// Decode a u64 from exactly 8 big-endian bytes read off `r`
pub fn decode_uint64<R: Read>(r: &mut R) -> Result<u64> {
    let mut buf = [0u8; WIDTH_64];
    read_full(r, &mut buf)?;
    Ok(buffer::decode_uint64(&buf))
}

/// Encode an i64 as 8 big-endian two's-complement bytes onto `w`
pub fn encode_int64<W: Write>(value: i64, w: &mut W) -> Result<()> {
    encode_uint64(value as u64, w)
}

/// Decode an i64 from exactly 8 big-endian bytes read off `r`
pub fn decode_int64<R: Read>(r: &mut R) -> Result<i64> {
    let ret = decode_uint64(r)?;
    Ok(ret as i64)
}
