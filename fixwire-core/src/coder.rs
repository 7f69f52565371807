//! Typed coder construction and validation
//!
//! A coder binds a name and a wire-type descriptor to a matching pair of
//! encode/decode functions. The function pair is typed, so arity mismatches
//! and disagreement between the two functions are compile errors; what is
//! validated at construction is the part the type system cannot see, that
//! the declared [`WireType`] descriptor matches the value type the
//! functions actually operate on. Construction either yields an immutable,
//! ready-to-use handle or a descriptive error and no coder at all.

use crate::error::CoderError;
use alloc::string::String;
use bytes::Bytes;
use core::fmt;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Wire-type descriptor for the fixed-width integer formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WireType {
    /// 32-bit unsigned integer, 4 bytes big-endian
    Uint32,
    /// 32-bit signed integer, 4 bytes big-endian two's-complement
    Int32,
    /// 64-bit unsigned integer, 8 bytes big-endian
    Uint64,
    /// 64-bit signed integer, 8 bytes big-endian two's-complement
    Int64,
}

impl WireType {
    /// Returns the encoded width in bytes
    pub const fn width(&self) -> usize {
        match self {
            WireType::Uint32 | WireType::Int32 => crate::constants::WIDTH_32,
            WireType::Uint64 | WireType::Int64 => crate::constants::WIDTH_64,
        }
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WireType::Uint32 => "uint32",
            WireType::Int32 => "int32",
            WireType::Uint64 => "uint64",
            WireType::Int64 => "int64",
        };
        f.write_str(name)
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for u32 {}
    impl Sealed for i32 {}
    impl Sealed for u64 {}
    impl Sealed for i64 {}
}

/// Value types that have a fixwire encoding
///
/// Sealed: exactly the four fixed-width integer types carry an encoding,
/// and each maps to one [`WireType`].
pub trait FixedWidth: sealed::Sealed + Copy {
    /// The descriptor for this value type
    const WIRE_TYPE: WireType;
    /// Encoded width in bytes
    const WIDTH: usize;
}

impl FixedWidth for u32 {
    const WIRE_TYPE: WireType = WireType::Uint32;
    const WIDTH: usize = crate::constants::WIDTH_32;
}

impl FixedWidth for i32 {
    const WIRE_TYPE: WireType = WireType::Int32;
    const WIDTH: usize = crate::constants::WIDTH_32;
}

impl FixedWidth for u64 {
    const WIRE_TYPE: WireType = WireType::Uint64;
    const WIDTH: usize = crate::constants::WIDTH_64;
}

impl FixedWidth for i64 {
    const WIRE_TYPE: WireType = WireType::Int64;
    const WIDTH: usize = crate::constants::WIDTH_64;
}

/// A named, typed encode/decode pair bound to one value type
///
/// Immutable after construction and safe for unsynchronized concurrent use;
/// invoking [`encode`](CustomCoder::encode) or
/// [`decode`](CustomCoder::decode) needs no further type assertions.
#[derive(Debug, Clone)]
pub struct CustomCoder<T: FixedWidth> {
    name: String,
    wire_type: WireType,
    enc: fn(T) -> Bytes,
    dec: fn(&[u8]) -> T,
}

impl<T: FixedWidth> CustomCoder<T> {
    /// Construct a coder from a name, a declared wire type, and the
    /// encode/decode pair
    ///
    /// Fails with [`CoderError::EmptyCoderName`] on an empty name and with
    /// [`CoderError::TypeMismatch`] when the declared descriptor is not the
    /// one `T` encodes as. On failure no coder is produced.
    pub fn new(
        name: impl Into<String>,
        wire_type: WireType,
        enc: fn(T) -> Bytes,
        dec: fn(&[u8]) -> T,
    ) -> Result<Self, CoderError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CoderError::EmptyCoderName);
        }
        if wire_type != T::WIRE_TYPE {
            return Err(CoderError::TypeMismatch {
                coder: name,
                declared: wire_type,
                actual: T::WIRE_TYPE,
            });
        }

        debug!("Registered coder '{}' for wire type {}", name, wire_type);

        Ok(Self {
            name,
            wire_type,
            enc,
            dec,
        })
    }

    /// The coder's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The wire type this coder encodes
    pub fn wire_type(&self) -> WireType {
        self.wire_type
    }

    /// Encode one value into its fixed-width byte sequence
    pub fn encode(&self, v: T) -> Bytes {
        (self.enc)(v)
    }

    /// Decode one value from a byte sequence
    ///
    /// The input must hold at least [`WireType::width`] bytes; see the
    /// buffer primitives for the precondition contract.
    pub fn decode(&self, data: &[u8]) -> T {
        (self.dec)(data)
    }
}

impl<T: FixedWidth> PartialEq for CustomCoder<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.wire_type == other.wire_type
    }
}

impl<T: FixedWidth> fmt::Display for CustomCoder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.name, self.wire_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer;

    fn enc_u32(v: u32) -> Bytes {
        Bytes::copy_from_slice(&buffer::encode_uint32(v))
    }

    fn dec_u32(data: &[u8]) -> u32 {
        buffer::decode_uint32(data)
    }

    #[test]
    fn test_construct_and_invoke() {
        let coder = CustomCoder::new("uint32", WireType::Uint32, enc_u32, dec_u32).unwrap();

        assert_eq!(coder.name(), "uint32");
        assert_eq!(coder.wire_type(), WireType::Uint32);
        assert_eq!(coder.encode(7).as_ref(), &[0, 0, 0, 7]);
        assert_eq!(coder.decode(&[0, 0, 0, 7]), 7);
    }

    #[test]
    fn test_declared_type_mismatch_is_rejected() {
        let err = CustomCoder::<u32>::new("bad", WireType::Int64, enc_u32, dec_u32).unwrap_err();

        match err {
            CoderError::TypeMismatch {
                coder,
                declared,
                actual,
            } => {
                assert_eq!(coder, "bad");
                assert_eq!(declared, WireType::Int64);
                assert_eq!(actual, WireType::Uint32);
            }
            other => panic!("expected TypeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let err = CustomCoder::<u32>::new("", WireType::Uint32, enc_u32, dec_u32).unwrap_err();
        assert!(matches!(err, CoderError::EmptyCoderName));
    }

    #[test]
    fn test_mismatch_error_names_both_types() {
        let err = CustomCoder::<u32>::new("bad", WireType::Int64, enc_u32, dec_u32).unwrap_err();
        let msg = format!("{}", err);
        assert!(msg.contains("bad"));
        assert!(msg.contains("int64"));
        assert!(msg.contains("uint32"));
    }

    #[test]
    fn test_wire_type_widths() {
        assert_eq!(WireType::Uint32.width(), 4);
        assert_eq!(WireType::Int32.width(), 4);
        assert_eq!(WireType::Uint64.width(), 8);
        assert_eq!(WireType::Int64.width(), 8);
    }
}
