//! # Fixwire Core
//!
//! Big-endian, fixed-width integer coders for pipeline element transport.
//!
//! Every value crossing a pipeline-stage boundary has to be serialized in a
//! language- and platform-independent way. This crate provides the integer
//! building block: canonical big-endian codecs for 32- and 64-bit integers,
//! usable against in-memory buffers or arbitrary byte streams, plus the
//! typed coder handles the surrounding framework registers and dispatches.
//!
//! ## Modules
//!
//! - `constants`: Encoded widths
//! - `buffer`: In-memory encode/decode on exact-width slices
//! - `stream`: The same codecs against `std::io` readers and writers
//! - `coder`: Typed coder construction and validation
//! - `registry`: The four built-in singleton coders
//!
//! ## Wire format
//!
//! A fixed-width big-endian integer, nothing else: no header, no length
//! prefix, no tag byte. Signed values are the two's-complement bit pattern
//! of the unsigned encoding at the same width.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod buffer;
pub mod coder;
pub mod constants;
pub mod error;
#[cfg(feature = "std")]
pub mod registry;
#[cfg(feature = "std")]
pub mod stream;

// Re-export commonly used types
pub use coder::{CustomCoder, FixedWidth, WireType};
pub use error::CoderError;

/// Result type alias for fixwire operations
pub type Result<T> = core::result::Result<T, CoderError>;
