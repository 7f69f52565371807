//! Encoded widths for the fixwire integer formats

/// Encoded size of a 32-bit value in bytes
pub const WIDTH_32: usize = 4;

/// Encoded size of a 64-bit value in bytes
pub const WIDTH_64: usize = 8;
