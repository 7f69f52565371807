//! Fuzzing placeholder for fixwire-core decoders
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_stream_decode

pub fn fuzz_stream_decode(data: &[u8]) {
    use fixwire_core::stream;
    use std::io::Cursor;

    // Try to decode at every width - should never panic, only Ok or Err
    let _ = stream::decode_uint32(&mut Cursor::new(data));
    let _ = stream::decode_int32(&mut Cursor::new(data));
    let _ = stream::decode_uint64(&mut Cursor::new(data));
    let _ = stream::decode_int64(&mut Cursor::new(data));
}

pub fn fuzz_buffer_decode(data: &[u8]) {
    use fixwire_core::buffer;

    // Buffer decode requires exact-width input by contract; respect the
    // precondition and check it never panics on valid lengths
    if data.len() >= 4 {
        let _ = buffer::decode_uint32(data);
        let _ = buffer::decode_int32(data);
    }
    if data.len() >= 8 {
        let _ = buffer::decode_uint64(data);
        let _ = buffer::decode_int64(data);
    }
}
