//! Property-based tests using proptest

use fixwire_core::{buffer, stream};
use proptest::prelude::*;
use std::io::{self, Cursor, Read};

/// Reader that splits its data into chunks of at most `chunk` bytes
struct ChunkedReader {
    data: Vec<u8>,
    pos: usize,
    chunk: usize,
}

impl Read for ChunkedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos >= self.data.len() {
            return Ok(0);
        }
        let n = self.chunk.min(buf.len()).min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

proptest! {
    #[test]
    fn prop_buffer_round_trip_uint32(v in any::<u32>()) {
        prop_assert_eq!(buffer::decode_uint32(&buffer::encode_uint32(v)), v);
    }

    #[test]
    fn prop_buffer_round_trip_int32(v in any::<i32>()) {
        prop_assert_eq!(buffer::decode_int32(&buffer::encode_int32(v)), v);
    }

    #[test]
    fn prop_buffer_round_trip_uint64(v in any::<u64>()) {
        prop_assert_eq!(buffer::decode_uint64(&buffer::encode_uint64(v)), v);
    }

    #[test]
    fn prop_buffer_round_trip_int64(v in any::<i64>()) {
        prop_assert_eq!(buffer::decode_int64(&buffer::encode_int64(v)), v);
    }

    #[test]
    fn prop_signed_unsigned_share_bit_pattern(v in any::<i32>()) {
        prop_assert_eq!(buffer::encode_int32(v), buffer::encode_uint32(v as u32));
    }

    #[test]
    fn prop_encode_is_deterministic(v in any::<u64>()) {
        prop_assert_eq!(buffer::encode_uint64(v), buffer::encode_uint64(v));
    }

    #[test]
    fn prop_stream_round_trip_any_chunking(v in any::<u64>(), chunk in 1usize..=9) {
        let mut wire = Vec::new();
        stream::encode_uint64(v, &mut wire).unwrap();
        prop_assert_eq!(wire.len(), 8);

        let mut r = ChunkedReader { data: wire, pos: 0, chunk };
        prop_assert_eq!(stream::decode_uint64(&mut r).unwrap(), v);
    }

    #[test]
    fn prop_stream_round_trip_int32_any_chunking(v in any::<i32>(), chunk in 1usize..=5) {
        let mut wire = Vec::new();
        stream::encode_int32(v, &mut wire).unwrap();

        let mut r = ChunkedReader { data: wire, pos: 0, chunk };
        prop_assert_eq!(stream::decode_int32(&mut r).unwrap(), v);
    }

    #[test]
    fn prop_stream_decode_never_panics(data in prop::collection::vec(any::<u8>(), 0..16)) {
        // Short or garbage streams must produce a value or an error, never a panic
        let _ = stream::decode_uint32(&mut Cursor::new(&data));
        let _ = stream::decode_uint64(&mut Cursor::new(&data));
    }

    #[test]
    fn prop_short_stream_always_errors(data in prop::collection::vec(any::<u8>(), 0..8)) {
        let res = stream::decode_uint64(&mut Cursor::new(&data));
        prop_assert!(res.is_err());
    }
}
