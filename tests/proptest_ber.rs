//! Property-based tests for the BER length codec.
//!
//! Decoding any canonically encoded length and re-encoding it must produce
//! the same bytes: 1-byte short form below 128, minimal long form otherwise.

use mxf_header::{ber_length_size, decode_ber_length, encode_ber_length};
use proptest::prelude::*;

proptest! {
    /// Encode/decode round-trips for arbitrary u64 lengths.
    #[test]
    fn roundtrip_any_length(value in any::<u64>()) {
        let encoded = encode_ber_length(value);
        prop_assert_eq!(encoded.len(), ber_length_size(value));

        let (decoded, consumed) = decode_ber_length(&encoded).unwrap();
        prop_assert_eq!(decoded, value);
        prop_assert_eq!(consumed, encoded.len());
    }

    /// Lengths below 128 use the 1-byte short form.
    #[test]
    fn short_form_below_128(value in 0u64..128) {
        prop_assert_eq!(encode_ber_length(value), vec![value as u8]);
    }

    /// Long-form encodings carry no leading zero length bytes.
    #[test]
    fn long_form_is_minimal(value in 128u64..) {
        let encoded = encode_ber_length(value);
        let count = (encoded[0] & 0x7F) as usize;
        prop_assert_eq!(encoded.len(), 1 + count);
        prop_assert_ne!(encoded[1], 0);
    }
}

#[test]
fn canonical_form_table() {
    for (length, expected) in [
        (0u64, vec![0x00u8]),
        (1, vec![0x01]),
        (127, vec![0x7F]),
        (128, vec![0x81, 0x80]),
        (u16::MAX as u64, vec![0x82, 0xFF, 0xFF]),
        (1 << 32, vec![0x85, 0x01, 0x00, 0x00, 0x00, 0x00]),
        (
            (1 << 56) - 1,
            vec![0x87, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
        ),
    ] {
        let encoded = encode_ber_length(length);
        assert_eq!(encoded, expected, "length {length}");
        let (decoded, consumed) = decode_ber_length(&encoded).unwrap();
        assert_eq!(decoded, length);
        assert_eq!(consumed, expected.len());
    }
}
