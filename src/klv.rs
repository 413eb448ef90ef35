//! KLV (Key-Length-Value) framing.
//!
//! All data in an MXF file is encoded as KLV triplets:
//! - Key: 16-byte Universal Label identifying the data
//! - Length: BER-encoded length of the value
//! - Value: the actual data

use crate::error::{MxfError, Result};
use crate::source::ByteSource;
use crate::ul::UniversalLabel;

/// Decoded key and length of one KLV triplet.
///
/// The value bytes are not read; the caller decides whether to consume or
/// skip them based on the key.
#[derive(Debug, Clone)]
pub struct KlvHeader {
    /// Universal Label (key).
    pub key: UniversalLabel,
    /// Absolute offset of the key in the byte source.
    pub offset: u64,
    /// Size of the BER length field in bytes (1..=9).
    pub l_size: usize,
    /// Length of the value in bytes.
    pub v_size: u64,
}

impl KlvHeader {
    /// Read the key and BER length at the source's current offset.
    pub fn read<S: ByteSource + ?Sized>(source: &mut S) -> Result<Self> {
        let offset = source.offset();
        let key_bytes = source.read_bytes(16)?;
        let key: [u8; 16] = key_bytes
            .as_slice()
            .try_into()
            .map_err(|_| MxfError::malformed_klv(offset, "could not read 16-byte key"))?;
        let (v_size, l_size) = read_ber_length(source, offset)?;
        Ok(KlvHeader {
            key: UniversalLabel(key),
            offset,
            l_size,
            v_size,
        })
    }

    /// Combined size of the key and the length field.
    pub fn kl_size(&self) -> u64 {
        16 + self.l_size as u64
    }

    /// Total size of the triplet including the value.
    pub fn packet_size(&self) -> u64 {
        self.kl_size() + self.v_size
    }
}

fn read_ber_length<S: ByteSource + ?Sized>(source: &mut S, klv_offset: u64) -> Result<(u64, usize)> {
    let first = source.read_bytes(1)?[0];
    if first < 0x80 {
        // Short form: length is in the byte itself
        return Ok((first as u64, 1));
    }
    if first == 0x80 {
        return Err(MxfError::malformed_klv(
            klv_offset,
            "indefinite BER length is not permitted",
        ));
    }
    let num_bytes = (first & 0x7F) as usize;
    if num_bytes > 8 {
        return Err(MxfError::malformed_klv(
            klv_offset,
            format!("BER length with {num_bytes} length bytes exceeds u64"),
        ));
    }
    let bytes = source.read_bytes(num_bytes)?;
    let mut length: u64 = 0;
    for byte in bytes {
        length = (length << 8) | byte as u64;
    }
    Ok((length, 1 + num_bytes))
}

/// Decode a BER length from a byte slice.
///
/// Returns the length and the number of bytes consumed.
pub fn decode_ber_length(data: &[u8]) -> Result<(u64, usize)> {
    let first = *data
        .first()
        .ok_or_else(|| MxfError::malformed_klv(0, "no data for BER length"))?;
    if first < 0x80 {
        return Ok((first as u64, 1));
    }
    if first == 0x80 {
        return Err(MxfError::malformed_klv(0, "indefinite BER length is not permitted"));
    }
    let num_bytes = (first & 0x7F) as usize;
    if num_bytes > 8 {
        return Err(MxfError::malformed_klv(
            0,
            format!("BER length with {num_bytes} length bytes exceeds u64"),
        ));
    }
    if data.len() < 1 + num_bytes {
        return Err(MxfError::malformed_klv(0, "truncated BER length"));
    }
    let mut length: u64 = 0;
    for byte in &data[1..1 + num_bytes] {
        length = (length << 8) | *byte as u64;
    }
    Ok((length, 1 + num_bytes))
}

/// Encode a length in canonical minimal BER form.
///
/// Short form below 128, otherwise long form with the fewest big-endian
/// length bytes.
pub fn encode_ber_length(length: u64) -> Vec<u8> {
    if length < 0x80 {
        return vec![length as u8];
    }
    let be = length.to_be_bytes();
    let skip = be.iter().take_while(|&&b| b == 0).count();
    let mut out = Vec::with_capacity(1 + 8 - skip);
    out.push(0x80 | (8 - skip) as u8);
    out.extend_from_slice(&be[skip..]);
    out
}

/// Size in bytes of the canonical BER encoding of `length`.
pub fn ber_length_size(length: u64) -> usize {
    if length < 0x80 {
        1
    } else {
        1 + (8 - length.leading_zeros() as usize / 8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SliceSource;

    #[test]
    fn test_ber_length_short() {
        let encoded = encode_ber_length(100);
        assert_eq!(encoded, vec![100]);

        let (decoded, size) = decode_ber_length(&encoded).unwrap();
        assert_eq!(decoded, 100);
        assert_eq!(size, 1);
    }

    #[test]
    fn test_ber_length_long() {
        let encoded = encode_ber_length(1000);
        assert_eq!(encoded, vec![0x82, 0x03, 0xE8]);

        let (decoded, size) = decode_ber_length(&encoded).unwrap();
        assert_eq!(decoded, 1000);
        assert_eq!(size, 3);
    }

    #[test]
    fn test_ber_length_canonical_forms() {
        for (length, expected_size) in [
            (0u64, 1usize),
            (1, 1),
            (127, 1),
            (128, 2),
            (u16::MAX as u64, 3),
            (1 << 32, 6),
            ((1 << 56) - 1, 8),
        ] {
            let encoded = encode_ber_length(length);
            assert_eq!(encoded.len(), expected_size, "length {length}");
            assert_eq!(ber_length_size(length), expected_size);
            let (decoded, consumed) = decode_ber_length(&encoded).unwrap();
            assert_eq!(decoded, length);
            assert_eq!(consumed, expected_size);
        }
    }

    #[test]
    fn test_ber_indefinite_rejected() {
        assert!(decode_ber_length(&[0x80]).is_err());
    }

    #[test]
    fn test_ber_too_many_length_bytes() {
        // 9 length bytes would overflow u64
        let data = [0x89, 1, 1, 1, 1, 1, 1, 1, 1, 1];
        assert!(decode_ber_length(&data).is_err());
    }

    #[test]
    fn test_read_header() {
        let key = [0x06u8, 0x0E, 0x2B, 0x34, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        let mut data = Vec::new();
        data.extend_from_slice(&key);
        data.push(0x81);
        data.push(200);
        data.extend_from_slice(&[0u8; 200]);

        let mut source = SliceSource::new(&data);
        let header = KlvHeader::read(&mut source).unwrap();

        assert_eq!(header.key.as_bytes(), &key);
        assert_eq!(header.offset, 0);
        assert_eq!(header.l_size, 2);
        assert_eq!(header.v_size, 200);
        assert_eq!(header.kl_size(), 18);
        assert_eq!(header.packet_size(), 218);
    }

    #[test]
    fn test_read_header_truncated_key() {
        let data = [0x06u8, 0x0E, 0x2B];
        let mut source = SliceSource::new(&data);
        assert!(KlvHeader::read(&mut source).is_err());
    }
}
