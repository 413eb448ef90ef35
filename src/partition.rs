//! Partition pack decoding.
//!
//! The partition pack is the fixed-schema record that opens every MXF
//! partition. Only the header partition is in scope here; the IMF essence
//! component profile pins it to byte offset 0.

use crate::error::{MxfError, Result};
use crate::klv::KlvHeader;
use crate::source::ByteSource;
use crate::ul::{UniversalLabel, UL};
use byteorder::{BigEndian, ReadBytesExt};
use std::io::{Cursor, Read};

/// Partition kind, taken from byte 13 of the pack key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionKind {
    /// Header partition.
    Header,
    /// Body partition.
    Body,
    /// Footer partition.
    Footer,
}

/// Partition status (open/closed), taken from byte 14 of the pack key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionStatus {
    Open,
    Closed,
}

/// Partition completeness, taken from byte 14 of the pack key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionCompleteness {
    Incomplete,
    Complete,
}

/// Decoded partition pack.
#[derive(Debug, Clone)]
pub struct PartitionPack {
    /// Partition kind.
    pub kind: PartitionKind,
    /// Status (open/closed).
    pub status: PartitionStatus,
    /// Completeness.
    pub completeness: PartitionCompleteness,
    /// Major version (should be 1).
    pub major_version: u16,
    /// Minor version.
    pub minor_version: u16,
    /// KAG size (key alignment grid).
    pub kag_size: u32,
    /// Offset of this partition in the file.
    pub this_partition: u64,
    /// Offset of the previous partition.
    pub previous_partition: u64,
    /// Offset of the footer partition.
    pub footer_partition: u64,
    /// Byte count of the header metadata that follows the pack.
    pub header_byte_count: u64,
    /// Byte count of the index segments.
    pub index_byte_count: u64,
    /// Stream ID of the index.
    pub index_sid: u32,
    /// Body offset.
    pub body_offset: u64,
    /// Stream ID of the essence.
    pub body_sid: u32,
    /// Operational pattern label.
    pub operational_pattern: UL,
    /// Essence container labels.
    pub essence_containers: Vec<UniversalLabel>,
    /// Total KLV size of the pack (key + length + value).
    klv_packet_size: u64,
}

/// Minimum value size of a partition pack (all fixed fields plus an empty
/// essence container batch).
const MIN_PACK_VALUE_SIZE: u64 = 88;

impl PartitionPack {
    /// Read a partition pack KLV at the source's current offset.
    pub fn read<S: ByteSource + ?Sized>(source: &mut S) -> Result<Self> {
        let header = KlvHeader::read(source)?;
        if !header.key.is_partition_pack() {
            return Err(MxfError::InvalidPartitionPack(format!(
                "KLV at offset {} with key {} is not a partition pack",
                header.offset, header.key
            )));
        }
        if header.v_size < MIN_PACK_VALUE_SIZE {
            return Err(MxfError::InvalidPartitionPack(format!(
                "partition pack value of {} bytes is shorter than the {} byte minimum",
                header.v_size, MIN_PACK_VALUE_SIZE
            )));
        }

        let key = header.key.as_bytes();
        let kind = match key[13] {
            0x02 => PartitionKind::Header,
            0x03 => PartitionKind::Body,
            0x04 => PartitionKind::Footer,
            other => {
                return Err(MxfError::InvalidPartitionPack(format!(
                    "unknown partition kind byte {:02x}",
                    other
                )))
            }
        };
        let status = match key[14] {
            0x01 | 0x03 => PartitionStatus::Open,
            _ => PartitionStatus::Closed,
        };
        let completeness = match key[14] {
            0x01 | 0x02 => PartitionCompleteness::Incomplete,
            _ => PartitionCompleteness::Complete,
        };

        let value = source.read_bytes(header.v_size as usize)?;
        let mut cursor = Cursor::new(value.as_slice());

        let major_version = cursor.read_u16::<BigEndian>()?;
        let minor_version = cursor.read_u16::<BigEndian>()?;
        let kag_size = cursor.read_u32::<BigEndian>()?;
        let this_partition = cursor.read_u64::<BigEndian>()?;
        let previous_partition = cursor.read_u64::<BigEndian>()?;
        let footer_partition = cursor.read_u64::<BigEndian>()?;
        let header_byte_count = cursor.read_u64::<BigEndian>()?;
        let index_byte_count = cursor.read_u64::<BigEndian>()?;
        let index_sid = cursor.read_u32::<BigEndian>()?;
        let body_offset = cursor.read_u64::<BigEndian>()?;
        let body_sid = cursor.read_u32::<BigEndian>()?;

        let mut operational_pattern = [0u8; 16];
        cursor.read_exact(&mut operational_pattern)?;

        let batch_count = cursor.read_u32::<BigEndian>()?;
        let batch_item_size = cursor.read_u32::<BigEndian>()?;
        let remaining = value.len() as u64 - cursor.position();
        if batch_item_size as u64 * batch_count as u64 > remaining {
            return Err(MxfError::InvalidPartitionPack(format!(
                "essence container batch of {batch_count} x {batch_item_size} bytes overruns the pack"
            )));
        }
        let mut essence_containers = Vec::with_capacity(batch_count as usize);
        for _ in 0..batch_count {
            if batch_item_size == 16 {
                let mut ul = [0u8; 16];
                cursor.read_exact(&mut ul)?;
                essence_containers.push(UniversalLabel(ul));
            } else {
                cursor.set_position(cursor.position() + batch_item_size as u64);
            }
        }

        Ok(PartitionPack {
            kind,
            status,
            completeness,
            major_version,
            minor_version,
            kag_size,
            this_partition,
            previous_partition,
            footer_partition,
            header_byte_count,
            index_byte_count,
            index_sid,
            body_offset,
            body_sid,
            operational_pattern,
            essence_containers,
            klv_packet_size: header.packet_size(),
        })
    }

    /// Whether this pack opens a header partition positioned at the start of
    /// the file.
    pub fn is_valid_header_partition(&self) -> bool {
        self.kind == PartitionKind::Header && self.this_partition == 0
    }

    /// Total KLV size of the pack (key + length + value).
    pub fn klv_packet_size(&self) -> u64 {
        self.klv_packet_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::klv::encode_ber_length;
    use crate::source::SliceSource;
    use crate::ul::labels;
    use byteorder::WriteBytesExt;

    fn write_pack(key: UL, this_partition: u64, containers: &[UL]) -> Vec<u8> {
        let mut value = Vec::new();
        value.write_u16::<BigEndian>(1).unwrap(); // major
        value.write_u16::<BigEndian>(3).unwrap(); // minor
        value.write_u32::<BigEndian>(1).unwrap(); // kag
        value.write_u64::<BigEndian>(this_partition).unwrap();
        value.write_u64::<BigEndian>(0).unwrap(); // previous
        value.write_u64::<BigEndian>(0).unwrap(); // footer
        value.write_u64::<BigEndian>(0).unwrap(); // header byte count
        value.write_u64::<BigEndian>(0).unwrap(); // index byte count
        value.write_u32::<BigEndian>(0).unwrap(); // index sid
        value.write_u64::<BigEndian>(0).unwrap(); // body offset
        value.write_u32::<BigEndian>(0).unwrap(); // body sid
        value.extend_from_slice(&labels::OP1A);
        value
            .write_u32::<BigEndian>(containers.len() as u32)
            .unwrap();
        value.write_u32::<BigEndian>(16).unwrap();
        for c in containers {
            value.extend_from_slice(c);
        }

        let mut data = Vec::new();
        data.extend_from_slice(&key);
        data.extend_from_slice(&encode_ber_length(value.len() as u64));
        data.extend_from_slice(&value);
        data
    }

    #[test]
    fn test_read_header_partition_pack() {
        let data = write_pack(
            labels::HEADER_PARTITION_CLOSED_COMPLETE,
            0,
            &[labels::OP1A],
        );
        let mut source = SliceSource::new(&data);
        let pack = PartitionPack::read(&mut source).unwrap();

        assert_eq!(pack.kind, PartitionKind::Header);
        assert_eq!(pack.status, PartitionStatus::Closed);
        assert_eq!(pack.completeness, PartitionCompleteness::Complete);
        assert_eq!(pack.major_version, 1);
        assert_eq!(pack.essence_containers.len(), 1);
        assert!(pack.is_valid_header_partition());
        assert_eq!(pack.klv_packet_size(), data.len() as u64);
    }

    #[test]
    fn test_body_partition_is_not_valid_header() {
        let mut key = labels::HEADER_PARTITION_CLOSED_COMPLETE;
        key[13] = 0x03; // body
        let data = write_pack(key, 0, &[]);
        let mut source = SliceSource::new(&data);
        let pack = PartitionPack::read(&mut source).unwrap();
        assert_eq!(pack.kind, PartitionKind::Body);
        assert!(!pack.is_valid_header_partition());
    }

    #[test]
    fn test_not_a_partition_pack() {
        let mut data = Vec::new();
        data.extend_from_slice(&labels::PRIMER_PACK);
        data.push(0);
        let mut source = SliceSource::new(&data);
        assert!(matches!(
            PartitionPack::read(&mut source),
            Err(MxfError::InvalidPartitionPack(_))
        ));
    }

    #[test]
    fn test_truncated_pack_value() {
        let mut data = Vec::new();
        data.extend_from_slice(&labels::HEADER_PARTITION_CLOSED_COMPLETE);
        data.push(4);
        data.extend_from_slice(&[0u8; 4]);
        let mut source = SliceSource::new(&data);
        assert!(PartitionPack::read(&mut source).is_err());
    }
}
