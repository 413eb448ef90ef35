//! Primer pack decoding.
//!
//! The primer pack maps the 2-byte local tags used inside structural sets to
//! full Universal Labels. The mapping is valid for a single partition only.

use crate::error::{MxfError, Result};
use crate::ul::UniversalLabel;
use byteorder::{BigEndian, ReadBytesExt};
use std::io::{Cursor, Read};

/// Size of one primer batch entry: 2-byte tag plus 16-byte UL.
const ENTRY_SIZE: u32 = 18;

/// Immutable local-tag to Universal Label mapping.
///
/// A flat vector of pairs; primer tables are small enough that linear
/// lookup beats hashing.
#[derive(Debug, Clone, Default)]
pub struct PrimerPack {
    entries: Vec<(u16, UniversalLabel)>,
}

impl PrimerPack {
    /// Decode a primer pack from the value bytes of its KLV.
    pub fn decode(value: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(value);
        let count = cursor
            .read_u32::<BigEndian>()
            .map_err(|_| MxfError::MalformedPrimer("truncated batch header".into()))?;
        let item_size = cursor
            .read_u32::<BigEndian>()
            .map_err(|_| MxfError::MalformedPrimer("truncated batch header".into()))?;
        if item_size != ENTRY_SIZE {
            return Err(MxfError::MalformedPrimer(format!(
                "batch item size is {item_size}, expected {ENTRY_SIZE}"
            )));
        }
        if count as u64 * ENTRY_SIZE as u64 > value.len() as u64 - cursor.position() {
            return Err(MxfError::MalformedPrimer(format!(
                "batch of {count} entries overruns the {} byte value",
                value.len()
            )));
        }

        let mut entries: Vec<(u16, UniversalLabel)> = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let tag = cursor
                .read_u16::<BigEndian>()
                .map_err(|_| MxfError::MalformedPrimer("truncated entry".into()))?;
            let mut ul = [0u8; 16];
            cursor
                .read_exact(&mut ul)
                .map_err(|_| MxfError::MalformedPrimer("truncated entry".into()))?;
            if entries.iter().any(|(t, _)| *t == tag) {
                return Err(MxfError::MalformedPrimer(format!(
                    "local tag 0x{tag:04X} appears more than once"
                )));
            }
            entries.push((tag, UniversalLabel(ul)));
        }

        Ok(PrimerPack { entries })
    }

    /// Resolve a local tag to its Universal Label.
    pub fn lookup(&self, tag: u16) -> Option<&UniversalLabel> {
        self.entries
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, ul)| ul)
    }

    /// Number of mappings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the primer declares no tags.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All mappings in declaration order.
    pub fn entries(&self) -> &[(u16, UniversalLabel)] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ul::items;
    use byteorder::WriteBytesExt;

    fn primer_value(entries: &[(u16, [u8; 16])]) -> Vec<u8> {
        let mut value = Vec::new();
        value.write_u32::<BigEndian>(entries.len() as u32).unwrap();
        value.write_u32::<BigEndian>(18).unwrap();
        for (tag, ul) in entries {
            value.write_u16::<BigEndian>(*tag).unwrap();
            value.extend_from_slice(ul);
        }
        value
    }

    #[test]
    fn test_decode_and_lookup() {
        let value = primer_value(&[
            (0x3C0A, items::INSTANCE_UID),
            (0x0102, items::GENERATION_UID),
        ]);
        let primer = PrimerPack::decode(&value).unwrap();

        assert_eq!(primer.len(), 2);
        assert_eq!(
            primer.lookup(0x3C0A).unwrap().as_bytes(),
            &items::INSTANCE_UID
        );
        assert!(primer.lookup(0x9999).is_none());
    }

    #[test]
    fn test_duplicate_tag_rejected() {
        let value = primer_value(&[
            (0x3C0A, items::INSTANCE_UID),
            (0x3C0A, items::GENERATION_UID),
        ]);
        assert!(matches!(
            PrimerPack::decode(&value),
            Err(MxfError::MalformedPrimer(_))
        ));
    }

    #[test]
    fn test_bad_item_size_rejected() {
        let mut value = Vec::new();
        value.write_u32::<BigEndian>(1).unwrap();
        value.write_u32::<BigEndian>(17).unwrap();
        value.extend_from_slice(&[0u8; 17]);
        assert!(matches!(
            PrimerPack::decode(&value),
            Err(MxfError::MalformedPrimer(_))
        ));
    }

    #[test]
    fn test_overrunning_count_rejected() {
        let mut value = Vec::new();
        value.write_u32::<BigEndian>(100).unwrap();
        value.write_u32::<BigEndian>(18).unwrap();
        value.extend_from_slice(&[0u8; 18]);
        assert!(PrimerPack::decode(&value).is_err());
    }
}
