//! Universal Label (UL) types.
//!
//! Universal Labels are 16-byte identifiers defined by SMPTE ST 336 for
//! identifying every element in an MXF file. Keys are compared as whole
//! 16-byte words; where the registry defines a don't-care (the registry
//! designator and registry version bytes of structural-set keys), those
//! bytes are masked out of the comparison.

use std::fmt;

/// A 16-byte Universal Label.
pub type UL = [u8; 16];

/// Universal Label wrapper with classification helpers.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniversalLabel(pub UL);

impl UniversalLabel {
    /// Create from raw bytes.
    pub fn new(bytes: UL) -> Self {
        UniversalLabel(bytes)
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &UL {
        &self.0
    }

    /// Check if this is a SMPTE-registered label (starts with 06 0E 2B 34).
    pub fn is_smpte(&self) -> bool {
        self.0[0..4] == labels::SMPTE_PREFIX
    }

    /// Get the category designator (byte 5).
    pub fn category(&self) -> u8 {
        self.0[4]
    }

    /// Get the registry designator (byte 6).
    pub fn registry(&self) -> u8 {
        self.0[5]
    }

    /// Get the registry version (byte 8).
    pub fn version(&self) -> u8 {
        self.0[7]
    }

    /// Check if this is a partition pack key of any kind.
    pub fn is_partition_pack(&self) -> bool {
        // Match first 13 bytes; byte 13 is 0x02 (header), 0x03 (body), or
        // 0x04 (footer). The primer pack shares the prefix with byte 13 =
        // 0x05, so it is excluded here.
        self.0[0..13] == labels::PARTITION_PACK_BASE[0..13]
            && (0x02..=0x04).contains(&self.0[13])
    }

    /// Check if this is a header partition pack key.
    pub fn is_header_partition_pack(&self) -> bool {
        self.is_partition_pack() && self.0[13] == 0x02
    }

    /// Check if this is the primer pack key.
    pub fn is_primer_pack(&self) -> bool {
        eq_masked(&self.0, &labels::PRIMER_PACK, &[7])
    }

    /// Check if this is a KLV fill item key.
    pub fn is_fill_item(&self) -> bool {
        // Fill items occur with registry version 0x01 and 0x02; the version
        // byte is a don't-care.
        eq_masked_prefix(&self.0, &labels::FILL_ITEM, 13, &[7])
    }

    /// Check if this key belongs to the structural metadata class family.
    pub fn is_structural_metadata(&self) -> bool {
        self.is_smpte()
            && self.0[4] == 0x02
            && self.0[8..13] == [0x0D, 0x01, 0x01, 0x01, 0x01]
    }

    /// Compare against a structural-set class key, masking the registry
    /// designator (byte 6) and registry version (byte 8) don't-cares.
    pub fn matches_set_key(&self, key: &UL) -> bool {
        eq_masked(&self.0, key, &[5, 7])
    }
}

fn eq_masked(a: &UL, b: &UL, masked: &[usize]) -> bool {
    eq_masked_prefix(a, b, 16, masked)
}

fn eq_masked_prefix(a: &UL, b: &UL, prefix: usize, masked: &[usize]) -> bool {
    (0..prefix).all(|i| masked.contains(&i) || a[i] == b[i])
}

impl fmt::Debug for UniversalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UL(")?;
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for UniversalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "urn:smpte:ul:")?;
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 && i % 4 == 0 {
                write!(f, ".")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl From<UL> for UniversalLabel {
    fn from(bytes: UL) -> Self {
        UniversalLabel(bytes)
    }
}

impl From<&UL> for UniversalLabel {
    fn from(bytes: &UL) -> Self {
        UniversalLabel(*bytes)
    }
}

/// Well-known Universal Labels.
pub mod labels {
    use super::UL;

    /// SMPTE label prefix.
    pub const SMPTE_PREFIX: [u8; 4] = [0x06, 0x0E, 0x2B, 0x34];

    /// Partition pack base (bytes 13..16 vary with kind and status).
    pub const PARTITION_PACK_BASE: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x02, 0x05, 0x01, 0x01, 0x0D, 0x01, 0x02, 0x01, 0x01, 0x00, 0x00,
        0x00,
    ];

    /// Header partition - open incomplete.
    pub const HEADER_PARTITION_OPEN_INCOMPLETE: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x02, 0x05, 0x01, 0x01, 0x0D, 0x01, 0x02, 0x01, 0x01, 0x02, 0x01,
        0x00,
    ];

    /// Header partition - closed incomplete.
    pub const HEADER_PARTITION_CLOSED_INCOMPLETE: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x02, 0x05, 0x01, 0x01, 0x0D, 0x01, 0x02, 0x01, 0x01, 0x02, 0x02,
        0x00,
    ];

    /// Header partition - open complete.
    pub const HEADER_PARTITION_OPEN_COMPLETE: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x02, 0x05, 0x01, 0x01, 0x0D, 0x01, 0x02, 0x01, 0x01, 0x02, 0x03,
        0x00,
    ];

    /// Header partition - closed complete.
    pub const HEADER_PARTITION_CLOSED_COMPLETE: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x02, 0x05, 0x01, 0x01, 0x0D, 0x01, 0x02, 0x01, 0x01, 0x02, 0x04,
        0x00,
    ];

    /// Primer pack.
    pub const PRIMER_PACK: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x02, 0x05, 0x01, 0x01, 0x0D, 0x01, 0x02, 0x01, 0x01, 0x05, 0x01,
        0x00,
    ];

    /// KLV fill item.
    pub const FILL_ITEM: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x02, 0x03, 0x01, 0x02, 0x10, 0x01, 0x00, 0x00,
        0x00,
    ];

    /// Op1a operational pattern.
    pub const OP1A: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x04, 0x01, 0x01, 0x01, 0x0D, 0x01, 0x02, 0x01, 0x01, 0x01, 0x01,
        0x00,
    ];

    // Structural metadata set keys

    /// Preface (root of the metadata tree).
    pub const PREFACE: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x02, 0x53, 0x01, 0x01, 0x0D, 0x01, 0x01, 0x01, 0x01, 0x01, 0x2F,
        0x00,
    ];

    /// Content storage.
    pub const CONTENT_STORAGE: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x02, 0x53, 0x01, 0x01, 0x0D, 0x01, 0x01, 0x01, 0x01, 0x01, 0x18,
        0x00,
    ];

    /// Essence container data.
    pub const ESSENCE_CONTAINER_DATA: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x02, 0x53, 0x01, 0x01, 0x0D, 0x01, 0x01, 0x01, 0x01, 0x01, 0x23,
        0x00,
    ];

    /// Material package.
    pub const MATERIAL_PACKAGE: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x02, 0x53, 0x01, 0x01, 0x0D, 0x01, 0x01, 0x01, 0x01, 0x01, 0x36,
        0x00,
    ];

    /// Source package.
    pub const SOURCE_PACKAGE: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x02, 0x53, 0x01, 0x01, 0x0D, 0x01, 0x01, 0x01, 0x01, 0x01, 0x37,
        0x00,
    ];

    /// Timeline track.
    pub const TIMELINE_TRACK: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x02, 0x53, 0x01, 0x01, 0x0D, 0x01, 0x01, 0x01, 0x01, 0x01, 0x3B,
        0x00,
    ];

    /// Sequence.
    pub const SEQUENCE: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x02, 0x53, 0x01, 0x01, 0x0D, 0x01, 0x01, 0x01, 0x01, 0x01, 0x0F,
        0x00,
    ];

    /// Source clip.
    pub const SOURCE_CLIP: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x02, 0x53, 0x01, 0x01, 0x0D, 0x01, 0x01, 0x01, 0x01, 0x01, 0x11,
        0x00,
    ];

    /// CDCI picture essence descriptor (component video).
    pub const CDCI_DESCRIPTOR: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x02, 0x53, 0x01, 0x01, 0x0D, 0x01, 0x01, 0x01, 0x01, 0x01, 0x28,
        0x00,
    ];

    /// RGBA picture essence descriptor.
    pub const RGBA_DESCRIPTOR: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x02, 0x53, 0x01, 0x01, 0x0D, 0x01, 0x01, 0x01, 0x01, 0x01, 0x29,
        0x00,
    ];

    /// Wave audio essence descriptor.
    pub const WAVE_AUDIO_DESCRIPTOR: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x02, 0x53, 0x01, 0x01, 0x0D, 0x01, 0x01, 0x01, 0x01, 0x01, 0x48,
        0x00,
    ];

    /// Audio channel label sub-descriptor (ST 377-4 MCA).
    pub const AUDIO_CHANNEL_LABEL_SUB_DESCRIPTOR: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x02, 0x7F, 0x01, 0x01, 0x0D, 0x01, 0x01, 0x01, 0x01, 0x01, 0x6B,
        0x00,
    ];

    /// Sound field group label sub-descriptor (ST 377-4 MCA).
    pub const SOUND_FIELD_GROUP_LABEL_SUB_DESCRIPTOR: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x02, 0x7F, 0x01, 0x01, 0x0D, 0x01, 0x01, 0x01, 0x01, 0x01, 0x6C,
        0x00,
    ];

    /// JPEG 2000 picture sub-descriptor.
    pub const JPEG2000_PICTURE_SUB_DESCRIPTOR: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x02, 0x53, 0x01, 0x01, 0x0D, 0x01, 0x01, 0x01, 0x01, 0x01, 0x5A,
        0x00,
    ];

    /// PHDR metadata track sub-descriptor.
    pub const PHDR_METADATA_TRACK_SUB_DESCRIPTOR: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x02, 0x53, 0x01, 0x01, 0x0D, 0x01, 0x01, 0x01, 0x01, 0x01, 0x74,
        0x00,
    ];
}

/// Universal Labels of the metadata items referenced by structural sets.
///
/// Local tags inside a set resolve to these through the primer pack; field
/// matching is by UL, never by tag value.
pub mod items {
    use super::UL;

    /// Instance UID (static local tag 0x3C0A).
    pub const INSTANCE_UID: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x15, 0x02, 0x00, 0x00, 0x00,
        0x00,
    ];

    /// Generation UID (static local tag 0x0102).
    pub const GENERATION_UID: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x02, 0x05, 0x20, 0x07, 0x01, 0x08, 0x00, 0x00,
        0x00,
    ];

    // Preface

    /// Last modified date (0x3B02).
    pub const LAST_MODIFIED_DATE: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x02, 0x01, 0x01, 0x07, 0x02, 0x01, 0x10, 0x02, 0x04, 0x00,
        0x00,
    ];

    /// Preface version (0x3B05).
    pub const PREFACE_VERSION: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x02, 0x03, 0x01, 0x02, 0x01, 0x05, 0x00, 0x00,
        0x00,
    ];

    /// Operational pattern (0x3B09).
    pub const OPERATIONAL_PATTERN: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x02, 0x01, 0x02, 0x02, 0x03, 0x00, 0x00, 0x00,
        0x00,
    ];

    /// Essence containers batch (0x3B0A).
    pub const ESSENCE_CONTAINERS: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x02, 0x01, 0x02, 0x02, 0x10, 0x02, 0x01, 0x00,
        0x00,
    ];

    /// Content storage strong reference (0x3B03).
    pub const CONTENT_STORAGE_REF: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x02, 0x06, 0x01, 0x01, 0x04, 0x02, 0x01, 0x00,
        0x00,
    ];

    /// Primary package reference (0x3B08).
    pub const PRIMARY_PACKAGE: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x04, 0x06, 0x01, 0x01, 0x04, 0x01, 0x08, 0x00,
        0x00,
    ];

    // Content storage

    /// Packages strong reference batch (0x1901).
    pub const CS_PACKAGES: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x02, 0x06, 0x01, 0x01, 0x04, 0x05, 0x01, 0x00,
        0x00,
    ];

    /// Essence container data strong reference batch (0x1902).
    pub const CS_ESSENCE_CONTAINER_DATA: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x02, 0x06, 0x01, 0x01, 0x04, 0x05, 0x02, 0x00,
        0x00,
    ];

    // Essence container data

    /// Linked package UID (0x2701).
    pub const LINKED_PACKAGE_UID: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x01, 0x06, 0x01, 0x01, 0x06, 0x01, 0x00, 0x00,
        0x00,
    ];

    /// Index stream ID (0x3F06).
    pub const INDEX_SID: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x04, 0x01, 0x03, 0x04, 0x05, 0x00, 0x00, 0x00,
        0x00,
    ];

    /// Body stream ID (0x3F07).
    pub const BODY_SID: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x04, 0x01, 0x03, 0x04, 0x04, 0x00, 0x00, 0x00,
        0x00,
    ];

    // Generic package

    /// Package UID (UMID, 0x4401).
    pub const PACKAGE_UID: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x15, 0x10, 0x00, 0x00, 0x00,
        0x00,
    ];

    /// Package name (0x4402).
    pub const PACKAGE_NAME: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x01, 0x01, 0x03, 0x03, 0x02, 0x01, 0x00, 0x00,
        0x00,
    ];

    /// Tracks strong reference batch (0x4403).
    pub const PACKAGE_TRACKS: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x02, 0x06, 0x01, 0x01, 0x04, 0x06, 0x05, 0x00,
        0x00,
    ];

    /// Package modified date (0x4404).
    pub const PACKAGE_MODIFIED_DATE: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x02, 0x07, 0x02, 0x01, 0x10, 0x02, 0x05, 0x00,
        0x00,
    ];

    /// Package creation date (0x4405).
    pub const PACKAGE_CREATION_DATE: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x02, 0x07, 0x02, 0x01, 0x10, 0x01, 0x03, 0x00,
        0x00,
    ];

    /// Source package descriptor strong reference (0x4701).
    pub const PACKAGE_DESCRIPTOR: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x02, 0x06, 0x01, 0x01, 0x04, 0x02, 0x03, 0x00,
        0x00,
    ];

    // Generic track

    /// Track ID (0x4801).
    pub const TRACK_ID: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x02, 0x01, 0x07, 0x01, 0x01, 0x00, 0x00, 0x00,
        0x00,
    ];

    /// Track name (0x4802).
    pub const TRACK_NAME: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x02, 0x01, 0x07, 0x01, 0x02, 0x01, 0x00, 0x00,
        0x00,
    ];

    /// Track sequence strong reference (0x4803).
    pub const TRACK_SEQUENCE: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x02, 0x06, 0x01, 0x01, 0x04, 0x02, 0x04, 0x00,
        0x00,
    ];

    /// Track number (0x4804).
    pub const TRACK_NUMBER: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x02, 0x01, 0x04, 0x01, 0x03, 0x00, 0x00, 0x00,
        0x00,
    ];

    /// Edit rate (0x4B01).
    pub const EDIT_RATE: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x02, 0x05, 0x30, 0x04, 0x05, 0x00, 0x00, 0x00,
        0x00,
    ];

    /// Origin (0x4B02).
    pub const ORIGIN: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x02, 0x07, 0x02, 0x01, 0x03, 0x01, 0x03, 0x00,
        0x00,
    ];

    // Structural component

    /// Data definition (0x0201).
    pub const DATA_DEFINITION: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x02, 0x04, 0x07, 0x01, 0x00, 0x00, 0x00, 0x00,
        0x00,
    ];

    /// Duration (0x0202).
    pub const DURATION: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x02, 0x07, 0x02, 0x02, 0x01, 0x01, 0x03, 0x00,
        0x00,
    ];

    /// Sequence structural components batch (0x1001).
    pub const STRUCTURAL_COMPONENTS: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x02, 0x06, 0x01, 0x01, 0x04, 0x06, 0x09, 0x00,
        0x00,
    ];

    /// Source clip source package ID (0x1101).
    pub const SOURCE_PACKAGE_ID: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x02, 0x06, 0x01, 0x01, 0x03, 0x01, 0x00, 0x00,
        0x00,
    ];

    /// Source clip source track ID (0x1102).
    pub const SOURCE_TRACK_ID: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x02, 0x06, 0x01, 0x01, 0x03, 0x02, 0x00, 0x00,
        0x00,
    ];

    /// Source clip start position (0x1201).
    pub const START_POSITION: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x02, 0x07, 0x02, 0x01, 0x03, 0x01, 0x04, 0x00,
        0x00,
    ];

    // File descriptor

    /// Linked track ID (0x3006).
    pub const LINKED_TRACK_ID: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x05, 0x06, 0x01, 0x01, 0x03, 0x05, 0x00, 0x00,
        0x00,
    ];

    /// Sample rate (0x3001).
    pub const SAMPLE_RATE: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x01, 0x04, 0x06, 0x01, 0x01, 0x00, 0x00, 0x00,
        0x00,
    ];

    /// Container duration (0x3002).
    pub const CONTAINER_DURATION: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x01, 0x04, 0x06, 0x01, 0x02, 0x00, 0x00, 0x00,
        0x00,
    ];

    /// Essence container label (0x3004).
    pub const ESSENCE_CONTAINER: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x02, 0x06, 0x01, 0x01, 0x04, 0x01, 0x02, 0x00,
        0x00,
    ];

    /// Sub-descriptors strong reference batch (dynamic tag).
    pub const SUB_DESCRIPTORS: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x09, 0x06, 0x01, 0x01, 0x04, 0x06, 0x10, 0x00,
        0x00,
    ];

    // Generic picture essence descriptor

    /// Frame layout (0x320C).
    pub const FRAME_LAYOUT: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x01, 0x04, 0x01, 0x03, 0x01, 0x04, 0x00, 0x00,
        0x00,
    ];

    /// Stored width (0x3203).
    pub const STORED_WIDTH: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x01, 0x04, 0x01, 0x05, 0x02, 0x02, 0x00, 0x00,
        0x00,
    ];

    /// Stored height (0x3202).
    pub const STORED_HEIGHT: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x01, 0x04, 0x01, 0x05, 0x02, 0x01, 0x00, 0x00,
        0x00,
    ];

    /// Display width (0x3209).
    pub const DISPLAY_WIDTH: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x01, 0x04, 0x01, 0x05, 0x01, 0x0C, 0x00, 0x00,
        0x00,
    ];

    /// Display height (0x3208).
    pub const DISPLAY_HEIGHT: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x01, 0x04, 0x01, 0x05, 0x01, 0x0B, 0x00, 0x00,
        0x00,
    ];

    /// Aspect ratio (0x320E).
    pub const ASPECT_RATIO: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x01, 0x04, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00,
        0x00,
    ];

    /// Video line map (0x320D).
    pub const VIDEO_LINE_MAP: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x02, 0x04, 0x01, 0x03, 0x02, 0x05, 0x00, 0x00,
        0x00,
    ];

    /// Picture essence coding (0x3201).
    pub const PICTURE_ESSENCE_CODING: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x02, 0x04, 0x01, 0x06, 0x01, 0x00, 0x00, 0x00,
        0x00,
    ];

    /// Component depth (0x3301).
    pub const COMPONENT_DEPTH: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x02, 0x04, 0x01, 0x05, 0x03, 0x0A, 0x00, 0x00,
        0x00,
    ];

    /// Horizontal subsampling (0x3302).
    pub const HORIZONTAL_SUBSAMPLING: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x01, 0x04, 0x01, 0x05, 0x01, 0x05, 0x00, 0x00,
        0x00,
    ];

    /// Vertical subsampling (0x3308).
    pub const VERTICAL_SUBSAMPLING: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x02, 0x04, 0x01, 0x05, 0x01, 0x10, 0x00, 0x00,
        0x00,
    ];

    /// Black reference level (0x3304).
    pub const BLACK_REF_LEVEL: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x01, 0x04, 0x01, 0x05, 0x03, 0x03, 0x00, 0x00,
        0x00,
    ];

    /// White reference level (0x3305).
    pub const WHITE_REF_LEVEL: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x01, 0x04, 0x01, 0x05, 0x03, 0x04, 0x00, 0x00,
        0x00,
    ];

    /// Color range (0x3306).
    pub const COLOR_RANGE: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x02, 0x04, 0x01, 0x05, 0x03, 0x05, 0x00, 0x00,
        0x00,
    ];

    /// RGBA pixel layout (0x3401).
    pub const PIXEL_LAYOUT: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x02, 0x04, 0x01, 0x05, 0x03, 0x06, 0x00, 0x00,
        0x00,
    ];

    /// RGBA component maximum reference (0x3406).
    pub const COMPONENT_MAX_REF: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x05, 0x04, 0x01, 0x05, 0x03, 0x0B, 0x00, 0x00,
        0x00,
    ];

    /// RGBA component minimum reference (0x3407).
    pub const COMPONENT_MIN_REF: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x05, 0x04, 0x01, 0x05, 0x03, 0x0C, 0x00, 0x00,
        0x00,
    ];

    // Generic sound essence descriptor

    /// Audio sampling rate (0x3D03).
    pub const AUDIO_SAMPLING_RATE: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x05, 0x04, 0x02, 0x03, 0x01, 0x01, 0x01, 0x00,
        0x00,
    ];

    /// Locked to edit rate (0x3D02).
    pub const LOCKED: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x04, 0x04, 0x02, 0x03, 0x01, 0x04, 0x00, 0x00,
        0x00,
    ];

    /// Audio reference level (0x3D04).
    pub const AUDIO_REF_LEVEL: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x01, 0x04, 0x02, 0x01, 0x01, 0x03, 0x00, 0x00,
        0x00,
    ];

    /// Dial norm (0x3D0C).
    pub const DIAL_NORM: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x05, 0x04, 0x02, 0x07, 0x01, 0x00, 0x00, 0x00,
        0x00,
    ];

    /// Channel count (0x3D07).
    pub const CHANNEL_COUNT: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x05, 0x04, 0x02, 0x01, 0x01, 0x04, 0x00, 0x00,
        0x00,
    ];

    /// Quantization bits (0x3D01).
    pub const QUANTIZATION_BITS: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x04, 0x04, 0x02, 0x03, 0x03, 0x04, 0x00, 0x00,
        0x00,
    ];

    /// Sound essence compression (0x3D06).
    pub const SOUND_COMPRESSION: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x02, 0x04, 0x02, 0x04, 0x02, 0x00, 0x00, 0x00,
        0x00,
    ];

    // Wave audio essence descriptor

    /// Block align (0x3D0A).
    pub const BLOCK_ALIGN: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x05, 0x04, 0x02, 0x03, 0x02, 0x01, 0x00, 0x00,
        0x00,
    ];

    /// Average bytes per second (0x3D09).
    pub const AVG_BPS: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x05, 0x04, 0x02, 0x03, 0x03, 0x05, 0x00, 0x00,
        0x00,
    ];

    /// Sequence offset (0x3D0B).
    pub const SEQUENCE_OFFSET: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x04, 0x04, 0x02, 0x03, 0x02, 0x02, 0x00, 0x00,
        0x00,
    ];

    /// Channel assignment label (0x3D32).
    pub const CHANNEL_ASSIGNMENT: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x07, 0x04, 0x02, 0x01, 0x01, 0x05, 0x00, 0x00,
        0x00,
    ];

    // Multichannel audio label sub-descriptors (dynamic tags)

    /// MCA label dictionary ID.
    pub const MCA_LABEL_DICTIONARY_ID: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x0E, 0x01, 0x03, 0x07, 0x01, 0x01, 0x00, 0x00,
        0x00,
    ];

    /// MCA link ID.
    pub const MCA_LINK_ID: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x0E, 0x01, 0x03, 0x07, 0x01, 0x05, 0x00, 0x00,
        0x00,
    ];

    /// MCA tag symbol.
    pub const MCA_TAG_SYMBOL: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x0E, 0x01, 0x03, 0x07, 0x01, 0x02, 0x00, 0x00,
        0x00,
    ];

    /// MCA tag name.
    pub const MCA_TAG_NAME: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x0E, 0x01, 0x03, 0x07, 0x01, 0x03, 0x00, 0x00,
        0x00,
    ];

    /// MCA channel ID.
    pub const MCA_CHANNEL_ID: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x0E, 0x01, 0x03, 0x07, 0x04, 0x01, 0x00, 0x00,
        0x00,
    ];

    /// RFC 5646 spoken language.
    pub const RFC5646_SPOKEN_LANGUAGE: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x0D, 0x03, 0x01, 0x01, 0x02, 0x03, 0x15, 0x00,
        0x00,
    ];

    /// Sound field group link ID.
    pub const SOUNDFIELD_GROUP_LINK_ID: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x0E, 0x01, 0x03, 0x07, 0x01, 0x06, 0x00, 0x00,
        0x00,
    ];

    // JPEG 2000 picture sub-descriptor (dynamic tags)

    /// J2K Rsiz capability.
    pub const J2K_RSIZ: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x0A, 0x04, 0x01, 0x06, 0x03, 0x01, 0x00, 0x00,
        0x00,
    ];

    /// J2K Xsiz.
    pub const J2K_XSIZ: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x0A, 0x04, 0x01, 0x06, 0x03, 0x02, 0x00, 0x00,
        0x00,
    ];

    /// J2K Ysiz.
    pub const J2K_YSIZ: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x0A, 0x04, 0x01, 0x06, 0x03, 0x03, 0x00, 0x00,
        0x00,
    ];

    /// J2K XOsiz.
    pub const J2K_XOSIZ: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x0A, 0x04, 0x01, 0x06, 0x03, 0x04, 0x00, 0x00,
        0x00,
    ];

    /// J2K YOsiz.
    pub const J2K_YOSIZ: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x0A, 0x04, 0x01, 0x06, 0x03, 0x05, 0x00, 0x00,
        0x00,
    ];

    /// J2K XTsiz.
    pub const J2K_XTSIZ: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x0A, 0x04, 0x01, 0x06, 0x03, 0x06, 0x00, 0x00,
        0x00,
    ];

    /// J2K YTsiz.
    pub const J2K_YTSIZ: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x0A, 0x04, 0x01, 0x06, 0x03, 0x07, 0x00, 0x00,
        0x00,
    ];

    /// J2K XTOsiz.
    pub const J2K_XTOSIZ: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x0A, 0x04, 0x01, 0x06, 0x03, 0x08, 0x00, 0x00,
        0x00,
    ];

    /// J2K YTOsiz.
    pub const J2K_YTOSIZ: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x0A, 0x04, 0x01, 0x06, 0x03, 0x09, 0x00, 0x00,
        0x00,
    ];

    /// J2K Csiz component count.
    pub const J2K_CSIZ: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x0A, 0x04, 0x01, 0x06, 0x03, 0x0A, 0x00, 0x00,
        0x00,
    ];

    /// J2K picture component sizing.
    pub const J2K_PICTURE_COMPONENT_SIZING: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x0A, 0x04, 0x01, 0x06, 0x03, 0x0E, 0x00, 0x00,
        0x00,
    ];

    /// J2K coding style default.
    pub const J2K_CODING_STYLE_DEFAULT: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x0A, 0x04, 0x01, 0x06, 0x03, 0x0F, 0x00, 0x00,
        0x00,
    ];

    /// J2K quantization default.
    pub const J2K_QUANTIZATION_DEFAULT: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x0A, 0x04, 0x01, 0x06, 0x03, 0x10, 0x00, 0x00,
        0x00,
    ];

    // PHDR metadata track sub-descriptor (dynamic tags)

    /// PHDR data definition.
    pub const PHDR_DATA_DEFINITION: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x0C, 0x04, 0x07, 0x01, 0x0A, 0x00, 0x00, 0x00,
        0x00,
    ];

    /// PHDR source track ID.
    pub const PHDR_SOURCE_TRACK_ID: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x0C, 0x06, 0x01, 0x01, 0x03, 0x06, 0x00, 0x00,
        0x00,
    ];

    /// PHDR simple payload stream ID.
    pub const PHDR_SIMPLE_PAYLOAD_SID: UL = [
        0x06, 0x0E, 0x2B, 0x34, 0x01, 0x01, 0x01, 0x0C, 0x01, 0x03, 0x04, 0x08, 0x00, 0x00, 0x00,
        0x00,
    ];
}
