//! Structural metadata set decoding.
//!
//! Every structural-metadata KLV is dispatched on its key to a concrete
//! "byte object" (BO) decoder. A BO is the raw decoded form of one set:
//! typed fields resolved through the primer's local-tag table, plus the
//! strong references that later drive graph resolution.

mod descriptors;
mod structural;

pub use descriptors::{
    AudioChannelLabelSubDescriptorBO, CdciPictureEssenceDescriptorBO, FileDescriptorFields,
    Jpeg2000PictureSubDescriptorBO, McaLabelFields, PhdrMetaDataTrackSubDescriptorBO,
    PictureEssenceFields, RgbaPictureEssenceDescriptorBO, SoundEssenceFields,
    SoundFieldGroupLabelSubDescriptorBO, WaveAudioEssenceDescriptorBO,
};
pub use structural::{
    ContentStorageBO, EssenceContainerDataBO, GenericPackageFields, MaterialPackageBO, PrefaceBO,
    SequenceBO, SourceClipBO, SourcePackageBO, StructuralComponentFields, TimelineTrackBO,
};

use crate::diagnostics::{ErrorKind, ErrorLog};
use crate::error::{MxfError, Result};
use crate::primer::PrimerPack;
use crate::types::{MxfTimestamp, MxfUid, Rational, RefBatch, UlBatch};
use crate::ul::{items, labels, UniversalLabel, UL};
use byteorder::{BigEndian, ReadBytesExt};
use std::io::{Cursor, Read};
use tracing::warn;

/// Concrete structural set classes registered with the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetKind {
    Preface,
    ContentStorage,
    EssenceContainerData,
    MaterialPackage,
    SourcePackage,
    TimelineTrack,
    Sequence,
    SourceClip,
    CdciPictureEssenceDescriptor,
    RgbaPictureEssenceDescriptor,
    WaveAudioEssenceDescriptor,
    AudioChannelLabelSubDescriptor,
    SoundFieldGroupLabelSubDescriptor,
    Jpeg2000PictureSubDescriptor,
    PhdrMetaDataTrackSubDescriptor,
}

/// Static table mapping registered set keys to their classes.
static SET_REGISTRY: &[(UL, SetKind)] = &[
    (labels::PREFACE, SetKind::Preface),
    (labels::CONTENT_STORAGE, SetKind::ContentStorage),
    (labels::ESSENCE_CONTAINER_DATA, SetKind::EssenceContainerData),
    (labels::MATERIAL_PACKAGE, SetKind::MaterialPackage),
    (labels::SOURCE_PACKAGE, SetKind::SourcePackage),
    (labels::TIMELINE_TRACK, SetKind::TimelineTrack),
    (labels::SEQUENCE, SetKind::Sequence),
    (labels::SOURCE_CLIP, SetKind::SourceClip),
    (labels::CDCI_DESCRIPTOR, SetKind::CdciPictureEssenceDescriptor),
    (labels::RGBA_DESCRIPTOR, SetKind::RgbaPictureEssenceDescriptor),
    (
        labels::WAVE_AUDIO_DESCRIPTOR,
        SetKind::WaveAudioEssenceDescriptor,
    ),
    (
        labels::AUDIO_CHANNEL_LABEL_SUB_DESCRIPTOR,
        SetKind::AudioChannelLabelSubDescriptor,
    ),
    (
        labels::SOUND_FIELD_GROUP_LABEL_SUB_DESCRIPTOR,
        SetKind::SoundFieldGroupLabelSubDescriptor,
    ),
    (
        labels::JPEG2000_PICTURE_SUB_DESCRIPTOR,
        SetKind::Jpeg2000PictureSubDescriptor,
    ),
    (
        labels::PHDR_METADATA_TRACK_SUB_DESCRIPTOR,
        SetKind::PhdrMetaDataTrackSubDescriptor,
    ),
];

impl SetKind {
    /// Simple class name of the set.
    pub fn name(&self) -> &'static str {
        match self {
            SetKind::Preface => "Preface",
            SetKind::ContentStorage => "ContentStorage",
            SetKind::EssenceContainerData => "EssenceContainerData",
            SetKind::MaterialPackage => "MaterialPackage",
            SetKind::SourcePackage => "SourcePackage",
            SetKind::TimelineTrack => "TimelineTrack",
            SetKind::Sequence => "Sequence",
            SetKind::SourceClip => "SourceClip",
            SetKind::CdciPictureEssenceDescriptor => "CDCIPictureEssenceDescriptor",
            SetKind::RgbaPictureEssenceDescriptor => "RGBAPictureEssenceDescriptor",
            SetKind::WaveAudioEssenceDescriptor => "WaveAudioEssenceDescriptor",
            SetKind::AudioChannelLabelSubDescriptor => "AudioChannelLabelSubDescriptor",
            SetKind::SoundFieldGroupLabelSubDescriptor => "SoundFieldGroupLabelSubDescriptor",
            SetKind::Jpeg2000PictureSubDescriptor => "JPEG2000PictureSubDescriptor",
            SetKind::PhdrMetaDataTrackSubDescriptor => "PHDRMetaDataTrackSubDescriptor",
        }
    }

    /// Look up the class for a structural set key, masking the
    /// registry-designator and registry-version don't-care bytes.
    pub fn from_key(key: &UniversalLabel) -> Option<SetKind> {
        SET_REGISTRY
            .iter()
            .find(|(ul, _)| key.matches_set_key(ul))
            .map(|(_, kind)| *kind)
    }
}

/// Fields shared by every structural set.
#[derive(Debug, Clone)]
pub struct SetCore {
    /// Instance UID of the set, unique within the partition.
    pub instance_uid: MxfUid,
    /// Optional generation UID.
    pub generation_uid: Option<MxfUid>,
    /// Declared fields the class does not parse, keyed by UL.
    pub unknown: Vec<(UniversalLabel, Vec<u8>)>,
}

/// Accumulates the shared fields while a set decoder walks its items.
pub(crate) struct SetCoreBuilder {
    kind: SetKind,
    instance_uid: Option<MxfUid>,
    generation_uid: Option<MxfUid>,
    unknown: Vec<(UniversalLabel, Vec<u8>)>,
}

impl SetCoreBuilder {
    pub(crate) fn new(kind: SetKind) -> Self {
        SetCoreBuilder {
            kind,
            instance_uid: None,
            generation_uid: None,
            unknown: Vec::new(),
        }
    }

    /// Consume the item if it is one of the shared fields.
    pub(crate) fn try_common(&mut self, ul: &UniversalLabel, bytes: &[u8]) -> Result<bool> {
        match *ul.as_bytes() {
            items::INSTANCE_UID => {
                self.instance_uid = Some(decode_strong_ref(bytes)?);
                Ok(true)
            }
            items::GENERATION_UID => {
                self.generation_uid = Some(decode_uid(bytes)?);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Retain an unparsed field.
    pub(crate) fn unknown(&mut self, ul: UniversalLabel, bytes: Vec<u8>) {
        self.unknown.push((ul, bytes));
    }

    /// Finish the core; a missing instance UID is fatal for any set.
    pub(crate) fn finish(self) -> Result<SetCore> {
        let instance_uid = self.instance_uid.ok_or_else(|| {
            MxfError::field_decode(format!("{} set has no InstanceUID", self.kind.name()))
        })?;
        Ok(SetCore {
            instance_uid,
            generation_uid: self.generation_uid,
            unknown: self.unknown,
        })
    }
}

/// The value of a structural set, split into `(UL, bytes)` items.
///
/// Local tags are resolved through the primer here; tags the primer does
/// not declare are skipped with a warning.
pub(crate) struct LocalSet {
    pub(crate) items: Vec<(UniversalLabel, Vec<u8>)>,
}

impl LocalSet {
    pub(crate) fn parse(
        set_name: &'static str,
        value: &[u8],
        primer: &PrimerPack,
        log: &mut ErrorLog,
    ) -> Result<Self> {
        let mut items = Vec::new();
        let mut pos = 0usize;
        while pos < value.len() {
            if pos + 4 > value.len() {
                return Err(MxfError::field_decode(format!(
                    "{set_name} set has a truncated local tag at byte {pos}"
                )));
            }
            let tag = u16::from_be_bytes([value[pos], value[pos + 1]]);
            let len = u16::from_be_bytes([value[pos + 2], value[pos + 3]]) as usize;
            pos += 4;
            if pos + len > value.len() {
                return Err(MxfError::field_decode(format!(
                    "{set_name} set value for tag 0x{tag:04X} overruns the set by {} bytes",
                    pos + len - value.len()
                )));
            }
            let bytes = value[pos..pos + len].to_vec();
            pos += len;

            match primer.lookup(tag) {
                Some(ul) => items.push((*ul, bytes)),
                None => {
                    warn!("local tag 0x{tag:04X} in {set_name} not in primer, field skipped");
                    log.warn(
                        ErrorKind::UnknownLocalTag,
                        format!("local tag 0x{tag:04X} in {set_name} set is not in the primer"),
                    );
                }
            }
        }
        Ok(LocalSet { items })
    }
}

/// Raw decoded form of one structural set.
#[derive(Debug, Clone)]
pub enum InterchangeObjectBO {
    Preface(PrefaceBO),
    ContentStorage(ContentStorageBO),
    EssenceContainerData(EssenceContainerDataBO),
    MaterialPackage(MaterialPackageBO),
    SourcePackage(SourcePackageBO),
    TimelineTrack(TimelineTrackBO),
    Sequence(SequenceBO),
    SourceClip(SourceClipBO),
    CdciPictureEssenceDescriptor(CdciPictureEssenceDescriptorBO),
    RgbaPictureEssenceDescriptor(RgbaPictureEssenceDescriptorBO),
    WaveAudioEssenceDescriptor(WaveAudioEssenceDescriptorBO),
    AudioChannelLabelSubDescriptor(AudioChannelLabelSubDescriptorBO),
    SoundFieldGroupLabelSubDescriptor(SoundFieldGroupLabelSubDescriptorBO),
    Jpeg2000PictureSubDescriptor(Jpeg2000PictureSubDescriptorBO),
    PhdrMetaDataTrackSubDescriptor(PhdrMetaDataTrackSubDescriptorBO),
}

impl InterchangeObjectBO {
    /// Concrete class of the set.
    pub fn kind(&self) -> SetKind {
        match self {
            InterchangeObjectBO::Preface(_) => SetKind::Preface,
            InterchangeObjectBO::ContentStorage(_) => SetKind::ContentStorage,
            InterchangeObjectBO::EssenceContainerData(_) => SetKind::EssenceContainerData,
            InterchangeObjectBO::MaterialPackage(_) => SetKind::MaterialPackage,
            InterchangeObjectBO::SourcePackage(_) => SetKind::SourcePackage,
            InterchangeObjectBO::TimelineTrack(_) => SetKind::TimelineTrack,
            InterchangeObjectBO::Sequence(_) => SetKind::Sequence,
            InterchangeObjectBO::SourceClip(_) => SetKind::SourceClip,
            InterchangeObjectBO::CdciPictureEssenceDescriptor(_) => {
                SetKind::CdciPictureEssenceDescriptor
            }
            InterchangeObjectBO::RgbaPictureEssenceDescriptor(_) => {
                SetKind::RgbaPictureEssenceDescriptor
            }
            InterchangeObjectBO::WaveAudioEssenceDescriptor(_) => {
                SetKind::WaveAudioEssenceDescriptor
            }
            InterchangeObjectBO::AudioChannelLabelSubDescriptor(_) => {
                SetKind::AudioChannelLabelSubDescriptor
            }
            InterchangeObjectBO::SoundFieldGroupLabelSubDescriptor(_) => {
                SetKind::SoundFieldGroupLabelSubDescriptor
            }
            InterchangeObjectBO::Jpeg2000PictureSubDescriptor(_) => {
                SetKind::Jpeg2000PictureSubDescriptor
            }
            InterchangeObjectBO::PhdrMetaDataTrackSubDescriptor(_) => {
                SetKind::PhdrMetaDataTrackSubDescriptor
            }
        }
    }

    /// Shared fields of the set.
    pub fn core(&self) -> &SetCore {
        match self {
            InterchangeObjectBO::Preface(bo) => &bo.core,
            InterchangeObjectBO::ContentStorage(bo) => &bo.core,
            InterchangeObjectBO::EssenceContainerData(bo) => &bo.core,
            InterchangeObjectBO::MaterialPackage(bo) => &bo.core,
            InterchangeObjectBO::SourcePackage(bo) => &bo.core,
            InterchangeObjectBO::TimelineTrack(bo) => &bo.core,
            InterchangeObjectBO::Sequence(bo) => &bo.core,
            InterchangeObjectBO::SourceClip(bo) => &bo.core,
            InterchangeObjectBO::CdciPictureEssenceDescriptor(bo) => &bo.core,
            InterchangeObjectBO::RgbaPictureEssenceDescriptor(bo) => &bo.core,
            InterchangeObjectBO::WaveAudioEssenceDescriptor(bo) => &bo.core,
            InterchangeObjectBO::AudioChannelLabelSubDescriptor(bo) => &bo.core,
            InterchangeObjectBO::SoundFieldGroupLabelSubDescriptor(bo) => &bo.core,
            InterchangeObjectBO::Jpeg2000PictureSubDescriptor(bo) => &bo.core,
            InterchangeObjectBO::PhdrMetaDataTrackSubDescriptor(bo) => &bo.core,
        }
    }

    /// Instance UID of the set.
    pub fn instance_uid(&self) -> &MxfUid {
        &self.core().instance_uid
    }

    /// Package UID when the set is a material or source package.
    pub fn package_uid(&self) -> Option<&MxfUid> {
        match self {
            InterchangeObjectBO::MaterialPackage(bo) => Some(&bo.package.package_uid),
            InterchangeObjectBO::SourcePackage(bo) => Some(&bo.package.package_uid),
            _ => None,
        }
    }

    /// Outgoing strong-reference edges of the set, in declaration order.
    pub fn dependent_uids(&self) -> Vec<MxfUid> {
        match self {
            InterchangeObjectBO::Preface(bo) => bo.dependent_uids(),
            InterchangeObjectBO::ContentStorage(bo) => bo.dependent_uids(),
            InterchangeObjectBO::EssenceContainerData(bo) => bo.dependent_uids(),
            InterchangeObjectBO::MaterialPackage(bo) => bo.dependent_uids(),
            InterchangeObjectBO::SourcePackage(bo) => bo.dependent_uids(),
            InterchangeObjectBO::TimelineTrack(bo) => bo.dependent_uids(),
            InterchangeObjectBO::Sequence(bo) => bo.dependent_uids(),
            InterchangeObjectBO::SourceClip(bo) => bo.dependent_uids(),
            InterchangeObjectBO::CdciPictureEssenceDescriptor(bo) => bo.dependent_uids(),
            InterchangeObjectBO::RgbaPictureEssenceDescriptor(bo) => bo.dependent_uids(),
            InterchangeObjectBO::WaveAudioEssenceDescriptor(bo) => bo.dependent_uids(),
            InterchangeObjectBO::AudioChannelLabelSubDescriptor(_)
            | InterchangeObjectBO::SoundFieldGroupLabelSubDescriptor(_)
            | InterchangeObjectBO::Jpeg2000PictureSubDescriptor(_)
            | InterchangeObjectBO::PhdrMetaDataTrackSubDescriptor(_) => Vec::new(),
        }
    }

    /// The sub-descriptor reference batch when the set is an essence
    /// descriptor.
    pub fn sub_descriptor_refs(&self) -> Option<&RefBatch> {
        match self {
            InterchangeObjectBO::CdciPictureEssenceDescriptor(bo) => {
                bo.file.sub_descriptors.as_ref()
            }
            InterchangeObjectBO::RgbaPictureEssenceDescriptor(bo) => {
                bo.file.sub_descriptors.as_ref()
            }
            InterchangeObjectBO::WaveAudioEssenceDescriptor(bo) => {
                bo.file.sub_descriptors.as_ref()
            }
            _ => None,
        }
    }

    /// Descriptor strong reference when the set is a source package.
    pub fn descriptor_uid(&self) -> Option<&MxfUid> {
        match self {
            InterchangeObjectBO::SourcePackage(bo) => bo.descriptor.as_ref(),
            _ => None,
        }
    }

    /// Duration when the set is a structural component (sequence or clip).
    pub fn structural_component_duration(&self) -> Option<i64> {
        match self {
            InterchangeObjectBO::Sequence(bo) => bo.component.duration,
            InterchangeObjectBO::SourceClip(bo) => bo.component.duration,
            _ => None,
        }
    }
}

/// Decode one structural set value into its BO.
pub(crate) fn decode_set(
    kind: SetKind,
    value: &[u8],
    primer: &PrimerPack,
    log: &mut ErrorLog,
) -> Result<InterchangeObjectBO> {
    let set = LocalSet::parse(kind.name(), value, primer, log)?;
    match kind {
        SetKind::Preface => PrefaceBO::decode(set).map(InterchangeObjectBO::Preface),
        SetKind::ContentStorage => {
            ContentStorageBO::decode(set).map(InterchangeObjectBO::ContentStorage)
        }
        SetKind::EssenceContainerData => {
            EssenceContainerDataBO::decode(set).map(InterchangeObjectBO::EssenceContainerData)
        }
        SetKind::MaterialPackage => {
            MaterialPackageBO::decode(set).map(InterchangeObjectBO::MaterialPackage)
        }
        SetKind::SourcePackage => {
            SourcePackageBO::decode(set).map(InterchangeObjectBO::SourcePackage)
        }
        SetKind::TimelineTrack => {
            TimelineTrackBO::decode(set).map(InterchangeObjectBO::TimelineTrack)
        }
        SetKind::Sequence => SequenceBO::decode(set).map(InterchangeObjectBO::Sequence),
        SetKind::SourceClip => SourceClipBO::decode(set).map(InterchangeObjectBO::SourceClip),
        SetKind::CdciPictureEssenceDescriptor => CdciPictureEssenceDescriptorBO::decode(set)
            .map(InterchangeObjectBO::CdciPictureEssenceDescriptor),
        SetKind::RgbaPictureEssenceDescriptor => RgbaPictureEssenceDescriptorBO::decode(set)
            .map(InterchangeObjectBO::RgbaPictureEssenceDescriptor),
        SetKind::WaveAudioEssenceDescriptor => WaveAudioEssenceDescriptorBO::decode(set)
            .map(InterchangeObjectBO::WaveAudioEssenceDescriptor),
        SetKind::AudioChannelLabelSubDescriptor => AudioChannelLabelSubDescriptorBO::decode(set)
            .map(InterchangeObjectBO::AudioChannelLabelSubDescriptor),
        SetKind::SoundFieldGroupLabelSubDescriptor => {
            SoundFieldGroupLabelSubDescriptorBO::decode(set)
                .map(InterchangeObjectBO::SoundFieldGroupLabelSubDescriptor)
        }
        SetKind::Jpeg2000PictureSubDescriptor => Jpeg2000PictureSubDescriptorBO::decode(set)
            .map(InterchangeObjectBO::Jpeg2000PictureSubDescriptor),
        SetKind::PhdrMetaDataTrackSubDescriptor => PhdrMetaDataTrackSubDescriptorBO::decode(set)
            .map(InterchangeObjectBO::PhdrMetaDataTrackSubDescriptor),
    }
}

// Field parser catalogue. Every parser checks the wire size of its input and
// fails with a field decode error on mismatch.

fn expect_len(bytes: &[u8], len: usize, what: &str) -> Result<()> {
    if bytes.len() != len {
        return Err(MxfError::field_decode(format!(
            "{what} expects {len} bytes, got {}",
            bytes.len()
        )));
    }
    Ok(())
}

pub(crate) fn decode_u8(bytes: &[u8]) -> Result<u8> {
    expect_len(bytes, 1, "u8")?;
    Ok(bytes[0])
}

pub(crate) fn decode_bool(bytes: &[u8]) -> Result<bool> {
    expect_len(bytes, 1, "bool")?;
    Ok(bytes[0] != 0)
}

pub(crate) fn decode_i8(bytes: &[u8]) -> Result<i8> {
    expect_len(bytes, 1, "i8")?;
    Ok(bytes[0] as i8)
}

pub(crate) fn decode_u16(bytes: &[u8]) -> Result<u16> {
    expect_len(bytes, 2, "u16")?;
    Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
}

pub(crate) fn decode_u32(bytes: &[u8]) -> Result<u32> {
    expect_len(bytes, 4, "u32")?;
    Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

pub(crate) fn decode_i64(bytes: &[u8]) -> Result<i64> {
    expect_len(bytes, 8, "i64")?;
    let mut buf = [0u8; 8];
    buf.copy_from_slice(bytes);
    Ok(i64::from_be_bytes(buf))
}

pub(crate) fn decode_rational(bytes: &[u8]) -> Result<Rational> {
    expect_len(bytes, 8, "rational")?;
    let numerator = i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    let denominator = i32::from_be_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
    if denominator == 0 {
        return Err(MxfError::field_decode("rational with zero denominator"));
    }
    Ok(Rational::new(numerator, denominator))
}

pub(crate) fn decode_timestamp(bytes: &[u8]) -> Result<MxfTimestamp> {
    expect_len(bytes, 8, "timestamp")?;
    MxfTimestamp::from_bytes(bytes)
        .ok_or_else(|| MxfError::field_decode("timestamp shorter than 8 bytes"))
}

pub(crate) fn decode_ul(bytes: &[u8]) -> Result<UniversalLabel> {
    expect_len(bytes, 16, "UL")?;
    let mut ul = [0u8; 16];
    ul.copy_from_slice(bytes);
    Ok(UniversalLabel(ul))
}

/// A 16-byte AUID or a 32-byte UMID.
pub(crate) fn decode_uid(bytes: &[u8]) -> Result<MxfUid> {
    MxfUid::from_bytes(bytes).ok_or_else(|| {
        MxfError::field_decode(format!("UID expects 16 or 32 bytes, got {}", bytes.len()))
    })
}

/// A strong reference: the 16-byte instance UID of another set.
pub(crate) fn decode_strong_ref(bytes: &[u8]) -> Result<MxfUid> {
    expect_len(bytes, 16, "strong reference")?;
    let mut ul = [0u8; 16];
    ul.copy_from_slice(bytes);
    Ok(MxfUid::from_ul(ul))
}

fn read_batch_header(cursor: &mut Cursor<&[u8]>, expected_item_size: u32) -> Result<u32> {
    let count = cursor
        .read_u32::<BigEndian>()
        .map_err(|_| MxfError::field_decode("truncated batch header"))?;
    let item_size = cursor
        .read_u32::<BigEndian>()
        .map_err(|_| MxfError::field_decode("truncated batch header"))?;
    if item_size != expected_item_size {
        return Err(MxfError::field_decode(format!(
            "batch item size is {item_size}, expected {expected_item_size}"
        )));
    }
    let remaining = cursor.get_ref().len() as u64 - cursor.position();
    if count as u64 * item_size as u64 > remaining {
        return Err(MxfError::field_decode(format!(
            "batch of {count} x {item_size} bytes overruns the field"
        )));
    }
    Ok(count)
}

pub(crate) fn decode_ref_batch(bytes: &[u8]) -> Result<RefBatch> {
    let mut cursor = Cursor::new(bytes);
    let count = read_batch_header(&mut cursor, 16)?;
    let mut items = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let mut ul = [0u8; 16];
        cursor
            .read_exact(&mut ul)
            .map_err(|_| MxfError::field_decode("truncated reference batch"))?;
        items.push(MxfUid::from_ul(ul));
    }
    Ok(RefBatch { items })
}

pub(crate) fn decode_ul_batch(bytes: &[u8]) -> Result<UlBatch> {
    let mut cursor = Cursor::new(bytes);
    let count = read_batch_header(&mut cursor, 16)?;
    let mut items = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let mut ul = [0u8; 16];
        cursor
            .read_exact(&mut ul)
            .map_err(|_| MxfError::field_decode("truncated UL batch"))?;
        items.push(UniversalLabel(ul));
    }
    Ok(UlBatch { items })
}

pub(crate) fn decode_i32_batch(bytes: &[u8]) -> Result<Vec<i32>> {
    let mut cursor = Cursor::new(bytes);
    let count = read_batch_header(&mut cursor, 4)?;
    let mut items = Vec::with_capacity(count as usize);
    for _ in 0..count {
        items.push(
            cursor
                .read_i32::<BigEndian>()
                .map_err(|_| MxfError::field_decode("truncated i32 batch"))?,
        );
    }
    Ok(items)
}

/// UTF-16BE text; trailing NULs are stripped.
pub(crate) fn decode_utf16_string(bytes: &[u8]) -> Result<String> {
    if bytes.len() % 2 != 0 {
        return Err(MxfError::field_decode(format!(
            "UTF-16 string with odd length {}",
            bytes.len()
        )));
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();
    let text = char::decode_utf16(units.into_iter())
        .collect::<std::result::Result<String, _>>()
        .map_err(|e| MxfError::field_decode(format!("invalid UTF-16 string: {e}")))?;
    Ok(text.trim_end_matches('\0').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::WriteBytesExt;

    #[test]
    fn test_set_kind_lookup() {
        assert_eq!(
            SetKind::from_key(&UniversalLabel(labels::PREFACE)),
            Some(SetKind::Preface)
        );

        let mut versioned = labels::SOURCE_PACKAGE;
        versioned[7] = 0x02;
        assert_eq!(
            SetKind::from_key(&UniversalLabel(versioned)),
            Some(SetKind::SourcePackage)
        );

        let mut unregistered = labels::PREFACE;
        unregistered[14] = 0x7E;
        assert_eq!(SetKind::from_key(&UniversalLabel(unregistered)), None);
    }

    #[test]
    fn test_scalar_parsers() {
        assert_eq!(decode_u16(&[0x12, 0x34]).unwrap(), 0x1234);
        assert_eq!(decode_u32(&[0, 0, 1, 0]).unwrap(), 256);
        assert_eq!(decode_i64(&(-5i64).to_be_bytes()).unwrap(), -5);
        assert!(decode_bool(&[1]).unwrap());
        assert!(decode_u16(&[1]).is_err());
    }

    #[test]
    fn test_rational_zero_denominator() {
        let mut bytes = Vec::new();
        bytes.write_i32::<BigEndian>(24).unwrap();
        bytes.write_i32::<BigEndian>(0).unwrap();
        assert!(decode_rational(&bytes).is_err());

        bytes.clear();
        bytes.write_i32::<BigEndian>(24000).unwrap();
        bytes.write_i32::<BigEndian>(1001).unwrap();
        assert_eq!(decode_rational(&bytes).unwrap(), Rational::new(24000, 1001));
    }

    #[test]
    fn test_ref_batch() {
        let mut bytes = Vec::new();
        bytes.write_u32::<BigEndian>(2).unwrap();
        bytes.write_u32::<BigEndian>(16).unwrap();
        bytes.extend_from_slice(&[1u8; 16]);
        bytes.extend_from_slice(&[2u8; 16]);

        let batch = decode_ref_batch(&bytes).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.items[0], MxfUid::from_ul([1u8; 16]));
    }

    #[test]
    fn test_ref_batch_bad_item_size() {
        let mut bytes = Vec::new();
        bytes.write_u32::<BigEndian>(1).unwrap();
        bytes.write_u32::<BigEndian>(32).unwrap();
        bytes.extend_from_slice(&[0u8; 32]);
        assert!(decode_ref_batch(&bytes).is_err());
    }

    #[test]
    fn test_utf16_string() {
        let bytes: Vec<u8> = "Track 1\0"
            .encode_utf16()
            .flat_map(|u| u.to_be_bytes())
            .collect();
        assert_eq!(decode_utf16_string(&bytes).unwrap(), "Track 1");
        assert!(decode_utf16_string(&[0x00]).is_err());
    }
}
