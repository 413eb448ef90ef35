//! Byte objects for the structural sets: preface, content storage,
//! packages, tracks, sequences, clips, and essence container data.

use super::{
    decode_i64, decode_ref_batch, decode_strong_ref, decode_timestamp, decode_u16, decode_u32,
    decode_uid, decode_ul, decode_ul_batch, decode_utf16_string, LocalSet, SetCore,
    SetCoreBuilder, SetKind,
};
use crate::error::{MxfError, Result};
use crate::types::{MxfTimestamp, MxfUid, Rational, RefBatch, UlBatch};
use crate::ul::{items, UniversalLabel};

/// Preface set, the root of the metadata tree.
#[derive(Debug, Clone)]
pub struct PrefaceBO {
    pub core: SetCore,
    pub last_modified_date: Option<MxfTimestamp>,
    pub version: Option<u16>,
    pub operational_pattern: Option<UniversalLabel>,
    pub essence_containers: Option<UlBatch>,
    pub content_storage: Option<MxfUid>,
    pub primary_package: Option<MxfUid>,
}

impl PrefaceBO {
    pub(crate) fn decode(set: LocalSet) -> Result<Self> {
        let mut core = SetCoreBuilder::new(SetKind::Preface);
        let mut last_modified_date = None;
        let mut version = None;
        let mut operational_pattern = None;
        let mut essence_containers = None;
        let mut content_storage = None;
        let mut primary_package = None;

        for (ul, bytes) in set.items {
            if core.try_common(&ul, &bytes)? {
                continue;
            }
            match *ul.as_bytes() {
                items::LAST_MODIFIED_DATE => last_modified_date = Some(decode_timestamp(&bytes)?),
                items::PREFACE_VERSION => version = Some(decode_u16(&bytes)?),
                items::OPERATIONAL_PATTERN => operational_pattern = Some(decode_ul(&bytes)?),
                items::ESSENCE_CONTAINERS => essence_containers = Some(decode_ul_batch(&bytes)?),
                items::CONTENT_STORAGE_REF => content_storage = Some(decode_strong_ref(&bytes)?),
                items::PRIMARY_PACKAGE => primary_package = Some(decode_strong_ref(&bytes)?),
                _ => core.unknown(ul, bytes),
            }
        }

        Ok(PrefaceBO {
            core: core.finish()?,
            last_modified_date,
            version,
            operational_pattern,
            essence_containers,
            content_storage,
            primary_package,
        })
    }

    pub(crate) fn dependent_uids(&self) -> Vec<MxfUid> {
        let mut uids = Vec::new();
        if let Some(uid) = self.primary_package {
            uids.push(uid);
        }
        if let Some(uid) = self.content_storage {
            uids.push(uid);
        }
        uids
    }
}

/// Content storage set: the package and essence-container-data directory.
#[derive(Debug, Clone)]
pub struct ContentStorageBO {
    pub core: SetCore,
    pub packages: Option<RefBatch>,
    pub essence_container_data: Option<RefBatch>,
}

impl ContentStorageBO {
    pub(crate) fn decode(set: LocalSet) -> Result<Self> {
        let mut core = SetCoreBuilder::new(SetKind::ContentStorage);
        let mut packages = None;
        let mut essence_container_data = None;

        for (ul, bytes) in set.items {
            if core.try_common(&ul, &bytes)? {
                continue;
            }
            match *ul.as_bytes() {
                items::CS_PACKAGES => packages = Some(decode_ref_batch(&bytes)?),
                items::CS_ESSENCE_CONTAINER_DATA => {
                    essence_container_data = Some(decode_ref_batch(&bytes)?)
                }
                _ => core.unknown(ul, bytes),
            }
        }

        Ok(ContentStorageBO {
            core: core.finish()?,
            packages,
            essence_container_data,
        })
    }

    /// Package instance UIDs in declaration order.
    pub fn package_uids(&self) -> &[MxfUid] {
        batch_items(&self.packages)
    }

    /// Essence container data instance UIDs in declaration order.
    pub fn essence_container_data_uids(&self) -> &[MxfUid] {
        batch_items(&self.essence_container_data)
    }

    pub(crate) fn dependent_uids(&self) -> Vec<MxfUid> {
        let mut uids = self.package_uids().to_vec();
        uids.extend_from_slice(self.essence_container_data_uids());
        uids
    }
}

/// Essence container data set, linking a file package to an essence stream.
#[derive(Debug, Clone)]
pub struct EssenceContainerDataBO {
    pub core: SetCore,
    pub linked_package_uid: Option<MxfUid>,
    pub index_sid: Option<u32>,
    pub body_sid: Option<u32>,
}

impl EssenceContainerDataBO {
    pub(crate) fn decode(set: LocalSet) -> Result<Self> {
        let mut core = SetCoreBuilder::new(SetKind::EssenceContainerData);
        let mut linked_package_uid = None;
        let mut index_sid = None;
        let mut body_sid = None;

        for (ul, bytes) in set.items {
            if core.try_common(&ul, &bytes)? {
                continue;
            }
            match *ul.as_bytes() {
                items::LINKED_PACKAGE_UID => linked_package_uid = Some(decode_uid(&bytes)?),
                items::INDEX_SID => index_sid = Some(decode_u32(&bytes)?),
                items::BODY_SID => body_sid = Some(decode_u32(&bytes)?),
                _ => core.unknown(ul, bytes),
            }
        }

        Ok(EssenceContainerDataBO {
            core: core.finish()?,
            linked_package_uid,
            index_sid,
            body_sid,
        })
    }

    pub(crate) fn dependent_uids(&self) -> Vec<MxfUid> {
        self.linked_package_uid.into_iter().collect()
    }
}

/// Fields shared by material and source packages.
#[derive(Debug, Clone)]
pub struct GenericPackageFields {
    /// Package UID (UMID). Indexed alongside the instance UID.
    pub package_uid: MxfUid,
    pub name: Option<String>,
    pub creation_date: Option<MxfTimestamp>,
    pub modified_date: Option<MxfTimestamp>,
    pub tracks: Option<RefBatch>,
}

impl GenericPackageFields {
    /// Track instance UIDs in declaration order.
    pub fn track_uids(&self) -> &[MxfUid] {
        batch_items(&self.tracks)
    }
}

#[derive(Default)]
struct GenericPackageFieldsBuilder {
    package_uid: Option<MxfUid>,
    name: Option<String>,
    creation_date: Option<MxfTimestamp>,
    modified_date: Option<MxfTimestamp>,
    tracks: Option<RefBatch>,
}

impl GenericPackageFieldsBuilder {
    fn apply(&mut self, ul: &UniversalLabel, bytes: &[u8]) -> Result<bool> {
        match *ul.as_bytes() {
            items::PACKAGE_UID => self.package_uid = Some(decode_uid(bytes)?),
            items::PACKAGE_NAME => self.name = Some(decode_utf16_string(bytes)?),
            items::PACKAGE_CREATION_DATE => self.creation_date = Some(decode_timestamp(bytes)?),
            items::PACKAGE_MODIFIED_DATE => self.modified_date = Some(decode_timestamp(bytes)?),
            items::PACKAGE_TRACKS => self.tracks = Some(decode_ref_batch(bytes)?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn finish(self, kind: SetKind) -> Result<GenericPackageFields> {
        let package_uid = self.package_uid.ok_or_else(|| {
            MxfError::field_decode(format!("{} set has no PackageUID", kind.name()))
        })?;
        Ok(GenericPackageFields {
            package_uid,
            name: self.name,
            creation_date: self.creation_date,
            modified_date: self.modified_date,
            tracks: self.tracks,
        })
    }
}

/// Material package set.
#[derive(Debug, Clone)]
pub struct MaterialPackageBO {
    pub core: SetCore,
    pub package: GenericPackageFields,
}

impl MaterialPackageBO {
    pub(crate) fn decode(set: LocalSet) -> Result<Self> {
        let mut core = SetCoreBuilder::new(SetKind::MaterialPackage);
        let mut package = GenericPackageFieldsBuilder::default();

        for (ul, bytes) in set.items {
            if core.try_common(&ul, &bytes)? || package.apply(&ul, &bytes)? {
                continue;
            }
            core.unknown(ul, bytes);
        }

        Ok(MaterialPackageBO {
            core: core.finish()?,
            package: package.finish(SetKind::MaterialPackage)?,
        })
    }

    pub(crate) fn dependent_uids(&self) -> Vec<MxfUid> {
        self.package.track_uids().to_vec()
    }
}

/// Source package set.
#[derive(Debug, Clone)]
pub struct SourcePackageBO {
    pub core: SetCore,
    pub package: GenericPackageFields,
    /// Strong reference to the package's essence descriptor.
    pub descriptor: Option<MxfUid>,
}

impl SourcePackageBO {
    pub(crate) fn decode(set: LocalSet) -> Result<Self> {
        let mut core = SetCoreBuilder::new(SetKind::SourcePackage);
        let mut package = GenericPackageFieldsBuilder::default();
        let mut descriptor = None;

        for (ul, bytes) in set.items {
            if core.try_common(&ul, &bytes)? || package.apply(&ul, &bytes)? {
                continue;
            }
            match *ul.as_bytes() {
                items::PACKAGE_DESCRIPTOR => descriptor = Some(decode_strong_ref(&bytes)?),
                _ => core.unknown(ul, bytes),
            }
        }

        Ok(SourcePackageBO {
            core: core.finish()?,
            package: package.finish(SetKind::SourcePackage)?,
            descriptor,
        })
    }

    pub(crate) fn dependent_uids(&self) -> Vec<MxfUid> {
        let mut uids = self.package.track_uids().to_vec();
        if let Some(uid) = self.descriptor {
            uids.push(uid);
        }
        uids
    }
}

/// Timeline track set.
#[derive(Debug, Clone)]
pub struct TimelineTrackBO {
    pub core: SetCore,
    pub track_id: Option<u32>,
    pub track_number: Option<u32>,
    pub track_name: Option<String>,
    pub edit_rate: Option<Rational>,
    pub origin: Option<i64>,
    pub sequence: Option<MxfUid>,
}

impl TimelineTrackBO {
    pub(crate) fn decode(set: LocalSet) -> Result<Self> {
        let mut core = SetCoreBuilder::new(SetKind::TimelineTrack);
        let mut track_id = None;
        let mut track_number = None;
        let mut track_name = None;
        let mut edit_rate = None;
        let mut origin = None;
        let mut sequence = None;

        for (ul, bytes) in set.items {
            if core.try_common(&ul, &bytes)? {
                continue;
            }
            match *ul.as_bytes() {
                items::TRACK_ID => track_id = Some(decode_u32(&bytes)?),
                items::TRACK_NUMBER => track_number = Some(decode_u32(&bytes)?),
                items::TRACK_NAME => track_name = Some(decode_utf16_string(&bytes)?),
                items::EDIT_RATE => edit_rate = Some(super::decode_rational(&bytes)?),
                items::ORIGIN => origin = Some(decode_i64(&bytes)?),
                items::TRACK_SEQUENCE => sequence = Some(decode_strong_ref(&bytes)?),
                _ => core.unknown(ul, bytes),
            }
        }

        Ok(TimelineTrackBO {
            core: core.finish()?,
            track_id,
            track_number,
            track_name,
            edit_rate,
            origin,
            sequence,
        })
    }

    pub(crate) fn dependent_uids(&self) -> Vec<MxfUid> {
        self.sequence.into_iter().collect()
    }
}

/// Fields shared by structural components (sequences and clips).
#[derive(Debug, Clone, Default)]
pub struct StructuralComponentFields {
    pub data_definition: Option<UniversalLabel>,
    pub duration: Option<i64>,
}

impl StructuralComponentFields {
    fn apply(&mut self, ul: &UniversalLabel, bytes: &[u8]) -> Result<bool> {
        match *ul.as_bytes() {
            items::DATA_DEFINITION => self.data_definition = Some(decode_ul(bytes)?),
            items::DURATION => self.duration = Some(decode_i64(bytes)?),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// Sequence set: an ordered list of structural components.
#[derive(Debug, Clone)]
pub struct SequenceBO {
    pub core: SetCore,
    pub component: StructuralComponentFields,
    pub structural_components: Option<RefBatch>,
}

impl SequenceBO {
    pub(crate) fn decode(set: LocalSet) -> Result<Self> {
        let mut core = SetCoreBuilder::new(SetKind::Sequence);
        let mut component = StructuralComponentFields::default();
        let mut structural_components = None;

        for (ul, bytes) in set.items {
            if core.try_common(&ul, &bytes)? || component.apply(&ul, &bytes)? {
                continue;
            }
            match *ul.as_bytes() {
                items::STRUCTURAL_COMPONENTS => {
                    structural_components = Some(decode_ref_batch(&bytes)?)
                }
                _ => core.unknown(ul, bytes),
            }
        }

        Ok(SequenceBO {
            core: core.finish()?,
            component,
            structural_components,
        })
    }

    /// Component instance UIDs in declaration order.
    pub fn component_uids(&self) -> &[MxfUid] {
        batch_items(&self.structural_components)
    }

    pub(crate) fn dependent_uids(&self) -> Vec<MxfUid> {
        self.component_uids().to_vec()
    }
}

/// Source clip set: a reference into another package's track.
#[derive(Debug, Clone)]
pub struct SourceClipBO {
    pub core: SetCore,
    pub component: StructuralComponentFields,
    pub start_position: Option<i64>,
    /// Package UID (UMID) of the referenced package.
    pub source_package_id: Option<MxfUid>,
    pub source_track_id: Option<u32>,
}

impl SourceClipBO {
    pub(crate) fn decode(set: LocalSet) -> Result<Self> {
        let mut core = SetCoreBuilder::new(SetKind::SourceClip);
        let mut component = StructuralComponentFields::default();
        let mut start_position = None;
        let mut source_package_id = None;
        let mut source_track_id = None;

        for (ul, bytes) in set.items {
            if core.try_common(&ul, &bytes)? || component.apply(&ul, &bytes)? {
                continue;
            }
            match *ul.as_bytes() {
                items::START_POSITION => start_position = Some(decode_i64(&bytes)?),
                items::SOURCE_PACKAGE_ID => source_package_id = Some(decode_uid(&bytes)?),
                items::SOURCE_TRACK_ID => source_track_id = Some(decode_u32(&bytes)?),
                _ => core.unknown(ul, bytes),
            }
        }

        Ok(SourceClipBO {
            core: core.finish()?,
            component,
            start_position,
            source_package_id,
            source_track_id,
        })
    }

    pub(crate) fn dependent_uids(&self) -> Vec<MxfUid> {
        self.source_package_id.into_iter().collect()
    }
}

fn batch_items(batch: &Option<RefBatch>) -> &[MxfUid] {
    batch.as_ref().map(|b| b.items.as_slice()).unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::{BigEndian, WriteBytesExt};

    fn item(ul: [u8; 16], bytes: Vec<u8>) -> (UniversalLabel, Vec<u8>) {
        (UniversalLabel(ul), bytes)
    }

    fn ref_batch_bytes(refs: &[[u8; 16]]) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.write_u32::<BigEndian>(refs.len() as u32).unwrap();
        bytes.write_u32::<BigEndian>(16).unwrap();
        for r in refs {
            bytes.extend_from_slice(r);
        }
        bytes
    }

    #[test]
    fn test_preface_decode() {
        let set = LocalSet {
            items: vec![
                item(items::INSTANCE_UID, vec![1u8; 16]),
                item(items::CONTENT_STORAGE_REF, vec![2u8; 16]),
                item(items::PRIMARY_PACKAGE, vec![3u8; 16]),
                item([0xAAu8; 16], vec![0, 1, 2]),
            ],
        };
        let bo = PrefaceBO::decode(set).unwrap();

        assert_eq!(bo.core.instance_uid, MxfUid::from_ul([1u8; 16]));
        assert_eq!(bo.content_storage, Some(MxfUid::from_ul([2u8; 16])));
        assert_eq!(bo.core.unknown.len(), 1);
        assert_eq!(
            bo.dependent_uids(),
            vec![MxfUid::from_ul([3u8; 16]), MxfUid::from_ul([2u8; 16])]
        );
    }

    #[test]
    fn test_missing_instance_uid_is_fatal() {
        let set = LocalSet {
            items: vec![item(items::CONTENT_STORAGE_REF, vec![2u8; 16])],
        };
        assert!(PrefaceBO::decode(set).is_err());
    }

    #[test]
    fn test_material_package_requires_package_uid() {
        let set = LocalSet {
            items: vec![item(items::INSTANCE_UID, vec![1u8; 16])],
        };
        assert!(MaterialPackageBO::decode(set).is_err());
    }

    #[test]
    fn test_material_package_tracks_in_order() {
        let set = LocalSet {
            items: vec![
                item(items::INSTANCE_UID, vec![1u8; 16]),
                item(items::PACKAGE_UID, vec![9u8; 32]),
                item(items::PACKAGE_TRACKS, ref_batch_bytes(&[[5u8; 16], [4u8; 16]])),
            ],
        };
        let bo = MaterialPackageBO::decode(set).unwrap();

        assert!(bo.package.package_uid.is_umid());
        assert_eq!(
            bo.package.track_uids(),
            &[MxfUid::from_ul([5u8; 16]), MxfUid::from_ul([4u8; 16])]
        );
    }

    #[test]
    fn test_sequence_duration_and_components() {
        let set = LocalSet {
            items: vec![
                item(items::INSTANCE_UID, vec![1u8; 16]),
                item(items::DURATION, 48i64.to_be_bytes().to_vec()),
                item(
                    items::STRUCTURAL_COMPONENTS,
                    ref_batch_bytes(&[[7u8; 16]]),
                ),
            ],
        };
        let bo = SequenceBO::decode(set).unwrap();

        assert_eq!(bo.component.duration, Some(48));
        assert_eq!(bo.component_uids(), &[MxfUid::from_ul([7u8; 16])]);
    }

    #[test]
    fn test_source_clip_umid_reference() {
        let set = LocalSet {
            items: vec![
                item(items::INSTANCE_UID, vec![1u8; 16]),
                item(items::SOURCE_PACKAGE_ID, vec![8u8; 32]),
                item(items::DURATION, 24i64.to_be_bytes().to_vec()),
            ],
        };
        let bo = SourceClipBO::decode(set).unwrap();

        let dep = &bo.dependent_uids()[0];
        assert!(dep.is_umid());
        assert_eq!(bo.component.duration, Some(24));
    }
}
