//! Rich interchange objects.
//!
//! The resolved form of a structural set: its byte object plus the
//! classified identities of its already-materialized dependents. The graph
//! is cross-referential, so rich objects hold UIDs rather than owning
//! pointers; the `HeaderPartition` facade dereferences them on demand.

use crate::sets::{
    AudioChannelLabelSubDescriptorBO, CdciPictureEssenceDescriptorBO, ContentStorageBO,
    EssenceContainerDataBO, Jpeg2000PictureSubDescriptorBO, MaterialPackageBO,
    PhdrMetaDataTrackSubDescriptorBO, PrefaceBO, RgbaPictureEssenceDescriptorBO, SequenceBO,
    SetKind, SoundFieldGroupLabelSubDescriptorBO, SourceClipBO, SourcePackageBO, TimelineTrackBO,
    WaveAudioEssenceDescriptorBO,
};
use crate::types::{MxfUid, Rational};

/// Resolved Preface.
#[derive(Debug, Clone)]
pub struct Preface {
    bo: PrefaceBO,
    primary_package: Option<MxfUid>,
    content_storage: Option<MxfUid>,
}

impl Preface {
    pub(crate) fn new(
        bo: PrefaceBO,
        primary_package: Option<MxfUid>,
        content_storage: Option<MxfUid>,
    ) -> Self {
        Preface {
            bo,
            primary_package,
            content_storage,
        }
    }

    /// The underlying byte object.
    pub fn bo(&self) -> &PrefaceBO {
        &self.bo
    }

    /// Instance UID of the materialized primary package, when present.
    pub fn primary_package_uid(&self) -> Option<&MxfUid> {
        self.primary_package.as_ref()
    }

    /// Instance UID of the materialized content storage, when present.
    pub fn content_storage_uid(&self) -> Option<&MxfUid> {
        self.content_storage.as_ref()
    }
}

/// Resolved ContentStorage.
#[derive(Debug, Clone)]
pub struct ContentStorage {
    bo: ContentStorageBO,
    packages: Vec<MxfUid>,
    essence_container_data: Vec<MxfUid>,
}

impl ContentStorage {
    pub(crate) fn new(
        bo: ContentStorageBO,
        packages: Vec<MxfUid>,
        essence_container_data: Vec<MxfUid>,
    ) -> Self {
        ContentStorage {
            bo,
            packages,
            essence_container_data,
        }
    }

    pub fn bo(&self) -> &ContentStorageBO {
        &self.bo
    }

    /// Materialized package UIDs, in declaration order.
    pub fn package_uids(&self) -> &[MxfUid] {
        &self.packages
    }

    /// Materialized essence container data UIDs, in declaration order.
    pub fn essence_container_data_uids(&self) -> &[MxfUid] {
        &self.essence_container_data
    }
}

/// Resolved MaterialPackage.
#[derive(Debug, Clone)]
pub struct MaterialPackage {
    bo: MaterialPackageBO,
    tracks: Vec<MxfUid>,
}

impl MaterialPackage {
    pub(crate) fn new(bo: MaterialPackageBO, tracks: Vec<MxfUid>) -> Self {
        MaterialPackage { bo, tracks }
    }

    pub fn bo(&self) -> &MaterialPackageBO {
        &self.bo
    }

    /// Package UID (UMID).
    pub fn package_uid(&self) -> &MxfUid {
        &self.bo.package.package_uid
    }

    /// Materialized track UIDs, in declaration order.
    pub fn track_uids(&self) -> &[MxfUid] {
        &self.tracks
    }
}

/// Resolved SourcePackage.
#[derive(Debug, Clone)]
pub struct SourcePackage {
    bo: SourcePackageBO,
    tracks: Vec<MxfUid>,
    descriptor: Option<MxfUid>,
}

impl SourcePackage {
    pub(crate) fn new(
        bo: SourcePackageBO,
        tracks: Vec<MxfUid>,
        descriptor: Option<MxfUid>,
    ) -> Self {
        SourcePackage {
            bo,
            tracks,
            descriptor,
        }
    }

    pub fn bo(&self) -> &SourcePackageBO {
        &self.bo
    }

    /// Package UID (UMID).
    pub fn package_uid(&self) -> &MxfUid {
        &self.bo.package.package_uid
    }

    /// Materialized track UIDs, in declaration order.
    pub fn track_uids(&self) -> &[MxfUid] {
        &self.tracks
    }

    /// Instance UID of the materialized essence descriptor.
    pub fn descriptor_uid(&self) -> Option<&MxfUid> {
        self.descriptor.as_ref()
    }
}

/// Resolved EssenceContainerData.
#[derive(Debug, Clone)]
pub struct EssenceContainerData {
    bo: EssenceContainerDataBO,
    linked_package: Option<MxfUid>,
}

impl EssenceContainerData {
    pub(crate) fn new(bo: EssenceContainerDataBO, linked_package: Option<MxfUid>) -> Self {
        EssenceContainerData { bo, linked_package }
    }

    pub fn bo(&self) -> &EssenceContainerDataBO {
        &self.bo
    }

    /// Instance UID of the materialized linked package.
    pub fn linked_package_uid(&self) -> Option<&MxfUid> {
        self.linked_package.as_ref()
    }
}

/// Resolved TimelineTrack.
#[derive(Debug, Clone)]
pub struct TimelineTrack {
    bo: TimelineTrackBO,
    sequence: Option<MxfUid>,
}

impl TimelineTrack {
    pub(crate) fn new(bo: TimelineTrackBO, sequence: Option<MxfUid>) -> Self {
        TimelineTrack { bo, sequence }
    }

    pub fn bo(&self) -> &TimelineTrackBO {
        &self.bo
    }

    /// Instance UID of the materialized sequence.
    pub fn sequence_uid(&self) -> Option<&MxfUid> {
        self.sequence.as_ref()
    }

    /// Edit rate of the track.
    pub fn edit_rate(&self) -> Option<Rational> {
        self.bo.edit_rate
    }
}

/// Resolved Sequence.
#[derive(Debug, Clone)]
pub struct Sequence {
    bo: SequenceBO,
    components: Vec<MxfUid>,
}

impl Sequence {
    pub(crate) fn new(bo: SequenceBO, components: Vec<MxfUid>) -> Self {
        Sequence { bo, components }
    }

    pub fn bo(&self) -> &SequenceBO {
        &self.bo
    }

    /// Materialized structural component UIDs, in declaration order.
    pub fn component_uids(&self) -> &[MxfUid] {
        &self.components
    }
}

/// Resolved SourceClip.
#[derive(Debug, Clone)]
pub struct SourceClip {
    bo: SourceClipBO,
    source_package: Option<MxfUid>,
}

impl SourceClip {
    pub(crate) fn new(bo: SourceClipBO, source_package: Option<MxfUid>) -> Self {
        SourceClip { bo, source_package }
    }

    pub fn bo(&self) -> &SourceClipBO {
        &self.bo
    }

    /// Instance UID of the materialized source package.
    pub fn source_package_uid(&self) -> Option<&MxfUid> {
        self.source_package.as_ref()
    }
}

/// Resolved CDCI picture essence descriptor.
///
/// Sub-descriptors stay reachable through the byte object's reference
/// batch; they are deliberately not carried here.
#[derive(Debug, Clone)]
pub struct CdciPictureEssenceDescriptor {
    bo: CdciPictureEssenceDescriptorBO,
}

impl CdciPictureEssenceDescriptor {
    pub(crate) fn new(bo: CdciPictureEssenceDescriptorBO) -> Self {
        CdciPictureEssenceDescriptor { bo }
    }

    pub fn bo(&self) -> &CdciPictureEssenceDescriptorBO {
        &self.bo
    }
}

/// Resolved RGBA picture essence descriptor.
#[derive(Debug, Clone)]
pub struct RgbaPictureEssenceDescriptor {
    bo: RgbaPictureEssenceDescriptorBO,
}

impl RgbaPictureEssenceDescriptor {
    pub(crate) fn new(bo: RgbaPictureEssenceDescriptorBO) -> Self {
        RgbaPictureEssenceDescriptor { bo }
    }

    pub fn bo(&self) -> &RgbaPictureEssenceDescriptorBO {
        &self.bo
    }
}

/// Resolved wave audio essence descriptor.
#[derive(Debug, Clone)]
pub struct WaveAudioEssenceDescriptor {
    bo: WaveAudioEssenceDescriptorBO,
}

impl WaveAudioEssenceDescriptor {
    pub(crate) fn new(bo: WaveAudioEssenceDescriptorBO) -> Self {
        WaveAudioEssenceDescriptor { bo }
    }

    pub fn bo(&self) -> &WaveAudioEssenceDescriptorBO {
        &self.bo
    }
}

/// Resolved audio channel label sub-descriptor.
#[derive(Debug, Clone)]
pub struct AudioChannelLabelSubDescriptor {
    bo: AudioChannelLabelSubDescriptorBO,
}

impl AudioChannelLabelSubDescriptor {
    pub(crate) fn new(bo: AudioChannelLabelSubDescriptorBO) -> Self {
        AudioChannelLabelSubDescriptor { bo }
    }

    pub fn bo(&self) -> &AudioChannelLabelSubDescriptorBO {
        &self.bo
    }
}

/// Resolved sound field group label sub-descriptor.
#[derive(Debug, Clone)]
pub struct SoundFieldGroupLabelSubDescriptor {
    bo: SoundFieldGroupLabelSubDescriptorBO,
}

impl SoundFieldGroupLabelSubDescriptor {
    pub(crate) fn new(bo: SoundFieldGroupLabelSubDescriptorBO) -> Self {
        SoundFieldGroupLabelSubDescriptor { bo }
    }

    pub fn bo(&self) -> &SoundFieldGroupLabelSubDescriptorBO {
        &self.bo
    }
}

/// Resolved JPEG 2000 picture sub-descriptor.
#[derive(Debug, Clone)]
pub struct Jpeg2000PictureSubDescriptor {
    bo: Jpeg2000PictureSubDescriptorBO,
}

impl Jpeg2000PictureSubDescriptor {
    pub(crate) fn new(bo: Jpeg2000PictureSubDescriptorBO) -> Self {
        Jpeg2000PictureSubDescriptor { bo }
    }

    pub fn bo(&self) -> &Jpeg2000PictureSubDescriptorBO {
        &self.bo
    }
}

/// Resolved PHDR metadata track sub-descriptor.
#[derive(Debug, Clone)]
pub struct PhdrMetaDataTrackSubDescriptor {
    bo: PhdrMetaDataTrackSubDescriptorBO,
}

impl PhdrMetaDataTrackSubDescriptor {
    pub(crate) fn new(bo: PhdrMetaDataTrackSubDescriptorBO) -> Self {
        PhdrMetaDataTrackSubDescriptor { bo }
    }

    pub fn bo(&self) -> &PhdrMetaDataTrackSubDescriptorBO {
        &self.bo
    }
}

/// Any resolved interchange object.
#[derive(Debug, Clone)]
pub enum InterchangeObject {
    Preface(Preface),
    ContentStorage(ContentStorage),
    MaterialPackage(MaterialPackage),
    SourcePackage(SourcePackage),
    EssenceContainerData(EssenceContainerData),
    TimelineTrack(TimelineTrack),
    Sequence(Sequence),
    SourceClip(SourceClip),
    CdciPictureEssenceDescriptor(CdciPictureEssenceDescriptor),
    RgbaPictureEssenceDescriptor(RgbaPictureEssenceDescriptor),
    WaveAudioEssenceDescriptor(WaveAudioEssenceDescriptor),
    AudioChannelLabelSubDescriptor(AudioChannelLabelSubDescriptor),
    SoundFieldGroupLabelSubDescriptor(SoundFieldGroupLabelSubDescriptor),
    Jpeg2000PictureSubDescriptor(Jpeg2000PictureSubDescriptor),
    PhdrMetaDataTrackSubDescriptor(PhdrMetaDataTrackSubDescriptor),
}

impl InterchangeObject {
    /// Concrete class of the object.
    pub fn kind(&self) -> SetKind {
        match self {
            InterchangeObject::Preface(_) => SetKind::Preface,
            InterchangeObject::ContentStorage(_) => SetKind::ContentStorage,
            InterchangeObject::MaterialPackage(_) => SetKind::MaterialPackage,
            InterchangeObject::SourcePackage(_) => SetKind::SourcePackage,
            InterchangeObject::EssenceContainerData(_) => SetKind::EssenceContainerData,
            InterchangeObject::TimelineTrack(_) => SetKind::TimelineTrack,
            InterchangeObject::Sequence(_) => SetKind::Sequence,
            InterchangeObject::SourceClip(_) => SetKind::SourceClip,
            InterchangeObject::CdciPictureEssenceDescriptor(_) => {
                SetKind::CdciPictureEssenceDescriptor
            }
            InterchangeObject::RgbaPictureEssenceDescriptor(_) => {
                SetKind::RgbaPictureEssenceDescriptor
            }
            InterchangeObject::WaveAudioEssenceDescriptor(_) => {
                SetKind::WaveAudioEssenceDescriptor
            }
            InterchangeObject::AudioChannelLabelSubDescriptor(_) => {
                SetKind::AudioChannelLabelSubDescriptor
            }
            InterchangeObject::SoundFieldGroupLabelSubDescriptor(_) => {
                SetKind::SoundFieldGroupLabelSubDescriptor
            }
            InterchangeObject::Jpeg2000PictureSubDescriptor(_) => {
                SetKind::Jpeg2000PictureSubDescriptor
            }
            InterchangeObject::PhdrMetaDataTrackSubDescriptor(_) => {
                SetKind::PhdrMetaDataTrackSubDescriptor
            }
        }
    }

    /// Instance UID of the object.
    pub fn instance_uid(&self) -> &MxfUid {
        match self {
            InterchangeObject::Preface(o) => &o.bo.core.instance_uid,
            InterchangeObject::ContentStorage(o) => &o.bo.core.instance_uid,
            InterchangeObject::MaterialPackage(o) => &o.bo.core.instance_uid,
            InterchangeObject::SourcePackage(o) => &o.bo.core.instance_uid,
            InterchangeObject::EssenceContainerData(o) => &o.bo.core.instance_uid,
            InterchangeObject::TimelineTrack(o) => &o.bo.core.instance_uid,
            InterchangeObject::Sequence(o) => &o.bo.core.instance_uid,
            InterchangeObject::SourceClip(o) => &o.bo.core.instance_uid,
            InterchangeObject::CdciPictureEssenceDescriptor(o) => &o.bo.core.instance_uid,
            InterchangeObject::RgbaPictureEssenceDescriptor(o) => &o.bo.core.instance_uid,
            InterchangeObject::WaveAudioEssenceDescriptor(o) => &o.bo.core.instance_uid,
            InterchangeObject::AudioChannelLabelSubDescriptor(o) => &o.bo.core.instance_uid,
            InterchangeObject::SoundFieldGroupLabelSubDescriptor(o) => &o.bo.core.instance_uid,
            InterchangeObject::Jpeg2000PictureSubDescriptor(o) => &o.bo.core.instance_uid,
            InterchangeObject::PhdrMetaDataTrackSubDescriptor(o) => &o.bo.core.instance_uid,
        }
    }

    /// Package UID when the object is a material or source package.
    pub fn package_uid(&self) -> Option<&MxfUid> {
        match self {
            InterchangeObject::MaterialPackage(o) => Some(o.package_uid()),
            InterchangeObject::SourcePackage(o) => Some(o.package_uid()),
            _ => None,
        }
    }

    /// True for the generic-package subtypes.
    pub fn is_generic_package(&self) -> bool {
        matches!(
            self,
            InterchangeObject::MaterialPackage(_) | InterchangeObject::SourcePackage(_)
        )
    }

    /// True for the generic-track subtypes.
    pub fn is_generic_track(&self) -> bool {
        matches!(self, InterchangeObject::TimelineTrack(_))
    }

    /// True for the structural-component subtypes.
    pub fn is_structural_component(&self) -> bool {
        matches!(
            self,
            InterchangeObject::Sequence(_) | InterchangeObject::SourceClip(_)
        )
    }

    /// True for the essence-descriptor subtypes.
    pub fn is_generic_descriptor(&self) -> bool {
        matches!(
            self,
            InterchangeObject::CdciPictureEssenceDescriptor(_)
                | InterchangeObject::RgbaPictureEssenceDescriptor(_)
                | InterchangeObject::WaveAudioEssenceDescriptor(_)
        )
    }
}
