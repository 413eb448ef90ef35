//! Header partition object model (ST 377-1).
//!
//! Construction makes a single pass over the partition bytes: partition
//! pack, primer pack, then every structural metadata set. Decoded byte
//! objects are linked into a dependency graph, topologically ordered, and
//! materialized into rich objects leaves-first. The result is deeply
//! immutable; queries never mutate.

use crate::diagnostics::{ErrorKind, ErrorLog};
use crate::error::{MxfError, Result};
use crate::klv::KlvHeader;
use crate::object::{
    AudioChannelLabelSubDescriptor, CdciPictureEssenceDescriptor, ContentStorage,
    EssenceContainerData, InterchangeObject, Jpeg2000PictureSubDescriptor, MaterialPackage,
    PhdrMetaDataTrackSubDescriptor, Preface, RgbaPictureEssenceDescriptor, Sequence,
    SoundFieldGroupLabelSubDescriptor, SourceClip, SourcePackage, TimelineTrack,
    WaveAudioEssenceDescriptor,
};
use crate::partition::PartitionPack;
use crate::primer::PrimerPack;
use crate::resolver::{topological_order, GraphNode};
use crate::sets::{decode_set, InterchangeObjectBO, SetKind};
use crate::source::ByteSource;
use crate::types::MxfUid;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, warn};

/// The IMF essence component profile (ST 2067-5) pins the header partition
/// to the start of the file.
const IMF_HEADER_PARTITION_OFFSET: u64 = 0;

/// Parsed header partition: packs, byte objects, and the resolved object
/// graph.
#[derive(Debug)]
pub struct HeaderPartition {
    partition_pack: PartitionPack,
    primer_pack: PrimerPack,
    /// Byte objects in decode order.
    bos: Vec<InterchangeObjectBO>,
    /// Instance UIDs (and package UIDs) to byte objects.
    uid_to_bos: HashMap<MxfUid, usize>,
    /// Rich objects in construction (topological) order.
    objects: Vec<InterchangeObject>,
    /// Instance UIDs (and package UIDs) to rich objects.
    uid_to_objects: HashMap<MxfUid, usize>,
}

impl HeaderPartition {
    /// Parse the header partition found at `byte_offset` in the file.
    ///
    /// `max_partition_size` bounds the metadata pass; `log` accumulates
    /// non-fatal diagnostics and survives the call for inspection. The
    /// parse fails if any FATAL entry was recorded during this run.
    pub fn parse<S: ByteSource + ?Sized>(
        source: &mut S,
        byte_offset: u64,
        max_partition_size: u64,
        log: &mut ErrorLog,
    ) -> Result<Self> {
        let fatal_at_entry = log.fatal_count();

        if byte_offset != IMF_HEADER_PARTITION_OFFSET {
            return Err(MxfError::UnexpectedOffset {
                expected: IMF_HEADER_PARTITION_OFFSET,
                actual: byte_offset,
            });
        }

        let partition_pack = PartitionPack::read(source)?;
        if !partition_pack.is_valid_header_partition() {
            return Err(MxfError::InvalidPartitionPack(
                "partition pack does not open a header partition".into(),
            ));
        }
        let mut bytes_read = partition_pack.klv_packet_size();

        // Primer pack, optionally preceded by a single fill item.
        let mut header = KlvHeader::read(source)?;
        bytes_read += header.kl_size();
        if !header.key.is_primer_pack() {
            if !header.key.is_fill_item() {
                return Err(MxfError::MissingPrimer(format!(
                    "unexpected key {} between partition pack and primer",
                    header.key
                )));
            }
            source.skip(header.v_size)?;
            bytes_read += header.v_size;

            header = KlvHeader::read(source)?;
            bytes_read += header.kl_size();
            if !header.key.is_primer_pack() {
                return Err(MxfError::MissingPrimer(format!(
                    "expected primer pack after fill item, found {}",
                    header.key
                )));
            }
        }
        let primer_value = source.read_bytes(header.v_size as usize)?;
        bytes_read += header.v_size;
        let primer_pack = PrimerPack::decode(&primer_value)?;

        // Structural metadata sets and interleaved fill items.
        let mut bos: Vec<InterchangeObjectBO> = Vec::new();
        let mut uid_to_bos: HashMap<MxfUid, usize> = HashMap::new();
        while bytes_read < max_partition_size {
            let header = KlvHeader::read(source)?;
            debug!(
                key = %header.key,
                l_size = header.l_size,
                v_size = header.v_size,
                "found KLV item"
            );
            bytes_read += header.packet_size();

            if !header.key.is_structural_metadata() {
                source.skip(header.v_size)?;
                continue;
            }
            let Some(kind) = SetKind::from_key(&header.key) else {
                warn!(key = %header.key, "unregistered structural set, value skipped");
                log.warn(
                    ErrorKind::UnknownStructuralSet,
                    format!("unregistered structural set key {}", header.key),
                );
                source.skip(header.v_size)?;
                continue;
            };

            let value = source.read_bytes(header.v_size as usize)?;
            let bo = decode_set(kind, &value, &primer_pack, log)?;
            debug!(key = %header.key, class = kind.name(), "decoded structural set");

            let index = bos.len();
            uid_to_bos.insert(*bo.instance_uid(), index);
            if let Some(package_uid) = bo.package_uid() {
                uid_to_bos.insert(*package_uid, index);
            }
            bos.push(bo);
        }

        // Exactly one Preface per header partition.
        let preface_count = bos.iter().filter(|b| b.kind() == SetKind::Preface).count();
        match preface_count {
            0 => log.fatal(
                ErrorKind::NoPreface,
                "found 0 Preface sets, exactly one is required in the header partition",
            ),
            1 => {}
            n => log.fatal(
                ErrorKind::MultiplePreface,
                format!("found {n} Preface sets, only one is allowed in the header partition"),
            ),
        }
        let fatal_errors = log.fatal_count() - fatal_at_entry;
        if fatal_errors > 0 {
            return Err(MxfError::ParseFailed {
                errors: fatal_errors,
            });
        }

        // Dependency graph over instance UIDs, edges to absent sets dropped.
        let mut graph_nodes: Vec<GraphNode> = bos
            .iter()
            .map(|bo| GraphNode {
                uid: *bo.instance_uid(),
                depends: Vec::new(),
            })
            .collect();
        for (index, bo) in bos.iter().enumerate() {
            for dep_uid in bo.dependent_uids() {
                if let Some(&dep_index) = uid_to_bos.get(&dep_uid) {
                    graph_nodes[index].depends.push(dep_index);
                }
            }
        }
        let order = topological_order(&graph_nodes)?;

        // Materialize leaves-first; every dependent is already built.
        let mut objects: Vec<InterchangeObject> = Vec::with_capacity(order.len());
        let mut uid_to_objects: HashMap<MxfUid, usize> = HashMap::new();
        for &node_index in &order {
            let node = &graph_nodes[node_index];
            let Some(&bo_index) = uid_to_bos.get(&node.uid) else {
                continue;
            };
            let bo = &bos[bo_index];
            let object = build_object(
                bo,
                &graph_nodes[node_index].depends,
                &bos,
                &objects,
                &uid_to_objects,
            )?;
            let object_index = objects.len();
            uid_to_objects.insert(*bo.instance_uid(), object_index);
            if let Some(package_uid) = bo.package_uid() {
                uid_to_objects.insert(*package_uid, object_index);
            }
            objects.push(object);
        }

        Ok(HeaderPartition {
            partition_pack,
            primer_pack,
            bos,
            uid_to_bos,
            objects,
            uid_to_objects,
        })
    }

    /// The partition pack that opened this partition.
    pub fn partition_pack(&self) -> &PartitionPack {
        &self.partition_pack
    }

    /// The primer pack of this partition.
    pub fn primer_pack(&self) -> &PrimerPack {
        &self.primer_pack
    }

    /// The sole Preface, or `None` if materialization produced none.
    pub fn preface(&self) -> Option<&Preface> {
        self.objects.iter().find_map(|o| match o {
            InterchangeObject::Preface(p) => Some(p),
            _ => None,
        })
    }

    /// All ContentStorage objects, in construction order.
    pub fn content_storage_list(&self) -> Vec<&ContentStorage> {
        self.objects
            .iter()
            .filter_map(|o| match o {
                InterchangeObject::ContentStorage(c) => Some(c),
                _ => None,
            })
            .collect()
    }

    /// All MaterialPackage objects, in construction order.
    pub fn material_packages(&self) -> Vec<&MaterialPackage> {
        self.objects
            .iter()
            .filter_map(|o| match o {
                InterchangeObject::MaterialPackage(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    /// All SourcePackage objects, in construction order.
    pub fn source_packages(&self) -> Vec<&SourcePackage> {
        self.objects
            .iter()
            .filter_map(|o| match o {
                InterchangeObject::SourcePackage(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    /// All EssenceContainerData objects, in construction order.
    pub fn essence_container_data_list(&self) -> Vec<&EssenceContainerData> {
        self.objects
            .iter()
            .filter_map(|o| match o {
                InterchangeObject::EssenceContainerData(e) => Some(e),
                _ => None,
            })
            .collect()
    }

    /// All WaveAudioEssenceDescriptor objects, in construction order.
    pub fn wave_audio_essence_descriptors(&self) -> Vec<&WaveAudioEssenceDescriptor> {
        self.objects
            .iter()
            .filter_map(|o| match o {
                InterchangeObject::WaveAudioEssenceDescriptor(d) => Some(d),
                _ => None,
            })
            .collect()
    }

    /// All AudioChannelLabelSubDescriptor objects, in construction order.
    pub fn audio_channel_label_sub_descriptors(&self) -> Vec<&AudioChannelLabelSubDescriptor> {
        self.objects
            .iter()
            .filter_map(|o| match o {
                InterchangeObject::AudioChannelLabelSubDescriptor(d) => Some(d),
                _ => None,
            })
            .collect()
    }

    /// All SoundFieldGroupLabelSubDescriptor objects, in construction order.
    pub fn sound_field_group_label_sub_descriptors(
        &self,
    ) -> Vec<&SoundFieldGroupLabelSubDescriptor> {
        self.objects
            .iter()
            .filter_map(|o| match o {
                InterchangeObject::SoundFieldGroupLabelSubDescriptor(d) => Some(d),
                _ => None,
            })
            .collect()
    }

    /// Whether any WaveAudioEssenceDescriptor was materialized.
    pub fn has_wave_audio_essence_descriptor(&self) -> bool {
        self.has_kind(SetKind::WaveAudioEssenceDescriptor)
    }

    /// Whether any CDCIPictureEssenceDescriptor was materialized.
    pub fn has_cdci_picture_essence_descriptor(&self) -> bool {
        self.has_kind(SetKind::CdciPictureEssenceDescriptor)
    }

    /// Whether any RGBAPictureEssenceDescriptor was materialized.
    pub fn has_rgba_picture_essence_descriptor(&self) -> bool {
        self.has_kind(SetKind::RgbaPictureEssenceDescriptor)
    }

    /// Whether any PHDRMetaDataTrackSubDescriptor was materialized.
    pub fn has_phdr_metadata_track_sub_descriptor(&self) -> bool {
        self.has_kind(SetKind::PhdrMetaDataTrackSubDescriptor)
    }

    /// Whether any AudioChannelLabelSubDescriptor was materialized.
    pub fn has_audio_channel_label_sub_descriptors(&self) -> bool {
        self.has_kind(SetKind::AudioChannelLabelSubDescriptor)
    }

    /// Whether any SoundFieldGroupLabelSubDescriptor was materialized.
    pub fn has_sound_field_group_label_sub_descriptor(&self) -> bool {
        self.has_kind(SetKind::SoundFieldGroupLabelSubDescriptor)
    }

    fn has_kind(&self, kind: SetKind) -> bool {
        self.objects.iter().any(|o| o.kind() == kind)
    }

    /// Typed lookup of a TimelineTrack by UID.
    pub fn timeline_track(&self, uid: &MxfUid) -> Option<&TimelineTrack> {
        match self.object(uid) {
            Some(InterchangeObject::TimelineTrack(t)) => Some(t),
            _ => None,
        }
    }

    /// Typed lookup of a Sequence by UID.
    pub fn sequence(&self, uid: &MxfUid) -> Option<&Sequence> {
        match self.object(uid) {
            Some(InterchangeObject::Sequence(s)) => Some(s),
            _ => None,
        }
    }

    /// Typed lookup of a SourceClip by UID.
    pub fn source_clip(&self, uid: &MxfUid) -> Option<&SourceClip> {
        match self.object(uid) {
            Some(InterchangeObject::SourceClip(c)) => Some(c),
            _ => None,
        }
    }

    /// Typed lookup of a MaterialPackage by instance or package UID.
    pub fn material_package(&self, uid: &MxfUid) -> Option<&MaterialPackage> {
        match self.object(uid) {
            Some(InterchangeObject::MaterialPackage(p)) => Some(p),
            _ => None,
        }
    }

    /// Typed lookup of a SourcePackage by instance or package UID.
    pub fn source_package(&self, uid: &MxfUid) -> Option<&SourcePackage> {
        match self.object(uid) {
            Some(InterchangeObject::SourcePackage(p)) => Some(p),
            _ => None,
        }
    }

    /// Typed lookup of an EssenceContainerData by UID.
    pub fn essence_container_data(&self, uid: &MxfUid) -> Option<&EssenceContainerData> {
        match self.object(uid) {
            Some(InterchangeObject::EssenceContainerData(e)) => Some(e),
            _ => None,
        }
    }

    /// Any rich object by instance UID (packages also by package UID).
    pub fn object(&self, uid: &MxfUid) -> Option<&InterchangeObject> {
        self.uid_to_objects.get(uid).map(|&i| &self.objects[i])
    }

    /// All rich objects, in construction order.
    pub fn objects(&self) -> &[InterchangeObject] {
        &self.objects
    }

    /// Any byte object by instance UID (packages also by package UID).
    pub fn bo(&self, uid: &MxfUid) -> Option<&InterchangeObjectBO> {
        self.uid_to_bos.get(uid).map(|&i| &self.bos[i])
    }

    /// Byte objects of one structural set class, in decode order.
    pub fn structural_metadata(&self, kind: SetKind) -> Vec<&InterchangeObjectBO> {
        self.bos.iter().filter(|b| b.kind() == kind).collect()
    }

    /// The essence descriptor byte objects referenced by each SourcePackage.
    pub fn essence_descriptors(&self) -> Vec<&InterchangeObjectBO> {
        let mut descriptors = Vec::new();
        for bo in self.bos.iter().filter(|b| b.kind() == SetKind::SourcePackage) {
            let Some(descriptor_uid) = bo.descriptor_uid() else {
                warn!(package = %bo.instance_uid(), "source package has no descriptor reference");
                continue;
            };
            match self.uid_to_bos.get(descriptor_uid) {
                Some(&i) => descriptors.push(&self.bos[i]),
                None => warn!(
                    descriptor = %descriptor_uid,
                    "descriptor reference does not resolve within the partition"
                ),
            }
        }
        descriptors
    }

    /// All sub-descriptor byte objects referenced by the essence
    /// descriptors of the source packages.
    pub fn sub_descriptors(&self) -> Vec<&InterchangeObjectBO> {
        self.essence_descriptors()
            .into_iter()
            .flat_map(|d| self.sub_descriptors_of(d))
            .collect()
    }

    /// The sub-descriptor byte objects referenced by one essence descriptor.
    pub fn sub_descriptors_of(&self, descriptor: &InterchangeObjectBO) -> Vec<&InterchangeObjectBO> {
        let Some(batch) = descriptor.sub_descriptor_refs() else {
            return Vec::new();
        };
        batch
            .items
            .iter()
            .filter_map(|uid| self.uid_to_bos.get(uid).map(|&i| &self.bos[i]))
            .collect()
    }

    /// Largest per-track duration sum over the timeline tracks of the first
    /// MaterialPackage.
    ///
    /// Component durations are resolved through the byte object map;
    /// components absent from the partition are skipped. Returns `None`
    /// when there is no MaterialPackage.
    pub fn essence_duration(&self) -> Option<i64> {
        let material_package = *self.material_packages().first()?;
        let mut max_duration = 0i64;
        for track_uid in material_package.track_uids() {
            let Some(track) = self.timeline_track(track_uid) else {
                continue;
            };
            let Some(sequence) = track.sequence_uid().and_then(|uid| self.sequence(uid)) else {
                continue;
            };
            let mut duration = 0i64;
            for component_uid in sequence.component_uids() {
                if let Some(component) = self.bo(component_uid) {
                    if let Some(d) = component.structural_component_duration() {
                        duration += d;
                    }
                }
            }
            if duration > max_duration {
                max_duration = duration;
            }
        }
        Some(max_duration)
    }
}

/// Build one rich object from its byte object and its already-materialized
/// dependents.
fn build_object(
    bo: &InterchangeObjectBO,
    depends: &[usize],
    bos: &[InterchangeObjectBO],
    objects: &[InterchangeObject],
    uid_to_objects: &HashMap<MxfUid, usize>,
) -> Result<InterchangeObject> {
    // Dependents in graph order; all were materialized by the sort.
    let dep_object = |dep_index: usize| {
        uid_to_objects
            .get(bos[dep_index].instance_uid())
            .map(|&i| &objects[i])
    };
    // Filter a BO-declared reference list down to materialized objects of
    // one classification, preserving the declared order.
    let classified = |uids: &[MxfUid], pred: fn(&InterchangeObject) -> bool| -> Vec<MxfUid> {
        uids.iter()
            .filter(|uid| {
                uid_to_objects
                    .get(*uid)
                    .map(|&i| pred(&objects[i]))
                    .unwrap_or(false)
            })
            .copied()
            .collect()
    };
    let last_dep_matching = |pred: fn(&InterchangeObject) -> bool| -> Option<MxfUid> {
        let mut found = None;
        for &dep_index in depends {
            if let Some(object) = dep_object(dep_index) {
                if pred(object) {
                    found = Some(*object.instance_uid());
                }
            }
        }
        found
    };

    let object = match bo {
        InterchangeObjectBO::Preface(p) => {
            let primary_package = last_dep_matching(InterchangeObject::is_generic_package);
            let content_storage =
                last_dep_matching(|o| matches!(o, InterchangeObject::ContentStorage(_)));
            InterchangeObject::Preface(Preface::new(p.clone(), primary_package, content_storage))
        }
        InterchangeObjectBO::ContentStorage(c) => {
            let packages = classified(c.package_uids(), InterchangeObject::is_generic_package);
            let essence_container_data = classified(c.essence_container_data_uids(), |o| {
                matches!(o, InterchangeObject::EssenceContainerData(_))
            });
            InterchangeObject::ContentStorage(ContentStorage::new(
                c.clone(),
                packages,
                essence_container_data,
            ))
        }
        InterchangeObjectBO::MaterialPackage(p) => {
            let tracks = classified(p.package.track_uids(), InterchangeObject::is_generic_track);
            InterchangeObject::MaterialPackage(MaterialPackage::new(p.clone(), tracks))
        }
        InterchangeObjectBO::SourcePackage(p) => {
            let tracks = classified(p.package.track_uids(), InterchangeObject::is_generic_track);
            let descriptor = last_dep_matching(InterchangeObject::is_generic_descriptor);
            if p.descriptor.is_some() && descriptor.is_none() {
                warn!(
                    package = %p.core.instance_uid,
                    "source package descriptor reference did not materialize"
                );
            }
            InterchangeObject::SourcePackage(SourcePackage::new(p.clone(), tracks, descriptor))
        }
        InterchangeObjectBO::EssenceContainerData(e) => {
            let linked_package = last_dep_matching(InterchangeObject::is_generic_package);
            InterchangeObject::EssenceContainerData(EssenceContainerData::new(
                e.clone(),
                linked_package,
            ))
        }
        InterchangeObjectBO::TimelineTrack(t) => {
            // The sequence is classified once, after all dependents are
            // collected.
            let sequence = last_dep_matching(|o| matches!(o, InterchangeObject::Sequence(_)));
            InterchangeObject::TimelineTrack(TimelineTrack::new(t.clone(), sequence))
        }
        InterchangeObjectBO::Sequence(s) => {
            let components = classified(
                s.component_uids(),
                InterchangeObject::is_structural_component,
            );
            InterchangeObject::Sequence(Sequence::new(s.clone(), components))
        }
        InterchangeObjectBO::SourceClip(c) => {
            let source_package = last_dep_matching(InterchangeObject::is_generic_package);
            InterchangeObject::SourceClip(SourceClip::new(c.clone(), source_package))
        }
        InterchangeObjectBO::CdciPictureEssenceDescriptor(d) => {
            InterchangeObject::CdciPictureEssenceDescriptor(CdciPictureEssenceDescriptor::new(
                d.clone(),
            ))
        }
        InterchangeObjectBO::RgbaPictureEssenceDescriptor(d) => {
            InterchangeObject::RgbaPictureEssenceDescriptor(RgbaPictureEssenceDescriptor::new(
                d.clone(),
            ))
        }
        InterchangeObjectBO::WaveAudioEssenceDescriptor(d) => {
            if !depends.is_empty() {
                let recognized = depends.iter().any(|&dep_index| {
                    dep_object(dep_index).is_some_and(|o| {
                        matches!(
                            o,
                            InterchangeObject::AudioChannelLabelSubDescriptor(_)
                                | InterchangeObject::SoundFieldGroupLabelSubDescriptor(_)
                        )
                    })
                });
                if !recognized {
                    return Err(MxfError::InvalidDescriptor(
                        "WaveAudioEssenceDescriptor has dependencies, but none is an \
                         AudioChannelLabelSubDescriptor or SoundFieldGroupLabelSubDescriptor"
                            .into(),
                    ));
                }
            }
            InterchangeObject::WaveAudioEssenceDescriptor(WaveAudioEssenceDescriptor::new(
                d.clone(),
            ))
        }
        InterchangeObjectBO::AudioChannelLabelSubDescriptor(d) => {
            InterchangeObject::AudioChannelLabelSubDescriptor(AudioChannelLabelSubDescriptor::new(
                d.clone(),
            ))
        }
        InterchangeObjectBO::SoundFieldGroupLabelSubDescriptor(d) => {
            InterchangeObject::SoundFieldGroupLabelSubDescriptor(
                SoundFieldGroupLabelSubDescriptor::new(d.clone()),
            )
        }
        InterchangeObjectBO::Jpeg2000PictureSubDescriptor(d) => {
            InterchangeObject::Jpeg2000PictureSubDescriptor(Jpeg2000PictureSubDescriptor::new(
                d.clone(),
            ))
        }
        InterchangeObjectBO::PhdrMetaDataTrackSubDescriptor(d) => {
            InterchangeObject::PhdrMetaDataTrackSubDescriptor(PhdrMetaDataTrackSubDescriptor::new(
                d.clone(),
            ))
        }
    };
    Ok(object)
}

impl fmt::Display for HeaderPartition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "================== HeaderPartition ======================")?;
        writeln!(
            f,
            "partition pack: {:?}, {:?}, {:?}",
            self.partition_pack.kind, self.partition_pack.status, self.partition_pack.completeness
        )?;
        writeln!(f, "primer pack: {} local tags", self.primer_pack.len())?;
        let mut counts: Vec<(SetKind, usize)> = Vec::new();
        for object in &self.objects {
            match counts.iter_mut().find(|(k, _)| *k == object.kind()) {
                Some((_, n)) => *n += 1,
                None => counts.push((object.kind(), 1)),
            }
        }
        for (kind, n) in counts {
            writeln!(f, "{}: {}", kind.name(), n)?;
        }
        Ok(())
    }
}
