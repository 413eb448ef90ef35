//! End-to-end tests over synthetic header partition bytes.

use mxf_header::{
    encode_ber_length, labels, items, ErrorKind, ErrorLog, HeaderPartition, InterchangeObject,
    MxfError, MxfUid, Severity, SetKind, SliceSource,
};

fn be32(v: u32) -> Vec<u8> {
    v.to_be_bytes().to_vec()
}

fn be64(v: i64) -> Vec<u8> {
    v.to_be_bytes().to_vec()
}

fn uid(n: u8) -> [u8; 16] {
    [n; 16]
}

fn umid(n: u8) -> [u8; 32] {
    [n; 32]
}

/// One KLV triplet: 16-byte key, canonical BER length, value.
fn klv(key: [u8; 16], value: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&key);
    out.extend_from_slice(&encode_ber_length(value.len() as u64));
    out.extend_from_slice(value);
    out
}

fn partition_pack() -> Vec<u8> {
    let mut value = Vec::new();
    value.extend_from_slice(&1u16.to_be_bytes()); // major
    value.extend_from_slice(&3u16.to_be_bytes()); // minor
    value.extend_from_slice(&1u32.to_be_bytes()); // kag
    value.extend_from_slice(&0u64.to_be_bytes()); // this partition
    value.extend_from_slice(&0u64.to_be_bytes()); // previous
    value.extend_from_slice(&0u64.to_be_bytes()); // footer
    value.extend_from_slice(&0u64.to_be_bytes()); // header byte count
    value.extend_from_slice(&0u64.to_be_bytes()); // index byte count
    value.extend_from_slice(&0u32.to_be_bytes()); // index sid
    value.extend_from_slice(&0u64.to_be_bytes()); // body offset
    value.extend_from_slice(&0u32.to_be_bytes()); // body sid
    value.extend_from_slice(&labels::OP1A);
    value.extend_from_slice(&0u32.to_be_bytes()); // essence container count
    value.extend_from_slice(&16u32.to_be_bytes()); // item size
    klv(labels::HEADER_PARTITION_CLOSED_COMPLETE, &value)
}

/// Primer covering every local tag the tests use.
fn standard_primer_entries() -> Vec<(u16, [u8; 16])> {
    vec![
        (0x3C0A, items::INSTANCE_UID),
        (0x0102, items::GENERATION_UID),
        (0x3B03, items::CONTENT_STORAGE_REF),
        (0x3B08, items::PRIMARY_PACKAGE),
        (0x1901, items::CS_PACKAGES),
        (0x1902, items::CS_ESSENCE_CONTAINER_DATA),
        (0x2701, items::LINKED_PACKAGE_UID),
        (0x3F07, items::BODY_SID),
        (0x4401, items::PACKAGE_UID),
        (0x4403, items::PACKAGE_TRACKS),
        (0x4701, items::PACKAGE_DESCRIPTOR),
        (0x4801, items::TRACK_ID),
        (0x4804, items::TRACK_NUMBER),
        (0x4B01, items::EDIT_RATE),
        (0x4803, items::TRACK_SEQUENCE),
        (0x0201, items::DATA_DEFINITION),
        (0x0202, items::DURATION),
        (0x1001, items::STRUCTURAL_COMPONENTS),
        (0x1101, items::SOURCE_PACKAGE_ID),
        (0x1201, items::START_POSITION),
        (0x3D03, items::AUDIO_SAMPLING_RATE),
        (0x3D07, items::CHANNEL_COUNT),
        (0x8000, items::SUB_DESCRIPTORS),
    ]
}

fn primer_pack() -> Vec<u8> {
    let entries = standard_primer_entries();
    let mut value = Vec::new();
    value.extend_from_slice(&(entries.len() as u32).to_be_bytes());
    value.extend_from_slice(&18u32.to_be_bytes());
    for (tag, ul) in entries {
        value.extend_from_slice(&tag.to_be_bytes());
        value.extend_from_slice(&ul);
    }
    klv(labels::PRIMER_PACK, &value)
}

/// Local set value from (tag, value) pairs.
fn local_set(fields: &[(u16, Vec<u8>)]) -> Vec<u8> {
    let mut value = Vec::new();
    for (tag, bytes) in fields {
        value.extend_from_slice(&tag.to_be_bytes());
        value.extend_from_slice(&(bytes.len() as u16).to_be_bytes());
        value.extend_from_slice(bytes);
    }
    value
}

fn ref_batch(refs: &[[u8; 16]]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&(refs.len() as u32).to_be_bytes());
    bytes.extend_from_slice(&16u32.to_be_bytes());
    for r in refs {
        bytes.extend_from_slice(r);
    }
    bytes
}

fn fill_item(len: usize) -> Vec<u8> {
    klv(labels::FILL_ITEM, &vec![0u8; len])
}

fn preface_set(instance: u8, primary: u8, content_storage: u8) -> Vec<u8> {
    klv(
        labels::PREFACE,
        &local_set(&[
            (0x3C0A, uid(instance).to_vec()),
            (0x3B08, uid(primary).to_vec()),
            (0x3B03, uid(content_storage).to_vec()),
        ]),
    )
}

fn content_storage_set(instance: u8, packages: &[[u8; 16]], ecd: &[[u8; 16]]) -> Vec<u8> {
    klv(
        labels::CONTENT_STORAGE,
        &local_set(&[
            (0x3C0A, uid(instance).to_vec()),
            (0x1901, ref_batch(packages)),
            (0x1902, ref_batch(ecd)),
        ]),
    )
}

fn material_package_set(instance: u8, package_umid: u8, tracks: &[[u8; 16]]) -> Vec<u8> {
    klv(
        labels::MATERIAL_PACKAGE,
        &local_set(&[
            (0x3C0A, uid(instance).to_vec()),
            (0x4401, umid(package_umid).to_vec()),
            (0x4403, ref_batch(tracks)),
        ]),
    )
}

fn timeline_track_set(instance: u8, track_id: u32, sequence: u8) -> Vec<u8> {
    let mut edit_rate = Vec::new();
    edit_rate.extend_from_slice(&24i32.to_be_bytes());
    edit_rate.extend_from_slice(&1i32.to_be_bytes());
    klv(
        labels::TIMELINE_TRACK,
        &local_set(&[
            (0x3C0A, uid(instance).to_vec()),
            (0x4801, be32(track_id)),
            (0x4B01, edit_rate),
            (0x4803, uid(sequence).to_vec()),
        ]),
    )
}

fn sequence_set(instance: u8, duration: i64, components: &[[u8; 16]]) -> Vec<u8> {
    klv(
        labels::SEQUENCE,
        &local_set(&[
            (0x3C0A, uid(instance).to_vec()),
            (0x0202, be64(duration)),
            (0x1001, ref_batch(components)),
        ]),
    )
}

fn source_clip_set(instance: u8, duration: i64, source_package_umid: u8) -> Vec<u8> {
    klv(
        labels::SOURCE_CLIP,
        &local_set(&[
            (0x3C0A, uid(instance).to_vec()),
            (0x0202, be64(duration)),
            (0x1201, be64(0)),
            (0x1101, umid(source_package_umid).to_vec()),
        ]),
    )
}

fn parse(data: &[u8], log: &mut ErrorLog) -> mxf_header::Result<HeaderPartition> {
    let mut source = SliceSource::new(data);
    HeaderPartition::parse(&mut source, 0, data.len() as u64, log)
}

#[test]
fn minimal_valid_header() {
    let mut data = partition_pack();
    data.extend(primer_pack());
    data.extend(preface_set(0x01, 0x02, 0x03));
    data.extend(content_storage_set(0x03, &[uid(0x02)], &[]));
    data.extend(material_package_set(0x02, 0x10, &[]));

    let mut log = ErrorLog::new();
    let header = parse(&data, &mut log).unwrap();

    assert!(header.preface().is_some());
    assert_eq!(header.content_storage_list().len(), 1);
    assert_eq!(header.material_packages().len(), 1);
    assert_eq!(header.source_packages().len(), 0);
    assert_eq!(header.essence_duration(), Some(0));
    assert_eq!(log.fatal_count(), 0);

    // Dual-key lookup: instance UID and package UMID reach the same package
    let by_instance = header.material_package(&MxfUid::from_ul(uid(0x02))).unwrap();
    let by_package = header
        .material_package(&MxfUid::from_umid(umid(0x10)))
        .unwrap();
    assert_eq!(by_instance.package_uid(), by_package.package_uid());

    // The preface saw both of its dependents
    let preface = header.preface().unwrap();
    assert_eq!(preface.primary_package_uid(), Some(&MxfUid::from_ul(uid(0x02))));
    assert_eq!(preface.content_storage_uid(), Some(&MxfUid::from_ul(uid(0x03))));
}

#[test]
fn uid_index_is_consistent() {
    let mut data = partition_pack();
    data.extend(primer_pack());
    data.extend(preface_set(0x01, 0x02, 0x03));
    data.extend(content_storage_set(0x03, &[uid(0x02)], &[]));
    data.extend(material_package_set(0x02, 0x10, &[]));

    let mut log = ErrorLog::new();
    let header = parse(&data, &mut log).unwrap();

    for object in header.objects() {
        let looked_up = header.object(object.instance_uid()).unwrap();
        assert_eq!(looked_up.instance_uid(), object.instance_uid());
        if let Some(package_uid) = object.package_uid() {
            let by_package = header.object(package_uid).unwrap();
            assert_eq!(by_package.instance_uid(), object.instance_uid());
        }
    }
}

#[test]
fn construction_order_is_topological() {
    let mut data = partition_pack();
    data.extend(primer_pack());
    data.extend(preface_set(0x01, 0x02, 0x03));
    data.extend(content_storage_set(0x03, &[uid(0x02)], &[]));
    data.extend(material_package_set(0x02, 0x10, &[]));

    let mut log = ErrorLog::new();
    let header = parse(&data, &mut log).unwrap();

    let position = |kind: SetKind| {
        header
            .objects()
            .iter()
            .position(|o| o.kind() == kind)
            .unwrap()
    };
    assert!(position(SetKind::MaterialPackage) < position(SetKind::ContentStorage));
    assert!(position(SetKind::ContentStorage) < position(SetKind::Preface));
}

#[test]
fn header_partition_must_start_at_offset_zero() {
    let mut data = partition_pack();
    data.extend(primer_pack());
    data.extend(preface_set(0x01, 0x02, 0x03));

    let mut source = SliceSource::new(&data);
    let mut log = ErrorLog::new();
    let err = HeaderPartition::parse(&mut source, 4096, data.len() as u64, &mut log).unwrap_err();
    assert!(matches!(
        err,
        MxfError::UnexpectedOffset {
            expected: 0,
            actual: 4096
        }
    ));
}

#[test]
fn two_prefaces_are_fatal() {
    let mut data = partition_pack();
    data.extend(primer_pack());
    data.extend(preface_set(0x01, 0x02, 0x03));
    data.extend(preface_set(0x04, 0x02, 0x03));
    data.extend(content_storage_set(0x03, &[], &[]));
    data.extend(material_package_set(0x02, 0x10, &[]));

    let mut log = ErrorLog::new();
    let err = parse(&data, &mut log).unwrap_err();
    assert!(matches!(err, MxfError::ParseFailed { errors: 1 }));
    assert!(log
        .entries()
        .iter()
        .any(|e| e.severity == Severity::Fatal && e.kind == ErrorKind::MultiplePreface));
}

#[test]
fn missing_preface_is_fatal() {
    let mut data = partition_pack();
    data.extend(primer_pack());
    data.extend(material_package_set(0x02, 0x10, &[]));

    let mut log = ErrorLog::new();
    let err = parse(&data, &mut log).unwrap_err();
    assert!(matches!(err, MxfError::ParseFailed { .. }));
    assert!(log
        .entries()
        .iter()
        .any(|e| e.kind == ErrorKind::NoPreface));
}

#[test]
fn one_fill_before_primer_is_accepted() {
    let mut data = partition_pack();
    data.extend(fill_item(32));
    data.extend(primer_pack());
    data.extend(preface_set(0x01, 0x02, 0x03));
    data.extend(content_storage_set(0x03, &[uid(0x02)], &[]));
    data.extend(material_package_set(0x02, 0x10, &[]));

    let mut log = ErrorLog::new();
    let header = parse(&data, &mut log).unwrap();
    assert!(header.preface().is_some());
}

#[test]
fn second_fill_before_primer_is_fatal() {
    let mut data = partition_pack();
    data.extend(fill_item(32));
    data.extend(fill_item(32));
    data.extend(primer_pack());
    data.extend(preface_set(0x01, 0x02, 0x03));

    let mut log = ErrorLog::new();
    assert!(matches!(
        parse(&data, &mut log).unwrap_err(),
        MxfError::MissingPrimer(_)
    ));
}

#[test]
fn non_fill_before_primer_is_fatal() {
    let mut data = partition_pack();
    data.extend(preface_set(0x01, 0x02, 0x03));
    data.extend(primer_pack());

    let mut log = ErrorLog::new();
    assert!(matches!(
        parse(&data, &mut log).unwrap_err(),
        MxfError::MissingPrimer(_)
    ));
}

#[test]
fn cyclic_strong_references_are_fatal() {
    let mut data = partition_pack();
    data.extend(primer_pack());
    data.extend(preface_set(0x01, 0x02, 0x03));
    // Two sequences whose component batches point at each other
    data.extend(sequence_set(0x0A, 0, &[uid(0x0B)]));
    data.extend(sequence_set(0x0B, 0, &[uid(0x0A)]));

    let mut log = ErrorLog::new();
    assert!(matches!(
        parse(&data, &mut log).unwrap_err(),
        MxfError::CyclicGraph
    ));
}

#[test]
fn essence_duration_is_max_over_tracks() {
    let mut data = partition_pack();
    data.extend(primer_pack());
    data.extend(preface_set(0x01, 0x02, 0x03));
    data.extend(content_storage_set(0x03, &[uid(0x02)], &[]));
    data.extend(material_package_set(0x02, 0x10, &[uid(0x21), uid(0x22)]));
    // Track 1: two clips of 24
    data.extend(timeline_track_set(0x21, 1, 0x31));
    data.extend(sequence_set(0x31, 48, &[uid(0x41), uid(0x42)]));
    data.extend(source_clip_set(0x41, 24, 0x77));
    data.extend(source_clip_set(0x42, 24, 0x77));
    // Track 2: one clip of 48
    data.extend(timeline_track_set(0x22, 2, 0x32));
    data.extend(sequence_set(0x32, 48, &[uid(0x43)]));
    data.extend(source_clip_set(0x43, 48, 0x77));

    let mut log = ErrorLog::new();
    let header = parse(&data, &mut log).unwrap();

    assert_eq!(header.essence_duration(), Some(48));

    // Track and sequence lookups are typed
    let track = header.timeline_track(&MxfUid::from_ul(uid(0x21))).unwrap();
    let sequence = header.sequence(track.sequence_uid().unwrap()).unwrap();
    assert_eq!(sequence.component_uids().len(), 2);
    assert!(header.sequence(&MxfUid::from_ul(uid(0x21))).is_none());
    assert!(header.source_clip(&MxfUid::from_ul(uid(0x41))).is_some());
}

#[test]
fn unknown_structural_set_is_skipped_with_warning() {
    let mut unknown_key = labels::PREFACE;
    unknown_key[14] = 0x7E; // not registered
    let mut data = partition_pack();
    data.extend(primer_pack());
    data.extend(preface_set(0x01, 0x02, 0x03));
    data.extend(klv(unknown_key, &[0u8; 12]));
    data.extend(content_storage_set(0x03, &[], &[]));

    let mut log = ErrorLog::new();
    let header = parse(&data, &mut log).unwrap();

    assert!(header.preface().is_some());
    assert!(log
        .entries()
        .iter()
        .any(|e| e.kind == ErrorKind::UnknownStructuralSet && e.severity == Severity::Warn));
}

#[test]
fn unknown_local_tag_is_skipped_with_warning() {
    let mut data = partition_pack();
    data.extend(primer_pack());
    data.extend(klv(
        labels::PREFACE,
        &local_set(&[
            (0x3C0A, uid(0x01).to_vec()),
            (0x3B03, uid(0x03).to_vec()),
            (0x9999, vec![1, 2, 3]), // not in primer
        ]),
    ));
    data.extend(content_storage_set(0x03, &[], &[]));

    let mut log = ErrorLog::new();
    let header = parse(&data, &mut log).unwrap();

    assert!(header.preface().is_some());
    assert!(log
        .entries()
        .iter()
        .any(|e| e.kind == ErrorKind::UnknownLocalTag));
}

#[test]
fn fill_items_between_sets_are_skipped() {
    let mut data = partition_pack();
    data.extend(primer_pack());
    data.extend(preface_set(0x01, 0x02, 0x03));
    data.extend(fill_item(64));
    data.extend(content_storage_set(0x03, &[uid(0x02)], &[]));
    data.extend(material_package_set(0x02, 0x10, &[]));

    let mut log = ErrorLog::new();
    let header = parse(&data, &mut log).unwrap();
    assert_eq!(header.content_storage_list().len(), 1);
}

fn wave_audio_set(instance: u8, sub_descriptors: &[[u8; 16]]) -> Vec<u8> {
    let mut rate = Vec::new();
    rate.extend_from_slice(&48000i32.to_be_bytes());
    rate.extend_from_slice(&1i32.to_be_bytes());
    let mut fields = vec![
        (0x3C0A, uid(instance).to_vec()),
        (0x3D03, rate),
        (0x3D07, be32(2)),
    ];
    if !sub_descriptors.is_empty() {
        fields.push((0x8000, ref_batch(sub_descriptors)));
    }
    klv(labels::WAVE_AUDIO_DESCRIPTOR, &local_set(&fields))
}

fn audio_channel_label_set(instance: u8) -> Vec<u8> {
    klv(
        labels::AUDIO_CHANNEL_LABEL_SUB_DESCRIPTOR,
        &local_set(&[(0x3C0A, uid(instance).to_vec())]),
    )
}

fn jpeg2000_sub_descriptor_set(instance: u8) -> Vec<u8> {
    klv(
        labels::JPEG2000_PICTURE_SUB_DESCRIPTOR,
        &local_set(&[(0x3C0A, uid(instance).to_vec())]),
    )
}

fn source_package_set(
    instance: u8,
    package_umid: u8,
    tracks: &[[u8; 16]],
    descriptor: u8,
) -> Vec<u8> {
    klv(
        labels::SOURCE_PACKAGE,
        &local_set(&[
            (0x3C0A, uid(instance).to_vec()),
            (0x4401, umid(package_umid).to_vec()),
            (0x4403, ref_batch(tracks)),
            (0x4701, uid(descriptor).to_vec()),
        ]),
    )
}

fn essence_container_data_set(instance: u8, linked_package_umid: u8) -> Vec<u8> {
    klv(
        labels::ESSENCE_CONTAINER_DATA,
        &local_set(&[
            (0x3C0A, uid(instance).to_vec()),
            (0x2701, umid(linked_package_umid).to_vec()),
            (0x3F07, be32(1)),
        ]),
    )
}

#[test]
fn audio_source_package_with_descriptors() {
    let mut data = partition_pack();
    data.extend(primer_pack());
    data.extend(preface_set(0x01, 0x02, 0x03));
    data.extend(content_storage_set(
        0x03,
        &[uid(0x02), uid(0x05)],
        &[uid(0x06)],
    ));
    data.extend(material_package_set(0x02, 0x10, &[]));
    data.extend(source_package_set(0x05, 0x11, &[], 0x07));
    data.extend(essence_container_data_set(0x06, 0x11));
    data.extend(wave_audio_set(0x07, &[uid(0x08)]));
    data.extend(audio_channel_label_set(0x08));

    let mut log = ErrorLog::new();
    let header = parse(&data, &mut log).unwrap();

    assert!(header.has_wave_audio_essence_descriptor());
    assert!(header.has_audio_channel_label_sub_descriptors());
    assert!(!header.has_cdci_picture_essence_descriptor());

    // essence_descriptors dereferences the source package's DescriptorUID
    let descriptors = header.essence_descriptors();
    assert_eq!(descriptors.len(), 1);
    assert_eq!(descriptors[0].kind(), SetKind::WaveAudioEssenceDescriptor);

    // sub_descriptors flattens the descriptor's reference batch
    let subs = header.sub_descriptors();
    assert_eq!(subs.len(), 1);
    assert_eq!(subs[0].kind(), SetKind::AudioChannelLabelSubDescriptor);

    // The essence container data links back to the source package
    let ecd = header
        .essence_container_data(&MxfUid::from_ul(uid(0x06)))
        .unwrap();
    let linked = ecd.linked_package_uid().unwrap();
    assert_eq!(
        header.source_package(linked).unwrap().package_uid(),
        &MxfUid::from_umid(umid(0x11))
    );

    // The source package resolved its descriptor
    let source_package = header.source_package(&MxfUid::from_ul(uid(0x05))).unwrap();
    assert_eq!(
        source_package.descriptor_uid(),
        Some(&MxfUid::from_ul(uid(0x07)))
    );
}

#[test]
fn wave_audio_with_unrecognized_sub_descriptors_is_invalid() {
    let mut data = partition_pack();
    data.extend(primer_pack());
    data.extend(preface_set(0x01, 0x02, 0x03));
    data.extend(wave_audio_set(0x07, &[uid(0x09)]));
    data.extend(jpeg2000_sub_descriptor_set(0x09));

    let mut log = ErrorLog::new();
    assert!(matches!(
        parse(&data, &mut log).unwrap_err(),
        MxfError::InvalidDescriptor(_)
    ));
}

#[test]
fn structural_metadata_query_returns_byte_objects() {
    let mut data = partition_pack();
    data.extend(primer_pack());
    data.extend(preface_set(0x01, 0x02, 0x03));
    data.extend(content_storage_set(0x03, &[uid(0x02)], &[]));
    data.extend(material_package_set(0x02, 0x10, &[]));

    let mut log = ErrorLog::new();
    let header = parse(&data, &mut log).unwrap();

    assert_eq!(header.structural_metadata(SetKind::Preface).len(), 1);
    assert_eq!(
        header.structural_metadata(SetKind::MaterialPackage).len(),
        1
    );
    assert_eq!(header.structural_metadata(SetKind::SourceClip).len(), 0);
}

#[test]
fn display_summarizes_population() {
    let mut data = partition_pack();
    data.extend(primer_pack());
    data.extend(preface_set(0x01, 0x02, 0x03));
    data.extend(content_storage_set(0x03, &[uid(0x02)], &[]));
    data.extend(material_package_set(0x02, 0x10, &[]));

    let mut log = ErrorLog::new();
    let header = parse(&data, &mut log).unwrap();
    let rendered = header.to_string();

    assert!(rendered.contains("HeaderPartition"));
    assert!(rendered.contains("Preface: 1"));
    assert!(rendered.contains("MaterialPackage: 1"));
}

#[test]
fn objects_expose_variants() {
    let mut data = partition_pack();
    data.extend(primer_pack());
    data.extend(preface_set(0x01, 0x02, 0x03));
    data.extend(content_storage_set(0x03, &[uid(0x02)], &[]));
    data.extend(material_package_set(0x02, 0x10, &[]));

    let mut log = ErrorLog::new();
    let header = parse(&data, &mut log).unwrap();

    let storage = header.content_storage_list()[0];
    assert_eq!(storage.package_uids(), &[MxfUid::from_ul(uid(0x02))]);
    assert!(storage.essence_container_data_uids().is_empty());

    match header.object(&MxfUid::from_ul(uid(0x01))).unwrap() {
        InterchangeObject::Preface(_) => {}
        other => panic!("expected a Preface, got {:?}", other.kind()),
    }
}
