//! MXF Header Partition parser (SMPTE ST 377-1 / ST 2067-5)
//!
//! This crate parses the opening partition of an MXF file into an immutable
//! object model: the partition pack, the primer pack, and the graph of
//! structural metadata sets describing packages, tracks, sequences, clips,
//! and essence descriptors. It targets the IMF Essence Component profile,
//! which constrains the header partition to byte offset 0.
//!
//! # Features
//!
//! - KLV (Key-Length-Value) framing with BER lengths
//! - Primer pack local-tag resolution
//! - Structural metadata set decoding into typed byte objects
//! - Strong-reference graph resolution with cycle detection
//! - Query facade over the materialized object graph
//!
//! # Example
//!
//! ```no_run
//! use mxf_header::{ErrorLog, HeaderPartition, SliceSource};
//!
//! let data = std::fs::read("video.mxf").unwrap();
//! let mut source = SliceSource::new(&data);
//! let mut log = ErrorLog::new();
//!
//! let header = HeaderPartition::parse(&mut source, 0, data.len() as u64, &mut log).unwrap();
//! println!("material packages: {}", header.material_packages().len());
//! ```

mod diagnostics;
mod error;
mod header;
mod klv;
mod object;
mod partition;
mod primer;
mod resolver;
mod sets;
mod source;
mod types;
mod ul;

pub use diagnostics::{ErrorKind, ErrorLog, LogEntry, Severity};
pub use error::{MxfError, Result};
pub use header::HeaderPartition;
pub use klv::{ber_length_size, decode_ber_length, encode_ber_length, KlvHeader};
pub use object::{
    AudioChannelLabelSubDescriptor, CdciPictureEssenceDescriptor, ContentStorage,
    EssenceContainerData, InterchangeObject, Jpeg2000PictureSubDescriptor, MaterialPackage,
    PhdrMetaDataTrackSubDescriptor, Preface, RgbaPictureEssenceDescriptor, Sequence,
    SoundFieldGroupLabelSubDescriptor, SourceClip, SourcePackage, TimelineTrack,
    WaveAudioEssenceDescriptor,
};
pub use partition::{PartitionCompleteness, PartitionKind, PartitionPack, PartitionStatus};
pub use primer::PrimerPack;
pub use sets::{
    AudioChannelLabelSubDescriptorBO, CdciPictureEssenceDescriptorBO, ContentStorageBO,
    EssenceContainerDataBO, FileDescriptorFields, GenericPackageFields, InterchangeObjectBO,
    Jpeg2000PictureSubDescriptorBO, MaterialPackageBO, McaLabelFields,
    PhdrMetaDataTrackSubDescriptorBO, PictureEssenceFields, PrefaceBO,
    RgbaPictureEssenceDescriptorBO, SequenceBO, SetCore, SetKind, SoundEssenceFields,
    SoundFieldGroupLabelSubDescriptorBO, SourceClipBO, SourcePackageBO,
    StructuralComponentFields, TimelineTrackBO, WaveAudioEssenceDescriptorBO,
};
pub use source::{ByteSource, SliceSource};
pub use types::{MxfTimestamp, MxfUid, Rational, RefBatch, UlBatch};
pub use ul::{items, labels, UniversalLabel, UL};
