//! Byte objects for essence descriptors and sub-descriptors.
//!
//! The original class hierarchy (generic descriptor, file descriptor,
//! picture/sound specializations) is flattened into shared field groups
//! embedded by the concrete descriptor structs.

use super::{
    decode_bool, decode_i32_batch, decode_i64, decode_i8, decode_rational, decode_ref_batch,
    decode_u16, decode_u32, decode_u8, decode_uid, decode_ul, decode_utf16_string, LocalSet,
    SetCore, SetCoreBuilder, SetKind,
};
use crate::error::Result;
use crate::types::{MxfUid, Rational, RefBatch};
use crate::ul::{items, UniversalLabel};

/// Fields shared by all file descriptors.
#[derive(Debug, Clone, Default)]
pub struct FileDescriptorFields {
    pub linked_track_id: Option<u32>,
    pub sample_rate: Option<Rational>,
    pub container_duration: Option<i64>,
    pub essence_container: Option<UniversalLabel>,
    /// Strong references to sub-descriptor sets.
    pub sub_descriptors: Option<RefBatch>,
}

impl FileDescriptorFields {
    fn apply(&mut self, ul: &UniversalLabel, bytes: &[u8]) -> Result<bool> {
        match *ul.as_bytes() {
            items::LINKED_TRACK_ID => self.linked_track_id = Some(decode_u32(bytes)?),
            items::SAMPLE_RATE => self.sample_rate = Some(decode_rational(bytes)?),
            items::CONTAINER_DURATION => self.container_duration = Some(decode_i64(bytes)?),
            items::ESSENCE_CONTAINER => self.essence_container = Some(decode_ul(bytes)?),
            items::SUB_DESCRIPTORS => self.sub_descriptors = Some(decode_ref_batch(bytes)?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// Sub-descriptor instance UIDs in declaration order.
    pub fn sub_descriptor_uids(&self) -> &[MxfUid] {
        self.sub_descriptors
            .as_ref()
            .map(|b| b.items.as_slice())
            .unwrap_or(&[])
    }
}

/// Fields shared by picture essence descriptors.
#[derive(Debug, Clone, Default)]
pub struct PictureEssenceFields {
    pub frame_layout: Option<u8>,
    pub stored_width: Option<u32>,
    pub stored_height: Option<u32>,
    pub display_width: Option<u32>,
    pub display_height: Option<u32>,
    pub aspect_ratio: Option<Rational>,
    pub video_line_map: Option<Vec<i32>>,
    pub picture_essence_coding: Option<UniversalLabel>,
}

impl PictureEssenceFields {
    fn apply(&mut self, ul: &UniversalLabel, bytes: &[u8]) -> Result<bool> {
        match *ul.as_bytes() {
            items::FRAME_LAYOUT => self.frame_layout = Some(decode_u8(bytes)?),
            items::STORED_WIDTH => self.stored_width = Some(decode_u32(bytes)?),
            items::STORED_HEIGHT => self.stored_height = Some(decode_u32(bytes)?),
            items::DISPLAY_WIDTH => self.display_width = Some(decode_u32(bytes)?),
            items::DISPLAY_HEIGHT => self.display_height = Some(decode_u32(bytes)?),
            items::ASPECT_RATIO => self.aspect_ratio = Some(decode_rational(bytes)?),
            items::VIDEO_LINE_MAP => self.video_line_map = Some(decode_i32_batch(bytes)?),
            items::PICTURE_ESSENCE_CODING => {
                self.picture_essence_coding = Some(decode_ul(bytes)?)
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// Fields shared by sound essence descriptors.
#[derive(Debug, Clone, Default)]
pub struct SoundEssenceFields {
    pub audio_sampling_rate: Option<Rational>,
    pub locked: Option<bool>,
    pub audio_ref_level: Option<i8>,
    pub dial_norm: Option<i8>,
    pub channel_count: Option<u32>,
    pub quantization_bits: Option<u32>,
    pub sound_compression: Option<UniversalLabel>,
}

impl SoundEssenceFields {
    fn apply(&mut self, ul: &UniversalLabel, bytes: &[u8]) -> Result<bool> {
        match *ul.as_bytes() {
            items::AUDIO_SAMPLING_RATE => self.audio_sampling_rate = Some(decode_rational(bytes)?),
            items::LOCKED => self.locked = Some(decode_bool(bytes)?),
            items::AUDIO_REF_LEVEL => self.audio_ref_level = Some(decode_i8(bytes)?),
            items::DIAL_NORM => self.dial_norm = Some(decode_i8(bytes)?),
            items::CHANNEL_COUNT => self.channel_count = Some(decode_u32(bytes)?),
            items::QUANTIZATION_BITS => self.quantization_bits = Some(decode_u32(bytes)?),
            items::SOUND_COMPRESSION => self.sound_compression = Some(decode_ul(bytes)?),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// CDCI (component video) picture essence descriptor.
#[derive(Debug, Clone)]
pub struct CdciPictureEssenceDescriptorBO {
    pub core: SetCore,
    pub file: FileDescriptorFields,
    pub picture: PictureEssenceFields,
    pub component_depth: Option<u32>,
    pub horizontal_subsampling: Option<u32>,
    pub vertical_subsampling: Option<u32>,
    pub black_ref_level: Option<u32>,
    pub white_ref_level: Option<u32>,
    pub color_range: Option<u32>,
}

impl CdciPictureEssenceDescriptorBO {
    pub(crate) fn decode(set: LocalSet) -> Result<Self> {
        let mut core = SetCoreBuilder::new(SetKind::CdciPictureEssenceDescriptor);
        let mut file = FileDescriptorFields::default();
        let mut picture = PictureEssenceFields::default();
        let mut component_depth = None;
        let mut horizontal_subsampling = None;
        let mut vertical_subsampling = None;
        let mut black_ref_level = None;
        let mut white_ref_level = None;
        let mut color_range = None;

        for (ul, bytes) in set.items {
            if core.try_common(&ul, &bytes)?
                || file.apply(&ul, &bytes)?
                || picture.apply(&ul, &bytes)?
            {
                continue;
            }
            match *ul.as_bytes() {
                items::COMPONENT_DEPTH => component_depth = Some(decode_u32(&bytes)?),
                items::HORIZONTAL_SUBSAMPLING => {
                    horizontal_subsampling = Some(decode_u32(&bytes)?)
                }
                items::VERTICAL_SUBSAMPLING => vertical_subsampling = Some(decode_u32(&bytes)?),
                items::BLACK_REF_LEVEL => black_ref_level = Some(decode_u32(&bytes)?),
                items::WHITE_REF_LEVEL => white_ref_level = Some(decode_u32(&bytes)?),
                items::COLOR_RANGE => color_range = Some(decode_u32(&bytes)?),
                _ => core.unknown(ul, bytes),
            }
        }

        Ok(CdciPictureEssenceDescriptorBO {
            core: core.finish()?,
            file,
            picture,
            component_depth,
            horizontal_subsampling,
            vertical_subsampling,
            black_ref_level,
            white_ref_level,
            color_range,
        })
    }

    pub(crate) fn dependent_uids(&self) -> Vec<MxfUid> {
        self.file.sub_descriptor_uids().to_vec()
    }
}

/// RGBA picture essence descriptor.
#[derive(Debug, Clone)]
pub struct RgbaPictureEssenceDescriptorBO {
    pub core: SetCore,
    pub file: FileDescriptorFields,
    pub picture: PictureEssenceFields,
    pub component_max_ref: Option<u32>,
    pub component_min_ref: Option<u32>,
    pub pixel_layout: Option<Vec<u8>>,
}

impl RgbaPictureEssenceDescriptorBO {
    pub(crate) fn decode(set: LocalSet) -> Result<Self> {
        let mut core = SetCoreBuilder::new(SetKind::RgbaPictureEssenceDescriptor);
        let mut file = FileDescriptorFields::default();
        let mut picture = PictureEssenceFields::default();
        let mut component_max_ref = None;
        let mut component_min_ref = None;
        let mut pixel_layout = None;

        for (ul, bytes) in set.items {
            if core.try_common(&ul, &bytes)?
                || file.apply(&ul, &bytes)?
                || picture.apply(&ul, &bytes)?
            {
                continue;
            }
            match *ul.as_bytes() {
                items::COMPONENT_MAX_REF => component_max_ref = Some(decode_u32(&bytes)?),
                items::COMPONENT_MIN_REF => component_min_ref = Some(decode_u32(&bytes)?),
                items::PIXEL_LAYOUT => pixel_layout = Some(bytes),
                _ => core.unknown(ul, bytes),
            }
        }

        Ok(RgbaPictureEssenceDescriptorBO {
            core: core.finish()?,
            file,
            picture,
            component_max_ref,
            component_min_ref,
            pixel_layout,
        })
    }

    pub(crate) fn dependent_uids(&self) -> Vec<MxfUid> {
        self.file.sub_descriptor_uids().to_vec()
    }
}

/// Wave audio essence descriptor.
#[derive(Debug, Clone)]
pub struct WaveAudioEssenceDescriptorBO {
    pub core: SetCore,
    pub file: FileDescriptorFields,
    pub sound: SoundEssenceFields,
    pub block_align: Option<u16>,
    pub avg_bps: Option<u32>,
    pub sequence_offset: Option<u8>,
    pub channel_assignment: Option<UniversalLabel>,
}

impl WaveAudioEssenceDescriptorBO {
    pub(crate) fn decode(set: LocalSet) -> Result<Self> {
        let mut core = SetCoreBuilder::new(SetKind::WaveAudioEssenceDescriptor);
        let mut file = FileDescriptorFields::default();
        let mut sound = SoundEssenceFields::default();
        let mut block_align = None;
        let mut avg_bps = None;
        let mut sequence_offset = None;
        let mut channel_assignment = None;

        for (ul, bytes) in set.items {
            if core.try_common(&ul, &bytes)?
                || file.apply(&ul, &bytes)?
                || sound.apply(&ul, &bytes)?
            {
                continue;
            }
            match *ul.as_bytes() {
                items::BLOCK_ALIGN => block_align = Some(decode_u16(&bytes)?),
                items::AVG_BPS => avg_bps = Some(decode_u32(&bytes)?),
                items::SEQUENCE_OFFSET => sequence_offset = Some(decode_u8(&bytes)?),
                items::CHANNEL_ASSIGNMENT => channel_assignment = Some(decode_ul(&bytes)?),
                _ => core.unknown(ul, bytes),
            }
        }

        Ok(WaveAudioEssenceDescriptorBO {
            core: core.finish()?,
            file,
            sound,
            block_align,
            avg_bps,
            sequence_offset,
            channel_assignment,
        })
    }

    pub(crate) fn dependent_uids(&self) -> Vec<MxfUid> {
        self.file.sub_descriptor_uids().to_vec()
    }
}

/// Fields shared by the multichannel audio label sub-descriptors.
#[derive(Debug, Clone, Default)]
pub struct McaLabelFields {
    pub label_dictionary_id: Option<UniversalLabel>,
    pub link_id: Option<MxfUid>,
    pub tag_symbol: Option<String>,
    pub tag_name: Option<String>,
    pub channel_id: Option<u32>,
    pub spoken_language: Option<String>,
}

impl McaLabelFields {
    fn apply(&mut self, ul: &UniversalLabel, bytes: &[u8]) -> Result<bool> {
        match *ul.as_bytes() {
            items::MCA_LABEL_DICTIONARY_ID => self.label_dictionary_id = Some(decode_ul(bytes)?),
            items::MCA_LINK_ID => self.link_id = Some(decode_uid(bytes)?),
            items::MCA_TAG_SYMBOL => self.tag_symbol = Some(decode_utf16_string(bytes)?),
            items::MCA_TAG_NAME => self.tag_name = Some(decode_utf16_string(bytes)?),
            items::MCA_CHANNEL_ID => self.channel_id = Some(decode_u32(bytes)?),
            items::RFC5646_SPOKEN_LANGUAGE => {
                // Spoken language is ISO 7-bit text on the wire
                self.spoken_language =
                    Some(String::from_utf8_lossy(bytes).trim_end_matches('\0').to_string())
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// Audio channel label sub-descriptor (ST 377-4).
#[derive(Debug, Clone)]
pub struct AudioChannelLabelSubDescriptorBO {
    pub core: SetCore,
    pub mca: McaLabelFields,
    pub soundfield_group_link_id: Option<MxfUid>,
}

impl AudioChannelLabelSubDescriptorBO {
    pub(crate) fn decode(set: LocalSet) -> Result<Self> {
        let mut core = SetCoreBuilder::new(SetKind::AudioChannelLabelSubDescriptor);
        let mut mca = McaLabelFields::default();
        let mut soundfield_group_link_id = None;

        for (ul, bytes) in set.items {
            if core.try_common(&ul, &bytes)? || mca.apply(&ul, &bytes)? {
                continue;
            }
            match *ul.as_bytes() {
                items::SOUNDFIELD_GROUP_LINK_ID => {
                    soundfield_group_link_id = Some(decode_uid(&bytes)?)
                }
                _ => core.unknown(ul, bytes),
            }
        }

        Ok(AudioChannelLabelSubDescriptorBO {
            core: core.finish()?,
            mca,
            soundfield_group_link_id,
        })
    }
}

/// Sound field group label sub-descriptor (ST 377-4).
#[derive(Debug, Clone)]
pub struct SoundFieldGroupLabelSubDescriptorBO {
    pub core: SetCore,
    pub mca: McaLabelFields,
}

impl SoundFieldGroupLabelSubDescriptorBO {
    pub(crate) fn decode(set: LocalSet) -> Result<Self> {
        let mut core = SetCoreBuilder::new(SetKind::SoundFieldGroupLabelSubDescriptor);
        let mut mca = McaLabelFields::default();

        for (ul, bytes) in set.items {
            if core.try_common(&ul, &bytes)? || mca.apply(&ul, &bytes)? {
                continue;
            }
            core.unknown(ul, bytes);
        }

        Ok(SoundFieldGroupLabelSubDescriptorBO {
            core: core.finish()?,
            mca,
        })
    }
}

/// JPEG 2000 picture coding parameters sub-descriptor.
#[derive(Debug, Clone)]
pub struct Jpeg2000PictureSubDescriptorBO {
    pub core: SetCore,
    pub rsiz: Option<u16>,
    pub xsiz: Option<u32>,
    pub ysiz: Option<u32>,
    pub xo_siz: Option<u32>,
    pub yo_siz: Option<u32>,
    pub xt_siz: Option<u32>,
    pub yt_siz: Option<u32>,
    pub xto_siz: Option<u32>,
    pub yto_siz: Option<u32>,
    pub csiz: Option<u16>,
    pub picture_component_sizing: Option<Vec<u8>>,
    pub coding_style_default: Option<Vec<u8>>,
    pub quantization_default: Option<Vec<u8>>,
}

impl Jpeg2000PictureSubDescriptorBO {
    pub(crate) fn decode(set: LocalSet) -> Result<Self> {
        let mut core = SetCoreBuilder::new(SetKind::Jpeg2000PictureSubDescriptor);
        let mut rsiz = None;
        let mut xsiz = None;
        let mut ysiz = None;
        let mut xo_siz = None;
        let mut yo_siz = None;
        let mut xt_siz = None;
        let mut yt_siz = None;
        let mut xto_siz = None;
        let mut yto_siz = None;
        let mut csiz = None;
        let mut picture_component_sizing = None;
        let mut coding_style_default = None;
        let mut quantization_default = None;

        for (ul, bytes) in set.items {
            if core.try_common(&ul, &bytes)? {
                continue;
            }
            match *ul.as_bytes() {
                items::J2K_RSIZ => rsiz = Some(decode_u16(&bytes)?),
                items::J2K_XSIZ => xsiz = Some(decode_u32(&bytes)?),
                items::J2K_YSIZ => ysiz = Some(decode_u32(&bytes)?),
                items::J2K_XOSIZ => xo_siz = Some(decode_u32(&bytes)?),
                items::J2K_YOSIZ => yo_siz = Some(decode_u32(&bytes)?),
                items::J2K_XTSIZ => xt_siz = Some(decode_u32(&bytes)?),
                items::J2K_YTSIZ => yt_siz = Some(decode_u32(&bytes)?),
                items::J2K_XTOSIZ => xto_siz = Some(decode_u32(&bytes)?),
                items::J2K_YTOSIZ => yto_siz = Some(decode_u32(&bytes)?),
                items::J2K_CSIZ => csiz = Some(decode_u16(&bytes)?),
                items::J2K_PICTURE_COMPONENT_SIZING => picture_component_sizing = Some(bytes),
                items::J2K_CODING_STYLE_DEFAULT => coding_style_default = Some(bytes),
                items::J2K_QUANTIZATION_DEFAULT => quantization_default = Some(bytes),
                _ => core.unknown(ul, bytes),
            }
        }

        Ok(Jpeg2000PictureSubDescriptorBO {
            core: core.finish()?,
            rsiz,
            xsiz,
            ysiz,
            xo_siz,
            yo_siz,
            xt_siz,
            yt_siz,
            xto_siz,
            yto_siz,
            csiz,
            picture_component_sizing,
            coding_style_default,
            quantization_default,
        })
    }
}

/// PHDR metadata track sub-descriptor.
#[derive(Debug, Clone)]
pub struct PhdrMetaDataTrackSubDescriptorBO {
    pub core: SetCore,
    pub data_definition: Option<UniversalLabel>,
    pub source_track_id: Option<u32>,
    pub simple_payload_sid: Option<u32>,
}

impl PhdrMetaDataTrackSubDescriptorBO {
    pub(crate) fn decode(set: LocalSet) -> Result<Self> {
        let mut core = SetCoreBuilder::new(SetKind::PhdrMetaDataTrackSubDescriptor);
        let mut data_definition = None;
        let mut source_track_id = None;
        let mut simple_payload_sid = None;

        for (ul, bytes) in set.items {
            if core.try_common(&ul, &bytes)? {
                continue;
            }
            match *ul.as_bytes() {
                items::PHDR_DATA_DEFINITION => data_definition = Some(decode_ul(&bytes)?),
                items::PHDR_SOURCE_TRACK_ID => source_track_id = Some(decode_u32(&bytes)?),
                items::PHDR_SIMPLE_PAYLOAD_SID => simple_payload_sid = Some(decode_u32(&bytes)?),
                _ => core.unknown(ul, bytes),
            }
        }

        Ok(PhdrMetaDataTrackSubDescriptorBO {
            core: core.finish()?,
            data_definition,
            source_track_id,
            simple_payload_sid,
        })
    }
}
