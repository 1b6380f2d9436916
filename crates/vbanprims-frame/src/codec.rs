use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{HeaderError, Result};
use crate::protocol::{
    pack_rate_and_protocol, unpack_rate_and_protocol, SubProtocol, COUNTER_OFFSET, FORMAT_OFFSET,
    HEADER_SIZE, MAX_PAYLOAD_SIZE, NAME_OFFSET, PACKED_OFFSET, PREFIX, PREFIX_LEN,
    STREAM_NAME_LEN,
};
use crate::sample_rate::{hz_to_index, index_to_hz};

/// Decoded VBAN packet header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Sub-protocol tag in its wire position (high three bits).
    pub sub_protocol: u8,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Raw samples-per-frame byte.
    pub samples_per_frame: u8,
    /// Raw second format byte (channel count for audio).
    pub format_byte2: u8,
    /// Raw third format byte (bit depth / codec selector for audio).
    pub format_byte3: u8,
    /// Stream name, at most 16 ASCII bytes on the wire.
    pub stream_name: String,
    /// Per-stream frame counter.
    pub frame_counter: u32,
}

impl Header {
    /// Create an audio header with zeroed format bytes and counter.
    pub fn new(sample_rate: u32, stream_name: impl Into<String>) -> Self {
        Self {
            sub_protocol: SubProtocol::Audio.bits(),
            sample_rate,
            samples_per_frame: 0,
            format_byte2: 0,
            format_byte3: 0,
            stream_name: stream_name.into(),
            frame_counter: 0,
        }
    }

    /// Wire index of `sample_rate`, if the rate is in the table.
    pub fn sample_rate_index(&self) -> Option<u8> {
        hz_to_index(self.sample_rate)
    }

    /// The sub-protocol tag, if it is one of the defined ones.
    pub fn sub_protocol_kind(&self) -> Option<SubProtocol> {
        SubProtocol::from_bits(self.sub_protocol)
    }
}

/// A decoded header together with the bytes that follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    pub header: Header,
    pub payload: Bytes,
}

impl Packet {
    pub fn new(header: Header, payload: impl Into<Bytes>) -> Self {
        Self {
            header,
            payload: payload.into(),
        }
    }

    /// The encoded size of this packet under the default configuration.
    pub fn wire_size(&self) -> usize {
        self.wire_size_with(&CodecConfig::default())
    }

    /// The encoded size after truncating the payload to `config.max_payload_size`.
    pub fn wire_size_with(&self, config: &CodecConfig) -> usize {
        HEADER_SIZE + self.payload.len().min(config.max_payload_size)
    }
}

/// Configuration for the header codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Payload bytes kept on encode. Default: 1436.
    pub max_payload_size: usize,
    /// Reject datagrams whose prefix is not "VBAN". Default: off.
    pub validate_prefix: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_payload_size: MAX_PAYLOAD_SIZE,
            validate_prefix: false,
        }
    }
}

impl CodecConfig {
    /// Default configuration with prefix validation turned on.
    pub fn strict() -> Self {
        Self {
            validate_prefix: true,
            ..Self::default()
        }
    }
}

/// Decode the header at the start of a datagram.
///
/// The prefix is skipped without being checked; use [`decode_header_with`]
/// and [`CodecConfig::strict`] to reject foreign datagrams.
pub fn decode_header(src: &[u8]) -> Result<Header> {
    decode_header_with(src, &CodecConfig::default())
}

/// Decode the header at the start of a datagram with explicit configuration.
///
/// Wire format:
/// ```text
/// ┌────────┬────────┬─────┬─────┬─────┬──────────────┬──────────┬─────────┐
/// │ "VBAN" │ SR|SP  │ n1  │ n2  │ n3  │ Stream name  │ Counter  │ Payload │
/// │ 4B     │ 1B     │ 1B  │ 1B  │ 1B  │ 16B, NUL pad │ 4B LE    │ ≤1436B  │
/// └────────┴────────┴─────┴─────┴─────┴──────────────┴──────────┴─────────┘
/// ```
pub fn decode_header_with(src: &[u8], config: &CodecConfig) -> Result<Header> {
    if src.len() < HEADER_SIZE {
        return Err(HeaderError::Truncated {
            expected: HEADER_SIZE,
            actual: src.len(),
        });
    }

    if config.validate_prefix && src[..PREFIX_LEN] != PREFIX {
        let mut found = [0u8; PREFIX_LEN];
        found.copy_from_slice(&src[..PREFIX_LEN]);
        return Err(HeaderError::InvalidPrefix(found));
    }

    let (index, sub_protocol) = unpack_rate_and_protocol(src[PACKED_OFFSET]);
    let sample_rate = index_to_hz(index).ok_or(HeaderError::InvalidSampleRate(index))?;

    let name = &src[NAME_OFFSET..NAME_OFFSET + STREAM_NAME_LEN];
    let mut counter = [0u8; 4];
    counter.copy_from_slice(&src[COUNTER_OFFSET..COUNTER_OFFSET + 4]);

    Ok(Header {
        sub_protocol,
        sample_rate,
        samples_per_frame: src[FORMAT_OFFSET],
        format_byte2: src[FORMAT_OFFSET + 1],
        format_byte3: src[FORMAT_OFFSET + 2],
        stream_name: decode_stream_name(name),
        frame_counter: u32::from_le_bytes(counter),
    })
}

/// Decode a full datagram into its header and payload.
///
/// The payload is every byte after the header; nothing is truncated here.
pub fn decode_packet(src: &[u8]) -> Result<Packet> {
    decode_packet_with(src, &CodecConfig::default())
}

pub fn decode_packet_with(src: &[u8], config: &CodecConfig) -> Result<Packet> {
    let header = decode_header_with(src, config)?;
    let payload = Bytes::copy_from_slice(&src[HEADER_SIZE..]);
    Ok(Packet { header, payload })
}

/// Encode a header and payload into a new datagram.
pub fn encode_packet(header: &Header, payload: &[u8]) -> Result<Bytes> {
    encode_packet_with(header, payload, &CodecConfig::default())
}

pub fn encode_packet_with(header: &Header, payload: &[u8], config: &CodecConfig) -> Result<Bytes> {
    let mut dst = BytesMut::new();
    encode_into_with(header, payload, &mut dst, config)?;
    Ok(dst.freeze())
}

/// Append an encoded datagram to `dst`.
///
/// Payload beyond the protocol maximum is dropped. On error nothing is
/// written to `dst`.
pub fn encode_into(header: &Header, payload: &[u8], dst: &mut BytesMut) -> Result<()> {
    encode_into_with(header, payload, dst, &CodecConfig::default())
}

pub fn encode_into_with(
    header: &Header,
    payload: &[u8],
    dst: &mut BytesMut,
    config: &CodecConfig,
) -> Result<()> {
    let index = hz_to_index(header.sample_rate)
        .ok_or(HeaderError::UnsupportedSampleRate(header.sample_rate))?;

    let kept = payload.len().min(config.max_payload_size);
    if kept < payload.len() {
        tracing::trace!(
            stream = %header.stream_name,
            size = payload.len(),
            max = config.max_payload_size,
            "payload truncated"
        );
    }

    dst.reserve(HEADER_SIZE + kept);
    dst.put_slice(&PREFIX);
    dst.put_u8(pack_rate_and_protocol(index, header.sub_protocol));
    dst.put_u8(header.samples_per_frame);
    dst.put_u8(header.format_byte2);
    dst.put_u8(header.format_byte3);
    dst.put_slice(&encode_stream_name(&header.stream_name));
    dst.put_u32_le(header.frame_counter);
    dst.put_slice(&payload[..kept]);
    Ok(())
}

fn encode_stream_name(name: &str) -> [u8; STREAM_NAME_LEN] {
    let mut field = [0u8; STREAM_NAME_LEN];
    let ascii = name.chars().map(|c| if c.is_ascii() { c as u8 } else { b'?' });
    for (slot, byte) in field.iter_mut().zip(ascii) {
        *slot = byte;
    }
    field
}

fn decode_stream_name(field: &[u8]) -> String {
    let end = field
        .iter()
        .rposition(|b| b.is_ascii_graphic() || *b == b' ')
        .map_or(0, |i| i + 1);
    field[..end]
        .iter()
        .map(|&b| if b.is_ascii() { b as char } else { '?' })
        .collect()
}
