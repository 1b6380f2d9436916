//! VBAN packet header codec with frame sequence diagnostics.
//!
//! Every VBAN datagram starts with a fixed 28-byte header:
//! - The 4-byte ASCII prefix "VBAN"
//! - A packed byte: 5-bit sample-rate index, 3-bit sub-protocol tag
//! - Three opaque format bytes
//! - A 16-byte NUL-padded stream name
//! - A 4-byte little-endian frame counter
//!
//! Sockets, audio conversion and the service sub-protocol payload live
//! elsewhere; this crate only reads and writes the header.

pub mod codec;
#[cfg(feature = "async")]
pub mod datagram;
pub mod error;
pub mod protocol;
pub mod sample_rate;
pub mod sequence;
pub mod service;

pub use codec::{
    decode_header, decode_header_with, decode_packet, decode_packet_with, encode_into,
    encode_into_with, encode_packet, encode_packet_with, CodecConfig, Header, Packet,
};
#[cfg(feature = "async")]
pub use datagram::DatagramCodec;
pub use error::{HeaderError, Result};
pub use protocol::{
    pack_rate_and_protocol, sub_protocol_name, unpack_rate_and_protocol, SubProtocol,
    HEADER_SIZE, MAX_PACKET_SIZE, MAX_PAYLOAD_SIZE, PREFIX, STREAM_NAME_LEN,
};
pub use sample_rate::{hz_to_index, index_to_hz};
pub use sequence::{FrameSequenceTracker, SequenceEvent, TrackingKey, GLOBAL_KEY};
pub use service::ApplicationType;
