//! `tokio_util::codec` adapter for whole VBAN datagrams.
//!
//! Only the `codec` feature of tokio-util is enabled here. Callers that want
//! `tokio_util::udp::UdpFramed` enable tokio-util's `net` feature (and tokio)
//! in their own manifest; every buffer handed to the decoder then holds
//! exactly one datagram, which is consumed in full.

use bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder};

use crate::codec::{decode_packet_with, encode_into_with, CodecConfig, Packet};
use crate::error::HeaderError;

/// Datagram codec producing [`Packet`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatagramCodec {
    config: CodecConfig,
}

impl DatagramCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }
}

impl Decoder for DatagramCodec {
    type Item = Packet;
    type Error = HeaderError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Packet>, HeaderError> {
        if src.is_empty() {
            return Ok(None);
        }
        let datagram = src.split_to(src.len());
        decode_packet_with(&datagram, &self.config).map(Some)
    }
}

impl Encoder<Packet> for DatagramCodec {
    type Error = HeaderError;

    fn encode(&mut self, item: Packet, dst: &mut BytesMut) -> Result<(), HeaderError> {
        encode_into_with(&item.header, &item.payload, dst, &self.config)
    }
}

impl Encoder<&Packet> for DatagramCodec {
    type Error = HeaderError;

    fn encode(&mut self, item: &Packet, dst: &mut BytesMut) -> Result<(), HeaderError> {
        encode_into_with(&item.header, &item.payload, dst, &self.config)
    }
}
