//! Wire constants and the packed sample-rate/sub-protocol byte.
//!
//! The byte following the prefix carries two fields:
//! bits 0-4 hold the sample-rate index, bits 5-7 the sub-protocol tag.
//! The tag is kept in its wire position (`0x00`, `0x20`, ... `0xE0`).

/// Identification prefix: "VBAN".
pub const PREFIX: [u8; 4] = *b"VBAN";

/// Length of the identification prefix.
pub const PREFIX_LEN: usize = PREFIX.len();

/// Full header: prefix (4) + packed byte (1) + format bytes (3) + name (16) + counter (4).
pub const HEADER_SIZE: usize = 28;

/// Width of the NUL-padded stream name field.
pub const STREAM_NAME_LEN: usize = 16;

/// Maximum payload carried after the header.
pub const MAX_PAYLOAD_SIZE: usize = 1436;

/// Largest datagram the protocol produces.
pub const MAX_PACKET_SIZE: usize = HEADER_SIZE + MAX_PAYLOAD_SIZE;

/// Mask for the 5-bit sample-rate index.
pub const SAMPLE_RATE_MASK: u8 = 0b0001_1111;

/// Mask for the 3-bit sub-protocol tag.
pub const SUB_PROTOCOL_MASK: u8 = 0b1110_0000;

// Offsets after the prefix.
pub(crate) const PACKED_OFFSET: usize = PREFIX_LEN;
pub(crate) const FORMAT_OFFSET: usize = PREFIX_LEN + 1;
pub(crate) const NAME_OFFSET: usize = PREFIX_LEN + 4;
pub(crate) const COUNTER_OFFSET: usize = NAME_OFFSET + STREAM_NAME_LEN;

/// Pack a sample-rate index and a sub-protocol tag into one byte.
///
/// Bits outside each field's mask are discarded.
#[inline]
pub fn pack_rate_and_protocol(index: u8, sub_protocol: u8) -> u8 {
    (index & SAMPLE_RATE_MASK) | (sub_protocol & SUB_PROTOCOL_MASK)
}

/// Split the packed byte into `(sample_rate_index, sub_protocol)`.
#[inline]
pub fn unpack_rate_and_protocol(byte: u8) -> (u8, u8) {
    (byte & SAMPLE_RATE_MASK, byte & SUB_PROTOCOL_MASK)
}

/// Known sub-protocol tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SubProtocol {
    Audio = 0x00,
    Serial = 0x20,
    Text = 0x40,
    Service = 0x60,
}

impl SubProtocol {
    /// The tag in its wire position.
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Classify a tag; undefined tags (`0x80..=0xE0`) return `None`.
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits & SUB_PROTOCOL_MASK {
            0x00 => Some(Self::Audio),
            0x20 => Some(Self::Serial),
            0x40 => Some(Self::Text),
            0x60 => Some(Self::Service),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Audio => "AUDIO",
            Self::Serial => "SERIAL",
            Self::Text => "TEXT",
            Self::Service => "SERVICE",
        }
    }
}

impl From<SubProtocol> for u8 {
    fn from(value: SubProtocol) -> Self {
        value.bits()
    }
}

/// Returns a human-readable name for a raw sub-protocol tag.
pub fn sub_protocol_name(bits: u8) -> &'static str {
    SubProtocol::from_bits(bits).map_or("UNDEFINED", SubProtocol::name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_adds_up() {
        assert_eq!(COUNTER_OFFSET + 4, HEADER_SIZE);
        assert_eq!(FORMAT_OFFSET, 5);
        assert_eq!(NAME_OFFSET, 8);
    }

    #[test]
    fn test_pack_masks_each_field() {
        assert_eq!(pack_rate_and_protocol(3, SubProtocol::Audio.bits()), 0x03);
        assert_eq!(pack_rate_and_protocol(16, SubProtocol::Service.bits()), 0x70);
        // Stray bits never bleed into the other field.
        assert_eq!(pack_rate_and_protocol(0xFF, 0x00), SAMPLE_RATE_MASK);
        assert_eq!(pack_rate_and_protocol(0x00, 0xFF), SUB_PROTOCOL_MASK);
    }

    #[test]
    fn test_unpack() {
        assert_eq!(unpack_rate_and_protocol(0x70), (16, 0x60));
        assert_eq!(unpack_rate_and_protocol(0xFF), (31, 0xE0));
    }

    #[test]
    fn test_sub_protocol_names() {
        assert_eq!(SubProtocol::from_bits(0x40), Some(SubProtocol::Text));
        assert_eq!(SubProtocol::from_bits(0x80), None);
        assert_eq!(sub_protocol_name(0x20), "SERIAL");
        assert_eq!(sub_protocol_name(0xE0), "UNDEFINED");
    }
}
