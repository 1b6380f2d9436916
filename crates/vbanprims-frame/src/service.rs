//! Application types announced by the service (ping) sub-protocol.
//!
//! Carried through untouched; nothing in this crate interprets the bits.

bitflags::bitflags! {
    /// Role bitmask of a VBAN application.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ApplicationType: u32 {
        const RECEPTOR = 0x0000_0001;
        const TRANSMITTER = 0x0000_0002;
        const RECEPTOR_SPOT = 0x0000_0004;
        const TRANSMITTER_SPOT = 0x0000_0008;
        const VIRTUAL_DEVICE = 0x0000_0010;
        const VIRTUAL_MIXER = 0x0000_0020;
        const MATRIX = 0x0000_0040;
        const DAW = 0x0000_0080;
        const SERVER = 0x0100_0000;
    }
}

impl ApplicationType {
    /// No role advertised.
    pub const UNKNOWN: Self = Self::empty();

    /// Build from a raw wire value, keeping bits this crate does not name.
    pub fn from_wire(raw: u32) -> Self {
        Self::from_bits_retain(raw)
    }

    pub fn to_wire(self) -> u32 {
        self.bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_is_zero() {
        assert_eq!(ApplicationType::UNKNOWN.to_wire(), 0);
        assert_eq!(ApplicationType::default(), ApplicationType::UNKNOWN);
    }

    #[test]
    fn unnamed_bits_are_retained() {
        let raw = 0x0100_0081 | 0x0000_0800;
        let app = ApplicationType::from_wire(raw);
        assert!(app.contains(ApplicationType::SERVER | ApplicationType::DAW));
        assert!(app.contains(ApplicationType::RECEPTOR));
        assert_eq!(app.to_wire(), raw);
    }
}
