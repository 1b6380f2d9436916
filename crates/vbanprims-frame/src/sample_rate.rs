//! Sample-rate index table.
//!
//! The packed header byte carries a 5-bit index into this table. Indices
//! 0-20 are defined; 21-31 are reserved and never resolve.

/// Number of codes addressable by the 5-bit index field.
pub const INDEX_COUNT: usize = 32;

/// Hz value for each defined index, in index order.
const RATES: [u32; 21] = [
    6_000, 12_000, 24_000, 48_000, 96_000, 192_000, 384_000, //
    8_000, 16_000, 32_000, 64_000, 128_000, 256_000, 512_000, //
    11_025, 22_050, 44_100, 88_200, 176_400, 352_800, 705_600,
];

/// Resolve a wire index to its sample rate in Hz.
///
/// Returns `None` for reserved indices (21-31) and anything outside the
/// 5-bit range.
pub fn index_to_hz(index: u8) -> Option<u32> {
    RATES.get(index as usize).copied()
}

/// Reverse lookup: the first index whose rate equals `hz`.
pub fn hz_to_index(hz: u32) -> Option<u8> {
    RATES.iter().position(|&rate| rate == hz).map(|i| i as u8)
}

/// Iterate the defined `(index, hz)` pairs in index order.
pub fn defined_rates() -> impl Iterator<Item = (u8, u32)> {
    RATES.iter().enumerate().map(|(i, &hz)| (i as u8, hz))
}

/// Returns true if the index has a defined rate.
pub fn is_defined(index: u8) -> bool {
    index_to_hz(index).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defined_indices_round_trip() {
        for index in 0u8..=20 {
            let hz = index_to_hz(index).expect("index should be defined");
            assert_eq!(hz_to_index(hz), Some(index));
        }
    }

    #[test]
    fn test_reserved_indices_undefined() {
        for index in 21u8..32 {
            assert_eq!(index_to_hz(index), None);
            assert!(!is_defined(index));
        }
        assert_eq!(index_to_hz(200), None);
    }

    #[test]
    fn test_known_values() {
        assert_eq!(index_to_hz(3), Some(48_000));
        assert_eq!(index_to_hz(16), Some(44_100));
        assert_eq!(index_to_hz(20), Some(705_600));
        assert_eq!(hz_to_index(8_000), Some(7));
        assert_eq!(hz_to_index(99_999), None);
        assert_eq!(hz_to_index(0), None);
    }

    #[test]
    fn test_defined_rates_listing() {
        let rates: Vec<_> = defined_rates().collect();
        assert_eq!(rates.len(), 21);
        assert_eq!(rates[0], (0, 6_000));
        assert_eq!(rates[14], (14, 11_025));
        assert!(rates.len() < INDEX_COUNT);
    }
}
