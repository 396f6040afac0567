//! Result-block decoding.

use crate::registers::RESULT_BLOCK_LEN;

// Layout of the result info byte.
const RELIABILITY_MASK: u8 = 0x3F;
const STATUS_SHIFT: u32 = 6;

/// Scale factor from the raw distance field to millimetres. The device
/// reports the peak distance directly in mm.
pub const DISTANCE_SCALE_MM: f32 = 1.0;

/// A decoded, device-validated distance measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    /// Distance to the target in millimetres. Never negative; at most the
    /// device's documented maximum range.
    pub distance_mm: f32,
    /// Confidence the device assigns to the reading, 0 (worst) to 63 (best).
    pub reliability: u8,
    /// Rolling counter the device increments with each completed result.
    pub result_number: u8,
}

impl Measurement {
    /// Decodes a raw result block.
    ///
    /// `Err` carries the device's raw status code for a completed but
    /// invalid measurement (no target, saturation, out of range).
    pub(crate) fn decode(block: &[u8; RESULT_BLOCK_LEN]) -> Result<Self, u8> {
        let [result_number, info, peak_lo, peak_hi] = *block;

        let status = info >> STATUS_SHIFT;
        if status != 0 {
            return Err(status);
        }

        let raw_distance = u16::from_le_bytes([peak_lo, peak_hi]);
        Ok(Measurement {
            distance_mm: f32::from(raw_distance) * DISTANCE_SCALE_MM,
            reliability: info & RELIABILITY_MASK,
            result_number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::MAX_DISTANCE_MM;

    #[test]
    fn decodes_known_block_to_exact_millimetres() {
        // Raw distance 1000 with identity scale -> 1000.0 mm.
        let block = [3, 0x3F, 0xE8, 0x03];
        let m = Measurement::decode(&block).unwrap();
        assert_eq!(m.distance_mm, 1000.0);
        assert_eq!(m.reliability, 63);
        assert_eq!(m.result_number, 3);
    }

    #[test]
    fn distance_is_little_endian() {
        let m = Measurement::decode(&[0, 0x00, 0x01, 0x00]).unwrap();
        assert_eq!(m.distance_mm, 1.0);
        let m = Measurement::decode(&[0, 0x00, 0x00, 0x01]).unwrap();
        assert_eq!(m.distance_mm, 256.0);
    }

    #[test]
    fn reliability_ignores_status_bits() {
        let m = Measurement::decode(&[0, 0b0010_1010, 0, 0]).unwrap();
        assert_eq!(m.reliability, 0b10_1010);
    }

    #[test]
    fn nonzero_status_is_rejected_with_raw_code() {
        for status in 1..=3u8 {
            let info = (status << 6) | 0x12;
            assert_eq!(Measurement::decode(&[0, info, 0xE8, 0x03]), Err(status));
        }
    }

    #[test]
    fn full_range_reading_stays_within_documented_maximum() {
        let raw: u16 = 2500;
        let [lo, hi] = raw.to_le_bytes();
        let m = Measurement::decode(&[1, 0x20, lo, hi]).unwrap();
        assert!(m.distance_mm >= 0.0);
        assert!(m.distance_mm <= MAX_DISTANCE_MM);
    }
}
