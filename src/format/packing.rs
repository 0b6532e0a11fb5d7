//! Two-byte wire form of a reference.
//!
//! Distance and length are stored minus one so the 12-bit and 4-bit fields
//! cover 1-4096 and 1-16:
//!
//! ```text
//! byte0 = d >> 4                  (top 8 bits of the distance)
//! byte1 = (d & 0xF) << 4 | l      (low 4 bits of the distance, then length)
//! ```

use super::{MAX_MATCH, WINDOW_SIZE};
use crate::error::{Error, Result};

/// Whether `(distance, length)` fits the packed fields
#[inline]
pub fn in_range(distance: usize, length: usize) -> bool {
    (1..=WINDOW_SIZE).contains(&distance) && (1..=MAX_MATCH).contains(&length)
}

/// Pack a reference into its wire form.
///
/// Panics if either value is out of range; the match finder never produces
/// such a pair.
#[inline]
pub fn pack(distance: usize, length: usize) -> [u8; 2] {
    assert!(
        in_range(distance, length),
        "reference out of packable range: distance={distance}, length={length}"
    );
    let d = distance - 1;
    let l = length - 1;
    [(d >> 4) as u8, (((d & 0xF) << 4) | l) as u8]
}

/// Checked variant of [`pack`]
pub fn try_pack(distance: usize, length: usize) -> Result<[u8; 2]> {
    if !in_range(distance, length) {
        return Err(Error::InvalidPacking { distance, length });
    }
    Ok(pack(distance, length))
}

/// Unpack a wire pair into `(distance, length)`; total over all inputs
#[inline]
pub fn unpack(byte0: u8, byte1: u8) -> (usize, usize) {
    let d = ((byte0 as usize) << 4) | (byte1 >> 4) as usize;
    let l = (byte1 & 0xF) as usize;
    (d + 1, l + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_known_values() {
        assert_eq!(pack(1, 1), [0x00, 0x00]);
        assert_eq!(pack(4096, 16), [0xFF, 0xFF]);
        // d = 33 = 0x021, l = 15
        assert_eq!(pack(34, 16), [0x02, 0x1F]);
        // d = 2599 = 0xA27, l = 2
        assert_eq!(pack(2600, 3), [0xA2, 0x72]);
    }

    #[test]
    fn test_roundtrip_full_domain() {
        for distance in 1..=WINDOW_SIZE {
            for length in 1..=MAX_MATCH {
                let [b0, b1] = pack(distance, length);
                assert_eq!(unpack(b0, b1), (distance, length), "pair ({distance}, {length})");
            }
        }
    }

    #[test]
    fn test_unpack_is_total() {
        for b0 in 0..=255u8 {
            for b1 in 0..=255u8 {
                let (distance, length) = unpack(b0, b1);
                assert!(in_range(distance, length));
                assert_eq!(pack(distance, length), [b0, b1]);
            }
        }
    }

    #[test]
    fn test_try_pack_rejects_out_of_range() {
        assert!(matches!(try_pack(0, 3), Err(Error::InvalidPacking { distance: 0, length: 3 })));
        assert!(matches!(try_pack(4097, 3), Err(Error::InvalidPacking { .. })));
        assert!(matches!(try_pack(10, 0), Err(Error::InvalidPacking { .. })));
        assert!(matches!(try_pack(10, 17), Err(Error::InvalidPacking { .. })));
        assert_eq!(try_pack(10, 4).unwrap(), pack(10, 4));
    }

    #[test]
    #[should_panic(expected = "out of packable range")]
    fn test_pack_asserts() {
        pack(5000, 4);
    }
}
