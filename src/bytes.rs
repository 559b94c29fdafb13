//! Byte-level helpers shared with string recovery and operand decoding.

use crate::error::{FeatureError, Result};

/// Minimum length of a recovered stackstring worth reporting.
pub const MIN_STACKSTRING_LEN: usize = 8;

/// XOR every byte of `data` with a single-byte `key`.
///
/// Applying the same key twice yields the original input.
pub fn xor_bytes(data: &[u8], key: u8) -> Vec<u8> {
    data.iter().map(|b| b ^ key).collect()
}

/// True when every byte is zero; the empty slice counts as all zeros.
pub fn all_zeros(data: &[u8]) -> bool {
    data.iter().all(|&b| b == 0)
}

/// Interpret the low `bits` bits of `value` as a two's-complement integer.
///
/// `bits` must be in `1..=64` and `value` must not have any bit set at or
/// above position `bits`.
pub fn twos_complement(value: u64, bits: u32) -> Result<i64> {
    if bits == 0 || bits > 64 {
        return Err(FeatureError::InvalidBitWidth { bits });
    }
    if bits < 64 && value >> bits != 0 {
        return Err(FeatureError::ValueOutOfRange { value, bits });
    }

    let sign = 1u64 << (bits - 1);
    if value & sign != 0 {
        // The result always lies in [-2^63, 0), so the narrowing is exact.
        Ok((value as i128 - (1i128 << bits)) as i64)
    } else {
        Ok(value as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_is_involutive() {
        let data = b"kernel32.dll\x00\xff";
        for key in 0..=u8::MAX {
            let enc = xor_bytes(data, key);
            assert_eq!(enc.len(), data.len());
            assert_eq!(xor_bytes(&enc, key), data.to_vec());
        }
    }

    #[test]
    fn xor_known_values() {
        assert_eq!(xor_bytes(&[0x41, 0x42, 0x00], 0x20), vec![0x61, 0x62, 0x20]);
        assert_eq!(xor_bytes(&[0x12, 0x34], 0), vec![0x12, 0x34]);
        assert!(xor_bytes(&[], 0x55).is_empty());
    }

    #[test]
    fn all_zeros_cases() {
        assert!(all_zeros(&[]));
        assert!(all_zeros(&[0, 0]));
        assert!(!all_zeros(&[0, 1]));
        assert!(!all_zeros(&[0x80]));
    }

    #[test]
    fn twos_complement_eight_bit() {
        assert_eq!(twos_complement(0xFF, 8), Ok(-1));
        assert_eq!(twos_complement(0x7F, 8), Ok(127));
        assert_eq!(twos_complement(0x80, 8), Ok(-128));
        assert_eq!(twos_complement(0, 8), Ok(0));
    }

    #[test]
    fn twos_complement_wide() {
        assert_eq!(twos_complement(0xFFFF_FFFF, 32), Ok(-1));
        assert_eq!(twos_complement(0x8000_0000, 32), Ok(i32::MIN as i64));
        assert_eq!(twos_complement(u64::MAX, 64), Ok(-1));
        assert_eq!(twos_complement(1 << 63, 64), Ok(i64::MIN));
        assert_eq!(twos_complement(1 << 62, 63), Ok(-(1i64 << 62)));
        assert_eq!(twos_complement(1, 1), Ok(-1));
        assert_eq!(twos_complement(0, 1), Ok(0));
    }

    #[test]
    fn twos_complement_rejects_bad_input() {
        assert_eq!(
            twos_complement(1, 0),
            Err(FeatureError::InvalidBitWidth { bits: 0 })
        );
        assert_eq!(
            twos_complement(1, 65),
            Err(FeatureError::InvalidBitWidth { bits: 65 })
        );
        assert_eq!(
            twos_complement(0x100, 8),
            Err(FeatureError::ValueOutOfRange {
                value: 0x100,
                bits: 8
            })
        );
    }

    #[test]
    fn stackstring_threshold() {
        assert_eq!(MIN_STACKSTRING_LEN, 8);
    }
}
