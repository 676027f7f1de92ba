//! Additive 16-bit payload checksum.
//!
//! The payload is read as little-endian `u16` words (an odd final byte is the
//! low byte of a word whose high byte is zero) and summed modulo 2^16. The
//! transmitted value is `0xFFFF - sum`.
//!
//! This is an error-detection aid only. Any single-bit error changes the sum,
//! but two corruptions that shift the sum by opposite amounts cancel out and
//! go unnoticed. The deployed instrument uses exactly this algorithm, so it
//! must not be strengthened here.

/// Wrapping sum of the payload's little-endian 16-bit words.
pub fn word_sum(payload: &[u8]) -> u16 {
    payload.chunks(2).fold(0u16, |sum, word| {
        let value = match *word {
            [lo, hi] => u16::from_le_bytes([lo, hi]),
            [lo] => u16::from(lo),
            _ => 0,
        };
        sum.wrapping_add(value)
    })
}

/// The checksum transmitted after `payload`.
pub fn checksum(payload: &[u8]) -> u16 {
    0xFFFF_u16.wrapping_sub(word_sum(payload))
}

/// Whether `expected` is the checksum of `payload`.
pub fn verify(payload: &[u8], expected: u16) -> bool {
    checksum(payload) == expected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload() {
        assert_eq!(word_sum(&[]), 0);
        assert_eq!(checksum(&[]), 0xFFFF);
    }

    #[test]
    fn sums_little_endian_words() {
        assert_eq!(word_sum(&[0x01, 0x02, 0x03, 0x04]), 0x0201 + 0x0403);
        assert_eq!(checksum(&[0x01, 0x02, 0x03, 0x04]), 0xFFFF - 0x0604);
    }

    #[test]
    fn odd_trailing_byte_is_low_byte() {
        assert_eq!(word_sum(&[0x01, 0x02, 0x05]), 0x0201 + 0x0005);
    }

    #[test]
    fn sum_wraps_at_16_bits() {
        assert_eq!(word_sum(&[0xFF, 0xFF, 0x02, 0x00]), 0x0001);
        assert_eq!(checksum(&[0xFF, 0xFF, 0x02, 0x00]), 0xFFFE);
    }

    #[test]
    fn payload_plus_checksum_sums_to_all_ones() {
        let payload = [0x10, 0x20, 0x30, 0x40, 0x50, 0x60];
        let sum = word_sum(&payload).wrapping_add(checksum(&payload));
        assert_eq!(sum, 0xFFFF);
    }

    #[test]
    fn deterministic_and_verifiable() {
        let payload: Vec<u8> = (0..=200).collect();
        let stored = checksum(&payload);
        assert_eq!(checksum(&payload), stored);
        assert!(verify(&payload, stored));
        assert!(!verify(&payload, stored.wrapping_add(1)));
    }

    #[test]
    fn every_single_bit_flip_is_detected() {
        let payload: Vec<u8> = (0..135u16).map(|i| (i * 37 % 251) as u8).collect();
        let stored = checksum(&payload);
        for byte in 0..payload.len() {
            for bit in 0..8 {
                let mut corrupted = payload.clone();
                corrupted[byte] ^= 1 << bit;
                assert!(!verify(&corrupted, stored), "missed flip at {byte}:{bit}");
            }
        }
    }

    #[test]
    fn compensating_corruption_is_a_known_blind_spot() {
        // +1 in one word and -1 in another leave the sum unchanged.
        let payload = [0x10, 0x00, 0x10, 0x00];
        let corrupted = [0x11, 0x00, 0x0F, 0x00];
        assert_eq!(checksum(&payload), checksum(&corrupted));
    }
}
