use crate::constants::default_constants::ALPHABET;

pub const ALPHABET_LEN: usize = ALPHABET.len();

/// Largest multiple of the alphabet size that fits in a byte (4 * 52).
/// Bytes at or above it are the source of the modulo bias.
pub const REJECTION_BOUND: u8 = (256 / ALPHABET_LEN * ALPHABET_LEN) as u8;

#[inline]
pub fn char_for_byte(byte: u8) -> char {
    ALPHABET[byte as usize % ALPHABET_LEN] as char
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn alphabet_layout() {
        assert_eq!(ALPHABET_LEN, 52);
        assert_eq!(REJECTION_BOUND, 208);
        assert_eq!(char_for_byte(0), 'a');
        assert_eq!(char_for_byte(25), 'z');
        assert_eq!(char_for_byte(26), 'A');
        assert_eq!(char_for_byte(51), 'Z');
        assert_eq!(char_for_byte(52), 'a');
        assert_eq!(char_for_byte(255), 'V');
    }

    #[test]
    fn every_byte_maps_into_alphabet() {
        assert!((0..=255u8).map(char_for_byte).all(|c| c.is_ascii_alphabetic()));
    }
}
