use super::word::{Word, WORD_BITS};
use super::BigUnsigned;
use crate::error::{BigError, BigResult};
use alloc::string::String;

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

fn sextet(c: u8) -> Option<Word> {
    match c {
        b'A'..=b'Z' => Some((c - b'A') as Word),
        b'a'..=b'z' => Some((c - b'a') as Word + 26),
        b'0'..=b'9' => Some((c - b'0') as Word + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        _ => None,
    }
}

impl BigUnsigned {
    /// Reads `text` as one big-endian base-64 number, six bits per character.
    /// Trailing `=` padding is ignored.
    pub fn parse_base64(text: &str) -> BigResult<BigUnsigned> {
        let text = text.trim_end_matches('=');
        let bits = text.len() * 6;
        let mut v = BigUnsigned::with_size(0, bits.div_ceil(WORD_BITS).max(1));
        let words = v.on_write().words_mut();
        for (i, c) in text.bytes().rev().enumerate() {
            let value = match sextet(c) {
                Some(s) => s,
                None => {
                    log::debug!("bignum: invalid base64 character {:?}", c as char);
                    return Err(BigError::MalformedInput);
                }
            };
            let bit = i * 6;
            let (idx, offset) = (bit / WORD_BITS, bit % WORD_BITS);
            words[idx] |= value << offset;
            if offset + 6 > WORD_BITS {
                words[idx + 1] |= value >> (WORD_BITS - offset);
            }
        }
        v.normalize();
        Ok(v)
    }

    /// Most significant group first, no padding; zero encodes as `"A"`.
    pub fn to_base64(&self) -> String {
        let groups = self.bit_length().div_ceil(6).max(1);
        (0..groups).rev().map(|g| ALPHABET[self.sextet_at(g * 6) as usize] as char).collect()
    }

    fn sextet_at(&self, bit: usize) -> Word {
        let words = self.as_words();
        let (idx, offset) = (bit / WORD_BITS, bit % WORD_BITS);
        let mut v = words.get(idx).map_or(0, |w| w >> offset);
        if offset + 6 > WORD_BITS {
            v |= words.get(idx + 1).map_or(0, |w| w << (WORD_BITS - offset));
        }
        v & 0x3F
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_characters() {
        assert_eq!(BigUnsigned::zero().to_base64(), "A");
        assert_eq!(BigUnsigned::new(63).to_base64(), "/");
        assert_eq!(BigUnsigned::new(64).to_base64(), "BA");
        assert_eq!(BigUnsigned::parse_base64("BA").unwrap(), 64);
    }

    #[test]
    fn groups_straddle_limbs() {
        let v = BigUnsigned::from_words(&[0xFFFF_FFFF, 0xFFFF_FFFF]);
        let text = v.to_base64();
        assert_eq!(text, "P//////////");
        assert_eq!(BigUnsigned::parse_base64(&text).unwrap(), v);
    }

    #[test]
    fn padding_is_stripped() {
        assert_eq!(BigUnsigned::parse_base64("TWFu==").unwrap(), BigUnsigned::parse_base64("TWFu").unwrap());
        assert_eq!(BigUnsigned::parse_base64("TWFu").unwrap(), 0x4D61_6E);
        assert!(BigUnsigned::parse_base64("").unwrap().is_zero());
        assert!(BigUnsigned::parse_base64("==").unwrap().is_zero());
    }

    #[test]
    fn invalid_characters() {
        assert_eq!(BigUnsigned::parse_base64("AB-C"), Err(BigError::MalformedInput));
        assert_eq!(BigUnsigned::parse_base64("A=B"), Err(BigError::MalformedInput));
    }
}
