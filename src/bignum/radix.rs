use super::word::{Word, WORD_MAX};
use super::BigUnsigned;
use crate::error::{BigError, BigResult};
use alloc::string::String;
use alloc::vec::Vec;

pub const MIN_RADIX: u32 = 2;
pub const MAX_RADIX: u32 = 36;

fn check_radix(base: u32) -> BigResult<()> {
    if !(MIN_RADIX..=MAX_RADIX).contains(&base) {
        log::debug!("bignum: radix {} out of range", base);
        return Err(BigError::RangeError);
    }
    Ok(())
}

fn digit_value(c: u8) -> Option<Word> {
    match c {
        b'0'..=b'9' => Some((c - b'0') as Word),
        b'A'..=b'Z' => Some((c - b'A') as Word + 10),
        b'a'..=b'z' => Some((c - b'a') as Word + 10),
        _ => None,
    }
}

fn digit_char(d: Word) -> u8 {
    if d < 10 { b'0' + d as u8 } else { b'A' + (d - 10) as u8 }
}

impl BigUnsigned {
    /// Parses `text` as digits in `base` (2..=36, either letter case). An
    /// empty string is zero.
    pub fn parse_radix(text: &str, base: u32) -> BigResult<BigUnsigned> {
        check_radix(base)?;
        let mut v = BigUnsigned::zero();
        for (pos, c) in text.bytes().enumerate() {
            let digit = match digit_value(c) {
                Some(d) if d < base => d,
                _ => {
                    log::debug!("bignum: invalid base-{} digit {:?} at {}", base, c as char, pos);
                    return Err(BigError::MalformedInput);
                }
            };
            v.mul_word_in_place(base);
            v.add_word_in_place(digit);
        }
        Ok(v)
    }

    /// `0x`/`0X` selects hex; with `use_octal`, a leading `0` selects octal;
    /// anything else is decimal.
    pub fn parse(text: &str, use_octal: bool) -> BigResult<BigUnsigned> {
        if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
            return Self::parse_radix(hex, 16);
        }
        if use_octal {
            if let Some(oct) = text.strip_prefix('0') {
                return Self::parse_radix(oct, 8);
            }
        }
        Self::parse_radix(text, 10)
    }

    pub fn to_string_radix(&self, base: u32) -> BigResult<String> {
        check_radix(base)?;
        Ok(self.format_radix(base))
    }

    /// Peels off the largest power of `base` that fits a word per division,
    /// emitting fixed-width digit groups least significant first.
    pub(crate) fn format_radix(&self, base: u32) -> String {
        let mut chunk = base;
        let mut chunk_digits = 1;
        while chunk < WORD_MAX / base {
            chunk *= base;
            chunk_digits += 1;
        }

        let mut digits: Vec<u8> = Vec::with_capacity((chunk_digits + 1) * self.limb_count());
        let mut v = self.clone();
        while v >= chunk {
            let (q, mut block) = v.div_rem_word_unchecked(chunk);
            v = q;
            for _ in 0..chunk_digits {
                digits.push(digit_char(block % base));
                block /= base;
            }
        }
        let mut block = v.low_word();
        while block != 0 {
            digits.push(digit_char(block % base));
            block /= base;
        }
        if digits.is_empty() {
            digits.push(b'0');
        }
        digits.reverse();
        digits.into_iter().map(char::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn hex_literal() {
        let v = BigUnsigned::parse_radix("FF", 16).unwrap();
        assert_eq!(v, 255);
        assert_eq!(v.to_string_radix(16).unwrap(), "FF");
        assert_eq!(BigUnsigned::parse_radix("ff", 16).unwrap(), 255);
    }

    #[test]
    fn zero_and_empty() {
        assert_eq!(BigUnsigned::zero().to_string_radix(7).unwrap(), "0");
        assert!(BigUnsigned::parse_radix("", 10).unwrap().is_zero());
    }

    #[test]
    fn groups_keep_inner_zeros() {
        let v = BigUnsigned::parse_radix("1000000000000000000000000000001", 10).unwrap();
        assert_eq!(v.to_string_radix(10).unwrap(), "1000000000000000000000000000001");
        let b = BigUnsigned::from_words(&[0, 1]);
        assert_eq!(b.to_string_radix(2).unwrap(), "1".to_string() + &"0".repeat(32));
    }

    #[test]
    fn bad_radix_and_digits() {
        assert_eq!(BigUnsigned::parse_radix("1", 1), Err(BigError::RangeError));
        assert_eq!(BigUnsigned::parse_radix("1", 37), Err(BigError::RangeError));
        assert_eq!(BigUnsigned::one().to_string_radix(0), Err(BigError::RangeError));
        assert_eq!(BigUnsigned::parse_radix("129", 8), Err(BigError::MalformedInput));
        assert_eq!(BigUnsigned::parse_radix("12 3", 10), Err(BigError::MalformedInput));
        assert_eq!(BigUnsigned::parse_radix("-1", 10), Err(BigError::MalformedInput));
    }

    #[test]
    fn prefix_sniffing() {
        assert_eq!(BigUnsigned::parse("0x1F", false).unwrap(), 31);
        assert_eq!(BigUnsigned::parse("0X1f", true).unwrap(), 31);
        assert_eq!(BigUnsigned::parse("017", true).unwrap(), 15);
        assert_eq!(BigUnsigned::parse("017", false).unwrap(), 17);
        assert_eq!(BigUnsigned::parse("0", true).unwrap(), 0);
    }

    #[test]
    fn base_36() {
        let v = BigUnsigned::parse_radix("zz", 36).unwrap();
        assert_eq!(v, 36 * 36 - 1);
        assert_eq!(v.to_string_radix(36).unwrap(), "ZZ");
    }
}
