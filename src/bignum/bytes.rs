use super::word::{Word, BYTES_PER_WORD};
use super::BigUnsigned;
use crate::error::{BigError, BigResult};
use alloc::string::String;
use alloc::vec::Vec;

const BYTE_STRING_SENTINEL: u8 = 1;
const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

impl BigUnsigned {
    /// Big-endian bytes, leading zeros ignored.
    pub fn from_be_bytes(bytes: &[u8]) -> BigUnsigned {
        let words = bytes.len().div_ceil(BYTES_PER_WORD).max(1);
        let mut v = BigUnsigned::with_size(0, words);
        let out = v.on_write().words_mut();
        for (i, &b) in bytes.iter().rev().enumerate() {
            out[i / BYTES_PER_WORD] |= (b as Word) << ((i % BYTES_PER_WORD) * 8);
        }
        v.normalize();
        v
    }

    /// Minimal big-endian bytes; zero is a single `0x00`.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let count = self.significant_bytes();
        (0..count).rev().map(|pos| self.byte_at(pos)).collect()
    }

    /// Encodes `bytes` behind a leading `0x01` so leading zero bytes (and the
    /// empty string) survive the trip through a number.
    pub fn from_byte_string(bytes: &[u8]) -> BigUnsigned {
        let mut framed = Vec::with_capacity(bytes.len() + 1);
        framed.push(BYTE_STRING_SENTINEL);
        framed.extend_from_slice(bytes);
        Self::from_be_bytes(&framed)
    }

    pub fn to_byte_string(&self) -> BigResult<Vec<u8>> {
        let mut bytes = self.to_be_bytes();
        if bytes[0] != BYTE_STRING_SENTINEL {
            log::debug!("bignum: byte string sentinel is {:#04x}", bytes[0]);
            return Err(BigError::FormatMismatch);
        }
        bytes.remove(0);
        Ok(bytes)
    }

    /// Parses key material written as `DE:AD:BE:EF`: one or two hex digits
    /// per byte, colon separated. An empty string is zero.
    pub fn parse_hex_byte_string(text: &str) -> BigResult<BigUnsigned> {
        let mut bytes = Vec::with_capacity(text.len() / 3 + 1);
        let mut digits = 0;
        let mut current: u8 = 0;
        for (pos, c) in text.bytes().enumerate() {
            if c == b':' {
                if digits == 0 {
                    log::debug!("bignum: empty byte before ':' at {}", pos);
                    return Err(BigError::MalformedInput);
                }
                bytes.push(current);
                digits = 0;
                current = 0;
                continue;
            }
            let nibble = match (c as char).to_digit(16) {
                Some(n) => n as u8,
                None => {
                    log::debug!("bignum: invalid character {:?} in hex byte string at {}", c as char, pos);
                    return Err(BigError::MalformedInput);
                }
            };
            digits += 1;
            if digits > 2 {
                log::debug!("bignum: too many digits for a byte at {}", pos);
                return Err(BigError::MalformedInput);
            }
            current = current << 4 | nibble;
        }
        if digits != 0 {
            bytes.push(current);
        }
        Ok(Self::from_be_bytes(&bytes))
    }

    pub fn to_hex_byte_string(&self) -> String {
        let count = self.significant_bytes();
        let mut out = String::with_capacity(3 * count);
        for pos in (0..count).rev() {
            let b = self.byte_at(pos);
            out.push(HEX_DIGITS[(b >> 4) as usize] as char);
            out.push(HEX_DIGITS[(b & 0xF) as usize] as char);
            if pos != 0 {
                out.push(':');
            }
        }
        out
    }

    fn byte_at(&self, pos: usize) -> u8 {
        (self.as_words()[pos / BYTES_PER_WORD] >> ((pos % BYTES_PER_WORD) * 8)) as u8
    }

    // at least one, so zero still has a byte
    fn significant_bytes(&self) -> usize {
        let mut count = self.limb_count() * BYTES_PER_WORD;
        while count > 1 && self.byte_at(count - 1) == 0 {
            count -= 1;
        }
        count
    }
}
