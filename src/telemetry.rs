//! Encrypted telemetry envelope.
//!
//! A message is cut into fixed-size chunks. Each chunk becomes a number
//! through the byte-string codec, gets random padding bits and a small
//! checksum appended, is raised to the public exponent modulo the receiver's
//! key and is written out as one base64 line. The envelope starts with `0`
//! when it carries plain text and `1` when it carries ciphertext lines.

use crate::bignum::{BigUnsigned, Word, WORD_BITS};
use crate::error::{BigError, BigResult};
use alloc::string::{String, ToString};
use alloc::vec::Vec;

pub const PUBLIC_EXPONENT: Word = 0x10001;

const PLAIN_MARKER: char = '0';
const SEALED_MARKER: char = '1';

const LCG_MUL: u64 = 0x5851_F42D_4C95_7F2D;
const LCG_SEED_MIX: u64 = 0x1405_7B7E_F767_814F;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    /// Plaintext bytes per ciphertext line.
    pub chunk_size: usize,
    pub random_bits: usize,
    pub checksum_modulus: Word,
}

impl Params {
    pub const DEVICE: Params = Params { chunk_size: 32, random_bits: 64, checksum_modulus: 8191 };
}

impl Default for Params {
    fn default() -> Self {
        Self::DEVICE
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptionKey {
    modulus: BigUnsigned,
    exponent: BigUnsigned,
}

impl EncryptionKey {
    pub fn new(modulus: BigUnsigned) -> BigResult<Self> {
        if modulus.is_zero() {
            log::warn!("telemetry: rejecting zero encryption modulus");
            return Err(BigError::InvalidModulus);
        }
        Ok(Self { modulus, exponent: BigUnsigned::new(PUBLIC_EXPONENT) })
    }

    /// Loads a key from colon-hex text such as `8A:DA:1D:...`.
    pub fn from_hex_modulus(text: &str) -> BigResult<Self> {
        let modulus = BigUnsigned::parse_hex_byte_string(text.trim()).map_err(|e| {
            log::warn!("telemetry: unreadable encryption modulus");
            e
        })?;
        Self::new(modulus)
    }

    pub fn with_exponent(mut self, exponent: BigUnsigned) -> Self {
        self.exponent = exponent;
        self
    }

    pub fn modulus(&self) -> &BigUnsigned {
        &self.modulus
    }

    pub fn exponent(&self) -> &BigUnsigned {
        &self.exponent
    }
}

pub trait EntropySource {
    fn next_word(&mut self) -> Word;
}

/// 64-bit linear congruential generator; each output is the high half of the
/// state. Padding only, never key material.
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self { state: seed.wrapping_mul(LCG_MUL).wrapping_add(LCG_SEED_MIX) }
    }
}

impl EntropySource for Lcg {
    fn next_word(&mut self) -> Word {
        self.state = self.state.wrapping_mul(LCG_MUL).wrapping_add(1);
        (self.state >> 32) as Word
    }
}

/// Exactly `count` random bits; the top limb is masked down to fit.
pub fn random_bits(source: &mut impl EntropySource, count: usize) -> BigUnsigned {
    let words = count.div_ceil(WORD_BITS);
    let mut limbs: Vec<Word> = (0..words).map(|_| source.next_word()).collect();
    let excess = words * WORD_BITS - count;
    if let Some(top) = limbs.last_mut() {
        *top >>= excess;
    }
    BigUnsigned::from_words(&limbs)
}

/// Wraps `text` for transmission. Without a key the text goes out in the
/// clear behind the `0` marker.
pub fn seal(
    key: Option<&EncryptionKey>,
    text: &str,
    params: &Params,
    source: &mut impl EntropySource,
) -> BigResult<String> {
    let key = match key {
        Some(key) => key,
        None => {
            let mut out = String::with_capacity(text.len() + 1);
            out.push(PLAIN_MARKER);
            out.push_str(text);
            return Ok(out);
        }
    };

    let mut out = String::new();
    out.push(SEALED_MARKER);
    let mut lines = 0;
    for chunk in text.as_bytes().chunks(params.chunk_size.max(1)) {
        let mut m = BigUnsigned::from_byte_string(chunk) << params.random_bits;
        m += random_bits(source, params.random_bits);
        let check = m.rem_word(params.checksum_modulus)?;
        m *= params.checksum_modulus;
        m += check;
        let c = m.pow_mod(key.exponent(), key.modulus())?;
        out.push_str(&c.to_base64());
        out.push('\n');
        lines += 1;
    }
    log::debug!("telemetry: sealed {} bytes into {} lines", text.len(), lines);
    Ok(out)
}

/// Reverses [`seal`] given the receiver's private exponent.
pub fn open(
    modulus: &BigUnsigned,
    private_exponent: &BigUnsigned,
    sealed: &str,
    params: &Params,
) -> BigResult<String> {
    if let Some(plain) = sealed.strip_prefix(PLAIN_MARKER) {
        return Ok(plain.to_string());
    }
    let body = match sealed.strip_prefix(SEALED_MARKER) {
        Some(body) => body,
        None => {
            log::debug!("telemetry: envelope has no marker");
            return Err(BigError::MalformedInput);
        }
    };

    let mut bytes = Vec::with_capacity(body.len());
    for line in body.split('\n').filter(|l| !l.is_empty()) {
        let c = BigUnsigned::parse_base64(line)?;
        let m = c.pow_mod(private_exponent, modulus)?;
        let (m, check) = m.div_rem_word(params.checksum_modulus)?;
        if m.rem_word(params.checksum_modulus)? != check {
            log::debug!("telemetry: checksum mismatch");
            return Err(BigError::FormatMismatch);
        }
        bytes.extend_from_slice(&(m >> params.random_bits).to_byte_string()?);
    }
    String::from_utf8(bytes).map_err(|_| BigError::MalformedInput)
}
