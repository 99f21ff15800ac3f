//! Arbitrary-precision unsigned integers over 32-bit limbs.
//!
//! A [`BigUnsigned`] holds one reference to a shared [`storage::WordBuffer`].
//! Cloning is O(1); the buffer is copied only when a value that shares it is
//! about to be mutated. Values are always normalized: no leading zero limbs,
//! and zero is a single zero limb.

pub mod word;
pub mod storage;
mod arith;
mod shift;
mod div;
mod radix;
mod bytes;
mod base64;
mod power;
mod ops;
mod display;

pub use radix::{MAX_RADIX, MIN_RADIX};
pub use storage::SMALL_NUMBER_COUNT;
pub use word::{Word, BYTES_PER_WORD, WORD_BITS};

use alloc::sync::Arc;
use storage::WordBuffer;

#[derive(Clone)]
pub struct BigUnsigned {
    data: Arc<WordBuffer>,
}

impl BigUnsigned {
    pub fn new(value: Word) -> Self {
        match storage::small_number(value) {
            Some(data) => Self { data },
            None => Self { data: Arc::new(WordBuffer::new(value, 1)) },
        }
    }

    pub fn zero() -> Self { Self::new(0) }
    pub fn one() -> Self { Self::new(1) }

    /// Builds a value from little-endian limbs.
    pub fn from_words(words: &[Word]) -> Self {
        let mut v = Self { data: Arc::new(WordBuffer::from_words(words)) };
        v.normalize();
        v
    }

    /// A fresh, uniquely owned, zero-filled buffer of `size` limbs. Not
    /// normalized; callers fill it and then call `normalize`.
    pub(crate) fn with_size(value: Word, size: usize) -> Self {
        Self { data: Arc::new(WordBuffer::new(value, size)) }
    }

    /// Little-endian limbs, most significant limb nonzero unless the value is zero.
    pub fn as_words(&self) -> &[Word] {
        self.data.words()
    }

    pub fn limb_count(&self) -> usize {
        self.data.size()
    }

    pub(crate) fn top_word(&self) -> Word {
        self.as_words()[self.limb_count() - 1]
    }

    /// The least-significant limb. Higher limbs are discarded without any
    /// range check; callers that need the full value must compare first.
    pub fn low_word(&self) -> Word {
        self.as_words()[0]
    }

    pub fn is_zero(&self) -> bool {
        self.limb_count() == 1 && self.low_word() == 0
    }

    pub fn is_nonzero(&self) -> bool {
        !self.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.limb_count() == 1 && self.low_word() == 1
    }

    pub fn bit_length(&self) -> usize {
        let top = self.top_word();
        (self.limb_count() - 1) * WORD_BITS + (WORD_BITS - top.leading_zeros() as usize)
    }

    pub fn bit(&self, index: usize) -> bool {
        let words = self.as_words();
        match words.get(index / WORD_BITS) {
            Some(w) => (w >> (index % WORD_BITS)) & 1 != 0,
            None => false,
        }
    }

    /// Number of values (including the small-number cache) sharing this
    /// value's buffer.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.data)
    }

    pub fn shares_storage(&self, other: &BigUnsigned) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Mutates the limbs in place when this value owns its buffer, otherwise
    /// on a private copy. The result is renormalized afterwards, so `f` may
    /// leave leading zero limbs behind.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut [Word]) -> R) -> R {
        let r = f(self.on_write().words_mut());
        self.normalize();
        r
    }

    pub(crate) fn on_write(&mut self) -> &mut WordBuffer {
        storage::on_write(&mut self.data)
    }

    pub(crate) fn normalize(&mut self) {
        if !self.data.is_normalized() {
            self.on_write().normalize();
        }
    }

    /// Replaces the value with a single word, reusing the buffer when it is
    /// not shared.
    pub fn set_word(&mut self, value: Word) {
        if self.limb_count() == 1 && self.low_word() == value {
            return;
        }
        if self.ref_count() > 1 {
            *self = Self::new(value);
        } else {
            self.on_write().set_word(value);
        }
    }
}

impl Default for BigUnsigned {
    fn default() -> Self {
        Self::zero()
    }
}

macro_rules! from_native {
    ($($t:ty),*) => {$(
        impl From<$t> for BigUnsigned {
            fn from(v: $t) -> Self {
                Self::new(v as Word)
            }
        }
    )*};
}

from_native!(u8, u16, u32);

impl From<u64> for BigUnsigned {
    fn from(v: u64) -> Self {
        Self::from_words(&[v as Word, (v >> WORD_BITS) as Word])
    }
}

impl From<&BigUnsigned> for Word {
    /// Truncates to the least-significant limb.
    fn from(v: &BigUnsigned) -> Word {
        v.low_word()
    }
}
