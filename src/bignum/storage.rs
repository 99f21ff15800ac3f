use super::word::Word;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use lazy_static::lazy_static;

pub const SMALL_NUMBER_COUNT: usize = 32;

/// Limb storage shared between values. `words.len()` is the allocated
/// capacity, `size` the number of limbs in use; index 0 is least significant.
#[derive(Debug)]
pub struct WordBuffer {
    words: Vec<Word>,
    size: usize,
}

impl WordBuffer {
    pub fn new(value: Word, size: usize) -> Self {
        let size = size.max(1);
        let mut words = vec![0; size];
        words[0] = value;
        Self { words, size }
    }

    pub fn from_words(src: &[Word]) -> Self {
        if src.is_empty() {
            return Self::new(0, 1);
        }
        Self { words: src.to_vec(), size: src.len() }
    }

    pub fn size(&self) -> usize { self.size }
    pub fn allocated(&self) -> usize { self.words.len() }

    pub fn words(&self) -> &[Word] {
        &self.words[..self.size]
    }

    pub fn words_mut(&mut self) -> &mut [Word] {
        &mut self.words[..self.size]
    }

    /// Grows the logical size, zero-filling the new limbs. Reallocation adds a
    /// quarter of the current size as slack; capacity never shrinks.
    pub fn expand(&mut self, new_size: usize) {
        if new_size <= self.size {
            return;
        }
        if new_size > self.words.len() {
            self.words.resize(new_size + self.size / 4, 0);
        }
        self.words[self.size..new_size].fill(0);
        self.size = new_size;
    }

    pub fn resize(&mut self, new_size: usize) {
        debug_assert!(new_size >= 1);
        self.expand(new_size);
        self.size = new_size.max(1);
    }

    /// Drops leading zero limbs, keeping at least one.
    pub fn normalize(&mut self) {
        while self.size > 1 && self.words[self.size - 1] == 0 {
            self.size -= 1;
        }
    }

    pub fn set_word(&mut self, value: Word) {
        self.size = 1;
        self.words[0] = value;
    }

    pub fn is_normalized(&self) -> bool {
        self.size == 1 || self.words[self.size - 1] != 0
    }
}

// the copy made by the write gate keeps only the limbs in use
impl Clone for WordBuffer {
    fn clone(&self) -> Self {
        Self::from_words(self.words())
    }
}

lazy_static! {
    static ref SMALL_NUMBERS: [Arc<WordBuffer>; SMALL_NUMBER_COUNT] =
        core::array::from_fn(|i| Arc::new(WordBuffer::new(i as Word, 1)));
}

/// Shared singleton buffer for `value` if it falls in the cached range.
pub fn small_number(value: Word) -> Option<Arc<WordBuffer>> {
    SMALL_NUMBERS.get(value as usize).cloned()
}

/// The write gate: returns a uniquely owned buffer, cloning first if any other
/// value (or the small-number cache) still holds a reference.
pub fn on_write(data: &mut Arc<WordBuffer>) -> &mut WordBuffer {
    if Arc::strong_count(data) > 1 {
        log::trace!("bignum: copy-on-write of {} limbs", data.size());
    }
    Arc::make_mut(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_zero_fills_above_value() {
        let b = WordBuffer::new(7, 3);
        assert_eq!(b.words(), &[7, 0, 0]);
        assert_eq!(b.allocated(), 3);
    }

    #[test]
    fn expand_adds_slack_and_zero_fills() {
        let mut b = WordBuffer::from_words(&[1, 2, 3, 4, 5, 6, 7, 8]);
        b.resize(2);
        b.expand(4);
        assert_eq!(b.words(), &[1, 2, 0, 0]);
        assert_eq!(b.allocated(), 8);

        b.expand(12);
        assert_eq!(b.size(), 12);
        assert_eq!(b.allocated(), 13);
        assert!(b.words()[2..].iter().all(|&w| w == 0));
    }

    #[test]
    fn resize_does_not_shrink_allocation() {
        let mut b = WordBuffer::new(1, 10);
        b.resize(1);
        assert_eq!(b.size(), 1);
        assert_eq!(b.allocated(), 10);
    }

    #[test]
    fn clone_is_compact() {
        let mut b = WordBuffer::new(9, 16);
        b.normalize();
        let c = b.clone();
        assert_eq!(c.words(), &[9]);
        assert_eq!(c.allocated(), 1);
    }

    #[test]
    fn write_gate_never_touches_cached_buffers() {
        let mut shared = small_number(5).unwrap();
        let before = small_number(5).unwrap();
        on_write(&mut shared).set_word(6);
        assert_eq!(shared.words(), &[6]);
        assert_eq!(before.words(), &[5]);
        assert_eq!(small_number(5).unwrap().words(), &[5]);
        assert!(small_number(SMALL_NUMBER_COUNT as Word).is_none());
    }
}
