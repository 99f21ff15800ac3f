use super::word::{shl_wide, shr_wide, Word, WORD_BITS};
use super::BigUnsigned;

impl BigUnsigned {
    pub fn shl_in_place(&mut self, count: usize) {
        if count == 0 || self.is_zero() {
            return;
        }
        let limbs = count / WORD_BITS;
        let bits = count % WORD_BITS;
        let size = self.limb_count();
        if size == 1 && limbs == 0 && self.low_word() >> (WORD_BITS - bits) == 0 {
            let v = self.low_word() << bits;
            self.on_write().words_mut()[0] = v;
            return;
        }

        let top = if bits == 0 { 0 } else { self.top_word() >> (WORD_BITS - bits) };
        let new_size = size + limbs + (top != 0) as usize;
        let buf = self.on_write();
        buf.expand(new_size);
        let words = buf.words_mut();
        // top-down so every source limb is read before its slot is reused
        for i in (0..size).rev() {
            let lower = if i > 0 { words[i - 1] } else { 0 };
            words[i + limbs] = shl_wide(words[i], lower, bits);
        }
        if top != 0 {
            words[size + limbs] = top;
        }
        words[..limbs].fill(0);
    }

    pub fn shr_in_place(&mut self, count: usize) {
        if count == 0 || self.is_zero() {
            return;
        }
        let limbs = count / WORD_BITS;
        let bits = count % WORD_BITS;
        let size = self.limb_count();
        if size <= limbs {
            return self.set_word(0);
        }
        if size == limbs + 1 {
            let v = self.top_word() >> bits;
            return self.set_word(v);
        }

        let kept = size - limbs;
        let buf = self.on_write();
        let words = buf.words_mut();
        for i in 0..kept {
            let upper = if i + limbs + 1 < size { words[i + limbs + 1] } else { 0 };
            words[i] = shr_wide(upper, words[i + limbs], bits);
        }
        buf.resize(kept);
        self.normalize();
    }
}

/// Shifts `words` left by `bits` (< WORD_BITS) in place and returns the bits
/// pushed out of the top limb.
pub(crate) fn shl_words(words: &mut [Word], bits: usize) -> Word {
    if bits == 0 || words.is_empty() {
        return 0;
    }
    let out = words[words.len() - 1] >> (WORD_BITS - bits);
    for i in (0..words.len()).rev() {
        let lower = if i > 0 { words[i - 1] } else { 0 };
        words[i] = shl_wide(words[i], lower, bits);
    }
    out
}

/// `dest = src >> bits` for `bits < WORD_BITS`; `dest` and `src` have equal length.
pub(crate) fn shr_words(dest: &mut [Word], src: &[Word], bits: usize) {
    for i in 0..src.len() {
        let upper = src.get(i + 1).copied().unwrap_or(0);
        dest[i] = shr_wide(upper, src[i], bits);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bignum::word::WORD_MAX;

    #[test]
    fn shift_left_across_limbs() {
        let mut v = BigUnsigned::one();
        v.shl_in_place(130);
        assert_eq!(v.as_words(), &[0, 0, 0, 0, 4]);

        let mut w = BigUnsigned::from_words(&[0x8000_0001, 0xC000_0000]);
        w.shl_in_place(33);
        assert_eq!(w.as_words(), &[0, 2, 0x8000_0001, 1]);
    }

    #[test]
    fn shift_left_single_word_fast_path() {
        let mut v = BigUnsigned::new(3);
        v.shl_in_place(4);
        assert_eq!(v, 48);
        assert_eq!(BigUnsigned::new(3), 3);

        let mut x = BigUnsigned::new(WORD_MAX);
        x.shl_in_place(1);
        assert_eq!(x.as_words(), &[WORD_MAX - 1, 1]);
    }

    #[test]
    fn shift_right_drops_limbs() {
        let mut v = BigUnsigned::from_words(&[0, 0, 0, 0, 4]);
        v.shr_in_place(130);
        assert_eq!(v, 1);

        let mut w = BigUnsigned::from_words(&[0, 2, 0x8000_0001, 1]);
        w.shr_in_place(33);
        assert_eq!(w.as_words(), &[0x8000_0001, 0xC000_0000]);

        let mut gone = BigUnsigned::from_words(&[1, 2]);
        gone.shr_in_place(64);
        assert!(gone.is_zero());
    }

    #[test]
    fn round_trip_keeps_source_intact() {
        let src = BigUnsigned::from_words(&[0xDEAD_BEEF, 0x1234_5678, 9]);
        let mut v = src.clone();
        v.shl_in_place(77);
        v.shr_in_place(77);
        assert_eq!(v, src);
        assert_eq!(src.as_words(), &[0xDEAD_BEEF, 0x1234_5678, 9]);
    }

    #[test]
    fn word_slice_helpers() {
        let mut w = [0x8000_0000, 0xFFFF_FFFF];
        assert_eq!(shl_words(&mut w, 4), 0xF);
        assert_eq!(w, [0, 0xFFFF_FFF8]);

        let mut out = [0; 2];
        shr_words(&mut out, &w, 4);
        assert_eq!(out, [0x8000_0000, 0x0FFF_FFFF]);
    }
}
