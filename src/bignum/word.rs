//! Double-width limb primitives. Everything here is O(1) and allocation-free.

pub type Word = u32;
pub type DoubleWord = u64;

pub const WORD_MAX: Word = Word::MAX;
pub const BYTES_PER_WORD: usize = core::mem::size_of::<Word>();
pub const WORD_BITS: usize = BYTES_PER_WORD * 8;

#[inline]
pub fn add_with_carry(a: Word, b: Word, carry: bool) -> (Word, bool) {
    let v = a as DoubleWord + b as DoubleWord + carry as DoubleWord;
    (v as Word, v > WORD_MAX as DoubleWord)
}

#[inline]
pub fn sub_with_borrow(a: Word, b: Word, borrow: bool) -> (Word, bool) {
    let v = (a as DoubleWord | (1 << WORD_BITS)) - b as DoubleWord - borrow as DoubleWord;
    (v as Word, v <= WORD_MAX as DoubleWord)
}

/// `a * b` as `(high, low)`.
#[inline]
pub fn mul_wide(a: Word, b: Word) -> (Word, Word) {
    split(a as DoubleWord * b as DoubleWord)
}

/// `a * b + term`; cannot overflow the double word.
#[inline]
pub fn mul_wide_add(a: Word, b: Word, term: Word) -> (Word, Word) {
    split(a as DoubleWord * b as DoubleWord + term as DoubleWord)
}

/// `a * b + t1 + t2`. `(2^W - 1)^2 + 2(2^W - 1)` is exactly `2^2W - 1`, so
/// this is the widest accumulate that still fits.
#[inline]
pub fn mul_wide_add2(a: Word, b: Word, t1: Word, t2: Word) -> (Word, Word) {
    split(a as DoubleWord * b as DoubleWord + t1 as DoubleWord + t2 as DoubleWord)
}

/// `(hi:lo) / d` as `(quotient, remainder)`. The quotient only fits a word
/// when `hi < d`.
#[inline]
pub fn div_wide(hi: Word, lo: Word, d: Word) -> (Word, Word) {
    debug_assert!(hi < d);
    let n = join(hi, lo);
    let d = d as DoubleWord;
    ((n / d) as Word, (n % d) as Word)
}

/// High word of `(hi:lo) << count`, i.e. `hi` with the top bits of `lo`
/// shifted in.
#[inline]
pub fn shl_wide(hi: Word, lo: Word, count: usize) -> Word {
    debug_assert!(count < WORD_BITS);
    ((join(hi, lo) << count) >> WORD_BITS) as Word
}

/// Low word of `(hi:lo) >> count`.
#[inline]
pub fn shr_wide(hi: Word, lo: Word, count: usize) -> Word {
    debug_assert!(count < WORD_BITS);
    (join(hi, lo) >> count) as Word
}

#[inline]
fn join(hi: Word, lo: Word) -> DoubleWord {
    (hi as DoubleWord) << WORD_BITS | lo as DoubleWord
}

#[inline]
fn split(v: DoubleWord) -> (Word, Word) {
    ((v >> WORD_BITS) as Word, v as Word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carry_and_borrow() {
        assert_eq!(add_with_carry(WORD_MAX, 1, false), (0, true));
        assert_eq!(add_with_carry(WORD_MAX, WORD_MAX, true), (WORD_MAX, true));
        assert_eq!(add_with_carry(2, 3, true), (6, false));
        assert_eq!(sub_with_borrow(0, 1, false), (WORD_MAX, true));
        assert_eq!(sub_with_borrow(5, 5, true), (WORD_MAX, true));
        assert_eq!(sub_with_borrow(7, 2, true), (4, false));
    }

    #[test]
    fn widening_multiply() {
        assert_eq!(mul_wide(WORD_MAX, WORD_MAX), (WORD_MAX - 1, 1));
        assert_eq!(mul_wide_add(WORD_MAX, WORD_MAX, WORD_MAX), (WORD_MAX, 0));
        assert_eq!(mul_wide_add2(WORD_MAX, WORD_MAX, WORD_MAX, WORD_MAX), (WORD_MAX, WORD_MAX));
    }

    #[test]
    fn widening_divide() {
        assert_eq!(div_wide(1, 0, 2), (0x8000_0000, 0));
        assert_eq!(div_wide(6, 7, 7), (0xDB6D_B6DC, 3));
    }

    #[test]
    fn cross_word_shifts() {
        assert_eq!(shl_wide(0x0000_0001, 0x8000_0000, 1), 3);
        assert_eq!(shl_wide(0x1234_5678, 0xFFFF_FFFF, 0), 0x1234_5678);
        assert_eq!(shr_wide(0x0000_0001, 0x0000_0000, 1), 0x8000_0000);
        assert_eq!(shr_wide(0xAAAA_AAAA, 0x5555_5555, 0), 0x5555_5555);
    }
}
