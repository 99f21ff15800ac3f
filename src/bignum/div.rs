use super::shift::{shl_words, shr_words};
use super::word::{add_with_carry, div_wide, mul_wide_add, sub_with_borrow, DoubleWord, Word, WORD_BITS, WORD_MAX};
use super::BigUnsigned;
use crate::error::{BigError, BigResult};
use core::cmp::Ordering;

impl BigUnsigned {
    /// Quotient and remainder of `self / divisor`.
    pub fn div_rem(&self, divisor: &BigUnsigned) -> BigResult<(BigUnsigned, BigUnsigned)> {
        check_divisor(divisor.is_zero())?;
        Ok(self.div_rem_unchecked(divisor))
    }

    pub fn div_rem_word(&self, divisor: Word) -> BigResult<(BigUnsigned, Word)> {
        check_divisor(divisor == 0)?;
        Ok(self.div_rem_word_unchecked(divisor))
    }

    /// Remainder by a single word without building the quotient.
    pub fn rem_word(&self, divisor: Word) -> BigResult<Word> {
        check_divisor(divisor == 0)?;
        Ok(self.rem_word_unchecked(divisor))
    }

    pub fn checked_div(&self, divisor: &BigUnsigned) -> BigResult<BigUnsigned> {
        Ok(self.div_rem(divisor)?.0)
    }

    pub fn checked_rem(&self, divisor: &BigUnsigned) -> BigResult<BigUnsigned> {
        check_divisor(divisor.is_zero())?;
        Ok(self.rem_unchecked(divisor))
    }

    pub(crate) fn div_rem_unchecked(&self, divisor: &BigUnsigned) -> (BigUnsigned, BigUnsigned) {
        debug_assert!(divisor.is_nonzero());
        if divisor.limb_count() == 1 {
            let (q, r) = self.div_rem_word_unchecked(divisor.low_word());
            return (q, BigUnsigned::new(r));
        }
        match self.cmp(divisor) {
            Ordering::Less => (BigUnsigned::zero(), self.clone()),
            Ordering::Equal => (BigUnsigned::one(), BigUnsigned::zero()),
            Ordering::Greater => self.knuth_div_rem(divisor),
        }
    }

    pub(crate) fn rem_unchecked(&self, divisor: &BigUnsigned) -> BigUnsigned {
        if divisor.limb_count() == 1 {
            return BigUnsigned::new(self.rem_word_unchecked(divisor.low_word()));
        }
        self.div_rem_unchecked(divisor).1
    }

    fn rem_word_unchecked(&self, divisor: Word) -> Word {
        self.as_words().iter().rev().fold(0, |rem, &w| div_wide(rem, w, divisor).1)
    }

    pub(crate) fn div_rem_word_unchecked(&self, divisor: Word) -> (BigUnsigned, Word) {
        debug_assert!(divisor != 0);
        if divisor == 1 {
            return (self.clone(), 0);
        }
        if self.limb_count() == 1 {
            let n = self.low_word();
            return (BigUnsigned::new(n / divisor), n % divisor);
        }
        let words = self.as_words();
        let mut quotient = BigUnsigned::with_size(0, words.len());
        let out = quotient.on_write().words_mut();
        let mut rem = 0;
        for j in (0..words.len()).rev() {
            let (q, r) = div_wide(rem, words[j], divisor);
            out[j] = q;
            rem = r;
        }
        quotient.normalize();
        (quotient, rem)
    }

    // requires self > divisor and divisor of at least two limbs
    fn knuth_div_rem(&self, divisor: &BigUnsigned) -> (BigUnsigned, BigUnsigned) {
        let shift = divisor.top_word().leading_zeros() as usize;
        let n = divisor.limb_count();
        let len = self.limb_count();

        let mut work = self.clone();
        let buf = work.on_write();
        buf.expand(len + 1);
        let u = buf.words_mut();
        let spill = shl_words(u, shift);
        debug_assert_eq!(spill, 0);

        let mut v = divisor.clone();
        if shift != 0 {
            shl_words(v.on_write().words_mut(), shift);
        }
        divide_in_place(u, v.as_words());

        let mut remainder = BigUnsigned::with_size(0, n);
        shr_words(remainder.on_write().words_mut(), &u[..n], shift);
        remainder.normalize();
        (BigUnsigned::from_words(&u[n..]), remainder)
    }
}

fn check_divisor(is_zero: bool) -> BigResult<()> {
    if is_zero {
        log::trace!("bignum: division by zero");
        return Err(BigError::DivisionByZero);
    }
    Ok(())
}

/// Knuth's Algorithm D. `u` is the normalized dividend with one spare top
/// limb, `v` the divisor with its top bit set. On return `u[..n]` holds the
/// (still shifted) remainder and `u[n..]` the quotient.
fn divide_in_place(u: &mut [Word], v: &[Word]) {
    let n = v.len();
    let v_top = v[n - 1];
    let v_next = v[n - 2];
    for j in (0..u.len() - n).rev() {
        let top = u[j + n];
        let (mut qhat, mut rhat) = if top < v_top {
            let (q, r) = div_wide(top, u[j + n - 1], v_top);
            (q as DoubleWord, r as DoubleWord)
        } else {
            (WORD_MAX as DoubleWord, u[j + n - 1] as DoubleWord + v_top as DoubleWord)
        };
        while rhat <= WORD_MAX as DoubleWord
            && qhat * v_next as DoubleWord > ((rhat << WORD_BITS) | u[j + n - 2] as DoubleWord)
        {
            qhat -= 1;
            rhat += v_top as DoubleWord;
        }

        let mut q = qhat as Word;
        if q != 0 {
            let borrow = sub_mul(&mut u[j..j + n], v, q);
            // window top after the subtraction; nonzero means qhat overshot
            let mut top = u[j + n].wrapping_sub(borrow);
            while top != 0 {
                q -= 1;
                top = top.wrapping_add(add_back(&mut u[j..j + n], v) as Word);
            }
        }
        u[j + n] = q;
    }
}

// dest -= v * q over len(v) limbs; returns what is owed to the next limb up
fn sub_mul(dest: &mut [Word], v: &[Word], q: Word) -> Word {
    let mut carry = 0;
    for (d, &x) in dest.iter_mut().zip(v) {
        let (hi, lo) = mul_wide_add(x, q, carry);
        let (diff, borrow) = sub_with_borrow(*d, lo, false);
        *d = diff;
        carry = hi + borrow as Word;
    }
    carry
}

fn add_back(dest: &mut [Word], v: &[Word]) -> bool {
    let mut carry = false;
    for (d, &x) in dest.iter_mut().zip(v) {
        let (sum, c) = add_with_carry(*d, x, carry);
        *d = sum;
        carry = c;
    }
    carry
}
