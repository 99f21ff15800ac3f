use super::word::{add_with_carry, mul_wide, mul_wide_add, mul_wide_add2, sub_with_borrow, Word, WORD_MAX};
use super::BigUnsigned;
use crate::error::{BigError, BigResult};
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

impl BigUnsigned {
    pub fn add_word_in_place(&mut self, b: Word) {
        if b == 0 {
            return;
        }
        let buf = self.on_write();
        let (sum, carry) = add_with_carry(buf.words()[0], b, false);
        buf.words_mut()[0] = sum;
        if !carry {
            return;
        }
        let size = buf.size();
        buf.expand(size + 1);
        for w in &mut buf.words_mut()[1..] {
            let old = *w;
            *w = old.wrapping_add(1);
            if old != WORD_MAX {
                break;
            }
        }
        self.normalize();
    }

    pub fn add_in_place(&mut self, b: &BigUnsigned) {
        if b.limb_count() == 1 {
            return self.add_word_in_place(b.low_word());
        }
        let bw = b.as_words();
        let size = self.limb_count().max(bw.len()) + 1;
        let buf = self.on_write();
        buf.expand(size);
        let words = buf.words_mut();
        let mut carry = false;
        for i in 0..size {
            let x = match bw.get(i) {
                Some(&x) => x,
                None if carry => 0,
                None => break,
            };
            let (sum, c) = add_with_carry(words[i], x, carry);
            words[i] = sum;
            carry = c;
        }
        self.normalize();
    }

    /// `self -= b`. Fails without touching `self` when `b > self`.
    pub(crate) fn try_sub_in_place(&mut self, b: &BigUnsigned) -> BigResult<()> {
        if *self < *b {
            log::trace!("bignum: subtraction underflow");
            return Err(BigError::ArithmeticUnderflow);
        }
        if b.is_zero() {
            return Ok(());
        }
        let bw = b.as_words();
        let words = self.on_write().words_mut();
        let mut borrow = false;
        for (w, &x) in words.iter_mut().zip(bw) {
            let (diff, br) = sub_with_borrow(*w, x, borrow);
            *w = diff;
            borrow = br;
        }
        if borrow {
            decrement_from(&mut words[bw.len()..]);
        }
        self.normalize();
        Ok(())
    }

    pub fn try_sub_word_in_place(&mut self, b: Word) -> BigResult<()> {
        if *self < b {
            log::trace!("bignum: subtraction underflow");
            return Err(BigError::ArithmeticUnderflow);
        }
        if b == 0 {
            return Ok(());
        }
        let words = self.on_write().words_mut();
        let (diff, borrow) = sub_with_borrow(words[0], b, false);
        words[0] = diff;
        if borrow {
            decrement_from(&mut words[1..]);
        }
        self.normalize();
        Ok(())
    }

    pub fn checked_sub(&self, b: &BigUnsigned) -> BigResult<BigUnsigned> {
        let mut r = self.clone();
        r.try_sub_in_place(b)?;
        Ok(r)
    }

    pub fn increment(&mut self) {
        self.add_word_in_place(1);
    }

    pub fn decrement(&mut self) -> BigResult<()> {
        self.try_sub_word_in_place(1)
    }

    pub fn mul_word_in_place(&mut self, b: Word) {
        match b {
            0 => return self.set_word(0),
            1 => return,
            _ => {}
        }
        if self.limb_count() == 1 {
            let (hi, lo) = mul_wide(self.low_word(), b);
            if hi == 0 {
                self.set_word(lo);
            } else {
                *self = BigUnsigned::from_words(&[lo, hi]);
            }
            return;
        }
        let size = self.limb_count();
        let buf = self.on_write();
        buf.resize(size + 1);
        let words = buf.words_mut();
        let mut carry = 0;
        for w in &mut words[..size] {
            let (hi, lo) = mul_wide_add(*w, b, carry);
            *w = lo;
            carry = hi;
        }
        words[size] = carry;
        self.normalize();
    }

    /// Schoolbook product. A zero operand is always single-limb, so it takes
    /// the word path and yields a one-limb zero.
    pub fn mul_big(&self, rhs: &BigUnsigned) -> BigUnsigned {
        let (a, b) = if self.limb_count() < rhs.limb_count() { (rhs, self) } else { (self, rhs) };
        if b.limb_count() == 1 {
            let mut r = a.clone();
            r.mul_word_in_place(b.low_word());
            return r;
        }
        let (aw, bw) = (a.as_words(), b.as_words());
        let mut product = BigUnsigned::with_size(0, aw.len() + bw.len());
        let out = product.on_write().words_mut();
        for (i, &y) in bw.iter().enumerate() {
            let mut carry = 0;
            for (j, &x) in aw.iter().enumerate() {
                let (hi, lo) = mul_wide_add2(x, y, out[i + j], carry);
                out[i + j] = lo;
                carry = hi;
            }
            out[i + aw.len()] = carry;
        }
        product.normalize();
        product
    }

    pub fn mul_in_place(&mut self, rhs: &BigUnsigned) {
        *self = self.mul_big(rhs);
    }

    pub fn and_in_place(&mut self, b: &BigUnsigned) {
        let bw = b.as_words();
        let size = self.limb_count().min(bw.len());
        let buf = self.on_write();
        buf.resize(size);
        for (w, &x) in buf.words_mut().iter_mut().zip(bw) {
            *w &= x;
        }
        self.normalize();
    }

    pub fn and_word_in_place(&mut self, b: Word) {
        let v = self.low_word() & b;
        self.set_word(v);
    }

    pub fn or_in_place(&mut self, b: &BigUnsigned) {
        let bw = b.as_words();
        let buf = self.on_write();
        buf.expand(bw.len());
        for (w, &x) in buf.words_mut().iter_mut().zip(bw) {
            *w |= x;
        }
        self.normalize();
    }

    pub fn or_word_in_place(&mut self, b: Word) {
        if b != 0 {
            self.on_write().words_mut()[0] |= b;
        }
    }

    pub fn xor_in_place(&mut self, b: &BigUnsigned) {
        let bw = b.as_words();
        let buf = self.on_write();
        buf.expand(bw.len());
        for (w, &x) in buf.words_mut().iter_mut().zip(bw) {
            *w ^= x;
        }
        self.normalize();
    }

    pub fn xor_word_in_place(&mut self, b: Word) {
        if b != 0 {
            self.on_write().words_mut()[0] ^= b;
            self.normalize();
        }
    }
}

// borrow propagation: decrement until a limb did not wrap
fn decrement_from(words: &mut [Word]) {
    for w in words {
        let old = *w;
        *w = old.wrapping_sub(1);
        if old != 0 {
            break;
        }
    }
}

impl PartialEq for BigUnsigned {
    fn eq(&self, other: &Self) -> bool {
        self.shares_storage(other) || self.as_words() == other.as_words()
    }
}

impl Eq for BigUnsigned {}

impl Ord for BigUnsigned {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.shares_storage(other) {
            return Ordering::Equal;
        }
        self.limb_count()
            .cmp(&other.limb_count())
            .then_with(|| self.as_words().iter().rev().cmp(other.as_words().iter().rev()))
    }
}

impl PartialOrd for BigUnsigned {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<Word> for BigUnsigned {
    fn eq(&self, other: &Word) -> bool {
        self.limb_count() == 1 && self.low_word() == *other
    }
}

impl PartialOrd<Word> for BigUnsigned {
    fn partial_cmp(&self, other: &Word) -> Option<Ordering> {
        if self.limb_count() > 1 {
            return Some(Ordering::Greater);
        }
        Some(self.low_word().cmp(other))
    }
}

impl Hash for BigUnsigned {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_words().hash(state);
    }
}
