use super::BigUnsigned;
use crate::error::{BigError, BigResult};
use core::mem;

impl BigUnsigned {
    /// `self ^ exponent` by square-and-multiply over the exponent bits, least
    /// significant first. `0 ^ 0` is 1.
    pub fn pow(&self, exponent: &BigUnsigned) -> BigUnsigned {
        let bits = exponent.bit_length();
        let mut result = BigUnsigned::one();
        let mut base = self.clone();
        for i in 0..bits {
            if exponent.bit(i) {
                result = result.mul_big(&base);
            }
            if i + 1 < bits {
                base = base.mul_big(&base);
            }
        }
        result
    }

    /// `self ^ exponent mod modulus`, reducing after every product.
    pub fn pow_mod(&self, exponent: &BigUnsigned, modulus: &BigUnsigned) -> BigResult<BigUnsigned> {
        if modulus.is_zero() {
            log::trace!("bignum: pow_mod with zero modulus");
            return Err(BigError::DivisionByZero);
        }
        if modulus.is_one() {
            return Ok(BigUnsigned::zero());
        }
        let bits = exponent.bit_length();
        let mut result = BigUnsigned::one();
        let mut base = self.rem_unchecked(modulus);
        for i in 0..bits {
            if exponent.bit(i) {
                result = result.mul_big(&base).rem_unchecked(modulus);
            }
            if i + 1 < bits {
                base = base.mul_big(&base).rem_unchecked(modulus);
            }
        }
        Ok(result)
    }

    /// Greatest common divisor by Euclid's algorithm; `gcd(a, 0) == a`.
    pub fn gcd(&self, other: &BigUnsigned) -> BigUnsigned {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }
        if self.is_one() || other.is_one() {
            return BigUnsigned::one();
        }
        let (mut a, mut b) = (self.clone(), other.clone());
        if a < b {
            mem::swap(&mut a, &mut b);
        }
        loop {
            let c = a.rem_unchecked(&b);
            if c.is_zero() {
                return b;
            }
            a = mem::replace(&mut b, c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> BigUnsigned {
        BigUnsigned::parse_radix(s, 10).unwrap()
    }

    #[test]
    fn plain_power() {
        let two = BigUnsigned::new(2);
        let mut expected = BigUnsigned::one();
        expected.shl_in_place(100);
        assert_eq!(two.pow(&BigUnsigned::new(100)), expected);
        assert_eq!(BigUnsigned::zero().pow(&BigUnsigned::zero()), 1);
        assert_eq!(BigUnsigned::new(7).pow(&BigUnsigned::one()), 7);
    }

    #[test]
    fn modular_power() {
        let m = BigUnsigned::new(1_000_000_007);
        let r = BigUnsigned::new(3).pow_mod(&BigUnsigned::new(200), &m).unwrap();
        assert_eq!(r, 136_318_165);

        let big = dec("123456789012345678901234567890");
        assert!(big.pow_mod(&big, &BigUnsigned::one()).unwrap().is_zero());
        assert_eq!(big.pow_mod(&BigUnsigned::zero(), &m).unwrap(), 1);
        assert_eq!(big.pow_mod(&big, &BigUnsigned::zero()), Err(BigError::DivisionByZero));
    }

    #[test]
    fn modular_power_matches_plain_power() {
        let b = dec("98765432109876543210");
        let e = BigUnsigned::new(37);
        let m = dec("340282366920938463463374607431768211507");
        assert_eq!(b.pow_mod(&e, &m).unwrap(), b.pow(&e).checked_rem(&m).unwrap());
    }

    #[test]
    fn euclid() {
        // 2^64 * 3 * 5 * 7 and 2^40 * 5 * 7 * 11
        let a = dec("1936908127739502919680");
        let b = dec("423311976693760");
        assert_eq!(a, BigUnsigned::new(105) << 64);
        assert_eq!(b, BigUnsigned::new(385) << 40);
        assert_eq!(a.gcd(&b), dec("38482906972160"));
        assert_eq!(b.gcd(&a), dec("38482906972160"));
        assert_eq!(dec("1936973215469963231395840").gcd(&b), dec("163840"));
        assert_eq!(a.gcd(&BigUnsigned::zero()), a);
        assert_eq!(BigUnsigned::zero().gcd(&b), b);
        assert_eq!(a.gcd(&a), a);
        assert_eq!(a.gcd(&BigUnsigned::one()), 1);
        assert_eq!(BigUnsigned::new(17).gcd(&BigUnsigned::new(5)), 1);
    }
}
