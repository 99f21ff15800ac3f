//! `core::ops` surface. Operators that cannot fail return `BigUnsigned`;
//! subtraction, division and remainder return `BigResult<BigUnsigned>`.

use super::word::Word;
use super::BigUnsigned;
use crate::error::BigResult;
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, Mul,
    MulAssign, Rem, Shl, ShlAssign, Shr, ShrAssign, Sub,
};

macro_rules! infallible_op {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident, $big:ident, $word:ident) => {
        impl $assign<&BigUnsigned> for BigUnsigned {
            fn $assign_method(&mut self, rhs: &BigUnsigned) {
                self.$big(rhs);
            }
        }

        impl $assign<BigUnsigned> for BigUnsigned {
            fn $assign_method(&mut self, rhs: BigUnsigned) {
                self.$big(&rhs);
            }
        }

        impl $assign<Word> for BigUnsigned {
            fn $assign_method(&mut self, rhs: Word) {
                self.$word(rhs);
            }
        }

        impl $op<&BigUnsigned> for &BigUnsigned {
            type Output = BigUnsigned;
            fn $method(self, rhs: &BigUnsigned) -> BigUnsigned {
                let mut r = self.clone();
                r.$big(rhs);
                r
            }
        }

        impl $op<BigUnsigned> for &BigUnsigned {
            type Output = BigUnsigned;
            fn $method(self, rhs: BigUnsigned) -> BigUnsigned {
                self.$method(&rhs)
            }
        }

        impl $op<&BigUnsigned> for BigUnsigned {
            type Output = BigUnsigned;
            fn $method(mut self, rhs: &BigUnsigned) -> BigUnsigned {
                self.$big(rhs);
                self
            }
        }

        impl $op<BigUnsigned> for BigUnsigned {
            type Output = BigUnsigned;
            fn $method(mut self, rhs: BigUnsigned) -> BigUnsigned {
                self.$big(&rhs);
                self
            }
        }

        impl $op<Word> for &BigUnsigned {
            type Output = BigUnsigned;
            fn $method(self, rhs: Word) -> BigUnsigned {
                let mut r = self.clone();
                r.$word(rhs);
                r
            }
        }

        impl $op<Word> for BigUnsigned {
            type Output = BigUnsigned;
            fn $method(mut self, rhs: Word) -> BigUnsigned {
                self.$word(rhs);
                self
            }
        }
    };
}

infallible_op!(Add, add, AddAssign, add_assign, add_in_place, add_word_in_place);
infallible_op!(Mul, mul, MulAssign, mul_assign, mul_in_place, mul_word_in_place);
infallible_op!(BitAnd, bitand, BitAndAssign, bitand_assign, and_in_place, and_word_in_place);
infallible_op!(BitOr, bitor, BitOrAssign, bitor_assign, or_in_place, or_word_in_place);
infallible_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, xor_in_place, xor_word_in_place);

macro_rules! shift_op {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident, $in_place:ident) => {
        impl $assign<usize> for BigUnsigned {
            fn $assign_method(&mut self, count: usize) {
                self.$in_place(count);
            }
        }

        impl $op<usize> for BigUnsigned {
            type Output = BigUnsigned;
            fn $method(mut self, count: usize) -> BigUnsigned {
                self.$in_place(count);
                self
            }
        }

        impl $op<usize> for &BigUnsigned {
            type Output = BigUnsigned;
            fn $method(self, count: usize) -> BigUnsigned {
                self.clone().$method(count)
            }
        }
    };
}

shift_op!(Shl, shl, ShlAssign, shl_assign, shl_in_place);
shift_op!(Shr, shr, ShrAssign, shr_assign, shr_in_place);

// `$checked` takes `(&BigUnsigned, &BigUnsigned)`, `$checked_word` takes
// `(&BigUnsigned, Word)`; both return `BigResult<BigUnsigned>`.
macro_rules! fallible_op {
    ($op:ident, $method:ident, $checked:expr, $checked_word:expr) => {
        impl $op<&BigUnsigned> for &BigUnsigned {
            type Output = BigResult<BigUnsigned>;
            fn $method(self, rhs: &BigUnsigned) -> Self::Output {
                $checked(self, rhs)
            }
        }

        impl $op<BigUnsigned> for &BigUnsigned {
            type Output = BigResult<BigUnsigned>;
            fn $method(self, rhs: BigUnsigned) -> Self::Output {
                $checked(self, &rhs)
            }
        }

        impl $op<&BigUnsigned> for BigUnsigned {
            type Output = BigResult<BigUnsigned>;
            fn $method(self, rhs: &BigUnsigned) -> Self::Output {
                $checked(&self, rhs)
            }
        }

        impl $op<BigUnsigned> for BigUnsigned {
            type Output = BigResult<BigUnsigned>;
            fn $method(self, rhs: BigUnsigned) -> Self::Output {
                $checked(&self, &rhs)
            }
        }

        impl $op<Word> for &BigUnsigned {
            type Output = BigResult<BigUnsigned>;
            fn $method(self, rhs: Word) -> Self::Output {
                $checked_word(self, rhs)
            }
        }

        impl $op<Word> for BigUnsigned {
            type Output = BigResult<BigUnsigned>;
            fn $method(self, rhs: Word) -> Self::Output {
                $checked_word(&self, rhs)
            }
        }
    };
}

fallible_op!(Sub, sub, BigUnsigned::checked_sub, |a: &BigUnsigned, b: Word| {
    let mut r = a.clone();
    r.try_sub_word_in_place(b).map(|()| r)
});
fallible_op!(Div, div, BigUnsigned::checked_div, |a: &BigUnsigned, b: Word| {
    a.div_rem_word(b).map(|(q, _)| q)
});
fallible_op!(Rem, rem, BigUnsigned::checked_rem, |a: &BigUnsigned, b: Word| {
    a.rem_word(b).map(BigUnsigned::new)
});

impl BigUnsigned {
    /// `self -= rhs`; on underflow `self` is unchanged.
    pub fn try_sub_assign(&mut self, rhs: &BigUnsigned) -> BigResult<()> {
        self.try_sub_in_place(rhs)
    }

    /// `self /= rhs`; on division by zero `self` is unchanged.
    pub fn try_div_assign(&mut self, rhs: &BigUnsigned) -> BigResult<()> {
        *self = self.checked_div(rhs)?;
        Ok(())
    }

    pub fn try_rem_assign(&mut self, rhs: &BigUnsigned) -> BigResult<()> {
        *self = self.checked_rem(rhs)?;
        Ok(())
    }
}
