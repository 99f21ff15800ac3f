use super::BigUnsigned;
use crate::error::BigError;
use core::fmt;
use core::str::FromStr;

impl fmt::Display for BigUnsigned {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(true, "", &self.format_radix(10))
    }
}

impl fmt::UpperHex for BigUnsigned {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(true, "0x", &self.format_radix(16))
    }
}

impl fmt::LowerHex for BigUnsigned {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut s = self.format_radix(16);
        s.make_ascii_lowercase();
        f.pad_integral(true, "0x", &s)
    }
}

impl fmt::Octal for BigUnsigned {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(true, "0o", &self.format_radix(8))
    }
}

impl fmt::Binary for BigUnsigned {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(true, "0b", &self.format_radix(2))
    }
}

impl fmt::Debug for BigUnsigned {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigUnsigned({:#X}, limbs={})", self, self.limb_count())
    }
}

/// Decimal, or hex behind `0x`/`0X`.
impl FromStr for BigUnsigned {
    type Err = BigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, false)
    }
}
