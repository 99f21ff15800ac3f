use core::fmt;

pub type BigResult<T> = Result<T, BigError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BigError {
    MalformedInput = 1,
    RangeError = 2,
    DivisionByZero = 3,
    ArithmeticUnderflow = 4,
    FormatMismatch = 5,
    InvalidModulus = 6,
}

impl BigError {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MalformedInput => "malformed input",
            Self::RangeError => "radix out of range",
            Self::DivisionByZero => "division by zero",
            Self::ArithmeticUnderflow => "subtraction has negative result",
            Self::FormatMismatch => "number not in byte string format",
            Self::InvalidModulus => "invalid encryption modulus",
        }
    }

    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for BigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::error::Error for BigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn codes_are_stable() {
        assert_eq!(BigError::MalformedInput.code(), 1);
        assert_eq!(BigError::InvalidModulus.code(), 6);
        assert_eq!(BigError::DivisionByZero.to_string(), "division by zero");
    }
}
