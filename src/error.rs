use thiserror::Error;

/// Everything that can go wrong in [`BigInteger`](crate::BigInteger) and
/// [`Rational`](crate::Rational) operations.
#[derive(Error, Debug)]
pub enum ArithError {
    #[error("attempt to divide by zero")]
    DivisionByZero,

    #[error("rational number with zero denominator")]
    ZeroDenominator,

    #[error("cannot parse number from empty input")]
    EmptyInput,

    #[error("invalid character {found:?} at position {position}")]
    InvalidDigit { found: char, position: usize },

    #[error("invalid UTF-8 at byte {position}")]
    InvalidUtf8 { position: usize },

    #[error("value out of range for {target}")]
    OutOfRange { target: &'static str },

    #[error("unsupported radix {0}, only base 10 is supported")]
    UnsupportedRadix(u32),

    #[error("negative exponent")]
    NegativeExponent,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ArithError>;
