//! # Rational
//! Exact fractions of two [`BigInteger`]s, always kept in lowest terms with a
//! positive denominator.
//! # Example
//! ```
//! use precise_arith::Rational;
//!
//! let a = Rational::new(1.into(), 3.into()).unwrap();
//! let b = Rational::new(1.into(), 6.into()).unwrap();
//! assert_eq!((&a + &b).to_string(), "1/2");
//! assert_eq!(a.to_decimal_string(5), "0.33333");
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Neg,
};
use std::str::FromStr;

use log::debug;

use crate::big_integer::BigInteger;
use crate::big_num_cache::{ONE, TEN};
use crate::big_num_constants::DOUBLE_PRECISION;
use crate::error::{ArithError, Result};
use crate::math::gcd;

/// A fraction `numerator / denominator`.
///
/// Every value is reduced (`gcd(|numerator|, denominator) == 1`) and the
/// denominator is strictly positive, so the derived equality and hash compare
/// values exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: BigInteger,
    denominator: BigInteger,
}

// 实现构造
impl Rational {
    /// Builds `numerator / denominator` in lowest terms.
    pub fn new(numerator: BigInteger, denominator: BigInteger) -> Result<Rational> {
        if denominator.is_zero() {
            debug!("rejecting rational {}/0", numerator);
            return Err(ArithError::ZeroDenominator);
        }
        Ok(Rational::new_normalized(numerator, denominator))
    }
    // denominator must be non-zero
    fn new_normalized(numerator: BigInteger, denominator: BigInteger) -> Rational {
        let mut val = Rational { numerator, denominator };
        val.normalize();
        val
    }
    pub fn from_integer(val: BigInteger) -> Rational {
        Rational { numerator: val, denominator: ONE.clone() }
    }
    fn normalize(&mut self) {
        if self.denominator.is_negative() {
            self.numerator = -std::mem::take(&mut self.numerator);
            self.denominator = -std::mem::take(&mut self.denominator);
        }
        // a zero numerator gives g == denominator, collapsing to 0/1
        let g = gcd(&self.numerator, &self.denominator);
        if g != *ONE {
            self.numerator = &self.numerator / &g;
            self.denominator = &self.denominator / &g;
        }
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational::from_integer(BigInteger::default())
    }
}

impl From<BigInteger> for Rational {
    fn from(val: BigInteger) -> Self {
        Rational::from_integer(val)
    }
}

impl From<&BigInteger> for Rational {
    fn from(val: &BigInteger) -> Self {
        Rational::from_integer(val.clone())
    }
}

macro_rules! impl_native_to_rational {
    ($($t: ty),*) => {
    $(
    impl From<$t> for Rational {
        fn from(val: $t) -> Self {
            Rational::from_integer(BigInteger::from(val))
        }
    }
    )*
    };
}
impl_native_to_rational!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

// 实现访问
impl Rational {
    pub fn numer(&self) -> &BigInteger {
        &self.numerator
    }
    /// Always positive.
    pub fn denom(&self) -> &BigInteger {
        &self.denominator
    }
    pub fn into_parts(self) -> (BigInteger, BigInteger) {
        (self.numerator, self.denominator)
    }
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }
    pub fn is_integer(&self) -> bool {
        self.denominator == *ONE
    }
    pub fn abs(&self) -> Rational {
        Rational { numerator: self.numerator.abs(), denominator: self.denominator.clone() }
    }
    /// Integer part, rounded toward zero.
    pub fn trunc(&self) -> BigInteger {
        &self.numerator / &self.denominator
    }
    /// `1 / self`.
    pub fn recip(&self) -> Result<Rational> {
        if self.numerator.is_zero() {
            debug!("reciprocal of zero");
            return Err(ArithError::DivisionByZero);
        }
        Ok(Rational::new_normalized(self.denominator.clone(), self.numerator.clone()))
    }
}

// 实现打印
impl Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl Rational {
    /// Decimal expansion with exactly `precision` fractional digits.
    ///
    /// Digits past `precision` are cut off, never rounded. A negative value
    /// keeps its sign even when every printed digit is zero, e.g. `-1/3` at
    /// precision 0 renders as `-0`.
    pub fn to_decimal_string(&self, precision: usize) -> String {
        let mut result = String::new();
        if self.numerator.is_negative() {
            result.push('-');
        }

        let numerator = self.numerator.abs();
        let int_part = &numerator / &self.denominator;
        let mut remainder = &numerator % &self.denominator;
        result.push_str(&int_part.to_string());

        if precision > 0 {
            result.push('.');
            for _ in 0..precision {
                remainder = &remainder * &*TEN;
                let digit = &remainder / &self.denominator;
                remainder = &remainder % &self.denominator;
                result.push_str(&digit.to_string());
            }
        }
        result
    }
    /// Approximates the value as an `f64` through its decimal expansion with
    /// [`DOUBLE_PRECISION`] fractional digits. Magnitudes below
    /// `10^-DOUBLE_PRECISION` come out as zero.
    pub fn to_f64(&self) -> f64 {
        // the expansion is always a valid float literal
        self.to_decimal_string(DOUBLE_PRECISION).parse().unwrap_or(f64::NAN)
    }
}

// 实现解析
impl FromStr for Rational {
    type Err = ArithError;

    /// Accepts `n` or `n/d`, each side in the [`BigInteger`] decimal format.
    fn from_str(s: &str) -> Result<Rational> {
        let (num_src, den_src) = match s.split_once('/') {
            Some(parts) => parts,
            None => return Ok(Rational::from_integer(BigInteger::parse(s)?)),
        };
        let numerator = BigInteger::parse(num_src)?;
        let denominator = BigInteger::parse(den_src).map_err(|err| match err {
            ArithError::InvalidDigit { found, position } => ArithError::InvalidDigit {
                found,
                position: position + num_src.len() + 1,
            },
            other => other,
        })?;
        Rational::new(numerator, denominator)
    }
}

// 实现大小比较
impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // denominators are positive, so a/b < c/d  <=>  a*d < c*b
        let left = &self.numerator * &other.denominator;
        let right = &other.numerator * &self.denominator;
        left.cmp(&right)
    }
}

// 实现取反
impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        let Rational { numerator, denominator } = self;
        Rational { numerator: -numerator, denominator }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 实现加法
impl Add<&Rational> for &Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Self::Output {
        let numerator = &(&self.numerator * &rhs.denominator) + &(&rhs.numerator * &self.denominator);
        Rational::new_normalized(numerator, &self.denominator * &rhs.denominator)
    }
}

forward_binop!(Rational, Add, add, AddAssign, add_assign);

// 实现减法
impl Sub<&Rational> for &Rational {
    type Output = Rational;

    fn sub(self, rhs: &Rational) -> Self::Output {
        let numerator = &(&self.numerator * &rhs.denominator) - &(&rhs.numerator * &self.denominator);
        Rational::new_normalized(numerator, &self.denominator * &rhs.denominator)
    }
}

forward_binop!(Rational, Sub, sub, SubAssign, sub_assign);

// 实现乘法
impl Mul<&Rational> for &Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Self::Output {
        Rational::new_normalized(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

forward_binop!(Rational, Mul, mul, MulAssign, mul_assign);

// 实现除法
impl Rational {
    /// `self / rhs`, failing when `rhs` is zero.
    pub fn checked_div(&self, rhs: &Rational) -> Result<Rational> {
        Ok(self * &rhs.recip()?)
    }
}

impl Div<&Rational> for &Rational {
    type Output = Rational;

    fn div(self, rhs: &Rational) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{}", err),
        }
    }
}

forward_binop!(Rational, Div, div, DivAssign, div_assign);

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(n: i64, d: i64) -> Rational {
        Rational::new(n.into(), d.into()).unwrap()
    }

    #[test]
    fn test_normalize() {
        let r = ratio(-2, 4);
        assert_eq!(r.numer(), &BigInteger::from(-1));
        assert_eq!(r.denom(), &BigInteger::from(2));

        let r = ratio(3, -9);
        assert_eq!(r.numer(), &BigInteger::from(-1));
        assert_eq!(r.denom(), &BigInteger::from(3));

        let r = ratio(-6, -4);
        assert_eq!(r.into_parts(), (BigInteger::from(3), BigInteger::from(2)));

        let r = ratio(0, -17);
        assert_eq!(r.numer(), &BigInteger::from(0));
        assert_eq!(r.denom(), &BigInteger::from(1));
        assert!(!r.numer().is_negative());
    }

    #[test]
    fn test_zero_denominator() {
        assert!(matches!(
            Rational::new(5.into(), 0.into()),
            Err(ArithError::ZeroDenominator)
        ));
        assert!(matches!("5/0".parse::<Rational>(), Err(ArithError::ZeroDenominator)));
    }

    #[test]
    fn test_arith() {
        assert_eq!(ratio(1, 3) + ratio(1, 6), ratio(1, 2));
        assert_eq!(ratio(1, 3) - ratio(1, 2), ratio(-1, 6));
        assert_eq!(ratio(2, 3) * ratio(9, 4), ratio(3, 2));
        assert_eq!(ratio(2, 3) / ratio(-4, 9), ratio(-3, 2));
        assert_eq!(-ratio(2, 3), ratio(-2, 3));

        let mut acc = Rational::from(1);
        acc += &ratio(1, 2);
        acc *= ratio(2, 1);
        acc -= Rational::from(3);
        assert!(acc.is_zero());
        assert_eq!(acc.denom(), &BigInteger::from(1));
    }

    #[test]
    fn test_div_by_zero() {
        let a = ratio(1, 2);
        assert!(matches!(a.checked_div(&Rational::from(0)), Err(ArithError::DivisionByZero)));
        assert!(matches!(Rational::from(0).recip(), Err(ArithError::DivisionByZero)));
        assert_eq!(ratio(-2, 3).recip().unwrap(), ratio(-3, 2));

        let result = std::panic::catch_unwind(|| ratio(1, 2) / Rational::from(0));
        assert!(result.is_err());

        let mut b = ratio(3, 4);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            b /= Rational::from(0);
        }));
        assert!(result.is_err());
        assert_eq!(b, ratio(3, 4));
    }

    #[test]
    fn test_cmp() {
        assert!(ratio(1, 3) < ratio(1, 2));
        assert!(ratio(-1, 2) < ratio(-1, 3));
        assert!(ratio(-1, 2) < Rational::from(0));
        assert_eq!(ratio(2, 4).cmp(&ratio(1, 2)), Ordering::Equal);
        assert!(ratio(7, 3) > Rational::from(2));
    }

    #[test]
    fn test_to_string() {
        assert_eq!(ratio(6, 4).to_string(), "3/2");
        assert_eq!(ratio(-8, 4).to_string(), "-2");
        assert_eq!(Rational::from(0).to_string(), "0");

        let r: Rational = "-10/4".parse().unwrap();
        assert_eq!(r, ratio(-5, 2));
        let r: Rational = "12".parse().unwrap();
        assert_eq!(r, Rational::from(12));
        assert!(matches!(
            "1/2x".parse::<Rational>(),
            Err(ArithError::InvalidDigit { found: 'x', position: 3 })
        ));
        assert!(matches!("1/".parse::<Rational>(), Err(ArithError::EmptyInput)));
    }

    #[test]
    fn test_to_decimal_string() {
        assert_eq!(ratio(1, 3).to_decimal_string(5), "0.33333");
        assert_eq!(ratio(2, 3).to_decimal_string(3), "0.666");
        assert_eq!(ratio(-7, 2).to_decimal_string(2), "-3.50");
        assert_eq!(ratio(-1, 3).to_decimal_string(0), "-0");
        assert_eq!(ratio(22, 7).to_decimal_string(0), "3");
        assert_eq!(Rational::from(0).to_decimal_string(2), "0.00");
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(ratio(1, 2).to_f64(), 0.5);
        assert_eq!(ratio(-3, 4).to_f64(), -0.75);
        assert!((ratio(1, 3).to_f64() - 1.0 / 3.0).abs() < 1e-15);
        assert_eq!(ratio(1, 1_000_000_000_000_000_000).to_f64(), 0.0);
    }

    #[test]
    fn test_trunc() {
        assert_eq!(ratio(7, 2).trunc(), BigInteger::from(3));
        assert_eq!(ratio(-7, 2).trunc(), BigInteger::from(-3));
        assert!(ratio(4, 2).is_integer());
        assert_eq!(ratio(-7, 2).abs(), ratio(7, 2));
    }
}
