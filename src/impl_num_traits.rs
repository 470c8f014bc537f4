use log::debug;
use num_traits::{
    cast::{FromPrimitive, ToPrimitive},
    identities::{One, Zero},
    sign::Signed,
    Num,
};

use crate::big_integer::{BigInteger, ZERO};
use crate::big_num_cache::ONE;
use crate::error::{ArithError, Result};
use crate::rational::Rational;

impl Zero for BigInteger {
    #[inline]
    fn zero() -> Self {
        ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        BigInteger::is_zero(self)
    }
}

impl One for BigInteger {
    #[inline]
    fn one() -> Self {
        ONE.clone()
    }
}

impl Num for BigInteger {
    type FromStrRadixErr = ArithError;

    fn from_str_radix(src: &str, radix: u32) -> Result<Self> {
        if radix != 10 {
            debug!("rejecting radix {} for {:?}", radix, src);
            return Err(ArithError::UnsupportedRadix(radix));
        }
        BigInteger::parse(src)
    }
}

impl Signed for BigInteger {
    #[inline]
    fn abs(&self) -> Self {
        BigInteger::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if *self <= *other {
            ZERO
        } else {
            self - other
        }
    }

    #[inline]
    fn signum(&self) -> Self {
        BigInteger::from(BigInteger::signum(self))
    }

    #[inline]
    fn is_positive(&self) -> bool {
        BigInteger::is_positive(self)
    }

    #[inline]
    fn is_negative(&self) -> bool {
        BigInteger::is_negative(self)
    }
}

impl ToPrimitive for BigInteger {
    fn to_i64(&self) -> Option<i64> {
        i64::try_from(self).ok()
    }

    fn to_u64(&self) -> Option<u64> {
        u64::try_from(self).ok()
    }

    fn to_i128(&self) -> Option<i128> {
        i128::try_from(self).ok()
    }

    fn to_u128(&self) -> Option<u128> {
        u128::try_from(self).ok()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(BigInteger::to_f64(self))
    }
}

impl FromPrimitive for BigInteger {
    #[inline]
    fn from_i64(n: i64) -> Option<Self> {
        Some(BigInteger::from(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<Self> {
        Some(BigInteger::from(n))
    }

    #[inline]
    fn from_i128(n: i128) -> Option<Self> {
        Some(BigInteger::from(n))
    }

    #[inline]
    fn from_u128(n: u128) -> Option<Self> {
        Some(BigInteger::from(n))
    }
}

impl Zero for Rational {
    #[inline]
    fn zero() -> Self {
        Rational::default()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Rational::is_zero(self)
    }
}

impl One for Rational {
    #[inline]
    fn one() -> Self {
        Rational::from_integer(ONE.clone())
    }
}

// integer conversions truncate toward zero
impl ToPrimitive for Rational {
    fn to_i64(&self) -> Option<i64> {
        self.trunc().to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.trunc().to_u64()
    }

    fn to_i128(&self) -> Option<i128> {
        self.trunc().to_i128()
    }

    fn to_u128(&self) -> Option<u128> {
        self.trunc().to_u128()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Rational::to_f64(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // generic code written against num-traits only
    fn sum_of_squares<T: Num + Clone>(values: &[T]) -> T {
        values
            .iter()
            .cloned()
            .fold(T::zero(), |acc, v| acc + v.clone() * v)
    }

    #[test]
    fn test_generic_use() {
        let values: Vec<BigInteger> = vec![3.into(), (-4).into(), "10000000000".parse().unwrap()];
        assert_eq!(
            sum_of_squares(&values),
            "100000000000000000025".parse::<BigInteger>().unwrap()
        );
    }

    #[test]
    fn test_num() {
        assert_eq!(<BigInteger as Num>::from_str_radix("-42", 10).unwrap(), BigInteger::from(-42));
        assert!(matches!(
            <BigInteger as Num>::from_str_radix("ff", 16),
            Err(ArithError::UnsupportedRadix(16))
        ));
        assert!(<BigInteger as One>::one().is_one());
        assert!(<BigInteger as Zero>::zero().is_zero());
    }

    #[test]
    fn test_signed() {
        let a = BigInteger::from(-5);
        assert_eq!(Signed::abs(&a), BigInteger::from(5));
        assert_eq!(Signed::signum(&a), BigInteger::from(-1));
        assert_eq!(Signed::signum(&ZERO), ZERO);
        assert_eq!(a.abs_sub(&BigInteger::from(-8)), BigInteger::from(3));
        assert_eq!(a.abs_sub(&BigInteger::from(8)), ZERO);
    }

    #[test]
    fn test_primitive() {
        let a: BigInteger = "18446744073709551616".parse().unwrap();
        assert_eq!(a.to_u64(), None);
        assert_eq!(a.to_u128(), Some(18446744073709551616));
        assert_eq!(BigInteger::from(-1).to_u64(), None);
        assert_eq!(BigInteger::from(-1).to_i64(), Some(-1));
        assert_eq!(BigInteger::from_f64(-2.75), Some(BigInteger::from(-2)));

        let r = Rational::new((-7).into(), 2.into()).unwrap();
        assert_eq!(r.to_i64(), Some(-3));
        assert_eq!(ToPrimitive::to_f64(&r), Some(-3.5));
        assert!(<Rational as Zero>::zero().is_zero());
        assert_eq!(<Rational as One>::one(), Rational::from(1));
    }
}
