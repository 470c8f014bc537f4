//! Number theoretic helpers: gcd, integer powers and modular exponentiation.

use log::debug;

use crate::big_integer::BigInteger;
use crate::big_num_cache::ONE;
use crate::big_num_constants::LIMB_BITS;
use crate::error::{ArithError, Result};

/// Greatest common divisor of `|a|` and `|b|`.
///
/// `gcd(0, b) == |b|` and `gcd(0, 0) == 0`. The Euclidean step runs as a
/// loop, so stack depth does not grow with the operands.
pub fn gcd(a: &BigInteger, b: &BigInteger) -> BigInteger {
    let mut a = a.abs();
    let mut b = b.abs();
    // gcd(a, b) = gcd(b mod a, a)
    while !a.is_zero() {
        let r = &b % &a;
        b = std::mem::replace(&mut a, r);
    }
    b
}

impl BigInteger {
    pub fn gcd(&self, other: &BigInteger) -> BigInteger {
        gcd(self, other)
    }

    /// `self ^ exp` by repeated squaring. `x.pow(0)` is one, including `0.pow(0)`.
    pub fn pow(&self, mut exp: u32) -> BigInteger {
        let mut base = self.clone();
        let mut result = ONE.clone();
        while exp != 0 {
            if exp & 1 == 1 {
                result *= &base;
            }
            exp >>= 1;
            if exp != 0 {
                base = &base * &base;
            }
        }
        result
    }

    /// `self ^ exp mod |modulus|`, always in `0..|modulus|`.
    pub fn modpow(&self, exp: &BigInteger, modulus: &BigInteger) -> Result<BigInteger> {
        if exp.is_negative() {
            debug!("modpow with negative exponent {}", exp);
            return Err(ArithError::NegativeExponent);
        }
        if modulus.is_zero() {
            debug!("modpow with zero modulus");
            return Err(ArithError::DivisionByZero);
        }

        let modulus = modulus.abs();
        let mut base = self.checked_rem(&modulus)?;
        if base.is_negative() {
            base += &modulus;
        }

        let mut result = ONE.checked_rem(&modulus)?;
        for &limb in exp.magnitude() {
            for bit in 0..LIMB_BITS {
                if (limb >> bit) & 1 == 1 {
                    result = (&result * &base).checked_rem(&modulus)?;
                }
                base = (&base * &base).checked_rem(&modulus)?;
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigInteger {
        s.parse().unwrap()
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(&BigInteger::from(12), &BigInteger::from(18)), BigInteger::from(6));
        assert_eq!(gcd(&BigInteger::from(-12), &BigInteger::from(18)), BigInteger::from(6));
        assert_eq!(gcd(&BigInteger::from(0), &BigInteger::from(-7)), BigInteger::from(7));
        assert_eq!(gcd(&BigInteger::from(7), &BigInteger::from(0)), BigInteger::from(7));
        assert_eq!(gcd(&BigInteger::from(0), &BigInteger::from(0)), BigInteger::from(0));
        assert_eq!(gcd(&BigInteger::from(17), &BigInteger::from(31)), BigInteger::from(1));

        let a = big("1234567890123456789012345678901234567890");
        let b = big("9876543210987654321098765432109876543210");
        let g = a.gcd(&b);
        assert_eq!(g, big("90000000009000000000900000000090"));
        assert!((&a % &g).is_zero());
        assert!((&b % &g).is_zero());
    }

    #[test]
    fn test_gcd_fibonacci() {
        // consecutive Fibonacci numbers are the worst case for Euclid
        let mut x = BigInteger::from(1);
        let mut y = BigInteger::from(1);
        for _ in 0..2000 {
            let next = &x + &y;
            x = std::mem::replace(&mut y, next);
        }
        assert_eq!(gcd(&x, &y), BigInteger::from(1));
    }

    #[test]
    fn test_pow() {
        assert_eq!(BigInteger::from(2).pow(100), big("1267650600228229401496703205376"));
        assert_eq!(BigInteger::from(-3).pow(3), BigInteger::from(-27));
        assert_eq!(BigInteger::from(0).pow(0), BigInteger::from(1));
        assert_eq!(BigInteger::from(10).pow(18), big("1000000000000000000"));
    }

    #[test]
    fn test_modpow() {
        let r = BigInteger::from(4)
            .modpow(&BigInteger::from(13), &BigInteger::from(497))
            .unwrap();
        assert_eq!(r, BigInteger::from(445));

        let r = BigInteger::from(-2)
            .modpow(&BigInteger::from(3), &BigInteger::from(5))
            .unwrap();
        assert_eq!(r, BigInteger::from(2));

        // Fermat: a^(p-1) == 1 mod p
        let p = big("170141183460469231731687303715884105727");
        let r = BigInteger::from(3)
            .modpow(&(&p - &BigInteger::from(1)), &p)
            .unwrap();
        assert_eq!(r, BigInteger::from(1));

        assert_eq!(
            BigInteger::from(5).modpow(&BigInteger::from(0), &BigInteger::from(1)).unwrap(),
            BigInteger::from(0)
        );
        assert!(matches!(
            BigInteger::from(5).modpow(&BigInteger::from(-1), &BigInteger::from(7)),
            Err(ArithError::NegativeExponent)
        ));
        assert!(matches!(
            BigInteger::from(5).modpow(&BigInteger::from(2), &BigInteger::from(0)),
            Err(ArithError::DivisionByZero)
        ));
    }
}
