//! Precise Arith \
//! This crate provides:
//! - [`BigInteger`]: arbitrary-precision signed integers stored as a sign and a magnitude of 32-bit limbs.
//! - [`Rational`]: exact fractions of two `BigInteger`s, always in lowest terms with a positive denominator.
//! - [`gcd`], `pow` and `modpow` helpers, token-wise stream reading and `num-traits` integration.
//!
//! Enable the `serde` feature to (de)serialize both types as their decimal text.

#[macro_use]
mod macros;

mod big_integer;
mod big_num_cache;
mod big_num_constants;
mod error;
mod impl_num_traits;
mod math;
mod rational;
#[cfg(feature = "serde")]
mod serdeize;
pub mod stream;

pub use big_integer::BigInteger;
pub use big_num_constants::DOUBLE_PRECISION;
pub use error::{ArithError, Result};
pub use math::gcd;
pub use rational::Rational;

#[cfg(test)]
mod tests {
    use crate::{BigInteger, Rational};

    #[test]
    fn it_works() {
        let a: BigInteger = "10000000000000".parse().unwrap();
        let b: BigInteger = "900000000000".parse().unwrap();
        println!("a = {}", a);
        println!("a + b = {}", &a + &b);
        println!("a - b = {}", &a - &b);
        println!("a * b = {}", &a * &b);
        println!("a / b = {}", &a / &b);
        println!("a % b = {}", &a % &b);

        let r = Rational::new(a, b).unwrap();
        println!("a / b = {} = {}", r, r.to_decimal_string(10));
    }

    #[test]
    fn values_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BigInteger>();
        assert_send_sync::<Rational>();
    }
}
