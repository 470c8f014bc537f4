//! # BigInteger
//! Arbitrary-precision signed integers in sign-magnitude form.
//! The magnitude is a sequence of 32-bit limbs, least significant first.
//! # Example
//! ```
//! use precise_arith::BigInteger;
//!
//! let a: BigInteger = "10000000000000".parse().unwrap();
//! let b: BigInteger = "900000000000".parse().unwrap();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Neg,
};
use std::str::FromStr;

use log::{debug, trace};

use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::error::{ArithError, Result};

pub const ZERO: BigInteger = BigInteger { sign: Sign::Positive, limbs: Vec::new() };

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Sign {
    Negative,
    Positive,
}

impl Sign {
    fn negate(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Positive => Sign::Negative,
        }
    }
    fn product(self, other: Sign) -> Sign {
        if self == other { Sign::Positive } else { Sign::Negative }
    }
}

/// Signed integer of unbounded size.
///
/// Zero has an empty limb sequence and is always positive, so every value has
/// exactly one representation and the derived `Hash` agrees with `Eq`.
#[derive(Debug, Clone, Hash)]
pub struct BigInteger {
    sign: Sign,
    limbs: Vec<u32>,
}

// 实现构造
impl BigInteger {
    /// Builds a value from raw limbs, restoring the trimmed, positive-zero form.
    pub(crate) fn from_raw(limbs: Vec<u32>, sign: Sign) -> Self {
        let mut val = BigInteger { sign, limbs };
        val.normalize();
        val
    }
    fn normalize(&mut self) {
        trim_leading_zero!(self.limbs);
        if self.limbs.is_empty() {
            self.sign = Sign::Positive;
        }
    }
    fn value_of(mag: u128, sign: Sign) -> BigInteger {
        if mag <= MAX_CONSTANT as u128 {
            return match sign {
                Sign::Positive => POS_CACHE[mag as usize].clone(),
                Sign::Negative => NEG_CACHE[mag as usize].clone(),
            };
        }
        let mut limbs = Vec::with_capacity(4);
        let mut rest = mag;
        while rest != 0 {
            limbs.push(rest as u32);
            rest >>= LIMB_BITS;
        }
        BigInteger { sign, limbs }
    }
    /// Limbs of `|self|`, least significant first.
    pub(crate) fn magnitude(&self) -> &[u32] {
        &self.limbs
    }
    fn magnitude_u128(&self) -> Option<u128> {
        if self.limbs.len() > 4 {
            return None;
        }
        let mag = self.limbs
            .iter()
            .rev()
            .fold(0u128, |acc, &limb| (acc << LIMB_BITS) | limb as u128);
        Some(mag)
    }
}

impl Default for BigInteger {
    fn default() -> Self {
        ZERO
    }
}

macro_rules! impl_unsigned_to_big_integer {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInteger {
        fn from(val: $u) -> Self {
            BigInteger::value_of(val as u128, Sign::Positive)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_integer {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInteger {
        fn from(val: $i) -> Self {
            let sign = if val < 0 { Sign::Negative } else { Sign::Positive };
            BigInteger::value_of((val as i128).unsigned_abs(), sign)
        }
    }
    )*
    };
}
impl_unsigned_to_big_integer!(u8, u16, u32, u64, u128, usize);
impl_signed_to_big_integer!(i8, i16, i32, i64, i128, isize);

// 实现到原生整数的转换
fn out_of_range(target: &'static str) -> ArithError {
    debug!("value does not fit in {}", target);
    ArithError::OutOfRange { target }
}

macro_rules! impl_big_integer_to_unsigned {
    ($($u: ty),*) => {
    $(
    impl TryFrom<&BigInteger> for $u {
        type Error = ArithError;

        fn try_from(val: &BigInteger) -> Result<$u> {
            if val.is_negative() {
                return Err(out_of_range(stringify!($u)));
            }
            val.magnitude_u128()
                .and_then(|mag| <$u>::try_from(mag).ok())
                .ok_or_else(|| out_of_range(stringify!($u)))
        }
    }

    impl TryFrom<BigInteger> for $u {
        type Error = ArithError;

        fn try_from(val: BigInteger) -> Result<$u> {
            <$u>::try_from(&val)
        }
    }
    )*
    };
}

macro_rules! impl_big_integer_to_signed {
    ($($i: ty),*) => {
    $(
    impl TryFrom<&BigInteger> for $i {
        type Error = ArithError;

        fn try_from(val: &BigInteger) -> Result<$i> {
            let converted = val.magnitude_u128().and_then(|mag| match val.sign {
                Sign::Positive => <$i>::try_from(mag).ok(),
                // MIN has no positive counterpart
                Sign::Negative if mag == <$i>::MAX as u128 + 1 => Some(<$i>::MIN),
                Sign::Negative => <$i>::try_from(mag).ok().map(|v| -v),
            });
            converted.ok_or_else(|| out_of_range(stringify!($i)))
        }
    }

    impl TryFrom<BigInteger> for $i {
        type Error = ArithError;

        fn try_from(val: BigInteger) -> Result<$i> {
            <$i>::try_from(&val)
        }
    }
    )*
    };
}
impl_big_integer_to_unsigned!(u8, u16, u32, u64, u128, usize);
impl_big_integer_to_signed!(i8, i16, i32, i64, i128, isize);

// 实现解析
impl BigInteger {
    /// Parses an optional `-` followed by one or more decimal digits.
    ///
    /// Anything else, including a `+` sign or surrounding whitespace, is
    /// rejected with the offending character and its byte position.
    pub fn parse(src: &str) -> Result<BigInteger> {
        let (sign, digits, offset) = match src.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest, 1),
            None => (Sign::Positive, src, 0),
        };

        if digits.is_empty() {
            debug!("rejecting empty number literal {:?}", src);
            return Err(ArithError::EmptyInput);
        }

        if let Some((pos, found)) = digits.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            debug!("rejecting number literal {:?}: bad character {:?}", src, found);
            return Err(ArithError::InvalidDigit { found, position: pos + offset });
        }

        let bytes = digits.as_bytes();
        let mut limbs: Vec<u32> = Vec::with_capacity(bytes.len() / DECIMAL_GROUP_DIGITS + 1);

        let mut group_len = bytes.len() % DECIMAL_GROUP_DIGITS;
        if group_len == 0 {
            group_len = DECIMAL_GROUP_DIGITS;
        }
        let mut cursor = 0;
        while cursor < bytes.len() {
            let group_val = bytes[cursor..cursor + group_len]
                .iter()
                .fold(0u32, |acc, &b| acc * 10 + (b - b'0') as u32);
            BigInteger::destructive_mul_add(&mut limbs, DECIMAL_GROUP_RADIX, group_val);
            cursor += group_len;
            group_len = DECIMAL_GROUP_DIGITS;
        }

        Ok(BigInteger::from_raw(limbs, sign))
    }

    // limbs = limbs * mul + add
    #[inline(always)]
    fn destructive_mul_add(limbs: &mut Vec<u32>, mul: u32, add: u32) {
        let mut carry = add as u64;
        for limb in limbs.iter_mut() {
            let product = (*limb as u64) * (mul as u64) + carry;
            *limb = product as u32;
            carry = product >> LIMB_BITS;
        }
        if carry != 0 {
            limbs.push(carry as u32);
        }
    }
}

impl FromStr for BigInteger {
    type Err = ArithError;

    fn from_str(s: &str) -> Result<BigInteger> {
        BigInteger::parse(s)
    }
}

// 实现打印
impl Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.magnitude_to_decimal())
    }
}

impl BigInteger {
    fn magnitude_to_decimal(&self) -> String {
        if self.limbs.is_empty() {
            return String::from("0");
        }

        // digit groups, least significant first
        let mut groups: Vec<u32> = Vec::with_capacity(self.limbs.len() * 10 / 9 + 1);
        let mut rest = self.limbs.clone();
        while !rest.is_empty() {
            let (quotient, remainder) = BigInteger::div_rem_limb(&rest, DECIMAL_GROUP_RADIX);
            groups.push(remainder);
            rest = quotient;
        }

        let mut result = String::with_capacity(groups.len() * DECIMAL_GROUP_DIGITS);
        let mut iter = groups.iter().rev();
        if let Some(first) = iter.next() {
            result.push_str(&first.to_string());
        }
        for group in iter {
            result.push_str(&format!("{:0width$}", group, width = DECIMAL_GROUP_DIGITS));
        }
        result
    }
    /// Nearest `f64`, or an infinity when the value is beyond `f64` range.
    pub fn to_f64(&self) -> f64 {
        // the rendering is always a valid float literal
        self.to_string().parse().unwrap_or(f64::NAN)
    }
}

// 实现符号相关
impl BigInteger {
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive && !self.limbs.is_empty()
    }
    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> i8 {
        match self.sign {
            _ if self.limbs.is_empty() => 0,
            Sign::Negative => -1,
            Sign::Positive => 1,
        }
    }
    pub fn abs(&self) -> BigInteger {
        self.clone().abs_take()
    }
    fn abs_take(self) -> BigInteger {
        let BigInteger { limbs, .. } = self;
        BigInteger { sign: Sign::Positive, limbs }
    }
}

// 实现大小比较
impl BigInteger {
    fn compare_mag(x: &[u32], y: &[u32]) -> Ordering {
        if x.len() != y.len() {
            return x.len().cmp(&y.len());
        }
        for (a, b) in x.iter().rev().zip(y.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }
        Ordering::Equal
    }
}

impl PartialEq for BigInteger {
    fn eq(&self, other: &Self) -> bool {
        self.sign == other.sign && self.limbs == other.limbs
    }
}
impl Eq for BigInteger {}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Positive, Sign::Positive) => BigInteger::compare_mag(&self.limbs, &other.limbs),
            (Sign::Negative, Sign::Negative) => {
                BigInteger::compare_mag(&self.limbs, &other.limbs).reverse()
            }
        }
    }
}

// 实现取反
impl Neg for BigInteger {
    type Output = BigInteger;

    fn neg(self) -> Self::Output {
        let BigInteger { sign, limbs } = self;
        BigInteger::from_raw(limbs, sign.negate())
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 实现加法
impl Add<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    fn add(self, rhs: &BigInteger) -> Self::Output {
        self.add_signed(&rhs.limbs, rhs.sign)
    }
}

forward_binop!(BigInteger, Add, add, AddAssign, add_assign);

impl BigInteger {
    fn add_signed(&self, limbs: &[u32], sign: Sign) -> BigInteger {
        if limbs.is_empty() {
            return self.clone();
        }

        if self.limbs.is_empty() {
            return BigInteger::from_raw(limbs.to_vec(), sign);
        }

        if self.sign == sign {
            return BigInteger::new_unchecked(BigInteger::add_mag(&self.limbs, limbs), sign);
        }

        match BigInteger::compare_mag(&self.limbs, limbs) {
            Ordering::Less => BigInteger::from_raw(BigInteger::sub_mag(limbs, &self.limbs), sign),
            Ordering::Equal => ZERO,
            Ordering::Greater => {
                BigInteger::from_raw(BigInteger::sub_mag(&self.limbs, limbs), self.sign)
            }
        }
    }
    // the caller guarantees a non-zero, trimmed magnitude
    fn new_unchecked(limbs: Vec<u32>, sign: Sign) -> BigInteger {
        BigInteger { sign, limbs }
    }
    fn add_mag(x: &[u32], y: &[u32]) -> Vec<u32> {
        let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };

        let mut result = Vec::with_capacity(long.len() + 1);
        let mut carry: u64 = 0;
        for (i, &limb) in long.iter().enumerate() {
            let sum = limb as u64 + short.get(i).map_or(0, |&v| v as u64) + carry;
            result.push(sum as u32);
            carry = sum >> LIMB_BITS;
        }

        if carry != 0 {
            result.push(carry as u32);
        }

        result
    }
    /// `big - little`, requires `|big| >= |little|`.
    fn sub_mag(big: &[u32], little: &[u32]) -> Vec<u32> {
        let mut result = Vec::with_capacity(big.len());
        let mut difference: i64 = 0;

        for (i, &limb) in big.iter().enumerate() {
            difference = limb as i64
                - little.get(i).map_or(0, |&v| v as i64)
                + (difference >> LIMB_BITS);
            result.push(difference as u32);
        }
        debug_assert!(difference >> LIMB_BITS == 0, "subtrahend larger than minuend");

        trim_leading_zero!(result);
        result
    }
}

// 实现减法
impl Sub<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    fn sub(self, rhs: &BigInteger) -> Self::Output {
        // a - b == a + (-b)
        self.add_signed(&rhs.limbs, rhs.sign.negate())
    }
}

forward_binop!(BigInteger, Sub, sub, SubAssign, sub_assign);

// 实现乘法
impl Mul<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    fn mul(self, rhs: &BigInteger) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return ZERO;
        }
        let sign = self.sign.product(rhs.sign);
        if rhs.limbs.len() == 1 {
            return BigInteger::from_raw(BigInteger::mul_limb(&self.limbs, rhs.limbs[0]), sign);
        }
        if self.limbs.len() == 1 {
            return BigInteger::from_raw(BigInteger::mul_limb(&rhs.limbs, self.limbs[0]), sign);
        }
        BigInteger::from_raw(BigInteger::mul_to_len(&self.limbs, &rhs.limbs), sign)
    }
}

forward_binop!(BigInteger, Mul, mul, MulAssign, mul_assign);

impl BigInteger {
    fn mul_limb(x: &[u32], y: u32) -> Vec<u32> {
        if y == 0 || x.is_empty() {
            return Vec::new();
        }
        let mut result = Vec::with_capacity(x.len() + 1);
        let mut carry: u64 = 0;
        for &limb in x {
            let product = (limb as u64) * (y as u64) + carry;
            result.push(product as u32);
            carry = product >> LIMB_BITS;
        }
        if carry != 0 {
            result.push(carry as u32);
        }
        result
    }

    /// Schoolbook multiplication into `x.len() + y.len()` limbs.
    fn mul_to_len(x: &[u32], y: &[u32]) -> Vec<u32> {
        let mut z = vec![0u32; x.len() + y.len()];

        for (x_index, &x_limb) in x.iter().enumerate() {
            let mut carry: u64 = 0;
            for (y_index, &y_limb) in y.iter().enumerate() {
                // at most (2^32 - 1)^2 + 2 * (2^32 - 1), which fits in u64
                let product = (x_limb as u64) * (y_limb as u64)
                    + z[x_index + y_index] as u64
                    + carry;
                z[x_index + y_index] = product as u32;
                carry = product >> LIMB_BITS;
            }
            z[x_index + y.len()] = carry as u32;
        }

        z
    }
}

// 实现除法
impl BigInteger {
    /// Truncating division returning `(quotient, remainder)`.
    ///
    /// The quotient rounds toward zero and the remainder takes the sign of
    /// `self`, so `quotient * divisor + remainder == self`.
    pub fn div_rem(&self, divisor: &BigInteger) -> Result<(BigInteger, BigInteger)> {
        if divisor.is_zero() {
            debug!("division of a {}-limb value by zero", self.limbs.len());
            return Err(ArithError::DivisionByZero);
        }
        let (quotient, remainder) = BigInteger::div_rem_mag(&self.limbs, &divisor.limbs);
        Ok((
            BigInteger::from_raw(quotient, self.sign.product(divisor.sign)),
            BigInteger::from_raw(remainder, self.sign),
        ))
    }
    pub fn checked_div(&self, divisor: &BigInteger) -> Result<BigInteger> {
        self.div_rem(divisor).map(|(quotient, _)| quotient)
    }
    pub fn checked_rem(&self, divisor: &BigInteger) -> Result<BigInteger> {
        self.div_rem(divisor).map(|(_, remainder)| remainder)
    }

    // divisor must be non-empty
    fn div_rem_mag(dividend: &[u32], divisor: &[u32]) -> (Vec<u32>, Vec<u32>) {
        if BigInteger::compare_mag(dividend, divisor) == Ordering::Less {
            return (Vec::new(), dividend.to_vec());
        }

        if divisor.len() == 1 {
            let (quotient, remainder) = BigInteger::div_rem_limb(dividend, divisor[0]);
            let remainder = if remainder == 0 { Vec::new() } else { vec![remainder] };
            return (quotient, remainder);
        }

        trace!("long division of {} limbs by {} limbs", dividend.len(), divisor.len());

        let mut quotient = vec![0u32; dividend.len()];
        let mut current: Vec<u32> = Vec::with_capacity(divisor.len() + 1);
        for (index, &limb) in dividend.iter().enumerate().rev() {
            // current = current * 2^32 + limb
            current.insert(0, limb);
            trim_leading_zero!(current);

            if BigInteger::compare_mag(&current, divisor) != Ordering::Less {
                let q = BigInteger::quotient_limb(&current, divisor);
                current = BigInteger::sub_mag(&current, &BigInteger::mul_limb(divisor, q));
                quotient[index] = q;
            }
        }

        trim_leading_zero!(quotient);
        (quotient, current)
    }

    /// Largest `q` with `q * divisor <= current`, found by binary search over
    /// the limb range. Requires `current < divisor * 2^32`.
    fn quotient_limb(current: &[u32], divisor: &[u32]) -> u32 {
        let mut low: u64 = 0;
        let mut high: u64 = u32::MAX as u64;
        while low < high {
            let mid = (low + high + 1) / 2;
            let product = BigInteger::mul_limb(divisor, mid as u32);
            if BigInteger::compare_mag(&product, current) == Ordering::Greater {
                high = mid - 1;
            } else {
                low = mid;
            }
        }
        low as u32
    }

    /// Knuth "The Art Of Computer Programming" Vol.2 section 4.3.1 exercise 16
    fn div_rem_limb(x: &[u32], d: u32) -> (Vec<u32>, u32) {
        let mut quotient = vec![0u32; x.len()];
        let mut remainder: u64 = 0;
        for (index, &limb) in x.iter().enumerate().rev() {
            let current = (remainder << LIMB_BITS) | limb as u64;
            quotient[index] = (current / d as u64) as u32;
            remainder = current % d as u64;
        }
        trim_leading_zero!(quotient);
        (quotient, remainder as u32)
    }
}

impl Div<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    fn div(self, rhs: &BigInteger) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{}", err),
        }
    }
}

forward_binop!(BigInteger, Div, div, DivAssign, div_assign);

// 实现求余
impl Rem<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    fn rem(self, rhs: &BigInteger) -> Self::Output {
        match self.checked_rem(rhs) {
            Ok(remainder) => remainder,
            Err(err) => panic!("{}", err),
        }
    }
}

forward_binop!(BigInteger, Rem, rem, RemAssign, rem_assign);

#[test]
fn test_from() {
    let num: i8 = 12;
    let big: BigInteger = num.into();
    assert_eq!(big.limbs, vec![12]);
    assert_eq!(big.sign, Sign::Positive);

    let num: i16 = -100;
    let big: BigInteger = num.into();
    assert_eq!(big.limbs, vec![100]);
    assert_eq!(big.sign, Sign::Negative);

    let num: i64 = -113132;
    let big: BigInteger = num.into();
    assert_eq!(big.limbs, vec![113132]);
    assert_eq!(big.sign, Sign::Negative);

    let big = BigInteger::from(u64::MAX);
    assert_eq!(big.limbs, vec![u32::MAX, u32::MAX]);

    let big = BigInteger::from(i128::MIN);
    assert_eq!(big.limbs, vec![0, 0, 0, 0x8000_0000]);
    assert_eq!(big.sign, Sign::Negative);

    let big = BigInteger::from(0i32);
    assert!(big.limbs.is_empty());
    assert_eq!(big.sign, Sign::Positive);
}

#[test]
fn test_parse() {
    let big: BigInteger = "4294967296".parse().unwrap();
    assert_eq!(big.limbs, vec![0, 1]);

    let big: BigInteger = "-0".parse().unwrap();
    assert_eq!(big, ZERO);
    assert_eq!(big.sign, Sign::Positive);

    let big: BigInteger = "000123".parse().unwrap();
    assert_eq!(big, BigInteger::from(123));

    assert!(matches!(BigInteger::parse(""), Err(ArithError::EmptyInput)));
    assert!(matches!(BigInteger::parse("-"), Err(ArithError::EmptyInput)));
    assert!(matches!(
        BigInteger::parse("12a4"),
        Err(ArithError::InvalidDigit { found: 'a', position: 2 })
    ));
    assert!(matches!(
        BigInteger::parse("--1"),
        Err(ArithError::InvalidDigit { found: '-', position: 1 })
    ));
    assert!(matches!(
        BigInteger::parse("+1"),
        Err(ArithError::InvalidDigit { found: '+', position: 0 })
    ));
    assert!(matches!(
        BigInteger::parse(" 1"),
        Err(ArithError::InvalidDigit { found: ' ', position: 0 })
    ));
}

#[test]
fn test_to_string() {
    let a: BigInteger = "12345678909876523784950683472613487560983287654321".parse().unwrap();
    assert_eq!(a.to_string(), "12345678909876523784950683472613487560983287654321");

    let a: BigInteger = "-1000000000000000000000000000001".parse().unwrap();
    assert_eq!(a.to_string(), "-1000000000000000000000000000001");

    assert_eq!(ZERO.to_string(), "0");
    assert_eq!(BigInteger::from(-7).to_string(), "-7");
    assert_eq!(format!("{:>5}", BigInteger::from(-7)), "   -7");
}

#[test]
fn test_cmp() {
    let small = BigInteger::from(5);
    let big: BigInteger = "100000000000000000000".parse().unwrap();
    let neg_small = BigInteger::from(-5);
    let neg_big = -&big;

    assert!(small < big);
    assert!(neg_big < neg_small);
    assert!(neg_small < small);
    assert!(neg_big < ZERO);
    assert!(ZERO < small);
    assert!(BigInteger::from(u32::MAX) < BigInteger::from(u32::MAX as u64 + 1));
    assert_eq!(small.cmp(&BigInteger::from(5u8)), Ordering::Equal);
}

#[test]
fn test_add_sub() {
    let a: BigInteger = "4294967295".parse().unwrap();
    let b = BigInteger::from(1);
    let c = &a + &b;
    assert_eq!(c.limbs, vec![0, 1]);
    assert_eq!(&c - &b, a);

    assert_eq!(BigInteger::from(3) + BigInteger::from(-10), BigInteger::from(-7));
    assert_eq!(BigInteger::from(-3) - BigInteger::from(-10), BigInteger::from(7));

    let zero = BigInteger::from(0) - BigInteger::from(0);
    assert_eq!(zero, ZERO);
    assert_eq!(zero.sign, Sign::Positive);

    let x: BigInteger = "-98765432109876543210".parse().unwrap();
    let sum = &x + &(-&x);
    assert!(sum.limbs.is_empty());
    assert_eq!(sum.sign, Sign::Positive);

    let mut acc = BigInteger::from(10);
    acc -= BigInteger::from(25);
    acc += &BigInteger::from(5);
    assert_eq!(acc, BigInteger::from(-10));
}

#[test]
fn test_mul() {
    let a: BigInteger = "123456789012345678901234567890".parse().unwrap();
    let b = BigInteger::from(2);
    let c: BigInteger = "246913578024691357802469135780".parse().unwrap();
    assert_eq!(&a * &b, c);

    let a: BigInteger = "-18446744073709551616".parse().unwrap();
    let b: BigInteger = "18446744073709551616".parse().unwrap();
    let c: BigInteger = "-340282366920938463463374607431768211456".parse().unwrap();
    assert_eq!(a * b, c);

    let d = BigInteger::from(-3) * BigInteger::from(0);
    assert_eq!(d.sign, Sign::Positive);
}

#[test]
fn test_div() {
    let a = BigInteger::from(120);
    let b = BigInteger::from(13);
    assert_eq!(&a / &b, BigInteger::from(9));
    assert_eq!(&a % &b, BigInteger::from(3));

    // single limb divisor
    let a: BigInteger = "1000000000000000000".parse().unwrap();
    let (q, r) = a.div_rem(&BigInteger::from(3)).unwrap();
    assert_eq!(q, "333333333333333333".parse::<BigInteger>().unwrap());
    assert_eq!(r, BigInteger::from(1));

    // long division
    let a: BigInteger = "124871287894782164876238905710532895792830741278950327951074309571023759712087492109591287094780219747214567876543245678976547897654367543567654678987654321456789087654325678908765432567890876543245678908765432567890876543876543245678907654356789".parse().unwrap();
    let b: BigInteger = "5678987654678976543587654678976546789087657876545678976543256789765432456789234567890854376".parse().unwrap();
    let c: BigInteger = "21988300642263136800048566126805476040703295625345756336585704044222781621158596876349726562910906651562104831721609088222205401883168960593370061500432215".parse().unwrap();
    assert_eq!(&a / &b, c);
    assert_eq!(&(&c * &b) + &(&a % &b), a);

    let a: BigInteger = "-7".parse().unwrap();
    let (q, r) = a.div_rem(&BigInteger::from(2)).unwrap();
    assert_eq!(q, BigInteger::from(-3));
    assert_eq!(r, BigInteger::from(-1));

    let (q, r) = BigInteger::from(7).div_rem(&BigInteger::from(-2)).unwrap();
    assert_eq!(q, BigInteger::from(-3));
    assert_eq!(r, BigInteger::from(1));
}

#[test]
fn test_mod() {
    let a: BigInteger = "10000000000000000".parse().unwrap();
    let b = BigInteger::from(10);
    assert_eq!(a % b, ZERO);

    let a: BigInteger = "23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245".parse().unwrap();
    let b: BigInteger = "526738495607659438721653478560954837265378495607".parse().unwrap();
    let r: BigInteger = "393707270751296419349581795408095683999332705291".parse().unwrap();
    assert_eq!(a % b, r);
}

#[test]
fn test_div_by_zero() {
    let a = BigInteger::from(42);
    assert!(matches!(a.div_rem(&ZERO), Err(ArithError::DivisionByZero)));
    assert!(matches!(a.checked_div(&ZERO), Err(ArithError::DivisionByZero)));
    assert!(matches!(a.checked_rem(&ZERO), Err(ArithError::DivisionByZero)));

    // a failed compound operation leaves its left operand untouched
    let mut b = BigInteger::from(42);
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        b /= ZERO;
    }));
    assert!(result.is_err());
    assert_eq!(b, BigInteger::from(42));

    let mut c: BigInteger = "-123456789012345678901234567890".parse().unwrap();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        c %= &ZERO;
    }));
    assert!(result.is_err());
    assert_eq!(c, "-123456789012345678901234567890".parse::<BigInteger>().unwrap());
}

#[test]
fn test_to_native() {
    let a: BigInteger = "123456789110".parse().unwrap();
    assert_eq!(u64::try_from(&a).unwrap(), 123456789110);
    assert!(matches!(u32::try_from(&a), Err(ArithError::OutOfRange { target: "u32" })));

    assert_eq!(i8::try_from(BigInteger::from(-128)).unwrap(), i8::MIN);
    assert!(i8::try_from(BigInteger::from(128)).is_err());
    assert!(u8::try_from(BigInteger::from(-1)).is_err());
    assert_eq!(i128::try_from(BigInteger::from(i128::MIN)).unwrap(), i128::MIN);
    assert_eq!(u128::try_from(BigInteger::from(u128::MAX)).unwrap(), u128::MAX);
    assert!(u128::try_from(BigInteger::from(u128::MAX) + BigInteger::from(1)).is_err());
    assert_eq!(i32::try_from(&ZERO).unwrap(), 0);
}

#[test]
fn test_to_f64() {
    assert_eq!(BigInteger::from(-12345).to_f64(), -12345.0);
    let a: BigInteger = "18446744073709551616".parse().unwrap();
    assert_eq!(a.to_f64(), 18446744073709551616.0);
}
