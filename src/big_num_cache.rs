use lazy_static::*;

use crate::big_integer::{BigInteger, Sign};
use crate::big_num_constants::*;

lazy_static! {
    pub static ref POS_CACHE: [BigInteger; MAX_CONSTANT + 1] = [
        BigInteger::from_raw(vec![ ] , Sign::Positive),
        BigInteger::from_raw(vec![1] , Sign::Positive),
        BigInteger::from_raw(vec![2] , Sign::Positive),
        BigInteger::from_raw(vec![3] , Sign::Positive),
        BigInteger::from_raw(vec![4] , Sign::Positive),
        BigInteger::from_raw(vec![5] , Sign::Positive),
        BigInteger::from_raw(vec![6] , Sign::Positive),
        BigInteger::from_raw(vec![7] , Sign::Positive),
        BigInteger::from_raw(vec![8] , Sign::Positive),
        BigInteger::from_raw(vec![9] , Sign::Positive),
        BigInteger::from_raw(vec![10], Sign::Positive),
        BigInteger::from_raw(vec![11], Sign::Positive),
        BigInteger::from_raw(vec![12], Sign::Positive),
        BigInteger::from_raw(vec![13], Sign::Positive),
        BigInteger::from_raw(vec![14], Sign::Positive),
        BigInteger::from_raw(vec![15], Sign::Positive),
        BigInteger::from_raw(vec![16], Sign::Positive),
    ];
    pub static ref NEG_CACHE: [BigInteger; MAX_CONSTANT + 1] = [
        BigInteger::from_raw(vec![ ] , Sign::Positive),
        BigInteger::from_raw(vec![1] , Sign::Negative),
        BigInteger::from_raw(vec![2] , Sign::Negative),
        BigInteger::from_raw(vec![3] , Sign::Negative),
        BigInteger::from_raw(vec![4] , Sign::Negative),
        BigInteger::from_raw(vec![5] , Sign::Negative),
        BigInteger::from_raw(vec![6] , Sign::Negative),
        BigInteger::from_raw(vec![7] , Sign::Negative),
        BigInteger::from_raw(vec![8] , Sign::Negative),
        BigInteger::from_raw(vec![9] , Sign::Negative),
        BigInteger::from_raw(vec![10], Sign::Negative),
        BigInteger::from_raw(vec![11], Sign::Negative),
        BigInteger::from_raw(vec![12], Sign::Negative),
        BigInteger::from_raw(vec![13], Sign::Negative),
        BigInteger::from_raw(vec![14], Sign::Negative),
        BigInteger::from_raw(vec![15], Sign::Negative),
        BigInteger::from_raw(vec![16], Sign::Negative),
    ];
    pub static ref ONE: BigInteger = POS_CACHE[1].clone();
    pub static ref TEN: BigInteger = POS_CACHE[10].clone();
}
