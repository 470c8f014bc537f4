// Both types travel as their canonical decimal text, e.g. "-12" or "3/4".

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::{Deserialize, Deserializer, Error as DeError, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::big_integer::BigInteger;
use crate::rational::Rational;

impl Serialize for BigInteger {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl Serialize for Rational {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct TextVisitor<T> {
    expecting: &'static str,
    marker: PhantomData<T>,
}

impl<'de, T> Visitor<'de> for TextVisitor<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.expecting)
    }

    fn visit_str<E>(self, v: &str) -> Result<T, E>
    where
        E: DeError,
    {
        v.parse().map_err(DeError::custom)
    }
}

impl<'de> Deserialize<'de> for BigInteger {
    fn deserialize<D>(deserializer: D) -> Result<BigInteger, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(TextVisitor {
            expecting: "a decimal integer string",
            marker: PhantomData,
        })
    }
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D>(deserializer: D) -> Result<Rational, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(TextVisitor {
            expecting: "a rational string such as \"-3/4\"",
            marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{BigInteger, Rational};

    #[test]
    fn test_json() {
        let a: BigInteger = "-123456789012345678901234567890".parse().unwrap();
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "\"-123456789012345678901234567890\"");
        assert_eq!(serde_json::from_str::<BigInteger>(&json).unwrap(), a);

        let r = Rational::new(6.into(), (-8).into()).unwrap();
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, "\"-3/4\"");
        assert_eq!(serde_json::from_str::<Rational>(&json).unwrap(), r);
    }

    #[test]
    fn test_json_rejects_bad_text() {
        assert!(serde_json::from_str::<BigInteger>("\"12a\"").is_err());
        assert!(serde_json::from_str::<Rational>("\"1/0\"").is_err());
        assert!(serde_json::from_str::<BigInteger>("12").is_err());
    }
}
