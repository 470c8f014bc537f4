//! Token-wise reading of numbers from a byte stream.
//!
//! Each call skips leading whitespace, takes the next whitespace-delimited
//! token and parses it in the same text format `FromStr` accepts. Writing
//! goes through `Display`.

use std::io::BufRead;

use log::{debug, trace};

use crate::big_integer::BigInteger;
use crate::error::{ArithError, Result};
use crate::rational::Rational;

/// Reads the next whitespace-delimited token, consuming the whitespace that
/// ends it. Fails with [`ArithError::EmptyInput`] at end of input and with
/// [`ArithError::InvalidUtf8`] when the token is not UTF-8 text.
pub fn read_token<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut token = Vec::new();
    loop {
        let (consumed, done) = {
            let buf = reader.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let mut consumed = 0;
            let mut done = false;
            for &byte in buf {
                consumed += 1;
                if byte.is_ascii_whitespace() {
                    if !token.is_empty() {
                        done = true;
                        break;
                    }
                } else {
                    token.push(byte);
                }
            }
            (consumed, done)
        };
        reader.consume(consumed);
        if done {
            break;
        }
    }

    if token.is_empty() {
        return Err(ArithError::EmptyInput);
    }
    let token = String::from_utf8(token).map_err(|e| {
        let position = e.utf8_error().valid_up_to();
        debug!("token is not UTF-8, bad byte at {}", position);
        ArithError::InvalidUtf8 { position }
    })?;
    trace!("read token {:?}", token);
    Ok(token)
}

pub fn read_big_integer<R: BufRead>(reader: &mut R) -> Result<BigInteger> {
    BigInteger::parse(&read_token(reader)?)
}

pub fn read_rational<R: BufRead>(reader: &mut R) -> Result<Rational> {
    read_token(reader)?.parse()
}
