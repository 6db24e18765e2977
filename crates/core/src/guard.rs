//! Validation guards for untyped boundary input.
//!
//! The connector receives loosely-typed values (JSON-RPC params, postMessage
//! payloads) that may arrive as numbers, strings, or binary data. Each guard
//! accepts a small source enum covering the permitted shapes and either
//! returns a validated value or a [`GuardError`] carrying the offending
//! input's display form.

use std::fmt;

use primitive_types::U256;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::codec::{self, strip_hex_prefix};
use crate::model::{HexString, IntNumber};

/// Validation failure raised by the guards and the `parse` constructors in
/// [`crate::model`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GuardError {
    #[error("invalid {expected}: {value}")]
    InvalidParams {
        expected: &'static str,
        value: String,
    },
    #[error("integer value out of range: {value}")]
    OutOfRange { value: String },
}

impl GuardError {
    pub(crate) fn invalid(expected: &'static str, value: impl fmt::Display) -> Self {
        Self::InvalidParams {
            expected,
            value: value.to_string(),
        }
    }

    pub(crate) fn out_of_range(value: impl fmt::Display) -> Self {
        Self::OutOfRange {
            value: value.to_string(),
        }
    }
}

/// True iff the value is hex digits with an optional case-insensitive `0x`
/// prefix. Never fails; an empty body counts as hex.
pub fn is_hex_string(value: &str) -> bool {
    strip_hex_prefix(value)
        .bytes()
        .all(|b| b.is_ascii_hexdigit())
}

/// Accepted input shapes for [`ensure_int`].
#[derive(Debug, Clone, PartialEq)]
pub enum IntSource<'a> {
    Integer(i64),
    Number(f64),
    Text(&'a str),
}

impl<'a> From<i64> for IntSource<'a> {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl<'a> From<f64> for IntSource<'a> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl<'a> From<&'a str> for IntSource<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

/// Validates that the input is an integer-valued number, a decimal-digit
/// string, or a hex string, and returns the narrowed integer.
pub fn ensure_int<'a>(source: impl Into<IntSource<'a>>) -> Result<IntNumber, GuardError> {
    match source.into() {
        IntSource::Integer(value) => Ok(IntNumber::new(value)),
        IntSource::Number(value) => {
            if value.is_finite()
                && value.fract() == 0.0
                && value >= i64::MIN as f64
                && value <= i64::MAX as f64
            {
                Ok(IntNumber::new(value as i64))
            } else {
                Err(GuardError::invalid("integer", value))
            }
        }
        IntSource::Text(text) => int_from_text(text),
    }
}

fn int_from_text(text: &str) -> Result<IntNumber, GuardError> {
    // Unprefixed digit strings are decimal; hex needs a prefix or letters.
    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        return text
            .parse::<i64>()
            .map(IntNumber::new)
            .map_err(|_| GuardError::out_of_range(text));
    }
    if is_hex_string(text) {
        return codec::int_from_hex(&HexString::parse(text)?);
    }
    Err(GuardError::invalid("integer", text))
}

/// Accepted input shapes for [`ensure_bytes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BytesSource<'a> {
    Binary(&'a [u8]),
    Text(&'a str),
}

impl<'a> From<&'a [u8]> for BytesSource<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self::Binary(value)
    }
}

impl<'a> From<&'a Vec<u8>> for BytesSource<'a> {
    fn from(value: &'a Vec<u8>) -> Self {
        Self::Binary(value)
    }
}

impl<'a> From<&'a str> for BytesSource<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

/// Normalizes the input to raw bytes: binary passes through, hex text
/// decodes (after even-length padding), any other text becomes its UTF-8
/// encoding. Infallible once the input is typed.
pub fn ensure_bytes<'a>(source: impl Into<BytesSource<'a>>) -> Vec<u8> {
    match source.into() {
        BytesSource::Binary(bytes) => bytes.to_vec(),
        BytesSource::Text(text) => match HexString::parse(text) {
            Ok(hex) => codec::bytes_from_hex(&hex),
            Err(_) => text.as_bytes().to_vec(),
        },
    }
}

/// A type that can render itself as base-10 digits, letting foreign
/// big-number representations interoperate with [`ensure_big_int`] without
/// runtime shape-sniffing.
pub trait ToDecimalString {
    fn to_decimal_string(&self) -> String;
}

/// Accepted input shapes for [`ensure_big_int`].
#[derive(Debug, Clone, PartialEq)]
pub enum BigIntSource<'a> {
    Big(U256),
    Integer(i64),
    Unsigned(u64),
    Text(&'a str),
    Decimal(String),
}

impl<'a> BigIntSource<'a> {
    /// Routes a foreign big-number through its decimal rendering.
    pub fn from_decimal(value: &impl ToDecimalString) -> Self {
        Self::Decimal(value.to_decimal_string())
    }
}

impl<'a> From<U256> for BigIntSource<'a> {
    fn from(value: U256) -> Self {
        Self::Big(value)
    }
}

impl<'a> From<i64> for BigIntSource<'a> {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl<'a> From<u64> for BigIntSource<'a> {
    fn from(value: u64) -> Self {
        Self::Unsigned(value)
    }
}

impl<'a> From<&'a str> for BigIntSource<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

/// Validates that the input denotes a non-negative integer of arbitrary
/// width and returns it as a [`U256`].
pub fn ensure_big_int<'a>(source: impl Into<BigIntSource<'a>>) -> Result<U256, GuardError> {
    match source.into() {
        BigIntSource::Big(value) => Ok(value),
        BigIntSource::Integer(value) => u64::try_from(value)
            .map(U256::from)
            .map_err(|_| GuardError::invalid("unsigned integer", value)),
        BigIntSource::Unsigned(value) => Ok(U256::from(value)),
        BigIntSource::Text(text) => big_int_from_text(text),
        BigIntSource::Decimal(digits) => U256::from_dec_str(&digits)
            .map_err(|_| GuardError::invalid("decimal string", digits)),
    }
}

fn big_int_from_text(text: &str) -> Result<U256, GuardError> {
    // Parse failures past the digit checks can only mean the value does not
    // fit in 256 bits.
    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        return U256::from_dec_str(text).map_err(|_| GuardError::out_of_range(text));
    }
    if is_hex_string(text) {
        let body = strip_hex_prefix(text);
        if body.is_empty() {
            return Ok(U256::zero());
        }
        return U256::from_str_radix(body, 16).map_err(|_| GuardError::out_of_range(text));
    }
    Err(GuardError::invalid("integer", text))
}

/// Accepted input shapes for [`ensure_parsed_json`].
#[derive(Debug, Clone, PartialEq)]
pub enum JsonSource<'a> {
    Text(&'a str),
    Value(serde_json::Value),
}

impl<'a> From<&'a str> for JsonSource<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<serde_json::Value> for JsonSource<'a> {
    fn from(value: serde_json::Value) -> Self {
        Self::Value(value)
    }
}

/// Parses a JSON string, or converts an already-parsed value, into `T`.
///
/// Malformed input surfaces as the JSON parser's own error, deliberately a
/// different kind than [`GuardError`].
pub fn ensure_parsed_json<'a, T>(source: impl Into<JsonSource<'a>>) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned,
{
    match source.into() {
        JsonSource::Text(text) => serde_json::from_str(text),
        JsonSource::Value(value) => serde_json::from_value(value),
    }
}
