//! Branded value types shared across the connector crates.
//!
//! Each type is only constructible through a validating `parse` constructor,
//! so holding a value is proof that its format check already passed and
//! callers never re-validate.

use std::fmt;

use regex::Regex;

use crate::codec::strip_hex_prefix;
use crate::guard::GuardError;

/// Required length (in hex characters) for the body of an account address.
pub const ADDRESS_BODY_LENGTH: usize = 40;

/// A string of hexadecimal digits, held lowercase and without the `0x`
/// prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexString(String);

impl HexString {
    /// Parses a hex string with an optional case-insensitive `0x` prefix,
    /// canonicalizing the body to lowercase.
    pub fn parse(value: &str) -> Result<Self, GuardError> {
        let body = strip_hex_prefix(value);
        if !body.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(GuardError::invalid("hex string", value));
        }
        Ok(Self(body.to_ascii_lowercase()))
    }

    /// Like [`HexString::parse`], then left-pads one `0` nibble when the body
    /// length is odd so the result is byte-aligned.
    pub fn parse_even(value: &str) -> Result<Self, GuardError> {
        let mut hex = Self::parse(value)?;
        if hex.0.len() % 2 != 0 {
            hex.0.insert(0, '0');
        }
        Ok(hex)
    }

    /// The unprefixed lowercase body.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The body with a lowercase `0x` prefix.
    pub fn to_prefixed(&self) -> String {
        format!("0x{}", self.0)
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for HexString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A 20-byte account address, stored as `0x` + 40 lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    /// Parses an address in any casing, with or without the `0x` prefix.
    /// Rejects bodies that are not exactly 40 hex characters.
    pub fn parse(value: &str) -> Result<Self, GuardError> {
        let body = strip_hex_prefix(value);
        if body.len() != ADDRESS_BODY_LENGTH || !body.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(GuardError::invalid("address", value));
        }
        Ok(Self(format!("0x{}", body.to_ascii_lowercase())))
    }

    /// The `0x`-prefixed lowercase form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 40-character hex body without the prefix.
    pub fn body(&self) -> &str {
        &self.0[2..]
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An integer-valued number. Produced either directly from an `i64` or by
/// [`crate::guard::ensure_int`] when the input arrives untyped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IntNumber(i64);

impl IntNumber {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl From<IntNumber> for i64 {
    fn from(value: IntNumber) -> Self {
        value.0
    }
}

impl fmt::Display for IntNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The canonical textual form of a regular expression: the compiled
/// pattern's source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegexpString(String);

impl RegexpString {
    /// Compiles the pattern to prove it is a valid regular expression.
    pub fn parse(pattern: &str) -> Result<Self, GuardError> {
        Regex::new(pattern)
            .map(|regex| Self::from_regex(&regex))
            .map_err(|_| GuardError::invalid("regular expression", pattern))
    }

    /// Wraps an already-compiled regular expression.
    pub fn from_regex(regex: &Regex) -> Self {
        Self(regex.as_str().to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RegexpString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// True iff both lists have the same length and equal addresses at every
/// index. Addresses compare canonically since `Address::parse` normalizes
/// casing and prefix.
pub fn address_lists_equal(left: &[Address], right: &[Address]) -> bool {
    left.len() == right.len() && left.iter().zip(right).all(|(a, b)| a == b)
}

/// The ordered sequence `[start, start+1, …, stop-1]`; empty when
/// `stop <= start`.
pub fn int_range(start: i64, stop: i64) -> Vec<i64> {
    if stop <= start {
        Vec::new()
    } else {
        (start..stop).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "a914dd7e82a0cabc9ee0b0d96d930091ceaf2b41";

    #[test]
    fn hex_string_canonicalizes_case_and_prefix() {
        let hex = HexString::parse("0XDEADBEEF").unwrap();
        assert_eq!(hex.as_str(), "deadbeef");
        assert_eq!(hex.to_prefixed(), "0xdeadbeef");

        let bare = HexString::parse("deadbeef").unwrap();
        assert_eq!(hex, bare);
    }

    #[test]
    fn hex_string_accepts_empty_body() {
        assert!(HexString::parse("").unwrap().is_empty());
        assert!(HexString::parse("0x").unwrap().is_empty());
    }

    #[test]
    fn hex_string_rejects_non_hex() {
        assert!(HexString::parse("zz").is_err());
        assert!(HexString::parse("0xdead rest").is_err());
    }

    #[test]
    fn parse_even_pads_odd_bodies() {
        let hex = HexString::parse_even("0xabc").unwrap();
        assert_eq!(hex.as_str(), "0abc");

        let already_even = HexString::parse_even("abcd").unwrap();
        assert_eq!(already_even.as_str(), "abcd");
    }

    #[test]
    fn address_is_case_and_prefix_insensitive() {
        let plain = Address::parse(BODY).unwrap();
        let shouty = Address::parse(&format!("0x{}", BODY.to_uppercase())).unwrap();
        assert_eq!(plain, shouty);
        assert_eq!(plain.as_str(), format!("0x{BODY}"));
        assert_eq!(plain.body(), BODY);
    }

    #[test]
    fn address_rejects_wrong_lengths() {
        assert!(Address::parse(&BODY[..38]).is_err());
        assert!(Address::parse(&format!("{BODY}ab")).is_err());
        assert!(Address::parse("not an address").is_err());
    }

    #[test]
    fn regexp_string_round_trips_pattern_source() {
        let pattern = RegexpString::parse("^[a-z]+$").unwrap();
        assert_eq!(pattern.as_str(), "^[a-z]+$");
        assert!(RegexpString::parse("(unclosed").is_err());
    }

    #[test]
    fn int_range_produces_half_open_sequences() {
        assert_eq!(int_range(3, 7), vec![3, 4, 5, 6]);
        assert!(int_range(5, 5).is_empty());
        assert!(int_range(5, 2).is_empty());
    }

    #[test]
    fn address_lists_compare_element_wise() {
        let a = Address::parse(BODY).unwrap();
        let b = Address::parse(&"b".repeat(40)).unwrap();

        assert!(address_lists_equal(&[a.clone()], &[a.clone()]));
        assert!(!address_lists_equal(&[a.clone()], &[]));
        assert!(!address_lists_equal(&[a.clone(), b.clone()], &[b, a]));
        assert!(address_lists_equal(&[], &[]));
    }
}
