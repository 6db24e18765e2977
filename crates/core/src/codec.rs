//! Hex/integer conversions built on [`U256`] so values keep full precision
//! until the final narrowing step.

use primitive_types::U256;

use crate::guard::GuardError;
use crate::model::{HexString, IntNumber};

/// Case-insensitive check for a leading `0x`.
pub fn has_hex_prefix(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() >= 2 && bytes[0] == b'0' && (bytes[1] == b'x' || bytes[1] == b'X')
}

/// Removes a leading `0x`/`0X` if present. Idempotent.
pub fn strip_hex_prefix(value: &str) -> &str {
    if has_hex_prefix(value) {
        &value[2..]
    } else {
        value
    }
}

/// Prepends a lowercase `0x` unless a prefix of either casing is already
/// there; an existing prefix is left untouched.
pub fn prepend_hex_prefix(value: &str) -> String {
    if has_hex_prefix(value) {
        value.to_owned()
    } else {
        format!("0x{value}")
    }
}

/// Parses the hex body as a base-16 integer and narrows it to an `i64`.
/// Values above `i64::MAX` fail with [`GuardError::OutOfRange`] rather than
/// truncating.
pub fn int_from_hex(value: &HexString) -> Result<IntNumber, GuardError> {
    if value.is_empty() {
        return Ok(IntNumber::new(0));
    }
    let wide = U256::from_str_radix(value.as_str(), 16)
        .map_err(|_| GuardError::out_of_range(value))?;
    narrow_to_int(wide)
}

/// Narrows an arbitrary-precision integer to an `i64`.
pub fn narrow_to_int(value: U256) -> Result<IntNumber, GuardError> {
    if value > U256::from(i64::MAX as u64) {
        return Err(GuardError::out_of_range(value));
    }
    Ok(IntNumber::new(value.low_u64() as i64))
}

/// Renders an integer as a `0x`-prefixed lowercase hex string with no
/// padding. Negative values have no byte-level hex form and are rejected.
pub fn hex_from_int(value: IntNumber) -> Result<String, GuardError> {
    let raw = value.value();
    if raw < 0 {
        return Err(GuardError::out_of_range(raw));
    }
    Ok(format!("0x{raw:x}"))
}

/// Decodes the hex body into bytes, treating an odd-length body as if it had
/// a leading zero nibble.
pub fn bytes_from_hex(value: &HexString) -> Vec<u8> {
    let mut body = value.as_str().to_owned();
    if body.len() % 2 != 0 {
        body.insert(0, '0');
    }
    hex::decode(&body).expect("hex body is validated at construction")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_checks_are_case_insensitive() {
        assert!(has_hex_prefix("0xab"));
        assert!(has_hex_prefix("0Xab"));
        assert!(!has_hex_prefix("ab"));
        assert!(!has_hex_prefix("0"));
    }

    #[test]
    fn prefix_round_trip_is_idempotent() {
        for body in ["ab", "0xab", "0Xab", ""] {
            assert_eq!(
                strip_hex_prefix(&prepend_hex_prefix(body)),
                strip_hex_prefix(body)
            );
        }
        assert_eq!(prepend_hex_prefix("0Xab"), "0Xab");
        assert_eq!(prepend_hex_prefix("ab"), "0xab");
    }

    #[test]
    fn int_from_hex_parses_base_16() {
        let hex = HexString::parse("0x10").unwrap();
        assert_eq!(int_from_hex(&hex).unwrap().value(), 16);

        let empty = HexString::parse("0x").unwrap();
        assert_eq!(int_from_hex(&empty).unwrap().value(), 0);
    }

    #[test]
    fn int_from_hex_rejects_values_past_i64() {
        // 2^64 needs more than 63 bits.
        let hex = HexString::parse("10000000000000000").unwrap();
        assert!(matches!(
            int_from_hex(&hex),
            Err(GuardError::OutOfRange { .. })
        ));
    }

    #[test]
    fn hex_from_int_renders_lowercase_unpadded() {
        assert_eq!(hex_from_int(IntNumber::new(255)).unwrap(), "0xff");
        assert_eq!(hex_from_int(IntNumber::new(0)).unwrap(), "0x0");
        assert!(hex_from_int(IntNumber::new(-1)).is_err());
    }

    #[test]
    fn bytes_from_hex_decodes_and_pads() {
        let hex = HexString::parse("68656c6c6f").unwrap();
        assert_eq!(bytes_from_hex(&hex), b"hello");

        let odd = HexString::parse("abc").unwrap();
        assert_eq!(bytes_from_hex(&odd), vec![0x0a, 0xbc]);
    }
}
