//! Core building blocks for the pairlink wallet connector: branded value
//! types, hex/integer conversions, boundary validation guards, and the
//! configuration/telemetry plumbing shared by sibling crates.

pub mod codec;
pub mod config;
pub mod guard;
pub mod model;
pub mod telemetry;

// Re-export U256 from primitive-types for use across sibling crates.
pub use primitive_types::U256;

pub use codec::{
    bytes_from_hex, has_hex_prefix, hex_from_int, int_from_hex, prepend_hex_prefix,
    strip_hex_prefix,
};
pub use guard::{
    ensure_big_int, ensure_bytes, ensure_int, ensure_parsed_json, is_hex_string, BigIntSource,
    BytesSource, GuardError, IntSource, JsonSource, ToDecimalString,
};
pub use model::{
    address_lists_equal, int_range, Address, HexString, IntNumber, RegexpString,
    ADDRESS_BODY_LENGTH,
};
