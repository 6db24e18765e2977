//! Host-environment helpers for the pairlink wallet connector: favicon
//! discovery, iframe and location resolution, mobile user-agent detection,
//! and QR pairing URL construction.
//!
//! Ambient browser state is only reached through the [`page::HostPage`]
//! trait, so every helper runs unchanged against a fake in tests or a wasm
//! binding in production.

pub mod favicon;
pub mod mobile;
pub mod page;
pub mod qr;

pub use favicon::find_favicon;
pub use mobile::{is_mobile, is_mobile_user_agent};
pub use page::{
    is_in_iframe, resolve_location, CrossOriginDenied, HostPage, IconLink, PageLocation,
};
pub use qr::{pairing_url, PairingParams};
