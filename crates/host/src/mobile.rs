//! Mobile user-agent detection used to pick the pairing flow (deep link vs
//! QR code).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::page::HostPage;

static MOBILE_MARKERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)android|webos|iphone|ipad|ipod|blackberry|iemobile|opera mini")
        .expect("mobile marker pattern compiles")
});

/// Case-insensitive match against the fixed set of mobile platform markers.
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    MOBILE_MARKERS.is_match(user_agent)
}

/// Convenience wrapper reading the user agent off the hosting page.
pub fn is_mobile(page: &impl HostPage) -> bool {
    is_mobile_user_agent(&page.user_agent())
}
