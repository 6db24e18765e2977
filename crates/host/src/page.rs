//! The seam between the connector and ambient browser state.
//!
//! Everything the host helpers need from `document`/`window`/`navigator` is
//! expressed on the [`HostPage`] trait, so the helpers stay testable against
//! a fake and a wasm binding can implement the trait on the real globals.

use std::fmt;

use thiserror::Error;
use tracing::debug;

/// A `<link>` element relevant to icon discovery, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconLink {
    pub rel: String,
    pub sizes: Option<String>,
    pub href: String,
}

/// The parts of a browsing-context location the helpers read. The protocol
/// carries its trailing colon (`https:`), matching how hosts expose it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    pub protocol: String,
    pub host: String,
}

impl PageLocation {
    pub fn new(protocol: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            host: host.into(),
        }
    }

    /// Renders `<protocol>//<host>`.
    pub fn origin(&self) -> String {
        format!("{}//{}", self.protocol, self.host)
    }
}

impl fmt::Display for PageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}//{}", self.protocol, self.host)
    }
}

/// The host refused access to a property across an origin boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cross-origin access to {0} was denied")]
pub struct CrossOriginDenied(pub &'static str);

/// Read-only view of the hosting page.
pub trait HostPage {
    /// All icon-bearing `<link>` elements, in document order.
    fn icon_links(&self) -> Vec<IconLink>;

    /// Whether the window has a frame element, i.e. is embedded in a frame.
    fn has_frame_element(&self) -> Result<bool, CrossOriginDenied>;

    /// The page's own location.
    fn own_location(&self) -> PageLocation;

    /// The top-level browsing context's location, if the host allows it.
    fn top_location(&self) -> Result<PageLocation, CrossOriginDenied>;

    /// The navigator's user-agent string.
    fn user_agent(&self) -> String;
}

/// True iff the page runs inside a frame. A cross-origin denial is treated
/// as top-level rather than propagated.
pub fn is_in_iframe(page: &impl HostPage) -> bool {
    match page.has_frame_element() {
        Ok(framed) => framed,
        Err(denied) => {
            debug!(%denied, "treating denied frame probe as top-level");
            false
        }
    }
}

/// The top-level location when framed and reachable; the page's own location
/// otherwise, including when the host denies access to the top context.
pub fn resolve_location(page: &impl HostPage) -> PageLocation {
    if is_in_iframe(page) {
        match page.top_location() {
            Ok(location) => return location,
            Err(denied) => debug!(%denied, "falling back to own location"),
        }
    }
    page.own_location()
}
