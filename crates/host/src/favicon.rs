//! Favicon discovery for pairing-session metadata.

use tracing::warn;

use crate::page::{HostPage, IconLink};

/// Finds the page's best favicon and resolves it to an absolute URL.
///
/// Candidate links are tried in priority order: a `192x192` icon, a
/// `180x180` icon, `rel="icon"`, then `rel="shortcut icon"`. Script-scheme
/// hrefs and empty hrefs resolve to `None`.
pub fn find_favicon(page: &impl HostPage) -> Option<String> {
    let links = page.icon_links();
    let link = select_icon_link(&links)?;
    let href = link.href.as_str();
    if href.is_empty() {
        return None;
    }

    let lowered = href.to_ascii_lowercase();
    if lowered.starts_with("javascript:") || lowered.starts_with("vbscript:") {
        warn!(href, "rejecting script-scheme favicon href");
        return None;
    }

    if href.starts_with("http://") || href.starts_with("https://") || href.starts_with("data:") {
        return Some(href.to_owned());
    }

    let location = page.own_location();
    if href.starts_with("//") {
        // Protocol-relative: adopt the page's scheme.
        return Some(format!("{}{}", location.protocol, href));
    }

    Some(format!("{}{}", location.origin(), href))
}

fn select_icon_link(links: &[IconLink]) -> Option<&IconLink> {
    let by_sizes = |target: &str| {
        links
            .iter()
            .find(|link| link.sizes.as_deref() == Some(target))
    };
    let by_rel = |target: &str| links.iter().find(|link| link.rel == target);

    by_sizes("192x192")
        .or_else(|| by_sizes("180x180"))
        .or_else(|| by_rel("icon"))
        .or_else(|| by_rel("shortcut icon"))
}
