//! QR pairing URL construction.

use pairlink_core::config::ConnectorConfig;
use url::form_urlencoded;

/// Everything a wallet needs to join a session, scanned off a QR code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairingParams<'a> {
    pub session_id: &'a str,
    pub session_secret: &'a str,
    pub server_url: &'a str,
    pub is_parent_connection: bool,
    pub version: &'a str,
    pub chain_id: u64,
}

impl<'a> PairingParams<'a> {
    /// Fills the server, version, and chain fields from configuration.
    pub fn from_config(
        config: &'a ConnectorConfig,
        session_id: &'a str,
        session_secret: &'a str,
        is_parent_connection: bool,
    ) -> Self {
        Self {
            session_id,
            session_secret,
            server_url: config.server_url(),
            is_parent_connection,
            version: config.session_version(),
            chain_id: config.chain_id(),
        }
    }
}

/// Builds `<server_url>/#/link?<query>` with the session parameters
/// percent-encoded in insertion order. A parent connection advertises its
/// session id under `parent-id` instead of `id`.
pub fn pairing_url(params: &PairingParams<'_>) -> String {
    let session_key = if params.is_parent_connection {
        "parent-id"
    } else {
        "id"
    };

    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair(session_key, params.session_id);
    query.append_pair("secret", params.session_secret);
    query.append_pair("server", params.server_url);
    query.append_pair("v", params.version);
    query.append_pair("chainId", &params.chain_id.to_string());

    format!("{}/#/link?{}", params.server_url, query.finish())
}
