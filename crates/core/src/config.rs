//! Environment-driven configuration shared by the connector crates.

use std::env;

use thiserror::Error;

/// Connector-level settings: where the pairing server lives and which chain
/// and protocol version new sessions should advertise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorConfig {
    server_url: String,
    chain_id: u64,
    session_version: String,
}

impl ConnectorConfig {
    pub const DEFAULT_CHAIN_ID: u64 = 1;
    pub const DEFAULT_SESSION_VERSION: &'static str = "1.0";

    /// Loads configuration by hydrating `.env` (if present) and reading the
    /// process variables. Missing or malformed entries surface as
    /// `ConfigError` so binaries can respond gracefully.
    pub fn load_from_env() -> Result<Self, ConfigError> {
        hydrate_env_file()?;

        let server_url = get_required_var("PAIRLINK_SERVER_URL")?;
        let chain_id = match get_optional_var("PAIRLINK_CHAIN_ID") {
            Some(raw) => raw.parse().map_err(|source| ConfigError::InvalidNumber {
                key: "PAIRLINK_CHAIN_ID",
                source,
            })?,
            None => Self::DEFAULT_CHAIN_ID,
        };
        let session_version = get_optional_var("PAIRLINK_SESSION_VERSION")
            .unwrap_or_else(|| Self::DEFAULT_SESSION_VERSION.to_string());

        Ok(Self {
            server_url,
            chain_id,
            session_version,
        })
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn session_version(&self) -> &str {
        &self.session_version
    }
}

fn get_required_var(key: &'static str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Err(ConfigError::MissingVar { key })
            } else {
                Ok(trimmed.to_string())
            }
        }
        Err(_) => Err(ConfigError::MissingVar { key }),
    }
}

fn get_optional_var(key: &'static str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

pub fn hydrate_env_file() -> Result<(), ConfigError> {
    if env::var_os("PAIRLINK_SKIP_DOTENV").is_some() {
        return Ok(());
    }
    match dotenvy::dotenv() {
        Ok(_) => {}
        Err(dotenvy::Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => return Err(ConfigError::Dotenv { source: err }),
    }

    Ok(())
}

/// Errors emitted when `.env` hydration or environment parsing fails.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable `{key}`")]
    MissingVar { key: &'static str },
    #[error("invalid integer in `{key}`: {source}")]
    InvalidNumber {
        key: &'static str,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("failed to load .env file: {source}")]
    Dotenv {
        #[from]
        source: dotenvy::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_GUARD: Mutex<()> = Mutex::new(());

    fn set_env() {
        std::env::set_var("PAIRLINK_SKIP_DOTENV", "1");
        std::env::set_var("PAIRLINK_SERVER_URL", "https://link.example.com");
        std::env::remove_var("PAIRLINK_CHAIN_ID");
        std::env::remove_var("PAIRLINK_SESSION_VERSION");
    }

    #[test]
    fn config_loader_applies_defaults() {
        let _guard = ENV_GUARD.lock().unwrap();
        set_env();

        let config = ConnectorConfig::load_from_env().expect("config loads");
        assert_eq!(config.server_url(), "https://link.example.com");
        assert_eq!(config.chain_id(), ConnectorConfig::DEFAULT_CHAIN_ID);
        assert_eq!(
            config.session_version(),
            ConnectorConfig::DEFAULT_SESSION_VERSION
        );
    }

    #[test]
    fn config_loader_reads_overrides() {
        let _guard = ENV_GUARD.lock().unwrap();
        set_env();
        std::env::set_var("PAIRLINK_CHAIN_ID", "137");
        std::env::set_var("PAIRLINK_SESSION_VERSION", "2.1");

        let config = ConnectorConfig::load_from_env().expect("config loads");
        assert_eq!(config.chain_id(), 137);
        assert_eq!(config.session_version(), "2.1");

        set_env();
    }

    #[test]
    fn invalid_chain_id_is_rejected() {
        let _guard = ENV_GUARD.lock().unwrap();
        set_env();
        std::env::set_var("PAIRLINK_CHAIN_ID", "mainnet");

        let err = ConnectorConfig::load_from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidNumber {
                key: "PAIRLINK_CHAIN_ID",
                ..
            }
        ));

        set_env();
    }

    #[test]
    fn empty_required_env_var_is_treated_as_missing() {
        let _guard = ENV_GUARD.lock().unwrap();
        set_env();
        std::env::set_var("PAIRLINK_SERVER_URL", "   ");

        let err = ConnectorConfig::load_from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingVar {
                key: "PAIRLINK_SERVER_URL"
            }
        ));

        set_env();
    }

    #[test]
    fn required_env_vars_are_trimmed() {
        let _guard = ENV_GUARD.lock().unwrap();
        set_env();
        std::env::set_var("PAIRLINK_SERVER_URL", "  https://trimmed.example  ");

        let config = ConnectorConfig::load_from_env().expect("config loads");
        assert_eq!(config.server_url(), "https://trimmed.example");

        set_env();
    }
}
