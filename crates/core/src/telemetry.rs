//! Tracing bootstrap shared by binaries and embedding applications.

use std::env;

use once_cell::sync::OnceCell;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::hydrate_env_file;

static SUBSCRIBER_INSTALLED: OnceCell<()> = OnceCell::new();

/// Shared observability options.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    log_filter: String,
}

impl TelemetryConfig {
    /// Loads telemetry knobs from optional environment variables prefixed
    /// with `<PREFIX>_`, e.g. `PAIRLINK_LOG_FILTER`. Missing entries fall
    /// back to sane defaults so embedders do not require extra configuration.
    pub fn from_env(prefix: &str) -> Self {
        let _ = hydrate_env_file();
        let upper = prefix.trim().to_ascii_uppercase();
        let log_key = format!("{}_LOG_FILTER", upper);

        let log_filter = env::var(log_key).unwrap_or_else(|_| "info".to_string());

        Self { log_filter }
    }

    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }
}

/// Wires up the tracing subscriber once per process; later calls are no-ops.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    if SUBSCRIBER_INSTALLED.get().is_some() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_new(config.log_filter())
        .map_err(|err| TelemetryError::InvalidLogFilter(err.to_string()))?;

    if SUBSCRIBER_INSTALLED.set(()).is_ok() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
            .map_err(|err| TelemetryError::Tracing(err.to_string()))?;
    }

    Ok(())
}

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log filter: {0}")]
    InvalidLogFilter(String),
    #[error("failed to install tracing subscriber: {0}")]
    Tracing(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_GUARD: Mutex<()> = Mutex::new(());

    #[test]
    fn telemetry_config_uses_defaults() {
        let _guard = ENV_GUARD.lock().unwrap();
        env::set_var("PAIRLINK_SKIP_DOTENV", "1");
        env::remove_var("CONNECTOR_LOG_FILTER");

        let cfg = TelemetryConfig::from_env("connector");
        assert_eq!(cfg.log_filter(), "info");
    }

    #[test]
    fn telemetry_config_reads_env() {
        let _guard = ENV_GUARD.lock().unwrap();
        env::set_var("PAIRLINK_SKIP_DOTENV", "1");
        env::set_var("CONNECTOR_LOG_FILTER", "debug");

        let cfg = TelemetryConfig::from_env("CONNECTOR");
        assert_eq!(cfg.log_filter(), "debug");

        env::remove_var("CONNECTOR_LOG_FILTER");
    }

    #[test]
    fn invalid_filter_surfaces_as_error() {
        let cfg = TelemetryConfig {
            log_filter: "not a [valid] filter".to_string(),
        };
        assert!(matches!(
            init_telemetry(&cfg),
            Err(TelemetryError::InvalidLogFilter(_))
        ));
    }
}
