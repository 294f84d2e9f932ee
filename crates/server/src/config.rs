//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ORCHARD_HOST` - Bind address (default: 127.0.0.1)
//! - `ORCHARD_PORT` - Listen port (default: 5000)
//! - `ORCHARD_STORE` - Cart storage backend: `memory` (default) or `sqlite`
//! - `ORCHARD_DATABASE_URL` - `SQLite` connection string (required when
//!   `ORCHARD_STORE=sqlite`; falls back to `DATABASE_URL`)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment label
//!
//! The checkout tax rate is a fixed constant
//! ([`orchard_core::tax_rate`]), not configuration.

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart storage backend selection.
///
/// `Memory` is mock mode: carts live for the process lifetime only.
#[derive(Debug, Clone)]
pub enum StoreMode {
    /// Volatile in-memory storage (the default).
    Memory,
    /// `SQLite` via sqlx.
    Sqlite {
        /// `SQLite` connection string (may embed credentials when pointed
        /// at a remote-mounted file, so treated as a secret).
        database_url: SecretString,
    },
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Cart storage backend
    pub store: StoreMode,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment label
    pub sentry_environment: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid, or if
    /// `ORCHARD_STORE=sqlite` is set without a database URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("ORCHARD_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("ORCHARD_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("ORCHARD_PORT", "5000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("ORCHARD_PORT".to_string(), e.to_string()))?;

        let store = store_mode_from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            host,
            port,
            store,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Resolve the storage backend from `ORCHARD_STORE`.
fn store_mode_from_env() -> Result<StoreMode, ConfigError> {
    match get_env_or_default("ORCHARD_STORE", "memory").as_str() {
        "memory" => Ok(StoreMode::Memory),
        "sqlite" => Ok(StoreMode::Sqlite {
            database_url: get_database_url("ORCHARD_DATABASE_URL")?,
        }),
        other => Err(ConfigError::InvalidEnvVar(
            "ORCHARD_STORE".to_string(),
            format!("expected 'memory' or 'sqlite', got '{other}'"),
        )),
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 5000,
            store: StoreMode::Memory,
            sentry_dsn: None,
            sentry_environment: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 5000);
    }

    #[test]
    fn test_store_mode_debug_redacts_database_url() {
        let mode = StoreMode::Sqlite {
            database_url: SecretString::from("sqlite://secret-host/orchard.db"),
        };

        let debug_output = format!("{mode:?}");
        assert!(!debug_output.contains("secret-host"));
    }

    #[test]
    fn test_env_or_default_prefers_default_when_unset() {
        assert_eq!(
            get_env_or_default("ORCHARD_TEST_UNSET_VARIABLE", "fallback"),
            "fallback"
        );
    }
}
