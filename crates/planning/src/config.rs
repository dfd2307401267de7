//! Server configuration from environment variables.
//!
//! `PLANNING_HOST` and `PLANNING_PORT` override the defaults; a `.env`
//! file is honored when present (loaded in `main`).

use std::env;

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Errors that can occur while reading the server configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `PLANNING_PORT` is not a valid port number
    #[error("invalid PLANNING_PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

/// Listen address for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Loads the configuration from the process environment, falling
    /// back to `127.0.0.1:8080`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env::var("PLANNING_HOST").ok(),
            env::var("PLANNING_PORT").ok(),
        )
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let host = host.unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match port {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        Ok(ServerConfig { host, port })
    }

    /// The `host:port` string to bind the listener on.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_vars(None, None).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config =
            ServerConfig::from_vars(Some("0.0.0.0".to_string()), Some("3000".to_string()))
                .unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn malformed_port_is_rejected() {
        let err = ServerConfig::from_vars(None, Some("eight".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "eight"));
    }
}
