//! Configuration management for the MCP server.
//!
//! Configuration comes from defaults, overridden by environment variables
//! (optionally loaded from a `.env` file). None of it reaches the tools,
//! which are stateless.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::{Error, Result};
use super::transport::TransportConfig;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig::default(),
            transport: TransportConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_timestamps: true,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Recognized variables: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`,
    /// `MCP_LOG_TIMESTAMPS`, plus the transport variables read by
    /// [`TransportConfig::from_env`].
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            server: ServerConfig {
                name: env_or("MCP_SERVER_NAME", defaults.server.name),
                version: defaults.server.version,
            },
            logging: LoggingConfig::from_env(),
            transport: TransportConfig::from_env(),
        }
    }

    /// Reject settings the server cannot start with.
    pub fn validate(&self) -> Result<()> {
        if self.server.name.trim().is_empty() {
            return Err(Error::config("server name must not be empty"));
        }
        self.transport.validate().map_err(Error::config)
    }
}

impl LoggingConfig {
    /// Read `MCP_LOG_LEVEL` and `MCP_LOG_TIMESTAMPS`.
    ///
    /// Usable before a subscriber exists; warnings about bad values are only
    /// visible on a later read.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            level: env_or("MCP_LOG_LEVEL", defaults.level),
            with_timestamps: env_flag("MCP_LOG_TIMESTAMPS", defaults.with_timestamps),
        }
    }
}

/// Read and parse an environment variable.
///
/// Unset variables yield `default`; values that do not parse are logged and
/// also yield `default`.
pub(crate) fn env_or<T>(name: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    let Ok(raw) = std::env::var(name) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(e) => {
            warn!("Ignoring invalid {} value {:?}: {}", name, raw, e);
            default
        }
    }
}

/// Read a boolean environment variable, see [`parse_flag`].
pub(crate) fn env_flag(name: &str, default: bool) -> bool {
    let Ok(raw) = std::env::var(name) else {
        return default;
    };
    parse_flag(&raw).unwrap_or_else(|| {
        warn!("Ignoring invalid {} value {:?}: expected a boolean", name, raw);
        default
    })
}

/// Parse a boolean flag such as `true`, `0` or `off`.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Serializes tests that touch process environment variables.
#[cfg(test)]
pub(crate) static ENV_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "datakit_mcp_server");
        assert_eq!(config.server.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.with_timestamps);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_server_and_logging_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "datakit-test");
            std::env::set_var("MCP_LOG_LEVEL", "debug");
            std::env::set_var("MCP_LOG_TIMESTAMPS", "false");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "datakit-test");
        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.with_timestamps);
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
            std::env::remove_var("MCP_LOG_LEVEL");
            std::env::remove_var("MCP_LOG_TIMESTAMPS");
        }
    }

    #[test]
    fn test_invalid_timestamp_flag_keeps_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_LOG_TIMESTAMPS", "sometimes");
        }
        let config = Config::from_env();
        assert!(config.logging.with_timestamps);
        unsafe {
            std::env::remove_var("MCP_LOG_TIMESTAMPS");
        }
    }

    #[test]
    fn test_env_or_falls_back_on_parse_error() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_TEST_NUMBER", "not-a-number");
        }
        assert_eq!(env_or("MCP_TEST_NUMBER", 7u16), 7);
        unsafe {
            std::env::set_var("MCP_TEST_NUMBER", " 42 ");
        }
        assert_eq!(env_or("MCP_TEST_NUMBER", 7u16), 42);
        unsafe {
            std::env::remove_var("MCP_TEST_NUMBER");
        }
        assert_eq!(env_or("MCP_TEST_NUMBER", 7u16), 7);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_empty_server_name_is_rejected() {
        let mut config = Config::default();
        config.server.name = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
