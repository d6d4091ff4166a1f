//! Transport selection and per-transport settings.
//!
//! `MCP_TRANSPORT` names the transport; each one reads its own
//! `MCP_<TRANSPORT>_*` variables. A name that is unknown, or whose feature
//! was not compiled in, falls back to the default transport with a warning.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

#[cfg(feature = "http")]
use crate::core::config::env_flag;
#[cfg(any(feature = "tcp", feature = "http"))]
use crate::core::config::env_or;

#[cfg(not(any(feature = "stdio", feature = "tcp", feature = "http")))]
compile_error!("at least one transport feature must be enabled: stdio, tcp or http");

/// Bind host for the network transports.
#[cfg(any(feature = "tcp", feature = "http"))]
pub const DEFAULT_HOST: &str = "127.0.0.1";

#[cfg(feature = "tcp")]
pub const DEFAULT_TCP_PORT: u16 = 3000;

#[cfg(feature = "http")]
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Route of the JSON-RPC endpoint.
#[cfg(feature = "http")]
pub const DEFAULT_RPC_PATH: &str = "/mcp";

/// The transport serving MCP sessions, with its settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// One session over stdin/stdout.
    #[cfg(feature = "stdio")]
    Stdio,

    /// One session per accepted TCP connection.
    #[cfg(feature = "tcp")]
    Tcp(TcpConfig),

    /// JSON-RPC over HTTP POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// TCP listener settings.
#[cfg(feature = "tcp")]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TcpConfig {
    pub host: String,
    pub port: u16,
}

/// HTTP listener settings.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,

    /// Route of the JSON-RPC endpoint; `/` and `/health` are taken.
    pub rpc_path: String,

    /// Answer CORS preflights for any origin.
    pub enable_cors: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        let config = Self::Stdio;
        #[cfg(all(not(feature = "stdio"), feature = "tcp"))]
        let config = Self::Tcp(TcpConfig::default());
        #[cfg(all(not(feature = "stdio"), not(feature = "tcp"), feature = "http"))]
        let config = Self::Http(HttpConfig::default());
        config
    }
}

impl TransportConfig {
    /// Select the transport from `MCP_TRANSPORT` (case-insensitive).
    pub fn from_env() -> Self {
        let requested = std::env::var("MCP_TRANSPORT")
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        match requested.as_str() {
            "" => Self::default_from_env(),
            #[cfg(feature = "stdio")]
            "stdio" => Self::Stdio,
            #[cfg(feature = "tcp")]
            "tcp" => Self::Tcp(TcpConfig::from_env()),
            #[cfg(feature = "http")]
            "http" => Self::Http(HttpConfig::from_env()),
            other => {
                let fallback = Self::default_from_env();
                warn!(
                    "Transport {:?} is unknown or not compiled in, using {}",
                    other, fallback
                );
                fallback
            }
        }
    }

    /// The default transport, with its settings read from the environment.
    fn default_from_env() -> Self {
        match Self::default() {
            #[cfg(feature = "stdio")]
            Self::Stdio => Self::Stdio,
            #[cfg(feature = "tcp")]
            Self::Tcp(_) => Self::Tcp(TcpConfig::from_env()),
            #[cfg(feature = "http")]
            Self::Http(_) => Self::Http(HttpConfig::from_env()),
        }
    }

    /// Check settings that would otherwise fail once the listener starts.
    pub(crate) fn validate(&self) -> Result<(), String> {
        match self {
            #[cfg(feature = "http")]
            Self::Http(http) => http.validate(),
            #[allow(unreachable_patterns)]
            _ => Ok(()),
        }
    }
}

impl fmt::Display for TransportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => f.write_str("stdio"),
            #[cfg(feature = "tcp")]
            Self::Tcp(tcp) => write!(f, "tcp://{}", tcp.address()),
            #[cfg(feature = "http")]
            Self::Http(http) => write!(f, "http://{}{}", http.address(), http.rpc_path),
        }
    }
}

#[cfg(feature = "tcp")]
impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_TCP_PORT,
        }
    }
}

#[cfg(feature = "tcp")]
impl TcpConfig {
    /// Read `MCP_TCP_HOST` and `MCP_TCP_PORT`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env_or("MCP_TCP_HOST", defaults.host),
            port: env_or("MCP_TCP_PORT", defaults.port),
        }
    }

    /// `host:port` to bind.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
            rpc_path: DEFAULT_RPC_PATH.to_string(),
            enable_cors: true,
        }
    }
}

#[cfg(feature = "http")]
impl HttpConfig {
    /// Read `MCP_HTTP_HOST`, `MCP_HTTP_PORT`, `MCP_HTTP_PATH` and
    /// `MCP_HTTP_CORS`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env_or("MCP_HTTP_HOST", defaults.host),
            port: env_or("MCP_HTTP_PORT", defaults.port),
            rpc_path: env_or("MCP_HTTP_PATH", defaults.rpc_path),
            enable_cors: env_flag("MCP_HTTP_CORS", defaults.enable_cors),
        }
    }

    /// `host:port` to bind.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn validate(&self) -> Result<(), String> {
        let path = self.rpc_path.as_str();
        if !path.starts_with('/') || path == "/" || path == "/health" {
            return Err(format!(
                "HTTP JSON-RPC path must start with '/' and differ from / and /health, got {:?}",
                path
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ENV_TEST_LOCK;

    const TRANSPORT_VARS: [&str; 7] = [
        "MCP_TRANSPORT",
        "MCP_TCP_HOST",
        "MCP_TCP_PORT",
        "MCP_HTTP_HOST",
        "MCP_HTTP_PORT",
        "MCP_HTTP_PATH",
        "MCP_HTTP_CORS",
    ];

    fn with_env(vars: &[(&str, &str)], check: impl FnOnce()) {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            for name in TRANSPORT_VARS {
                std::env::remove_var(name);
            }
            for (name, value) in vars {
                std::env::set_var(name, value);
            }
        }
        check();
        unsafe {
            for name in TRANSPORT_VARS {
                std::env::remove_var(name);
            }
        }
    }

    #[cfg(feature = "stdio")]
    #[test]
    fn test_default_is_stdio() {
        let config = TransportConfig::default();
        assert!(matches!(config, TransportConfig::Stdio));
        assert_eq!(config.to_string(), "stdio");
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            serde_json::json!({ "type": "stdio" })
        );
    }

    #[test]
    fn test_unknown_transport_uses_default() {
        with_env(&[("MCP_TRANSPORT", "carrier-pigeon")], || {
            let config = TransportConfig::from_env();
            assert_eq!(config.to_string(), TransportConfig::default().to_string());
        });
    }

    #[cfg(feature = "tcp")]
    #[test]
    fn test_tcp_from_env_keeps_default_port_on_garbage() {
        with_env(
            &[
                ("MCP_TRANSPORT", "TCP"),
                ("MCP_TCP_HOST", "0.0.0.0"),
                ("MCP_TCP_PORT", "three thousand"),
            ],
            || {
                let config = TransportConfig::from_env();
                let TransportConfig::Tcp(tcp) = &config else {
                    panic!("expected tcp, got {}", config);
                };
                assert_eq!(tcp.port, DEFAULT_TCP_PORT);
                assert_eq!(tcp.address(), "0.0.0.0:3000");
                assert_eq!(config.to_string(), "tcp://0.0.0.0:3000");
            },
        );
    }

    #[cfg(feature = "tcp")]
    #[test]
    fn test_tcp_config_fields_default_when_omitted() {
        let config: TransportConfig =
            serde_json::from_value(serde_json::json!({ "type": "tcp", "port": 4000 })).unwrap();
        let TransportConfig::Tcp(tcp) = config else {
            panic!("expected tcp");
        };
        assert_eq!(tcp.address(), "127.0.0.1:4000");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_from_env() {
        with_env(
            &[
                ("MCP_TRANSPORT", "http"),
                ("MCP_HTTP_PORT", "99999"),
                ("MCP_HTTP_PATH", "/rpc"),
                ("MCP_HTTP_CORS", "off"),
            ],
            || {
                let config = TransportConfig::from_env();
                let TransportConfig::Http(http) = &config else {
                    panic!("expected http, got {}", config);
                };
                assert_eq!(http.port, DEFAULT_HTTP_PORT);
                assert!(!http.enable_cors);
                assert_eq!(config.to_string(), "http://127.0.0.1:8080/rpc");
                assert!(config.validate().is_ok());
            },
        );
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_rpc_path_must_not_shadow_builtin_routes() {
        for path in ["mcp", "/", "/health"] {
            let config = TransportConfig::Http(HttpConfig {
                rpc_path: path.to_string(),
                ..HttpConfig::default()
            });
            assert!(config.validate().is_err(), "{:?} accepted", path);
        }
    }
}
