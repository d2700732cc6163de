//! Configuration schema definitions.
//!
//! The whole surface is the listen address: host and port, nothing else.
//! Defaults cover the common case; environment variables override them and
//! CLI flags (parsed in the binary) override both.

use thiserror::Error;

/// Environment variable overriding the listen host.
pub const LISTEN_HOST_VAR: &str = "LISTEN_HOST";
/// Environment variable overriding the listen port.
pub const LISTEN_PORT_VAR: &str = "LISTEN_PORT";

/// Root configuration for the server.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// Listener configuration (bind host and port).
    pub listener: ListenerConfig,
}

/// Listener configuration.
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Host or address to bind, e.g. `"::"`, `"0.0.0.0"`, `"localhost"`.
    pub host: String,

    /// TCP port to bind.
    pub port: u16,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "::".to_string(),
            port: 8080,
        }
    }
}

impl ListenerConfig {
    /// Render the address to hand to the TCP listener.
    ///
    /// A bare IPv6 host is bracketed so the port separator stays unambiguous.
    pub fn bind_address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The port variable was set but did not hold a valid port number.
    #[error("invalid LISTEN_PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

impl ServerConfig {
    /// Load configuration: defaults overridden by environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through the given variable lookup.
    ///
    /// Empty values are treated as unset. A malformed port is a hard error:
    /// startup should fail loudly rather than listen somewhere unexpected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup(LISTEN_HOST_VAR).filter(|value| !value.is_empty()) {
            config.listener.host = host;
        }

        if let Some(port) = lookup(LISTEN_PORT_VAR).filter(|value| !value.is_empty()) {
            config.listener.port = port.parse().map_err(|source| ConfigError::InvalidPort {
                value: port.clone(),
                source,
            })?;
        }

        Ok(config)
    }
}
