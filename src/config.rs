//! Server configuration read from the environment.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

/// Environment variable overriding the listen address.
pub const ADDR_ENV: &str = "CHIMICHANG_ADDR";

const DEFAULT_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 3000);

/// Configuration errors raised during startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configured listen address did not parse.
    #[error("invalid listen address {addr:?}: {source}")]
    InvalidAddr {
        /// The raw value that was rejected.
        addr: String,
        /// The underlying parse error.
        source: std::net::AddrParseError,
    },
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address.
    pub addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { addr: DEFAULT_ADDR }
    }
}

impl ServerConfig {
    /// Read the configuration from the environment, falling back to the
    /// defaults when `CHIMICHANG_ADDR` is unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(ADDR_ENV) {
            Ok(raw) if !raw.is_empty() => parse_addr(&raw),
            _ => Ok(Self::default()),
        }
    }
}

fn parse_addr(raw: &str) -> Result<ServerConfig, ConfigError> {
    let addr = raw.parse().map_err(|source| ConfigError::InvalidAddr {
        addr: raw.to_owned(),
        source,
    })?;

    Ok(ServerConfig { addr })
}
