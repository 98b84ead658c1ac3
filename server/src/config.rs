//! Server configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Directory served at `/assets`; defaults to `<site_root>/assets`.
    pub assets_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: DEFAULT_BIND_ADDR, port: DEFAULT_PORT, assets_dir: None }
    }
}

impl ServerConfig {
    /// Build typed config from process environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `ASSETS_DIR`: default `<site_root>/assets`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is set but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match non_empty(lookup("PORT")) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw, reason: "expected a port number" })?,
            None => DEFAULT_PORT,
        };
        let bind_addr = match non_empty(lookup("BIND_ADDR")) {
            Some(raw) => raw
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::Invalid { var: "BIND_ADDR", value: raw, reason: "expected an IP address" })?,
            None => DEFAULT_BIND_ADDR,
        };
        let assets_dir = non_empty(lookup("ASSETS_DIR")).map(PathBuf::from);

        Ok(Self { bind_addr, port, assets_dir })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
