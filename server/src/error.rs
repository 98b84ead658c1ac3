//! Startup errors for the site server.

use std::net::SocketAddr;

/// A server configuration value could not be used.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable held a value of the wrong shape.
    #[error("invalid {var}: {value:?} ({reason})")]
    Invalid { var: &'static str, value: String, reason: &'static str },
}

/// Failures that stop the server before or while serving.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// `[package.metadata.leptos]` / `LEPTOS_*` settings could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: std::io::Error },

    #[error("server failed: {0}")]
    Serve(std::io::Error),
}
