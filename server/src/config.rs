//! Server Configuration
//!
//! Read from environment variables with defaults.

use std::net::SocketAddr;

const DEFAULT_ADDR: &str = "127.0.0.1:8080";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Bind address from `TODO_SERVER_ADDR`, falling back to the default
    pub fn from_env() -> anyhow::Result<Self> {
        let addr = std::env::var("TODO_SERVER_ADDR")
            .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
            .parse()?;
        Ok(Self { addr })
    }
}
