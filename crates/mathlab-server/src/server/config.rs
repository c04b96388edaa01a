//! Server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default maximum request body size (2 MiB). Every request this API
/// accepts is small; anything larger is abuse.
pub const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind
    pub host: IpAddr,
    /// Port to bind
    pub port: u16,
    /// Allow any origin (development mode)
    pub cors_all: bool,
    /// Explicit allowed origin when `cors_all` is off
    pub origin: Option<String>,
    /// Maximum accepted request body size in bytes
    pub body_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8080,
            cors_all: false,
            origin: None,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl ServerConfig {
    /// The socket address to bind.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
