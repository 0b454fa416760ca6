//! Configuration for the directory server.

use marquee_error::{ServerError, ServerErrorKind};

/// Configuration for the directory server.
///
/// The database connection string itself stays in `DATABASE_URL`, read by
/// the database crate when the pool is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServerConfig {
    /// Address to bind (e.g., "127.0.0.1")
    pub host: String,
    /// Port to serve on
    pub port: u16,
    /// Size of the database connection pool
    pub pool_size: u32,
}

impl ServerConfig {
    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `MARQUEE_HOST` (default: "127.0.0.1")
    /// - `MARQUEE_PORT` (default: 5000)
    /// - `MARQUEE_POOL_SIZE` (default: 10)
    pub fn from_env() -> Result<Self, ServerError> {
        let host = std::env::var("MARQUEE_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match std::env::var("MARQUEE_PORT") {
            Ok(port) => port.parse().map_err(|_| {
                ServerError::new(ServerErrorKind::Configuration(format!(
                    "MARQUEE_PORT is not a port number: {}",
                    port
                )))
            })?,
            Err(_) => 5000,
        };
        let pool_size = match std::env::var("MARQUEE_POOL_SIZE") {
            Ok(size) => size.parse().map_err(|_| {
                ServerError::new(ServerErrorKind::Configuration(format!(
                    "MARQUEE_POOL_SIZE is not a number: {}",
                    size
                )))
            })?,
            Err(_) => 10,
        };

        Ok(Self {
            host,
            port,
            pool_size,
        })
    }

    /// The socket address string to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            pool_size: 10,
        }
    }
}
