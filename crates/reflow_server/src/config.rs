//! Server configuration from the environment.

use reflow_error::{ServerError, ServerErrorKind, ServerResult};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the listener binds to
    pub bind_addr: String,
    /// PostgreSQL connection string
    pub database_url: String,
}

impl ServerConfig {
    /// Reads `BIND_ADDR` (optional) and `DATABASE_URL` (required).
    pub fn from_env() -> ServerResult<Self> {
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let database_url = std::env::var("DATABASE_URL").map_err(|_| {
            ServerError::new(ServerErrorKind::Config(
                "DATABASE_URL environment variable not set".to_string(),
            ))
        })?;
        Ok(Self {
            bind_addr,
            database_url,
        })
    }
}
