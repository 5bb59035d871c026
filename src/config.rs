//! Server configuration.
//!
//! # Design Decisions
//! - All fields have defaults so the service runs with zero setup
//! - The listen port comes from the `PORT` environment variable; an
//!   unparseable value falls back to the default with a warning
//! - The body cap is not environment-configurable; tests override it
//!   directly on the struct

use serde::{Deserialize, Serialize};

/// Port used when `PORT` is unset or invalid.
pub const DEFAULT_PORT: u16 = 8080;

/// Hard cap on accumulated request body bytes (~1 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Root configuration for the dictionary service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// TCP port to listen on.
    pub port: u16,

    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    /// Build a configuration from the process environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var("PORT") {
            match raw.parse() {
                Ok(port) => config.port = port,
                Err(_) => {
                    tracing::warn!(
                        value = %raw,
                        default = DEFAULT_PORT,
                        "PORT is not a valid port number, using default"
                    );
                }
            }
        }
        config
    }

    /// Address to bind the listener to.
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
