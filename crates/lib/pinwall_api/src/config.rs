//! API server configuration.

use pinwall_core::auth::token::resolve_jwt_secret;

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:3000").
    pub bind_addr: String,
    /// Session token signing secret.
    pub jwt_secret: String,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable     | Default                       |
    /// |--------------|-------------------------------|
    /// | `BIND_ADDR`  | `127.0.0.1:3000`              |
    /// | `JWT_SECRET` | generated & persisted to file |
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".into()),
            jwt_secret: resolve_jwt_secret(),
        }
    }
}
