//! Server configuration
//!
//! Read from environment variables with sensible defaults. There is no
//! config file or database; the service is intentionally stateless.

use std::env;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_UPSTREAM_BASE_URL: &str = "https://api-web.nhle.com";

/// Runtime configuration for the proxy server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub upstream_base_url: String,
}

impl ServerConfig {
    /// Build config from `HOST`, `PORT`, and `UPSTREAM_BASE_URL` env vars.
    /// Unset or unparseable values fall back to defaults.
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let upstream_base_url = env::var("UPSTREAM_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_BASE_URL.to_string());

        Self {
            host,
            port,
            upstream_base_url,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            upstream_base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
        }
    }
}
