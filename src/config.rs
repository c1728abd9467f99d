//! Configuration Module
//!
//! Handles loading shell configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default PokeAPI base URL.
pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";

/// Shell configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Lifetime in seconds of every cached catalog response
    pub cache_ttl: u64,
    /// Catalog base URL, without trailing slash
    pub api_base_url: String,
    /// HTTP request timeout in seconds
    pub http_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL` - Cache entry lifetime in seconds (default: 300)
    /// - `POKEAPI_URL` - Catalog base URL (default: https://pokeapi.co/api/v2)
    /// - `HTTP_TIMEOUT` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_ttl: positive_var("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            api_base_url: env::var("POKEAPI_URL")
                .ok()
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_base_url),
            http_timeout: positive_var("HTTP_TIMEOUT").unwrap_or(defaults.http_timeout),
        }
    }

    /// Cache lifetime as a Duration.
    pub fn cache_lifetime(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// HTTP timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: 300,
            api_base_url: DEFAULT_API_URL.to_string(),
            http_timeout: 10,
        }
    }
}

fn positive_var(name: &str) -> Option<u64> {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .filter(|&v| v > 0)
}
