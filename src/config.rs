//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use crate::cache::CacheConfig;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Default TTL in seconds for caches created without one, 0 = never expire
    pub default_ttl: u64,
    /// Sweep interval in seconds for caches created without one, <= 0 = disabled
    pub sweep_interval: i64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `DEFAULT_TTL` - Default item TTL in seconds (default: 300)
    /// - `SWEEP_INTERVAL` - Expiry sweep frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from any variable source. Missing or unparsable
    /// values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            server_port: parse_var(lookup("SERVER_PORT")).unwrap_or(defaults.server_port),
            default_ttl: parse_var(lookup("DEFAULT_TTL")).unwrap_or(defaults.default_ttl),
            sweep_interval: parse_var(lookup("SWEEP_INTERVAL")).unwrap_or(defaults.sweep_interval),
        }
    }

    /// Builds a cache configuration, falling back to the server defaults for
    /// any value the caller left out.
    pub fn cache_config(&self, default_ttl: Option<u64>, sweep_interval: Option<i64>) -> CacheConfig {
        CacheConfig::from_secs(
            default_ttl.unwrap_or(self.default_ttl),
            sweep_interval.unwrap_or(self.sweep_interval),
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            default_ttl: 300,
            sweep_interval: 60,
        }
    }
}

fn parse_var<T: std::str::FromStr>(value: Option<String>) -> Option<T> {
    value.and_then(|v| v.parse().ok())
}
