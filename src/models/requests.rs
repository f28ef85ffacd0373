//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;
use serde_json::Value;

use crate::cache::{Ttl, MAX_KEY_LENGTH};

/// Request body for creating a cache (POST /caches)
///
/// # Fields
/// - `name`: Registry name of the cache
/// - `default_ttl`: Optional default item TTL in seconds, 0 = never expire
/// - `sweep_interval`: Optional sweep period in seconds, <= 0 = no sweep
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCacheRequest {
    /// The cache name
    pub name: String,
    /// Default TTL in seconds
    #[serde(default)]
    pub default_ttl: Option<u64>,
    /// Sweep interval in seconds
    #[serde(default)]
    pub sweep_interval: Option<i64>,
}

impl CreateCacheRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_name("Cache name", &self.name)
    }
}

/// Request body for item writes (POST, PUT and PATCH on /caches/:name/items)
///
/// # Fields
/// - `key`: The key to write
/// - `value`: Any JSON value, stored as is
/// - `ttl`: Optional TTL in seconds, 0 = never expire
#[derive(Debug, Clone, Deserialize)]
pub struct ItemRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: Value,
    /// Optional TTL in seconds
    #[serde(default)]
    pub ttl: Option<u64>,
}

impl ItemRequest {
    /// Validates the request data
    ///
    /// Keys must be readable back through `GetItemsQuery`, so commas and
    /// surrounding whitespace are rejected.
    pub fn validate(&self) -> Option<String> {
        if let Some(error_msg) = validate_name("Key", &self.key) {
            return Some(error_msg);
        }
        if self.key.contains(',') {
            return Some("Key cannot contain ','".to_string());
        }
        if self.key.trim() != self.key {
            return Some("Key cannot start or end with whitespace".to_string());
        }
        None
    }

    /// Converts the wire TTL, using `absent` when the field was omitted.
    pub fn ttl_or(&self, absent: Ttl) -> Ttl {
        self.ttl.map(Ttl::from_secs).unwrap_or(absent)
    }
}

/// Query string for item reads (GET /caches/:name/items?keys=a,b)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetItemsQuery {
    /// Comma-separated keys
    #[serde(default)]
    pub keys: String,
}

impl GetItemsQuery {
    /// Splits the key list, dropping empty segments.
    pub fn keys(&self) -> Vec<&str> {
        self.keys
            .split(',')
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .collect()
    }
}

fn validate_name(label: &str, name: &str) -> Option<String> {
    if name.is_empty() {
        return Some(format!("{} cannot be empty", label));
    }
    if name.len() > MAX_KEY_LENGTH {
        return Some(format!(
            "{} exceeds maximum length of {} characters",
            label, MAX_KEY_LENGTH
        ));
    }
    None
}
