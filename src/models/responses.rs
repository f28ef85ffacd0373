//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

use crate::cache::CacheInfo;

/// Response body for cache creation (POST /caches)
#[derive(Debug, Clone, Serialize)]
pub struct CreateCacheResponse {
    /// The cache name
    pub name: String,
    /// False when a cache with this name already existed and was kept
    pub created: bool,
}

impl CreateCacheResponse {
    /// Creates a new CreateCacheResponse
    pub fn new(name: impl Into<String>, created: bool) -> Self {
        Self {
            name: name.into(),
            created,
        }
    }
}

/// Response body for listing caches (GET /caches)
#[derive(Debug, Clone, Serialize)]
pub struct ListCachesResponse {
    /// One entry per registered cache
    pub caches: Vec<CacheInfo>,
}

/// Response body for cache removal (DELETE /caches/:name)
#[derive(Debug, Clone, Serialize)]
pub struct DestroyCacheResponse {
    /// Success message
    pub message: String,
    /// The cache that was removed
    pub name: String,
}

impl DestroyCacheResponse {
    /// Creates a new DestroyCacheResponse
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            message: format!("Cache '{}' destroyed successfully", name),
            name,
        }
    }
}

/// Response body for item writes and deletes
#[derive(Debug, Clone, Serialize)]
pub struct ItemResponse {
    /// Success message
    pub message: String,
    /// The key that was written or deleted
    pub key: String,
}

impl ItemResponse {
    /// Creates a new ItemResponse; `action` is the past-tense verb, e.g. "added".
    pub fn new(key: impl Into<String>, action: &str) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' {} successfully", key, action),
            key,
        }
    }
}

/// Response body for item reads (GET /caches/:name/items)
#[derive(Debug, Clone, Serialize)]
pub struct GetItemsResponse {
    /// Live values in request order; missing and expired keys are skipped
    pub values: Vec<Value>,
    /// True if at least one key matched
    pub found: bool,
}

impl GetItemsResponse {
    /// Creates a response from the cache lookup result
    pub fn new(values: Option<Vec<Value>>) -> Self {
        match values {
            Some(values) => Self {
                values,
                found: true,
            },
            None => Self {
                values: Vec::new(),
                found: false,
            },
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
