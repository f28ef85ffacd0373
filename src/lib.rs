//! Named Cache - a registry of independently configured in-memory caches
//!
//! Each cache has its own default TTL and background expiry sweep; items
//! can carry their own TTL and are hidden on read as soon as they expire.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{CacheConfig, CacheRegistry, ExpiringCache, Ttl};
pub use config::Config;
pub use error::CacheError;
