//! Cache Module
//!
//! Provides named in-memory caches with per-item TTL, lazy expiry on read
//! and periodic background sweeps.

mod expiring;
mod item;
mod registry;
mod store;
mod ttl;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use expiring::ExpiringCache;
pub use item::Item;
pub use registry::{CacheInfo, CacheRegistry};
pub use store::ItemStore;
pub use ttl::{CacheConfig, Ttl};

// == Public Constants ==
/// Maximum allowed key and cache name length in bytes
pub const MAX_KEY_LENGTH: usize = 256;
