//! Cache Registry Module
//!
//! Owns the named collection of `ExpiringCache` instances.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::info;

use crate::cache::{CacheConfig, ExpiringCache};
use crate::error::{CacheError, Result};

// == Cache Info ==
/// Snapshot of one registered cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheInfo {
    /// Registry name of the cache
    pub name: String,
    /// Raw number of stored items, including expired ones not yet swept
    pub item_count: usize,
}

// == Cache Registry ==
/// Maps names to shared cache handles. At most one cache exists per name.
#[derive(Debug)]
pub struct CacheRegistry<V> {
    caches: RwLock<HashMap<String, Arc<ExpiringCache<V>>>>,
}

impl<V> Default for CacheRegistry<V> {
    fn default() -> Self {
        Self {
            caches: RwLock::new(HashMap::new()),
        }
    }
}

impl<V> CacheRegistry<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // == Create ==
    /// Creates a cache under `name` unless one already exists.
    ///
    /// An existing cache is left exactly as it is, configuration included.
    /// Returns true if a new cache was created.
    pub async fn create(&self, name: &str, config: CacheConfig) -> bool {
        let mut caches = self.caches.write().await;
        if caches.contains_key(name) {
            info!(cache = %name, "Cache already exists, keeping existing configuration");
            return false;
        }

        caches.insert(name.to_string(), Arc::new(ExpiringCache::new(name, config)));
        info!(
            cache = %name,
            "Cache created: default_ttl={:?}, sweep_interval={:?}",
            config.default_ttl, config.sweep_interval
        );
        true
    }

    /// Returns true if a cache is registered under `name`.
    pub async fn contains(&self, name: &str) -> bool {
        self.caches.read().await.contains_key(name)
    }

    // == Lookup ==
    /// Returns a shared handle to the cache under `name`.
    pub async fn get(&self, name: &str) -> Option<Arc<ExpiringCache<V>>> {
        self.caches.read().await.get(name).cloned()
    }

    /// Like `get`, but fails with `CacheNotFound`.
    pub async fn require(&self, name: &str) -> Result<Arc<ExpiringCache<V>>> {
        self.get(name)
            .await
            .ok_or_else(|| CacheError::CacheNotFound(name.to_string()))
    }

    // == List ==
    /// Returns every cache's name and raw item count, sorted by name.
    pub async fn list(&self) -> Vec<CacheInfo> {
        let caches: Vec<_> = self
            .caches
            .read()
            .await
            .iter()
            .map(|(name, cache)| (name.clone(), cache.clone()))
            .collect();

        let mut list = Vec::with_capacity(caches.len());
        for (name, cache) in caches {
            list.push(CacheInfo {
                name,
                item_count: cache.len().await,
            });
        }
        list.sort_by(|a, b| a.name.cmp(&b.name));
        list
    }

    // == Destroy ==
    /// Removes the cache under `name` and stops its sweep task.
    ///
    /// Returns whether a cache was removed. Callers still holding the handle
    /// keep a working, unswept cache.
    pub async fn destroy(&self, name: &str) -> bool {
        let removed = self.caches.write().await.remove(name);

        match removed {
            Some(cache) => {
                cache.close().await;
                info!(cache = %name, "Cache destroyed");
                true
            }
            None => false,
        }
    }

    /// Stops the sweep task of every registered cache.
    pub async fn close_all(&self) {
        let caches: Vec<_> = self.caches.read().await.values().cloned().collect();
        for cache in caches {
            cache.close().await;
        }
    }

    /// Returns the number of registered caches.
    pub async fn len(&self) -> usize {
        self.caches.read().await.len()
    }

    /// Returns true if no cache is registered.
    pub async fn is_empty(&self) -> bool {
        self.caches.read().await.is_empty()
    }
}
