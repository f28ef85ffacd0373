//! Expiring Cache Module
//!
//! One isolated cache namespace: an `ItemStore` behind a single read/write
//! lock, plus the background sweep task that evicts its expired items.

use std::sync::Arc;

use tokio::sync::{watch, Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::cache::{CacheConfig, ItemStore, Ttl};
use crate::error::Result;
use crate::tasks::spawn_sweep_task;

// == Expiring Cache ==
/// A concurrent TTL cache with its own default TTL and sweep cadence.
///
/// `exists`, `get` and `len` take the lock in shared mode; every other
/// operation, including the sweep, takes it exclusively.
///
/// Must be constructed inside a tokio runtime when the sweep is enabled.
#[derive(Debug)]
pub struct ExpiringCache<V> {
    name: String,
    config: CacheConfig,
    store: Arc<RwLock<ItemStore<V>>>,
    shutdown: watch::Sender<bool>,
    sweeper: Mutex<Option<JoinHandle<()>>>,
}

impl<V> ExpiringCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    // == Constructor ==
    /// Creates a cache and, if `config.sweep_interval` is set, starts its
    /// sweep task.
    pub fn new(name: impl Into<String>, config: CacheConfig) -> Self {
        let name = name.into();
        let store = Arc::new(RwLock::new(ItemStore::new(config.default_ttl)));
        let (shutdown, shutdown_rx) = watch::channel(false);

        let sweeper = config.sweep_interval.map(|interval| {
            spawn_sweep_task(name.clone(), store.clone(), interval, shutdown_rx)
        });
        if sweeper.is_none() {
            debug!(cache = %name, "Expiry sweep disabled");
        }

        Self {
            name,
            config,
            store,
            shutdown,
            sweeper: Mutex::new(sweeper),
        }
    }

    /// Returns the name this cache was created with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the configuration this cache was created with.
    pub fn config(&self) -> CacheConfig {
        self.config
    }

    // == Exists ==
    /// Returns true if the key is stored, including expired items the sweep
    /// has not removed yet.
    pub async fn exists(&self, key: &str) -> bool {
        self.store.read().await.exists(key)
    }

    // == Add ==
    /// Stores a new item. Fails with `KeyAlreadyExists` if the key is stored.
    pub async fn add(&self, key: impl Into<String>, value: V, ttl: Ttl) -> Result<()> {
        let key = key.into();
        debug!(cache = %self.name, "ADD key={}, ttl={:?}", key, ttl);
        self.store.write().await.add(key, value, ttl)
    }

    // == Set ==
    /// Stores an item, replacing whatever was under the key.
    pub async fn set(&self, key: impl Into<String>, value: V, ttl: Ttl) {
        let key = key.into();
        debug!(cache = %self.name, "SET key={}, ttl={:?}", key, ttl);
        self.store.write().await.set(key, value, ttl);
    }

    // == Update ==
    /// Replaces the value of a stored key. Fails with `KeyNotFound` if the
    /// key is absent. `Ttl::KeepExisting` leaves the deadline untouched.
    pub async fn update(&self, key: &str, value: V, ttl: Ttl) -> Result<()> {
        debug!(cache = %self.name, "UPDATE key={}, ttl={:?}", key, ttl);
        self.store.write().await.update(key, value, ttl)
    }

    // == Get ==
    /// Returns the live values for `keys` in request order, or None if none
    /// of them matched.
    pub async fn get<K: AsRef<str>>(&self, keys: &[K]) -> Option<Vec<V>> {
        self.store.read().await.get(keys)
    }

    // == Delete ==
    /// Removes a key. Returns whether anything was removed.
    pub async fn delete(&self, key: &str) -> bool {
        debug!(cache = %self.name, "DELETE key={}", key);
        self.store.write().await.delete(key)
    }

    // == Sweep ==
    /// Removes all expired items now. Returns the number removed.
    pub async fn sweep(&self) -> usize {
        self.store.write().await.sweep()
    }

    /// Returns the raw number of stored items, expired ones included.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Returns true if nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    // == Close ==
    /// Stops the sweep task and waits for it to exit.
    ///
    /// Item operations keep working afterwards; expired items are then only
    /// hidden on read or removed by `sweep`/`delete`. Closing twice is a no-op.
    pub async fn close(&self) {
        self.shutdown.send_replace(true);

        let handle = self.sweeper.lock().await.take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                warn!(cache = %self.name, "Expiry sweep ended abnormally: {}", e);
            }
            info!(cache = %self.name, "Cache closed");
        }
    }

    /// Returns true while the sweep task is running.
    pub async fn is_sweeping(&self) -> bool {
        self.sweeper
            .lock()
            .await
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}
