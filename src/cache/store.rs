//! Cache Store Module
//!
//! Unsynchronised key-to-item storage with TTL resolution, lazy expiry on
//! read and an eager sweep. Locking is layered on top by `ExpiringCache`.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::{Item, Ttl};
use crate::error::{CacheError, Result};

// == Item Store ==
/// Key-value storage for one cache namespace.
#[derive(Debug)]
pub struct ItemStore<V> {
    /// Key-item storage
    items: HashMap<String, Item<V>>,
    /// TTL used for `Ttl::UseDefault`, None = never expire
    default_ttl: Option<Duration>,
}

impl<V> ItemStore<V> {
    // == Constructor ==
    /// Creates an empty store with the given default TTL.
    pub fn new(default_ttl: Option<Duration>) -> Self {
        Self {
            items: HashMap::new(),
            default_ttl,
        }
    }

    // == Exists ==
    /// Returns true if the key is stored, whether or not it has expired.
    pub fn exists(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    // == Add ==
    /// Inserts a new item, refusing to overwrite an existing key.
    pub fn add(&mut self, key: String, value: V, ttl: Ttl) -> Result<()> {
        if self.exists(&key) {
            return Err(CacheError::KeyAlreadyExists(key));
        }

        let expires_at = ttl.resolve(self.default_ttl, Instant::now());
        self.items.insert(key, Item::new(value, expires_at));
        Ok(())
    }

    // == Set ==
    /// Stores an item unconditionally, replacing any prior value and expiry.
    ///
    /// `Ttl::KeepExisting` keeps the deadline of an existing key; a new key
    /// gets the default TTL.
    pub fn set(&mut self, key: String, value: V, ttl: Ttl) {
        let now = Instant::now();
        let expires_at = match (ttl, self.items.get(&key)) {
            (Ttl::KeepExisting, Some(existing)) => existing.expires_at,
            _ => ttl.resolve(self.default_ttl, now),
        };
        self.items.insert(key, Item::new(value, expires_at));
    }

    // == Update ==
    /// Replaces the value of an existing key.
    ///
    /// The deadline is replaced too, unless `ttl` is `Ttl::KeepExisting`.
    pub fn update(&mut self, key: &str, value: V, ttl: Ttl) -> Result<()> {
        let default_ttl = self.default_ttl;
        let item = self
            .items
            .get_mut(key)
            .ok_or_else(|| CacheError::KeyNotFound(key.to_string()))?;

        item.value = value;
        if ttl != Ttl::KeepExisting {
            item.expires_at = ttl.resolve(default_ttl, Instant::now());
        }
        Ok(())
    }

    // == Get ==
    /// Collects the live values for `keys`, in request order.
    ///
    /// Missing and expired keys are skipped. Returns None when nothing
    /// matched, including for an empty key list.
    pub fn get<K: AsRef<str>>(&self, keys: &[K]) -> Option<Vec<V>>
    where
        V: Clone,
    {
        if keys.is_empty() {
            return None;
        }

        let now = Instant::now();
        let values: Vec<V> = keys
            .iter()
            .filter_map(|key| self.items.get(key.as_ref()))
            .filter(|item| !item.is_expired_at(now))
            .map(|item| item.value.clone())
            .collect();

        if values.is_empty() {
            None
        } else {
            Some(values)
        }
    }

    /// Returns the raw item for a key, expired or not.
    pub fn item(&self, key: &str) -> Option<&Item<V>> {
        self.items.get(key)
    }

    // == Delete ==
    /// Removes a key. Returns whether anything was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        self.items.remove(key).is_some()
    }

    // == Sweep ==
    /// Removes all expired items.
    ///
    /// Returns the number of items removed.
    pub fn sweep(&mut self) -> usize {
        let now = Instant::now();
        let before = self.items.len();
        self.items.retain(|_, item| !item.is_expired_at(now));
        before - self.items.len()
    }

    // == Length ==
    /// Returns the raw number of stored items, including expired ones not
    /// yet swept.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    // == Is Empty ==
    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const MINUTE: Duration = Duration::from_secs(60);

    fn store() -> ItemStore<String> {
        ItemStore::new(Some(10 * MINUTE))
    }

    #[test]
    fn test_store_new() {
        let store = store();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_absent_key() {
        let store = store();
        assert!(!store.exists("missing"));
        assert!(store.get(&["missing"]).is_none());
    }

    #[test]
    fn test_add_and_get() {
        let mut store = store();

        store.add("k".to_string(), "v".to_string(), Ttl::UseDefault).unwrap();

        assert!(store.exists("k"));
        assert_eq!(store.get(&["k"]), Some(vec!["v".to_string()]));
    }

    #[test]
    fn test_add_does_not_overwrite() {
        let mut store = store();

        store.add("k".to_string(), "v".to_string(), Ttl::UseDefault).unwrap();
        let result = store.add("k".to_string(), "v2".to_string(), Ttl::UseDefault);

        assert_eq!(result, Err(CacheError::KeyAlreadyExists("k".to_string())));
        assert_eq!(store.get(&["k"]), Some(vec!["v".to_string()]));
    }

    #[test]
    fn test_set_overwrites() {
        let mut store = store();

        store.set("k".to_string(), "v1".to_string(), Ttl::UseDefault);
        store.set("k".to_string(), "v2".to_string(), Ttl::Never);

        assert_eq!(store.get(&["k"]), Some(vec!["v2".to_string()]));
        assert_eq!(store.len(), 1);
        assert!(store.item("k").unwrap().expires_at.is_none());
    }

    #[test]
    fn test_set_keep_existing_preserves_deadline() {
        let mut store = store();

        store.set("k".to_string(), "v1".to_string(), Ttl::After(MINUTE));
        let deadline = store.item("k").unwrap().expires_at;
        store.set("k".to_string(), "v2".to_string(), Ttl::KeepExisting);

        assert_eq!(store.item("k").unwrap().expires_at, deadline);
        assert_eq!(store.item("k").unwrap().value, "v2");
    }

    #[test]
    fn test_set_keep_existing_on_new_key_uses_default() {
        let mut store = ItemStore::new(None);

        store.set("k".to_string(), 1, Ttl::KeepExisting);

        assert!(store.item("k").unwrap().expires_at.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_update_keep_existing_preserves_deadline() {
        let mut store = store();

        store.add("k".to_string(), "v1".to_string(), Ttl::After(MINUTE)).unwrap();
        let deadline = store.item("k").unwrap().expires_at;

        tokio::time::advance(Duration::from_secs(30)).await;
        store.update("k", "v2".to_string(), Ttl::KeepExisting).unwrap();

        let item = store.item("k").unwrap();
        assert_eq!(item.value, "v2");
        assert_eq!(item.expires_at, deadline);
    }

    #[tokio::test(start_paused = true)]
    async fn test_update_replaces_deadline() {
        let mut store = store();

        store.add("k".to_string(), "v1".to_string(), Ttl::After(MINUTE)).unwrap();
        store.update("k", "v2".to_string(), Ttl::Never).unwrap();

        tokio::time::advance(10 * MINUTE).await;

        assert_eq!(store.get(&["k"]), Some(vec!["v2".to_string()]));
    }

    #[test]
    fn test_update_missing_key() {
        let mut store = store();

        let result = store.update("missing", "v".to_string(), Ttl::UseDefault);

        assert_eq!(result, Err(CacheError::KeyNotFound("missing".to_string())));
        assert!(store.is_empty());
    }

    #[test]
    fn test_get_empty_key_list() {
        let mut store = store();
        store.set("k".to_string(), "v".to_string(), Ttl::Never);

        let keys: [&str; 0] = [];
        assert!(store.get(&keys).is_none());
    }

    #[test]
    fn test_get_keeps_request_order_and_skips_missing() {
        let mut store = store();
        store.set("a".to_string(), "1".to_string(), Ttl::Never);
        store.set("b".to_string(), "2".to_string(), Ttl::Never);

        let values = store.get(&["b", "missing", "a"]).unwrap();

        assert_eq!(values, vec!["2".to_string(), "1".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_forever_item_survives() {
        let mut store = store();
        store.add("k".to_string(), "v".to_string(), Ttl::Never).unwrap();

        tokio::time::advance(Duration::from_secs(365 * 24 * 3600)).await;

        assert_eq!(store.sweep(), 0);
        assert!(store.exists("k"));
        assert_eq!(store.get(&["k"]), Some(vec!["v".to_string()]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_lazy_then_eager_expiry() {
        let mut store = store();
        store.add("k".to_string(), "v".to_string(), Ttl::After(MINUTE)).unwrap();

        tokio::time::advance(MINUTE + Duration::from_millis(1)).await;

        // Filtered on read, still physically present
        assert!(store.get(&["k"]).is_none());
        assert!(store.exists("k"));
        assert_eq!(store.len(), 1);

        assert_eq!(store.sweep(), 1);
        assert!(!store.exists("k"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_default_ttl_applies() {
        let mut store = store();
        store.set("k".to_string(), "v".to_string(), Ttl::UseDefault);

        tokio::time::advance(9 * MINUTE).await;
        assert!(store.get(&["k"]).is_some());

        tokio::time::advance(2 * MINUTE).await;
        assert!(store.get(&["k"]).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_only_removes_expired() {
        let mut store = store();
        store.set("short".to_string(), "1".to_string(), Ttl::After(Duration::from_secs(1)));
        store.set("long".to_string(), "2".to_string(), Ttl::After(Duration::from_secs(10)));
        store.set("forever".to_string(), "3".to_string(), Ttl::Never);

        tokio::time::advance(Duration::from_secs(2)).await;

        assert_eq!(store.sweep(), 1);
        assert_eq!(store.len(), 2);
        assert!(store.exists("long"));
        assert!(store.exists("forever"));
    }

    #[test]
    fn test_delete() {
        let mut store = store();
        store.set("k".to_string(), "v".to_string(), Ttl::UseDefault);

        assert!(store.delete("k"));
        assert!(!store.delete("k"));
        assert!(store.get(&["k"]).is_none());
    }
}
