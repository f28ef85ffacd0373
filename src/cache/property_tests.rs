//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the store against a plain `HashMap` model.

use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{ItemStore, Ttl};
use crate::error::CacheError;

// == Strategies ==
/// Generates keys from a small alphabet so operations collide often
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-e]{1,2}".prop_map(|s| s)
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,32}".prop_map(|s| s)
}

/// TTLs long enough that nothing expires during a test case
fn ttl_strategy() -> impl Strategy<Value = Ttl> {
    prop_oneof![
        Just(Ttl::Never),
        Just(Ttl::UseDefault),
        Just(Ttl::KeepExisting),
        (3600u64..86_400).prop_map(|secs| Ttl::After(Duration::from_secs(secs))),
    ]
}

#[derive(Debug, Clone)]
enum CacheOp {
    Add { key: String, value: String, ttl: Ttl },
    Set { key: String, value: String, ttl: Ttl },
    Update { key: String, value: String, ttl: Ttl },
    Delete { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy(), ttl_strategy())
            .prop_map(|(key, value, ttl)| CacheOp::Add { key, value, ttl }),
        (key_strategy(), value_strategy(), ttl_strategy())
            .prop_map(|(key, value, ttl)| CacheOp::Set { key, value, ttl }),
        (key_strategy(), value_strategy(), ttl_strategy())
            .prop_map(|(key, value, ttl)| CacheOp::Update { key, value, ttl }),
        key_strategy().prop_map(|key| CacheOp::Delete { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Every mutation agrees with a HashMap model: add refuses existing keys,
    // update refuses missing keys, set and delete always apply.
    #[test]
    fn prop_store_matches_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut store = ItemStore::new(Some(Duration::from_secs(3600)));
        let mut model: HashMap<String, String> = HashMap::new();

        for op in ops {
            match op {
                CacheOp::Add { key, value, ttl } => {
                    let result = store.add(key.clone(), value.clone(), ttl);
                    if model.contains_key(&key) {
                        prop_assert_eq!(result, Err(CacheError::KeyAlreadyExists(key)));
                    } else {
                        prop_assert!(result.is_ok());
                        model.insert(key, value);
                    }
                }
                CacheOp::Set { key, value, ttl } => {
                    store.set(key.clone(), value.clone(), ttl);
                    model.insert(key, value);
                }
                CacheOp::Update { key, value, ttl } => {
                    let result = store.update(&key, value.clone(), ttl);
                    if model.contains_key(&key) {
                        prop_assert!(result.is_ok());
                        model.insert(key, value);
                    } else {
                        prop_assert_eq!(result, Err(CacheError::KeyNotFound(key)));
                    }
                }
                CacheOp::Delete { key } => {
                    prop_assert_eq!(store.delete(&key), model.remove(&key).is_some());
                }
            }
        }

        prop_assert_eq!(store.len(), model.len());
        for (key, value) in &model {
            prop_assert!(store.exists(key));
            prop_assert_eq!(store.get(&[key]), Some(vec![value.clone()]));
        }
    }

    // A multi-key get returns exactly the stored values, in request order,
    // and reports nothing found only when no key matched.
    #[test]
    fn prop_get_preserves_request_order(
        stored in prop::collection::hash_map(key_strategy(), value_strategy(), 0..10),
        requested in prop::collection::vec(key_strategy(), 0..10)
    ) {
        let mut store = ItemStore::new(None);
        for (key, value) in &stored {
            store.set(key.clone(), value.clone(), Ttl::UseDefault);
        }

        let expected: Vec<String> = requested
            .iter()
            .filter_map(|key| stored.get(key).cloned())
            .collect();

        match store.get(&requested) {
            Some(values) => prop_assert_eq!(values, expected),
            None => prop_assert!(expected.is_empty()),
        }
    }

    // Update with KeepExisting never moves a deadline
    #[test]
    fn prop_update_keep_existing_keeps_deadline(
        key in key_strategy(),
        values in prop::collection::vec(value_strategy(), 1..10),
        ttl in ttl_strategy()
    ) {
        let mut store = ItemStore::new(Some(Duration::from_secs(600)));
        store.set(key.clone(), String::new(), ttl);
        let deadline = store.item(&key).map(|item| item.expires_at);

        for value in values {
            store.update(&key, value, Ttl::KeepExisting).unwrap();
            prop_assert_eq!(store.item(&key).map(|item| item.expires_at), deadline);
        }
    }
}
