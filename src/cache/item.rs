//! Cache Item Module
//!
//! Defines the storage cell for a single value with an optional deadline.

use tokio::time::Instant;

// == Item ==
/// An opaque value and the instant after which it is no longer served.
#[derive(Debug, Clone)]
pub struct Item<V> {
    /// The stored value
    pub value: V,
    /// Expiration deadline, None = no expiration
    pub expires_at: Option<Instant>,
}

impl<V> Item<V> {
    // == Constructor ==
    /// Creates an item with an already-resolved deadline.
    pub fn new(value: V, expires_at: Option<Instant>) -> Self {
        Self { value, expires_at }
    }

    // == Is Expired ==
    /// Checks expiry against a given instant.
    ///
    /// An item is live up to and including its deadline; it expires once
    /// `now` is strictly past it. Items without a deadline never expire.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires) => now > expires,
            None => false,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_item_without_deadline_never_expires() {
        let item = Item::new("token", None);
        let now = Instant::now();

        assert_eq!(item.value, "token");
        assert!(!item.is_expired_at(now));
        assert!(!item.is_expired_at(now + Duration::from_secs(365 * 24 * 3600)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_item_expiration() {
        let item = Item::new("token", Some(Instant::now() + Duration::from_secs(1)));
        assert!(!item.is_expired_at(Instant::now()));

        tokio::time::advance(Duration::from_millis(1100)).await;

        assert!(item.is_expired_at(Instant::now()));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = Instant::now();
        let item = Item::new("test", Some(now));

        assert!(!item.is_expired_at(now), "Item is still live at its deadline");
        assert!(item.is_expired_at(now + Duration::from_nanos(1)));
    }
}
