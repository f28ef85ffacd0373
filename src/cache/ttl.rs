//! TTL Module
//!
//! Explicit expiry choices for writes and the per-cache configuration they
//! resolve against.

use std::time::Duration;

use tokio::time::Instant;

// == Ttl ==
/// How long a written item should live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ttl {
    /// Expire this long after the write. A zero duration never expires.
    After(Duration),
    /// Never expire.
    Never,
    /// Use the cache's configured default TTL.
    UseDefault,
    /// Keep the expiry already stored for the key.
    ///
    /// Only meaningful for `update` and `set` on an existing key; anywhere
    /// else it behaves like `UseDefault`.
    KeepExisting,
}

impl Ttl {
    /// Converts a whole number of seconds, where `0` means never expire.
    pub fn from_secs(secs: u64) -> Self {
        if secs == 0 {
            Ttl::Never
        } else {
            Ttl::After(Duration::from_secs(secs))
        }
    }

    /// Resolves to an absolute deadline, `None` meaning the item never expires.
    ///
    /// `KeepExisting` has nothing to keep at this point and falls back to the
    /// default. A TTL too large to represent as an instant never expires.
    pub fn resolve(self, default_ttl: Option<Duration>, now: Instant) -> Option<Instant> {
        let ttl = match self {
            Ttl::After(duration) => Some(duration),
            Ttl::Never => None,
            Ttl::UseDefault | Ttl::KeepExisting => default_ttl,
        };

        ttl.filter(|d| !d.is_zero()).and_then(|d| now.checked_add(d))
    }
}

// == Cache Config ==
/// Settings fixed at cache construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheConfig {
    /// TTL applied for `Ttl::UseDefault`, `None` = never expire
    pub default_ttl: Option<Duration>,
    /// Period of the background sweep, `None` = no sweep task
    pub sweep_interval: Option<Duration>,
}

impl CacheConfig {
    /// Creates a config, normalising zero durations to "never" / "disabled".
    pub fn new(default_ttl: Option<Duration>, sweep_interval: Option<Duration>) -> Self {
        Self {
            default_ttl: default_ttl.filter(|d| !d.is_zero()),
            sweep_interval: sweep_interval.filter(|d| !d.is_zero()),
        }
    }

    /// Builds a config from wire integers.
    ///
    /// `default_ttl_secs == 0` never expires; `sweep_interval_secs <= 0`
    /// disables the sweep.
    pub fn from_secs(default_ttl_secs: u64, sweep_interval_secs: i64) -> Self {
        let sweep_interval = u64::try_from(sweep_interval_secs)
            .ok()
            .map(Duration::from_secs);
        Self::new(Some(Duration::from_secs(default_ttl_secs)), sweep_interval)
    }
}
