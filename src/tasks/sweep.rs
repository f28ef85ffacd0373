//! Expiry Sweep Task
//!
//! Background task that periodically removes expired items from one cache.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::cache::ItemStore;

/// Spawns a task that sweeps `store` every `interval`.
///
/// The first sweep happens one full interval after spawning. The task exits
/// when `true` is sent on `shutdown` or when the sender is dropped, which
/// happens when the owning cache goes away. A sweep already holding the
/// write lock finishes before the signal is observed.
///
/// # Example
/// ```ignore
/// let (shutdown_tx, shutdown_rx) = watch::channel(false);
/// let handle = spawn_sweep_task("sessions".into(), store, Duration::from_secs(60), shutdown_rx);
/// shutdown_tx.send_replace(true);
/// handle.await?;
/// ```
pub fn spawn_sweep_task<V>(
    cache_name: String,
    store: Arc<RwLock<ItemStore<V>>>,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()>
where
    V: Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!(
            cache = %cache_name,
            "Starting expiry sweep with interval of {:?}", interval
        );

        let Some(first_tick) = Instant::now().checked_add(interval) else {
            // No representable first tick: idle until asked to stop
            warn!(cache = %cache_name, "Sweep interval {:?} is out of range, sweep will never run", interval);
            let _ = shutdown.changed().await;
            info!(cache = %cache_name, "Expiry sweep stopped");
            return;
        };

        let mut ticker = time::interval_at(first_tick, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let removed = store.write().await.sweep();

                    if removed > 0 {
                        info!(cache = %cache_name, "Expiry sweep: removed {} expired items", removed);
                    } else {
                        debug!(cache = %cache_name, "Expiry sweep: no expired items found");
                    }
                }
                // Err means the sender is gone, which is also a stop
                _ = shutdown.changed() => break,
            }
        }

        info!(cache = %cache_name, "Expiry sweep stopped");
    })
}
