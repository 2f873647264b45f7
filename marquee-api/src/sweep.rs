//! Background removal of expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::debug;

use marquee_cache::TtlCache;

const MIN_SWEEP_PERIOD: Duration = Duration::from_millis(10);

/// Spawns a task that drops expired entries once per `period`.
///
/// Expired entries are already invisible to readers; the sweep only
/// reclaims their memory.
pub fn spawn_cache_sweeper(cache: Arc<TtlCache>, period: Duration) -> JoinHandle<()> {
    let period = period.max(MIN_SWEEP_PERIOD);

    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let removed = cache.cleanup_expired();
            if removed > 0 {
                debug!(removed, remaining = cache.len(), "Swept expired cache entries");
            }
        }
    })
}
