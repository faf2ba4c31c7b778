//! Expired Entry Reaper
//!
//! Background task that periodically sweeps expired entries out of the cache.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::cache::{lock_store, SharedStore};

/// Spawns the reaper on the current Tokio runtime.
///
/// The task wakes every `period` and removes every expired entry while
/// holding the store lock for a single sweep. Cancellation is checked before
/// each sweep: once `shutdown` is cancelled the task finishes any sweep in
/// progress and exits without starting another.
///
/// If `now + period` is not representable no sweep can be scheduled; the
/// task logs a warning and exits instead of sweeping.
///
/// # Panics
/// Panics if called outside a Tokio runtime or if `period` is zero.
pub fn spawn_reaper(
    store: SharedStore,
    period: Duration,
    shutdown: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        debug!(period_ms = period.as_millis() as u64, "cache reaper started");

        let Some(start) = Instant::now().checked_add(period) else {
            warn!(period_ms = period.as_millis() as u64, "cache reaper period overflows the clock");
            return;
        };
        let mut ticker = interval_at(start, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                _ = ticker.tick() => {}
            }

            let removed = lock_store(&store).cleanup_expired();

            if removed > 0 {
                info!(removed, "cache sweep removed expired entries");
            } else {
                debug!("cache sweep found no expired entries");
            }
        }

        debug!("cache reaper stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use bytes::Bytes;

    use crate::cache::CacheStore;

    fn shared(period: Duration) -> SharedStore {
        Arc::new(Mutex::new(CacheStore::new(period)))
    }

    #[tokio::test]
    async fn test_reaper_removes_expired_entries() {
        let period = Duration::from_millis(50);
        let store = shared(period);
        lock_store(&store).insert("expire_soon".to_string(), Bytes::from_static(b"v"));

        let shutdown = CancellationToken::new();
        let handle = spawn_reaper(store.clone(), period, shutdown.clone());

        // Entry expires after 50ms; a sweep at 100ms or 150ms reclaims it
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(lock_store(&store).len(), 0, "expired entry should be swept");

        shutdown.cancel();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_reaper_preserves_live_entries() {
        let period = Duration::from_millis(50);
        let store = shared(Duration::from_secs(3600));
        lock_store(&store).insert("long_lived".to_string(), Bytes::from_static(b"v"));

        let shutdown = CancellationToken::new();
        let handle = spawn_reaper(store.clone(), period, shutdown.clone());

        tokio::time::sleep(Duration::from_millis(180)).await;

        {
            let mut guard = lock_store(&store);
            assert!(guard.stats().sweeps >= 1);
            assert_eq!(guard.get("long_lived"), Some(Bytes::from_static(b"v")));
        }

        shutdown.cancel();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_reaper_exits_when_period_overflows() {
        let store = shared(Duration::from_secs(1));

        let handle = spawn_reaper(store.clone(), Duration::MAX, CancellationToken::new());

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("reaper should exit promptly")
            .expect("reaper should not panic");
        assert_eq!(lock_store(&store).stats().sweeps, 0);
    }

    #[tokio::test]
    async fn test_reaper_stops_on_cancel() {
        let period = Duration::from_millis(20);
        let store = shared(period);

        let shutdown = CancellationToken::new();
        let handle = spawn_reaper(store.clone(), period, shutdown.clone());

        shutdown.cancel();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("reaper should exit promptly")
            .unwrap();

        let sweeps = lock_store(&store).stats().sweeps;
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(lock_store(&store).stats().sweeps, sweeps, "no sweeps after cancel");
    }
}
