//! TTL Cache
//!
//! Thread-safe front-end over [`CacheStore`] that owns the background reaper.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use bytes::Bytes;
use tokio::runtime::Handle;
use tokio::time::Instant;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::cache::{lock_store, CacheStats, CacheStore, SharedStore};
use crate::error::CacheError;
use crate::tasks::spawn_reaper;

// == TTL Cache ==
/// Expiring key → bytes cache safe for concurrent use.
///
/// Every entry lives for the same fixed interval. Expired entries are dropped
/// when a lookup finds them and by a reaper task that sweeps the whole store
/// once per interval. Share between tasks or threads with `Arc<TtlCache>`.
///
/// # Example
/// ```no_run
/// # async fn demo() -> Result<(), pokedex::error::CacheError> {
/// use std::time::Duration;
/// use bytes::Bytes;
/// use pokedex::cache::TtlCache;
///
/// let cache = TtlCache::new(Duration::from_secs(5))?;
/// cache.add("https://example.com/a", Bytes::from_static(b"body"));
/// assert_eq!(cache.get("https://example.com/a"), Some(Bytes::from_static(b"body")));
/// cache.shutdown().await;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TtlCache {
    store: SharedStore,
    interval: Duration,
    shutdown: CancellationToken,
    reaper: Option<JoinHandle<()>>,
}

impl TtlCache {
    // == Constructor ==
    /// Creates a cache whose entries live for `interval` and starts its reaper.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    /// - [`CacheError::InvalidInterval`] if `interval` is zero
    /// - [`CacheError::IntervalTooLarge`] if no sweep deadline can be scheduled
    ///   one `interval` from now
    /// - [`CacheError::NoRuntime`] if no Tokio runtime is running
    pub fn new(interval: Duration) -> Result<Self, CacheError> {
        if interval.is_zero() {
            return Err(CacheError::InvalidInterval);
        }
        if Instant::now().checked_add(interval).is_none() {
            return Err(CacheError::IntervalTooLarge);
        }
        if Handle::try_current().is_err() {
            return Err(CacheError::NoRuntime);
        }

        let store: SharedStore = Arc::new(Mutex::new(CacheStore::new(interval)));
        let shutdown = CancellationToken::new();
        let reaper = spawn_reaper(Arc::clone(&store), interval, shutdown.clone());

        debug!(interval_ms = interval.as_millis() as u64, "cache created");

        Ok(Self {
            store,
            interval,
            shutdown,
            reaper: Some(reaper),
        })
    }

    // == Add ==
    /// Stores `value` under `key`, replacing any previous entry and resetting
    /// its age.
    pub fn add(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        lock_store(&self.store).insert(key.into(), value.into());
    }

    // == Get ==
    /// Returns the value for `key` if it exists and has not expired.
    ///
    /// Finding an expired entry removes it and reports a miss.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        lock_store(&self.store).get(key)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of physically stored entries, expired or not.
    pub fn len(&self) -> usize {
        lock_store(&self.store).len()
    }

    pub fn is_empty(&self) -> bool {
        lock_store(&self.store).is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        lock_store(&self.store).stats()
    }

    /// Returns true while the reaper task is still alive.
    pub fn is_reaping(&self) -> bool {
        self.reaper.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    // == Shutdown ==
    /// Stops the reaper and waits for it to exit.
    ///
    /// A sweep already in progress completes; no sweep starts afterwards.
    pub async fn shutdown(mut self) {
        self.shutdown.cancel();
        if let Some(reaper) = self.reaper.take() {
            if let Err(err) = reaper.await {
                warn!(error = %err, "cache reaper did not exit cleanly");
            }
        }
    }
}

impl Drop for TtlCache {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
