//! Cache Store Module
//!
//! The unsynchronized key → entry map. Every method here assumes the caller
//! already holds exclusive access; `TtlCache` and the reaper share it behind
//! a single mutex.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use bytes::Bytes;

use crate::cache::{CacheEntry, CacheStats};

/// Store handle shared between the cache front-end and the reaper task.
pub type SharedStore = Arc<Mutex<CacheStore>>;

/// Locks the shared store.
///
/// A panic while the lock was held cannot leave the map half-updated (every
/// mutation is a single `HashMap` call), so a poisoned lock is recovered.
pub fn lock_store(store: &Mutex<CacheStore>) -> MutexGuard<'_, CacheStore> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}

// == Cache Store ==
/// Expiring map of string keys to byte values.
#[derive(Debug)]
pub struct CacheStore {
    entries: HashMap<String, CacheEntry>,
    stats: CacheStats,
    /// Time-to-live applied to every entry
    interval: Duration,
}

impl CacheStore {
    // == Constructor ==
    pub fn new(interval: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Insert ==
    /// Inserts or overwrites the entry for `key`, resetting its age.
    pub fn insert(&mut self, key: String, value: Bytes) {
        self.insert_at(key, value, Instant::now());
    }

    pub fn insert_at(&mut self, key: String, value: Bytes, now: Instant) {
        self.entries.insert(key, CacheEntry::created_at(value, now));
    }

    // == Get ==
    /// Returns the value for `key` if present and not expired.
    ///
    /// An expired entry is removed as part of the lookup.
    pub fn get(&mut self, key: &str) -> Option<Bytes> {
        self.get_at(key, Instant::now())
    }

    pub fn get_at(&mut self, key: &str, now: Instant) -> Option<Bytes> {
        let Some(entry) = self.entries.get(key) else {
            self.stats.record_miss();
            return None;
        };

        if entry.is_expired_at(self.interval, now) {
            self.entries.remove(key);
                self.stats.record_lazy_eviction();
            return None;
        }

        let value = entry.value.clone();
        self.stats.record_hit();
        Some(value)
    }

    // == Cleanup Expired ==
    /// Removes every expired entry and returns how many were dropped.
    pub fn cleanup_expired(&mut self) -> usize {
        self.cleanup_expired_at(Instant::now())
    }

    pub fn cleanup_expired_at(&mut self, now: Instant) -> usize {
        let interval = self.interval;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(interval, now));
        let removed = before - self.entries.len();

        self.stats.record_sweep(removed);
        removed
    }

    // == Stats ==
    pub fn stats(&self) -> CacheStats {
        self.stats.clone()
    }

    /// Number of physically stored entries, including expired ones that have
    /// not been reclaimed yet.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
