//! Cache Entry Module
//!
//! Defines a single cached response body and the expiry predicate shared by
//! lazy eviction and the background sweep.

use std::time::{Duration, Instant};

use bytes::Bytes;

// == Cache Entry ==
/// A stored response body together with the moment it was written.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored bytes
    pub value: Bytes,
    /// Creation timestamp
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry stamped with the current instant.
    pub fn new(value: Bytes) -> Self {
        Self::created_at(value, Instant::now())
    }

    /// Creates an entry with an explicit creation instant.
    pub fn created_at(value: Bytes, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    // == Age ==
    /// Returns how long the entry has existed as of `now`.
    ///
    /// Saturates to zero if `now` precedes the creation instant.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived `interval` as of `now`.
    ///
    /// An entry whose age equals the interval is still live; it expires only
    /// once the age strictly exceeds it.
    pub fn is_expired_at(&self, interval: Duration, now: Instant) -> bool {
        self.age_at(now) > interval
    }
}
