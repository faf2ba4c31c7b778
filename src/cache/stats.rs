//! Cache Statistics Module
//!
//! Tracks hits, misses and expired-entry reclamation.

// == Cache Stats ==
/// Counters describing how the cache has been used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups that returned a live entry
    pub hits: u64,
    /// Lookups for absent or expired keys
    pub misses: u64,
    /// Expired entries removed by a lookup
    pub lazy_evictions: u64,
    /// Expired entries removed by the background sweep
    pub swept: u64,
    /// Completed background sweeps
    pub sweeps: u64,
}

impl CacheStats {
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Counts a miss caused by an entry that had expired.
    pub fn record_lazy_eviction(&mut self) {
        self.misses += 1;
        self.lazy_evictions += 1;
    }

    /// Counts one finished sweep and the entries it removed.
    pub fn record_sweep(&mut self, removed: usize) {
        self.sweeps += 1;
        self.swept += removed as u64;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        assert_eq!(stats, CacheStats::default());
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.hit_rate(), 0.75);
    }

    #[test]
    fn test_lazy_eviction_counts_as_miss() {
        let mut stats = CacheStats::new();
        stats.record_lazy_eviction();

        assert_eq!(stats.misses, 1);
        assert_eq!(stats.lazy_evictions, 1);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_record_sweep() {
        let mut stats = CacheStats::new();
        stats.record_sweep(0);
        stats.record_sweep(3);

        assert_eq!(stats.sweeps, 2);
        assert_eq!(stats.swept, 3);
    }
}
