//! Cache Module
//!
//! In-memory response cache with a fixed time-to-live and periodic reclamation.
//!
//! There is no size bound: memory is reclaimed by age only, so the number of
//! entries is limited by how many distinct keys are written per interval.

mod entry;
mod stats;
mod store;
mod ttl;


pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::{lock_store, CacheStore, SharedStore};
pub use ttl::TtlCache;
