//! Cache Module
//!
//! Short-lived in-memory cache of computed feeds keyed by request fingerprint.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::{CacheEntry, MAX_TTL_SECONDS};
pub use stats::CacheStats;
pub use store::FeedCache;
