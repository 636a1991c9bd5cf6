//! Cache Store Module
//!
//! Maps request fingerprints to computed feeds with lazy TTL expiration.

use std::collections::HashMap;
use std::sync::Arc;

use crate::cache::{CacheEntry, CacheStats};
use crate::clock::Clock;
use crate::models::Post;

// == Feed Cache ==
/// Fingerprint-keyed feed cache.
///
/// No capacity bound: entries live until they expire or are overwritten.
/// Expired entries are removed the first time a lookup sees them, or by
/// [`FeedCache::cleanup_expired`] when a sweep task is running.
#[derive(Debug)]
pub struct FeedCache {
    /// Fingerprint -> entry
    entries: HashMap<String, CacheEntry>,
    stats: CacheStats,
    /// TTL in seconds applied when `set` is called without one
    default_ttl: u64,
    clock: Arc<dyn Clock>,
}

impl FeedCache {
    // == Constructor ==
    /// Creates a new cache reading time from `clock`.
    pub fn new(default_ttl: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            default_ttl,
            clock,
        }
    }

    // == Get ==
    /// Returns the items stored under `key` if present and not expired.
    ///
    /// An expired entry is removed and reported as absent.
    pub fn get(&mut self, key: &str) -> Option<Vec<Post>> {
        let now = self.clock.now();

        let expired = match self.entries.get(key) {
            Some(entry) if !entry.is_expired(now) => {
                self.stats.record_hit();
                return Some(entry.items.clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            self.entries.remove(key);
            self.stats.record_expirations(1);
            self.stats.set_total_entries(self.entries.len());
        }
        self.stats.record_miss();
        None
    }

    // == Set ==
    /// Stores `items` under `key`, replacing any existing entry.
    ///
    /// # Arguments
    /// * `ttl` - TTL in seconds (uses default_ttl if None)
    pub fn set(&mut self, key: String, items: Vec<Post>, ttl: Option<u64>) {
        let ttl = ttl.unwrap_or(self.default_ttl);
        let entry = CacheEntry::new(items, ttl, self.clock.now());
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = self.clock.now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));

        let removed = before - self.entries.len();
        self.stats.record_expirations(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn default_ttl(&self) -> u64 {
        self.default_ttl
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
