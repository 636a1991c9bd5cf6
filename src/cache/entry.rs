//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use chrono::{DateTime, Duration, Utc};

use crate::models::Post;

/// Longest TTL honoured; larger requests are capped.
pub const MAX_TTL_SECONDS: u64 = i32::MAX as u64;

// == Cache Entry ==
/// A computed feed together with its absolute expiry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored feed items
    pub items: Vec<Post>,
    /// Insertion time plus TTL
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl_seconds` after `now`.
    pub fn new(items: Vec<Post>, ttl_seconds: u64, now: DateTime<Utc>) -> Self {
        let ttl = Duration::seconds(ttl_seconds.min(MAX_TTL_SECONDS) as i64);
        let expires_at = now
            .checked_add_signed(ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self { items, expires_at }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is still valid at the exact instant of its expiry and expires
    /// strictly after it.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}
