//! Feed Service
//!
//! Entry point for feed requests: parse parameters, consult the cache,
//! aggregate on a miss and cache the result.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, error};

use crate::cache::FeedCache;
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::error::Result;
use crate::feed::aggregator::{HashtagAggregator, PostAggregator};
use crate::models::{FeedParams, FeedQuery, FeedResponse};
use crate::upstream::GraphClient;

pub struct FeedService {
    cache: Arc<RwLock<FeedCache>>,
    aggregator: Arc<dyn PostAggregator>,
    /// Per-service TTL override; `None` uses the cache default
    cache_ttl: Option<u64>,
}

impl FeedService {
    pub fn new(cache: Arc<RwLock<FeedCache>>, aggregator: Arc<dyn PostAggregator>) -> Self {
        Self {
            cache,
            aggregator,
            cache_ttl: None,
        }
    }

    /// Overrides the TTL applied to every cache write.
    pub fn with_ttl(mut self, ttl_seconds: u64) -> Self {
        self.cache_ttl = Some(ttl_seconds);
        self
    }

    /// Wires the Graph client, aggregator and cache from configuration.
    pub fn from_config(config: &Config) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let source = Arc::new(GraphClient::from_config(config));
        let aggregator = Arc::new(HashtagAggregator::new(source, clock.clone()));
        let cache = FeedCache::new(config.cache_ttl, clock);
        Self::new(Arc::new(RwLock::new(cache)), aggregator)
    }

    /// Shared handle on the cache, for stats and the sweep task.
    pub fn cache(&self) -> Arc<RwLock<FeedCache>> {
        self.cache.clone()
    }

    /// Serves a feed for raw query parameters.
    pub async fn get_feed(&self, query: &FeedQuery) -> Result<FeedResponse> {
        let params = FeedParams::from_query(query);
        self.get_feed_for(&params).await
    }

    /// Serves a feed for already parsed parameters.
    ///
    /// Cached items are returned as stored. Failures are not cached and no
    /// stale data is substituted.
    pub async fn get_feed_for(&self, params: &FeedParams) -> Result<FeedResponse> {
        let key = params.fingerprint();

        let cached = self.cache.write().await.get(&key);
        if let Some(items) = cached {
            debug!(key = %key, count = items.len(), "Feed cache hit");
            return Ok(FeedResponse::new(items));
        }
        debug!(key = %key, "Feed cache miss");

        let items = self
            .aggregator
            .aggregate(&params.hashtags, params.limit, params.mode)
            .await
            .map_err(|e| {
                error!(key = %key, error = %e, "Feed aggregation failed");
                e
            })?;

        self.cache
            .write()
            .await
            .set(key, items.clone(), self.cache_ttl);
        Ok(FeedResponse::new(items))
    }
}
