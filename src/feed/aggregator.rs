//! Aggregator
//!
//! Picks the post source for a mode, then merges, sorts newest-first and
//! truncates to the requested limit.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::clock::Clock;
use crate::error::Result;
use crate::feed::mock::generate_mock;
use crate::feed::normalize::normalize;
use crate::models::{Mode, Post};
use crate::upstream::{fetch_by_hashtags, MediaSource};

/// Builds a feed for a set of hashtags.
#[async_trait]
pub trait PostAggregator: Send + Sync {
    async fn aggregate(&self, hashtags: &[String], limit: usize, mode: Mode) -> Result<Vec<Post>>;
}

/// Aggregates mock posts or upstream posts fetched per tag.
pub struct HashtagAggregator {
    source: Arc<dyn MediaSource>,
    clock: Arc<dyn Clock>,
}

impl HashtagAggregator {
    pub fn new(source: Arc<dyn MediaSource>, clock: Arc<dyn Clock>) -> Self {
        Self { source, clock }
    }
}

#[async_trait]
impl PostAggregator for HashtagAggregator {
    async fn aggregate(&self, hashtags: &[String], limit: usize, mode: Mode) -> Result<Vec<Post>> {
        let mut posts = match mode {
            Mode::Mock => generate_mock(hashtags, limit, self.clock.now()),
            Mode::Live => {
                let raw = fetch_by_hashtags(self.source.clone(), hashtags, limit).await?;
                // Missing timestamps default to normalization time, not request time
                let now = self.clock.now();
                merge_duplicates(raw.into_iter().map(|r| normalize(r, now)))
            }
        };

        sort_newest_first(&mut posts);
        posts.truncate(limit);
        Ok(posts)
    }
}

/// Collapses posts sharing a non-empty id into the first occurrence,
/// appending each later origin tag to its `hashtags`.
pub fn merge_duplicates(posts: impl IntoIterator<Item = Post>) -> Vec<Post> {
    let mut merged: Vec<Post> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for post in posts {
        if post.id.is_empty() {
            merged.push(post);
            continue;
        }
        match seen.get(&post.id) {
            Some(&idx) => {
                let first = &mut merged[idx];
                for tag in post.hashtags {
                    if !first.hashtags.contains(&tag) {
                        first.hashtags.push(tag);
                    }
                }
            }
            None => {
                seen.insert(post.id.clone(), merged.len());
                merged.push(post);
            }
        }
    }
    merged
}

/// Stable sort by timestamp, most recent first.
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by_cached_key(|p| Reverse(p.published_at()));
}
