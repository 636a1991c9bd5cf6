//! Upstream Module
//!
//! Two-step hashtag lookup against the media provider: resolve a tag to a
//! provider id, then list recent media for that id. [`fetch_by_hashtags`]
//! runs one such pipeline per tag and absorbs per-tag failures.

mod fanout;
mod graph;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::RawPost;

pub use fanout::fetch_by_hashtags;
pub use graph::{GraphClient, MEDIA_FIELDS};

/// Trait boundary for the upstream provider.
///
/// Production wires in [`GraphClient`]; tests use in-memory stubs.
#[async_trait]
pub trait MediaSource: Send + Sync {
    /// Fails with `FeedError::Configuration` when credentials are missing.
    fn ensure_credentials(&self) -> Result<()>;

    /// Resolves a hashtag to the provider's identifier.
    async fn resolve_hashtag_id(&self, tag: &str) -> Result<String>;

    /// Lists at most `limit` recent media records for a resolved hashtag.
    async fn fetch_recent_media(&self, hashtag_id: &str, limit: usize) -> Result<Vec<RawPost>>;
}
