//! Per-tag fan-out
//!
//! One resolve+fetch pipeline per hashtag, run concurrently. A failing tag
//! contributes nothing; only missing credentials fail the whole call.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{info, warn};

use crate::error::{FeedError, Result};
use crate::feed::mock::per_tag_limit;
use crate::models::RawPost;

use super::MediaSource;

/// Fetches recent media for every tag, each record tagged with its origin.
///
/// Results are concatenated in `hashtags` order, not completion order.
/// Credentials are checked once before any request is made.
pub async fn fetch_by_hashtags(
    source: Arc<dyn MediaSource>,
    hashtags: &[String],
    limit: usize,
) -> Result<Vec<RawPost>> {
    source.ensure_credentials()?;

    let per_tag = per_tag_limit(limit, hashtags.len());
    if per_tag == 0 {
        return Ok(Vec::new());
    }

    // Spawned pipelines run to completion even if the caller goes away
    let handles = hashtags.iter().cloned().map(|tag| {
        let source = source.clone();
        tokio::spawn(async move {
            let outcome = fetch_tag(source.as_ref(), &tag, per_tag).await;
            (tag, outcome)
        })
    });

    let mut posts = Vec::new();
    for joined in join_all(handles).await {
        let (tag, outcome) = joined
            .map_err(|e| FeedError::Unexpected(format!("tag pipeline aborted: {}", e)))?;
        match outcome {
            Ok(items) => {
                info!(tag = %tag, count = items.len(), "Fetched posts for tag");
                posts.extend(items.into_iter().map(|raw| raw.tagged(&tag)));
            }
            Err(e) => warn!(tag = %tag, error = %e, "Upstream fetch failed for tag"),
        }
    }

    Ok(posts)
}

async fn fetch_tag(source: &dyn MediaSource, tag: &str, limit: usize) -> Result<Vec<RawPost>> {
    let id = source.resolve_hashtag_id(tag).await?;
    source.fetch_recent_media(&id, limit).await
}
