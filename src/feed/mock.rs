//! Mock Generator
//!
//! Deterministic synthetic posts for demo mode. No network or file I/O.

use chrono::{DateTime, Duration, Utc};
use reqwest::Url;

use crate::models::{format_timestamp, Post};

const PLACEHOLDER_IMAGE: &str = "https://placehold.co/800x600";

/// Posts requested per tag when `limit` is spread over `tags` tags.
pub fn per_tag_limit(limit: usize, tags: usize) -> usize {
    limit.div_ceil(tags.max(1))
}

/// Generates `per_tag_limit(limit, hashtags.len())` posts per tag, truncated to `limit`.
///
/// Post `n` (counting from 1 across the whole run, not per tag) is stamped
/// `n` hours before `now`, so timestamps strictly decrease in generation order.
pub fn generate_mock(hashtags: &[String], limit: usize, now: DateTime<Utc>) -> Vec<Post> {
    let per_tag = per_tag_limit(limit, hashtags.len());

    hashtags
        .iter()
        .flat_map(|tag| std::iter::repeat(tag).take(per_tag))
        .take(limit)
        .enumerate()
        .map(|(i, tag)| mock_post(tag, i as i64 + 1, now))
        .collect()
}

fn mock_post(tag: &str, counter: i64, now: DateTime<Utc>) -> Post {
    let id = format!("mock-{}-{}", tag, counter);
    Post {
        permalink: format!("https://instagram.com/p/{}", id),
        media_url: Url::parse_with_params(PLACEHOLDER_IMAGE, &[("text", tag)])
            .ok()
            .map(String::from),
        caption: format!("Mock post for #{} - kid-friendly example", tag),
        username: format!("{}_demo", tag),
        timestamp: format_timestamp(now - Duration::hours(counter)),
        hashtags: vec![tag.to_string()],
        id,
    }
}
