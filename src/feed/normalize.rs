//! Normalizer
//!
//! Maps upstream-shaped records onto the canonical [`Post`] schema. Never
//! fails: missing or unparsable fields degrade to defaults.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::models::{format_timestamp, Post, RawPost};

/// Normalizes one raw record.
///
/// `now` stands in for a missing or unparsable timestamp.
pub fn normalize(raw: RawPost, now: DateTime<Utc>) -> Post {
    let timestamp = raw
        .timestamp
        .as_deref()
        .and_then(parse_timestamp)
        .unwrap_or(now);

    Post {
        id: raw.id.unwrap_or_default(),
        permalink: raw.permalink.unwrap_or_default(),
        media_url: non_empty(raw.media_url).or_else(|| non_empty(raw.thumbnail_url)),
        caption: raw.caption.unwrap_or_default(),
        username: non_empty(raw.username)
            .or_else(|| non_empty(raw.author))
            .unwrap_or_default(),
        timestamp: format_timestamp(timestamp),
        hashtags: raw.hashtags.unwrap_or_default(),
    }
}

/// Parses the timestamp shapes seen upstream.
///
/// Accepts RFC 3339, ISO 8601 with a `+0000` style offset, offset-less
/// date-times (taken as UTC) and bare dates (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%z", "%Y-%m-%dT%H:%M:%S%.f%z"] {
        if let Ok(ts) = DateTime::parse_from_str(raw, fmt) {
            return Some(ts.with_timezone(&Utc));
        }
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(ts.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ts| ts.and_utc())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
