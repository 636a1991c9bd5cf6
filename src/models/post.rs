//! Post records
//!
//! `RawPost` is whatever the upstream provider (or a test fixture) hands us,
//! with every field optional. `Post` is the canonical record served to callers.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Canonical post record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Opaque identifier, unique within one response
    pub id: String,
    /// Link to the post, empty when the upstream omitted it
    pub permalink: String,
    /// Display hint only
    pub media_url: Option<String>,
    pub caption: String,
    pub username: String,
    /// UTC RFC 3339 timestamp with millisecond precision
    pub timestamp: String,
    /// Tags under which this post was discovered
    pub hashtags: Vec<String>,
}

impl Post {
    /// Parses the canonical timestamp back into a `DateTime`.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|ts| ts.with_timezone(&Utc))
    }
}

/// Upstream-shaped post record.
///
/// Mirrors the field set requested from the media listing endpoint; unknown
/// fields are ignored. Numeric or boolean values in string fields are kept
/// as their text; arrays, objects and nulls read as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawPost {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub permalink: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub media_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub thumbnail_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub caption: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub media_type: Option<String>,
    #[serde(default)]
    pub hashtags: Option<Vec<String>>,
}

impl RawPost {
    /// Attaches the tag under which this record was discovered.
    pub fn tagged(mut self, tag: &str) -> Self {
        self.hashtags = Some(vec![tag.to_string()]);
        self
    }
}

/// Reads any JSON scalar as text.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

/// Formats a timestamp in the canonical `2024-01-01T00:00:00.000Z` form.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(format_timestamp(ts), "2024-03-09T07:05:01.000Z");
    }

    #[test]
    fn test_published_at_round_trip() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        let post = Post {
            id: "1".to_string(),
            permalink: String::new(),
            media_url: None,
            caption: String::new(),
            username: String::new(),
            timestamp: format_timestamp(ts),
            hashtags: vec![],
        };
        assert_eq!(post.published_at(), Some(ts));
    }

    #[test]
    fn test_raw_post_ignores_unknown_fields() {
        let json = r#"{"id":"17","caption":"hi","like_count":4,"media_type":"IMAGE"}"#;
        let raw: RawPost = serde_json::from_str(json).unwrap();
        assert_eq!(raw.id.as_deref(), Some("17"));
        assert_eq!(raw.caption.as_deref(), Some("hi"));
        assert!(raw.timestamp.is_none());
    }

    #[test]
    fn test_raw_post_tolerates_non_string_scalars() {
        let json = r#"{"id":17900,"caption":null,"timestamp":{"bad":1},"username":true}"#;
        let raw: RawPost = serde_json::from_str(json).unwrap();
        assert_eq!(raw.id.as_deref(), Some("17900"));
        assert!(raw.caption.is_none());
        assert!(raw.timestamp.is_none());
        assert_eq!(raw.username.as_deref(), Some("true"));
    }

    #[test]
    fn test_post_serializes_missing_media_as_null() {
        let post = Post {
            id: "1".to_string(),
            permalink: String::new(),
            media_url: None,
            caption: String::new(),
            username: String::new(),
            timestamp: "2024-01-01T00:00:00.000Z".to_string(),
            hashtags: vec!["nyc".to_string()],
        };
        let json = serde_json::to_value(&post).unwrap();
        assert!(json["media_url"].is_null());
        assert_eq!(json["hashtags"][0], "nyc");
    }
}
