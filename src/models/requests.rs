//! Request parameters for the feed endpoint
//!
//! `FeedQuery` is the raw query string; `FeedParams` is the parsed and
//! clamped form every downstream component works with.

use std::fmt;

use serde::Deserialize;

/// Tags used when the caller supplies none.
pub const DEFAULT_HASHTAGS: &str = "family,kids,nyc";

/// Limit used when the caller supplies none (or garbage).
pub const DEFAULT_LIMIT: usize = 25;

/// Upper bound on the number of items returned.
pub const MAX_LIMIT: usize = 100;

/// Raw query parameters for `GET /api/feed`.
///
/// Every field is kept as a string so malformed values degrade to defaults
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedQuery {
    #[serde(default)]
    pub hashtags: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
}

impl FeedQuery {
    pub fn new(hashtags: &str, limit: &str, mode: &str) -> Self {
        Self {
            hashtags: Some(hashtags.to_string()),
            limit: Some(limit.to_string()),
            mode: Some(mode.to_string()),
        }
    }
}

/// Where posts come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Deterministic synthetic posts, no network
    #[default]
    Mock,
    /// Upstream provider
    Live,
}

impl Mode {
    /// Parses a mode case-insensitively. Unknown values fall back to mock.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "instagram" | "live" => Mode::Live,
            _ => Mode::Mock,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Mock => "mock",
            Mode::Live => "instagram",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Effective request parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedParams {
    /// Trimmed, de-duplicated tags in request order; never empty
    pub hashtags: Vec<String>,
    /// Clamped to `0..=MAX_LIMIT`
    pub limit: usize,
    pub mode: Mode,
}

impl FeedParams {
    /// Parses and clamps raw query parameters.
    pub fn from_query(query: &FeedQuery) -> Self {
        Self {
            hashtags: parse_hashtags(query.hashtags.as_deref()),
            limit: parse_limit(query.limit.as_deref()),
            mode: query.mode.as_deref().map(Mode::parse).unwrap_or_default(),
        }
    }

    /// Cache key for these parameters.
    ///
    /// Built from the effective values only, so requests that differ just in
    /// whitespace or mode casing share a key.
    pub fn fingerprint(&self) -> String {
        format!(
            "feed:{}:{}:{}",
            self.mode,
            self.hashtags.join(","),
            self.limit
        )
    }
}

fn split_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

fn parse_hashtags(raw: Option<&str>) -> Vec<String> {
    let tags = raw.map(split_tags).unwrap_or_default();
    if tags.is_empty() {
        split_tags(DEFAULT_HASHTAGS)
    } else {
        tags
    }
}

fn parse_limit(raw: Option<&str>) -> usize {
    let requested = raw
        .and_then(leading_integer)
        .unwrap_or(DEFAULT_LIMIT as i64);
    requested.clamp(0, MAX_LIMIT as i64) as usize
}

/// Reads the signed integer prefix of `raw`, so `"12abc"` is 12 and `"4.5"`
/// is 4. Digit runs too long for `i64` saturate. `None` if there are no digits.
fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_absent() {
        let params = FeedParams::from_query(&FeedQuery::default());
        assert_eq!(params.hashtags, vec!["family", "kids", "nyc"]);
        assert_eq!(params.limit, DEFAULT_LIMIT);
        assert_eq!(params.mode, Mode::Mock);
    }

    #[test]
    fn test_hashtags_trimmed_and_empty_dropped() {
        let params = FeedParams::from_query(&FeedQuery::new("  a, b ,,c ,", "10", "mock"));
        assert_eq!(params.hashtags, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_hashtags_deduplicated_in_order() {
        let params = FeedParams::from_query(&FeedQuery::new("b,a,b", "10", "mock"));
        assert_eq!(params.hashtags, vec!["b", "a"]);
    }

    #[test]
    fn test_blank_hashtags_fall_back_to_default() {
        let params = FeedParams::from_query(&FeedQuery::new(" , ", "10", "mock"));
        assert_eq!(params.hashtags, vec!["family", "kids", "nyc"]);
    }

    #[test]
    fn test_limit_clamping() {
        assert_eq!(FeedParams::from_query(&FeedQuery::new("a", "500", "mock")).limit, 100);
        assert_eq!(FeedParams::from_query(&FeedQuery::new("a", "-5", "mock")).limit, 0);
        assert_eq!(FeedParams::from_query(&FeedQuery::new("a", " 7 ", "mock")).limit, 7);
        assert_eq!(FeedParams::from_query(&FeedQuery::new("a", "abc", "mock")).limit, 25);
        assert_eq!(FeedParams::from_query(&FeedQuery::new("a", "", "mock")).limit, 25);
        assert_eq!(FeedParams::from_query(&FeedQuery::new("a", "-", "mock")).limit, 25);
    }

    #[test]
    fn test_limit_overflow_saturates() {
        let huge = FeedQuery::new("a", "100000000000000000000", "mock");
        let negative_huge = FeedQuery::new("a", "-100000000000000000000", "mock");
        assert_eq!(FeedParams::from_query(&huge).limit, MAX_LIMIT);
        assert_eq!(FeedParams::from_query(&negative_huge).limit, 0);
    }

    #[test]
    fn test_limit_reads_leading_integer() {
        assert_eq!(FeedParams::from_query(&FeedQuery::new("a", "12abc", "mock")).limit, 12);
        assert_eq!(FeedParams::from_query(&FeedQuery::new("a", "4.5", "mock")).limit, 4);
        assert_eq!(FeedParams::from_query(&FeedQuery::new("a", "+9", "mock")).limit, 9);
        assert_eq!(FeedParams::from_query(&FeedQuery::new("a", "-3x", "mock")).limit, 0);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!(Mode::parse("MOCK"), Mode::Mock);
        assert_eq!(Mode::parse("Instagram"), Mode::Live);
        assert_eq!(Mode::parse("live"), Mode::Live);
        assert_eq!(Mode::parse("something-else"), Mode::Mock);
    }

    #[test]
    fn test_fingerprint_ignores_whitespace_and_mode_case() {
        let a = FeedParams::from_query(&FeedQuery::new("  a, b ,c ", "10", "Mock"));
        let b = FeedParams::from_query(&FeedQuery::new("a,b,c", "10", "mock"));
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.fingerprint(), "feed:mock:a,b,c:10");
    }

    #[test]
    fn test_fingerprint_keeps_hashtag_case() {
        let upper = FeedParams::from_query(&FeedQuery::new("NYC", "10", "mock"));
        let lower = FeedParams::from_query(&FeedQuery::new("nyc", "10", "mock"));
        assert_eq!(upper.hashtags, vec!["NYC"]);
        assert_ne!(upper.fingerprint(), lower.fingerprint());
    }

    #[test]
    fn test_fingerprint_distinguishes_mode_and_limit() {
        let mock = FeedParams::from_query(&FeedQuery::new("a", "10", "mock"));
        let live = FeedParams::from_query(&FeedQuery::new("a", "10", "instagram"));
        let other_limit = FeedParams::from_query(&FeedQuery::new("a", "11", "mock"));
        assert_ne!(mock.fingerprint(), live.fingerprint());
        assert_ne!(mock.fingerprint(), other_limit.fingerprint());
    }

    #[test]
    fn test_feed_query_deserialize() {
        let json = r#"{"hashtags": "a,b", "limit": "4"}"#;
        let query: FeedQuery = serde_json::from_str(json).unwrap();
        assert_eq!(query.hashtags.as_deref(), Some("a,b"));
        assert!(query.mode.is_none());
    }
}
