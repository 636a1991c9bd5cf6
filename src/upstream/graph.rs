//! Graph API client
//!
//! Talks to the hashtag search and recent media endpoints with reqwest.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use serde_json::Value;
use tracing::warn;

use crate::config::{Config, Credentials};
use crate::error::{FeedError, Result};
use crate::models::post::lenient_string;
use crate::models::RawPost;

use super::MediaSource;

/// Field set requested from the recent media endpoint.
pub const MEDIA_FIELDS: &str =
    "id,caption,media_url,thumbnail_url,permalink,timestamp,username,media_type";

/// `{"data": [...]}` envelope used by every Graph listing.
#[derive(Debug, Deserialize)]
struct GraphList<T> {
    #[serde(default = "Vec::new")]
    data: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct HashtagId {
    #[serde(default, deserialize_with = "lenient_string")]
    id: Option<String>,
}

pub struct GraphClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Option<Credentials>,
    resolve_timeout: Duration,
    fetch_timeout: Duration,
}

impl GraphClient {
    pub fn new(
        base_url: impl Into<String>,
        credentials: Option<Credentials>,
        resolve_timeout: Duration,
        fetch_timeout: Duration,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
            resolve_timeout,
            fetch_timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.graph_base_url.clone(),
            config.credentials(),
            Duration::from_secs(config.resolve_timeout),
            Duration::from_secs(config.fetch_timeout),
        )
    }

    fn credentials(&self) -> Result<&Credentials> {
        self.credentials.as_ref().ok_or_else(|| {
            FeedError::Configuration(
                "INSTAGRAM_ACCESS_TOKEN and INSTAGRAM_BUSINESS_ACCOUNT_ID required".to_string(),
            )
        })
    }

    /// Issues a GET and decodes the `data` envelope.
    ///
    /// A malformed envelope fails the call. Individual records that do not
    /// decode are logged and skipped.
    async fn get_list<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
        timeout: Duration,
    ) -> Result<Vec<T>> {
        let resp = self
            .http
            .get(url)
            .query(query)
            .timeout(timeout)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(FeedError::Transport(format!(
                "upstream returned status {}: {}",
                status.as_u16(),
                body
            )));
        }

        let list: GraphList<Value> = serde_json::from_str(&body)?;
        Ok(decode_records(list.data))
    }
}

fn decode_records<T: DeserializeOwned>(records: Vec<Value>) -> Vec<T> {
    records
        .into_iter()
        .filter_map(|record| match serde_json::from_value(record) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                warn!(error = %e, "Skipping undecodable upstream record");
                None
            }
        })
        .collect()
}

#[async_trait]
impl MediaSource for GraphClient {
    fn ensure_credentials(&self) -> Result<()> {
        self.credentials().map(|_| ())
    }

    async fn resolve_hashtag_id(&self, tag: &str) -> Result<String> {
        let creds = self.credentials()?;
        let url = format!("{}/ig_hashtag_search", self.base_url);
        let query = [
            ("user_id", creds.account_id.clone()),
            ("q", tag.to_string()),
            ("access_token", creds.access_token.clone()),
        ];

        let ids: Vec<HashtagId> = self.get_list(&url, &query, self.resolve_timeout).await?;
        ids.into_iter()
            .next()
            .and_then(|h| h.id)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| FeedError::Resolution(tag.to_string()))
    }

    async fn fetch_recent_media(&self, hashtag_id: &str, limit: usize) -> Result<Vec<RawPost>> {
        let creds = self.credentials()?;
        let url = format!("{}/{}/recent_media", self.base_url, hashtag_id);
        let query = [
            ("user_id", creds.account_id.clone()),
            ("fields", MEDIA_FIELDS.to_string()),
            ("limit", limit.to_string()),
            ("access_token", creds.access_token.clone()),
        ];

        let mut media: Vec<RawPost> = self.get_list(&url, &query, self.fetch_timeout).await?;
        media.truncate(limit);
        tracing::debug!(hashtag_id, count = media.len(), "Fetched recent media");
        Ok(media)
    }
}
