//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Default Graph API base URL.
pub const DEFAULT_GRAPH_BASE: &str = "https://graph.facebook.com/v17.0";

/// Upstream credentials. Both values are required for live mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Access token sent with every upstream call
    pub access_token: String,
    /// Business account id the hashtag queries are issued on behalf of
    pub account_id: String,
}

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Default TTL in seconds for cached feeds
    pub cache_ttl: u64,
    /// Background sweep interval in seconds, 0 = lazy expiry only
    pub cleanup_interval: u64,
    /// Upstream access token
    pub access_token: Option<String>,
    /// Upstream business account id
    pub account_id: Option<String>,
    /// Upstream base URL
    pub graph_base_url: String,
    /// Timeout in seconds for hashtag id resolution
    pub resolve_timeout: u64,
    /// Timeout in seconds for recent media listing
    pub fetch_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `FEED_CACHE_TTL` - Cache TTL in seconds (default: 120)
    /// - `FEED_CACHE_SWEEP_INTERVAL` - Sweep frequency in seconds (default: 0, disabled)
    /// - `INSTAGRAM_ACCESS_TOKEN` - Upstream access token (default: unset)
    /// - `INSTAGRAM_BUSINESS_ACCOUNT_ID` - Upstream account id (default: unset)
    /// - `GRAPH_API_BASE` - Upstream base URL
    /// - `GRAPH_RESOLVE_TIMEOUT` - Resolution timeout in seconds (default: 8)
    /// - `GRAPH_FETCH_TIMEOUT` - Media listing timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cache_ttl: parse_var("FEED_CACHE_TTL").unwrap_or(defaults.cache_ttl),
            cleanup_interval: parse_var("FEED_CACHE_SWEEP_INTERVAL")
                .unwrap_or(defaults.cleanup_interval),
            access_token: non_empty_var("INSTAGRAM_ACCESS_TOKEN"),
            account_id: non_empty_var("INSTAGRAM_BUSINESS_ACCOUNT_ID"),
            graph_base_url: non_empty_var("GRAPH_API_BASE").unwrap_or(defaults.graph_base_url),
            resolve_timeout: parse_var("GRAPH_RESOLVE_TIMEOUT").unwrap_or(defaults.resolve_timeout),
            fetch_timeout: parse_var("GRAPH_FETCH_TIMEOUT").unwrap_or(defaults.fetch_timeout),
        }
    }

    /// Returns the upstream credentials when both values are configured.
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.access_token, &self.account_id) {
            (Some(token), Some(account)) => Some(Credentials {
                access_token: token.clone(),
                account_id: account.clone(),
            }),
            _ => None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cache_ttl: 120,
            cleanup_interval: 0,
            access_token: None,
            account_id: None,
            graph_base_url: DEFAULT_GRAPH_BASE.to_string(),
            resolve_timeout: 8,
            fetch_timeout: 10,
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
