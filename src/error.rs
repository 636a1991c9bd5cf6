//! Error types for the feed service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Error code returned to callers for every failed feed request.
pub const FEED_ERROR_CODE: &str = "failed_to_fetch_feed";

// == Feed Error Enum ==
/// Unified error type for the feed service.
#[derive(Error, Debug)]
pub enum FeedError {
    /// Upstream credentials are missing
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The upstream provider has no identifier for a hashtag
    #[error("No upstream hashtag id for tag: {0}")]
    Resolution(String),

    /// Timeout, network failure or malformed upstream payload
    #[error("Transport error: {0}")]
    Transport(String),

    /// Anything else that went wrong while building a feed
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl FeedError {
    /// Converts the error into the structured failure body.
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse::new(FEED_ERROR_CODE, self.to_string())
    }
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        // Request URLs carry the access token
        FeedError::Transport(err.without_url().to_string())
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::Transport(format!("malformed upstream payload: {}", err))
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for FeedError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_GATEWAY, Json(self.to_response())).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the feed service.
pub type Result<T> = std::result::Result<T, FeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_uses_generic_code() {
        let err = FeedError::Configuration("credentials missing".to_string());
        let body = err.to_response();

        assert_eq!(body.error, FEED_ERROR_CODE);
        assert!(body.details.contains("credentials missing"));
    }

    #[test]
    fn test_into_response_is_bad_gateway() {
        let response = FeedError::Unexpected("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_serde_error_maps_to_transport() {
        let err: FeedError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, FeedError::Transport(_)));
    }
}
