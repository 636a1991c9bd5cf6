//! API Handlers
//!
//! Thin adapters between axum extractors and [`FeedService`].

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::Result;
use crate::feed::FeedService;
use crate::models::{FeedQuery, FeedResponse, HealthResponse, StatsResponse};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub feed: Arc<FeedService>,
}

impl AppState {
    pub fn new(feed: FeedService) -> Self {
        Self {
            feed: Arc::new(feed),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(FeedService::from_config(config))
    }
}

/// Handler for GET /api/feed
///
/// Failures map to 502 with `{error, details}`.
pub async fn feed_handler(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> Result<Json<FeedResponse>> {
    let feed = state.feed.get_feed(&query).await?;
    Ok(Json(feed))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.feed.cache();
    let stats = cache.read().await.stats();
    Json(StatsResponse::from(stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
