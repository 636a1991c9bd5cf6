//! Data model for the feed service
//!
//! Canonical posts, raw upstream records, request parameters and the
//! serialized response bodies.

pub mod post;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use post::{format_timestamp, Post, RawPost};
pub use requests::{FeedParams, FeedQuery, Mode, DEFAULT_HASHTAGS, DEFAULT_LIMIT, MAX_LIMIT};
pub use responses::{ErrorResponse, FeedResponse, HealthResponse, StatsResponse};
