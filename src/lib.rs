//! Hashtag Feed - A hashtag-based social media feed aggregator
//!
//! Fetches recent posts per hashtag, normalizes them into a uniform schema,
//! merges them newest-first and serves the result through a short-lived cache.

pub mod api;
pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod feed;
pub mod models;
pub mod tasks;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use feed::FeedService;
pub use tasks::spawn_cleanup_task;
