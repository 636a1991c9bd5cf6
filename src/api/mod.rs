//! API Module
//!
//! HTTP handlers and routing for the feed service.
//!
//! # Endpoints
//! - `GET /api/feed` - Aggregated feed for `hashtags`, `limit`, `mode`
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
