//! Feed Module
//!
//! Normalization, mock generation, aggregation and the request-level service.

pub mod aggregator;
pub mod mock;
pub mod normalize;
pub mod service;


pub use aggregator::{merge_duplicates, sort_newest_first, HashtagAggregator, PostAggregator};
pub use mock::{generate_mock, per_tag_limit};
pub use normalize::{normalize, parse_timestamp};
pub use service::FeedService;
