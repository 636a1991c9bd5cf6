//! Cache Sweep Task
//!
//! Periodically removes expired feeds so memory does not hold on to keys
//! that are never requested again.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::FeedCache;

/// Spawns a task that sweeps expired entries every `cleanup_interval_secs`.
///
/// Returns `None` when the interval is 0 (lazy expiry only). The returned
/// handle is aborted on shutdown.
pub fn spawn_cleanup_task(
    cache: Arc<RwLock<FeedCache>>,
    cleanup_interval_secs: u64,
) -> Option<JoinHandle<()>> {
    if cleanup_interval_secs == 0 {
        return None;
    }
    let interval = Duration::from_secs(cleanup_interval_secs);

    Some(tokio::spawn(async move {
        info!(
            "Starting cache sweep task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.write().await.cleanup_expired();

            if removed > 0 {
                info!("Cache sweep: removed {} expired feeds", removed);
            } else {
                debug!("Cache sweep: no expired feeds found");
            }
        }
    }))
}
