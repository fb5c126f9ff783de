//! Periodic overdue sweep

use crate::followups::FollowUpManager;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Run the overdue sweep loop
///
/// Wakes every `interval` and flips past-due pending follow-ups to
/// overdue. Runs until the task is aborted.
pub async fn run_sweeper(manager: Arc<FollowUpManager>, interval: Duration) {
    let mut ticker = tokio::time::interval(interval);

    loop {
        ticker.tick().await;

        match manager.mark_overdue(Utc::now()).await {
            Ok(0) => {}
            Ok(flipped) => info!("Marked {} follow-up(s) overdue", flipped),
            Err(e) => error!("Overdue sweep failed: {}", e),
        }
    }
}
