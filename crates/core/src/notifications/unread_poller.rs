//! Periodic refresh of the unread badge.
//!
//! The poller runs beside user-triggered fetches without coordinating with
//! them. Whichever writes the badge last wins.

use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use super::notifications_traits::NotificationApiTrait;

/// Handle to a running badge poll.
pub struct UnreadBadgePoller {
    badge: watch::Sender<Option<u64>>,
    handle: JoinHandle<()>,
}

impl UnreadBadgePoller {
    /// Starts polling. The first tick fires immediately.
    pub fn spawn(api: Arc<dyn NotificationApiTrait>, every: Duration) -> Self {
        let (badge, _) = watch::channel(None);
        let publisher = badge.clone();

        let handle = tokio::spawn(async move {
            info!("Unread badge poll started ({} ms interval)", every.as_millis());
            let mut ticker = interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                match api.unread_count().await {
                    Ok(count) => {
                        debug!("Unread count: {}", count);
                        publisher.send_replace(Some(count));
                    }
                    Err(e) => warn!("Unread count poll failed: {}", e),
                }
            }
        });

        Self { badge, handle }
    }

    /// Receiver of badge updates. `None` until the first successful poll.
    pub fn subscribe(&self) -> watch::Receiver<Option<u64>> {
        self.badge.subscribe()
    }

    /// Writes a locally recomputed count, e.g. right after a mark-read.
    /// The next poll overwrites it.
    pub fn publish_local(&self, count: u64) {
        self.badge.send_replace(Some(count));
    }

    pub fn latest(&self) -> Option<u64> {
        *self.badge.borrow()
    }

    pub fn stop(self) {
        self.handle.abort();
    }
}

impl Drop for UnreadBadgePoller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
