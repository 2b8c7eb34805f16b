use chrono::NaiveDateTime;
use log::{debug, info, warn};
use std::sync::Arc;

use super::notifications_model::{badge_text, FeedTab, Notification, NotificationCard};
use super::notifications_traits::NotificationApiTrait;
use crate::errors::{Error, Result};
use crate::utils::time_utils::local_now;

/// Counters shown on the panel tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedCounts {
    pub unread: usize,
    pub read: usize,
    pub all: usize,
}

impl FeedCounts {
    /// Main badge text; hidden at zero.
    pub fn badge(&self) -> Option<String> {
        badge_text(self.unread)
    }
}

/// Rendered state of the notification panel.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedView {
    pub active_tab: FeedTab,
    pub unread: Vec<NotificationCard>,
    pub read: Vec<NotificationCard>,
    pub all: Vec<NotificationCard>,
    pub counts: FeedCounts,
}

impl FeedView {
    pub fn cards(&self, tab: FeedTab) -> &[NotificationCard] {
        match tab {
            FeedTab::Unread => &self.unread,
            FeedTab::Read => &self.read,
            FeedTab::All => &self.all,
        }
    }

    pub fn active_cards(&self) -> &[NotificationCard] {
        self.cards(self.active_tab)
    }
}

/// Result of a bulk mark-read. Partial success is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkMarkOutcome {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: Vec<i64>,
}

impl BulkMarkOutcome {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Client-side notification panel state: the last fetched list and the active tab.
pub struct NotificationFeed {
    api: Arc<dyn NotificationApiTrait>,
    items: Vec<Notification>,
    active_tab: FeedTab,
}

impl NotificationFeed {
    pub fn new(api: Arc<dyn NotificationApiTrait>) -> Self {
        Self {
            api,
            items: Vec::new(),
            active_tab: FeedTab::default(),
        }
    }

    pub fn with_tab(mut self, tab: FeedTab) -> Self {
        self.active_tab = tab;
        self
    }

    pub fn active_tab(&self) -> FeedTab {
        self.active_tab
    }

    pub fn set_active_tab(&mut self, tab: FeedTab) {
        self.active_tab = tab;
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    /// Replaces the snapshot with the server's full list.
    pub async fn refresh(&mut self) -> Result<FeedView> {
        self.items = self.api.list_notifications().await?;
        debug!("Fetched {} notification(s)", self.items.len());
        Ok(self.view())
    }

    pub fn counts(&self) -> FeedCounts {
        let unread = self.items.iter().filter(|n| !n.read).count();
        FeedCounts {
            unread,
            read: self.items.len() - unread,
            all: self.items.len(),
        }
    }

    pub fn view(&self) -> FeedView {
        self.view_at(local_now())
    }

    pub fn view_at(&self, now: NaiveDateTime) -> FeedView {
        let mut view = FeedView {
            active_tab: self.active_tab,
            unread: Vec::new(),
            read: Vec::new(),
            all: Vec::with_capacity(self.items.len()),
            counts: self.counts(),
        };
        for notification in &self.items {
            let card = NotificationCard::build(notification, now);
            if notification.read {
                view.read.push(card.clone());
            } else {
                view.unread.push(card.clone());
            }
            view.all.push(card);
        }
        view
    }

    /// Marks one notification read on the server, then flips the local copy.
    pub async fn mark_read(&mut self, id: i64) -> Result<FeedCounts> {
        self.api.mark_read(id).await?;
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(item) => item.read = true,
            None => debug!("Notification {} marked read but not in the local list", id),
        }
        Ok(self.counts())
    }

    /// Marks every currently unread notification read. Read items are never re-sent.
    pub async fn mark_all_read(&mut self) -> BulkMarkOutcome {
        let pending: Vec<i64> = self.items.iter().filter(|n| !n.read).map(|n| n.id).collect();
        if pending.is_empty() {
            return BulkMarkOutcome::default();
        }

        let results = self.api.mark_many_read(&pending).await;
        let mut outcome = BulkMarkOutcome {
            attempted: pending.len(),
            ..Default::default()
        };
        for (id, result) in results {
            match result {
                Ok(()) => {
                    if let Some(item) = self.items.iter_mut().find(|n| n.id == id) {
                        item.read = true;
                    }
                    outcome.succeeded += 1;
                }
                Err(e) => {
                    warn!("Failed to mark notification {} as read: {}", id, e);
                    outcome.failed.push(id);
                }
            }
        }
        info!(
            "Marked {}/{} notification(s) as read",
            outcome.succeeded, outcome.attempted
        );
        outcome
    }

    /// Looks up a notification in the snapshot.
    pub fn find(&self, id: i64) -> Result<&Notification> {
        self.items
            .iter()
            .find(|n| n.id == id)
            .ok_or_else(|| Error::NotFound(format!("Notification {} not found", id)))
    }
}
