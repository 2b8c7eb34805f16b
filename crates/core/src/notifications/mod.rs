//! Notifications - entity, panel state and the unread badge poll.

mod notification_feed;
mod notifications_model;
mod notifications_traits;
mod unread_poller;


pub use notification_feed::{BulkMarkOutcome, FeedCounts, FeedView, NotificationFeed};
pub use notifications_model::{
    badge_text, FeedTab, Notification, NotificationCard, NotificationTone, UnreadCount,
};
pub use notifications_traits::NotificationApiTrait;
pub use unread_poller::UnreadBadgePoller;
