use crate::errors::Result;
use crate::notifications::notifications_model::Notification;
use async_trait::async_trait;

/// Remote operations on the current user's notifications.
#[async_trait]
pub trait NotificationApiTrait: Send + Sync {
    async fn list_notifications(&self) -> Result<Vec<Notification>>;

    async fn list_unread(&self) -> Result<Vec<Notification>>;

    async fn unread_count(&self) -> Result<u64>;

    /// Flags one notification as read and returns the updated record.
    async fn mark_read(&self, id: i64) -> Result<Notification>;

    /// Flags several notifications as read, reporting each id's outcome.
    ///
    /// The default issues one `mark_read` per id in order. It is not atomic:
    /// earlier successes stay applied when a later id fails.
    async fn mark_many_read(&self, ids: &[i64]) -> Vec<(i64, Result<()>)> {
        let mut outcomes = Vec::with_capacity(ids.len());
        for &id in ids {
            outcomes.push((id, self.mark_read(id).await.map(|_| ())));
        }
        outcomes
    }
}
