use async_trait::async_trait;
use log::debug;

use gastu_core::errors::Result;
use gastu_core::notifications::{Notification, NotificationApiTrait, UnreadCount};

use crate::client::GastuApiClient;
use crate::routes;

#[async_trait]
impl NotificationApiTrait for GastuApiClient {
    async fn list_notifications(&self) -> Result<Vec<Notification>> {
        let notifications: Vec<Notification> = self.get(routes::NOTIFICATIONS).await?;
        debug!("[GastuApi] Fetched {} notifications", notifications.len());
        Ok(notifications)
    }

    async fn list_unread(&self) -> Result<Vec<Notification>> {
        self.get(routes::UNREAD_NOTIFICATIONS).await
    }

    async fn unread_count(&self) -> Result<u64> {
        let body: UnreadCount = self.get(routes::UNREAD_COUNT).await?;
        Ok(body.count)
    }

    async fn mark_read(&self, id: i64) -> Result<Notification> {
        self.put_empty(&self.mark_read_route().path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::decode_body;

    #[test]
    fn decodes_backend_notification_list() {
        let body = r#"[
            {"id": 1, "tipo": "INGRESO", "titulo": "Nuevo ingreso", "descripcion": "Sueldo",
             "leida": false, "fechaCreacion": "2024-05-20T09:30:00"},
            {"id": 2, "tipo": "ALERTA", "referenciaId": 8, "leida": true}
        ]"#;
        let items: Vec<Notification> = decode_body(body).unwrap();
        assert_eq!(items.len(), 2);
        assert!(!items[0].read);
        assert_eq!(items[1].reference_id, Some(8));
        assert!(items[1].created_at.is_none());
    }

    #[test]
    fn missing_read_flag_fails_decoding() {
        let body = r#"[{"id": 1, "tipo": "INGRESO"}]"#;
        assert!(decode_body::<Vec<Notification>>(body).is_err());
    }
}
