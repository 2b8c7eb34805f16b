use async_trait::async_trait;
use log::info;
use serde::Deserialize;

use gastu_core::errors::Result;
use gastu_core::users::{PasswordChange, ProfileUpdate, UserApiTrait, UserProfile};

use crate::client::GastuApiClient;
use crate::routes;

/// Confirmation body of the password change.
#[derive(Debug, Deserialize)]
struct MessageResponse {
    #[serde(default)]
    mensaje: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[async_trait]
impl UserApiTrait for GastuApiClient {
    async fn get_profile(&self) -> Result<UserProfile> {
        self.get(routes::USER).await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile> {
        let profile: UserProfile = self.put(routes::USER, update).await?;
        info!("[GastuApi] Profile {} updated", profile.id);
        Ok(profile)
    }

    async fn change_password(&self, change: &PasswordChange) -> Result<String> {
        let response: MessageResponse = self.post(routes::CHANGE_PASSWORD, change).await?;
        Ok(response
            .mensaje
            .or(response.message)
            .unwrap_or_else(|| "Contraseña actualizada".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::decode_body;

    #[test]
    fn password_body_never_carries_the_confirmation() {
        let change = PasswordChange::new("vieja", "nueva123", "nueva123");
        let body = serde_json::to_value(&change).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"passwordActual": "vieja", "passwordNueva": "nueva123"})
        );
    }

    #[test]
    fn confirmation_accepts_either_message_key() {
        let es: MessageResponse = decode_body(r#"{"mensaje": "Listo"}"#).unwrap();
        assert_eq!(es.mensaje.as_deref(), Some("Listo"));
        let en: MessageResponse = decode_body(r#"{"message": "Done"}"#).unwrap();
        assert_eq!(en.message.as_deref(), Some("Done"));
    }
}
