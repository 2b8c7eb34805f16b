use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Profile of the signed-in user (`/api/usuario`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
}

/// Editable profile fields. Email is read-only on the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub username: String,
}

/// Body of `/api/usuario/cambiar-password`. The confirmation never leaves the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub password_actual: String,
    pub password_nueva: String,
    #[serde(skip)]
    pub confirmation: String,
}

impl PasswordChange {
    pub fn new(
        current: impl Into<String>,
        new_password: impl Into<String>,
        confirmation: impl Into<String>,
    ) -> Self {
        Self {
            password_actual: current.into(),
            password_nueva: new_password.into(),
            confirmation: confirmation.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.password_nueva != self.confirmation {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Las contraseñas no coinciden".to_string(),
            )));
        }
        Ok(())
    }
}

impl ProfileUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "username".to_string(),
            )));
        }
        Ok(())
    }
}
