use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use super::users_model::{PasswordChange, ProfileUpdate, UserProfile};
use super::users_traits::{UserApiTrait, UserServiceTrait};
use crate::errors::Result;

pub struct UserService {
    api: Arc<dyn UserApiTrait>,
}

impl UserService {
    pub fn new(api: Arc<dyn UserApiTrait>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn get_profile(&self) -> Result<UserProfile> {
        self.api.get_profile().await
    }

    async fn rename(&self, username: &str) -> Result<UserProfile> {
        let update = ProfileUpdate {
            username: username.trim().to_string(),
        };
        update.validate()?;
        let profile = self.api.update_profile(&update).await?;
        info!("Profile renamed to {}", profile.username);
        Ok(profile)
    }

    async fn change_password(&self, change: PasswordChange) -> Result<String> {
        change.validate()?;
        self.api.change_password(&change).await
    }
}
