use crate::errors::Result;
use crate::users::users_model::{PasswordChange, ProfileUpdate, UserProfile};
use async_trait::async_trait;

/// Remote operations on the signed-in user.
#[async_trait]
pub trait UserApiTrait: Send + Sync {
    async fn get_profile(&self) -> Result<UserProfile>;
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile>;
    /// Returns the backend's confirmation message.
    async fn change_password(&self, change: &PasswordChange) -> Result<String>;
}

#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn get_profile(&self) -> Result<UserProfile>;
    async fn rename(&self, username: &str) -> Result<UserProfile>;
    async fn change_password(&self, change: PasswordChange) -> Result<String>;
}
