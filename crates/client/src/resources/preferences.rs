use async_trait::async_trait;
use log::info;

use gastu_core::errors::Result;
use gastu_core::preferences::{AlertPreferences, PreferencesApiTrait};

use crate::client::GastuApiClient;
use crate::routes;

#[async_trait]
impl PreferencesApiTrait for GastuApiClient {
    async fn get_preferences(&self) -> Result<AlertPreferences> {
        self.get(routes::PREFERENCES).await
    }

    async fn put_preferences(&self, preferences: &AlertPreferences) -> Result<AlertPreferences> {
        self.put(routes::PREFERENCES, preferences).await
    }

    async fn reset_preferences(&self) -> Result<AlertPreferences> {
        let preferences = self.post_empty(routes::PREFERENCES_RESET).await?;
        info!("[GastuApi] Preferences reset to defaults");
        Ok(preferences)
    }
}
