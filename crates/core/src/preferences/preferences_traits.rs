use crate::errors::Result;
use crate::preferences::preferences_model::{AlertPreferences, PreferenceEdits, PreferenceForm, PreferenceTab};
use async_trait::async_trait;

/// Remote operations on the alert preference record.
#[async_trait]
pub trait PreferencesApiTrait: Send + Sync {
    async fn get_preferences(&self) -> Result<AlertPreferences>;

    /// Whole-object replace. Returns the record as stored by the backend.
    async fn put_preferences(&self, preferences: &AlertPreferences) -> Result<AlertPreferences>;

    async fn reset_preferences(&self) -> Result<AlertPreferences>;
}

/// Form-level preference operations.
#[async_trait]
pub trait PreferenceSyncServiceTrait: Send + Sync {
    async fn load(&self) -> Result<PreferenceForm>;

    async fn submit(&self, edits: &PreferenceEdits) -> Result<PreferenceForm>;

    /// Same as `submit`, restricted to the fields shown on `tab`.
    async fn submit_tab(&self, tab: PreferenceTab, edits: &PreferenceEdits) -> Result<PreferenceForm>;

    async fn reset(&self) -> Result<PreferenceForm>;
}
