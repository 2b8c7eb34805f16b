use async_trait::async_trait;
use log::{debug, info, warn};
use std::sync::Arc;

use super::preferences_model::{AlertPreferences, PreferenceEdits, PreferenceForm, PreferenceTab};
use super::preferences_traits::{PreferenceSyncServiceTrait, PreferencesApiTrait};
use crate::errors::{Error, Result, ValidationError};

/// Keeps the preference form in step with the backend record.
///
/// Saves are read-modify-write: the record is fetched again right before
/// the PUT so unedited fields carry the server's latest values. Two
/// clients saving at once still race; the later PUT wins.
pub struct PreferenceSyncService {
    api: Arc<dyn PreferencesApiTrait>,
}

impl PreferenceSyncService {
    pub fn new(api: Arc<dyn PreferencesApiTrait>) -> Self {
        Self { api }
    }

    async fn fetch_base(&self) -> AlertPreferences {
        match self.api.get_preferences().await {
            Ok(current) => current,
            Err(e) => {
                warn!(
                    "Could not fetch preferences before saving ({}); submitting edits over an empty record",
                    e
                );
                AlertPreferences::default()
            }
        }
    }
}

#[async_trait]
impl PreferenceSyncServiceTrait for PreferenceSyncService {
    async fn load(&self) -> Result<PreferenceForm> {
        let snapshot = self.api.get_preferences().await?;
        Ok(PreferenceForm::from_snapshot(snapshot))
    }

    async fn submit(&self, edits: &PreferenceEdits) -> Result<PreferenceForm> {
        // Type-check edits before touching the network.
        let mut probe = AlertPreferences::default();
        probe.apply(edits)?;

        let mut merged = self.fetch_base().await;
        merged.apply(edits)?;
        debug!("Submitting {} edited preference field(s)", edits.len());

        let stored = self.api.put_preferences(&merged).await?;
        info!("Preferences saved");

        let confirmed = match self.api.get_preferences().await {
            Ok(current) => current,
            Err(e) => {
                warn!("Could not re-read preferences after saving: {}", e);
                stored
            }
        };
        Ok(PreferenceForm::from_snapshot(confirmed))
    }

    async fn submit_tab(&self, tab: PreferenceTab, edits: &PreferenceEdits) -> Result<PreferenceForm> {
        if let Some(foreign) = edits.fields().find(|f| !tab.contains(*f)) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "{} is not editable from the {} tab",
                foreign.key(),
                tab.title()
            ))));
        }
        self.submit(edits).await
    }

    async fn reset(&self) -> Result<PreferenceForm> {
        let defaults = self.api.reset_preferences().await?;
        info!("Preferences reset to defaults");
        Ok(PreferenceForm::from_snapshot(defaults))
    }
}
