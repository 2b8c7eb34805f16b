//! Alert preferences - record model, form view-model and save synchronizer.

mod preferences_model;
mod preferences_service;
mod preferences_traits;


pub use preferences_model::{
    AlertPreferences, PreferenceEdits, PreferenceField, PreferenceForm, PreferenceGroup,
    PreferenceKind, PreferenceTab, PreferenceValue,
};
pub use preferences_service::PreferenceSyncService;
pub use preferences_traits::{PreferenceSyncServiceTrait, PreferencesApiTrait};
