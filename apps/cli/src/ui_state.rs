//! Small JSON file remembering view choices between runs.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use gastu_core::notifications::FeedTab;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiState {
    /// One-line list rendering.
    pub compact: bool,
    /// Last notification tab shown.
    pub last_tab: FeedTab,
}

impl UiState {
    /// Reads the file; a missing or unreadable file yields defaults.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("Ignoring corrupt UI state file {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Self::default(),
            Err(e) => {
                tracing::warn!("Could not read UI state file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let state = UiState::load(&dir.path().join("absent.json"));
        assert_eq!(state, UiState::default());
        assert_eq!(state.last_tab, FeedTab::Unread);
    }

    #[test]
    fn corrupt_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ui.json");
        fs::write(&path, "{not json").unwrap();
        assert_eq!(UiState::load(&path), UiState::default());
    }

    #[test]
    fn saved_state_round_trips_through_nested_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("ui.json");
        let state = UiState {
            compact: true,
            last_tab: FeedTab::All,
        };
        state.save(&path).unwrap();
        assert_eq!(UiState::load(&path), state);

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"lastTab\": \"all\""));
    }

    #[test]
    fn partial_file_fills_missing_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ui.json");
        fs::write(&path, r#"{"compact": true}"#).unwrap();
        let state = UiState::load(&path);
        assert!(state.compact);
        assert_eq!(state.last_tab, FeedTab::Unread);
    }
}
