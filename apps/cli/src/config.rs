use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use gastu_client::{MarkReadRoute, DEFAULT_API_URL};
use gastu_core::constants::DEFAULT_UNREAD_POLL_INTERVAL_MS;

pub struct Config {
    pub api_url: String,
    pub access_token: Option<String>,
    pub user_id: Option<i64>,
    pub request_timeout: Duration,
    pub poll_interval: Duration,
    pub mark_read_route: MarkReadRoute,
    pub ui_state_file: PathBuf,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_url = var("GASTU_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let access_token = var("GASTU_ACCESS_TOKEN");
        let user_id = var("GASTU_USER_ID")
            .map(|v| v.parse::<i64>())
            .transpose()
            .context("Invalid GASTU_USER_ID")?;
        let timeout_ms: u64 = var("GASTU_REQUEST_TIMEOUT_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(30000);
        let poll_ms: u64 = var("GASTU_POLL_INTERVAL_MS")
            .and_then(|v| v.parse().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_UNREAD_POLL_INTERVAL_MS);
        let mark_read_route = var("GASTU_MARK_READ_ROUTE")
            .map(|v| v.parse::<MarkReadRoute>())
            .transpose()?
            .unwrap_or_default();
        let ui_state_file = var("GASTU_UI_STATE_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./.gastu-ui.json"));
        let log_format = var("GASTU_LOG_FORMAT").unwrap_or_else(|| "text".to_string());

        Ok(Self {
            api_url,
            access_token,
            user_id,
            request_timeout: Duration::from_millis(timeout_ms),
            poll_interval: Duration::from_millis(poll_ms),
            mark_read_route,
            ui_state_file,
            log_format,
        })
    }
}
