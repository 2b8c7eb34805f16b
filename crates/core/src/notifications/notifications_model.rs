//! Notification entity and its card presentation.

use crate::constants::{BADGE_DISPLAY_CAP, DEFAULT_NOTIFICATION_TITLE, NOTIFICATION_PREVIEW_CHARS};
use crate::utils::text_utils::truncate_chars;
use crate::utils::time_utils::format_time_ago;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A notification as returned by `/api/notificaciones`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "referenciaId", default)]
    pub reference_id: Option<i64>,
    #[serde(rename = "titulo", default)]
    pub title: Option<String>,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "leida")]
    pub read: bool,
    #[serde(rename = "fechaCreacion", default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Body of `/api/notificaciones/no-leidas/count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnreadCount {
    pub count: u64,
}

/// Visual category inferred from a notification's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationTone {
    Income,
    Expense,
    Warning,
    Info,
}

impl NotificationTone {
    /// Keyword match over type, title and description, in priority order.
    pub fn classify(notification: &Notification) -> Self {
        let haystack = format!(
            "{} {} {}",
            notification.kind,
            notification.title.as_deref().unwrap_or_default(),
            notification.description.as_deref().unwrap_or_default()
        )
        .to_uppercase();
        let has = |needles: &[&str]| needles.iter().any(|n| haystack.contains(n));

        if has(&["INGRE", "INCOME"]) {
            NotificationTone::Income
        } else if has(&["EGRE", "GASTO", "EXPENSE"]) {
            NotificationTone::Expense
        } else if has(&["ALERT", "ADVERTENCIA", "WARNING"]) {
            NotificationTone::Warning
        } else {
            NotificationTone::Info
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            NotificationTone::Income => "success",
            NotificationTone::Expense => "danger",
            NotificationTone::Warning => "warning",
            NotificationTone::Info => "info",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            NotificationTone::Income => "graph-up-arrow",
            NotificationTone::Expense => "graph-down-arrow",
            NotificationTone::Warning => "exclamation-triangle-fill",
            NotificationTone::Info => "bell-fill",
        }
    }
}

/// Tabs of the notification panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedTab {
    #[default]
    Unread,
    Read,
    All,
}

impl FeedTab {
    pub fn title(self) -> &'static str {
        match self {
            FeedTab::Unread => "No leídas",
            FeedTab::Read => "Leídas",
            FeedTab::All => "Todas",
        }
    }
}

impl fmt::Display for FeedTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for FeedTab {
    type Err = crate::errors::Error;

    fn from_str(s: &str) -> crate::errors::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "unread" | "no-leidas" => Ok(FeedTab::Unread),
            "read" | "leidas" => Ok(FeedTab::Read),
            "all" | "todas" => Ok(FeedTab::All),
            other => Err(crate::errors::Error::Validation(
                crate::errors::ValidationError::InvalidInput(format!(
                    "unknown notification tab '{}'",
                    other
                )),
            )),
        }
    }
}

/// A notification prepared for display.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationCard {
    pub id: i64,
    pub tone: NotificationTone,
    pub title: String,
    pub preview: String,
    pub time_ago: String,
    pub unread: bool,
    /// Only unread cards offer the dismiss action.
    pub can_dismiss: bool,
}

impl NotificationCard {
    pub fn build(notification: &Notification, now: NaiveDateTime) -> Self {
        let title = notification
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_NOTIFICATION_TITLE)
            .to_string();
        let preview = notification
            .description
            .as_deref()
            .map(|d| truncate_chars(d, NOTIFICATION_PREVIEW_CHARS))
            .unwrap_or_default();

        Self {
            id: notification.id,
            tone: NotificationTone::classify(notification),
            title,
            preview,
            time_ago: format_time_ago(notification.created_at, now),
            unread: !notification.read,
            can_dismiss: !notification.read,
        }
    }
}

/// Text of the main unread badge, `None` when it should be hidden.
pub fn badge_text(count: usize) -> Option<String> {
    match count {
        0 => None,
        n if n > BADGE_DISPLAY_CAP => Some(format!("{}+", BADGE_DISPLAY_CAP)),
        n => Some(n.to_string()),
    }
}
