//! Core error types for the Gastu client.
//!
//! Every remote call, decoding step and view computation returns this
//! error type. The HTTP client converts transport and status failures into
//! these variants so services never see `reqwest` types.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the client.
#[derive(Error, Debug)]
pub enum Error {
    /// The request never produced an HTTP response (DNS, TLS, timeout, reset).
    #[error("Connection failed: {0}")]
    Transport(String),

    /// Non-success HTTP status without a more specific classification.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    /// The backend rejected the request because it conflicts with current state (HTTP 409).
    #[error("{0}")]
    Conflict(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A response body did not match the expected shape.
    #[error("Unexpected response shape: {0}")]
    Decode(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Invalid configuration value: {0}")]
    Config(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// HTTP status associated with the error, when there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::NotFound(_) => Some(404),
            Error::Conflict(_) => Some(409),
            _ => None,
        }
    }

    /// Short text suitable for a toast or alert.
    pub fn user_message(&self) -> String {
        match self {
            Error::Transport(_) => crate::constants::CONNECTION_ERROR_MESSAGE.to_string(),
            Error::Api { message, .. } | Error::NotFound(message) | Error::Conflict(message) => {
                message.clone()
            }
            Error::Validation(v) => v.to_string(),
            other => other.to_string(),
        }
    }
}

/// Validation errors reported by the backend or detected before sending.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Per-field messages, keyed by the JSON field name.
    #[error("{0}")]
    Fields(FieldErrors),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}

/// Ordered map of field name to message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(pub BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Export(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Unexpected(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
