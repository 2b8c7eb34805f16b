//! Gastu Core - Domain models, view-models and services.
//!
//! This crate holds the client-side logic of the Gastu finance app. It is
//! transport-agnostic and defines the `*ApiTrait` seams implemented by the
//! `gastu-client` crate.

pub mod budgets;
pub mod concepts;
pub mod constants;
pub mod errors;
pub mod expenses;
pub mod export;
pub mod notifications;
pub mod preferences;
pub mod savings;
pub mod users;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
