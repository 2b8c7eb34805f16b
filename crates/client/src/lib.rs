//! Gastu Client - REST implementation of the `gastu-core` API traits.
//!
//! A single [`GastuApiClient`] implements every `*ApiTrait` seam, so
//! services can be built over one shared `Arc<GastuApiClient>`.

mod client;
mod error_body;
mod resources;
mod routes;

pub use client::{ClientConfig, GastuApiClient, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
pub use error_body::{classify_failure, failure_message, field_errors};
pub use routes::MarkReadRoute;
