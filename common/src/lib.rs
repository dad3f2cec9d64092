//! Cross-cutting helpers for the candidate-search client.
//!
//! This crate contains the pieces every layer needs but none owns:
//! error location capture, HTTP status categorisation and credential
//! redaction. No business logic lives here.
//!
//! ## Architecture
//!
//! - **common** (this crate): Shared plumbing with no domain knowledge
//! - **models**: Pure data-transfer shapes for the remote API
//! - **search-client**: Protocol handling operating on models
//!
//! This layered architecture keeps concerns separated and makes testing easier.

pub mod error;
pub mod http_status;
pub mod redacted_secret;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_secret::RedactedSecret;

#[cfg(test)]
mod tests;
