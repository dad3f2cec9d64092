//! Client for a federated candidate-search service.
//!
//! The remote service exposes several independently-authenticated "brand"
//! endpoints behind one logical API. [`SearchApiClient`] authenticates
//! against every configured brand in one call, then dispatches search,
//! candidate, CV, quota and dictionary requests to a single brand selected
//! by name, speaking the right wire convention to each endpoint family.

pub mod archive;
pub mod classify;
pub mod codec;
pub mod config;
pub mod error;
pub mod token;

mod search_api;

pub use search_api::SearchApiClient;

#[cfg(test)]
mod tests;

/// Path prefix every data endpoint lives under, joined to a brand's base URL.
pub const CANDIDATE_SEARCH_API_PREFIX: &str = "CandidateSearchApi";

/// Relative path of the credential-exchange endpoint on every brand.
pub const TOKEN_ENDPOINT_PATH: &str = "authorisationserver/token";

/// OAuth scope requested with every brand token.
pub const CV_DATABASE_SCOPE: &str = "CVDatabase";
