//! Data-transfer shapes for the candidate-search API.
//!
//! Pure data structures exchanged with the remote service. Models have no
//! business logic - they're just data that can be passed between layers.
//! Field names are Rust snake_case throughout; the codecs in
//! `search-client` map them to the wire conventions each endpoint family
//! expects.

pub mod auth;
pub mod cv;
pub mod date_criteria;
pub mod dictionary;
pub mod errors;
pub mod found_candidate;
pub mod quota;
pub mod search_request;
pub mod search_response;
pub mod wire;

pub use auth::TokenResponse;
pub use cv::CvFile;
pub use date_criteria::DateCriteria;
pub use dictionary::Dictionary;
pub use errors::{ServiceErrorDetail, ValidationErrorBody};
pub use found_candidate::FoundCandidate;
pub use quota::QuotaResponse;
pub use search_request::SearchRequest;
pub use search_response::SearchResponse;
pub use wire::WireEnum;

#[cfg(test)]
mod tests;
