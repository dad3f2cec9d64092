use crate::error::{ArchiveError, CodecError};

use common::{ErrorLocation, HttpStatusCode};
use models::errors::ServiceErrorDetail;

use std::collections::HashMap;
use std::panic::Location;

use thiserror::Error as ThisError;

/// Typed failure of a candidate-search call.
///
/// The first three variants are the service's own error taxonomy,
/// constructed at the HTTP boundary and never partially filled. The rest
/// are local transport and decoding failures.
#[derive(Debug, ThisError)]
pub enum SearchApiError {
    /// Credentials rejected at sign-in, or a 401 on any authenticated
    /// call - the bearer token has expired.
    #[error("Authentication Error: {message} {location}")]
    Authentication {
        message: String,
        detail: Option<ServiceErrorDetail>,
        location: ErrorLocation,
    },

    /// Structured failure reported by the remote service itself.
    #[error("Service Error ({status}): {detail} {location}")]
    Service {
        detail: ServiceErrorDetail,
        status: HttpStatusCode,
        location: ErrorLocation,
    },

    /// Request rejected as malformed, optionally field by field.
    #[error("Search Validation Error ({status}): {message} {location}")]
    Validation {
        message: String,
        model_state: HashMap<String, Vec<String>>,
        status: HttpStatusCode,
        location: ErrorLocation,
    },

    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Archive(#[from] ArchiveError),
}

impl From<reqwest::Error> for SearchApiError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        SearchApiError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<url::ParseError> for SearchApiError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        SearchApiError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
