use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

/// Failure turning a document into a wire payload or back.
///
/// Only raised when a payload is not well-formed as structured data at
/// all; unknown fields and degenerate enumeration values never surface
/// here.
#[derive(Debug, ThisError)]
pub enum CodecError {
    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },
}

impl From<serde_json::Error> for CodecError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        CodecError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
