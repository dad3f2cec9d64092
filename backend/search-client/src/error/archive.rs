use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

/// Failure reading a CV archive download.
///
/// A malformed entry *name* is not an error - it degrades to partial
/// metadata on that entry. These variants mean the archive itself could
/// not be read.
#[derive(Debug, ThisError)]
pub enum ArchiveError {
    #[error("Archive Error: {message} {location}")]
    Zip {
        message: String,
        location: ErrorLocation,
    },

    #[error("IO Error: {message} {location}")]
    Io {
        message: String,
        location: ErrorLocation,
    },
}

impl From<zip::result::ZipError> for ArchiveError {
    #[track_caller]
    fn from(error: zip::result::ZipError) -> Self {
        ArchiveError::Zip {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for ArchiveError {
    #[track_caller]
    fn from(error: std::io::Error) -> Self {
        ArchiveError::Io {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
