//! Best-effort classification of failed HTTP exchanges.
//!
//! The service does not guarantee a consistent error schema: the token
//! endpoint reports `{error, error_description}`, while the data
//! endpoints report validation failures as either `{Message, ModelState}`
//! or `{message, model_state}` depending on which side of the service the
//! request died on. Classification is an ordered fallback chain; every
//! step is side-effect-free so each can be tested in isolation.

use crate::codec::{slug, verbatim};
use crate::error::{CodecError, SearchApiError};

use common::{ErrorLocation, HttpStatusCode};
use models::errors::{ServiceErrorDetail, ValidationErrorBody};

use std::collections::HashMap;
use std::panic::Location;

use reqwest::StatusCode;

/// Fixed message for a 401 on an authenticated call; the body is not
/// inspected.
pub const EXPIRED_TOKEN_MESSAGE: &str =
    "Token used for authorisation has expired, a new token should be requested.";

const SERVICE_ERROR_MARKER: &str = "\"error_description\"";

/// Classify a non-2xx exchange into a typed error.
///
/// Order is fixed: 401 first, then the token-endpoint error shape, then
/// the validation shape under each codec in turn, then the raw body text.
#[track_caller]
pub fn classify_failure(status: StatusCode, body: &str) -> SearchApiError {
    if status == StatusCode::UNAUTHORIZED {
        return SearchApiError::Authentication {
            message: EXPIRED_TOKEN_MESSAGE.to_string(),
            detail: None,
            location: ErrorLocation::from(Location::caller()),
        };
    }

    if body.contains(SERVICE_ERROR_MARKER) {
        if let Ok(detail) = slug::decode::<ServiceErrorDetail>(body.as_bytes()) {
            return SearchApiError::Service {
                detail,
                status: HttpStatusCode(status.as_u16()),
                location: ErrorLocation::from(Location::caller()),
            };
        }
    }

    let (message, model_state) = match parse_validation_body(body) {
        Some(parsed) => (
            parsed
                .message
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| body.to_string()),
            parsed.model_state,
        ),
        None => (body.to_string(), HashMap::new()),
    };

    SearchApiError::Validation {
        message,
        model_state,
        status: HttpStatusCode(status.as_u16()),
        location: ErrorLocation::from(Location::caller()),
    }
}

/// Try the capitalised convention first, then snake_case. The first decode
/// with a non-empty field map wins; failing that, the first with a
/// non-empty message.
fn parse_validation_body(body: &str) -> Option<ValidationErrorBody> {
    let decoders: [fn(&[u8]) -> Result<ValidationErrorBody, CodecError>; 2] =
        [verbatim::decode, slug::decode];

    let mut with_message = None;
    for decode in decoders {
        let Ok(parsed) = decode(body.as_bytes()) else {
            continue;
        };

        if !parsed.model_state.is_empty() {
            return Some(parsed);
        }

        if with_message.is_none()
            && parsed
                .message
                .as_deref()
                .is_some_and(|message| !message.is_empty())
        {
            with_message = Some(parsed);
        }
    }

    with_message
}
