//! Error body shapes the service is known to emit.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Structured error from the token endpoint, also seen on data endpoints
/// when the security headers are bad.
///
/// Known `error` values: `invalid_request`, `invalid_grant`,
/// `unsupported_grant_type`, `invalid_scope`, `invalid_client`,
/// `server_error`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServiceErrorDetail {
    /// Error type.
    pub error: Option<String>,

    /// Long description of the error.
    pub error_description: Option<String>,
}

impl fmt::Display for ServiceErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.error.as_deref().unwrap_or_default(),
            self.error_description.as_deref().unwrap_or_default()
        )
    }
}

/// Validation failure from a data endpoint: an overall message plus an
/// optional field-name to messages mapping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationErrorBody {
    pub message: Option<String>,

    pub model_state: HashMap<String, Vec<String>>,
}
