//! Token endpoint response shape.

use serde::{Deserialize, Serialize};

/// Successful credential exchange for one brand.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenResponse {
    /// Bearer token to send with every request.
    pub access_token: String,

    /// Token type, should always be "bearer".
    pub token_type: Option<String>,

    /// When the token expires, in seconds.
    pub expires_in: i32,
}
