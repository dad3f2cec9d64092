//! Aggregated session token.

use std::collections::HashMap;

/// Bearer-token bundle spanning every authenticated brand for one logical
/// user session.
///
/// Immutable once issued; safe to share across concurrent calls. Brand
/// lookups are case-insensitive.
#[derive(Debug, Clone)]
pub struct SessionToken {
    user: String,
    session: String,
    tokens: HashMap<String, String>,
    expires: i32,
}

impl SessionToken {
    pub fn new(
        user: impl Into<String>,
        session: impl Into<String>,
        tokens: HashMap<String, String>,
        expires: i32,
    ) -> Self {
        Self {
            user: user.into(),
            session: session.into(),
            tokens,
            expires,
        }
    }

    /// The client's internal username the token was created for.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Unique key for this authentication session.
    pub fn session(&self) -> &str {
        &self.session
    }

    /// Seconds until the shortest-lived brand token expires. The bundle
    /// is stale as soon as this elapses.
    pub fn expires(&self) -> i32 {
        self.expires
    }

    /// Names of the brands this token bundle covers.
    pub fn brands(&self) -> impl Iterator<Item = &str> {
        self.tokens.keys().map(String::as_str)
    }

    /// Bearer token for a brand, matched case-insensitively.
    pub fn token_for(&self, brand: &str) -> Option<&str> {
        self.tokens
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(brand))
            .map(|(_, token)| token.as_str())
    }
}
