//! Jamf Pro API models
//!
//! Wire structures for the Jamf Pro API, kept apart from the domain types.

use crate::config::{secret_string, SecretString};
use secrecy::ExposeSecret;
use serde::Deserialize;

/// Body of `POST /api/v1/auth/token`
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    /// Bearer token
    pub token: String,

    /// Expiry timestamp as reported by the server
    #[serde(default)]
    pub expires: Option<String>,
}

/// Bearer token issued for a single run
///
/// The token is never refreshed. Its expiry is only kept for logging.
#[derive(Debug, Clone)]
pub struct AuthToken {
    token: SecretString,
    expires: Option<String>,
}

impl AuthToken {
    /// Wraps a raw token value
    pub fn new(token: impl Into<String>, expires: Option<String>) -> Self {
        Self {
            token: secret_string(token),
            expires,
        }
    }

    /// Raw token value
    pub fn expose(&self) -> &str {
        self.token.expose_secret().as_ref()
    }

    /// Expiry timestamp, if the server sent one
    pub fn expires(&self) -> Option<&str> {
        self.expires.as_deref()
    }

    /// `Authorization` header value
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.expose())
    }
}

impl From<TokenResponse> for AuthToken {
    fn from(response: TokenResponse) -> Self {
        AuthToken::new(response.token, response.expires)
    }
}
