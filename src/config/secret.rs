//! Secure credential handling using the secrecy crate
//!
//! The Jamf API password, the SMTP key and the bearer token are wrapped in
//! [`SecretString`]. Memory is zeroed on drop, `Debug` output is redacted, and
//! reading the value requires an explicit `expose_secret()`.
//!
//! # Example
//!
//! ```rust
//! use jamf_report::config::secret_string;
//! use secrecy::ExposeSecret;
//!
//! let password = secret_string("my-password");
//! assert_eq!(password.expose_secret().as_ref(), "my-password");
//! assert!(!format!("{password:?}").contains("my-password"));
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret};
use zeroize::Zeroize;

/// Newtype wrapper for String that implements the required traits for Secret
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SecretValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl SecretValue {
    /// Check if the secret value is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Type alias for a secret string
pub type SecretString = Secret<SecretValue>;

/// Wraps a value in a [`SecretString`]
#[inline]
pub fn secret_string(value: impl Into<String>) -> SecretString {
    Secret::new(SecretValue::from(value.into()))
}
