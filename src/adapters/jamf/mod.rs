//! Jamf Pro adapter
//!
//! HTTP client for the token endpoint and the advanced mobile device search
//! endpoint, plus the wire models they return.

pub mod client;
pub mod models;

pub use client::{JamfClient, ADVANCED_SEARCH_PATH, TOKEN_PATH};
pub use models::{AuthToken, TokenResponse};
