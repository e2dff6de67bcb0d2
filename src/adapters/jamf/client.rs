//! Jamf Pro HTTP client
//!
//! Two calls are made per run: one token request with HTTP Basic
//! credentials, then one Classic API read of the advanced mobile device
//! search using the bearer token. Only 200 and 201 count as success, and
//! nothing is retried.

use super::models::{AuthToken, TokenResponse};
use crate::config::JamfConfig;
use crate::domain::{JamfError, ReportError, Result, SearchId};
use base64::{engine::general_purpose, Engine as _};
use reqwest::{Client, ClientBuilder, Response, StatusCode};
use secrecy::ExposeSecret;
use std::path::Path;
use std::time::Duration;

/// Token endpoint, relative to the server base URL
pub const TOKEN_PATH: &str = "/api/v1/auth/token";

/// Advanced mobile device search endpoint, relative to the server base URL
pub const ADVANCED_SEARCH_PATH: &str = "/JSSResource/advancedmobiledevicesearches/id";

/// Jamf Pro API client
///
/// # Example
///
/// ```no_run
/// use jamf_report::adapters::jamf::JamfClient;
/// use jamf_report::config::load_config;
///
/// # async fn example() -> jamf_report::domain::Result<()> {
/// let config = load_config()?;
/// let client = JamfClient::new(&config.jamf)?;
///
/// let token = client.request_token().await?;
/// let xml = client.fetch_advanced_search(&token, config.jamf.search_id).await?;
/// # Ok(())
/// # }
/// ```
pub struct JamfClient {
    base_url: String,
    client: Client,
    config: JamfConfig,
}

impl JamfClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &JamfConfig) -> Result<Self> {
        let mut client_builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30));

        if !config.tls_verify {
            tracing::warn!(
                base_url = %config.base_url,
                "TLS certificate verification is DISABLED for the Jamf server"
            );
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        let client = client_builder.build().map_err(|e| {
            ReportError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            config: config.clone(),
        })
    }

    /// Base URL requests are made against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn basic_auth_header(&self) -> String {
        let credentials = format!(
            "{}:{}",
            self.config.username,
            self.config.password.expose_secret().as_ref()
        );
        let encoded = general_purpose::STANDARD.encode(credentials.as_bytes());
        format!("Basic {encoded}")
    }

    /// Exchange the configured credentials for a bearer token
    ///
    /// # Errors
    ///
    /// - [`JamfError::ConnectionFailed`] when no response arrives
    /// - [`JamfError::UnexpectedStatus`] for anything but 200/201
    /// - [`JamfError::InvalidResponse`] when the body has no `token`
    pub async fn request_token(&self) -> Result<AuthToken> {
        let url = format!("{}{}", self.base_url, TOKEN_PATH);

        tracing::debug!(url = %url, username = %self.config.username, "Requesting API token");

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.basic_auth_header())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| connection_error(&url, e))?;

        let response = check_response_code(response, &url)?;

        let body = response.text().await.map_err(|e| JamfError::InvalidResponse {
            url: url.clone(),
            message: e.to_string(),
        })?;
        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|e| JamfError::InvalidResponse {
                url: url.clone(),
                message: format!("token response is not valid JSON: {e}"),
            })?;

        tracing::info!(expires = ?token.expires, "API token acquired");
        Ok(token.into())
    }

    /// Retrieve the advanced mobile device search as raw XML
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`JamfClient::request_token`].
    pub async fn fetch_advanced_search(
        &self,
        token: &AuthToken,
        search_id: SearchId,
    ) -> Result<String> {
        let url = format!("{}{}/{}", self.base_url, ADVANCED_SEARCH_PATH, search_id);

        tracing::debug!(url = %url, search_id = %search_id, "Fetching advanced search");

        let response = self
            .client
            .get(&url)
            .header("Authorization", token.bearer_header())
            .header("Accept", "application/xml")
            .send()
            .await
            .map_err(|e| connection_error(&url, e))?;

        let response = check_response_code(response, &url)?;

        let body = response.text().await.map_err(|e| JamfError::InvalidResponse {
            url: url.clone(),
            message: e.to_string(),
        })?;

        tracing::info!(search_id = %search_id, bytes = body.len(), "Advanced search retrieved");
        Ok(body)
    }

    /// Fetch the advanced search and persist it to `xml_path`
    ///
    /// The body is written verbatim and also returned.
    pub async fn save_advanced_search(
        &self,
        token: &AuthToken,
        search_id: SearchId,
        xml_path: &Path,
    ) -> Result<String> {
        let body = self.fetch_advanced_search(token, search_id).await?;

        tokio::fs::write(xml_path, body.as_bytes())
            .await
            .map_err(|e| {
                ReportError::Io(format!(
                    "Failed to write search results to {}: {e}",
                    xml_path.display()
                ))
            })?;

        tracing::debug!(path = %xml_path.display(), "Search results written");
        Ok(body)
    }
}

/// Accepts 200 and 201, rejects everything else
fn check_response_code(response: Response, url: &str) -> std::result::Result<Response, JamfError> {
    let status = response.status();
    if status == StatusCode::OK || status == StatusCode::CREATED {
        crate::log_http_response!(url, status.as_u16());
        Ok(response)
    } else {
        tracing::error!(url = %url, status = status.as_u16(), "Unexpected HTTP status");
        Err(JamfError::UnexpectedStatus {
            url: url.to_string(),
            status: status.as_u16(),
        })
    }
}

fn connection_error(url: &str, err: reqwest::Error) -> JamfError {
    let message = if err.is_timeout() {
        format!("request timed out: {err}")
    } else {
        err.to_string()
    };
    JamfError::ConnectionFailed {
        url: url.to_string(),
        message,
    }
}
