//! External system integrations for jamf-report.
//!
//! - [`jamf`] - Jamf Pro API (token and Classic advanced search)
//! - [`smtp`] - Report email composition and delivery
//!
//! # Jamf Adapter
//!
//! ```rust,no_run
//! use jamf_report::adapters::jamf::JamfClient;
//! use jamf_report::config::{secret_string, JamfConfig};
//! use jamf_report::domain::SearchId;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = JamfConfig {
//!     base_url: "https://acme.jamfcloud.com".to_string(),
//!     username: "api_user".to_string(),
//!     password: secret_string("api_pw"),
//!     search_id: SearchId::new(12)?,
//!     timeout_seconds: 60,
//!     tls_verify: true,
//! };
//!
//! let client = JamfClient::new(&config)?;
//! let token = client.request_token().await?;
//! let xml = client.fetch_advanced_search(&token, config.search_id).await?;
//! # Ok(())
//! # }
//! ```

pub mod jamf;
pub mod smtp;
