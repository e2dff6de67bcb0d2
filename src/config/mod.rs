//! Configuration management for jamf-report.
//!
//! Configuration comes from environment variables, optionally seeded from a
//! `.env` file. It is loaded once, validated eagerly, and passed explicitly
//! to each pipeline stage.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use jamf_report::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let _ = dotenvy::dotenv();
//! let config = load_config()?;
//!
//! println!("Jamf server: {}", config.jamf.base_url);
//! println!("Search: {}", config.jamf.search_id);
//! println!("Recipient: {}", config.email.recipient);
//! # Ok(())
//! # }
//! ```
//!
//! # Environment Variables
//!
//! Required: `jss`, `api_user`, `api_pw`, `tmp_path`, `email_api_user`,
//! `email_api_key`, `email_recipient`, `smtp_server`, `smtp_server_port`,
//! `search_id`.
//!
//! Optional: `email_sender`, `email_subject`, `smtp_tls`
//! (`starttls`/`tls`/`none`), `http_timeout_seconds`, `smtp_timeout_seconds`,
//! `api_tls_verify`, `missing_field_policy` (`fail`/`skip`).

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, load_config_from};
pub use schema::{
    EmailConfig, JamfConfig, LoggingConfig, MissingFieldPolicy, OutputConfig, ReportConfig,
    SmtpConfig, SmtpTls,
};
pub use secret::{secret_string, SecretString, SecretValue};
