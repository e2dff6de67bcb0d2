//! Configuration schema types
//!
//! [`ReportConfig`] is built once at startup by [`crate::config::load_config`]
//! and handed by reference to every pipeline stage.

use crate::config::SecretString;
use crate::domain::SearchId;
use secrecy::ExposeSecret;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Default email subject
pub const DEFAULT_SUBJECT: &str = "Advanced Mobile Device Search Results";

/// Default plain-text email body
pub const DEFAULT_BODY: &str =
    "This is the daily Advanced Mobile Device API pull delivered as a .CSV file.";

/// Default sender address
pub const DEFAULT_SENDER: &str = "jamf-report@localhost.localdomain";

/// How the SMTP connection is secured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SmtpTls {
    /// Plain connection upgraded with STARTTLS
    #[default]
    StartTls,
    /// Implicit TLS from the first byte (usually port 465)
    Tls,
    /// No encryption at all
    None,
}

impl FromStr for SmtpTls {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "starttls" => Ok(SmtpTls::StartTls),
            "tls" | "ssl" => Ok(SmtpTls::Tls),
            "none" | "plain" => Ok(SmtpTls::None),
            other => Err(format!(
                "Invalid SMTP TLS mode '{other}'. Must be one of: starttls, tls, none"
            )),
        }
    }
}

impl fmt::Display for SmtpTls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SmtpTls::StartTls => "starttls",
            SmtpTls::Tls => "tls",
            SmtpTls::None => "none",
        };
        f.write_str(s)
    }
}

/// What to do with a `<mobile_device>` that lacks one of the five fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingFieldPolicy {
    /// Abort the run
    #[default]
    Fail,
    /// Drop the record and keep going
    Skip,
}

impl FromStr for MissingFieldPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fail" => Ok(MissingFieldPolicy::Fail),
            "skip" => Ok(MissingFieldPolicy::Skip),
            other => Err(format!(
                "Invalid missing field policy '{other}'. Must be one of: fail, skip"
            )),
        }
    }
}

impl fmt::Display for MissingFieldPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingFieldPolicy::Fail => f.write_str("fail"),
            MissingFieldPolicy::Skip => f.write_str("skip"),
        }
    }
}

/// Root configuration
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Jamf Pro server and search settings
    pub jamf: JamfConfig,

    /// SMTP relay settings
    pub smtp: SmtpConfig,

    /// Message envelope and content
    pub email: EmailConfig,

    /// Temporary artifact settings
    pub output: OutputConfig,
}

impl ReportConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid value found
    pub fn validate(&self) -> Result<(), String> {
        self.jamf.validate()?;
        self.smtp.validate()?;
        self.email.validate()?;
        self.output.validate()?;
        Ok(())
    }
}

/// Jamf Pro API configuration
#[derive(Debug, Clone)]
pub struct JamfConfig {
    /// Server base URL without trailing slash, e.g. `https://acme.jamfcloud.com`
    pub base_url: String,

    /// API account user name
    pub username: String,

    /// API account password
    pub password: SecretString,

    /// Saved advanced mobile device search to export
    pub search_id: SearchId,

    /// Per-request timeout
    pub timeout_seconds: u64,

    /// TLS certificate verification enabled
    pub tls_verify: bool,
}

impl JamfConfig {
    fn validate(&self) -> Result<(), String> {
        let parsed = url::Url::parse(&self.base_url)
            .map_err(|e| format!("Invalid Jamf base URL '{}': {e}", self.base_url))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(format!(
                "Jamf base URL must use http or https, got '{}'",
                parsed.scheme()
            ));
        }
        if self.username.trim().is_empty() {
            return Err("Jamf API username cannot be empty".to_string());
        }
        if self.password.expose_secret().is_empty() {
            return Err("Jamf API password cannot be empty".to_string());
        }
        if self.timeout_seconds == 0 {
            return Err("HTTP timeout must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// SMTP relay configuration
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// Relay host name
    pub host: String,

    /// Relay port
    pub port: u16,

    /// SMTP auth user
    pub username: String,

    /// SMTP auth key or password
    pub key: SecretString,

    /// Connection security
    pub tls: SmtpTls,

    /// Session timeout
    pub timeout_seconds: u64,
}

impl SmtpConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("SMTP server cannot be empty".to_string());
        }
        if self.port == 0 {
            return Err("SMTP port must be between 1 and 65535".to_string());
        }
        if self.username.trim().is_empty() {
            return Err("SMTP username cannot be empty".to_string());
        }
        if self.timeout_seconds == 0 {
            return Err("SMTP timeout must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Email content configuration
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// `From` address
    pub sender: String,

    /// Single `To` address
    pub recipient: String,

    /// Subject line
    pub subject: String,

    /// Plain-text body
    pub body: String,
}

impl EmailConfig {
    fn validate(&self) -> Result<(), String> {
        self.sender
            .parse::<lettre::Address>()
            .map_err(|e| format!("Invalid sender address '{}': {e}", self.sender))?;
        self.recipient
            .parse::<lettre::Address>()
            .map_err(|e| format!("Invalid recipient address '{}': {e}", self.recipient))?;
        if self.subject.trim().is_empty() {
            return Err("Email subject cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Temporary artifact configuration
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Directory receiving the transient XML and CSV files
    pub tmp_dir: PathBuf,

    /// Handling of incomplete device records
    pub missing_field_policy: MissingFieldPolicy,
}

impl OutputConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.tmp_dir.is_dir() {
            return Err(format!(
                "Temp directory does not exist or is not a directory: {}",
                self.tmp_dir.display()
            ));
        }
        Ok(())
    }
}

/// Logging configuration
///
/// Comes from the command line (or its environment fallbacks) rather than
/// from [`ReportConfig`], because logging starts before the report
/// configuration is loaded.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Directory for JSON log files; console only when unset
    pub local_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            local_dir: None,
        }
    }
}
