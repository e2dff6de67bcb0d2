//! Configuration loader reading the process environment
//!
//! Variable names match the ones existing deployments already export
//! (`jss`, `api_user`, ...). Everything is read and validated up front so a
//! bad deployment fails before any network traffic.

use super::schema::{
    EmailConfig, JamfConfig, MissingFieldPolicy, OutputConfig, ReportConfig, SmtpConfig, SmtpTls,
    DEFAULT_BODY, DEFAULT_SENDER, DEFAULT_SUBJECT,
};
use super::secret::secret_string;
use crate::domain::errors::ReportError;
use crate::domain::result::Result;
use crate::domain::SearchId;
use std::path::PathBuf;
use std::str::FromStr;

/// Environment variable names
pub mod vars {
    /// Jamf Pro base URL
    pub const JSS: &str = "jss";
    /// Jamf API user
    pub const API_USER: &str = "api_user";
    /// Jamf API password
    pub const API_PW: &str = "api_pw";
    /// Directory for transient files
    pub const TMP_PATH: &str = "tmp_path";
    /// SMTP auth user
    pub const EMAIL_API_USER: &str = "email_api_user";
    /// SMTP auth key
    pub const EMAIL_API_KEY: &str = "email_api_key";
    /// Report recipient
    pub const EMAIL_RECIPIENT: &str = "email_recipient";
    /// SMTP relay host
    pub const SMTP_SERVER: &str = "smtp_server";
    /// SMTP relay port
    pub const SMTP_SERVER_PORT: &str = "smtp_server_port";
    /// Advanced search id
    pub const SEARCH_ID: &str = "search_id";

    pub const EMAIL_SENDER: &str = "email_sender";
    pub const EMAIL_SUBJECT: &str = "email_subject";
    pub const SMTP_TLS: &str = "smtp_tls";
    pub const HTTP_TIMEOUT_SECONDS: &str = "http_timeout_seconds";
    pub const SMTP_TIMEOUT_SECONDS: &str = "smtp_timeout_seconds";
    pub const API_TLS_VERIFY: &str = "api_tls_verify";
    pub const MISSING_FIELD_POLICY: &str = "missing_field_policy";

    /// Read by the command line, not by [`super::load_config`]
    pub const LOG_LEVEL: &str = "log_level";
    pub const LOG_DIR: &str = "log_dir";

    /// Variables without a default
    pub const REQUIRED: [&str; 10] = [
        JSS,
        API_USER,
        API_PW,
        TMP_PATH,
        EMAIL_API_USER,
        EMAIL_API_KEY,
        EMAIL_RECIPIENT,
        SMTP_SERVER,
        SMTP_SERVER_PORT,
        SEARCH_ID,
    ];
}

const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

/// Loads configuration from the process environment
///
/// Call `dotenvy::dotenv()` beforehand to pick up a `.env` file.
///
/// # Errors
///
/// Returns [`ReportError::Configuration`] if a required variable is missing,
/// a value cannot be parsed, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use jamf_report::config::load_config;
///
/// let config = load_config().expect("Failed to load config");
/// println!("search {}", config.jamf.search_id);
/// ```
pub fn load_config() -> Result<ReportConfig> {
    load_config_from(|name| std::env::var(name).ok())
}

/// Loads configuration through an arbitrary variable lookup
///
/// All missing required variables are reported together. Blank values count
/// as missing.
pub fn load_config_from<F>(lookup: F) -> Result<ReportConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    let missing: Vec<&str> = vars::REQUIRED
        .iter()
        .copied()
        .filter(|name| get(*name).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(ReportError::Configuration(format!(
            "Missing required environment variables: {}",
            missing.join(", ")
        )));
    }

    let required = |name: &str| get(name).unwrap_or_default();

    let config = ReportConfig {
        jamf: JamfConfig {
            base_url: required(vars::JSS).trim().trim_end_matches('/').to_string(),
            username: required(vars::API_USER),
            password: secret_string(required(vars::API_PW)),
            search_id: parse_var(vars::SEARCH_ID, &required(vars::SEARCH_ID))?,
            timeout_seconds: optional_var(&get, vars::HTTP_TIMEOUT_SECONDS)?
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            tls_verify: optional_var(&get, vars::API_TLS_VERIFY)?.unwrap_or(true),
        },
        smtp: SmtpConfig {
            host: required(vars::SMTP_SERVER).trim().to_string(),
            port: parse_var(vars::SMTP_SERVER_PORT, &required(vars::SMTP_SERVER_PORT))?,
            username: required(vars::EMAIL_API_USER),
            key: secret_string(required(vars::EMAIL_API_KEY)),
            tls: optional_var::<SmtpTls, _>(&get, vars::SMTP_TLS)?.unwrap_or_default(),
            timeout_seconds: optional_var(&get, vars::SMTP_TIMEOUT_SECONDS)?
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        },
        email: EmailConfig {
            sender: get(vars::EMAIL_SENDER).unwrap_or_else(|| DEFAULT_SENDER.to_string()),
            recipient: required(vars::EMAIL_RECIPIENT).trim().to_string(),
            subject: get(vars::EMAIL_SUBJECT).unwrap_or_else(|| DEFAULT_SUBJECT.to_string()),
            body: DEFAULT_BODY.to_string(),
        },
        output: OutputConfig {
            tmp_dir: PathBuf::from(required(vars::TMP_PATH)),
            missing_field_policy: optional_var::<MissingFieldPolicy, _>(
                &get,
                vars::MISSING_FIELD_POLICY,
            )?
            .unwrap_or_default(),
        },
    };

    config.validate().map_err(|e| {
        ReportError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    tracing::debug!(
        base_url = %config.jamf.base_url,
        search_id = %config.jamf.search_id,
        smtp_server = %config.smtp.host,
        smtp_port = config.smtp.port,
        "Configuration loaded"
    );

    Ok(config)
}

fn parse_var<T>(name: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e| {
        ReportError::Configuration(format!("Invalid value for {name} ('{raw}'): {e}"))
    })
}

fn optional_var<T, G>(get: &G, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    get(name).map(|raw| parse_var(name, &raw)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn base_env(tmp: &TempDir) -> HashMap<String, String> {
        let mut env = HashMap::new();
        env.insert("jss".to_string(), "https://acme.jamfcloud.com/".to_string());
        env.insert("api_user".to_string(), "api".to_string());
        env.insert("api_pw".to_string(), "secret".to_string());
        env.insert(
            "tmp_path".to_string(),
            tmp.path().to_string_lossy().to_string(),
        );
        env.insert("email_api_user".to_string(), "apikey".to_string());
        env.insert("email_api_key".to_string(), "SG.key".to_string());
        env.insert("email_recipient".to_string(), "it@example.com".to_string());
        env.insert("smtp_server".to_string(), "smtp.example.com".to_string());
        env.insert("smtp_server_port".to_string(), "587".to_string());
        env.insert("search_id".to_string(), "12".to_string());
        env
    }

    fn load(env: &HashMap<String, String>) -> Result<ReportConfig> {
        load_config_from(|k| env.get(k).cloned())
    }

    #[test]
    fn test_load_minimal_env() {
        let tmp = TempDir::new().unwrap();
        let config = load(&base_env(&tmp)).unwrap();

        assert_eq!(config.jamf.base_url, "https://acme.jamfcloud.com");
        assert_eq!(config.jamf.password.expose_secret().as_ref(), "secret");
        assert_eq!(config.jamf.search_id.value(), 12);
        assert_eq!(config.jamf.timeout_seconds, 60);
        assert!(config.jamf.tls_verify);
        assert_eq!(config.smtp.port, 587);
        assert_eq!(config.smtp.tls, SmtpTls::StartTls);
        assert_eq!(config.email.sender, DEFAULT_SENDER);
        assert_eq!(config.email.subject, DEFAULT_SUBJECT);
        assert_eq!(
            config.output.missing_field_policy,
            MissingFieldPolicy::Fail
        );
    }

    #[test]
    fn test_missing_vars_reported_together() {
        let tmp = TempDir::new().unwrap();
        let mut env = base_env(&tmp);
        env.remove("api_pw");
        env.remove("search_id");

        let err = load(&env).unwrap_err().to_string();
        assert!(err.contains("api_pw"));
        assert!(err.contains("search_id"));
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        let tmp = TempDir::new().unwrap();
        let mut env = base_env(&tmp);
        env.insert("smtp_server".to_string(), "   ".to_string());

        let err = load(&env).unwrap_err().to_string();
        assert!(err.contains("smtp_server"));
    }

    #[test]
    fn test_malformed_port() {
        let tmp = TempDir::new().unwrap();
        let mut env = base_env(&tmp);
        env.insert("smtp_server_port".to_string(), "smtp".to_string());

        let err = load(&env).unwrap_err().to_string();
        assert!(err.contains("smtp_server_port"));
    }

    #[test]
    fn test_malformed_search_id() {
        let tmp = TempDir::new().unwrap();
        let mut env = base_env(&tmp);
        env.insert("search_id".to_string(), "twelve".to_string());

        let err = load(&env).unwrap_err().to_string();
        assert!(err.contains("search_id"));
    }

    #[test]
    fn test_optional_overrides() {
        let tmp = TempDir::new().unwrap();
        let mut env = base_env(&tmp);
        env.insert("email_sender".to_string(), "mdm@example.com".to_string());
        env.insert("smtp_tls".to_string(), "tls".to_string());
        env.insert("http_timeout_seconds".to_string(), "15".to_string());
        env.insert("api_tls_verify".to_string(), "false".to_string());
        env.insert("missing_field_policy".to_string(), "skip".to_string());

        let config = load(&env).unwrap();
        assert_eq!(config.email.sender, "mdm@example.com");
        assert_eq!(config.smtp.tls, SmtpTls::Tls);
        assert_eq!(config.jamf.timeout_seconds, 15);
        assert!(!config.jamf.tls_verify);
        assert_eq!(
            config.output.missing_field_policy,
            MissingFieldPolicy::Skip
        );
    }

    #[test]
    fn test_invalid_optional_value() {
        let tmp = TempDir::new().unwrap();
        let mut env = base_env(&tmp);
        env.insert("api_tls_verify".to_string(), "sometimes".to_string());

        let err = load(&env).unwrap_err().to_string();
        assert!(err.contains("api_tls_verify"));
    }
}
