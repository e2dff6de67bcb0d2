//! Integration tests for configuration loading and validation
//!
//! These tests modify process environment variables and serialize on a mutex.

use jamf_report::config::loader::vars;
use jamf_report::config::{load_config, MissingFieldPolicy, SmtpTls};
use jamf_report::domain::ReportError;
use secrecy::ExposeSecret;
use std::sync::Mutex;
use tempfile::TempDir;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const ALL_VARS: [&str; 17] = [
    vars::JSS,
    vars::API_USER,
    vars::API_PW,
    vars::TMP_PATH,
    vars::EMAIL_API_USER,
    vars::EMAIL_API_KEY,
    vars::EMAIL_RECIPIENT,
    vars::SMTP_SERVER,
    vars::SMTP_SERVER_PORT,
    vars::SEARCH_ID,
    vars::EMAIL_SENDER,
    vars::EMAIL_SUBJECT,
    vars::SMTP_TLS,
    vars::HTTP_TIMEOUT_SECONDS,
    vars::SMTP_TIMEOUT_SECONDS,
    vars::API_TLS_VERIFY,
    vars::MISSING_FIELD_POLICY,
];

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    for name in ALL_VARS {
        std::env::remove_var(name);
    }
}

fn set_required(tmp: &TempDir) {
    std::env::set_var(vars::JSS, "https://acme.jamfcloud.com/");
    std::env::set_var(vars::API_USER, "reporter");
    std::env::set_var(vars::API_PW, "s3cret");
    std::env::set_var(vars::TMP_PATH, tmp.path());
    std::env::set_var(vars::EMAIL_API_USER, "apikey");
    std::env::set_var(vars::EMAIL_API_KEY, "SG.key");
    std::env::set_var(vars::EMAIL_RECIPIENT, "it@example.com");
    std::env::set_var(vars::SMTP_SERVER, "smtp.sendgrid.net");
    std::env::set_var(vars::SMTP_SERVER_PORT, "587");
    std::env::set_var(vars::SEARCH_ID, "12");
}

#[test]
fn test_load_required_only() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    let tmp = TempDir::new().unwrap();
    set_required(&tmp);

    let config = load_config().unwrap();

    assert_eq!(config.jamf.base_url, "https://acme.jamfcloud.com");
    assert_eq!(config.jamf.search_id.value(), 12);
    assert_eq!(config.jamf.password.expose_secret().as_ref(), "s3cret");
    assert_eq!(config.jamf.timeout_seconds, 60);
    assert!(config.jamf.tls_verify);
    assert_eq!(config.smtp.port, 587);
    assert_eq!(config.smtp.tls, SmtpTls::StartTls);
    assert_eq!(config.email.subject, "Advanced Mobile Device Search Results");
    assert_eq!(config.output.tmp_dir, tmp.path());
    assert_eq!(config.output.missing_field_policy, MissingFieldPolicy::Fail);

    cleanup_env_vars();
}

#[test]
fn test_load_with_optional_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    let tmp = TempDir::new().unwrap();
    set_required(&tmp);
    std::env::set_var(vars::EMAIL_SENDER, "jamf@example.com");
    std::env::set_var(vars::SMTP_TLS, "tls");
    std::env::set_var(vars::SMTP_SERVER_PORT, "465");
    std::env::set_var(vars::HTTP_TIMEOUT_SECONDS, "15");
    std::env::set_var(vars::MISSING_FIELD_POLICY, "skip");

    let config = load_config().unwrap();

    assert_eq!(config.email.sender, "jamf@example.com");
    assert_eq!(config.smtp.tls, SmtpTls::Tls);
    assert_eq!(config.smtp.port, 465);
    assert_eq!(config.jamf.timeout_seconds, 15);
    assert_eq!(config.output.missing_field_policy, MissingFieldPolicy::Skip);

    cleanup_env_vars();
}

#[test]
fn test_missing_variables_reported_together() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    let tmp = TempDir::new().unwrap();
    set_required(&tmp);
    std::env::remove_var(vars::API_PW);
    std::env::set_var(vars::SEARCH_ID, "   ");

    let err = load_config().unwrap_err();

    match err {
        ReportError::Configuration(message) => {
            assert!(message.contains("api_pw"));
            assert!(message.contains("search_id"));
            assert!(!message.contains("api_user"));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    cleanup_env_vars();
}

#[test]
fn test_invalid_port_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    let tmp = TempDir::new().unwrap();
    set_required(&tmp);
    std::env::set_var(vars::SMTP_SERVER_PORT, "smtp");

    assert!(matches!(load_config(), Err(ReportError::Configuration(_))));

    cleanup_env_vars();
}

#[test]
fn test_missing_tmp_dir_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    let tmp = TempDir::new().unwrap();
    set_required(&tmp);
    std::env::set_var(vars::TMP_PATH, tmp.path().join("does-not-exist"));

    let err = load_config().unwrap_err();
    assert!(err.to_string().contains("does-not-exist"));

    cleanup_env_vars();
}
