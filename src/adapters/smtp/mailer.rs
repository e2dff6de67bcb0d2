//! Mail transport abstraction and SMTP implementation

use super::message::ReportEmail;
use crate::config::{SmtpConfig, SmtpTls};
use crate::domain::{MailError, ReportError, Result};
use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use secrecy::ExposeSecret;
use std::time::Duration;

/// Delivers a finished report
///
/// The pipeline only talks to this trait, so delivery can be replaced by a
/// recording implementation in tests.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send one report email
    ///
    /// # Errors
    ///
    /// Returns an error if the message cannot be built or delivered.
    async fn send(&self, email: &ReportEmail) -> Result<()>;
}

/// Authenticated SMTP delivery through lettre
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    host: String,
    port: u16,
}

impl SmtpMailer {
    /// Build a transport for the configured relay
    ///
    /// No connection is opened until [`Mailer::send`].
    pub fn new(config: &SmtpConfig) -> Result<Self> {
        let builder = match config.tls {
            SmtpTls::StartTls => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                .map_err(|e| relay_error(&config.host, e))?,
            SmtpTls::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
                .map_err(|e| relay_error(&config.host, e))?,
            SmtpTls::None => {
                tracing::warn!(
                    smtp_server = %config.host,
                    "SMTP connection is not encrypted"
                );
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(config.host.as_str())
            }
        };

        let credentials = Credentials::new(
            config.username.clone(),
            config.key.expose_secret().as_ref().to_string(),
        );

        let transport = builder
            .port(config.port)
            .credentials(credentials)
            .timeout(Some(Duration::from_secs(config.timeout_seconds)))
            .build();

        Ok(Self {
            transport,
            host: config.host.clone(),
            port: config.port,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &ReportEmail) -> Result<()> {
        let message = email.to_message()?;

        tracing::debug!(
            smtp_server = %self.host,
            smtp_port = self.port,
            recipient = %email.recipient,
            attachment = %email.attachment_name,
            "Sending report email"
        );

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        tracing::info!(
            recipient = %email.recipient,
            attachment = %email.attachment_name,
            code = %response.code(),
            "Email sent"
        );
        Ok(())
    }
}

fn relay_error(host: &str, err: lettre::transport::smtp::Error) -> ReportError {
    ReportError::Configuration(format!("Invalid SMTP relay '{host}': {err}"))
}
