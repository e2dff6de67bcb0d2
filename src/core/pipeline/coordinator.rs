//! Report coordinator - runs one export from token request to cleanup
//!
//! Stages are awaited one after another. Any failure stops the run and
//! nothing already done is rolled back.

use super::artifacts::RunArtifacts;
use super::summary::{RunStage, RunSummary};
use crate::adapters::jamf::JamfClient;
use crate::adapters::smtp::{Mailer, ReportEmail, SmtpMailer};
use crate::config::ReportConfig;
use crate::core::transform::convert_xml_to_csv;
use crate::domain::{ReportError, Result};
use chrono::Local;
use std::sync::Arc;
use std::time::Instant;

/// Report coordinator
pub struct ReportCoordinator {
    config: ReportConfig,
    jamf_client: JamfClient,
    mailer: Arc<dyn Mailer>,
    dry_run: bool,
}

impl ReportCoordinator {
    /// Create a coordinator that delivers through SMTP
    pub fn new(config: ReportConfig, dry_run: bool) -> Result<Self> {
        let mailer = Arc::new(SmtpMailer::new(&config.smtp)?);
        Self::with_mailer(config, mailer, dry_run)
    }

    /// Create a coordinator with an explicit mail transport
    pub fn with_mailer(
        config: ReportConfig,
        mailer: Arc<dyn Mailer>,
        dry_run: bool,
    ) -> Result<Self> {
        config.validate().map_err(ReportError::Configuration)?;
        let jamf_client = JamfClient::new(&config.jamf)?;

        Ok(Self {
            config,
            jamf_client,
            mailer,
            dry_run,
        })
    }

    /// Execute the report
    ///
    /// 1. Requests a bearer token
    /// 2. Saves the advanced search XML to the temp directory
    /// 3. Converts it to CSV and removes the XML
    /// 4. Emails the CSV and removes it (skipped on dry runs)
    pub async fn execute(&self) -> Result<RunSummary> {
        let start_time = Instant::now();
        let search_id = self.config.jamf.search_id;
        let artifacts = RunArtifacts::new(
            &self.config.output.tmp_dir,
            search_id,
            Local::now().naive_local(),
        );
        let mut summary = RunSummary::new(search_id, artifacts.csv_file_name(), self.dry_run);

        tracing::info!(
            search_id = %search_id,
            base_url = %self.jamf_client.base_url(),
            dry_run = self.dry_run,
            "Starting report run"
        );

        let token = self.jamf_client.request_token().await?;
        summary.advance(RunStage::Authenticated);

        self.jamf_client
            .save_advanced_search(&token, search_id, &artifacts.xml_path)
            .await?;
        summary.advance(RunStage::Fetched);

        let report = convert_xml_to_csv(
            &artifacts.xml_path,
            &artifacts.csv_path,
            self.config.output.missing_field_policy,
        )?;
        summary.devices = report.devices;
        summary.skipped = report.skipped;
        summary.advance(RunStage::Converted);

        if self.dry_run {
            tracing::info!(
                csv = %artifacts.csv_path.display(),
                "Dry run: email not sent, CSV kept"
            );
            summary.kept_csv = Some(artifacts.csv_path.clone());
            return Ok(summary.with_duration(start_time.elapsed()));
        }

        let email = ReportEmail::from_csv(&self.config.email, &artifacts.csv_path).await?;
        self.mailer.send(&email).await?;
        summary.email_sent = true;
        summary.advance(RunStage::Sent);

        tokio::fs::remove_file(&artifacts.csv_path)
            .await
            .map_err(|e| {
                ReportError::Io(format!(
                    "Failed to remove {}: {e}",
                    artifacts.csv_path.display()
                ))
            })?;
        summary.advance(RunStage::Cleaned);

        Ok(summary.with_duration(start_time.elapsed()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        secret_string, EmailConfig, JamfConfig, MissingFieldPolicy, OutputConfig, SmtpConfig,
        SmtpTls,
    };
    use crate::domain::SearchId;
    use async_trait::async_trait;

    struct NeverMailer;

    #[async_trait]
    impl Mailer for NeverMailer {
        async fn send(&self, _email: &ReportEmail) -> Result<()> {
            panic!("mailer must not be called");
        }
    }

    fn config(tmp_dir: std::path::PathBuf) -> ReportConfig {
        ReportConfig {
            jamf: JamfConfig {
                base_url: "https://acme.jamfcloud.com".to_string(),
                username: "api_user".to_string(),
                password: secret_string("api_pw"),
                search_id: SearchId::new(7).unwrap(),
                timeout_seconds: 5,
                tls_verify: true,
            },
            smtp: SmtpConfig {
                host: "smtp.example.com".to_string(),
                port: 587,
                username: "apikey".to_string(),
                key: secret_string("key"),
                tls: SmtpTls::StartTls,
                timeout_seconds: 5,
            },
            email: EmailConfig {
                sender: "reports@example.com".to_string(),
                recipient: "it@example.com".to_string(),
                subject: "s".to_string(),
                body: "b".to_string(),
            },
            output: OutputConfig {
                tmp_dir,
                missing_field_policy: MissingFieldPolicy::Fail,
            },
        }
    }

    #[test]
    fn test_rejects_missing_tmp_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = ReportCoordinator::with_mailer(
            config(dir.path().join("absent")),
            Arc::new(NeverMailer),
            false,
        );
        assert!(matches!(result, Err(ReportError::Configuration(_))));
    }

    #[test]
    fn test_accepts_valid_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = ReportCoordinator::with_mailer(
            config(dir.path().to_path_buf()),
            Arc::new(NeverMailer),
            true,
        );
        assert!(result.is_ok());
    }
}
