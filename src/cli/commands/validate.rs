//! Validate config command implementation
//!
//! Loads and validates the environment configuration without touching the
//! network, then prints a summary with secrets left out.

use crate::config::{load_config, ReportConfig};
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!("Validating configuration");

        println!("🔍 Validating environment configuration");
        println!();

        match load_config() {
            Ok(config) => {
                println!("✅ Configuration is valid");
                println!();
                println!("{}", summarize(&config));
                Ok(0)
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(1)
            }
        }
    }
}

/// Human-readable configuration summary; passwords and keys are never shown
pub fn summarize(config: &ReportConfig) -> String {
    let mut lines = vec!["Configuration Summary:".to_string()];
    lines.push(format!("  Jamf Server: {}", config.jamf.base_url));
    lines.push(format!("  Jamf User: {}", config.jamf.username));
    lines.push(format!("  Search ID: {}", config.jamf.search_id));
    lines.push(format!("  HTTP Timeout: {}s", config.jamf.timeout_seconds));
    if !config.jamf.tls_verify {
        lines.push("  TLS Verification: DISABLED".to_string());
    }
    lines.push(format!(
        "  SMTP Relay: {}:{} ({})",
        config.smtp.host, config.smtp.port, config.smtp.tls
    ));
    lines.push(format!("  SMTP User: {}", config.smtp.username));
    lines.push(format!("  Sender: {}", config.email.sender));
    lines.push(format!("  Recipient: {}", config.email.recipient));
    lines.push(format!("  Subject: {}", config.email.subject));
    lines.push(format!("  Temp Directory: {}", config.output.tmp_dir.display()));
    lines.push(format!(
        "  Missing Field Policy: {}",
        config.output.missing_field_policy
    ));
    lines.join("\n")
}
