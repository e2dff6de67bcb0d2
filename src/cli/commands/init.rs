//! Init command implementation
//!
//! Writes a commented `.env` template listing every variable the loader
//! understands.

use crate::config::loader::vars;
use crate::config::schema::{DEFAULT_SENDER, DEFAULT_SUBJECT};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the template
    #[arg(short, long, default_value = ".env")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output.display(), "Initializing environment template");

        if self.output.exists() && !self.force {
            println!("❌ File already exists: {}", self.output.display());
            println!("   Use --force to overwrite");
            return Ok(1);
        }

        match fs::write(&self.output, env_template()) {
            Ok(_) => {
                println!("✅ Template created: {}", self.output.display());
                println!();
                println!("Next steps:");
                println!("  1. Fill in the required values in {}", self.output.display());
                println!("  2. Validate: jamf-report validate-config");
                println!("  3. Try it without sending: jamf-report run --dry-run");
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write template");
                println!("   Error: {e}");
                Ok(1)
            }
        }
    }
}

/// Contents of the generated `.env` file
pub fn env_template() -> String {
    format!(
        r#"# jamf-report environment
# Required

# Jamf Pro server, e.g. https://acme.jamfcloud.com
{jss}=
{api_user}=
{api_pw}=
# Advanced mobile device search id
{search_id}=
# Existing directory for the transient XML and CSV files
{tmp_path}=/tmp

{smtp_server}=
{smtp_server_port}=587
{email_api_user}=
{email_api_key}=
{email_recipient}=

# Optional

# {email_sender}={sender}
# {email_subject}={subject}
# starttls | tls | none
# {smtp_tls}=starttls
# {http_timeout_seconds}=60
# {smtp_timeout_seconds}=60
# {api_tls_verify}=true
# fail | skip
# {missing_field_policy}=fail
# {log_level}=info
# {log_dir}=./logs
"#,
        jss = vars::JSS,
        api_user = vars::API_USER,
        api_pw = vars::API_PW,
        search_id = vars::SEARCH_ID,
        tmp_path = vars::TMP_PATH,
        smtp_server = vars::SMTP_SERVER,
        smtp_server_port = vars::SMTP_SERVER_PORT,
        email_api_user = vars::EMAIL_API_USER,
        email_api_key = vars::EMAIL_API_KEY,
        email_recipient = vars::EMAIL_RECIPIENT,
        email_sender = vars::EMAIL_SENDER,
        sender = DEFAULT_SENDER,
        email_subject = vars::EMAIL_SUBJECT,
        subject = DEFAULT_SUBJECT,
        smtp_tls = vars::SMTP_TLS,
        http_timeout_seconds = vars::HTTP_TIMEOUT_SECONDS,
        smtp_timeout_seconds = vars::SMTP_TIMEOUT_SECONDS,
        api_tls_verify = vars::API_TLS_VERIFY,
        missing_field_policy = vars::MISSING_FIELD_POLICY,
        log_level = vars::LOG_LEVEL,
        log_dir = vars::LOG_DIR,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_template_lists_every_required_variable() {
        let template = env_template();
        for name in vars::REQUIRED {
            assert!(
                template.lines().any(|line| line.starts_with(&format!("{name}="))),
                "{name} missing from template"
            );
        }
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join(".env");
        fs::write(&output, "keep me").unwrap();

        let args = InitArgs {
            output: output.clone(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 1);
        assert_eq!(fs::read_to_string(&output).unwrap(), "keep me");

        let args = InitArgs {
            output: output.clone(),
            force: true,
        };
        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(fs::read_to_string(&output).unwrap().contains("jss="));
    }
}
