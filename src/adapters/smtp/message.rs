//! Report email composition

use crate::config::EmailConfig;
use crate::domain::{MailError, ReportError, Result};
use lettre::message::header::{ContentTransferEncoding, ContentType};
use lettre::message::{Attachment, Body, Mailbox, MultiPart, SinglePart};
use lettre::Message;
use std::path::Path;

/// MIME type of the attached report
pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// Everything needed to send one report
///
/// Kept independent of the SMTP transport so a [`super::Mailer`] can be
/// swapped out in tests and still see exactly what would be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEmail {
    pub sender: String,
    pub recipient: String,
    pub subject: String,
    pub body: String,
    /// File name shown to the recipient, without directories
    pub attachment_name: String,
    /// Raw attachment bytes
    pub attachment: Vec<u8>,
}

impl ReportEmail {
    /// Reads the CSV at `csv_path` and pairs it with the configured envelope
    pub async fn from_csv(email: &EmailConfig, csv_path: &Path) -> Result<Self> {
        let attachment = tokio::fs::read(csv_path).await.map_err(|e| {
            ReportError::Io(format!(
                "Failed to read CSV attachment {}: {e}",
                csv_path.display()
            ))
        })?;

        let attachment_name = csv_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                MailError::Build(format!(
                    "Attachment path has no file name: {}",
                    csv_path.display()
                ))
            })?;

        Ok(Self {
            sender: email.sender.clone(),
            recipient: email.recipient.clone(),
            subject: email.subject.clone(),
            body: email.body.clone(),
            attachment_name,
            attachment,
        })
    }

    /// Builds the `multipart/mixed` MIME message
    ///
    /// The CSV goes out base64-encoded so arbitrary bytes survive transport.
    pub fn to_message(&self) -> std::result::Result<Message, MailError> {
        let from: Mailbox = self
            .sender
            .parse()
            .map_err(|_| MailError::InvalidAddress(self.sender.clone()))?;
        let to: Mailbox = self
            .recipient
            .parse()
            .map_err(|_| MailError::InvalidAddress(self.recipient.clone()))?;

        let content_type = ContentType::parse(CSV_CONTENT_TYPE)
            .map_err(|e| MailError::Build(format!("invalid content type: {e}")))?;
        let body = Body::new_with_encoding(self.attachment.clone(), ContentTransferEncoding::Base64)
            .map_err(|_| MailError::Build("attachment could not be base64 encoded".to_string()))?;
        let attachment = Attachment::new(self.attachment_name.clone()).body(body, content_type);

        Message::builder()
            .from(from)
            .to(to)
            .subject(self.subject.clone())
            .multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::plain(self.body.clone()))
                    .singlepart(attachment),
            )
            .map_err(|e| MailError::Build(e.to_string()))
    }
}
