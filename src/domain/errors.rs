//! Domain error types
//!
//! This module defines the error hierarchy for jamf-report.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main jamf-report error type
///
/// This is the primary error type used throughout the application.
/// Every pipeline stage returns it, and the binary maps it to an exit code
/// in one place.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Jamf Pro API errors
    #[error("Jamf API error: {0}")]
    Jamf(#[from] JamfError),

    /// XML to CSV conversion errors
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    /// Email delivery errors
    #[error("Mail error: {0}")]
    Mail(#[from] MailError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Jamf Pro API errors
///
/// These errors don't expose third-party HTTP client types.
#[derive(Debug, Error)]
pub enum JamfError {
    /// Request never produced a response (DNS, TLS, connect, timeout)
    #[error("Failed to connect to {url}: {message}")]
    ConnectionFailed { url: String, message: String },

    /// Server answered with a status other than 200 or 201
    #[error("response returned for {url} [{status}]")]
    UnexpectedStatus { url: String, status: u16 },

    /// Response body could not be interpreted
    #[error("Invalid response from {url}: {message}")]
    InvalidResponse { url: String, message: String },
}

/// Errors raised while turning the advanced search XML into CSV
#[derive(Debug, Error)]
pub enum TransformError {
    /// Document is not well-formed XML
    #[error("Malformed XML: {0}")]
    MalformedXml(String),

    /// A device record lacks one of the required child elements
    ///
    /// `index` is 0-based; the message counts records from 1.
    #[error("mobile_device record #{} is missing required field <{field}>", .index + 1)]
    MissingField { index: usize, field: &'static str },

    /// CSV output could not be written
    #[error("Failed to write CSV {path}: {message}")]
    CsvWrite { path: String, message: String },
}

/// Email composition and delivery errors
#[derive(Debug, Error)]
pub enum MailError {
    /// Sender or recipient is not a valid mailbox
    #[error("Invalid email address '{0}'")]
    InvalidAddress(String),

    /// Message could not be assembled
    #[error("Failed to build message: {0}")]
    Build(String),

    /// SMTP session or delivery failed
    #[error("SMTP delivery failed: {0}")]
    Transport(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::Io(err.to_string())
    }
}
