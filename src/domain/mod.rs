//! Domain models and types for jamf-report.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`SearchId`])
//! - **Domain models** ([`DeviceRecord`])
//! - **Error types** ([`ReportError`], [`JamfError`], [`TransformError`], [`MailError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, ReportError>`]:
//!
//! ```rust
//! use jamf_report::domain::{ReportError, Result, SearchId};
//! use std::str::FromStr;
//!
//! fn parse(raw: &str) -> Result<SearchId> {
//!     SearchId::from_str(raw).map_err(ReportError::Configuration)
//! }
//!
//! assert!(parse("12").is_ok());
//! assert!(parse("twelve").is_err());
//! ```

pub mod device;
pub mod errors;
pub mod ids;
pub mod result;

// Re-export commonly used types for convenience
pub use device::{DeviceRecord, CSV_HEADER, XML_FIELDS};
pub use errors::{JamfError, MailError, ReportError, TransformError};
pub use ids::SearchId;
pub use result::Result;
