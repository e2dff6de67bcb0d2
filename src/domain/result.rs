//! Result type alias for jamf-report
//!
//! Convenience alias that uses [`ReportError`] as the error type.

use super::errors::ReportError;

/// Result type alias for jamf-report operations
///
/// # Examples
///
/// ```
/// use jamf_report::domain::result::Result;
/// use jamf_report::domain::errors::ReportError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ReportError::Configuration("missing jss".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ReportError>;
