//! Logging and observability
//!
//! Structured logging through `tracing`, with a console layer and an optional
//! JSON file layer.
//!
//! # Example
//!
//! ```no_run
//! use jamf_report::logging::init_logging;
//! use jamf_report::config::LoggingConfig;
//!
//! let _guard = init_logging(&LoggingConfig::default()).expect("Failed to initialize logging");
//! tracing::info!(search_id = 12, "Fetching advanced search");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the outcome of an API call
///
/// # Example
///
/// ```no_run
/// use jamf_report::log_http_response;
///
/// log_http_response!("https://acme.jamfcloud.com/api/v1/auth/token", 200);
/// ```
#[macro_export]
macro_rules! log_http_response {
    ($url:expr, $status:expr) => {
        tracing::info!(url = %$url, status = $status, "HTTP response received");
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use jamf_report::log_error_with_context;
/// use jamf_report::domain::ReportError;
///
/// let error = ReportError::Configuration("missing jss".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
