// jamf-report - Jamf Pro advanced search to CSV email reporter
// Copyright (c) 2026 jamf-report Contributors
// Licensed under the MIT License

//! # jamf-report - Jamf Pro advanced search to CSV email
//!
//! jamf-report pulls one advanced mobile device search from a Jamf Pro
//! server, converts it to CSV and mails the file to a single recipient.
//!
//! ## Overview
//!
//! One run is a straight line:
//! - **Authenticate** against `/api/v1/auth/token` with HTTP Basic credentials
//! - **Fetch** `/JSSResource/advancedmobiledevicesearches/id/<id>` as XML
//! - **Convert** every `<mobile_device>` into a five-column CSV row
//! - **Send** the CSV as an attachment over authenticated SMTP
//! - **Clean up** the transient XML and CSV files
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (transform, pipeline)
//! - [`adapters`] - External integrations (Jamf Pro, SMTP)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Environment-driven configuration
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use jamf_report::config::load_config;
//! use jamf_report::core::pipeline::ReportCoordinator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config()?;
//!     let coordinator = ReportCoordinator::new(config, false)?;
//!
//!     let summary = coordinator.execute().await?;
//!
//!     println!("Sent {} devices in {}", summary.devices, summary.csv_file_name);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every stage returns [`domain::ReportError`]; the binary turns any error
//! into exit code 1.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
