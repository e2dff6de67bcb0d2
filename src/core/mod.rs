//! Core business logic for jamf-report.
//!
//! # Modules
//!
//! - [`transform`] - Advanced search XML to CSV conversion
//! - [`pipeline`] - Artifact naming, run coordination and summaries
//!
//! # Example
//!
//! ```rust,no_run
//! use jamf_report::config::load_config;
//! use jamf_report::core::pipeline::ReportCoordinator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config()?;
//! let coordinator = ReportCoordinator::new(config, true)?;
//!
//! let summary = coordinator.execute().await?;
//! println!("Devices: {}", summary.devices);
//! println!("Kept CSV: {:?}", summary.kept_csv);
//! # Ok(())
//! # }
//! ```

pub mod pipeline;
pub mod transform;
