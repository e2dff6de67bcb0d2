//! Report run orchestration
//!
//! This module provides:
//! - Transient artifact naming
//! - The run coordinator
//! - Run stages and summary reporting

pub mod artifacts;
pub mod coordinator;
pub mod summary;

pub use artifacts::{RunArtifacts, TIMESTAMP_FORMAT};
pub use coordinator::ReportCoordinator;
pub use summary::{RunStage, RunSummary};
