//! Run stages and summary reporting

use crate::domain::SearchId;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Forward-only progress of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RunStage {
    Init,
    Authenticated,
    Fetched,
    Converted,
    Sent,
    Cleaned,
}

impl fmt::Display for RunStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RunStage::Init => "init",
            RunStage::Authenticated => "authenticated",
            RunStage::Fetched => "fetched",
            RunStage::Converted => "converted",
            RunStage::Sent => "sent",
            RunStage::Cleaned => "cleaned",
        };
        f.write_str(s)
    }
}

/// Summary of one run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Search that was exported
    pub search_id: SearchId,

    /// Rows in the CSV, excluding the header
    pub devices: usize,

    /// Incomplete records dropped by the skip policy
    pub skipped: usize,

    /// CSV file name (attachment name)
    pub csv_file_name: String,

    /// CSV left on disk, only set for dry runs
    pub kept_csv: Option<PathBuf>,

    /// Whether the email went out
    pub email_sent: bool,

    /// Whether the run skipped delivery
    pub dry_run: bool,

    /// Last stage reached
    pub stage: RunStage,

    /// Wall-clock duration
    pub duration: Duration,
}

impl RunSummary {
    /// Create a summary for a run that has not started yet
    pub fn new(search_id: SearchId, csv_file_name: impl Into<String>, dry_run: bool) -> Self {
        Self {
            search_id,
            devices: 0,
            skipped: 0,
            csv_file_name: csv_file_name.into(),
            kept_csv: None,
            email_sent: false,
            dry_run,
            stage: RunStage::Init,
            duration: Duration::from_secs(0),
        }
    }

    /// Record the next stage
    pub fn advance(&mut self, stage: RunStage) {
        debug_assert!(stage > self.stage, "run stages only move forward");
        tracing::debug!(from = %self.stage, to = %stage, "Run stage transition");
        self.stage = stage;
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Whether every stage expected for this mode completed
    pub fn is_complete(&self) -> bool {
        if self.dry_run {
            self.stage >= RunStage::Converted
        } else {
            self.stage == RunStage::Cleaned && self.email_sent
        }
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            search_id = %self.search_id,
            devices = self.devices,
            skipped = self.skipped,
            csv = %self.csv_file_name,
            email_sent = self.email_sent,
            dry_run = self.dry_run,
            stage = %self.stage,
            duration_ms = self.duration.as_millis() as u64,
            "Run completed"
        );

        if self.skipped > 0 {
            tracing::warn!(
                skipped = self.skipped,
                "Some mobile_device records were incomplete and left out of the CSV"
            );
        }
    }
}
