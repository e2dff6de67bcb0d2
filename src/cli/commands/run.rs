//! Run command implementation
//!
//! Loads the environment configuration and executes one report run.

use crate::config::load_config;
use crate::core::pipeline::ReportCoordinator;
use clap::Args;

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Fetch and convert, but do not send email; the CSV is kept
    #[arg(long)]
    pub dry_run: bool,
}

impl RunArgs {
    /// Execute the run command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(dry_run = self.dry_run, "Starting run command");

        let config = load_config()?;
        let coordinator = ReportCoordinator::new(config, self.dry_run)?;

        let summary = coordinator.execute().await?;
        summary.log_summary();

        if let Some(csv) = &summary.kept_csv {
            println!("Dry run complete: {} devices written to {}", summary.devices, csv.display());
        } else {
            println!(
                "Sent {} ({} devices) in {:.2}s",
                summary.csv_file_name,
                summary.devices,
                summary.duration.as_secs_f64()
            );
        }

        Ok(if summary.is_complete() { 0 } else { 1 })
    }
}
