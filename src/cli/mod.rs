//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for jamf-report using clap.

pub mod commands;

use crate::config::loader::vars;
use crate::config::LoggingConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// jamf-report - Jamf Pro advanced search to CSV email
#[derive(Parser, Debug)]
#[command(name = "jamf-report")]
#[command(version, about, long_about = None)]
#[command(author = "jamf-report Contributors")]
pub struct Cli {
    /// Load environment variables from this file instead of ./.env
    #[arg(short, long, global = true)]
    pub env_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error) [env: log_level]
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Directory for JSON log files [env: log_dir]
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Populate the process environment from `--env-file`, or from `./.env`
    /// when no file was given
    ///
    /// Only one file is read. Variables already set in the process
    /// environment are left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit `--env-file` cannot be read or parsed.
    /// A missing or unreadable `./.env` is ignored.
    pub fn load_env(&self) -> Result<(), dotenvy::Error> {
        match &self.env_file {
            Some(path) => dotenvy::from_path(path),
            None => {
                let _ = dotenvy::dotenv();
                Ok(())
            }
        }
    }

    /// Logging settings from the flags, falling back to `log_level` and
    /// `log_dir` in the environment
    ///
    /// Call after [`Cli::load_env`] so values from the env file apply.
    pub fn logging_config(&self) -> LoggingConfig {
        let mut config = LoggingConfig::default();
        if let Some(level) = self
            .log_level
            .clone()
            .or_else(|| std::env::var(vars::LOG_LEVEL).ok())
        {
            config.level = level;
        }
        config.local_dir = self
            .log_dir
            .clone()
            .or_else(|| std::env::var_os(vars::LOG_DIR).map(PathBuf::from));
        config
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the advanced search, convert it to CSV and email it
    Run(commands::run::RunArgs),

    /// Validate the environment configuration
    ValidateConfig(commands::validate::ValidateArgs),

    /// Write a .env template with every supported variable
    Init(commands::init::InitArgs),
}
