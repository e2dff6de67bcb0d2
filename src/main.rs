// jamf-report - Jamf Pro advanced search to CSV email reporter
// Copyright (c) 2026 jamf-report Contributors
// Licensed under the MIT License

use clap::Parser;
use jamf_report::cli::{Cli, Commands};
use jamf_report::log_error_with_context;
use jamf_report::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load environment variables from --env-file, or ./.env if present
    if let Err(e) = cli.load_env() {
        eprintln!("Failed to load environment file: {e}");
        process::exit(1);
    }

    let log_guard = match init_logging(&cli.logging_config()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(1);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        file_logging = log_guard.has_file_output(),
        "jamf-report - Jamf Pro advanced search reporter"
    );

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            log_error_with_context!(e, "Command execution failed");
            eprintln!("Error: {e}");
            1
        }
    };

    // process::exit skips destructors, so flush file logs first
    drop(log_guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Run(args) => args.execute().await,
        Commands::ValidateConfig(args) => args.execute().await,
        Commands::Init(args) => args.execute().await,
    }
}
