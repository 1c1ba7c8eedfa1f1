// Cloak - PII Masking Gateway
// Copyright (c) 2025 Cloak Contributors
// Licensed under the MIT License

use clap::Parser;
use cloak::cli::{Cli, Commands};
use cloak::config::LoggingConfig;
use cloak::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Console-only logging for the CLI; file logging is driven by the
    // config file for long-running deployments.
    let log_level = cli.log_level.as_deref().unwrap_or("info");
    let logging_config = LoggingConfig::default();
    let _logging_guard = match init_logging(log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "cloak starting");

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e:#}");
            5
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Run(args) => args.execute(&cli.config).await,
        Commands::Mask(args) => args.execute(&cli.config).await,
        Commands::Scan(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
    }
}
