//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for cloak using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Cloak - PII masking gateway
#[derive(Parser, Debug)]
#[command(name = "cloak")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "cloak.toml", env = "CLOAK_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CLOAK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full mask -> exchange -> restore round trip
    Run(commands::run::RunArgs),

    /// Mask text and print the masked form only
    Mask(commands::mask::MaskArgs),

    /// Scan text and report detected entities as JSON
    Scan(commands::scan::ScanArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
