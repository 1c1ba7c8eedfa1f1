//! Scan command implementation
//!
//! Detection only: prints the detected entities as pretty JSON.

use crate::config;
use crate::masking::MaskingEngine;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Input file (stdin if omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

impl ScanArgs {
    /// Execute the scan command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match config::load_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Configuration error: {e}");
                return Ok(2);
            }
        };

        let engine = MaskingEngine::new(config.masking)?;
        let text = super::read_input(self.input.as_ref())?;

        let entities = engine.scan(&text)?;
        tracing::info!(detected = entities.total(), "scan complete");

        println!("{}", serde_json::to_string_pretty(&entities)?);

        Ok(0)
    }
}
