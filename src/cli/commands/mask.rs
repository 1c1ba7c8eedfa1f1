//! Mask command implementation
//!
//! Detects PII and prints the masked text, without the restore leg.
//! This is the form you would forward to an untrusted third party.

use crate::config;
use crate::masking::MaskingEngine;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the mask command
#[derive(Args, Debug)]
pub struct MaskArgs {
    /// Input file (stdin if omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

impl MaskArgs {
    /// Execute the mask command
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
        let changes = engine.build_change_set(&entities)?;
        let masked = engine.mask(&text, &changes)?;

        tracing::info!(changes = changes.len(), "mask complete");
        println!("{masked}");

        Ok(0)
    }
}
