//! Run command implementation
//!
//! Executes the full pipeline: detect, synthesize, mask, exchange with
//! the upstream boundary (passthrough by default), restore.

use crate::config;
use crate::masking::MaskingEngine;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Input file (stdin if omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Also print the masked form sent to the upstream boundary
    #[arg(long)]
    pub show_masked: bool,

    /// Detect and report without modifying text
    #[arg(long)]
    pub dry_run: bool,
}

impl RunArgs {
    /// Execute the run command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let mut config = match config::load_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Configuration error: {e}");
                return Ok(2);
            }
        };
        if self.dry_run {
            config.masking.dry_run = true;
        }

        let engine = MaskingEngine::new(config.masking)?;
        let text = super::read_input(self.input.as_ref())?;

        let outcome = engine.process_detailed(&text).await?;

        tracing::info!(
            invocation_id = %outcome.invocation_id,
            changes = outcome.change_count,
            "run complete"
        );

        if self.show_masked {
            println!("--- masked ---");
            println!("{}", outcome.masked_text);
            println!("--- restored ---");
        }
        println!("{}", outcome.restored_text);

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_args_defaults() {
        let args = RunArgs {
            input: None,
            show_masked: false,
            dry_run: false,
        };
        assert!(args.input.is_none());
        assert!(!args.show_masked);
    }
}
