//! Init command implementation
//!
//! Writes a commented default configuration file.

use crate::config::DEFAULT_CONFIG_TEMPLATE;
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = "cloak.toml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        if self.output.exists() && !self.force {
            eprintln!(
                "Refusing to overwrite {} (use --force)",
                self.output.display()
            );
            return Ok(2);
        }

        std::fs::write(&self.output, DEFAULT_CONFIG_TEMPLATE)
            .with_context(|| format!("Failed to write {}", self.output.display()))?;

        println!("Wrote {}", self.output.display());
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_init_writes_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cloak.toml");
        let args = InitArgs {
            output: path.clone(),
            force: false,
        };

        let code = args.execute().await.unwrap();
        assert_eq!(code, 0);
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_init_refuses_overwrite_without_force() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cloak.toml");
        std::fs::write(&path, "existing").unwrap();

        let args = InitArgs {
            output: path.clone(),
            force: false,
        };

        let code = args.execute().await.unwrap();
        assert_eq!(code, 2);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "existing");
    }
}
