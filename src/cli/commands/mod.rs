//! CLI command implementations

pub mod init;
pub mod mask;
pub mod run;
pub mod scan;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Read input text from a file, or from stdin if no path is given
pub(crate) fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(Path::new(path))
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}
