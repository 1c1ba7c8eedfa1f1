//! Audit logger for masking operations
//!
//! Records one entry per pipeline invocation. Detected values are
//! SHA-256 hashed before they reach the log; plaintext PII is never
//! written.

use crate::masking::changes::ChangeSet;
use crate::masking::models::MaskingOutcome;
use anyhow::{Context, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Audit log entry
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    timestamp: String,
    invocation_id: String,
    change_count: usize,
    dry_run: bool,
    processing_time_ms: u64,
    detections: Vec<AuditDetection>,
}

/// Audit detection entry (with hashed PII)
#[derive(Debug, Serialize)]
struct AuditDetection {
    category: String,
    /// SHA-256 hash of the original value (never log plaintext PII)
    value_hash: String,
}

/// Audit logger for masking operations
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
}

impl AuditLogger {
    /// Create a new audit logger
    pub fn new(log_path: PathBuf, json_format: bool) -> Result<Self> {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create audit log directory: {}", parent.display())
            })?;
        }

        Ok(Self {
            log_path,
            json_format,
        })
    }

    /// Log one masking invocation
    pub fn log_masking(&self, outcome: &MaskingOutcome, changes: &ChangeSet) -> Result<()> {
        let entry = AuditLogEntry {
            timestamp: outcome.timestamp.to_rfc3339(),
            invocation_id: outcome.invocation_id.to_string(),
            change_count: outcome.change_count,
            dry_run: outcome.dry_run,
            processing_time_ms: outcome.processing_time_ms,
            detections: changes
                .iter()
                .map(|c| AuditDetection {
                    category: c.category.label().to_string(),
                    value_hash: hash_pii_value(&c.original),
                })
                .collect(),
        };

        self.write_entry(&entry)
    }

    /// Write an audit entry to the log file
    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open audit log: {}", self.log_path.display()))?;

        if self.json_format {
            let json_line =
                serde_json::to_string(entry).context("Failed to serialize audit entry")?;
            writeln!(file, "{json_line}").context("Failed to write audit entry")?;
        } else {
            writeln!(
                file,
                "[{}] Invocation: {} | Changes: {} | Time: {}ms",
                entry.timestamp, entry.invocation_id, entry.change_count, entry.processing_time_ms
            )
            .context("Failed to write audit entry")?;
        }

        Ok(())
    }
}

/// Hash a PII value using SHA-256
fn hash_pii_value(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")
}
