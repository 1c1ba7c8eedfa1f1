//! Masking configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Masking pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskingConfig {
    /// Run the name extractor alongside the pattern detectors
    #[serde(default = "default_name_extraction")]
    pub name_extraction: bool,

    /// Detect and synthesize but return the input text unmodified
    #[serde(default)]
    pub dry_run: bool,

    /// Path to a pattern library TOML file (built-in patterns if unset)
    pub pattern_library: Option<PathBuf>,

    /// Audit logging configuration
    #[serde(default)]
    pub audit: AuditConfig,
}

fn default_name_extraction() -> bool {
    true
}

impl Default for MaskingConfig {
    fn default() -> Self {
        Self {
            name_extraction: default_name_extraction(),
            dry_run: false,
            pattern_library: None,
            audit: AuditConfig::default(),
        }
    }
}

impl MaskingConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(ref path) = self.pattern_library {
            if !path.exists() {
                anyhow::bail!("Pattern library file not found: {}", path.display());
            }
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                anyhow::bail!("Pattern library must be a TOML file: {}", path.display());
            }
        }

        self.audit.validate().context("Invalid audit configuration")?;

        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("CLOAK_MASKING_NAME_EXTRACTION") {
            self.name_extraction = val
                .parse()
                .context("Invalid CLOAK_MASKING_NAME_EXTRACTION value")?;
        }

        if let Ok(val) = std::env::var("CLOAK_MASKING_DRY_RUN") {
            self.dry_run = val.parse().context("Invalid CLOAK_MASKING_DRY_RUN value")?;
        }

        if let Ok(val) = std::env::var("CLOAK_MASKING_PATTERN_LIBRARY") {
            self.pattern_library = Some(PathBuf::from(val));
        }

        self.audit.apply_env_overrides()?;

        Ok(())
    }
}

/// Audit logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable audit logging
    #[serde(default)]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON format for audit logs
    #[serde(default = "default_audit_json_format")]
    pub json_format: bool,
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/masking.log")
}

fn default_audit_json_format() -> bool {
    true
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: default_audit_log_path(),
            json_format: default_audit_json_format(),
        }
    }
}

impl AuditConfig {
    /// Validate audit configuration
    pub fn validate(&self) -> Result<()> {
        if self.enabled {
            if let Some(parent) = self.log_path.parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!(
                            "Failed to create audit log directory: {}",
                            parent.display()
                        )
                    })?;
                }
            }
        }
        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("CLOAK_AUDIT_ENABLED") {
            self.enabled = val.parse().context("Invalid CLOAK_AUDIT_ENABLED value")?;
        }

        if let Ok(val) = std::env::var("CLOAK_AUDIT_LOG_PATH") {
            self.log_path = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("CLOAK_AUDIT_JSON_FORMAT") {
            self.json_format = val.parse().context("Invalid CLOAK_AUDIT_JSON_FORMAT value")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MaskingConfig::default();
        assert!(config.name_extraction);
        assert!(!config.dry_run);
        assert!(config.pattern_library.is_none());
        assert!(!config.audit.enabled);
        assert!(config.audit.json_format);
    }

    #[test]
    fn test_default_config_validates() {
        let config = MaskingConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_pattern_library_rejected() {
        let config = MaskingConfig {
            pattern_library: Some(PathBuf::from("/nonexistent/patterns.toml")),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_toml_pattern_library_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patterns.yaml");
        std::fs::write(&path, "").unwrap();

        let config = MaskingConfig {
            pattern_library: Some(path),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
