//! Configuration management
//!
//! TOML configuration file (`cloak.toml`) with environment variable
//! overrides (`CLOAK_*`). Every section has defaults, so a missing
//! file yields a fully working configuration.

use crate::domain::{CloakError, Result};
use crate::masking::MaskingConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CloakConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Masking pipeline settings
    #[serde(default)]
    pub masking: MaskingConfig,
}

/// Application-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Default log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log file directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily or hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl CloakConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        match self.application.log_level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(CloakError::Configuration(format!(
                    "Invalid log level: {other}. Must be one of: trace, debug, info, warn, error"
                )))
            }
        }

        match self.logging.local_rotation.as_str() {
            "daily" | "hourly" => {}
            other => {
                return Err(CloakError::Configuration(format!(
                    "Invalid log rotation: {other}. Must be daily or hourly"
                )))
            }
        }

        self.masking
            .validate()
            .map_err(|e| CloakError::Configuration(format!("{e:#}")))?;

        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(level) = std::env::var("CLOAK_LOG_LEVEL") {
            self.application.log_level = level;
        }

        self.masking
            .apply_env_overrides()
            .map_err(|e| CloakError::Configuration(format!("{e:#}")))?;

        Ok(())
    }
}

/// Load configuration from a TOML file, applying env overrides and validating
pub fn load_config(path: &str) -> Result<CloakConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        CloakError::Configuration(format!("Failed to read config file {path}: {e}"))
    })?;

    let mut config: CloakConfig = toml::from_str(&content)?;
    config.apply_env_overrides()?;
    config.validate()?;

    Ok(config)
}

/// Load configuration, falling back to defaults if the file is absent
pub fn load_or_default(path: &str) -> Result<CloakConfig> {
    if Path::new(path).exists() {
        load_config(path)
    } else {
        tracing::debug!(config_path = %path, "config file not found, using defaults");
        let mut config = CloakConfig::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }
}

/// Template written by `cloak init`
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Cloak configuration

[application]
# trace, debug, info, warn, error
log_level = "info"

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"

[masking]
# Run the person-name extractor alongside the pattern detectors.
name_extraction = true
# Detect and report without modifying text.
dry_run = false
# Uncomment to override the built-in pattern library.
# pattern_library = "./patterns/pii_patterns.toml"

[masking.audit]
enabled = false
log_path = "./audit/masking.log"
json_format = true
"#;
