//! Domain error types
//!
//! Errors are domain-specific and don't leak third-party types to
//! callers of the library surface.

use thiserror::Error;

/// Main cloak error type
///
/// This is the primary error type used at the library boundary.
/// The masking pipeline itself reports failures through `anyhow`
/// with context; they are mapped here before reaching callers.
#[derive(Debug, Error)]
pub enum CloakError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Pattern library errors (unreadable file, invalid regex, unknown category)
    #[error("Pattern library error: {0}")]
    Pattern(String),

    /// Detection errors
    #[error("Detection error: {0}")]
    Detection(String),

    /// Substitution errors
    #[error("Substitution error: {0}")]
    Substitution(String),

    /// Validation errors (malformed input rejected at the boundary)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for CloakError {
    fn from(err: std::io::Error) -> Self {
        CloakError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for CloakError {
    fn from(err: serde_json::Error) -> Self {
        CloakError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for CloakError {
    fn from(err: toml::de::Error) -> Self {
        CloakError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Conversion from anyhow (masking pipeline internals)
impl From<anyhow::Error> for CloakError {
    fn from(err: anyhow::Error) -> Self {
        CloakError::Other(format!("{err:#}"))
    }
}
