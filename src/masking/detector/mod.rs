//! PII detection
//!
//! Trait-based detection seams: pattern-backed categories go through
//! [`PiiDetector`], person names through the pluggable [`NameExtractor`]
//! so tests and callers can substitute an NLP-backed implementation.

pub mod names;
pub mod patterns;
pub mod regex;

use crate::masking::models::{DetectedEntities, PiiCategory};
use anyhow::Result;

/// Trait for PII detection implementations
pub trait PiiDetector: Send + Sync {
    /// Detect the distinct values of one category present in `text`
    fn detect(&self, category: PiiCategory, text: &str) -> Result<Vec<String>>;

    /// Detect across all pattern-backed categories
    fn detect_all(&self, text: &str) -> Result<DetectedEntities>;
}

/// Person-name extraction capability
///
/// Any implementation that returns person-name mentions found in free
/// text satisfies this contract. The returned sequence may contain
/// duplicates; deduplication happens when names are merged into
/// [`DetectedEntities`].
pub trait NameExtractor: Send + Sync {
    /// Extract person names from free text
    fn extract_names(&self, text: &str) -> Vec<String>;
}
