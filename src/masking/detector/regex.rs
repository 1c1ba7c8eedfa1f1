//! Regex-based PII detector

use super::{patterns::PatternRegistry, PiiDetector};
use crate::masking::models::{DetectedEntities, PiiCategory, CATEGORY_ORDER};
use anyhow::Result;
use std::sync::Arc;

/// Regex-based PII detector
///
/// Applies every pattern registered for a category and returns the
/// deduplicated union of matches. No match is never an error: an empty
/// list is the normal result for clean text.
pub struct RegexDetector {
    registry: Arc<PatternRegistry>,
}

impl RegexDetector {
    /// Create a new regex detector with the built-in pattern library
    pub fn new() -> Result<Self> {
        let registry = PatternRegistry::default_patterns()?;
        Ok(Self {
            registry: Arc::new(registry),
        })
    }

    /// Create a new regex detector with a custom pattern registry
    pub fn with_registry(registry: PatternRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}

impl PiiDetector for RegexDetector {
    fn detect(&self, category: PiiCategory, text: &str) -> Result<Vec<String>> {
        let mut values: Vec<String> = Vec::new();

        if let Some(patterns) = self.registry.patterns_for_category(category) {
            for pattern in patterns {
                for matched in pattern.regex.find_iter(text) {
                    let value = matched.as_str();
                    if !values.iter().any(|v| v == value) {
                        values.push(value.to_string());
                    }
                }
            }
        }

        Ok(values)
    }

    fn detect_all(&self, text: &str) -> Result<DetectedEntities> {
        let mut entities = DetectedEntities::new();

        for category in CATEGORY_ORDER {
            // Person names come from the name extractor, not patterns.
            if category == PiiCategory::Name {
                continue;
            }
            for value in self.detect(category, text)? {
                entities.insert(category, value);
            }
        }

        Ok(entities)
    }
}
