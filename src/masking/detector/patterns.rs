//! Pattern library for PII detection

use crate::masking::models::PiiCategory;
use anyhow::{Context, Result};
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;

/// Pattern definition from TOML
#[derive(Debug, Clone, serde::Deserialize)]
pub struct PatternDefinition {
    /// Regex patterns for this category
    pub patterns: Vec<String>,
    /// PII category label
    pub category: String,
}

/// Compiled pattern with its category
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Compiled regex
    pub regex: Regex,
    /// PII category
    pub category: PiiCategory,
}

/// Pattern library container
#[derive(Debug, serde::Deserialize)]
struct PatternLibrary {
    patterns: HashMap<String, PatternDefinition>,
}

/// Pattern registry for PII detection
pub struct PatternRegistry {
    patterns_by_category: HashMap<PiiCategory, Vec<CompiledPattern>>,
}

impl PatternRegistry {
    /// Create a new pattern registry from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!(
                "Failed to read pattern library: {}",
                path.as_ref().display()
            )
        })?;

        Self::from_toml(&content)
    }

    /// Create a pattern registry from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let library: PatternLibrary =
            toml::from_str(content).context("Failed to parse pattern library TOML")?;

        let mut patterns_by_category: HashMap<PiiCategory, Vec<CompiledPattern>> = HashMap::new();

        for (name, def) in library.patterns {
            let category = Self::parse_category(&def.category).with_context(|| {
                format!("Invalid category in pattern '{}': {}", name, def.category)
            })?;

            for pattern_str in &def.patterns {
                let regex = Regex::new(pattern_str)
                    .with_context(|| format!("Invalid regex in pattern '{name}': {pattern_str}"))?;

                patterns_by_category
                    .entry(category)
                    .or_default()
                    .push(CompiledPattern { regex, category });
            }
        }

        Ok(Self {
            patterns_by_category,
        })
    }

    /// Create a registry with the built-in pattern library
    pub fn default_patterns() -> Result<Self> {
        let default_toml = include_str!("../../../patterns/pii_patterns.toml");
        Self::from_toml(default_toml)
    }

    /// Get patterns for a specific category
    pub fn patterns_for_category(&self, category: PiiCategory) -> Option<&[CompiledPattern]> {
        self.patterns_by_category
            .get(&category)
            .map(|v| v.as_slice())
    }

    /// Total number of compiled patterns
    pub fn len(&self) -> usize {
        self.patterns_by_category.values().map(|v| v.len()).sum()
    }

    /// True if the registry holds no patterns
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse category string to PiiCategory enum
    fn parse_category(s: &str) -> Result<PiiCategory> {
        match s.to_uppercase().as_str() {
            "EMAIL" => Ok(PiiCategory::Email),
            "IP_ADDRESS" => Ok(PiiCategory::IpAddress),
            "IBAN" => Ok(PiiCategory::Iban),
            "CREDIT_CARD" => Ok(PiiCategory::CreditCard),
            "NAME" | "PERSON" => Ok(PiiCategory::Name),
            "PASSPORT" => Ok(PiiCategory::Passport),
            "PHONE" => Ok(PiiCategory::Phone),
            "DRIVER_LICENSE" => Ok(PiiCategory::DriverLicense),
            _ => anyhow::bail!("Unknown PII category: {s}"),
        }
    }
}
