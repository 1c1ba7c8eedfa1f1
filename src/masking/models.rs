//! Masking data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// PII category enumeration
///
/// Each category owns its own detection pattern set and synthesis rule.
/// Categories are independent namespaces: the same substring may be
/// detected under more than one category (a long digit run can match
/// both the phone fallback and a credit-card pattern). Overlaps are
/// resolved only by [`CATEGORY_ORDER`], never by mutual exclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PiiCategory {
    /// Email addresses
    Email,
    /// IP addresses (v4 and v6)
    IpAddress,
    /// International bank account numbers
    Iban,
    /// Credit card numbers
    CreditCard,
    /// Person names
    Name,
    /// Passport numbers
    Passport,
    /// Telephone numbers
    Phone,
    /// Driver license numbers
    DriverLicense,
}

impl PiiCategory {
    /// Get human-readable label for the category
    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "EMAIL",
            Self::IpAddress => "IP_ADDRESS",
            Self::Iban => "IBAN",
            Self::CreditCard => "CREDIT_CARD",
            Self::Name => "PERSON",
            Self::Passport => "PASSPORT",
            Self::Phone => "PHONE",
            Self::DriverLicense => "DRIVER_LICENSE",
        }
    }
}

/// Fixed category processing order.
///
/// Because substitution is textual rather than span-indexed, a later
/// category's replacement can re-match text introduced by an earlier
/// one. This order is the load-bearing tie-break for overlapping
/// matches and must not be changed without pinning new behavior.
pub const CATEGORY_ORDER: [PiiCategory; 8] = [
    PiiCategory::Email,
    PiiCategory::IpAddress,
    PiiCategory::Iban,
    PiiCategory::CreditCard,
    PiiCategory::Name,
    PiiCategory::Passport,
    PiiCategory::Phone,
    PiiCategory::DriverLicense,
];

/// Distinct substrings detected per category in one unit of text.
///
/// Values within a category are deduplicated and keep insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectedEntities {
    entries: HashMap<PiiCategory, Vec<String>>,
}

impl DetectedEntities {
    /// Create an empty entity map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a detected value, collapsing duplicates within the category.
    ///
    /// Returns `true` if the value was not already present.
    pub fn insert(&mut self, category: PiiCategory, value: impl Into<String>) -> bool {
        let value = value.into();
        let values = self.entries.entry(category).or_default();
        if values.iter().any(|v| *v == value) {
            return false;
        }
        values.push(value);
        true
    }

    /// Insert every value from an iterator
    pub fn extend(&mut self, category: PiiCategory, values: impl IntoIterator<Item = String>) {
        for value in values {
            self.insert(category, value);
        }
    }

    /// Detected values for one category (empty slice if none)
    pub fn values(&self, category: PiiCategory) -> &[String] {
        self.entries
            .get(&category)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// True if no category detected anything
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(|v| v.is_empty())
    }

    /// Total number of detected values across categories
    pub fn total(&self) -> usize {
        self.entries.values().map(|v| v.len()).sum()
    }

    /// Detection counts per category
    pub fn stats_by_category(&self) -> HashMap<PiiCategory, usize> {
        self.entries
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(category, values)| (*category, values.len()))
            .collect()
    }
}

/// Result of one full masking round trip
#[derive(Debug, Clone, Serialize)]
pub struct MaskingOutcome {
    /// Unique id for this pipeline invocation
    pub invocation_id: Uuid,
    /// Text with originals replaced by fakes
    pub masked_text: String,
    /// Upstream response with fakes replaced by originals
    pub restored_text: String,
    /// Number of (original, fake) pairs applied
    pub change_count: usize,
    /// Detection counts per category
    pub stats_by_category: HashMap<PiiCategory, usize>,
    /// Whether the run detected but did not substitute
    pub dry_run: bool,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Timestamp of the invocation
    pub timestamp: DateTime<Utc>,
}
