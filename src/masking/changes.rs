//! Change set construction
//!
//! A change set is the ordered list of (original, fake) pairs for one
//! pipeline invocation. Changes are appended in [`CATEGORY_ORDER`];
//! that concatenation order is what resolves overlapping detections.

use crate::masking::models::{DetectedEntities, PiiCategory, CATEGORY_ORDER};
use crate::masking::synthesizer::Synthesizer;
use anyhow::{Context, Result};
use serde::Serialize;

/// One substitution pair produced for a detected value
#[derive(Debug, Clone, Serialize)]
pub struct Change {
    /// Category the value was detected under
    pub category: PiiCategory,
    /// The detected substring
    pub original: String,
    /// Its synthetic replacement
    pub fake: String,
}

/// Ordered sequence of changes for one invocation
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChangeSet {
    changes: Vec<Change>,
}

impl ChangeSet {
    /// Build a change set from detected entities.
    ///
    /// Categories are visited in the fixed processing order; an absent
    /// category simply contributes nothing.
    pub fn build(entities: &DetectedEntities, synthesizer: &mut Synthesizer) -> Result<Self> {
        let mut changes = Vec::with_capacity(entities.total());

        for category in CATEGORY_ORDER {
            for original in entities.values(category) {
                let fake = synthesizer
                    .synthesize(category, original)
                    .with_context(|| format!("synthesis failed for {category:?}"))?;
                changes.push(Change {
                    category,
                    original: original.clone(),
                    fake,
                });
            }
        }

        Ok(Self { changes })
    }

    /// Build a change set directly from pairs (testing and callers
    /// that manage their own synthesis)
    pub fn from_changes(changes: Vec<Change>) -> Self {
        Self { changes }
    }

    /// Iterate changes in application order
    pub fn iter(&self) -> impl Iterator<Item = &Change> {
        self.changes.iter()
    }

    /// Number of changes
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// True if no changes were produced
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

impl<'a> IntoIterator for &'a ChangeSet {
    type Item = &'a Change;
    type IntoIter = std::slice::Iter<'a, Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_respects_category_order() {
        let mut entities = DetectedEntities::new();
        // Insert in reverse of the processing order.
        entities.insert(PiiCategory::Phone, "5551234567");
        entities.insert(PiiCategory::Iban, "DE89370400440532013000");
        entities.insert(PiiCategory::Email, "a@example.com");

        let mut synth = Synthesizer::from_seed(1);
        let changes = ChangeSet::build(&entities, &mut synth).unwrap();

        let categories: Vec<PiiCategory> = changes.iter().map(|c| c.category).collect();
        assert_eq!(
            categories,
            [PiiCategory::Email, PiiCategory::Iban, PiiCategory::Phone]
        );
    }

    #[test]
    fn test_every_detected_value_gets_a_change() {
        let mut entities = DetectedEntities::new();
        entities.insert(PiiCategory::Email, "a@example.com");
        entities.insert(PiiCategory::Email, "b@example.com");
        entities.insert(PiiCategory::Name, "Alice Johnson");

        let mut synth = Synthesizer::from_seed(1);
        let changes = ChangeSet::build(&entities, &mut synth).unwrap();

        assert_eq!(changes.len(), 3);
        for change in &changes {
            assert!(!change.fake.is_empty());
        }
    }

    #[test]
    fn test_empty_entities_build_empty_set() {
        let entities = DetectedEntities::new();
        let mut synth = Synthesizer::from_seed(1);
        let changes = ChangeSet::build(&entities, &mut synth).unwrap();
        assert!(changes.is_empty());
    }
}
