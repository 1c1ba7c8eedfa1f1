//! Ordered textual substitution
//!
//! Applies a change set to text in either direction. The algorithm is
//! deliberately textual rather than span-indexed: each change replaces
//! every case-insensitive occurrence of its source value in the
//! *current* working text, so earlier replacements are visible to
//! later changes. That makes the pass non-idempotent when a fake
//! collides with unrelated text; the behavior is pinned by tests, not
//! hidden.

use crate::masking::changes::ChangeSet;
use anyhow::{Context, Result};
use regex::{NoExpand, RegexBuilder};

/// Substitution direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// original -> fake
    Mask,
    /// fake -> original
    Restore,
}

/// Apply a change set to `text`, change by change, in order.
///
/// Source values are escaped before the matcher is built, so a
/// detected value containing regex metacharacters is matched
/// literally. The containment check before replacing is an
/// optimization only; replacement of an absent source is a no-op.
pub fn apply(text: &str, changes: &ChangeSet, direction: Direction) -> Result<String> {
    let mut working = text.to_string();

    for change in changes {
        let (source, target) = match direction {
            Direction::Mask => (&change.original, &change.fake),
            Direction::Restore => (&change.fake, &change.original),
        };

        let matcher = RegexBuilder::new(&regex::escape(source))
            .case_insensitive(true)
            .build()
            .with_context(|| format!("invalid substitution matcher for {:?}", change.category))?;

        if matcher.is_match(&working) {
            working = matcher.replace_all(&working, NoExpand(target)).into_owned();
        }
    }

    Ok(working)
}

/// Replace every original with its fake
pub fn mask(text: &str, changes: &ChangeSet) -> Result<String> {
    apply(text, changes, Direction::Mask)
}

/// Replace every fake with its original
pub fn restore(text: &str, changes: &ChangeSet) -> Result<String> {
    apply(text, changes, Direction::Restore)
}
