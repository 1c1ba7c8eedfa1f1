//! Heuristic person-name extraction
//!
//! Default [`NameExtractor`] implementation. This is a lightweight
//! stand-in for a real NLP capability: it matches honorific-led names
//! and capitalized first+last pairs, filtered by a stopword list to
//! cut down sentence-initial false positives. Callers wanting higher
//! recall should plug in an NER-backed extractor through the trait.

use super::NameExtractor;
use regex::Regex;
use std::collections::HashSet;

/// Capitalized words that are common in prose but are not given names.
const STOPWORDS: &[&str] = &[
    "The", "This", "That", "These", "Those", "There", "Then", "They",
    "Contact", "Dear", "Hello", "Hi", "Please", "Thanks", "Thank",
    "Best", "Kind", "Regards", "Sincerely", "From", "Subject", "Sent",
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
    "Sunday", "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
    "New", "San", "Los", "Las", "North", "South", "East", "West",
    "United", "Bank", "Account", "Card", "Number", "Street", "Avenue",
];

/// Regex-heuristic name extractor
pub struct HeuristicNameExtractor {
    honorific: Regex,
    full_name: Regex,
    stopwords: HashSet<&'static str>,
}

impl HeuristicNameExtractor {
    /// Create an extractor with the built-in heuristics
    pub fn new() -> Self {
        // Both patterns are static and known-valid.
        let honorific = Regex::new(
            r"\b(?:Mr|Mrs|Ms|Dr|Prof|Sir)\.?\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)",
        )
        .expect("invalid honorific pattern");
        let full_name =
            Regex::new(r"\b([A-Z][a-z]+)\s+([A-Z][a-z]+)\b").expect("invalid full-name pattern");

        Self {
            honorific,
            full_name,
            stopwords: STOPWORDS.iter().copied().collect(),
        }
    }

    fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }
}

impl Default for HeuristicNameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl NameExtractor for HeuristicNameExtractor {
    fn extract_names(&self, text: &str) -> Vec<String> {
        let mut names = Vec::new();

        for capture in self.honorific.captures_iter(text) {
            if let Some(name) = capture.get(1) {
                names.push(name.as_str().to_string());
            }
        }

        for capture in self.full_name.captures_iter(text) {
            let (Some(first), Some(last)) = (capture.get(1), capture.get(2)) else {
                continue;
            };
            if self.is_stopword(first.as_str()) || self.is_stopword(last.as_str()) {
                continue;
            }
            names.push(format!("{} {}", first.as_str(), last.as_str()));
        }

        names
    }
}
