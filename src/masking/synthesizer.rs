//! Fake value synthesis
//!
//! Two strategies, chosen per category:
//! - character-class-preserving replacement (letter -> random letter,
//!   digit -> random digit, everything else copied), used for most
//!   pattern-backed categories;
//! - template regeneration for person names and phone numbers, where a
//!   structurally fresh value reads better than per-character noise.

use crate::masking::models::PiiCategory;
use anyhow::Result;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";

/// Synthesizes format-plausible replacement values.
///
/// Holds a non-cryptographic RNG; construct with [`Synthesizer::from_seed`]
/// in tests for deterministic output. Replacements are plausible-looking,
/// not security-grade anonymization.
pub struct Synthesizer {
    rng: StdRng,
}

impl Synthesizer {
    /// Create a synthesizer seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a deterministically seeded synthesizer
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Produce a fake replacement for one detected value.
    ///
    /// The fake is never empty. If synthesis happens to reproduce the
    /// original (short values make this possible), it is re-rolled a
    /// bounded number of times; a value with no letters or digits at
    /// all is returned as-is after the attempts run out.
    pub fn synthesize(&mut self, category: PiiCategory, original: &str) -> Result<String> {
        if original.is_empty() {
            anyhow::bail!("cannot synthesize a replacement for an empty value");
        }

        let mut fake = self.generate(category, original);
        for _ in 0..3 {
            if fake != original {
                break;
            }
            fake = self.generate(category, original);
        }

        Ok(fake)
    }

    fn generate(&mut self, category: PiiCategory, original: &str) -> String {
        match category {
            PiiCategory::Name => self.random_name(original.contains(' ')),
            PiiCategory::Phone => self.random_phone(),
            PiiCategory::Email => self.mask_email(original),
            PiiCategory::IpAddress
            | PiiCategory::Iban
            | PiiCategory::CreditCard
            | PiiCategory::Passport
            | PiiCategory::DriverLicense => self.mask_value(original),
        }
    }

    /// Character-class-preserving replacement over the whole value
    fn mask_value(&mut self, source: &str) -> String {
        source
            .chars()
            .map(|c| {
                if c.is_ascii_alphabetic() {
                    self.random_letter()
                } else if c.is_ascii_digit() {
                    self.random_digit()
                } else {
                    c
                }
            })
            .collect()
    }

    /// Regenerate the local part of an email, keeping the domain verbatim
    fn mask_email(&mut self, source: &str) -> String {
        match source.rfind('@') {
            Some(at) => {
                let local = self.mask_value(&source[..at]);
                format!("{}{}", local, &source[at..])
            }
            // Not shaped like an email after all; scramble the whole value.
            None => self.mask_value(source),
        }
    }

    /// Regenerate a person name: "First Last" or surname only
    fn random_name(&mut self, full: bool) -> String {
        let last: String = LastName().fake_with_rng(&mut self.rng);
        if full {
            let first: String = FirstName().fake_with_rng(&mut self.rng);
            format!("{first} {last}")
        } else {
            last
        }
    }

    /// Regenerate a grouped phone number, independent of the original's shape
    fn random_phone(&mut self) -> String {
        let country: u32 = self.rng.gen_range(1..999);
        let operator: u32 = self.rng.gen_range(1..999);
        let number: u32 = self.rng.gen_range(1..9_999_999);
        format!("{country:03} ({operator:03}) {number:07}")
    }

    fn random_letter(&mut self) -> char {
        LETTERS[self.rng.gen_range(0..LETTERS.len())] as char
    }

    fn random_digit(&mut self) -> char {
        DIGITS[self.rng.gen_range(0..DIGITS.len())] as char
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new()
    }
}
