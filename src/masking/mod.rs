//! Masking module for cloak
//!
//! PII detection, synthesis, and reversible substitution for free-form
//! text. Text is scanned per category, every detected value gets a
//! format-plausible fake, the fakes are substituted in, and the same
//! change set later restores the originals in the third party's
//! response.
//!
//! # Architecture
//!
//! The pipeline consists of:
//! - **Detection**: regex pattern matching per category, plus a
//!   pluggable person-name extractor
//! - **Synthesis**: character-class-preserving replacement or
//!   category-template regeneration
//! - **Substitution**: ordered, case-insensitive, textual replace-all
//!   in either direction
//! - **Audit**: structured logging with hashed values
//!
//! # Usage
//!
//! ```rust,ignore
//! use cloak::masking::{MaskingEngine, MaskingConfig};
//!
//! let engine = MaskingEngine::new(MaskingConfig::default())?;
//! let restored = engine.process(text).await?;
//! ```

pub mod audit;
pub mod changes;
pub mod config;
pub mod detector;
pub mod engine;
pub mod models;
pub mod substitution;
pub mod synthesizer;

// Re-export main types
pub use changes::{Change, ChangeSet};
pub use config::MaskingConfig;
pub use engine::{MaskingEngine, PassthroughUpstream, Upstream};
pub use models::{DetectedEntities, MaskingOutcome, PiiCategory, CATEGORY_ORDER};
pub use synthesizer::Synthesizer;
