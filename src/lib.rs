// Cloak - PII Masking Gateway
// Copyright (c) 2025 Cloak Contributors
// Licensed under the MIT License

//! # Cloak - PII masking gateway core
//!
//! Cloak scans free-form text for personally identifiable information,
//! replaces each detected substring with a synthetic format-plausible
//! substitute, and later reverses the substitution with the same
//! change set - so text can be forwarded to an untrusted third party
//! and the response shown to the user with the original values
//! restored.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`masking`] - Detection, synthesis, substitution, pipeline engine
//! - [`config`] - Configuration management
//! - [`domain`] - Error types
//! - [`logging`] - Structured logging
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use cloak::masking::{MaskingConfig, MaskingEngine};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let engine = MaskingEngine::new(MaskingConfig::default())?;
//!
//!     let outcome = engine
//!         .process_detailed("Contact alex@example.com at 203.0.113.1")
//!         .await?;
//!
//!     println!("forwarded: {}", outcome.masked_text);
//!     println!("restored:  {}", outcome.restored_text);
//!     Ok(())
//! }
//! ```
//!
//! ## Detection and ordering
//!
//! Each PII category owns a regex pattern set (embedded TOML library,
//! overridable per deployment); person names come from a pluggable
//! [`masking::detector::NameExtractor`]. Loose patterns over-match on
//! purpose - recall is preferred over precision - and overlapping
//! detections are resolved by the fixed category processing order
//! ([`masking::CATEGORY_ORDER`]), which is part of the crate's
//! contract.
//!
//! ## Caveats
//!
//! Synthetic values are plausible-looking, not security-grade
//! anonymization, and the textual substitution algorithm is not
//! collision-proof: a fake value can coincide with unrelated text.
//! See the `masking::substitution` docs for the pinned behavior.

pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod masking;
