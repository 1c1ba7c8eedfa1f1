//! Masking pipeline engine
//!
//! Orchestrates detect -> synthesize -> mask -> upstream exchange ->
//! restore for one text at a time. Every invocation is independent:
//! entities and change sets are created fresh and dropped when the
//! call returns, so the engine can be shared across tasks behind an
//! `Arc` without cross-request state.

use crate::masking::{
    audit::AuditLogger,
    changes::ChangeSet,
    config::MaskingConfig,
    detector::{names::HeuristicNameExtractor, patterns::PatternRegistry, regex::RegexDetector},
    detector::{NameExtractor, PiiDetector},
    models::{DetectedEntities, MaskingOutcome, PiiCategory},
    substitution,
    synthesizer::Synthesizer,
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use uuid::Uuid;

/// Third-party processing boundary.
///
/// Receives the masked text and returns the third party's response.
/// The restore step assumes the response still contains the fake
/// tokens verbatim (case differences are tolerated).
#[async_trait]
pub trait Upstream: Send + Sync {
    /// Exchange masked text for the external service's response
    async fn exchange(&self, masked: &str) -> Result<String>;
}

/// Default boundary: returns the masked text unchanged.
pub struct PassthroughUpstream;

#[async_trait]
impl Upstream for PassthroughUpstream {
    async fn exchange(&self, masked: &str) -> Result<String> {
        Ok(masked.to_string())
    }
}

/// Masking pipeline engine
pub struct MaskingEngine {
    config: MaskingConfig,
    detector: Arc<dyn PiiDetector>,
    name_extractor: Arc<dyn NameExtractor>,
    synthesizer: Mutex<Synthesizer>,
    upstream: Arc<dyn Upstream>,
    audit_logger: Option<AuditLogger>,
}

impl MaskingEngine {
    /// Create an engine from configuration.
    ///
    /// Loads the configured pattern library (or the built-in one),
    /// the heuristic name extractor, an entropy-seeded synthesizer,
    /// the passthrough upstream, and the audit logger if enabled.
    pub fn new(config: MaskingConfig) -> Result<Self> {
        config.validate().context("Invalid masking configuration")?;

        let detector: Arc<dyn PiiDetector> = if let Some(ref path) = config.pattern_library {
            let registry = PatternRegistry::from_file(path)?;
            Arc::new(RegexDetector::with_registry(registry))
        } else {
            Arc::new(RegexDetector::new()?)
        };

        let audit_logger = if config.audit.enabled {
            Some(AuditLogger::new(
                config.audit.log_path.clone(),
                config.audit.json_format,
            )?)
        } else {
            None
        };

        Ok(Self {
            config,
            detector,
            name_extractor: Arc::new(HeuristicNameExtractor::new()),
            synthesizer: Mutex::new(Synthesizer::new()),
            upstream: Arc::new(PassthroughUpstream),
            audit_logger,
        })
    }

    /// Replace the name extractor (e.g. an NER-backed implementation)
    pub fn with_name_extractor(mut self, extractor: Arc<dyn NameExtractor>) -> Self {
        self.name_extractor = extractor;
        self
    }

    /// Replace the upstream boundary
    pub fn with_upstream(mut self, upstream: Arc<dyn Upstream>) -> Self {
        self.upstream = upstream;
        self
    }

    /// Replace the synthesizer (seeded for deterministic tests)
    pub fn with_synthesizer(self, synthesizer: Synthesizer) -> Self {
        Self {
            synthesizer: Mutex::new(synthesizer),
            ..self
        }
    }

    /// Detection only: scan text for PII across every category
    pub fn scan(&self, text: &str) -> Result<DetectedEntities> {
        let mut entities = self.detector.detect_all(text)?;

        if self.config.name_extraction {
            let names = self.name_extractor.extract_names(text);
            entities.extend(PiiCategory::Name, names);
        }

        Ok(entities)
    }

    /// Synthesis only: map detected entities to an ordered change set
    pub fn build_change_set(&self, entities: &DetectedEntities) -> Result<ChangeSet> {
        let mut synthesizer = self
            .synthesizer
            .lock()
            .map_err(|_| anyhow::anyhow!("synthesizer lock poisoned"))?;
        ChangeSet::build(entities, &mut synthesizer)
    }

    /// Mask direction: replace originals with fakes
    pub fn mask(&self, text: &str, changes: &ChangeSet) -> Result<String> {
        substitution::mask(text, changes)
    }

    /// Restore direction: replace fakes with originals
    pub fn restore(&self, text: &str, changes: &ChangeSet) -> Result<String> {
        substitution::restore(text, changes)
    }

    /// Full round trip, returning the restored text.
    ///
    /// This is the primary entry point for callers that only need the
    /// final text; [`process_detailed`](Self::process_detailed) returns
    /// the full outcome.
    pub async fn process(&self, text: &str) -> Result<String> {
        Ok(self.process_detailed(text).await?.restored_text)
    }

    /// Full round trip with per-invocation report
    pub async fn process_detailed(&self, text: &str) -> Result<MaskingOutcome> {
        let start = Instant::now();
        let invocation_id = Uuid::new_v4();

        let entities = self.scan(text)?;
        tracing::debug!(
            invocation_id = %invocation_id,
            detected = entities.total(),
            "scanned input text"
        );

        let changes = self.build_change_set(&entities)?;

        let outcome = if self.config.dry_run {
            // Detect and synthesize, but leave the text untouched and
            // skip the upstream exchange.
            MaskingOutcome {
                invocation_id,
                masked_text: text.to_string(),
                restored_text: text.to_string(),
                change_count: changes.len(),
                stats_by_category: entities.stats_by_category(),
                dry_run: true,
                processing_time_ms: start.elapsed().as_millis() as u64,
                timestamp: Utc::now(),
            }
        } else {
            let masked = substitution::mask(text, &changes)?;
            let response = self
                .upstream
                .exchange(&masked)
                .await
                .context("upstream exchange failed")?;
            let restored = substitution::restore(&response, &changes)?;

            MaskingOutcome {
                invocation_id,
                masked_text: masked,
                restored_text: restored,
                change_count: changes.len(),
                stats_by_category: entities.stats_by_category(),
                dry_run: false,
                processing_time_ms: start.elapsed().as_millis() as u64,
                timestamp: Utc::now(),
            }
        };

        tracing::info!(
            invocation_id = %invocation_id,
            changes = outcome.change_count,
            dry_run = outcome.dry_run,
            processing_time_ms = outcome.processing_time_ms,
            "masking round trip complete"
        );

        if let Some(ref logger) = self.audit_logger {
            logger.log_masking(&outcome, &changes)?;
        }

        Ok(outcome)
    }

    /// Check if in dry-run mode
    pub fn is_dry_run(&self) -> bool {
        self.config.dry_run
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedNames(Vec<String>);

    impl NameExtractor for CannedNames {
        fn extract_names(&self, _text: &str) -> Vec<String> {
            self.0.clone()
        }
    }

    fn engine() -> MaskingEngine {
        MaskingEngine::new(MaskingConfig::default())
            .unwrap()
            .with_synthesizer(Synthesizer::from_seed(11))
    }

    #[test]
    fn test_engine_creation() {
        assert!(MaskingEngine::new(MaskingConfig::default()).is_ok());
    }

    #[test]
    fn test_scan_merges_extracted_names() {
        let engine = engine().with_name_extractor(Arc::new(CannedNames(vec![
            "Alice Johnson".to_string(),
            "Alice Johnson".to_string(),
        ])));

        let entities = engine.scan("text without pattern matches").unwrap();
        // Duplicate extractor output collapses in the entity map.
        assert_eq!(entities.values(PiiCategory::Name), ["Alice Johnson"]);
    }

    #[test]
    fn test_scan_respects_name_extraction_toggle() {
        let config = MaskingConfig {
            name_extraction: false,
            ..Default::default()
        };
        let engine = MaskingEngine::new(config)
            .unwrap()
            .with_name_extractor(Arc::new(CannedNames(vec!["Alice Johnson".to_string()])));

        let entities = engine.scan("whatever").unwrap();
        assert!(entities.values(PiiCategory::Name).is_empty());
    }

    #[tokio::test]
    async fn test_process_empty_input() {
        let engine = engine();
        assert_eq!(engine.process("").await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_process_round_trips_with_passthrough() {
        let engine = engine();
        let text = "Contact alex@example.com at 203.0.113.1";
        let outcome = engine.process_detailed(text).await.unwrap();

        assert_ne!(outcome.masked_text, text);
        assert_eq!(outcome.restored_text, text);
        assert!(outcome.change_count > 0);
    }

    #[tokio::test]
    async fn test_dry_run_leaves_text_unmodified() {
        let config = MaskingConfig {
            dry_run: true,
            ..Default::default()
        };
        let engine = MaskingEngine::new(config)
            .unwrap()
            .with_synthesizer(Synthesizer::from_seed(11));

        let text = "Contact alex@example.com";
        let outcome = engine.process_detailed(text).await.unwrap();

        assert!(outcome.dry_run);
        assert_eq!(outcome.masked_text, text);
        assert_eq!(outcome.restored_text, text);
        assert!(outcome.change_count > 0);
    }

    #[tokio::test]
    async fn test_custom_upstream_response_is_restored() {
        struct Wrapping;

        #[async_trait]
        impl Upstream for Wrapping {
            async fn exchange(&self, masked: &str) -> Result<String> {
                Ok(format!("reply: {masked}"))
            }
        }

        let engine = engine().with_upstream(Arc::new(Wrapping));
        let restored = engine.process("mail bob@example.com now").await.unwrap();
        assert_eq!(restored, "reply: mail bob@example.com now");
    }
}
