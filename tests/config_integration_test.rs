//! Configuration loading and audit logging integration tests

use cloak::config::{load_config, load_or_default};
use cloak::masking::{MaskingConfig, MaskingEngine, PiiCategory, Synthesizer};
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn load_config_reads_all_sections() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cloak.toml");
    std::fs::write(
        &path,
        r#"
[application]
log_level = "debug"

[logging]
local_enabled = true
local_path = "/tmp/cloak-logs"
local_rotation = "hourly"

[masking]
dry_run = true

[masking.audit]
enabled = false
"#,
    )
    .unwrap();

    let config = load_config(path.to_str().unwrap()).unwrap();

    assert_eq!(config.application.log_level, "debug");
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
    assert!(config.masking.dry_run);
    assert!(!config.masking.audit.enabled);
}

#[test]
fn load_config_rejects_bad_rotation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cloak.toml");
    std::fs::write(
        &path,
        r#"
[logging]
local_rotation = "weekly"
"#,
    )
    .unwrap();

    assert!(load_config(path.to_str().unwrap()).is_err());
}

#[test]
fn load_config_rejects_malformed_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cloak.toml");
    std::fs::write(&path, "[application\nlog_level = ").unwrap();

    assert!(load_config(path.to_str().unwrap()).is_err());
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let config = load_or_default("/nonexistent/cloak.toml").unwrap();
    assert!(!config.masking.dry_run);
    assert!(!config.masking.audit.enabled);
}

#[test]
fn env_override_toggles_name_extraction() {
    // Only this test touches CLOAK_MASKING_NAME_EXTRACTION; the other
    // tests in this binary do not assert on that field.
    std::env::set_var("CLOAK_MASKING_NAME_EXTRACTION", "false");
    let result = load_or_default("/nonexistent/cloak.toml");
    std::env::remove_var("CLOAK_MASKING_NAME_EXTRACTION");

    assert!(!result.unwrap().masking.name_extraction);
}

#[test]
fn custom_pattern_library_replaces_builtin_patterns() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("patterns.toml");
    std::fs::write(
        &path,
        r#"
[patterns.email]
category = "EMAIL"
patterns = ['[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}']
"#,
    )
    .unwrap();

    let config = MaskingConfig {
        pattern_library: Some(path),
        name_extraction: false,
        ..Default::default()
    };
    let engine = MaskingEngine::new(config).unwrap();

    let entities = engine.scan("mail a@example.com from 203.0.113.1").unwrap();
    assert_eq!(entities.values(PiiCategory::Email), ["a@example.com"]);
    // Categories absent from the library simply detect nothing.
    assert!(entities.values(PiiCategory::IpAddress).is_empty());
}

#[test]
fn missing_pattern_library_fails_engine_creation() {
    let config = MaskingConfig {
        pattern_library: Some(PathBuf::from("/nonexistent/patterns.toml")),
        ..Default::default()
    };
    assert!(MaskingEngine::new(config).is_err());
}

#[tokio::test]
async fn audit_log_records_hashes_not_plaintext() {
    let dir = tempdir().unwrap();
    let log_path = dir.path().join("audit").join("masking.log");

    let mut config = MaskingConfig::default();
    config.audit.enabled = true;
    config.audit.log_path = log_path.clone();

    let engine = MaskingEngine::new(config)
        .unwrap()
        .with_synthesizer(Synthesizer::from_seed(3));

    let outcome = engine
        .process_detailed("mail secret.person@example.com")
        .await
        .unwrap();

    let content = std::fs::read_to_string(&log_path).unwrap();
    assert!(content.contains(&outcome.invocation_id.to_string()));
    assert!(content.contains("EMAIL"));
    assert!(!content.contains("secret.person@example.com"));
}
