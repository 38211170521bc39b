//! Tests for BatchConfig

#![allow(clippy::expect_used)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::config::{BatchConfig, ConfigError};
use crate::scanner::Target;

#[test]
fn test_new_uses_reference_defaults() {
    let config = BatchConfig::new(vec![Target::new("include", "h")]);
    assert_eq!(config.targets.len(), 1);
    assert!(!config.universal_endline);
    assert!(!config.respect_gitignore);
    assert!(!config.fail_fast);
    assert!(!config.dry_run);
}

#[test]
fn test_builder_methods() {
    let config = BatchConfig::default()
        .with_targets([Target::new("a", "h"), Target::new("b", "cpp")])
        .with_universal_endline(true)
        .with_gitignore(true)
        .with_fail_fast(true)
        .with_dry_run(true);

    assert_eq!(config.targets.len(), 2);
    assert!(config.universal_endline);
    assert!(config.respect_gitignore);
    assert!(config.fail_fast);
    assert!(config.dry_run);
}

#[test]
fn test_validate_rejects_empty_targets() {
    let err = BatchConfig::default().validate().expect_err("should fail");
    assert!(matches!(err, ConfigError::NoTargets));
}

#[test]
fn test_load_resolves_roots_against_config_dir() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("utf8norm.json");
    fs::write(
        &config_path,
        r#"{
            "targets": [
                { "root": "include", "extension": "h" },
                { "root": "/abs/wsCore", "extension": ".cpp" }
            ],
            "universal_endline": true
        }"#,
    )
    .expect("Failed to write config");

    let config = BatchConfig::load(&config_path).expect("Failed to load config");

    assert_eq!(
        config.targets,
        vec![
            Target::new(temp_dir.path().join("include"), "h"),
            Target::new(PathBuf::from("/abs/wsCore"), "cpp"),
        ]
    );
    assert!(config.universal_endline);
    assert!(!config.fail_fast);
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = BatchConfig::load(&temp_dir.path().join("nope.json")).expect_err("should fail");
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_load_invalid_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("bad.json");
    fs::write(&config_path, "{ targets: ").expect("Failed to write config");

    let err = BatchConfig::load(&config_path).expect_err("should fail");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("bad.json"));
}
