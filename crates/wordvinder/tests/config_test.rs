//! Tests for ExtractConfig loading.

use std::fs;
use tempfile::TempDir;

use wordvinder::{ConfigStage, ExtractConfig};

#[test]
fn test_defaults() {
    let config = ExtractConfig::default();
    assert!(*config.pretty());
    assert!(*config.include_summary());
    assert!(!*config.legacy_strict());
    assert!(config.log_filter().contains("wordvinder_core=debug"));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = ExtractConfig::load_or_default(dir.path().join("absent.toml")).expect("Load failed");
    assert_eq!(config, ExtractConfig::default());
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("wordvinder.toml");
    fs::write(&path, "legacy_strict = true\npretty = false\n").expect("Write failed");

    let config = ExtractConfig::from_file(&path).expect("Load failed");
    assert!(*config.legacy_strict());
    assert!(!*config.pretty());
    assert!(*config.include_summary());
    assert_eq!(config.log_filter(), ExtractConfig::default().log_filter());
}

#[test]
fn test_invalid_toml_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "this is not valid toml !!!@@@").expect("Write failed");

    let err = ExtractConfig::load_or_default(&path).unwrap_err();
    assert_eq!(err.stage, ConfigStage::Parse);
    assert_eq!(err.path, path);
    assert!(err.to_string().starts_with("cannot parse "));
}

#[test]
fn test_unreadable_path_is_a_read_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = ExtractConfig::from_file(dir.path()).unwrap_err();
    assert_eq!(err.stage, ConfigStage::Read);
    assert!(err.file.ends_with("config.rs"));
}

#[test]
fn test_overrides() {
    let config = ExtractConfig::default()
        .with_legacy_strict(true)
        .with_include_summary(false);
    assert!(*config.legacy_strict());
    assert!(!*config.include_summary());
}
