//! 設定ファイルの読み書きテスト

use medscan_common::ModelType;
use medscan_rust::config::Config;
use medscan_rust::error::MedScanError;
use tempfile::tempdir;

#[test]
fn test_load_missing_file_returns_default() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.set_server_url("https://diag.example.org/".into()).unwrap();
    config.default_model = ModelType::BrainTumor;
    config.timeout_seconds = 30;
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.server_url, "https://diag.example.org");
    assert_eq!(loaded.default_model, ModelType::BrainTumor);
    assert_eq!(loaded.timeout_seconds, 30);
}

#[test]
fn test_load_broken_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, MedScanError::JsonParse(_)));
}

#[test]
fn test_unknown_model_in_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"default_model":"lung"}"#).unwrap();

    assert!(Config::load_from(&path).is_err());
}
