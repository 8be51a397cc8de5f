//! Integration tests for loading documents from files.

#![cfg(all(feature = "yaml", feature = "json"))]

use imagecustomizer_config::prelude::*;
use imagecustomizer_config::sources::FileSource;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_single_yaml_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.yaml");

    fs::write(
        &config_path,
        r#"
storage:
  disks:
  - partitions:
    - id: disk1-esp
    - id: p1
os:
  resetBootLoaderType: hard-reset
"#,
    )
    .unwrap();

    let config = ConfigLoader::new()
        .load(&FileSource::new(&config_path))
        .unwrap();

    let storage = config.storage.as_ref().unwrap();
    assert_eq!(storage.disks.len(), 1);
    assert_eq!(storage.disks[0].partitions[1].id, "p1");
    assert_eq!(
        config.os.as_ref().unwrap().reset_boot_loader_type,
        ResetBootLoaderType::HardReset
    );
}

#[test]
fn test_load_json_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.json");

    fs::write(
        &config_path,
        r#"{
  "resetPartitionsUuidsType": "reset-all",
  "os": { "resetBootLoaderType": "hard-reset" }
}"#,
    )
    .unwrap();

    let config = ConfigLoader::new()
        .load(&FileSource::new(&config_path))
        .unwrap();
    assert_eq!(
        config.reset_partitions_uuids_type,
        ResetPartitionsUuidsType::ResetAll
    );
}

#[test]
fn test_yaml_and_json_parse_to_same_document() {
    let temp_dir = TempDir::new().unwrap();
    let yaml_path = temp_dir.path().join("config.yml");
    let json_path = temp_dir.path().join("config.json");

    fs::write(
        &yaml_path,
        r#"
os:
  resetBootLoaderType: hard-reset
  verity:
    id: rootverity
    name: root
    dataDeviceId:
      idType: part-label
      id: root
    hashDeviceId:
      idType: part-uuid
      id: 5b0f8a4e
    corruptionOption: restart
"#,
    )
    .unwrap();

    fs::write(
        &json_path,
        r#"{
  "os": {
    "resetBootLoaderType": "hard-reset",
    "verity": {
      "id": "rootverity",
      "name": "root",
      "dataDeviceId": { "idType": "part-label", "id": "root" },
      "hashDeviceId": { "idType": "part-uuid", "id": "5b0f8a4e" },
      "corruptionOption": "restart"
    }
  }
}"#,
    )
    .unwrap();

    let loader = ConfigLoader::new();
    let from_yaml = loader.load(&FileSource::new(&yaml_path)).unwrap();
    let from_json = loader.load(&FileSource::new(&json_path)).unwrap();
    assert_eq!(from_yaml, from_json);
}

#[test]
fn test_validation_failure_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.yaml");

    fs::write(
        &config_path,
        r#"
storage:
  disks:
  - partitions:
    - id: p1
"#,
    )
    .unwrap();

    let err = ConfigLoader::new()
        .load(&FileSource::new(&config_path))
        .unwrap_err();

    match err {
        ConfigError::ValidationError(inner) => {
            assert_eq!(
                inner.to_string(),
                "os.resetBootLoaderType must be specified if storage is specified"
            );
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_unknown_enum_value_is_a_deserialization_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.yaml");

    fs::write(&config_path, "resetPartitionsUuidsType: reset-some\n").unwrap();

    let err = ConfigLoader::new()
        .load(&FileSource::new(&config_path))
        .unwrap_err();
    assert!(matches!(err, ConfigError::DeserializationError(_)));
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("absent.yaml");

    let err = ConfigLoader::new()
        .load(&FileSource::new(&config_path))
        .unwrap_err();
    assert!(matches!(err, ConfigError::LoadError(_)));
}

#[test]
fn test_unsupported_extension() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "").unwrap();

    let err = ConfigLoader::new()
        .load(&FileSource::new(&config_path))
        .unwrap_err();
    assert!(err.to_string().contains("Unsupported file extension"));
}
