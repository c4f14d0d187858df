use simpledraw_core::SaveOutcome;
use simpledraw_settings::{Config, SettingsError, SettingsManager};
use std::path::PathBuf;

fn saved_config() -> Config {
    let mut config = Config::new();
    config.record_save(&SaveOutcome {
        path: PathBuf::from("/data/drawings/7_S2_Cz_2024-03-05_14-30-00.svg"),
        extension: "svg".to_string(),
        subject: "S2".to_string(),
        electrode: "Cz".to_string(),
        trial: 7,
    });
    config
}

#[test]
fn test_json_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let config = saved_config();
    config.save_to_file(&path).unwrap();
    let loaded = Config::load_from_file(&path).unwrap();

    assert_eq!(loaded, config);
    assert_eq!(loaded.export.last_save_extension, "svg");
}

#[test]
fn test_toml_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");

    let config = saved_config();
    config.save_to_file(&path).unwrap();
    let loaded = Config::load_from_file(&path).unwrap();

    assert_eq!(loaded, config);
    assert_eq!(loaded.recording.trial, 7);
}

#[test]
fn test_defaults_round_trip_without_last_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");

    Config::new().save_to_file(&path).unwrap();
    let loaded = Config::load_from_file(&path).unwrap();

    assert_eq!(loaded.export.last_save_path, None);
}

#[test]
fn test_invalid_file_is_rejected_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{ "export": { "last_save_extension": "gif" }, "recording": { "trial": 1 } }"#,
    )
    .unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::InvalidSetting { .. }));
    assert_eq!(SettingsManager::load_or_default(&path), Config::default());
}

#[test]
fn test_missing_sections_use_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{}").unwrap();

    assert_eq!(Config::load_from_file(&path).unwrap(), Config::default());
}
