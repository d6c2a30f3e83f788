//! Integration-level unit tests for the SettingsEngine public API.
//!
//! These tests exercise the SettingsEngine through its public trait interface,
//! validating default loading, value persistence, validation, and reset.

use fooscreen::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use fooscreen::types::errors::SettingsError;
use fooscreen::types::history::DEFAULT_DISPLAY_LIMIT;
use fooscreen::types::settings::ShellSettings;
use tempfile::TempDir;

/// Helper: create a SettingsEngine backed by a temp directory that lives for the
/// duration of the test (the caller holds the `TempDir` handle).
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    SettingsEngine::new(Some(path))
}

/// Without a config file the shell starts on built-in defaults.
#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(settings, ShellSettings::default());
}

/// `set_value` writes through to disk, so a fresh engine sees the change.
#[test]
fn test_set_value_persists_to_disk() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    engine
        .set_value("general.start_page", serde_json::json!("https://intranet.local"))
        .unwrap();
    engine
        .set_value("network.probe_enabled", serde_json::json!(false))
        .unwrap();

    let mut reloaded = engine_in_temp(&dir);
    let settings = reloaded.load().unwrap();
    assert_eq!(settings.general.start_page, "https://intranet.local");
    assert!(!settings.network.probe_enabled);
}

/// `reset` restores defaults both in memory and on disk.
#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();
    engine
        .set_value("history.display_limit", serde_json::json!(3))
        .unwrap();
    assert_eq!(engine.get_settings().history.display_limit, 3);

    engine.reset().unwrap();
    assert_eq!(*engine.get_settings(), ShellSettings::default());

    let mut reloaded = engine_in_temp(&dir);
    assert_eq!(reloaded.load().unwrap(), ShellSettings::default());
}

#[test]
fn test_set_value_rejects_empty_and_unknown_keys() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    assert!(matches!(
        engine.set_value("", serde_json::json!(1)),
        Err(SettingsError::InvalidKey(_))
    ));
    assert!(matches!(
        engine.set_value("nonexistent.key", serde_json::json!(1)),
        Err(SettingsError::InvalidKey(_))
    ));
}

#[test]
fn test_set_value_rejects_wrong_type() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    let result = engine.set_value("gestures.swipe_touches", serde_json::json!("three"));
    assert!(matches!(result, Err(SettingsError::InvalidValue(_))));
    assert_eq!(engine.get_settings().gestures.swipe_touches, 3);
}

#[test]
fn test_set_value_rejects_threshold_out_of_range() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    let result = engine.set_value("chrome.progress_dismiss_threshold", serde_json::json!(1.5));
    assert!(matches!(result, Err(SettingsError::InvalidValue(_))));
    assert_eq!(engine.get_settings().chrome.progress_dismiss_threshold, 0.9);
}

#[test]
fn test_default_display_limit_is_shared_constant() {
    assert_eq!(ShellSettings::default().history.display_limit, DEFAULT_DISPLAY_LIMIT);
}

/// The list never shows more than five history rows, so larger limits are refused.
#[test]
fn test_set_value_rejects_display_limit_above_five() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    let result = engine.set_value("history.display_limit", serde_json::json!(8));
    assert!(matches!(result, Err(SettingsError::InvalidValue(_))));
    assert_eq!(engine.get_settings().history.display_limit, 5);

    let mut reloaded = engine_in_temp(&dir);
    assert_eq!(reloaded.load().unwrap().history.display_limit, 5);
}

/// Files written by older versions, or edited by hand, may omit sections.
#[test]
fn test_load_partial_file_keeps_present_values() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("settings.json"),
        r#"{"general":{"start_page":"https://my.home"},"gestures":{"swipe_touches":2}}"#,
    )
    .unwrap();

    let mut engine = engine_in_temp(&dir);
    let settings = engine.load().unwrap();
    let defaults = ShellSettings::default();
    assert_eq!(settings.general.start_page, "https://my.home");
    assert_eq!(settings.general.fullscreen, defaults.general.fullscreen);
    assert_eq!(settings.gestures.swipe_touches, 2);
    assert_eq!(settings.gestures.swipe_distance, defaults.gestures.swipe_distance);
    assert_eq!(settings.chrome, defaults.chrome);
    assert_eq!(settings.shortcuts, defaults.shortcuts);
}

/// A config file that parses but violates validation is refused on load.
#[test]
fn test_load_rejects_invalid_file_contents() {
    let dir = TempDir::new().unwrap();
    let mut settings = ShellSettings::default();
    settings.gestures.swipe_touches = 0;
    let path = dir.path().join("settings.json");
    std::fs::write(&path, serde_json::to_string(&settings).unwrap()).unwrap();

    let mut engine = engine_in_temp(&dir);
    assert!(matches!(engine.load(), Err(SettingsError::InvalidValue(_))));
}

#[test]
fn test_with_settings_does_not_touch_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    let mut custom = ShellSettings::default();
    custom.history.confirm_clear = false;

    let engine = SettingsEngine::with_settings(path.to_string_lossy().to_string(), custom);
    assert!(!engine.get_settings().history.confirm_clear);
    assert!(!path.exists());

    engine.save().unwrap();
    assert!(path.exists());
}

#[test]
fn test_fade_is_clamped() {
    let mut settings = ShellSettings::default();
    settings.chrome.fade_ms = 10;
    assert_eq!(settings.chrome.clamped_fade_ms(), 150);
    settings.chrome.fade_ms = 1000;
    assert_eq!(settings.chrome.clamped_fade_ms(), 250);
    settings.chrome.fade_ms = 200;
    assert_eq!(settings.chrome.clamped_fade_ms(), 200);
}
