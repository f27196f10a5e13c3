//! Unit tests for the config module.
//!
//! Tests configuration types, defaults, serialization and the
//! load-or-create behavior.

#![allow(clippy::unwrap_used)]

use tempfile::TempDir;

use crate::config::Config;

#[test]
fn defaults_match_the_documented_values() {
    let config = Config::default();

    assert_eq!(config.general.poll_interval_secs, 1);
    assert_eq!(config.presence.client_id, "default");
    assert_eq!(config.presence.small_asset_key, "playbutton");
    assert_eq!(config.presence.small_asset_text, "Playing");
    assert!(!config.assets.custom_assets);
    assert_eq!(config.assets.default_key, "logo");
    assert_eq!(config.assets.default_text, "winamp version");
}

#[test]
fn config_serialize_roundtrip() {
    let original = Config::default();

    let toml_str = toml::to_string(&original).unwrap();
    let deserialized: Config = toml::from_str(&toml_str).unwrap();

    assert_eq!(format!("{original:?}"), format!("{deserialized:?}"));
}

#[test]
fn partial_toml_fills_in_defaults() {
    let config: Config = toml::from_str(
        r#"
        [assets]
        custom_assets = true
        "#,
    )
    .unwrap();

    assert!(config.assets.custom_assets);
    assert_eq!(config.assets.default_key, "logo");
    assert_eq!(config.general.poll_interval_secs, 1);
}

#[test]
fn empty_toml_is_all_defaults() {
    let config: Config = toml::from_str("").unwrap();

    assert_eq!(config.presence.client_id, "default");
}

#[test]
fn load_or_create_writes_defaults_when_missing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");

    let config = Config::load_or_create(&path).unwrap();

    assert!(path.exists());
    assert_eq!(config.presence.client_id, "default");

    let reloaded = Config::load_or_create(&path).unwrap();
    assert_eq!(format!("{config:?}"), format!("{reloaded:?}"));
}

#[test]
fn load_or_create_reads_an_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        r#"
        [general]
        poll_interval_secs = 5

        [presence]
        client_id = "123456"
        "#,
    )
    .unwrap();

    let config = Config::load_or_create(&path).unwrap();

    assert_eq!(config.general.poll_interval_secs, 5);
    assert_eq!(config.presence.client_id, "123456");
}

#[test]
fn malformed_toml_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "this is not toml [").unwrap();

    assert!(Config::load_or_create(&path).is_err());
}
