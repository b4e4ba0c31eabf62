mod common;

use callkit::config::{Config, ConfigError};
use callkit::ui::overlay::{verify_children, Direction, OverlayError};
use common::temp_config;
use std::path::PathBuf;

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());

    assert_eq!(config.alert.title, "Incoming Call");
    assert_eq!(config.alert.device_list_header, "Device selection");
    assert_eq!(config.alert.video_aria_label, "answer call with voice and video");
    assert_eq!(config.alert.voice_aria_label, "answer call with voice only");
    assert_eq!(config.alert.reject_aria_label, "reject call");

    assert_eq!(config.menu.trigger, "Show Menu");
    assert_eq!(config.menu.direction, Direction::BottomLeft);
    assert!(config.menu.show_arrow);
    assert_eq!(config.menu.children.len(), 2);
    assert!(config.validate().is_ok());
}

/// Test that Config::config_path() returns a path ending with the expected filename.
#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("callkit/config.toml"));
}

/// Test that a missing file yields the defaults.
#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

/// Test that valid TOML parses correctly.
#[test]
fn test_parse_valid_toml() {
    let (_dir, path) = temp_config(
        r#"
[logging]
level = "debug"
file = "/tmp/callkit-test.log"

[alert]
title = "Llamada entrante"

[menu]
trigger = "Options"
direction = "top-right"
show_arrow = false

[menu.extra]
title = "Quick menu"

[[menu.children]]
kind = "content"
text = "Signed in"

[[menu.children]]
kind = "menu"

[[menu.children.items]]
label = "Status"
selected_value = "Available"

[[menu.children.items.items]]
label = "Away"
keep_open = true
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/callkit-test.log")));
    assert_eq!(config.alert.title, "Llamada entrante");
    assert_eq!(config.alert.reject_aria_label, "reject call");
    assert_eq!(config.menu.trigger, "Options");
    assert_eq!(config.menu.direction, Direction::TopRight);
    assert!(!config.menu.show_arrow);
    assert_eq!(config.menu.extra.get("title").map(String::as_str), Some("Quick menu"));

    let status = &config.menu.children[1].items[0];
    assert_eq!(status.selected_value.as_deref(), Some("Available"));
    assert!(status.items[0].keep_open);
    assert_eq!(verify_children(&config.menu.children).unwrap().len(), 2);
}

/// Test that invalid TOML yields a ParseError.
#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_config("[logging\nlevel = ");
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: err_path, .. }) => assert_eq!(err_path, path),
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

/// Test that an unknown direction is a parse error.
#[test]
fn test_unknown_direction_is_parse_error() {
    let (_dir, path) = temp_config("[menu]\ndirection = \"sideways\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

/// Test validation fails for an unknown log level.
#[test]
fn test_validation_fails_bad_log_level() {
    let (_dir, path) = temp_config("[logging]\nlevel = \"loud\"\n");
    match Config::load_from(&path).unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("loud"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

/// Test validation fails for an empty trigger label or alert title.
#[test]
fn test_validation_fails_empty_labels() {
    let mut config = Config::default();
    config.menu.trigger = "  ".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));

    let mut config = Config::default();
    config.alert.title = String::new();
    match config.validate().unwrap_err() {
        ConfigError::ValidationError { message } => assert!(message.contains("Alert title")),
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

/// Test that a menu with a foreign child kind loads but fails verification.
#[test]
fn test_foreign_child_kind_fails_verification() {
    let (_dir, path) = temp_config(
        r#"
[[menu.children]]
kind = "menu"

[[menu.children]]
kind = "button"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        verify_children(&config.menu.children).unwrap_err(),
        OverlayError::InvalidChild {
            index: 1,
            kind: "button".to_string()
        }
    );
}
