#![cfg(feature = "config")]

//! Loading `NavigationConfig` from TOML and JSON.
//!
//! Run:
//!   cargo test -p panelnav-core --features config --test config_loading

use std::io::Write;
use std::time::Duration;

use panelnav_core::config::{ConfigError, NavigationConfig};
use panelnav_core::{Axis, Easing};

#[test]
fn partial_toml_takes_defaults() {
    let config = NavigationConfig::from_toml_str(
        r#"
axis = "vertical"
base_navigation_duration = 0.5
"#,
    )
    .expect("valid toml");
    assert_eq!(config.axis, Axis::Vertical);
    assert_eq!(config.base_navigation_duration, Duration::from_millis(500));
    assert_eq!(
        config.finish_transition_duration_minimum,
        NavigationConfig::default().finish_transition_duration_minimum
    );
}

#[test]
fn json_round_trips_through_defaults() {
    let config = NavigationConfig::from_json_str(
        r#"{"paging_enabled": true, "imperative_easing": "ease_out", "flick_velocity_threshold": 800.0}"#,
    )
    .expect("valid json");
    assert!(config.paging_enabled);
    assert_eq!(config.imperative_easing, Easing::EaseOut);
    assert_eq!(config.flick_velocity_threshold, 800.0);
}

#[test]
fn invalid_values_fail_validation() {
    let err = NavigationConfig::from_toml_str("finish_transition_duration_factor = -1.0")
        .expect_err("negative factor rejected");
    match err {
        ConfigError::Validation(errors) => {
            assert!(errors[0].contains("finish_transition_duration_factor"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn negative_duration_is_a_parse_error() {
    let err = NavigationConfig::from_toml_str("base_navigation_duration = -2.0")
        .expect_err("negative duration rejected");
    assert!(matches!(err, ConfigError::Toml(_)), "{err}");
}

#[test]
fn malformed_json_reports_json_error() {
    let err = NavigationConfig::from_json_str("{ not json").expect_err("malformed");
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "bounces = false\nminimum_drag_distance = 4.0").expect("write");
    let config = NavigationConfig::from_toml_file(file.path()).expect("load");
    assert!(!config.bounces);
    assert_eq!(config.minimum_drag_distance, 4.0);
}

#[test]
fn missing_file_is_io_error() {
    let err = NavigationConfig::from_toml_file("/nonexistent/panelnav.toml")
        .expect_err("missing file");
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn serialized_toml_reloads() {
    let original = NavigationConfig::default()
        .axis(Axis::Vertical)
        .base_navigation_duration(Duration::from_millis(500))
        .finish_transition_duration_minimum(Duration::from_millis(250));
    let text = original.to_toml_string().expect("serialize");
    let reloaded = NavigationConfig::from_toml_str(&text).expect("reload");
    assert_eq!(reloaded, original);
}
