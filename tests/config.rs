//! Configuration system tests
//!
//! Tests for config paths, config file loading, and CLI overrides.

use std::io::Write;

use dock_reorder::cli::CliArgs;
use dock_reorder::config::DockConfig;
use dock_reorder::config_paths;
use dock_reorder::model::DockModel;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("dock-reorder"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

// ========================================================================
// Config Loading Tests
// ========================================================================

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_file() {
    let file = write_config(
        "items: [alpha, beta, gamma]\nmetrics:\n  slot_width: 48\nwindow_width: 1024\n",
    );
    let config = DockConfig::load_from(file.path());

    assert_eq!(config.items, vec!["alpha", "beta", "gamma"]);
    assert_eq!(config.metrics.slot_width, 48.0);
    assert_eq!(config.window_width, 1024);
    assert_eq!(config.window_height, DockConfig::default().window_height);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = DockConfig::load_from(&dir.path().join("nope.yaml"));
    assert_eq!(config, DockConfig::default());
}

#[test]
fn test_malformed_file_falls_back_to_defaults() {
    let file = write_config("items: [unterminated");
    assert_eq!(DockConfig::load_from(file.path()), DockConfig::default());
}

#[test]
fn test_invalid_metrics_fall_back_to_defaults() {
    let file = write_config("metrics:\n  slot_width: 0\n");
    assert_eq!(DockConfig::load_from(file.path()), DockConfig::default());
}

#[test]
fn test_config_builds_model() {
    let file = write_config("items: [x, y]\n");
    let config = DockConfig::load_from(file.path());
    let model = DockModel::from_config(&config);

    let ids: Vec<&str> = model.items().iter().map(|i| i.as_str()).collect();
    assert_eq!(ids, vec!["x", "y"]);
    assert_eq!(model.reflow.slots().len(), 2);
    model.assert_invariants("from_config");
}

// ========================================================================
// CLI Tests
// ========================================================================

#[test]
fn test_cli_config_path_and_overrides() {
    let file = write_config("items: [a, b]\nmetrics:\n  spacing: 10\n");
    let args = CliArgs {
        items: Some("c,d,e".to_string()),
        config: Some(file.path().to_path_buf()),
        slot_width: None,
        spacing: Some(2.0),
    };

    let config = args.into_config().unwrap();
    assert_eq!(config.items, vec!["c", "d", "e"]);
    assert_eq!(config.metrics.spacing, 2.0);
}

#[test]
fn test_cli_missing_config_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let args = CliArgs {
        items: None,
        config: Some(dir.path().join("missing.yaml")),
        slot_width: None,
        spacing: None,
    };
    assert!(args.into_config().is_err());
}
