//! Integration tests for configuration loading and graceful degradation
//!
//! Tests cover:
//! - Missing config files fall back to built-in defaults
//! - Priority order for config file and data file resolution
//! - Invalid config files are reported, not silently replaced
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate PLEDGE_CONFIG or PLEDGE_DATA are marked with #[serial].

mod helpers;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use helpers::log_capture::capture_logs;
use pledge_common::config::{
    resolve_config_path, resolve_data_path, ConfigSource, DashboardConfig, CONFIG_ENV_VAR,
    DATA_ENV_VAR, DEFAULT_DATA_PATH,
};
use pledge_common::dates::Month;
use pledge_common::Error;
use serial_test::serial;
use tempfile::TempDir;
use tracing::Level;

fn write_config(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, body).expect("Should write config file");
    path
}

// =============================================================================
// Config File Resolution
// =============================================================================

#[test]
#[serial]
fn test_cli_arg_takes_precedence_over_env() {
    env::set_var(CONFIG_ENV_VAR, "/tmp/pledge-from-env.toml");

    let resolved = resolve_config_path(Some(Path::new("/tmp/pledge-from-cli.toml")));
    assert_eq!(resolved, Some(PathBuf::from("/tmp/pledge-from-cli.toml")));

    // Cleanup
    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_env_var_used_without_cli_arg() {
    env::set_var(CONFIG_ENV_VAR, "/tmp/pledge-from-env.toml");

    let resolved = resolve_config_path(None);
    assert_eq!(resolved, Some(PathBuf::from("/tmp/pledge-from-env.toml")));

    // Cleanup
    env::remove_var(CONFIG_ENV_VAR);
}

// =============================================================================
// Loading and Graceful Degradation
// =============================================================================

#[test]
#[serial]
fn test_missing_config_file_uses_defaults() {
    env::remove_var(CONFIG_ENV_VAR);

    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist.toml");

    let config = DashboardConfig::load_or_default(Some(&missing))
        .expect("Missing config should not be an error");
    assert_eq!(config, DashboardConfig::default());
}

#[test]
#[serial]
fn test_missing_config_file_is_reported() {
    env::remove_var(CONFIG_ENV_VAR);

    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist.toml");

    let (config, source) = DashboardConfig::resolve(Some(&missing)).unwrap();
    assert_eq!(config, DashboardConfig::default());
    assert_eq!(source, ConfigSource::Missing(missing.clone()));

    let (_, logs) = capture_logs(|| source.log());
    assert!(logs.contains_at(Level::WARN, "does-not-exist.toml not found"));
}

#[test]
#[serial]
fn test_load_or_default_warns_on_missing_file() {
    env::remove_var(CONFIG_ENV_VAR);

    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.toml");

    let (result, logs) = capture_logs(|| DashboardConfig::load_or_default(Some(&missing)));
    assert!(result.is_ok());
    assert!(logs.contains_at(Level::WARN, "absent.toml not found, using built-in defaults"));
}

#[test]
fn test_resolve_reports_loaded_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "top_categories = 3");

    let (config, source) = DashboardConfig::resolve(Some(&path)).unwrap();
    assert_eq!(config.top_categories, 3);
    assert_eq!(source, ConfigSource::File(path));
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
        data_path = "/srv/pledges/data.csv"
        upcoming_limit = 4

        [timeline]
        start = "2024-06"
        end = "2025-05"

        [logging]
        level = "debug"
        "#,
    );

    let config = DashboardConfig::load_or_default(Some(&path)).unwrap();
    assert_eq!(config.data_path, Some(PathBuf::from("/srv/pledges/data.csv")));
    assert_eq!(config.upcoming_limit, 4);
    assert_eq!(config.timeline.start, Month::new(2024, 6).unwrap());
    assert_eq!(config.timeline.end, Month::new(2025, 5).unwrap());
    assert_eq!(config.logging.level, "debug");
    // Untouched settings keep their defaults
    assert_eq!(config.top_categories, 10);
}

#[test]
fn test_invalid_config_file_is_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "top_categories = \"ten\"");

    let result = DashboardConfig::load_or_default(Some(&path));
    match result {
        Err(Error::Config(msg)) => assert!(msg.contains("config.toml")),
        other => panic!("Expected configuration error, got {:?}", other),
    }
}

// =============================================================================
// Data Path Resolution
// =============================================================================

#[test]
#[serial]
fn test_data_path_priority() {
    env::remove_var(DATA_ENV_VAR);

    let mut config = DashboardConfig::default();
    assert_eq!(resolve_data_path(None, &config), PathBuf::from(DEFAULT_DATA_PATH));

    config.data_path = Some(PathBuf::from("/from/config.csv"));
    assert_eq!(resolve_data_path(None, &config), PathBuf::from("/from/config.csv"));

    env::set_var(DATA_ENV_VAR, "/from/env.csv");
    assert_eq!(resolve_data_path(None, &config), PathBuf::from("/from/env.csv"));

    let cli = Path::new("/from/cli.csv");
    assert_eq!(resolve_data_path(Some(cli), &config), PathBuf::from("/from/cli.csv"));

    // Cleanup
    env::remove_var(DATA_ENV_VAR);
}
