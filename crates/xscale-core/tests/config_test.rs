//! Tests for the configuration system.

use std::sync::Mutex;

use xscale_core::config::{CliOverrides, XscaleConfig};
use xscale_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear XSCALE_ env vars and point HOME at an empty directory so no user
/// config leaks into the test.
fn isolate_env(home: &std::path::Path) {
    for key in [
        "XSCALE_MIN_I_OVER_SIGMA",
        "XSCALE_RESOLUTION_LOW",
        "XSCALE_RESOLUTION_HIGH",
        "XSCALE_RANKING_SIZE",
    ] {
        std::env::remove_var(key);
    }
    std::env::set_var("HOME", home);
    std::env::remove_var("USERPROFILE");
}

#[test]
fn test_defaults_without_files() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    let config = XscaleConfig::load(dir.path(), None, None).unwrap();

    assert_eq!(config.scaling.effective_minimum_i_over_sigma(), 2.0);
    assert!(!config.scaling.effective_save_correction_images());
    assert_eq!(config.scaling.effective_resolution_low(), 20.0);
    assert_eq!(config.scaling.effective_resolution_high(), 0.8);
    assert_eq!(config.scaling.effective_merged_file(), "MERGED.HKL");
    assert_eq!(config.output.effective_xscale_inp(), "XSCALE.INP");
    assert_eq!(config.output.effective_xdsconv_inp(), "XDSCONV.INP");
    assert_eq!(config.discovery.effective_cells_file(), "cells.yaml");
    assert_eq!(config.discovery.effective_reflection_glob(), "*XDS_ASCII.HKL");
    assert_eq!(config.consensus.effective_ranking_size(), 5);
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    std::fs::create_dir_all(home.path().join(".xscale")).unwrap();
    std::fs::write(
        home.path().join(".xscale/config.toml"),
        r#"
[scaling]
resolution_high = 1.5
merged_file = "USER.HKL"
"#,
    )
    .unwrap();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("xscale.toml"),
        r#"
[scaling]
resolution_high = 1.2
minimum_i_over_sigma = 3.0

[consensus]
ranking_size = 3
"#,
    )
    .unwrap();

    std::env::set_var("XSCALE_MIN_I_OVER_SIGMA", "1.5");

    let cli = CliOverrides {
        ranking_size: Some(7),
        ..Default::default()
    };
    let config = XscaleConfig::load(dir.path(), None, Some(&cli)).unwrap();

    // User layer survives where nothing above overrides it
    assert_eq!(config.scaling.effective_merged_file(), "USER.HKL");
    // Project overrides user
    assert_eq!(config.scaling.effective_resolution_high(), 1.2);
    // Env overrides project
    assert_eq!(config.scaling.effective_minimum_i_over_sigma(), 1.5);
    // CLI overrides project
    assert_eq!(config.consensus.effective_ranking_size(), 7);

    isolate_env(home.path());
}

#[test]
fn test_explicit_config_replaces_project_lookup() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    std::fs::write(dir.path().join("xscale.toml"), "[scaling]\nresolution_high = 1.2\n").unwrap();
    let explicit = dir.path().join("other.toml");
    std::fs::write(&explicit, "[scaling]\nresolution_high = 2.5\n").unwrap();

    let config = XscaleConfig::load(dir.path(), Some(&explicit), None).unwrap();
    assert_eq!(config.scaling.effective_resolution_high(), 2.5);
}

#[test]
fn test_missing_explicit_config_is_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    let result = XscaleConfig::load(dir.path(), Some(&dir.path().join("absent.toml")), None);
    assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
}

#[test]
fn test_unparsable_env_value_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    std::env::set_var("XSCALE_RANKING_SIZE", "many");
    let dir = tempdir();
    let result = XscaleConfig::load(dir.path(), None, None);
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));

    isolate_env(home.path());
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let result = XscaleConfig::from_toml("[scaling\nresolution_high = ");
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_resolution_range_must_be_ordered() {
    let result = XscaleConfig::from_toml("[scaling]\nresolution_low = 1.0\nresolution_high = 2.0\n");
    match result {
        Err(ConfigError::ValidationFailed { field, .. }) => {
            assert_eq!(field, "scaling.resolution_low");
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn test_zero_ranking_size_rejected() {
    let result = XscaleConfig::from_toml("[consensus]\nranking_size = 0\n");
    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));
}

#[test]
fn test_empty_file_name_rejected() {
    let result = XscaleConfig::from_toml("[output]\nxscale_inp = \"  \"\n");
    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));
}

#[test]
fn test_unknown_keys_ignored() {
    let config = XscaleConfig::from_toml(
        r#"
[scaling]
resolution_high = 1.0
friedel = false

[future_section]
anything = 1
"#,
    )
    .unwrap();
    assert_eq!(config.scaling.effective_resolution_high(), 1.0);
}

#[test]
fn test_toml_round_trip_keeps_values() {
    let config = XscaleConfig::from_toml("[discovery]\ncells_file = \"merged_cells.yaml\"\n").unwrap();
    let dumped = config.to_toml().unwrap();
    let reloaded = XscaleConfig::from_toml(&dumped).unwrap();
    assert_eq!(reloaded.discovery.effective_cells_file(), "merged_cells.yaml");
}
