// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Beacon configuration system.

use std::io::Write;

use beacon_config::diagnostic::ConfigError;
use beacon_config::model::BeaconConfig;
use beacon_config::{load_and_validate_path, load_and_validate_str, load_config_from_str};

/// A file with every known key deserializes.
#[test]
fn valid_toml_deserializes_into_beacon_config() {
    let toml = r#"
[logging]
level = "debug"

[areas]
library_path = "/srv/beacon/areas.json"

[polygons]
simplify_tolerance = 0.001
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.areas.library_path.as_deref(),
        Some("/srv/beacon/areas.json")
    );
    assert_eq!(config.polygons.simplify_tolerance, 0.001);
}

/// An empty document yields the compiled defaults.
#[test]
fn missing_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");
    assert_eq!(config, BeaconConfig::default());
    assert_eq!(config.logging.level, "info");
    assert!(config.areas.library_path.is_none());
    assert_eq!(config.polygons.simplify_tolerance, 0.0005);
}

/// A misspelt key is reported with a suggestion and the section's valid keys.
#[test]
fn unknown_key_suggests_correction() {
    let toml = r#"
[polygons]
simplify_tolerence = 0.001
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown key");
    let found = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { key, suggestion, valid_keys, .. } if {
            key == "simplify_tolerence"
                && suggestion.as_deref() == Some("simplify_tolerance")
                && valid_keys.contains("simplify_tolerance")
        })
    });
    assert!(found, "expected UnknownKey with suggestion, got: {errors:?}");
}

/// An unknown top-level section is rejected.
#[test]
fn unknown_section_is_rejected() {
    let toml = r#"
[storage]
database_path = "beacon.db"
"#;

    let err = load_config_from_str(toml).expect_err("unknown section should be rejected");
    let err_str = err.to_string();
    assert!(
        err_str.contains("unknown field") || err_str.contains("storage"),
        "error should mention unknown field, got: {err_str}"
    );
}

/// A string where a number is expected is an InvalidType diagnostic.
#[test]
fn wrong_type_is_reported_with_key_path() {
    let toml = r#"
[polygons]
simplify_tolerance = "fine"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject invalid type");
    assert!(
        errors.iter().any(|e| matches!(
            e,
            ConfigError::InvalidType { key, .. } if key.contains("simplify_tolerance")
        )),
        "expected InvalidType, got: {errors:?}"
    );
}

/// Semantic validation runs after a successful parse.
#[test]
fn validation_rejects_negative_tolerance() {
    let toml = r#"
[polygons]
simplify_tolerance = -1.0
"#;

    let errors = load_and_validate_str(toml).expect_err("negative tolerance should fail");
    assert!(errors.iter().any(
        |e| matches!(e, ConfigError::Validation { message } if message.contains("simplify_tolerance"))
    ));
}

/// An unknown key in an explicit config file is reported against that key.
#[test]
fn explicit_file_reports_unknown_key() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[logging]\nlevle = \"debug\"").unwrap();

    let errors = load_and_validate_path(file.path()).expect_err("unknown key should fail");
    let found = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { key, suggestion, .. } if key == "levle" && suggestion.as_deref() == Some("level"))
    });
    assert!(found, "expected UnknownKey for `levle`, got: {errors:?}");
}

/// An explicit valid file loads.
#[test]
fn explicit_file_loads() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[logging]\nlevel = \"warn\"").unwrap();

    let config = load_and_validate_path(file.path()).expect("file should load");
    assert_eq!(config.logging.level, "warn");
}

/// Diagnostics render through miette's graphical handler.
#[test]
fn config_error_renders_with_miette() {
    use miette::{Diagnostic, GraphicalReportHandler};

    let error = ConfigError::UnknownKey {
        key: "levle".to_string(),
        suggestion: Some("level".to_string()),
        valid_keys: "level".to_string(),
        span: None,
        src: None,
    };
    assert!(error.code().is_some());
    assert!(error.help().unwrap().to_string().contains("did you mean `level`"));

    let mut buf = String::new();
    GraphicalReportHandler::new()
        .render_report(&mut buf, &error)
        .expect("should render");
    assert!(buf.contains("levle"));
}
