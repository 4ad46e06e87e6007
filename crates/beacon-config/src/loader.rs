// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration loading with Figment.
//!
//! Lookup order: `./beacon.toml` > `~/.config/beacon/beacon.toml` > `/etc/beacon/beacon.toml`,
//! with `BEACON_*` environment variables overriding all files.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::BeaconConfig;

/// Local config file name, looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "beacon.toml";

/// System-wide config file.
pub const SYSTEM_CONFIG_FILE: &str = "/etc/beacon/beacon.toml";

/// The user config file under the XDG config directory, if one can be determined.
pub fn user_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("beacon").join(LOCAL_CONFIG_FILE))
}

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/beacon/beacon.toml`
/// 3. `~/.config/beacon/beacon.toml`
/// 4. `./beacon.toml`
/// 5. `BEACON_*` environment variables
pub fn load_config() -> Result<BeaconConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<BeaconConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(BeaconConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from one explicit file, with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<BeaconConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(BeaconConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// The Figment behind [`load_config`], before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(BeaconConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_FILE))
        .merge(Toml::file(user_config_file().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// `BEACON_*` environment provider with explicit section mapping.
///
/// Keys are mapped section by section rather than split on `_`, since field
/// names contain underscores: `BEACON_POLYGONS_SIMPLIFY_TOLERANCE` must reach
/// `polygons.simplify_tolerance`.
fn env_provider() -> Env {
    Env::prefixed("BEACON_").map(|key| section_key(key.as_str()).into())
}

/// Config sections reachable from the environment.
const ENV_SECTIONS: [&str; 3] = ["logging", "areas", "polygons"];

/// Maps an env key with the prefix stripped (`AREAS_LIBRARY_PATH`) to its
/// dotted config path (`areas.library_path`). Figment hands keys over in
/// their original case.
fn section_key(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    for section in ENV_SECTIONS {
        if let Some(field) = key
            .strip_prefix(section)
            .and_then(|rest| rest.strip_prefix('_'))
        {
            return format!("{section}.{field}");
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercase_env_keys_reach_their_section() {
        assert_eq!(section_key("AREAS_LIBRARY_PATH"), "areas.library_path");
        assert_eq!(
            section_key("POLYGONS_SIMPLIFY_TOLERANCE"),
            "polygons.simplify_tolerance"
        );
        assert_eq!(section_key("logging_level"), "logging.level");
        assert_eq!(section_key("AREASLIBRARY"), "areaslibrary");
    }

    #[test]
    fn env_vars_map_to_sections() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("BEACON_POLYGONS_SIMPLIFY_TOLERANCE", "0.01");
            jail.set_env("BEACON_AREAS_LIBRARY_PATH", "/srv/areas.json");
            jail.set_env("BEACON_LOGGING_LEVEL", "debug");

            let config = load_config()?;
            assert_eq!(config.polygons.simplify_tolerance, 0.01);
            assert_eq!(config.areas.library_path.as_deref(), Some("/srv/areas.json"));
            assert_eq!(config.logging.level, "debug");
            Ok(())
        });
    }

    #[test]
    fn local_file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                LOCAL_CONFIG_FILE,
                r#"
[polygons]
simplify_tolerance = 0.002
"#,
            )?;

            let config = load_config()?;
            assert_eq!(config.polygons.simplify_tolerance, 0.002);
            assert_eq!(config.logging.level, "info");
            Ok(())
        });
    }
}
