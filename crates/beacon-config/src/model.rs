// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Beacon alert engine.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelt key is
//! reported at startup instead of silently falling back to a default.

use serde::{Deserialize, Serialize};

/// Top-level Beacon configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BeaconConfig {
    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Geographic reference data settings.
    #[serde(default)]
    pub areas: AreasConfig,

    /// Polygon preview settings.
    #[serde(default)]
    pub polygons: PolygonConfig,
}

/// Log output configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Level for the `beacon` crates (trace, debug, info, warn, error).
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Geographic reference data configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AreasConfig {
    /// Path to an area library JSON document. `None` means no local library.
    #[serde(default)]
    pub library_path: Option<String>,
}

/// Polygon preview configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PolygonConfig {
    /// Ramer-Douglas-Peucker tolerance, in degrees, for simplified previews.
    #[serde(default = "default_simplify_tolerance")]
    pub simplify_tolerance: f64,
}

impl Default for PolygonConfig {
    fn default() -> Self {
        Self {
            simplify_tolerance: default_simplify_tolerance(),
        }
    }
}

fn default_simplify_tolerance() -> f64 {
    0.0005
}
