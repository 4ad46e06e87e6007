// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `beacon aggregate`, `beacon polygons` and `beacon config` implementations.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use beacon_areas::{aggregate_area_ids, AreaLibrary, PolygonResolver};
use beacon_config::BeaconConfig;
use beacon_core::{AreaNode, BeaconError, Polygon};
use serde::Serialize;
use tracing::debug;

/// One row of `aggregate --json` output.
#[derive(Debug, Serialize)]
struct AreaSummary<'a> {
    id: &'a str,
    name: &'a str,
    tier: String,
}

fn load_library(config: &BeaconConfig) -> Result<AreaLibrary, BeaconError> {
    let path = config.areas.library_path.as_deref().ok_or_else(|| {
        BeaconError::Config("no area library configured; set areas.library_path".to_string())
    })?;
    AreaLibrary::load(Path::new(path))
}

/// Run the `beacon aggregate` command.
pub async fn run_aggregate(
    config: &BeaconConfig,
    ids: &[String],
    json: bool,
) -> Result<(), BeaconError> {
    let library = load_library(config)?;
    let aggregated = aggregate_area_ids(&library, ids).await?;
    debug!(input = ids.len(), output = aggregated.len(), "aggregate command");
    let output = if json {
        format_aggregate_json(&aggregated)?
    } else {
        format_aggregate_table(&aggregated)
    };
    println!("{output}");
    Ok(())
}

/// Run the `beacon polygons` command.
pub async fn run_polygons(
    config: &BeaconConfig,
    ids: &[String],
    simple: bool,
) -> Result<(), BeaconError> {
    let library = load_library(config)?;
    let resolver = PolygonResolver::from_config(Arc::new(library), &config.polygons);
    let polygons = if simple {
        resolver.simple_polygons(ids).await?
    } else {
        resolver.polygons(ids).await?
    };
    println!("{}", format_polygons(&polygons));
    Ok(())
}

/// Run the `beacon config` command.
pub fn print_config(config: &BeaconConfig) -> Result<(), BeaconError> {
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| BeaconError::Internal(format!("cannot render config: {e}")))?;
    print!("{rendered}");
    Ok(())
}

fn format_aggregate_table(areas: &BTreeSet<AreaNode>) -> String {
    areas
        .iter()
        .map(|area| format!("{:<24} {}", area.id, area.name))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_aggregate_json(areas: &BTreeSet<AreaNode>) -> Result<String, BeaconError> {
    let rows: Vec<AreaSummary<'_>> = areas
        .iter()
        .map(|area| AreaSummary {
            id: &area.id,
            name: &area.name,
            tier: area.tier().to_string(),
        })
        .collect();
    serde_json::to_string_pretty(&rows)
        .map_err(|e| BeaconError::Internal(format!("cannot render JSON: {e}")))
}

fn format_polygons(polygons: &[Polygon]) -> String {
    let total: usize = polygons.iter().map(Polygon::len).sum();
    let mut lines: Vec<String> = polygons
        .iter()
        .enumerate()
        .map(|(i, polygon)| format!("polygon {}: {} vertices", i + 1, polygon.len()))
        .collect();
    lines.push(format!("{} polygons, {total} vertices", polygons.len()));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use beacon_test_utils::fixtures::{self, BUSHEY_HEATH, BUSHEY_NORTH, HERTSMERE};

    fn config_with_library(dir: &tempfile::TempDir) -> BeaconConfig {
        let path = dir.path().join("areas.json");
        std::fs::write(&path, fixtures::AREA_LIBRARY_JSON).unwrap();
        let mut config = BeaconConfig::default();
        config.areas.library_path = Some(path.display().to_string());
        config
    }

    #[test]
    fn missing_library_path_is_a_config_error() {
        let err = load_library(&BeaconConfig::default()).unwrap_err();
        assert!(matches!(err, BeaconError::Config(msg) if msg.contains("library_path")));
    }

    #[tokio::test]
    async fn table_lists_aggregated_areas() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with_library(&dir);
        let library = load_library(&config).unwrap();
        let ids = vec![BUSHEY_HEATH.to_string(), BUSHEY_NORTH.to_string()];
        let aggregated = aggregate_area_ids(&library, &ids).await.unwrap();

        let table = format_aggregate_table(&aggregated);
        assert!(table.starts_with(HERTSMERE));
        assert!(table.ends_with("Hertsmere"));
    }

    #[test]
    fn json_rows_carry_tier() {
        let areas: BTreeSet<AreaNode> = [AreaNode::new(HERTSMERE, "Hertsmere")].into();
        let json = format_aggregate_json(&areas).unwrap();
        assert!(json.contains("\"tier\": \"district\""));
    }

    #[test]
    fn polygon_summary_counts_vertices() {
        let polygons = vec![
            Polygon::from_pairs(&[[0.0, 0.0], [0.0, 1.0], [1.0, 1.0]]),
            Polygon::from_pairs(&[[2.0, 2.0], [2.0, 3.0], [3.0, 3.0], [3.0, 2.0]]),
        ];
        let summary = format_polygons(&polygons);
        assert!(summary.contains("polygon 2: 4 vertices"));
        assert!(summary.ends_with("2 polygons, 7 vertices"));
    }

    #[test]
    fn config_renders_as_toml() {
        let rendered = toml::to_string_pretty(&BeaconConfig::default()).unwrap();
        assert!(rendered.contains("simplify_tolerance"));
    }
}
