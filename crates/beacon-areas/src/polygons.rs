// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Polygon geometry for a set of area ids.
//!
//! [`PolygonResolver::polygons`] is the exact geometry used for transmission.
//! [`PolygonResolver::simple_polygons`] merges touching areas and thins their
//! outlines for map previews only.

use std::cmp::Ordering;
use std::sync::Arc;

use beacon_config::PolygonConfig;
use beacon_core::{AreaGraph, BeaconError, Polygon};
use geo::{BooleanOps, MultiPolygon, Simplify};
use tracing::debug;

use crate::geometry::{from_geo, to_multi};

pub struct PolygonResolver {
    graph: Arc<dyn AreaGraph>,
    tolerance: f64,
}

impl PolygonResolver {
    /// `tolerance` is the Ramer-Douglas-Peucker epsilon, in degrees.
    pub fn new(graph: Arc<dyn AreaGraph>, tolerance: f64) -> Self {
        Self { graph, tolerance }
    }

    pub fn from_config(graph: Arc<dyn AreaGraph>, config: &PolygonConfig) -> Self {
        Self::new(graph, config.simplify_tolerance)
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// One unsimplified polygon per id, in input order.
    pub async fn polygons(&self, area_ids: &[String]) -> Result<Vec<Polygon>, BeaconError> {
        self.graph.polygons_lat_long(area_ids).await
    }

    /// Union of the areas' polygons, simplified.
    ///
    /// Ids are sorted and de-duplicated first, so the result does not depend
    /// on the order of `area_ids`.
    pub async fn simple_polygons(&self, area_ids: &[String]) -> Result<Vec<Polygon>, BeaconError> {
        let mut ids = area_ids.to_vec();
        ids.sort();
        ids.dedup();

        let polygons = self.graph.polygons_lat_long(&ids).await?;
        let simplified = union_and_simplify(&polygons, self.tolerance);
        debug!(
            areas = ids.len(),
            input = polygons.len(),
            output = simplified.len(),
            "polygons simplified"
        );
        Ok(simplified)
    }
}

/// Merge overlapping or touching polygons and simplify each result.
///
/// All inputs go through a single union: the overlay snaps coordinates, so
/// unioning pairwise lets shared edges drift apart between calls.
/// Output is sorted by first vertex (lat, then long).
pub fn union_and_simplify(polygons: &[Polygon], tolerance: f64) -> Vec<Polygon> {
    let merged = to_multi(polygons).union(&MultiPolygon::new(Vec::new()));

    let mut simplified: Vec<Polygon> = merged
        .iter()
        .map(|polygon| simplify_ring(polygon, tolerance))
        .map(|polygon| from_geo(&polygon))
        .filter(|polygon| !polygon.is_empty())
        .collect();
    simplified.sort_by(compare_first_vertex);
    simplified
}

/// Smallest closed ring that still encloses an area.
const MIN_RING_COORDS: usize = 4;

/// Simplified copy of `polygon`, or `polygon` itself when simplifying would
/// collapse its outline.
fn simplify_ring(polygon: &geo::Polygon<f64>, tolerance: f64) -> geo::Polygon<f64> {
    let simple = polygon.simplify(&tolerance);
    if simple.exterior().0.len() < MIN_RING_COORDS {
        polygon.clone()
    } else {
        simple
    }
}

fn compare_first_vertex(a: &Polygon, b: &Polygon) -> Ordering {
    match (a.vertices.first(), b.vertices.first()) {
        (Some(a), Some(b)) => a.lat.total_cmp(&b.lat).then(a.long.total_cmp(&b.long)),
        (a, b) => a.is_some().cmp(&b.is_some()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::AreaLibrary;

    const SQUARES: &str = r#"{
        "areas": [
            { "id": "ctyua19-A", "name": "A",
              "polygon": [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]] },
            { "id": "ctyua19-B", "name": "B",
              "polygon": [[0.0, 1.0], [0.0, 2.0], [1.0, 2.0], [1.0, 1.0]] },
            { "id": "ctyua19-F", "name": "Far",
              "polygon": [[5.0, 5.0], [5.0, 6.0], [6.0, 6.0], [6.0, 5.0]] }
        ]
    }"#;

    fn resolver() -> PolygonResolver {
        let library = AreaLibrary::from_json(SQUARES).unwrap();
        PolygonResolver::new(Arc::new(library), 0.0005)
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[tokio::test]
    async fn polygons_are_unsimplified_and_in_input_order() {
        let polygons = resolver()
            .polygons(&ids(&["ctyua19-B", "ctyua19-A"]))
            .await
            .unwrap();
        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[0].vertices[0].long, 1.0);
        assert_eq!(polygons[1].len(), 4);
    }

    #[tokio::test]
    async fn adjacent_squares_merge() {
        let simple = resolver()
            .simple_polygons(&ids(&["ctyua19-A", "ctyua19-B"]))
            .await
            .unwrap();
        assert_eq!(simple.len(), 1);
        // The shared edge disappears; at most one collinear ring start survives.
        assert!(simple[0].len() <= 6, "got {:?}", simple[0]);
    }

    #[tokio::test]
    async fn disjoint_areas_stay_separate_and_sorted() {
        let simple = resolver()
            .simple_polygons(&ids(&["ctyua19-F", "ctyua19-A"]))
            .await
            .unwrap();
        assert_eq!(simple.len(), 2);
        assert!(simple[0].vertices[0].lat < simple[1].vertices[0].lat);
    }

    #[tokio::test]
    async fn input_order_and_duplicates_do_not_matter() {
        let resolver = resolver();
        let forward = resolver
            .simple_polygons(&ids(&["ctyua19-A", "ctyua19-B", "ctyua19-F"]))
            .await
            .unwrap();
        let shuffled = resolver
            .simple_polygons(&ids(&["ctyua19-F", "ctyua19-B", "ctyua19-A", "ctyua19-B"]))
            .await
            .unwrap();
        assert_eq!(forward, shuffled);
    }

    #[tokio::test]
    async fn unknown_id_fails() {
        let err = resolver()
            .simple_polygons(&ids(&["ctyua19-A", "ctyua19-nope"]))
            .await
            .unwrap_err();
        assert!(matches!(err, BeaconError::NotFound { .. }));
    }

    #[test]
    fn bridging_area_last_still_merges_everything() {
        // Degree-scale districts; the middle one arrives last.
        let west = Polygon::from_pairs(&[[51.6, -0.5], [51.6, -0.4], [51.7, -0.4], [51.7, -0.5]]);
        let east = Polygon::from_pairs(&[[51.6, -0.3], [51.6, -0.2], [51.7, -0.2], [51.7, -0.3]]);
        let middle = Polygon::from_pairs(&[[51.6, -0.4], [51.6, -0.3], [51.7, -0.3], [51.7, -0.4]]);

        let merged = union_and_simplify(&[west, east, middle], 0.0005);
        assert_eq!(merged.len(), 1, "got {merged:?}");
    }

    #[test]
    fn area_smaller_than_tolerance_keeps_its_outline() {
        let tiny = Polygon::from_pairs(&[
            [51.6, -0.3],
            [51.6, -0.2999],
            [51.6001, -0.2999],
            [51.6001, -0.3],
        ]);
        let simple = union_and_simplify(&[tiny], 0.0005);
        assert_eq!(simple.len(), 1);
        assert!(simple[0].len() >= MIN_RING_COORDS, "got {:?}", simple[0]);
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(union_and_simplify(&[], 0.0005).is_empty());
    }

    #[test]
    fn tolerance_comes_from_config() {
        let library = AreaLibrary::from_json(SQUARES).unwrap();
        let config = PolygonConfig {
            simplify_tolerance: 0.01,
        };
        let resolver = PolygonResolver::from_config(Arc::new(library), &config);
        assert_eq!(resolver.tolerance(), 0.01);
    }
}
