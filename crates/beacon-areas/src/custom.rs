// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Free-hand custom areas drawn by an operator.

use std::collections::HashSet;

use beacon_core::{AreaGraph, AreaNode, BeaconError, LatLong, Polygon};
use geo::{Area, Intersects, Line};
use tracing::debug;

use crate::geometry::{to_coord, to_geo};

/// A validated polygon together with the wards it overlaps.
///
/// Overlap is resolved once, at construction, so aggregation stays pure.
#[derive(Debug, Clone)]
pub struct CustomArea {
    name: String,
    polygon: Polygon,
    overlapping_wards: Vec<AreaNode>,
}

impl CustomArea {
    /// Validate `polygon` and ask `graph` which wards it overlaps.
    ///
    /// Invalid geometry is rejected before the graph is consulted.
    pub async fn resolve(
        name: impl Into<String>,
        polygon: Polygon,
        graph: &dyn AreaGraph,
    ) -> Result<Self, BeaconError> {
        let name = name.into();
        validate_polygon(&polygon)?;
        let overlapping_wards = graph.overlapping_wards(&polygon).await?;
        debug!(area = %name, wards = overlapping_wards.len(), "custom area resolved");
        Ok(Self {
            name,
            polygon,
            overlapping_wards,
        })
    }

    /// Build from an already-known overlap, still validating the geometry.
    pub fn from_parts(
        name: impl Into<String>,
        polygon: Polygon,
        overlapping_wards: Vec<AreaNode>,
    ) -> Result<Self, BeaconError> {
        validate_polygon(&polygon)?;
        Ok(Self {
            name: name.into(),
            polygon,
            overlapping_wards,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub fn overlapping_wards(&self) -> &[AreaNode] {
        &self.overlapping_wards
    }
}

/// Rejects degenerate or self-intersecting rings.
///
/// A valid ring has at least three distinct finite vertices, non-zero area,
/// and no two non-adjacent edges that touch.
pub fn validate_polygon(polygon: &Polygon) -> Result<(), BeaconError> {
    if polygon
        .vertices
        .iter()
        .any(|p| !p.lat.is_finite() || !p.long.is_finite())
    {
        return Err(BeaconError::InvalidPolygon(
            "polygon has a non-finite coordinate".to_string(),
        ));
    }

    let ring = open_ring(&polygon.vertices);
    let distinct: HashSet<(u64, u64)> = ring
        .iter()
        .map(|p| (p.lat.to_bits(), p.long.to_bits()))
        .collect();
    if distinct.len() < 3 {
        return Err(BeaconError::InvalidPolygon(format!(
            "polygon needs at least 3 distinct vertices, got {}",
            distinct.len()
        )));
    }

    if let Some((a, b)) = first_crossing(&ring) {
        return Err(BeaconError::InvalidPolygon(format!(
            "polygon edges {a} and {b} intersect"
        )));
    }

    if to_geo(polygon).unsigned_area() == 0.0 {
        return Err(BeaconError::InvalidPolygon(
            "polygon has zero area".to_string(),
        ));
    }

    Ok(())
}

/// Vertices with a repeated closing vertex and consecutive duplicates dropped.
fn open_ring(vertices: &[LatLong]) -> Vec<LatLong> {
    let mut ring: Vec<LatLong> = Vec::with_capacity(vertices.len());
    for vertex in vertices {
        if ring.last() != Some(vertex) {
            ring.push(*vertex);
        }
    }
    while ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    ring
}

fn first_crossing(ring: &[LatLong]) -> Option<(usize, usize)> {
    let n = ring.len();
    let edges: Vec<Line<f64>> = (0..n)
        .map(|i| Line::new(to_coord(&ring[i]), to_coord(&ring[(i + 1) % n])))
        .collect();

    for i in 0..n {
        for j in (i + 2)..n {
            // First and last edges share vertex 0.
            if i == 0 && j == n - 1 {
                continue;
            }
            if edges[i].intersects(&edges[j]) {
                return Some((i, j));
            }
        }
    }
    None
}
