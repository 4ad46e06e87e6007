// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversions between Beacon polygons and `geo` geometry.
//!
//! `geo` is planar with `x` east and `y` north, so `long` maps to `x` and
//! `lat` to `y`. Rings coming back from `geo` are closed (last vertex repeats
//! the first); interior rings are not carried.

use beacon_core::{LatLong, Polygon};
use geo::{Coord, LineString};

pub fn to_coord(point: &LatLong) -> Coord<f64> {
    Coord {
        x: point.long,
        y: point.lat,
    }
}

pub fn from_coord(coord: Coord<f64>) -> LatLong {
    LatLong::new(coord.y, coord.x)
}

/// Converts to a `geo` polygon with no holes. The ring is closed by `geo`.
pub fn to_geo(polygon: &Polygon) -> geo::Polygon<f64> {
    let exterior: LineString<f64> = polygon.vertices.iter().map(to_coord).collect();
    geo::Polygon::new(exterior, Vec::new())
}

/// Exterior ring only.
pub fn from_geo(polygon: &geo::Polygon<f64>) -> Polygon {
    Polygon::new(polygon.exterior().coords().copied().map(from_coord).collect())
}

pub fn to_multi(polygons: &[Polygon]) -> geo::MultiPolygon<f64> {
    geo::MultiPolygon::new(polygons.iter().map(to_geo).collect())
}
