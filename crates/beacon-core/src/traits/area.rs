// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Area graph trait for geographic reference data.

use async_trait::async_trait;

use crate::error::BeaconError;
use crate::types::{AreaNode, Polygon};

/// Read-only access to the area forest and its geometry.
///
/// Every method fails with [`BeaconError::NotFound`] on the first id it
/// cannot resolve. Partial results are never returned.
#[async_trait]
pub trait AreaGraph: Send + Sync {
    /// Resolves ids to nodes, with their full parent chain, in input order.
    async fn resolve(&self, ids: &[String]) -> Result<Vec<AreaNode>, BeaconError>;

    /// One unsimplified polygon per id, in input order.
    async fn polygons_lat_long(&self, ids: &[String]) -> Result<Vec<Polygon>, BeaconError>;

    /// Ward-tier nodes whose geometry intersects `polygon`.
    async fn overlapping_wards(&self, polygon: &Polygon) -> Result<Vec<AreaNode>, BeaconError>;
}
