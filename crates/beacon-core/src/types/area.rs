// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Geographic area nodes, administrative tiers, and polygon geometry.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Id prefix for electoral wards.
pub const WARD_PREFIX: &str = "wd20-";
/// Id prefix for lower-tier (district) local authorities.
pub const DISTRICT_PREFIX: &str = "lad20-";
/// Id prefix for counties and unitary authorities.
pub const COUNTY_OR_UNITARY_PREFIX: &str = "ctyua19-";
/// Id prefix for countries.
pub const COUNTRY_PREFIX: &str = "ctry19-";

/// Administrative tier encoded in an area id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum AreaTier {
    Ward,
    District,
    CountyOrUnitary,
    Country,
    /// Ids outside the known scheme. Treated like a top-tier node.
    Other,
}

impl AreaTier {
    /// Reads the tier from an id's structural prefix.
    pub fn from_id(id: &str) -> Self {
        if id.starts_with(WARD_PREFIX) {
            Self::Ward
        } else if id.starts_with(DISTRICT_PREFIX) {
            Self::District
        } else if id.starts_with(COUNTY_OR_UNITARY_PREFIX) {
            Self::CountyOrUnitary
        } else if id.starts_with(COUNTRY_PREFIX) {
            Self::Country
        } else {
            Self::Other
        }
    }
}

/// A named node in the area forest.
///
/// The parent chain is carried inline so aggregation can walk ward -> district
/// -> county without further lookups. Equality, hashing and ordering consider
/// the `id` only.
#[derive(Clone)]
pub struct AreaNode {
    pub id: String,
    pub name: String,
    pub parent: Option<Arc<AreaNode>>,
}

impl AreaNode {
    /// Create a root node (no parent).
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent: None,
        }
    }

    /// Attach a parent, consuming `self`.
    pub fn with_parent(mut self, parent: AreaNode) -> Self {
        self.parent = Some(Arc::new(parent));
        self
    }

    pub fn tier(&self) -> AreaTier {
        AreaTier::from_id(&self.id)
    }

    pub fn is_ward(&self) -> bool {
        self.tier() == AreaTier::Ward
    }

    pub fn is_district(&self) -> bool {
        self.tier() == AreaTier::District
    }

    /// The immediately containing node, if any.
    pub fn parent(&self) -> Option<&AreaNode> {
        self.parent.as_deref()
    }
}

impl fmt::Debug for AreaNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AreaNode")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("parent", &self.parent.as_ref().map(|p| p.id.as_str()))
            .finish()
    }
}

impl PartialEq for AreaNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for AreaNode {}

impl Hash for AreaNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for AreaNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AreaNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

/// A single polygon vertex. Serialized as a `[lat, long]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLong {
    pub lat: f64,
    pub long: f64,
}

impl LatLong {
    pub fn new(lat: f64, long: f64) -> Self {
        Self { lat, long }
    }
}

impl From<[f64; 2]> for LatLong {
    fn from([lat, long]: [f64; 2]) -> Self {
        Self { lat, long }
    }
}

impl From<LatLong> for [f64; 2] {
    fn from(point: LatLong) -> Self {
        [point.lat, point.long]
    }
}

/// An ordered ring of vertices. The closing vertex may or may not repeat the first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    pub vertices: Vec<LatLong>,
}

impl Polygon {
    pub fn new(vertices: Vec<LatLong>) -> Self {
        Self { vertices }
    }

    /// Build from `[lat, long]` pairs.
    pub fn from_pairs(pairs: &[[f64; 2]]) -> Self {
        Self {
            vertices: pairs.iter().copied().map(LatLong::from).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_is_read_from_prefix() {
        assert_eq!(AreaTier::from_id("wd20-E05009372"), AreaTier::Ward);
        assert_eq!(AreaTier::from_id("lad20-E07000008"), AreaTier::District);
        assert_eq!(AreaTier::from_id("ctyua19-E10000015"), AreaTier::CountyOrUnitary);
        assert_eq!(AreaTier::from_id("ctry19-E92000001"), AreaTier::Country);
        assert_eq!(AreaTier::from_id("test-area"), AreaTier::Other);
    }

    #[test]
    fn nodes_compare_by_id_only() {
        let a = AreaNode::new("lad20-A", "Alpha");
        let b = AreaNode::new("lad20-A", "Renamed").with_parent(AreaNode::new("ctyua19-X", "X"));
        assert_eq!(a, b);
        assert!(AreaNode::new("lad20-A", "") < AreaNode::new("lad20-B", ""));
    }

    #[test]
    fn parent_chain_is_walkable() {
        let county = AreaNode::new("ctyua19-X", "Xshire");
        let district = AreaNode::new("lad20-A", "Alpha").with_parent(county);
        let ward = AreaNode::new("wd20-1", "One").with_parent(district);

        let grandparent = ward.parent().and_then(AreaNode::parent).unwrap();
        assert_eq!(grandparent.id, "ctyua19-X");
        assert!(ward.is_ward());
        assert!(ward.parent().unwrap().is_district());
    }

    #[test]
    fn polygon_serializes_as_lat_long_pairs() {
        let polygon = Polygon::from_pairs(&[[51.5, -0.1], [51.6, -0.1], [51.6, 0.0]]);
        let json = serde_json::to_string(&polygon).unwrap();
        assert_eq!(json, "[[51.5,-0.1],[51.6,-0.1],[51.6,0.0]]");

        let parsed: Polygon = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, polygon);
    }
}
