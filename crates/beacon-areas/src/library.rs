// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory area graph loaded from a JSON document.
//!
//! The document lists every area once:
//!
//! ```json
//! {
//!   "areas": [
//!     { "id": "ctyua19-E10000015", "name": "Hertfordshire" },
//!     { "id": "lad20-E07000098", "name": "Hertsmere", "parent": "ctyua19-E10000015",
//!       "polygon": [[51.70, -0.35], [51.70, -0.20], [51.62, -0.20]] }
//!   ]
//! }
//! ```
//!
//! Parent chains are resolved at load time; every returned [`AreaNode`]
//! carries its full ancestry.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use async_trait::async_trait;
use beacon_core::{AreaGraph, AreaNode, AreaTier, BeaconError, Polygon};
use geo::Intersects;
use serde::Deserialize;
use tracing::{debug, info};

use crate::geometry::to_geo;

/// One entry of the library document.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AreaRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub polygon: Option<Polygon>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LibraryDocument {
    areas: Vec<AreaRecord>,
}

/// An [`AreaGraph`] held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct AreaLibrary {
    nodes: HashMap<String, AreaNode>,
    polygons: HashMap<String, Polygon>,
}

impl AreaLibrary {
    /// Read and parse a library file.
    pub fn load(path: &Path) -> Result<Self, BeaconError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BeaconError::Config(format!(
                "cannot read area library {}: {e}",
                path.display()
            ))
        })?;
        let library = Self::from_json(&content)?;
        info!(path = %path.display(), areas = library.len(), "area library loaded");
        Ok(library)
    }

    pub fn from_json(json: &str) -> Result<Self, BeaconError> {
        let document: LibraryDocument = serde_json::from_str(json)
            .map_err(|e| BeaconError::Config(format!("invalid area library: {e}")))?;
        Self::from_records(document.areas)
    }

    /// Build the forest, rejecting duplicate ids, dangling or cyclic parents,
    /// and wards without a parent.
    pub fn from_records(records: Vec<AreaRecord>) -> Result<Self, BeaconError> {
        let mut by_id: HashMap<String, AreaRecord> = HashMap::with_capacity(records.len());
        for record in records {
            if record.parent.is_none() && AreaTier::from_id(&record.id) == AreaTier::Ward {
                return Err(BeaconError::Config(format!(
                    "ward {} has no parent",
                    record.id
                )));
            }
            if let Some(duplicate) = by_id.insert(record.id.clone(), record) {
                return Err(BeaconError::Config(format!(
                    "duplicate area id {}",
                    duplicate.id
                )));
            }
        }

        let mut nodes = HashMap::with_capacity(by_id.len());
        let mut visiting = HashSet::new();
        for id in by_id.keys() {
            build_node(id, &by_id, &mut nodes, &mut visiting)?;
        }

        let polygons = by_id
            .into_iter()
            .filter_map(|(id, record)| record.polygon.map(|polygon| (id, polygon)))
            .collect();

        debug!(areas = nodes.len(), "area forest built");
        Ok(Self { nodes, polygons })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&AreaNode> {
        self.nodes.get(id)
    }

    fn node(&self, id: &str) -> Result<&AreaNode, BeaconError> {
        self.nodes
            .get(id)
            .ok_or_else(|| BeaconError::area_not_found(id))
    }
}

fn build_node(
    id: &str,
    records: &HashMap<String, AreaRecord>,
    built: &mut HashMap<String, AreaNode>,
    visiting: &mut HashSet<String>,
) -> Result<AreaNode, BeaconError> {
    if let Some(node) = built.get(id) {
        return Ok(node.clone());
    }
    let record = records
        .get(id)
        .ok_or_else(|| BeaconError::Config(format!("unknown parent area {id}")))?;
    if !visiting.insert(id.to_string()) {
        return Err(BeaconError::Config(format!(
            "area {id} is its own ancestor"
        )));
    }

    let mut node = AreaNode::new(record.id.clone(), record.name.clone());
    if let Some(parent_id) = &record.parent {
        let parent = build_node(parent_id, records, built, visiting)?;
        node = node.with_parent(parent);
    }

    visiting.remove(id);
    built.insert(id.to_string(), node.clone());
    Ok(node)
}

#[async_trait]
impl AreaGraph for AreaLibrary {
    async fn resolve(&self, ids: &[String]) -> Result<Vec<AreaNode>, BeaconError> {
        ids.iter().map(|id| self.node(id).cloned()).collect()
    }

    async fn polygons_lat_long(&self, ids: &[String]) -> Result<Vec<Polygon>, BeaconError> {
        ids.iter()
            .map(|id| {
                self.node(id)?;
                self.polygons
                    .get(id)
                    .cloned()
                    .ok_or_else(|| BeaconError::Internal(format!("area {id} has no geometry")))
            })
            .collect()
    }

    async fn overlapping_wards(&self, polygon: &Polygon) -> Result<Vec<AreaNode>, BeaconError> {
        let target = to_geo(polygon);
        let mut wards: Vec<AreaNode> = self
            .polygons
            .iter()
            .filter(|(id, _)| AreaTier::from_id(id) == AreaTier::Ward)
            .filter(|(_, ward)| to_geo(ward).intersects(&target))
            .filter_map(|(id, _)| self.nodes.get(id).cloned())
            .collect();
        wards.sort();
        Ok(wards)
    }
}
