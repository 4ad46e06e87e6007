// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reduction of an area selection to a minimal broadcast target set.
//!
//! Three passes, in order:
//!
//! 1. custom areas are replaced by the wards they overlap;
//! 2. every ward is replaced by its parent district or unitary authority;
//! 3. districts are clustered by county and each cluster is kept, or
//!    promoted to its county, by cluster size and by how many clusters exist.
//!
//! Output sets are ordered by id so results are deterministic.

use std::collections::{BTreeMap, BTreeSet};

use beacon_core::{AreaGraph, AreaNode, BeaconError};
use tracing::{debug, warn};

use crate::custom::CustomArea;

/// Clusters larger than this are always promoted to their county.
const MAX_UNPROMOTED_CLUSTER: usize = 3;

/// One entry of an operator's selection.
#[derive(Debug, Clone)]
pub enum Selection {
    Area(AreaNode),
    Custom(CustomArea),
}

impl From<AreaNode> for Selection {
    fn from(area: AreaNode) -> Self {
        Selection::Area(area)
    }
}

impl From<CustomArea> for Selection {
    fn from(custom: CustomArea) -> Self {
        Selection::Custom(custom)
    }
}

/// Run all three passes over `selection`.
pub fn aggregate_areas<I>(selection: I) -> BTreeSet<AreaNode>
where
    I: IntoIterator,
    I::Item: Into<Selection>,
{
    let expanded = expand_custom_areas(selection);
    let rolled_up = roll_up_wards(expanded);
    let aggregated = aggregate_lower_tiers(rolled_up);
    debug!(count = aggregated.len(), "areas aggregated");
    aggregated
}

/// Resolve raw ids through `graph` and aggregate them.
///
/// Fails on the first unknown id rather than aggregating a partial selection.
pub async fn aggregate_area_ids(
    graph: &dyn AreaGraph,
    ids: &[String],
) -> Result<BTreeSet<AreaNode>, BeaconError> {
    let areas = graph.resolve(ids).await?;
    Ok(aggregate_areas(areas))
}

/// Pass 1: replace each custom area with its overlapping wards.
pub fn expand_custom_areas<I>(selection: I) -> BTreeSet<AreaNode>
where
    I: IntoIterator,
    I::Item: Into<Selection>,
{
    let mut areas = BTreeSet::new();
    for item in selection {
        match item.into() {
            Selection::Area(area) => {
                areas.insert(area);
            }
            Selection::Custom(custom) => {
                areas.extend(custom.overlapping_wards().iter().cloned());
            }
        }
    }
    debug!(count = areas.len(), "custom areas expanded");
    areas
}

/// Pass 2: replace each ward with its parent.
///
/// A ward without a parent breaks the area graph's invariant; it is kept as
/// itself so the selection is never narrowed.
pub fn roll_up_wards<I>(areas: I) -> BTreeSet<AreaNode>
where
    I: IntoIterator<Item = AreaNode>,
{
    let rolled_up: BTreeSet<AreaNode> = areas
        .into_iter()
        .map(|area| {
            if !area.is_ward() {
                return area;
            }
            match area.parent() {
                Some(parent) => parent.clone(),
                None => {
                    warn!(ward = %area.id, "ward has no parent, keeping it unaggregated");
                    area
                }
            }
        })
        .collect();
    debug!(count = rolled_up.len(), "wards rolled up");
    rolled_up
}

/// Grouping key for pass 3.
///
/// Districts sharing a county and nodes standing alone never share a key,
/// so a selected county and a cluster of its districts stay separate.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum ClusterKey {
    County(String),
    Own(String),
}

/// Partition for pass 3, keyed and ordered deterministically.
pub fn cluster_lower_tiers<I>(areas: I) -> BTreeMap<ClusterKey, Vec<AreaNode>>
where
    I: IntoIterator<Item = AreaNode>,
{
    let mut clusters: BTreeMap<ClusterKey, Vec<AreaNode>> = BTreeMap::new();
    for area in areas {
        let key = match area.parent() {
            Some(county) if area.is_district() => ClusterKey::County(county.id.clone()),
            _ => ClusterKey::Own(area.id.clone()),
        };
        clusters.entry(key).or_default().push(area);
    }
    clusters
}

fn parent_or_self(area: &AreaNode) -> AreaNode {
    area.parent().cloned().unwrap_or_else(|| area.clone())
}

/// Pass 3: cluster districts by county and decide each cluster.
///
/// - a single node is kept as itself;
/// - more than three districts become their county;
/// - two or three districts become their county when any other cluster
///   exists, and are kept individually otherwise.
pub fn aggregate_lower_tiers<I>(areas: I) -> BTreeSet<AreaNode>
where
    I: IntoIterator<Item = AreaNode>,
{
    let clusters = cluster_lower_tiers(areas);
    let cluster_count = clusters.len();
    let mut results = BTreeSet::new();

    for (key, cluster) in clusters {
        let Some(first) = cluster.first() else {
            continue;
        };
        if cluster.len() == 1 {
            results.extend(cluster);
        } else if cluster.len() > MAX_UNPROMOTED_CLUSTER || cluster_count > 1 {
            debug!(?key, size = cluster.len(), "cluster promoted");
            results.insert(parent_or_self(first));
        } else {
            results.extend(cluster);
        }
    }
    results
}
