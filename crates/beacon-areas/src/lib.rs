// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Area aggregation and polygon geometry for Beacon broadcasts.
//!
//! - [`aggregate`]: reduces a selection of areas and custom polygons to the
//!   smallest set of nodes that still covers it.
//! - [`custom`]: validation and ward overlap for operator-drawn polygons.
//! - [`polygons`]: exact and simplified geometry for an area set.
//! - [`library`]: an in-memory [`beacon_core::AreaGraph`] loaded from JSON.

pub mod aggregate;
pub mod custom;
pub mod geometry;
pub mod library;
pub mod polygons;

pub use aggregate::{
    aggregate_area_ids, aggregate_areas, aggregate_lower_tiers, cluster_lower_tiers,
    expand_custom_areas, roll_up_wards, ClusterKey, Selection,
};
pub use custom::{validate_polygon, CustomArea};
pub use library::{AreaLibrary, AreaRecord};
pub use polygons::{union_and_simplify, PolygonResolver};
