// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across collaborator traits and the Beacon engine.

pub mod area;
pub mod area_set;
pub mod broadcast;
pub mod template;

pub use area::{AreaNode, AreaTier, LatLong, Polygon};
pub use area_set::AreaSet;
pub use broadcast::{
    default_ttl, BroadcastMessage, BroadcastStatus, BroadcastUpdate, DEFAULT_TTL_HOURS,
};
pub use template::Template;
