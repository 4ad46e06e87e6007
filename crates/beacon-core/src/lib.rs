// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Beacon broadcast alert engine.
//!
//! This crate provides the collaborator trait definitions, the error type,
//! and the area and broadcast types shared by the rest of the workspace.
//! Store and area-graph implementations implement the traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{BeaconError, ResourceKind};
pub use types::{
    default_ttl, AreaNode, AreaSet, AreaTier, BroadcastMessage, BroadcastStatus, BroadcastUpdate,
    LatLong, Polygon, Template, DEFAULT_TTL_HOURS,
};

pub use traits::{AreaGraph, BroadcastStore, Clock, SystemClock, TemplateStore};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beacon_error_has_all_variants() {
        let not_found = BeaconError::area_not_found("wd20-missing");
        assert_eq!(not_found.to_string(), "area not found: wd20-missing");

        let _polygon = BeaconError::InvalidPolygon("test".into());
        let store = BeaconError::Store {
            message: "timeout".into(),
            source: Some(Box::new(std::io::Error::other("test"))),
        };
        assert_eq!(store.to_string(), "store error: timeout");
        let _config = BeaconError::Config("test".into());
        let _internal = BeaconError::Internal("test".into());
    }

    #[test]
    fn resource_kind_display() {
        assert_eq!(ResourceKind::BroadcastMessage.to_string(), "broadcast_message");
        assert_eq!(ResourceKind::Template.to_string(), "template");
    }

    #[test]
    fn ttl_is_exported_at_the_root() {
        assert_eq!(DEFAULT_TTL_HOURS, 72);
        assert_eq!(default_ttl(), chrono::Duration::hours(DEFAULT_TTL_HOURS));
    }

    #[test]
    fn system_clock_advances() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }

    #[test]
    fn all_traits_are_object_safe() {
        // Compiles only if every collaborator trait can be used as `dyn`.
        fn _assert_area_graph(_: &dyn AreaGraph) {}
        fn _assert_broadcast_store(_: &dyn BroadcastStore) {}
        fn _assert_template_store(_: &dyn TemplateStore) {}
        fn _assert_clock(_: &dyn Clock) {}
    }
}
