// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Beacon alert engine.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use thiserror::Error;

/// The kind of record a [`BeaconError::NotFound`] refers to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
pub enum ResourceKind {
    Area,
    BroadcastMessage,
    Template,
}

/// The primary error type used across all Beacon collaborator traits and core operations.
#[derive(Debug, Error)]
pub enum BeaconError {
    /// A referenced record does not exist.
    ///
    /// Unknown area ids always surface as this variant; they are never
    /// dropped from a selection.
    #[error("{kind} not found: {id}")]
    NotFound { kind: ResourceKind, id: String },

    /// A custom polygon is degenerate or self-intersecting.
    #[error("invalid polygon: {0}")]
    InvalidPolygon(String),

    /// The broadcast or template store failed (network, remote rejection, serialization).
    #[error("store error: {message}")]
    Store {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration errors (invalid TOML, unreadable area library).
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl BeaconError {
    /// Shorthand for an unknown area id.
    pub fn area_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: ResourceKind::Area,
            id: id.into(),
        }
    }

    /// Shorthand for a store failure without an underlying source.
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
            source: None,
        }
    }
}
