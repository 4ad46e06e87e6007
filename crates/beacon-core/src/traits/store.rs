// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Store traits for the remote broadcast and template persistence.

use async_trait::async_trait;

use crate::error::BeaconError;
use crate::types::{BroadcastMessage, BroadcastStatus, BroadcastUpdate, Template};

/// Remote persistence for broadcast messages.
///
/// Writes are last-write-wins. Implementations are not expected to offer
/// conditional updates, and nothing in this engine relies on them.
#[async_trait]
pub trait BroadcastStore: Send + Sync {
    /// Creates a new draft broadcast for `template_id`.
    async fn create(
        &self,
        service_id: &str,
        template_id: &str,
    ) -> Result<BroadcastMessage, BeaconError>;

    /// Fetches one broadcast. Unknown ids return [`BeaconError::NotFound`].
    async fn get(
        &self,
        service_id: &str,
        broadcast_message_id: &str,
    ) -> Result<BroadcastMessage, BeaconError>;

    /// Lists every broadcast belonging to `service_id`.
    async fn list(&self, service_id: &str) -> Result<Vec<BroadcastMessage>, BeaconError>;

    /// Writes the `Some` fields of `update` and returns the stored result.
    async fn update(
        &self,
        service_id: &str,
        broadcast_message_id: &str,
        update: BroadcastUpdate,
    ) -> Result<BroadcastMessage, BeaconError>;

    /// Sets the stored status and returns the stored result.
    async fn update_status(
        &self,
        service_id: &str,
        broadcast_message_id: &str,
        status: BroadcastStatus,
    ) -> Result<BroadcastMessage, BeaconError>;
}

/// Read-only access to versioned templates, used for previews.
#[async_trait]
pub trait TemplateStore: Send + Sync {
    async fn get(
        &self,
        service_id: &str,
        template_id: &str,
        version: Option<i64>,
    ) -> Result<Template, BeaconError>;
}
