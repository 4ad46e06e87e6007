// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Broadcast message lifecycle operations.
//!
//! `BroadcastService` reads through the area graph and writes through the
//! broadcast store. The message passed to a write is never mutated; callers
//! use the store's returned representation.
//!
//! Area edits do not check the message's status. Callers must only edit
//! messages whose status [`is_editable`](BroadcastStatus::is_editable).

use std::collections::BTreeSet;
use std::sync::Arc;

use beacon_areas::{aggregate_area_ids, aggregate_areas, PolygonResolver};
use beacon_config::PolygonConfig;
use beacon_core::{
    AreaGraph, AreaNode, BeaconError, BroadcastMessage, BroadcastStatus, BroadcastStore,
    BroadcastUpdate, Clock, Polygon, TemplateStore,
};
use tracing::{debug, info};

use crate::preview::BroadcastPreview;

/// How many area names a broadcast summary shows.
pub const INITIAL_AREA_NAMES: usize = 10;

/// Index of the first stored area that is `area` or lies inside it.
fn first_stored_position(stored: &[AreaNode], area: &AreaNode) -> usize {
    stored
        .iter()
        .position(|node| {
            std::iter::successors(Some(node), |node| node.parent()).any(|n| n.id == area.id)
        })
        .unwrap_or(stored.len())
}

pub struct BroadcastService {
    store: Arc<dyn BroadcastStore>,
    graph: Arc<dyn AreaGraph>,
    templates: Arc<dyn TemplateStore>,
    clock: Arc<dyn Clock>,
    polygons: PolygonResolver,
}

impl BroadcastService {
    pub fn new(
        store: Arc<dyn BroadcastStore>,
        graph: Arc<dyn AreaGraph>,
        templates: Arc<dyn TemplateStore>,
        clock: Arc<dyn Clock>,
        polygon_config: &PolygonConfig,
    ) -> Self {
        let polygons = PolygonResolver::from_config(Arc::clone(&graph), polygon_config);
        Self {
            store,
            graph,
            templates,
            clock,
            polygons,
        }
    }

    /// Create a new draft for `template_id`.
    pub async fn create(
        &self,
        service_id: &str,
        template_id: &str,
    ) -> Result<BroadcastMessage, BeaconError> {
        let message = self.store.create(service_id, template_id).await?;
        info!(
            service_id,
            broadcast_id = %message.id,
            template_id,
            "broadcast draft created"
        );
        Ok(message)
    }

    pub async fn get(
        &self,
        service_id: &str,
        broadcast_message_id: &str,
    ) -> Result<BroadcastMessage, BeaconError> {
        self.store.get(service_id, broadcast_message_id).await
    }

    /// Messages of `service_id` whose derived status is one of `statuses`.
    pub async fn list_with_status(
        &self,
        service_id: &str,
        statuses: &[BroadcastStatus],
    ) -> Result<Vec<BroadcastMessage>, BeaconError> {
        let now = self.clock.now();
        let messages: Vec<BroadcastMessage> = self
            .store
            .list(service_id)
            .await?
            .into_iter()
            .filter(|message| statuses.contains(&message.status_at(now)))
            .collect();
        debug!(service_id, ?statuses, count = messages.len(), "broadcasts listed");
        Ok(messages)
    }

    /// The aggregated areas for display. The stored ids are left raw.
    pub async fn areas(
        &self,
        message: &BroadcastMessage,
    ) -> Result<BTreeSet<AreaNode>, BeaconError> {
        aggregate_area_ids(self.graph.as_ref(), message.areas.as_slice()).await
    }

    /// Names of the first [`INITIAL_AREA_NAMES`] aggregated areas.
    ///
    /// Areas come in the order they were added: each aggregated area takes
    /// the position of the earliest stored id it covers.
    pub async fn initial_area_names(
        &self,
        message: &BroadcastMessage,
    ) -> Result<Vec<String>, BeaconError> {
        let stored = self.graph.resolve(message.areas.as_slice()).await?;
        let mut areas: Vec<AreaNode> = aggregate_areas(stored.iter().cloned())
            .into_iter()
            .collect();
        areas.sort_by_key(|area| first_stored_position(&stored, area));
        Ok(areas
            .into_iter()
            .take(INITIAL_AREA_NAMES)
            .map(|area| area.name)
            .collect())
    }

    /// Exact polygons, one per stored id. Use these for transmission.
    pub async fn polygons(&self, message: &BroadcastMessage) -> Result<Vec<Polygon>, BeaconError> {
        self.polygons.polygons(message.areas.as_slice()).await
    }

    /// Merged, simplified polygons for map previews.
    pub async fn simple_polygons(
        &self,
        message: &BroadcastMessage,
    ) -> Result<Vec<Polygon>, BeaconError> {
        self.polygons.simple_polygons(message.areas.as_slice()).await
    }

    /// The message's template at its recorded version, with personalisation applied.
    pub async fn template(
        &self,
        message: &BroadcastMessage,
    ) -> Result<BroadcastPreview, BeaconError> {
        let template = self
            .templates
            .get(
                &message.service_id,
                &message.template_id,
                message.template_version,
            )
            .await?;
        Ok(BroadcastPreview::new(template, &message.personalisation))
    }

    /// Append `ids` to the selection, skipping ids already present.
    ///
    /// Issues exactly one store update with the full resulting set.
    pub async fn add_areas<I, S>(
        &self,
        message: &BroadcastMessage,
        ids: I,
    ) -> Result<BroadcastMessage, BeaconError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let areas = message.areas.union(ids);
        let added = areas.len() - message.areas.len();
        let updated = self
            .store
            .update(&message.service_id, &message.id, BroadcastUpdate::areas(areas))
            .await?;
        info!(
            broadcast_id = %message.id,
            added,
            total = updated.areas.len(),
            "broadcast areas added"
        );
        Ok(updated)
    }

    /// Drop `id` from the selection. Issues exactly one store update.
    pub async fn remove_area(
        &self,
        message: &BroadcastMessage,
        id: &str,
    ) -> Result<BroadcastMessage, BeaconError> {
        let areas = message.areas.without(id);
        let updated = self
            .store
            .update(&message.service_id, &message.id, BroadcastUpdate::areas(areas))
            .await?;
        info!(
            broadcast_id = %message.id,
            area = id,
            total = updated.areas.len(),
            "broadcast area removed"
        );
        Ok(updated)
    }

    /// Open the transmission window and mark the message as broadcasting.
    ///
    /// Two store calls, not atomic: the window is written first, then the
    /// status. If the second call fails the window stays written and the
    /// status is unchanged; calling again rewrites both.
    pub async fn start_broadcast(
        &self,
        message: &BroadcastMessage,
    ) -> Result<BroadcastMessage, BeaconError> {
        let now = self.clock.now();
        let window = BroadcastUpdate::window_from(now);
        let finishes_at = window.finishes_at;

        self.store
            .update(&message.service_id, &message.id, window)
            .await?;
        let updated = self
            .store
            .update_status(
                &message.service_id,
                &message.id,
                BroadcastStatus::Broadcasting,
            )
            .await?;
        info!(
            broadcast_id = %message.id,
            starts_at = %now,
            finishes_at = ?finishes_at,
            "broadcast started"
        );
        Ok(updated)
    }

    /// Derived status at the service clock's current time. Never writes.
    pub fn status(&self, message: &BroadcastMessage) -> BroadcastStatus {
        message.status_at(self.clock.now())
    }
}
