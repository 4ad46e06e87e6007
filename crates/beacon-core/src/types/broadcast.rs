// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Broadcast message representation shared with the broadcast store.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::types::area_set::AreaSet;

/// Length of the transmission window, in hours.
pub const DEFAULT_TTL_HOURS: i64 = 72;

/// Fixed transmission window applied when a broadcast starts.
pub fn default_ttl() -> Duration {
    Duration::hours(DEFAULT_TTL_HOURS)
}

/// Lifecycle status of a broadcast message.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum BroadcastStatus {
    Draft,
    PendingApproval,
    Broadcasting,
    /// Never stored by this engine; derived from `Broadcasting` once the window has passed.
    Completed,
    Cancelled,
    Rejected,
}

impl BroadcastStatus {
    /// Status as reported to callers.
    ///
    /// A stored `Broadcasting` whose `finishes_at` is before `now` reads as
    /// `Completed`. Everything else is reported verbatim.
    pub fn derive(
        stored: BroadcastStatus,
        finishes_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> BroadcastStatus {
        match (stored, finishes_at) {
            (BroadcastStatus::Broadcasting, Some(finishes_at)) if finishes_at < now => {
                BroadcastStatus::Completed
            }
            _ => stored,
        }
    }

    /// Whether the area selection may still be edited.
    pub fn is_editable(self) -> bool {
        matches!(self, BroadcastStatus::Draft | BroadcastStatus::PendingApproval)
    }
}

/// One emergency alert, as held by the broadcast store.
///
/// `areas` always holds the raw ids the operator selected. Aggregation is a
/// read-side projection and is never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BroadcastMessage {
    pub id: String,
    pub service_id: String,
    pub template_id: String,
    #[serde(default)]
    pub template_name: Option<String>,
    #[serde(default)]
    pub template_version: Option<i64>,
    #[serde(default)]
    pub created_by_id: Option<String>,
    #[serde(default)]
    pub approved_by_id: Option<String>,
    #[serde(default)]
    pub cancelled_by_id: Option<String>,
    #[serde(default)]
    pub areas: AreaSet,
    #[serde(default)]
    pub personalisation: BTreeMap<String, String>,
    #[serde(rename = "status")]
    pub stored_status: BroadcastStatus,
    #[serde(default)]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub finishes_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub approved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cancelled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl BroadcastMessage {
    /// A fresh draft with no areas, as a store would return from `create`.
    pub fn draft(
        id: impl Into<String>,
        service_id: impl Into<String>,
        template_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            service_id: service_id.into(),
            template_id: template_id.into(),
            template_name: None,
            template_version: None,
            created_by_id: None,
            approved_by_id: None,
            cancelled_by_id: None,
            areas: AreaSet::new(),
            personalisation: BTreeMap::new(),
            stored_status: BroadcastStatus::Draft,
            starts_at: None,
            finishes_at: None,
            created_at: None,
            approved_at: None,
            cancelled_at: None,
            updated_at: None,
        }
    }

    /// Derived status at `now`. Does not touch `stored_status`.
    pub fn status_at(&self, now: DateTime<Utc>) -> BroadcastStatus {
        BroadcastStatus::derive(self.stored_status, self.finishes_at, now)
    }

    /// Derived status at the current wall-clock time.
    pub fn status(&self) -> BroadcastStatus {
        self.status_at(Utc::now())
    }
}

/// Partial update sent to [`BroadcastStore::update`](crate::traits::BroadcastStore::update).
///
/// Only `Some` fields are written. `areas` is always the full resulting set,
/// never a delta.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BroadcastUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub areas: Option<AreaSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personalisation: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finishes_at: Option<DateTime<Utc>>,
}

impl BroadcastUpdate {
    /// Replace the whole area selection.
    pub fn areas(areas: AreaSet) -> Self {
        Self {
            areas: Some(areas),
            ..Self::default()
        }
    }

    /// Open the transmission window at `starts_at` for [`default_ttl`].
    pub fn window_from(starts_at: DateTime<Utc>) -> Self {
        Self {
            starts_at: Some(starts_at),
            finishes_at: Some(starts_at + default_ttl()),
            ..Self::default()
        }
    }

    /// Apply the written fields onto `message`.
    pub fn apply_to(&self, message: &mut BroadcastMessage) {
        if let Some(areas) = &self.areas {
            message.areas = areas.clone();
        }
        if let Some(personalisation) = &self.personalisation {
            message.personalisation = personalisation.clone();
        }
        if let Some(starts_at) = self.starts_at {
            message.starts_at = Some(starts_at);
        }
        if let Some(finishes_at) = self.finishes_at {
            message.finishes_at = Some(finishes_at);
        }
    }
}
