// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Broadcast message lifecycle for the Beacon alert engine.
//!
//! Drafts move from `draft` through `pending-approval` to `broadcasting`.
//! Area edits and the transmission start go through [`BroadcastService`];
//! previews of the alert text come from [`BroadcastPreview`].

pub mod lifecycle;
pub mod preview;

pub use lifecycle::{BroadcastService, INITIAL_AREA_NAMES};
pub use preview::BroadcastPreview;
