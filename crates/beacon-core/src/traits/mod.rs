// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator trait definitions.
//!
//! Store and graph traits use `#[async_trait]` for dynamic dispatch
//! compatibility; implementations are shared as `Arc<dyn Trait>`.

pub mod area;
pub mod clock;
pub mod store;

pub use area::AreaGraph;
pub use clock::{Clock, SystemClock};
pub use store::{BroadcastStore, TemplateStore};
