// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Beacon integration tests.
//!
//! Provides in-memory collaborators so broadcast lifecycle tests run without
//! a remote store.
//!
//! # Components
//!
//! - [`MockBroadcastStore`] - In-memory broadcast store with a call log and one-shot failure injection
//! - [`MockTemplateStore`] - Versioned template lookup
//! - [`FixedClock`] - Manually advanced clock
//! - [`fixtures`] - A small area library with real-shaped ids

pub mod clock;
pub mod fixtures;
pub mod mock_store;

pub use clock::FixedClock;
pub use mock_store::{MockBroadcastStore, MockTemplateStore, StoreCall, StoreOp};
