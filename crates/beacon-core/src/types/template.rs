// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Broadcast template as returned by the template store.

use serde::{Deserialize, Serialize};

/// A versioned broadcast template. Read-only to this engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub version: i64,
    /// Body text with `((placeholder))` markers.
    pub content: String,
}
