// SPDX-FileCopyrightText: 2026 Shortlist Contributors
// SPDX-License-Identifier: LicenseRef-Shortlist-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Shortlist and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! The host document tree, detected entities and their synthetic ids, the
//! live selection state with its snapshots, and the settings record.

pub mod dom;
pub mod entity;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod selection;
pub mod settings;

pub use dom::{Child, Document, Node, NodeId};
pub use entity::Entity;
pub use ids::{EntityId, Generation};
pub use selection::{SelectionSnapshot, SelectionState};
pub use settings::{Settings, Theme};
