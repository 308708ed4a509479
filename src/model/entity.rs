// SPDX-FileCopyrightText: 2026 Shortlist Contributors
// SPDX-License-Identifier: LicenseRef-Shortlist-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Shortlist and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Detected entities.
//!
//! An entity is the engine-side record for one listing element: a synthetic
//! id, non-owning node references into the host document, and the normalized
//! title captured at detection time. Entities are recreated wholesale on
//! every rescan; none outlives its detection pass.

use super::dom::NodeId;
use super::ids::EntityId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    entity_id: EntityId,
    node: NodeId,
    title_node: Option<NodeId>,
    title: String,
}

impl Entity {
    pub fn new(entity_id: EntityId, node: NodeId, title_node: Option<NodeId>, title: String) -> Self {
        Self {
            entity_id,
            node,
            title_node,
            title,
        }
    }

    pub fn entity_id(&self) -> EntityId {
        self.entity_id
    }

    /// The card element in the host document.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// The title element, when detection found one directly.
    pub fn title_node(&self) -> Option<NodeId> {
        self.title_node
    }

    /// Normalized title captured at detection time. May be empty when
    /// extraction found nothing usable; such entities are skipped on export.
    pub fn title(&self) -> &str {
        &self.title
    }
}
