// SPDX-FileCopyrightText: 2026 Shortlist Contributors
// SPDX-License-Identifier: LicenseRef-Shortlist-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Shortlist and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

/// Detection-pass counter.
///
/// Every rescan produces a new generation; entity identity never crosses a
/// generation boundary, which is what keeps index-keyed state (selection,
/// history, anchor) from outliving the entities it describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    pub const fn initial() -> Self {
        Self(0)
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}

/// Synthetic identity of one detected entity.
///
/// The ordinal is the entity's position in its detection pass (document
/// order). Two ids compare equal only if they come from the same pass, so an
/// `EntityId` can never be confused with an entity of an earlier page state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId {
    generation: Generation,
    ordinal: u32,
}

impl EntityId {
    pub const fn new(generation: Generation, ordinal: u32) -> Self {
        Self {
            generation,
            ordinal,
        }
    }

    pub const fn generation(self) -> Generation {
        self.generation
    }

    pub const fn ordinal(self) -> u32 {
        self.ordinal
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:e{}", self.generation, self.ordinal)
    }
}

#[cfg(test)]
mod tests {
    use super::{EntityId, Generation};

    #[test]
    fn generation_advances() {
        let g0 = Generation::initial();
        let g1 = g0.next();
        assert_eq!(g0.value(), 0);
        assert_eq!(g1.value(), 1);
        assert!(g0 < g1);
    }

    #[test]
    fn entity_ids_differ_across_generations() {
        let g0 = Generation::initial();
        let g1 = g0.next();
        assert_ne!(EntityId::new(g0, 3), EntityId::new(g1, 3));
        assert_eq!(EntityId::new(g1, 3).to_string(), "g1:e3");
    }
}
