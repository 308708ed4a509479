// SPDX-FileCopyrightText: 2026 Shortlist Contributors
// SPDX-License-Identifier: LicenseRef-Shortlist-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Shortlist and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Bounded undo/redo history.
//!
//! Two stacks of selection snapshots, 50 deep each. Pushing past the bound
//! evicts the oldest entry, and any new user-initiated mutation clears the
//! redo stack: linear history, no branching redo.

use std::collections::VecDeque;

use crate::model::SelectionSnapshot;

pub const HISTORY_CAPACITY: usize = 50;

#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    undo: VecDeque<SelectionSnapshot>,
    redo: VecDeque<SelectionSnapshot>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the pre-mutation snapshot. Evicts the oldest undo entry at
    /// the bound and drops the whole redo stack.
    pub fn record_before_mutation(&mut self, snapshot: SelectionSnapshot) {
        push_bounded(&mut self.undo, snapshot);
        self.redo.clear();
    }

    /// Pops the most recent undo snapshot, parking `current` on the redo
    /// stack. `None` means there is nothing to undo and no state changed.
    pub fn undo(&mut self, current: SelectionSnapshot) -> Option<SelectionSnapshot> {
        let previous = self.undo.pop_back()?;
        push_bounded(&mut self.redo, current);
        Some(previous)
    }

    /// Symmetric to [`HistoryLog::undo`].
    pub fn redo(&mut self, current: SelectionSnapshot) -> Option<SelectionSnapshot> {
        let next = self.redo.pop_back()?;
        push_bounded(&mut self.undo, current);
        Some(next)
    }

    /// Drops both stacks. Used when a rescan starts a new entity
    /// generation: snapshots of the old generation are meaningless against
    /// the new entity list.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }
}

fn push_bounded(stack: &mut VecDeque<SelectionSnapshot>, snapshot: SelectionSnapshot) {
    if stack.len() == HISTORY_CAPACITY {
        stack.pop_front();
    }
    stack.push_back(snapshot);
}
