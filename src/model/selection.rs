// SPDX-FileCopyrightText: 2026 Shortlist Contributors
// SPDX-License-Identifier: LicenseRef-Shortlist-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Shortlist and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Live selection state and immutable snapshots.
//!
//! One flag per entity of the current detection pass, plus the optional
//! anchor used by range selection. All mutation goes through `ops`; nothing
//! outside the engine touches these fields directly.

use std::collections::BTreeSet;

/// Immutable capture of per-entity selected flags, as pushed onto the
/// undo/redo stacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSnapshot {
    flags: Box<[bool]>,
}

impl SelectionSnapshot {
    pub fn flags(&self) -> &[bool] {
        &self.flags
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

/// The live mapping from entity index to selected flag, plus the range
/// anchor. Sized to the current entity list; rebuilt on every rescan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    flags: Vec<bool>,
    anchor: Option<usize>,
}

impl SelectionState {
    pub fn new(count: usize) -> Self {
        Self {
            flags: vec![false; count],
            anchor: None,
        }
    }

    /// Rebuilds selection after a rescan: everything unselected, then each
    /// index whose normalized title is in `persisted_titles` comes back
    /// selected. Matching is by title text because indices are not stable
    /// across rescans.
    pub fn reconcile(persisted_titles: &BTreeSet<String>, titles: &[String]) -> Self {
        let mut state = Self::new(titles.len());
        for (index, title) in titles.iter().enumerate() {
            if !title.is_empty() && persisted_titles.contains(title) {
                state.flags[index] = true;
            }
        }
        state
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// False for out-of-range indices.
    pub fn selected(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    /// Returns whether the flag changed. Out-of-range indices are a silent
    /// no-op.
    pub fn set(&mut self, index: usize, selected: bool) -> bool {
        match self.flags.get_mut(index) {
            Some(flag) if *flag != selected => {
                *flag = selected;
                true
            }
            _ => false,
        }
    }

    /// Flips one flag; out-of-range indices are a silent no-op.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.flags.get_mut(index) {
            Some(flag) => {
                *flag = !*flag;
                true
            }
            None => false,
        }
    }

    pub fn selected_count(&self) -> usize {
        self.flags.iter().filter(|flag| **flag).count()
    }

    pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(index, flag)| flag.then_some(index))
    }

    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    /// Records the range anchor. Out-of-range indices are rejected so the
    /// anchor always references a live entity.
    pub fn set_anchor(&mut self, index: usize) -> bool {
        if index < self.flags.len() {
            self.anchor = Some(index);
            true
        } else {
            false
        }
    }

    pub fn clear_anchor(&mut self) {
        self.anchor = None;
    }

    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            flags: self.flags.clone().into_boxed_slice(),
        }
    }

    /// Best-effort restore by index: the live length is kept, snapshot
    /// positions beyond it are dropped, and positions the snapshot does not
    /// cover fall back to unselected.
    pub fn restore(&mut self, snapshot: &SelectionSnapshot) {
        for (index, flag) in self.flags.iter_mut().enumerate() {
            *flag = snapshot.flags().get(index).copied().unwrap_or(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::SelectionState;

    #[test]
    fn out_of_range_operations_are_silent() {
        let mut state = SelectionState::new(2);
        assert!(!state.toggle(5));
        assert!(!state.set(5, true));
        assert!(!state.set_anchor(5));
        assert_eq!(state.selected_count(), 0);
        assert_eq!(state.anchor(), None);
    }

    #[test]
    fn reconcile_matches_by_title() {
        let persisted: BTreeSet<String> =
            ["Monster".to_owned(), "Mushishi".to_owned()].into_iter().collect();
        let titles = vec![
            "Mushishi".to_owned(),
            "Berserk".to_owned(),
            "Monster".to_owned(),
            String::new(),
        ];
        let state = SelectionState::reconcile(&persisted, &titles);
        assert_eq!(state.selected_indices().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(state.anchor(), None);
    }

    #[test]
    fn restore_truncates_and_backfills() {
        let mut state = SelectionState::new(4);
        state.set(0, true);
        state.set(3, true);
        let snapshot = state.snapshot();

        let mut shrunk = SelectionState::new(2);
        shrunk.restore(&snapshot);
        assert_eq!(shrunk.selected_indices().collect::<Vec<_>>(), vec![0]);

        let mut grown = SelectionState::new(6);
        grown.restore(&snapshot);
        assert_eq!(grown.selected_indices().collect::<Vec<_>>(), vec![0, 3]);
    }
}
