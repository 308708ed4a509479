// SPDX-FileCopyrightText: 2026 Shortlist Contributors
// SPDX-License-Identifier: LicenseRef-Shortlist-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Shortlist and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Selection mutations.
//!
//! Every way the selection can change is an explicit [`SelectionOp`] applied
//! through [`apply_op`]. The single chokepoint is what lets the engine
//! snapshot history before and persist after each mutation without any call
//! site forgetting either half.

pub mod history;

pub use history::{HistoryLog, HISTORY_CAPACITY};

use crate::model::SelectionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOp {
    /// Flip one entity's flag. Out-of-range is a silent no-op.
    Toggle { index: usize },
    SelectAll,
    DeselectAll,
    Invert,
    /// Set every index in the inclusive range to `selected`. Endpoints come
    /// in either order; out-of-range positions are skipped. Applying a range
    /// consumes the anchor.
    Range { a: usize, b: usize, selected: bool },
}

/// Minimal delta of one op application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpOutcome {
    /// Number of entity flags that actually changed value.
    pub changed: usize,
}

pub fn apply_op(state: &mut SelectionState, op: &SelectionOp) -> OpOutcome {
    let mut changed = 0;
    match *op {
        SelectionOp::Toggle { index } => {
            if state.toggle(index) {
                changed = 1;
            }
        }
        SelectionOp::SelectAll => {
            for index in 0..state.len() {
                if state.set(index, true) {
                    changed += 1;
                }
            }
        }
        SelectionOp::DeselectAll => {
            for index in 0..state.len() {
                if state.set(index, false) {
                    changed += 1;
                }
            }
        }
        SelectionOp::Invert => {
            for index in 0..state.len() {
                state.toggle(index);
                changed += 1;
            }
        }
        SelectionOp::Range { a, b, selected } => {
            let start = a.min(b);
            let end = a.max(b);
            for index in start..=end {
                if state.set(index, selected) {
                    changed += 1;
                }
            }
            state.clear_anchor();
        }
    }
    OpOutcome { changed }
}

#[cfg(test)]
mod tests;
