// SPDX-FileCopyrightText: 2026 Shortlist Contributors
// SPDX-License-Identifier: LicenseRef-Shortlist-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Shortlist and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::SelectionState;

use super::{apply_op, HistoryLog, SelectionOp, HISTORY_CAPACITY};

fn flags(state: &SelectionState) -> Vec<bool> {
    (0..state.len()).map(|i| state.selected(i)).collect()
}

#[test]
fn toggle_flips_and_reports_change() {
    let mut state = SelectionState::new(3);
    let outcome = apply_op(&mut state, &SelectionOp::Toggle { index: 1 });
    assert_eq!(outcome.changed, 1);
    assert_eq!(flags(&state), [false, true, false]);

    let outcome = apply_op(&mut state, &SelectionOp::Toggle { index: 7 });
    assert_eq!(outcome.changed, 0);
    assert_eq!(flags(&state), [false, true, false]);
}

#[test]
fn select_all_deselect_all_invert() {
    let mut state = SelectionState::new(3);
    state.set(0, true);

    let outcome = apply_op(&mut state, &SelectionOp::SelectAll);
    assert_eq!(outcome.changed, 2);
    assert_eq!(flags(&state), [true, true, true]);

    let outcome = apply_op(&mut state, &SelectionOp::Invert);
    assert_eq!(outcome.changed, 3);
    assert_eq!(flags(&state), [false, false, false]);

    apply_op(&mut state, &SelectionOp::Toggle { index: 2 });
    let outcome = apply_op(&mut state, &SelectionOp::DeselectAll);
    assert_eq!(outcome.changed, 1);
    assert_eq!(state.selected_count(), 0);
}

#[test]
fn range_is_inclusive_and_order_insensitive() {
    for (a, b) in [(1usize, 3usize), (3, 1)] {
        let mut state = SelectionState::new(5);
        apply_op(&mut state, &SelectionOp::Range { a, b, selected: true });
        assert_eq!(flags(&state), [false, true, true, true, false]);
    }
}

#[test]
fn range_skips_out_of_range_indices_and_consumes_anchor() {
    let mut state = SelectionState::new(3);
    state.set_anchor(1);
    let outcome = apply_op(
        &mut state,
        &SelectionOp::Range {
            a: 1,
            b: 9,
            selected: true,
        },
    );
    assert_eq!(outcome.changed, 2);
    assert_eq!(flags(&state), [false, true, true]);
    assert_eq!(state.anchor(), None);
}

#[test]
fn undo_redo_restore_exact_states() {
    let mut state = SelectionState::new(4);
    let mut history = HistoryLog::new();

    let mutations = [
        SelectionOp::Toggle { index: 0 },
        SelectionOp::Range {
            a: 1,
            b: 2,
            selected: true,
        },
        SelectionOp::Invert,
    ];
    let mut seen = vec![flags(&state)];
    for op in &mutations {
        history.record_before_mutation(state.snapshot());
        apply_op(&mut state, op);
        seen.push(flags(&state));
    }

    // Undo walks back through every pre-mutation state.
    for expected in seen.iter().rev().skip(1) {
        let snapshot = history.undo(state.snapshot()).expect("undo");
        state.restore(&snapshot);
        assert_eq!(&flags(&state), expected);
    }
    assert!(!history.can_undo());

    // Redo walks forward again.
    for expected in seen.iter().skip(1) {
        let snapshot = history.redo(state.snapshot()).expect("redo");
        state.restore(&snapshot);
        assert_eq!(&flags(&state), expected);
    }
    assert!(!history.can_redo());
}

#[test]
fn undo_redo_on_empty_stacks_are_no_ops() {
    let mut history = HistoryLog::new();
    let state = SelectionState::new(2);
    assert!(history.undo(state.snapshot()).is_none());
    assert!(history.redo(state.snapshot()).is_none());
    // A failed undo must not have parked anything on redo.
    assert!(!history.can_redo());
    assert!(!history.can_undo());
}

#[test]
fn history_stacks_never_exceed_capacity() {
    let mut state = SelectionState::new(1);
    let mut history = HistoryLog::new();
    for _ in 0..100 {
        history.record_before_mutation(state.snapshot());
        apply_op(&mut state, &SelectionOp::Toggle { index: 0 });
    }
    assert_eq!(history.undo_len(), HISTORY_CAPACITY);

    // Drain to redo; it is bounded the same way.
    for _ in 0..100 {
        if let Some(snapshot) = history.undo(state.snapshot()) {
            state.restore(&snapshot);
        }
    }
    assert_eq!(history.undo_len(), 0);
    assert_eq!(history.redo_len(), HISTORY_CAPACITY);
}

#[test]
fn eviction_drops_the_oldest_snapshot_first() {
    let mut state = SelectionState::new(1);
    let mut history = HistoryLog::new();
    // Capacity+1 toggles of a single flag: the very first snapshot
    // (unselected) is evicted, so full unwinding lands on snapshot 1.
    for _ in 0..=HISTORY_CAPACITY {
        history.record_before_mutation(state.snapshot());
        apply_op(&mut state, &SelectionOp::Toggle { index: 0 });
    }
    let mut last = None;
    while let Some(snapshot) = history.undo(state.snapshot()) {
        state.restore(&snapshot);
        last = Some(flags(&state));
    }
    assert_eq!(last, Some(vec![true]));
}

#[test]
fn new_mutation_clears_redo() {
    let mut state = SelectionState::new(2);
    let mut history = HistoryLog::new();

    history.record_before_mutation(state.snapshot());
    apply_op(&mut state, &SelectionOp::SelectAll);
    let snapshot = history.undo(state.snapshot()).expect("undo");
    state.restore(&snapshot);
    assert!(history.can_redo());

    history.record_before_mutation(state.snapshot());
    apply_op(&mut state, &SelectionOp::Toggle { index: 0 });
    assert!(!history.can_redo());
}
