// SPDX-FileCopyrightText: 2026 Shortlist Contributors
// SPDX-License-Identifier: LicenseRef-Shortlist-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Shortlist and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The selection engine.
//!
//! [`SelectionContext`] owns everything with a lifetime tied to the current
//! detection pass: the entity list, the per-index selection flags, the range
//! anchor, and the undo/redo log. It is the only writer of all four, so the
//! ordering contract — snapshot history before a mutation, persist after —
//! holds at every call site.
//!
//! Persistence is deliberately soft: a failing store is logged and the
//! in-memory selection stays authoritative for the rest of the session.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::detect::{detect, DetectorConfig};
use crate::export;
use crate::model::dom::Document;
use crate::model::{Entity, EntityId, Generation, SelectionState, Settings};
use crate::ops::{apply_op, HistoryLog, SelectionOp};
use crate::store::{keys, KeyValueStore};

pub struct SelectionContext<S: KeyValueStore> {
    store: S,
    detector: DetectorConfig,
    settings: Settings,
    generation: Generation,
    entities: Vec<Entity>,
    selection: SelectionState,
    history: HistoryLog,
    /// Index of the most recently acted-on entity, for implicit ranges.
    last_acted: Option<usize>,
}

impl<S: KeyValueStore> SelectionContext<S> {
    pub fn new(store: S) -> Self {
        Self::with_detector(store, DetectorConfig::default())
    }

    pub fn with_detector(store: S, detector: DetectorConfig) -> Self {
        let settings = Settings::load(&store);
        Self {
            store,
            detector,
            settings,
            generation: Generation::initial(),
            entities: Vec::new(),
            selection: SelectionState::new(0),
            history: HistoryLog::new(),
            last_acted: None,
        }
    }

    /// Re-detects entities in `doc` and rebuilds all per-pass state.
    ///
    /// Selection survives by normalized title, not by index: flags are
    /// reconciled against the persisted title set, so entities that kept
    /// their title across a mutation come back selected. The undo/redo log
    /// is cleared because its snapshots are index-keyed against the old
    /// entity list.
    pub fn rescan(&mut self, doc: &Document) {
        self.generation = self.generation.next();
        let candidates = detect(doc, &self.detector);

        self.entities = candidates
            .iter()
            .enumerate()
            .map(|(ordinal, candidate)| {
                let title =
                    export::extract_title(doc, candidate.node, candidate.title_node, &self.detector);
                Entity::new(
                    EntityId::new(self.generation, ordinal as u32),
                    candidate.node,
                    candidate.title_node,
                    title,
                )
            })
            .collect();

        let persisted = self.persisted_titles();
        let titles: Vec<String> = self.entities.iter().map(|e| e.title().to_owned()).collect();
        self.selection = SelectionState::reconcile(&persisted, &titles);
        self.history.clear();
        self.last_acted = None;

        tracing::debug!(
            generation = %self.generation,
            entities = self.entities.len(),
            reselected = self.selection.selected_count(),
            "rescan complete"
        );
    }

    /// Flips one entity. Returns false for out-of-range indices, in which
    /// case nothing is recorded or persisted.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.selection.len() {
            return false;
        }
        self.apply(SelectionOp::Toggle { index });
        self.last_acted = Some(index);
        true
    }

    /// Returns the number of flags that changed.
    pub fn select_all(&mut self) -> usize {
        self.apply(SelectionOp::SelectAll)
    }

    /// Returns the number of flags that changed.
    pub fn deselect_all(&mut self) -> usize {
        self.apply(SelectionOp::DeselectAll)
    }

    /// Returns the number of flags that changed (always the entity count).
    pub fn invert(&mut self) -> usize {
        self.apply(SelectionOp::Invert)
    }

    /// Marks `index` as the range anchor. Out-of-range indices are rejected.
    pub fn set_anchor(&mut self, index: usize) -> bool {
        self.selection.set_anchor(index)
    }

    pub fn clear_anchor(&mut self) {
        self.selection.clear_anchor();
    }

    /// Sets every index between `a` and `b` inclusive, either order. The
    /// anchor is consumed. Returns the number of flags that changed.
    pub fn apply_range(&mut self, a: usize, b: usize, selected: bool) -> usize {
        let changed = self.apply(SelectionOp::Range { a, b, selected });
        self.last_acted = Some(b);
        changed
    }

    /// Range from the anchor to `index`. Without an anchor this degrades to
    /// a plain toggle of `index`.
    pub fn range_from_anchor(&mut self, index: usize, selected: bool) -> usize {
        match self.selection.anchor() {
            Some(anchor) => self.apply_range(anchor, index, selected),
            None => usize::from(self.toggle(index)),
        }
    }

    /// Range from the most recently acted-on entity to `index`; same
    /// degradation as [`Self::range_from_anchor`] when there is none.
    pub fn range_from_last(&mut self, index: usize, selected: bool) -> usize {
        match self.last_acted {
            Some(last) => self.apply_range(last, index, selected),
            None => usize::from(self.toggle(index)),
        }
    }

    /// Steps back one mutation. False when the undo stack is empty.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo(self.selection.snapshot()) else {
            return false;
        };
        self.selection.restore(&snapshot);
        self.persist_selection();
        true
    }

    /// Re-applies the most recently undone mutation. False when the redo
    /// stack is empty.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo(self.selection.snapshot()) else {
            return false;
        };
        self.selection.restore(&snapshot);
        self.persist_selection();
        true
    }

    /// Titles of the selected entities, freshly extracted from `doc` in
    /// document order.
    pub fn selected_titles(&self, doc: &Document) -> Vec<String> {
        export::gather_selected_titles(doc, &self.entities, &self.selection, &self.detector)
    }

    pub fn export_json(&self, doc: &Document) -> String {
        export::to_json(&self.selected_titles(doc))
    }

    pub fn export_csv(&self, doc: &Document) -> String {
        export::to_csv(&self.selected_titles(doc))
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Replaces the settings record and writes it through. A failing store
    /// is logged; the in-memory settings still change.
    pub fn update_settings(&mut self, settings: Settings) {
        self.settings = settings;
        if let Err(err) = settings.save(&mut self.store) {
            tracing::warn!(error = %err, "settings write failed; keeping in-memory value");
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Snapshot, mutate, persist. Every selection mutation funnels through
    /// here so no call site can skip either bookend.
    fn apply(&mut self, op: SelectionOp) -> usize {
        self.history.record_before_mutation(self.selection.snapshot());
        let outcome = apply_op(&mut self.selection, &op);
        self.persist_selection();
        outcome.changed
    }

    fn persist_selection(&mut self) {
        let titles: Vec<Value> = self
            .selection
            .selected_indices()
            .filter_map(|index| self.entities.get(index))
            .map(Entity::title)
            .filter(|title| !title.is_empty())
            .map(|title| Value::String(title.to_owned()))
            .collect();
        if let Err(err) = self.store.set(keys::SELECTED_TITLES, Value::Array(titles)) {
            tracing::warn!(error = %err, "selection write failed; in-memory state kept");
        }
    }

    fn persisted_titles(&self) -> BTreeSet<String> {
        match self.store.get(keys::SELECTED_TITLES) {
            Ok(Some(Value::Array(values))) => values
                .into_iter()
                .filter_map(|value| match value {
                    Value::String(title) => Some(title),
                    other => {
                        tracing::warn!(value = %other, "skipping non-string persisted title");
                        None
                    }
                })
                .collect(),
            Ok(Some(other)) => {
                tracing::warn!(value = %other, "persisted selection is not an array; ignoring");
                BTreeSet::new()
            }
            Ok(None) => BTreeSet::new(),
            Err(err) => {
                tracing::warn!(error = %err, "selection read failed; starting unselected");
                BTreeSet::new()
            }
        }
    }
}
