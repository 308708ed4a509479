// SPDX-FileCopyrightText: 2026 Shortlist Contributors
// SPDX-License-Identifier: LicenseRef-Shortlist-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Shortlist and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Entity detection.
//!
//! Finds the repeated "entry" elements on a listing page. The host document
//! is uncontrolled, so detection is an ordered fallback over heuristics, not
//! a formal parse: the first strategy that yields at least one candidate
//! wins. Deterministic for a fixed document, O(n) in node count, and an
//! empty result is a normal outcome rather than an error.

use std::collections::BTreeSet;

use regex::Regex;
use smallvec::SmallVec;

use crate::model::dom::{Document, NodeId};

/// Heuristic signatures the detector matches against. None of these are
/// guaranteed stable on the host page, which is why there are three layers
/// of them.
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// Class names that mark a title text element (strategy 1 seed).
    pub title_classes: Vec<String>,
    /// Class names that mark a known card container.
    pub card_classes: Vec<String>,
    /// Tags treated as generic entry containers (strategy 2).
    pub container_tags: Vec<String>,
    /// Class names treated as generic entry containers (strategy 2).
    pub container_classes: Vec<String>,
    /// Pattern an item-detail link's `href` must match.
    pub detail_href: Regex,
    /// Ancestor height (px) above which an element counts as a visual card
    /// when no known card class matches.
    pub min_card_height: f32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            title_classes: to_strings(&["title", "entry-title", "item-title", "link-title"]),
            card_classes: to_strings(&[
                "card",
                "entry-card",
                "list-card",
                "media-card",
                "seasonal-card",
            ]),
            container_tags: to_strings(&["li", "article", "tr"]),
            container_classes: to_strings(&["item", "entry", "cell"]),
            detail_href: Regex::new(r"/(?:anime|manga|title|item)/\d+")
                .expect("detail href pattern"),
            min_card_height: 100.0,
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

/// One detected entry: the card element plus the title element when
/// strategy 1 matched one directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub node: NodeId,
    pub title_node: Option<NodeId>,
}

/// Runs the fallback chain and post-processing. Result is in document
/// order and contains only top-level candidates: no candidate is an
/// ancestor of another.
pub fn detect(doc: &Document, config: &DetectorConfig) -> Vec<Candidate> {
    let mut candidates = by_title_signature(doc, config);
    if candidates.is_empty() {
        tracing::debug!("no title-signature entries; trying generic containers");
        candidates = by_generic_containers(doc, config);
    }
    if candidates.is_empty() {
        tracing::debug!("no generic containers; falling back to detail-link parents");
        candidates = by_link_parents(doc, config);
    }

    let deduped = dedupe(candidates);
    let top_level = keep_top_level(doc, deduped);
    tracing::debug!(count = top_level.len(), "detection pass complete");
    top_level
}

/// Strategy 1: title text elements, hoisted to the nearest known card
/// ancestor, or failing that the nearest ancestor tall enough to be a
/// visual card.
fn by_title_signature(doc: &Document, config: &DetectorConfig) -> Vec<Candidate> {
    let mut out = Vec::new();
    for id in doc.element_ids() {
        let node = doc.node(id);
        if !config.title_classes.iter().any(|class| node.has_class(class)) {
            continue;
        }
        let known_card = doc
            .ancestors(id)
            .find(|a| card_class_matches(doc, *a, config));
        let card = known_card.or_else(|| {
            doc.ancestors(id).find(|a| {
                doc.layout_height(*a)
                    .is_some_and(|height| height > config.min_card_height)
            })
        });
        if let Some(card) = card {
            out.push(Candidate {
                node: card,
                title_node: Some(id),
            });
        }
    }
    out
}

/// Strategy 2: generic containers that hold an item-detail link.
fn by_generic_containers(doc: &Document, config: &DetectorConfig) -> Vec<Candidate> {
    let mut out = Vec::new();
    for id in doc.element_ids() {
        let node = doc.node(id);
        let tag_matches = config.container_tags.iter().any(|tag| node.tag() == tag);
        let class_matches = config
            .container_classes
            .iter()
            .any(|class| node.has_class(class));
        if !tag_matches && !class_matches {
            continue;
        }
        if contains_detail_link(doc, id, config) {
            out.push(Candidate {
                node: id,
                title_node: None,
            });
        }
    }
    out
}

/// Strategy 3 (last resort): the parent element of every item-detail link.
fn by_link_parents(doc: &Document, config: &DetectorConfig) -> Vec<Candidate> {
    let mut parents: SmallVec<[NodeId; 16]> = SmallVec::new();
    for id in doc.element_ids() {
        if !is_detail_link(doc, id, config) {
            continue;
        }
        let Some(parent) = doc.node(id).parent() else {
            continue;
        };
        if parent != NodeId::ROOT {
            parents.push(parent);
        }
    }
    parents
        .into_iter()
        .map(|node| Candidate {
            node,
            title_node: None,
        })
        .collect()
}

fn card_class_matches(doc: &Document, id: NodeId, config: &DetectorConfig) -> bool {
    let node = doc.node(id);
    config.card_classes.iter().any(|class| node.has_class(class))
}

fn is_detail_link(doc: &Document, id: NodeId, config: &DetectorConfig) -> bool {
    let node = doc.node(id);
    node.tag() == "a"
        && node
            .attr("href")
            .is_some_and(|href| config.detail_href.is_match(href))
}

/// First item-detail link inside `id`'s subtree, document order.
pub(crate) fn first_detail_link(
    doc: &Document,
    id: NodeId,
    config: &DetectorConfig,
) -> Option<NodeId> {
    doc.descendants(id)
        .into_iter()
        .find(|d| is_detail_link(doc, *d, config))
}

fn contains_detail_link(doc: &Document, id: NodeId, config: &DetectorConfig) -> bool {
    first_detail_link(doc, id, config).is_some()
}

fn dedupe(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut seen: BTreeSet<NodeId> = BTreeSet::new();
    candidates
        .into_iter()
        .filter(|candidate| seen.insert(candidate.node))
        .collect()
}

/// Drops every candidate that is a descendant of another candidate.
fn keep_top_level(doc: &Document, candidates: Vec<Candidate>) -> Vec<Candidate> {
    let nodes: BTreeSet<NodeId> = candidates.iter().map(|c| c.node).collect();
    let mut out: Vec<Candidate> = candidates
        .into_iter()
        .filter(|candidate| !doc.ancestors(candidate.node).any(|a| nodes.contains(&a)))
        .collect();
    out.sort_by_key(|candidate| candidate.node);
    out
}
