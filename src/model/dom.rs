// SPDX-FileCopyrightText: 2026 Shortlist Contributors
// SPDX-License-Identifier: LicenseRef-Shortlist-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Shortlist and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Host document tree.
//!
//! The engine runs against documents it does not own or control. This module
//! gives those documents an explicit arena representation: nodes are created
//! in document order, `NodeId` is a dense index, and all engine-side state
//! references nodes through ids rather than attaching fields to them.

use std::collections::BTreeMap;
use std::fmt;

use smol_str::SmolStr;

/// Index of a node inside its [`Document`] arena.
///
/// Ids are only minted by the owning document; two ids from different
/// documents must not be mixed (they are plain indices).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// The synthetic root every document starts with.
    pub const ROOT: NodeId = NodeId(0);

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// One slot in a node's child list. Text is kept interleaved with element
/// children so `text_content` reproduces document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    Element(NodeId),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    tag: SmolStr,
    classes: Vec<SmolStr>,
    attrs: BTreeMap<SmolStr, String>,
    parent: Option<NodeId>,
    children: Vec<Child>,
}

impl Node {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn classes(&self) -> &[SmolStr] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    fn child_elements(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children.iter().filter_map(|child| match child {
            Child::Element(id) => Some(*id),
            Child::Text(_) => None,
        })
    }
}

/// An arena of nodes rooted at a synthetic `#document` element.
///
/// A freshly constructed document is "empty" in the engine's sense: it has
/// no real elements, and every query over it yields nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                tag: SmolStr::new_static("#document"),
                classes: Vec::new(),
                attrs: BTreeMap::new(),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Number of real (non-root) elements.
    pub fn element_count(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.element_count() == 0
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Like [`Document::node`], but `None` for ids this document never
    /// minted (e.g. ids captured against an earlier document state).
    pub fn try_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Appends an element under `parent` and returns its id.
    ///
    /// Tag and attribute names are lowercased; the `class` attribute is also
    /// split into the node's class list.
    pub fn push_element<'a>(
        &mut self,
        parent: NodeId,
        tag: &str,
        attrs: impl IntoIterator<Item = (&'a str, String)>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let mut attr_map: BTreeMap<SmolStr, String> = BTreeMap::new();
        for (name, value) in attrs {
            attr_map.insert(SmolStr::new(name.to_ascii_lowercase()), value);
        }
        let classes = attr_map
            .get("class")
            .map(|value| value.split_whitespace().map(SmolStr::new).collect())
            .unwrap_or_default();
        self.nodes.push(Node {
            tag: SmolStr::new(tag.to_ascii_lowercase()),
            classes,
            attrs: attr_map,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.index()].children.push(Child::Element(id));
        id
    }

    /// Appends a text child under `parent`. Empty text is dropped.
    pub fn push_text(&mut self, parent: NodeId, text: &str) {
        if text.is_empty() {
            return;
        }
        self.nodes[parent.index()]
            .children
            .push(Child::Text(text.to_owned()));
    }

    /// All real elements in document order.
    pub fn element_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (1..self.nodes.len()).map(|i| NodeId(i as u32))
    }

    /// Ancestors of `id`, nearest first, excluding the synthetic root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut current = self.node(id).parent();
        std::iter::from_fn(move || {
            let next = current.filter(|id| *id != NodeId::ROOT)?;
            current = self.node(next).parent();
            Some(next)
        })
    }

    pub fn is_ancestor_of(&self, ancestor: NodeId, descendant: NodeId) -> bool {
        self.ancestors(descendant).any(|id| id == ancestor)
    }

    /// Descendant elements of `id` in document order, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.node(id).child_elements().collect();
        stack.reverse();
        while let Some(next) = stack.pop() {
            out.push(next);
            let mut children: Vec<NodeId> = self.node(next).child_elements().collect();
            children.reverse();
            stack.append(&mut children);
        }
        out
    }

    /// Concatenated text of `id`'s subtree in document order. No whitespace
    /// cleanup happens here; callers normalize.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        for child in self.node(id).children() {
            match child {
                Child::Text(text) => {
                    if !out.is_empty() && !out.ends_with(char::is_whitespace) {
                        out.push(' ');
                    }
                    out.push_str(text);
                }
                Child::Element(child_id) => self.collect_text(*child_id, out),
            }
        }
    }

    /// Host-supplied layout height hint in pixels.
    ///
    /// A live DOM exposes `offsetHeight`; a parsed document carries the hint
    /// explicitly, either as a `height: <n>px` declaration in the inline
    /// `style` or as a `data-height` attribute.
    pub fn layout_height(&self, id: NodeId) -> Option<f32> {
        let node = self.node(id);
        if let Some(style) = node.attr("style") {
            if let Some(height) = style_height_px(style) {
                return Some(height);
            }
        }
        node.attr("data-height")
            .and_then(|value| value.trim().parse::<f32>().ok())
    }
}

fn style_height_px(style: &str) -> Option<f32> {
    for declaration in style.split(';') {
        let Some((name, value)) = declaration.split_once(':') else {
            continue;
        };
        if !name.trim().eq_ignore_ascii_case("height") {
            continue;
        }
        let value = value.trim();
        let Some(number) = value.strip_suffix("px") else {
            continue;
        };
        return number.trim().parse::<f32>().ok();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{Document, NodeId};

    fn sample() -> (Document, NodeId, NodeId, NodeId) {
        let mut doc = Document::new();
        let outer = doc.push_element(
            NodeId::ROOT,
            "div",
            [("class", "card outer".to_owned()), ("style", "height: 140px".to_owned())],
        );
        let link = doc.push_element(outer, "a", [("href", "/anime/1".to_owned())]);
        doc.push_text(link, "Cowboy Bebop");
        let aside = doc.push_element(outer, "span", []);
        doc.push_text(aside, "8.75");
        (doc, outer, link, aside)
    }

    #[test]
    fn empty_document_has_no_elements() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.element_ids().count(), 0);
        assert_eq!(doc.text_content(NodeId::ROOT), "");
    }

    #[test]
    fn ancestry_and_text() {
        let (doc, outer, link, aside) = sample();
        assert!(doc.is_ancestor_of(outer, link));
        assert!(!doc.is_ancestor_of(link, outer));
        assert_eq!(doc.descendants(outer), vec![link, aside]);
        assert_eq!(doc.text_content(outer), "Cowboy Bebop 8.75");
        assert!(doc.node(outer).has_class("card"));
    }

    #[test]
    fn try_node_rejects_ids_the_document_never_minted() {
        let (doc, outer, ..) = sample();
        assert!(doc.try_node(outer).is_some());
        assert!(doc.try_node(NodeId(99)).is_none());
    }

    #[test]
    fn layout_height_reads_style_then_data_attr() {
        let (doc, outer, link, _) = sample();
        assert_eq!(doc.layout_height(outer), Some(140.0));
        assert_eq!(doc.layout_height(link), None);

        let mut doc = Document::new();
        let hinted = doc.push_element(NodeId::ROOT, "div", [("data-height", "88".to_owned())]);
        assert_eq!(doc.layout_height(hinted), Some(88.0));
    }
}
