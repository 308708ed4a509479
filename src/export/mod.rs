// SPDX-FileCopyrightText: 2026 Shortlist Contributors
// SPDX-License-Identifier: LicenseRef-Shortlist-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Shortlist and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Export of the selected subset.
//!
//! Gathering reads selected entities and runs the title extraction chain;
//! serialization to JSON/CSV is pure over the gathered list and never
//! mutates engine state. Zero selected entities is an empty result, not an
//! error.

use crate::detect::{first_detail_link, DetectorConfig};
use crate::model::dom::{Document, NodeId};
use crate::model::{Entity, SelectionState};
use crate::normalize::normalize;

/// Suffix of every export artifact name.
const EXPORT_STEM_SUFFIX: &str = "-selected-titles";

pub fn export_json_filename(stem: &str) -> String {
    format!("{stem}{EXPORT_STEM_SUFFIX}.json")
}

pub fn export_csv_filename(stem: &str) -> String {
    format!("{stem}{EXPORT_STEM_SUFFIX}.csv")
}

/// Normalized title for one card, via the extraction chain: the detected
/// title element, else the first item-detail link, else the card's own
/// text. Returns an empty string when every step comes back empty; callers
/// skip such entities rather than failing the batch.
pub fn extract_title(
    doc: &Document,
    node: NodeId,
    title_node: Option<NodeId>,
    config: &DetectorConfig,
) -> String {
    // Entities can outlive the document state they were detected against;
    // an id the document does not know is an empty extraction, not a panic.
    if doc.try_node(node).is_none() {
        return String::new();
    }
    if let Some(title_node) = title_node.filter(|id| doc.try_node(*id).is_some()) {
        let title = normalize(&doc.text_content(title_node));
        if !title.is_empty() {
            return title;
        }
    }
    if let Some(link) = first_detail_link(doc, node, config) {
        let title = normalize(&doc.text_content(link));
        if !title.is_empty() {
            return title;
        }
    }
    normalize(&doc.text_content(node))
}

/// Titles of all currently selected entities, in selection (document)
/// order. Entities whose extraction yields nothing are dropped.
pub fn gather_selected_titles(
    doc: &Document,
    entities: &[Entity],
    selection: &SelectionState,
    config: &DetectorConfig,
) -> Vec<String> {
    selection
        .selected_indices()
        .filter_map(|index| entities.get(index))
        .map(|entity| extract_title(doc, entity.node(), entity.title_node(), config))
        .filter(|title| !title.is_empty())
        .collect()
}

/// Pretty-printed JSON array of the gathered titles.
pub fn to_json(titles: &[String]) -> String {
    // A string slice cannot fail to serialize.
    serde_json::to_string_pretty(titles).unwrap_or_else(|_| String::from("[]"))
}

/// CSV with a `Title` header and one quoted, comma-safe row per title.
pub fn to_csv(titles: &[String]) -> String {
    let mut out = String::from("Title\n");
    for title in titles {
        out.push('"');
        out.push_str(&title.replace('"', "\"\""));
        out.push('"');
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{export_csv_filename, export_json_filename, extract_title, to_csv, to_json};
    use crate::detect::DetectorConfig;
    use crate::format::parse_document;

    fn titles(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|t| (*t).to_owned()).collect()
    }

    #[test]
    fn json_of_nothing_is_the_empty_array() {
        assert_eq!(to_json(&[]), "[]");
    }

    #[test]
    fn json_round_trips_in_order() {
        let gathered = titles(&["A", "B", "C"]);
        let parsed: Vec<String> = serde_json::from_str(&to_json(&gathered)).expect("parse");
        assert_eq!(parsed, gathered);
    }

    #[test]
    fn csv_quotes_every_row_and_doubles_embedded_quotes() {
        let gathered = titles(&["Plain", "Comma, Inc.", "The \"Quoted\" One"]);
        assert_eq!(
            to_csv(&gathered),
            "Title\n\"Plain\"\n\"Comma, Inc.\"\n\"The \"\"Quoted\"\" One\"\n"
        );
    }

    #[test]
    fn csv_of_nothing_is_just_the_header() {
        assert_eq!(to_csv(&[]), "Title\n");
    }

    #[test]
    fn extraction_with_stale_node_ids_is_empty() {
        let big = parse_document("<div><span>a</span><span>b</span><span>c</span></div>");
        let small = parse_document("<div></div>");
        let stale = big.element_ids().last().expect("element id");
        let config = DetectorConfig::default();
        assert_eq!(extract_title(&small, stale, Some(stale), &config), "");
    }

    #[test]
    fn artifact_names_follow_the_convention() {
        assert_eq!(export_json_filename("seasonal"), "seasonal-selected-titles.json");
        assert_eq!(export_csv_filename("seasonal"), "seasonal-selected-titles.csv");
    }
}
