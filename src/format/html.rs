// SPDX-FileCopyrightText: 2026 Shortlist Contributors
// SPDX-License-Identifier: LicenseRef-Shortlist-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Shortlist and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Lenient HTML-subset parser.
//!
//! Listing pages are foreign markup the engine has no say over, so this
//! parser is deliberately forgiving rather than spec-complete: unclosed tags
//! auto-close when an ancestor closes, stray closers are ignored, and nothing
//! here ever fails. Good enough to feed the detector; not a general browser
//! parser.

use crate::model::dom::{Document, NodeId};

const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

const RAW_TEXT_TAGS: &[&str] = &["script", "style"];

/// Parses listing markup into a [`Document`]. Total: malformed input yields
/// a best-effort tree, never an error.
pub fn parse_document(input: &str) -> Document {
    let mut doc = Document::new();
    let mut stack: Vec<NodeId> = vec![NodeId::ROOT];
    let mut pos = 0;

    while pos < input.len() {
        let Some(lt) = input[pos..].find('<').map(|rel| pos + rel) else {
            flush_text(&mut doc, &stack, &input[pos..]);
            break;
        };
        if lt > pos {
            flush_text(&mut doc, &stack, &input[pos..lt]);
        }

        let rest = &input[lt..];
        if let Some(after) = rest.strip_prefix("<!--") {
            pos = match after.find("-->") {
                Some(end) => lt + 4 + end + 3,
                None => input.len(),
            };
        } else if rest.starts_with("<!") || rest.starts_with("<?") {
            pos = match rest.find('>') {
                Some(end) => lt + end + 1,
                None => input.len(),
            };
        } else if let Some(after) = rest.strip_prefix("</") {
            let name: String = after
                .chars()
                .take_while(|c| is_tag_name_char(*c))
                .collect::<String>()
                .to_ascii_lowercase();
            pos = match rest.find('>') {
                Some(end) => lt + end + 1,
                None => input.len(),
            };
            close_tag(&doc, &mut stack, &name);
        } else if rest[1..].starts_with(|c: char| c.is_ascii_alphabetic()) {
            let tag = scan_tag(rest);
            pos = lt + tag.consumed;
            let parent = current_parent(&stack);
            let attrs: Vec<(String, String)> = tag.attrs;
            let id = doc.push_element(
                parent,
                &tag.name,
                attrs.iter().map(|(name, value)| (name.as_str(), value.clone())),
            );
            if RAW_TEXT_TAGS.contains(&tag.name.as_str()) {
                pos = skip_raw_text(input, pos, &tag.name);
            } else if !tag.self_closing && !VOID_TAGS.contains(&tag.name.as_str()) {
                stack.push(id);
            }
        } else {
            // Stray '<' that opens nothing: keep it as text.
            flush_text(&mut doc, &stack, "<");
            pos = lt + 1;
        }
    }

    doc
}

fn current_parent(stack: &[NodeId]) -> NodeId {
    stack.last().copied().unwrap_or(NodeId::ROOT)
}

fn flush_text(doc: &mut Document, stack: &[NodeId], raw: &str) {
    if raw.trim().is_empty() {
        return;
    }
    doc.push_text(current_parent(stack), &decode_entities(raw));
}

fn close_tag(doc: &Document, stack: &mut Vec<NodeId>, name: &str) {
    if name.is_empty() {
        return;
    }
    // Find the nearest open element with this tag; everything above it
    // auto-closes. A closer with no matching opener is ignored.
    let matched = stack
        .iter()
        .rposition(|id| *id != NodeId::ROOT && doc.node(*id).tag() == name);
    if let Some(depth) = matched {
        stack.truncate(depth);
    }
}

struct ScannedTag {
    name: String,
    attrs: Vec<(String, String)>,
    self_closing: bool,
    /// Bytes consumed from the original `<`, inclusive of the closing `>`.
    consumed: usize,
}

fn scan_tag(rest: &str) -> ScannedTag {
    let bytes = rest.as_bytes();
    let mut cursor = 1;
    let name_start = cursor;
    while cursor < bytes.len() && is_tag_name_char(bytes[cursor] as char) {
        cursor += 1;
    }
    let name = rest[name_start..cursor].to_ascii_lowercase();

    let mut attrs = Vec::new();
    let mut self_closing = false;
    loop {
        while cursor < bytes.len() && (bytes[cursor] as char).is_ascii_whitespace() {
            cursor += 1;
        }
        if cursor >= bytes.len() {
            break;
        }
        match bytes[cursor] {
            b'>' => {
                cursor += 1;
                break;
            }
            b'/' if bytes.get(cursor + 1) == Some(&b'>') => {
                self_closing = true;
                cursor += 2;
                break;
            }
            b'/' => {
                cursor += 1;
            }
            _ => {
                let (attr, next) = scan_attr(rest, cursor);
                if next == cursor {
                    // No progress (unexpected byte); step over it.
                    cursor += 1;
                } else {
                    cursor = next;
                    if let Some(attr) = attr {
                        attrs.push(attr);
                    }
                }
            }
        }
    }

    ScannedTag {
        name,
        attrs,
        self_closing,
        consumed: cursor,
    }
}

fn scan_attr(rest: &str, mut cursor: usize) -> (Option<(String, String)>, usize) {
    let bytes = rest.as_bytes();
    let name_start = cursor;
    while cursor < bytes.len() {
        let c = bytes[cursor] as char;
        if c.is_ascii_whitespace() || c == '=' || c == '>' || c == '/' {
            break;
        }
        cursor += 1;
    }
    if cursor == name_start {
        return (None, cursor);
    }
    let name = rest[name_start..cursor].to_ascii_lowercase();

    while cursor < bytes.len() && (bytes[cursor] as char).is_ascii_whitespace() {
        cursor += 1;
    }
    if bytes.get(cursor) != Some(&b'=') {
        // Boolean attribute.
        return (Some((name, String::new())), cursor);
    }
    cursor += 1;
    while cursor < bytes.len() && (bytes[cursor] as char).is_ascii_whitespace() {
        cursor += 1;
    }

    let value = match bytes.get(cursor) {
        Some(&quote @ (b'"' | b'\'')) => {
            cursor += 1;
            let value_start = cursor;
            while cursor < bytes.len() && bytes[cursor] != quote {
                cursor += 1;
            }
            let value = &rest[value_start..cursor];
            if cursor < bytes.len() {
                cursor += 1; // closing quote
            }
            value
        }
        _ => {
            let value_start = cursor;
            while cursor < bytes.len() {
                let c = bytes[cursor] as char;
                if c.is_ascii_whitespace() || c == '>' {
                    break;
                }
                cursor += 1;
            }
            &rest[value_start..cursor]
        }
    };

    (Some((name, decode_entities(value))), cursor)
}

fn skip_raw_text(input: &str, from: usize, tag: &str) -> usize {
    let haystack = input[from..].to_ascii_lowercase();
    let needle = format!("</{tag}");
    let Some(close_rel) = haystack.find(&needle) else {
        return input.len();
    };
    let close = from + close_rel;
    match input[close..].find('>') {
        Some(end) => close + end + 1,
        None => input.len(),
    }
}

fn is_tag_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == ':'
}

/// Minimal entity decoding, same spirit as the rest of the parser: the
/// handful of entities listing markup actually uses.
fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_owned();
    }
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
