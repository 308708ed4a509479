// SPDX-FileCopyrightText: 2026 Shortlist Contributors
// SPDX-License-Identifier: LicenseRef-Shortlist-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Shortlist and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Title normalization.
//!
//! Card text on listing pages is noisy: the title is often rendered twice
//! (localized + native concatenation) with rating scores and numeric ids
//! interleaved. `normalize` strips both artifacts deterministically, without
//! a language-specific dictionary. Pure, total, idempotent.

use std::sync::OnceLock;

use regex::Regex;
use smallvec::SmallVec;

/// Score-like tokens, e.g. `8.14`.
fn decimal_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\d+\.\d+\b").expect("decimal token pattern"))
}

/// Bare identifier/date-like tokens: 4 to 9 digits. Shorter runs stay (part
/// counts, season years inside words), longer runs stay (they never match
/// with both boundaries).
fn bare_id_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\d{4,9}\b").expect("bare id token pattern"))
}

/// Collapses whitespace runs to single spaces and trims the ends.
fn collapse_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Normalizes raw extracted text into a clean label.
///
/// Steps, in order: collapse whitespace, drop decimal-number tokens, drop
/// bare 4–9 digit tokens, re-collapse, then trim duplicated trailing
/// phrases (window 6 words down to 3, longest duplicate wins, repeated to
/// a fixed point so stacked repeats reduce to one copy). Idempotent.
pub fn normalize(raw: &str) -> String {
    let collapsed = collapse_ws(raw);
    let stripped = decimal_token_re().replace_all(&collapsed, " ");
    let stripped = bare_id_token_re().replace_all(&stripped, " ");
    let collapsed = collapse_ws(&stripped);

    let mut words: SmallVec<[&str; 16]> = collapsed.split_whitespace().collect();
    while let Some(window) = duplicated_suffix_window(&words) {
        words.truncate(words.len() - window);
    }
    words.join(" ")
}

/// Longest window (6 down to 3) whose trailing words duplicate the leading
/// words, if any.
fn duplicated_suffix_window(words: &[&str]) -> Option<usize> {
    (3..=6usize).rev().find(|&window| {
        words.len() >= window * 2 && words[..window] == words[words.len() - window..]
    })
}
