// SPDX-FileCopyrightText: 2026 Shortlist Contributors
// SPDX-License-Identifier: LicenseRef-Shortlist-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Shortlist and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::fmt::Write;

const TITLE_STEMS: &[&str] = &[
    "Attack on Titan",
    "Fullmetal Alchemist: Brotherhood",
    "Steins;Gate",
    "Hunter x Hunter",
    "March Comes in Like a Lion",
    "Legend of the Galactic Heroes",
    "Violet Evergarden",
    "Vinland Saga",
];

/// Deterministic title for entry `idx`, unique across the listing.
pub fn title(idx: usize) -> String {
    format!(
        "{} Part {}",
        TITLE_STEMS[idx % TITLE_STEMS.len()],
        idx / TITLE_STEMS.len() + 1
    )
}

/// The same title with the score/member/duplicate noise a listing page
/// carries in its link text.
pub fn noisy_title(idx: usize) -> String {
    let clean = title(idx);
    format!(
        "{clean} {}.{:02} {} {clean}",
        6 + idx % 4,
        idx % 100,
        100_000 + idx
    )
}

/// A listing page of `count` title-signature entry cards.
pub fn listing_html(count: usize) -> String {
    let mut html = String::with_capacity(count * 256);
    html.push_str("<div class=\"seasonal-list\">\n");
    for idx in 0..count {
        write!(
            html,
            "<div class=\"entry-card\" style=\"height: 220px\">\
             <a class=\"link-title\" href=\"/anime/{}\">{}</a>\
             <span class=\"score\">{}.{:02}</span>\
             </div>\n",
            1000 + idx,
            title(idx),
            6 + idx % 4,
            idx % 100,
        )
        .expect("write fixture html");
    }
    html.push_str("</div>\n");
    html
}

/// A listing with no title classes and no recognizable containers; only
/// the detail links identify entries.
pub fn bare_listing_html(count: usize) -> String {
    let mut html = String::with_capacity(count * 160);
    html.push_str("<div class=\"box\">\n");
    for idx in 0..count {
        write!(
            html,
            "<div><a href=\"/anime/{}\">{}</a></div>\n",
            1000 + idx,
            noisy_title(idx),
        )
        .expect("write fixture html");
    }
    html.push_str("</div>\n");
    html
}
