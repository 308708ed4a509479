// SPDX-FileCopyrightText: 2026 Shortlist Contributors
// SPDX-License-Identifier: LicenseRef-Shortlist-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Shortlist and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Fixture listing pages for unit tests.

use crate::format::parse_document;
use crate::model::dom::Document;

/// Normalized titles of [`seasonal_listing`], in document order.
pub(crate) const SEASONAL_TITLES: &[&str] = &[
    "Attack on Titan",
    "Fullmetal Alchemist: Brotherhood",
    "Steins;Gate",
    "Hunter x Hunter",
    "March Comes in Like a Lion",
];

const SEASONAL_LISTING: &str = r#"
<div class="seasonal-list">
  <div class="entry-card" style="height: 220px">
    <a class="link-title" href="/anime/16498">Attack on Titan</a>
    <span class="score">8.14</span>
    <span class="members">3570907</span>
  </div>
  <div class="entry-card" style="height: 220px">
    <a class="link-title" href="/anime/5114">Fullmetal Alchemist: Brotherhood</a>
    <span class="score">9.10</span>
  </div>
  <div class="entry-card" style="height: 220px">
    <a class="link-title" href="/anime/9253">Steins;Gate</a>
    <span class="score">9.07</span>
  </div>
  <div class="entry-card" style="height: 220px">
    <a class="link-title" href="/anime/11061">Hunter x Hunter</a>
  </div>
  <div class="entry-card" style="height: 220px">
    <a class="link-title" href="/anime/31646">March Comes in Like a Lion</a>
    <span class="members">494042</span>
  </div>
</div>
"#;

/// Five title-signature cards with score/member noise alongside the titles.
pub(crate) fn seasonal_listing() -> Document {
    parse_document(SEASONAL_LISTING)
}

/// The same listing after a host-side mutation: one entry gone
/// (Steins;Gate), one new (Mushishi), order shuffled.
pub(crate) fn seasonal_listing_mutated() -> Document {
    parse_document(
        r#"
<div class="seasonal-list">
  <div class="entry-card" style="height: 220px">
    <a class="link-title" href="/anime/31646">March Comes in Like a Lion</a>
  </div>
  <div class="entry-card" style="height: 220px">
    <a class="link-title" href="/anime/457">Mushishi</a>
  </div>
  <div class="entry-card" style="height: 220px">
    <a class="link-title" href="/anime/16498">Attack on Titan</a>
    <span class="score">8.14</span>
  </div>
  <div class="entry-card" style="height: 220px">
    <a class="link-title" href="/anime/5114">Fullmetal Alchemist: Brotherhood</a>
  </div>
  <div class="entry-card" style="height: 220px">
    <a class="link-title" href="/anime/11061">Hunter x Hunter</a>
  </div>
</div>
"#,
    )
}

/// No title classes anywhere; entries are plain `li` containers holding a
/// detail link (strategy 2 territory).
pub(crate) fn plain_list_listing() -> Document {
    parse_document(
        r#"
<ul class="ranking">
  <li><a href="/manga/2">Berserk</a> <small>9.47</small></li>
  <li><a href="/manga/1706">JoJo's Bizarre Adventure</a></li>
  <li><a href="/manga/642">Vinland Saga</a></li>
</ul>
"#,
    )
}

/// Neither title classes nor recognizable containers; only the detail links
/// themselves give entries away (strategy 3 territory). The first link text
/// carries duplicated-title noise on purpose.
pub(crate) fn bare_links_listing() -> Document {
    parse_document(
        r#"
<div class="box">
  <div class="row"><a href="/anime/820">Legend of the Galactic Heroes 9.02 123456 Legend of the Galactic Heroes</a></div>
  <div class="row"><a href="/anime/33352">Violet Evergarden</a></div>
</div>
"#,
    )
}
