// SPDX-FileCopyrightText: 2026 Shortlist Contributors
// SPDX-License-Identifier: LicenseRef-Shortlist-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Shortlist and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Foreign-format parsing.
//!
//! Listing pages arrive as HTML-ish markup; `html` turns them into the
//! engine's document model. Hosts that already hold a parsed tree can build
//! a `Document` directly and skip this module.

pub mod html;

pub use html::parse_document;
