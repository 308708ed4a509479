// SPDX-FileCopyrightText: 2026 Shortlist Contributors
// SPDX-License-Identifier: LicenseRef-Shortlist-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Shortlist and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shortlist — selection and extraction engine for entry listings.
//!
//! Feed it an uncontrolled listing page, get back a detected entity list,
//! an undoable multi-selection over it, and JSON/CSV exports of the
//! selected titles. Selections persist by normalized title through a
//! key-value bridge and survive page mutations.

pub mod detect;
pub mod engine;
pub mod export;
pub mod format;
pub mod model;
pub mod normalize;
pub mod ops;
pub mod store;
