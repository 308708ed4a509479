// SPDX-FileCopyrightText: 2026 Shortlist Contributors
// SPDX-License-Identifier: LicenseRef-Shortlist-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Shortlist and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Engine settings.
//!
//! An explicit record with enumerated fields; persisted per-field through
//! the key-value bridge. Missing or corrupt stored values fall back to
//! defaults rather than failing the caller.

use serde::{Deserialize, Serialize};

use crate::store::{keys, KeyValueStore, StoreError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Auto,
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub links_disabled: bool,
    pub context_menu_disabled: bool,
    pub theme: Theme,
}

impl Settings {
    /// Loads settings from the bridge. Read failures and malformed values
    /// are logged and replaced by defaults; this never fails.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        Self {
            links_disabled: load_bool(store, keys::LINKS_DISABLED),
            context_menu_disabled: load_bool(store, keys::CONTEXT_MENU_DISABLED),
            theme: load_theme(store),
        }
    }

    /// Writes all fields to the bridge. The first failure is returned;
    /// callers at the engine boundary log and continue.
    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
        store.set(keys::LINKS_DISABLED, serde_json::Value::Bool(self.links_disabled))?;
        store.set(
            keys::CONTEXT_MENU_DISABLED,
            serde_json::Value::Bool(self.context_menu_disabled),
        )?;
        store.set(keys::THEME, serde_json::json!(self.theme))?;
        Ok(())
    }
}

fn load_bool(store: &dyn KeyValueStore, key: &str) -> bool {
    match store.get(key) {
        Ok(Some(serde_json::Value::Bool(value))) => value,
        Ok(Some(other)) => {
            tracing::warn!(key, value = %other, "ignoring non-boolean stored setting");
            false
        }
        Ok(None) => false,
        Err(err) => {
            tracing::warn!(key, error = %err, "setting read failed; using default");
            false
        }
    }
}

fn load_theme(store: &dyn KeyValueStore) -> Theme {
    match store.get(keys::THEME) {
        Ok(Some(value)) => serde_json::from_value(value.clone()).unwrap_or_else(|_| {
            tracing::warn!(key = keys::THEME, value = %value, "ignoring unknown stored theme");
            Theme::default()
        }),
        Ok(None) => Theme::default(),
        Err(err) => {
            tracing::warn!(key = keys::THEME, error = %err, "theme read failed; using default");
            Theme::default()
        }
    }
}
