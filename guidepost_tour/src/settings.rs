// Copyright 2025 the Guidepost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persistence-backed tour settings: the "seen" flag and the display language.

use tracing::debug;

use crate::host::KeyValueStore;
use crate::step::Language;

/// Key holding the "tour already seen" flag.
pub const SEEN_KEY: &str = "guidepost.tour.seen";
/// Key holding the display language code.
pub const LANGUAGE_KEY: &str = "guidepost.language";

/// Settings stored through an injected [`KeyValueStore`].
///
/// These are the only values the tour persists.
#[derive(Clone, Debug, Default)]
pub struct Settings<S> {
    store: S,
}

impl<S: KeyValueStore> Settings<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Whether the tour has been completed or dismissed before.
    pub fn has_seen_tour(&self) -> bool {
        self.store.get(SEEN_KEY).as_deref() == Some("true")
    }

    /// Record that the tour was completed or dismissed.
    pub fn mark_seen(&mut self) {
        debug!("persisting tour seen flag");
        self.store.set(SEEN_KEY, "true");
    }

    /// Forget the "seen" flag so the tour auto-opens on the next mount.
    pub fn clear_seen(&mut self) {
        debug!("clearing tour seen flag");
        self.store.remove(SEEN_KEY);
    }

    /// Persisted language; English when absent or unrecognized.
    pub fn language(&self) -> Language {
        self.store
            .get(LANGUAGE_KEY)
            .and_then(|code| Language::from_code(&code))
            .unwrap_or_default()
    }

    /// Persist the display language.
    pub fn set_language(&mut self, language: Language) {
        debug!(code = language.code(), "persisting tour language");
        self.store.set(LANGUAGE_KEY, language.code());
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The underlying store, mutably.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Unwrap the store.
    pub fn into_store(self) -> S {
        self.store
    }
}
