// Copyright 2025 the Guidepost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Step definitions: routes, selectors, anchors, flags, and localized content.

use guidepost_placement::Anchor;

bitflags::bitflags! {
    /// Per-step presentation flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct StepFlags: u8 {
        /// Draw a spotlight around the target and scroll it into view.
        const HIGHLIGHT     = 0b0000_0001;
        /// Jump the page to its origin before measuring the target.
        const SCROLL_TO_TOP = 0b0000_0010;
    }
}

impl Default for StepFlags {
    fn default() -> Self {
        Self::HIGHLIGHT
    }
}

/// Display language for step content.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Language {
    /// English; also the fallback for missing translations.
    #[default]
    English,
    /// Spanish.
    Spanish,
    /// French.
    French,
    /// German.
    German,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Self; 4] = [Self::English, Self::Spanish, Self::French, Self::German];

    /// Stable two-letter code, used for persistence.
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
            Self::French => "fr",
            Self::German => "de",
        }
    }

    /// Parse a two-letter code. Unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }
}

/// Text with per-language variants.
///
/// Lookups fall back to English, then to the first variant present, then to the empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocalizedText {
    variants: Vec<(Language, String)>,
}

impl LocalizedText {
    /// Empty text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the variant for `language`.
    #[must_use]
    pub fn with(mut self, language: Language, text: impl Into<String>) -> Self {
        self.set(language, text);
        self
    }

    /// Add or replace the variant for `language`.
    pub fn set(&mut self, language: Language, text: impl Into<String>) {
        let text = text.into();
        match self.variants.iter_mut().find(|(l, _)| *l == language) {
            Some((_, existing)) => *existing = text,
            None => self.variants.push((language, text)),
        }
    }

    /// The text for `language`, with fallback.
    pub fn get(&self, language: Language) -> &str {
        self.exact(language)
            .or_else(|| self.exact(Language::English))
            .or_else(|| self.variants.first().map(|(_, t)| t.as_str()))
            .unwrap_or("")
    }

    /// The text for `language` without fallback.
    pub fn exact(&self, language: Language) -> Option<&str> {
        self.variants
            .iter()
            .find(|(l, _)| *l == language)
            .map(|(_, t)| t.as_str())
    }

    /// True if no variant is present.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

impl From<&str> for LocalizedText {
    fn from(text: &str) -> Self {
        Self::new().with(Language::English, text)
    }
}

impl From<String> for LocalizedText {
    fn from(text: String) -> Self {
        Self::new().with(Language::English, text)
    }
}

/// One entry in a guided tour.
///
/// Steps are immutable once a [`Registry`](crate::Registry) is built from them.
#[derive(Clone, Debug, PartialEq)]
pub struct TourStep {
    /// Unique, stable identifier.
    pub id: String,
    /// Route the step requires.
    pub route: String,
    /// Query locating the element to highlight.
    pub selector: String,
    /// Preferred callout placement relative to the target.
    pub anchor: Anchor,
    /// Presentation flags.
    pub flags: StepFlags,
    /// Callout title.
    pub title: LocalizedText,
    /// Callout body.
    pub body: LocalizedText,
}

impl TourStep {
    /// A highlighted, bottom-anchored step with empty content.
    pub fn new(id: impl Into<String>, route: impl Into<String>, selector: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            route: route.into(),
            selector: selector.into(),
            anchor: Anchor::default(),
            flags: StepFlags::default(),
            title: LocalizedText::new(),
            body: LocalizedText::new(),
        }
    }

    /// Set the anchor.
    #[must_use]
    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Replace the flags.
    #[must_use]
    pub fn flags(mut self, flags: StepFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Set the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<LocalizedText>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the body.
    #[must_use]
    pub fn body(mut self, body: impl Into<LocalizedText>) -> Self {
        self.body = body.into();
        self
    }

    /// Whether the target gets a spotlight.
    pub fn highlight(&self) -> bool {
        self.flags.contains(StepFlags::HIGHLIGHT)
    }

    /// Whether the page jumps to its origin before measuring.
    pub fn scroll_to_top(&self) -> bool {
        self.flags.contains(StepFlags::SCROLL_TO_TOP)
    }
}
