// Copyright 2025 the Guidepost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON step catalogs (feature `serde`).
//!
//! ```json
//! [
//!   {
//!     "id": "welcome",
//!     "route": "/data",
//!     "selector": ".hero",
//!     "anchor": "center",
//!     "scroll_to_top": true,
//!     "title": { "en": "Welcome", "de": "Willkommen" },
//!     "body": { "en": "Let's look around." }
//!   }
//! ]
//! ```
//!
//! `anchor` defaults to `bottom`, `highlight` to `true`, and `scroll_to_top` to `false`.

use std::collections::BTreeMap;

use guidepost_placement::Anchor;
use serde::Deserialize;

use crate::error::RegistryError;
use crate::registry::Registry;
use crate::step::{Language, LocalizedText, StepFlags, TourStep};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StepRecord {
    id: String,
    route: String,
    selector: String,
    #[serde(default)]
    anchor: Option<String>,
    #[serde(default = "default_highlight")]
    highlight: bool,
    #[serde(default)]
    scroll_to_top: bool,
    #[serde(default)]
    title: BTreeMap<String, String>,
    #[serde(default)]
    body: BTreeMap<String, String>,
}

fn default_highlight() -> bool {
    true
}

impl StepRecord {
    fn into_step(self) -> Result<TourStep, RegistryError> {
        let anchor = match self.anchor.as_deref() {
            None => Anchor::default(),
            Some(name) => Anchor::parse(name).ok_or_else(|| RegistryError::UnknownAnchor {
                id: self.id.clone(),
                anchor: name.to_owned(),
            })?,
        };
        let mut flags = StepFlags::empty();
        flags.set(StepFlags::HIGHLIGHT, self.highlight);
        flags.set(StepFlags::SCROLL_TO_TOP, self.scroll_to_top);
        let title = localize(&self.id, self.title)?;
        let body = localize(&self.id, self.body)?;
        Ok(TourStep {
            id: self.id,
            route: self.route,
            selector: self.selector,
            anchor,
            flags,
            title,
            body,
        })
    }
}

fn localize(id: &str, table: BTreeMap<String, String>) -> Result<LocalizedText, RegistryError> {
    let mut text = LocalizedText::new();
    for (code, value) in table {
        let language = Language::from_code(&code).ok_or_else(|| RegistryError::UnknownLanguage {
            id: id.to_owned(),
            code: code.clone(),
        })?;
        text.set(language, value);
    }
    Ok(text)
}

impl Registry {
    /// Parse and validate a JSON step catalog.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let records: Vec<StepRecord> =
            serde_json::from_str(json).map_err(|e| RegistryError::Parse(e.to_string()))?;
        let steps = records
            .into_iter()
            .map(StepRecord::into_step)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(steps)
    }
}
