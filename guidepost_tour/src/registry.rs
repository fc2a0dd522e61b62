// Copyright 2025 the Guidepost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated, ordered catalog of tour steps.

use std::collections::HashMap;

use crate::error::RegistryError;
use crate::step::TourStep;

/// Read-only ordered list of [`TourStep`]s.
///
/// Construction rejects empty catalogs, duplicate or empty ids, and empty selectors, so every
/// registry has at least one step and ids are unique.
#[derive(Clone, Debug)]
pub struct Registry {
    steps: Vec<TourStep>,
}

impl Registry {
    /// Validate and wrap a list of steps.
    pub fn new(steps: Vec<TourStep>) -> Result<Self, RegistryError> {
        if steps.is_empty() {
            return Err(RegistryError::Empty);
        }
        let mut seen: HashMap<&str, usize> = HashMap::with_capacity(steps.len());
        for (i, step) in steps.iter().enumerate() {
            if step.id.is_empty() {
                return Err(RegistryError::EmptyId { index: i });
            }
            if step.selector.is_empty() {
                return Err(RegistryError::EmptySelector {
                    id: step.id.clone(),
                });
            }
            if let Some(&first) = seen.get(step.id.as_str()) {
                return Err(RegistryError::DuplicateId {
                    id: step.id.clone(),
                    first,
                    second: i,
                });
            }
            seen.insert(step.id.as_str(), i);
        }
        Ok(Self { steps })
    }

    /// Number of steps (always at least one).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at position `index`.
    pub fn step(&self, index: usize) -> Option<&TourStep> {
        self.steps.get(index)
    }

    /// Position of the step with the given id.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.id == id)
    }

    /// Position of the final step.
    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    /// Iterate steps in tour order.
    pub fn iter(&self) -> impl Iterator<Item = &TourStep> {
        self.steps.iter()
    }
}
