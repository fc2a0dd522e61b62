// Copyright 2025 the Guidepost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time errors.
//!
//! Runtime failures (a target that never mounts, a navigation that never arrives, a stale
//! continuation) are not errors: the tour degrades gracefully and logs them.

use thiserror::Error;

/// Reasons a step catalog is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A tour needs at least one step.
    #[error("a tour needs at least one step")]
    Empty,
    /// Two steps share an id.
    #[error("duplicate step id `{id}` at positions {first} and {second}")]
    DuplicateId {
        /// The repeated id.
        id: String,
        /// Position of the first occurrence.
        first: usize,
        /// Position of the repeat.
        second: usize,
    },
    /// A step has an empty id.
    #[error("step at position {index} has an empty id")]
    EmptyId {
        /// Position of the step.
        index: usize,
    },
    /// A step has an empty selector.
    #[error("step `{id}` has an empty selector")]
    EmptySelector {
        /// Id of the step.
        id: String,
    },
    /// A catalog named an anchor that does not exist.
    #[error("step `{id}` has unknown anchor `{anchor}`")]
    UnknownAnchor {
        /// Id of the step.
        id: String,
        /// The unrecognized anchor name.
        anchor: String,
    },
    /// A catalog used a language code that is not supported.
    #[error("step `{id}` has text for unknown language `{code}`")]
    UnknownLanguage {
        /// Id of the step.
        id: String,
        /// The unrecognized code.
        code: String,
    },
    /// A catalog could not be parsed.
    #[error("malformed step catalog: {0}")]
    Parse(String),
}
