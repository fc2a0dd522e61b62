// Copyright 2025 the Guidepost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tour state and its step-index state machine.
//!
//! ## Transitions
//!
//! - `Closed → Open` at step 0.
//! - While open, the index moves by exactly one step:
//!   - forward at the last step finishes the tour instead of overflowing;
//!   - backward at step 0 is a no-op.
//! - Closing tears every field down except the language.
//!
//! `direction` records the last move for the presenter's transition choice only.

use kurbo::Rect;

use crate::step::Language;

/// Direction of the last step change.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Toward the end of the tour.
    #[default]
    Forward,
    /// Toward the start of the tour.
    Backward,
}

/// Progress of the navigate → resolve pipeline for the current step.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Tour closed; nothing in flight.
    #[default]
    Idle,
    /// Waiting for the router to arrive at the step's route.
    Navigating,
    /// On the right route, looking for the target.
    Resolving,
    /// Ready to display, with or without a target rectangle.
    Settled,
}

/// Result of asking the state machine to move.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StepMove {
    /// The index changed to the given position.
    Moved(usize),
    /// Forward from the last step; the tour should close.
    Finished,
    /// Nothing happened (closed tour, or backward at step 0).
    Ignored,
}

/// Mutable per-session tour state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TourState {
    is_open: bool,
    current_step_index: usize,
    direction: Direction,
    pending_navigation_target: Option<String>,
    target_rect: Option<Rect>,
    language: Language,
}

impl TourState {
    /// Closed state with the given display language.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    /// Whether the tour is showing.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Position of the current step.
    pub fn current_step_index(&self) -> usize {
        self.current_step_index
    }

    /// Direction of the last step change.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Route requested but not yet arrived at.
    pub fn pending_navigation_target(&self) -> Option<&str> {
        self.pending_navigation_target.as_deref()
    }

    /// Last resolved bounding box of the current target.
    pub fn target_rect(&self) -> Option<Rect> {
        self.target_rect
    }

    /// Display language.
    pub fn language(&self) -> Language {
        self.language
    }

    pub(crate) fn open(&mut self) {
        self.is_open = true;
        self.current_step_index = 0;
        self.direction = Direction::Forward;
        self.pending_navigation_target = None;
        self.target_rect = None;
    }

    pub(crate) fn forward(&mut self, step_count: usize) -> StepMove {
        if !self.is_open {
            return StepMove::Ignored;
        }
        if self.current_step_index + 1 >= step_count {
            return StepMove::Finished;
        }
        self.current_step_index += 1;
        self.direction = Direction::Forward;
        StepMove::Moved(self.current_step_index)
    }

    pub(crate) fn backward(&mut self) -> StepMove {
        if !self.is_open || self.current_step_index == 0 {
            return StepMove::Ignored;
        }
        self.current_step_index -= 1;
        self.direction = Direction::Backward;
        StepMove::Moved(self.current_step_index)
    }

    pub(crate) fn tear_down(&mut self) {
        *self = Self::new(self.language);
    }

    pub(crate) fn set_pending_navigation(&mut self, route: Option<String>) {
        self.pending_navigation_target = route;
    }

    pub(crate) fn set_target_rect(&mut self, rect: Option<Rect>) {
        self.target_rect = rect;
    }

    pub(crate) fn set_language(&mut self, language: Language) {
        self.language = language;
    }
}
