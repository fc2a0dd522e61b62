// Copyright 2025 the Guidepost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounded, cancellable polling for a step's target element.
//!
//! ## Lifecycle
//!
//! 1) [`ResolveTask::start`] binds the task to a step ticket and selector, resets the
//!    attempt counter, and drops any poll still queued from a previous start.
//! 2) [`ResolveTask::poll`] performs one lookup. It returns [`Attempt::Found`] as soon as the
//!    element exists, [`Attempt::Retry`] while the budget lasts, and [`Attempt::Exhausted`] after
//!    the final failed lookup.
//! 3) On `Retry`, the owner calls [`ResolveTask::schedule_retry`] to queue the next poll.
//! 4) [`ResolveTask::cancel`] stops the task and removes its queued poll. After cancellation or
//!    a terminal attempt, `poll` performs no lookups.

use std::time::Duration;

use crate::host::Dom;
use crate::timers::{TimerId, Timers};

/// Identity of the step a continuation was created for.
///
/// A continuation whose ticket no longer matches the live tour is stale and must not publish.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct StepTicket {
    /// Monotonic counter bumped on every step change, open, and close.
    pub epoch: u64,
    /// Step position at the time the ticket was issued.
    pub index: usize,
}

/// Outcome of one lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Attempt<E> {
    /// The element exists.
    Found(E),
    /// Not found yet; budget remains.
    Retry,
    /// Not found and the budget is spent.
    Exhausted,
    /// The task is not running; no lookup was made.
    Idle,
}

/// Explicit cancellable polling task with an attempt counter.
#[derive(Clone, Debug)]
pub struct ResolveTask {
    ticket: Option<StepTicket>,
    selector: String,
    attempts: u32,
    max_attempts: u32,
    pending: Option<TimerId>,
}

impl ResolveTask {
    /// A stopped task with the given lookup budget (at least one).
    pub fn new(max_attempts: u32) -> Self {
        Self {
            ticket: None,
            selector: String::new(),
            attempts: 0,
            max_attempts: max_attempts.max(1),
            pending: None,
        }
    }

    /// Bind the task to a step and reset the counter. Does not poll.
    pub fn start<W>(&mut self, timers: &mut Timers<W>, ticket: StepTicket, selector: &str) {
        self.cancel(timers);
        self.ticket = Some(ticket);
        self.selector.clear();
        self.selector.push_str(selector);
        self.attempts = 0;
    }

    /// Stop the task and drop its queued poll, if any.
    pub fn cancel<W>(&mut self, timers: &mut Timers<W>) {
        if let Some(id) = self.pending.take() {
            timers.cancel(id);
        }
        self.ticket = None;
    }

    /// Perform one lookup.
    pub fn poll<D: Dom + ?Sized>(&mut self, dom: &D) -> Attempt<D::Element> {
        if self.ticket.is_none() {
            return Attempt::Idle;
        }
        self.pending = None;
        self.attempts += 1;
        match dom.query_selector(&self.selector) {
            Some(element) => {
                self.ticket = None;
                Attempt::Found(element)
            }
            None if self.attempts >= self.max_attempts => {
                self.ticket = None;
                Attempt::Exhausted
            }
            None => Attempt::Retry,
        }
    }

    /// Queue the next poll `interval` from now, carrying `wake` back to the owner.
    pub fn schedule_retry<W>(&mut self, timers: &mut Timers<W>, interval: Duration, wake: W) {
        if let Some(old) = self.pending.replace(timers.schedule(interval, wake)) {
            timers.cancel(old);
        }
    }

    /// True while the task is bound to a step and has budget left.
    pub fn is_active(&self) -> bool {
        self.ticket.is_some()
    }

    /// Ticket of the step being resolved.
    pub fn ticket(&self) -> Option<StepTicket> {
        self.ticket
    }

    /// Selector being resolved.
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Lookups performed since the last start.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Lookup budget.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// The queued poll, if any.
    pub fn pending(&self) -> Option<TimerId> {
        self.pending
    }
}
