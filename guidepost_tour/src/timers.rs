// Copyright 2025 the Guidepost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic, host-driven timer queue.
//!
//! There is no background thread and no wall clock. The host advances time explicitly and
//! due entries are handed back one at a time in `(deadline, scheduling order)` order, so a
//! run with the same inputs always fires the same continuations in the same order.
//!
//! ```
//! use std::time::Duration;
//! use guidepost_tour::timers::Timers;
//!
//! let mut t = Timers::new();
//! let slow = t.schedule(Duration::from_millis(300), "slow");
//! t.schedule(Duration::from_millis(100), "fast");
//! t.cancel(slow);
//!
//! let until = t.now() + Duration::from_millis(500);
//! let fired: Vec<_> = std::iter::from_fn(|| t.pop_due(until)).map(|(_, e)| e).collect();
//! assert_eq!(fired, vec!["fast"]);
//! ```

use std::time::Duration;

/// Handle to a scheduled entry.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Clone, Debug)]
struct Entry<E> {
    id: TimerId,
    due: Duration,
    event: E,
}

/// Virtual-time queue of pending events.
#[derive(Clone, Debug)]
pub struct Timers<E> {
    now: Duration,
    next_id: u64,
    queue: Vec<Entry<E>>,
}

impl<E> Default for Timers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Timers<E> {
    /// Empty queue at time zero.
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            queue: Vec::new(),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `event` to fire `delay` after now.
    pub fn schedule(&mut self, delay: Duration, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.queue.push(Entry {
            id,
            due: self.now.saturating_add(delay),
            event,
        });
        id
    }

    /// Cancel an entry. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.queue.len();
        self.queue.retain(|e| e.id != id);
        self.queue.len() != before
    }

    /// Cancel every entry whose event matches `pred`, returning how many were removed.
    pub fn cancel_matching(&mut self, mut pred: impl FnMut(&E) -> bool) -> usize {
        let before = self.queue.len();
        self.queue.retain(|e| !pred(&e.event));
        before - self.queue.len()
    }

    /// Cancel everything, returning how many entries were removed.
    pub fn clear(&mut self) -> usize {
        let n = self.queue.len();
        self.queue.clear();
        n
    }

    /// True if `id` is still waiting to fire.
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.queue.iter().any(|e| e.id == id)
    }

    /// Number of entries waiting to fire.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// True if nothing is scheduled.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Deadline of the earliest entry.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.iter().map(|e| e.due).min()
    }

    /// Remove and return the earliest entry due at or before `until`, moving the clock to its
    /// deadline. Returns `None` once nothing else is due; call [`Timers::advance_to`] afterwards
    /// to bring the clock up to `until`.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, E)> {
        let (pos, _) = self
            .queue
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= until)
            .min_by_key(|(_, e)| (e.due, e.id))?;
        let entry = self.queue.remove(pos);
        if entry.due > self.now {
            self.now = entry.due;
        }
        Some((entry.id, entry.event))
    }

    /// Move the clock forward to `t`. Never moves it backward.
    pub fn advance_to(&mut self, t: Duration) {
        if t > self.now {
            self.now = t;
        }
    }
}
