// Copyright 2025 the Guidepost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tour timing and presentation tuning.

use std::time::Duration;

use guidepost_placement::PlacementConfig;

use crate::spotlight::SpringConfig;

/// Timing, retry, and presentation parameters for a [`Tour`](crate::Tour).
#[derive(Clone, Debug, PartialEq)]
pub struct TourConfig {
    /// Delay between target lookups while the element has not mounted.
    pub retry_interval: Duration,
    /// Total lookups before giving up on a target, including the first one.
    pub max_attempts: u32,
    /// Delay between scrolling a target into view and re-measuring it.
    pub scroll_settle: Duration,
    /// Delay between route arrival and the first target lookup.
    pub arrival_settle: Duration,
    /// Give up on a navigation that has not arrived after this long. `None` waits forever.
    pub navigation_timeout: Option<Duration>,
    /// Breathing room around the target in the spotlight cutout.
    pub spotlight_padding: f64,
    /// Callout placement distances.
    pub placement: PlacementConfig,
    /// Spotlight motion.
    pub spring: SpringConfig,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            retry_interval: Duration::from_millis(150),
            max_attempts: 15,
            scroll_settle: Duration::from_millis(300),
            arrival_settle: Duration::from_millis(100),
            navigation_timeout: None,
            spotlight_padding: 8.0,
            placement: PlacementConfig::DEFAULT,
            spring: SpringConfig::default(),
        }
    }
}

impl TourConfig {
    /// Set the retry interval.
    #[must_use]
    pub fn retry_interval(mut self, interval: Duration) -> Self {
        self.retry_interval = interval;
        self
    }

    /// Set the lookup budget. Clamped to at least one lookup.
    #[must_use]
    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Set the post-scroll settle delay.
    #[must_use]
    pub fn scroll_settle(mut self, delay: Duration) -> Self {
        self.scroll_settle = delay;
        self
    }

    /// Set the post-arrival settle delay.
    #[must_use]
    pub fn arrival_settle(mut self, delay: Duration) -> Self {
        self.arrival_settle = delay;
        self
    }

    /// Set or disable the navigation timeout.
    #[must_use]
    pub fn navigation_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.navigation_timeout = timeout;
        self
    }

    /// Set the spotlight padding.
    #[must_use]
    pub fn spotlight_padding(mut self, padding: f64) -> Self {
        self.spotlight_padding = padding;
        self
    }

    /// Set placement distances.
    #[must_use]
    pub fn placement(mut self, placement: PlacementConfig) -> Self {
        self.placement = placement;
        self
    }

    /// Set spotlight motion.
    #[must_use]
    pub fn spring(mut self, spring: SpringConfig) -> Self {
        self.spring = spring;
        self
    }

    /// Time from the first lookup to giving up on a target that never mounts.
    ///
    /// The first lookup is immediate and each retry follows one interval later, so the last
    /// of `max_attempts` lookups happens `max_attempts - 1` intervals after the first.
    pub fn resolution_budget(&self) -> Duration {
        self.retry_interval * self.max_attempts.saturating_sub(1)
    }
}
