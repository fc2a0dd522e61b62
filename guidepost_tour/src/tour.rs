// Copyright 2025 the Guidepost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tour facade: state machine, navigation coordinator, and resolution pipeline.
//!
//! ## Pipeline
//!
//! Every change of the current step (including opening) abandons the previous step's work and
//! runs the pipeline again from the live index:
//!
//! 1) If the step's route differs from the router's, request navigation and wait
//!    ([`Phase::Navigating`]). Arrival is reported through [`Tour::on_route_changed`].
//! 2) After a short settle delay, look for the target ([`Phase::Resolving`]), retrying on a fixed
//!    interval until the lookup budget is spent.
//! 3) Publish the target rectangle, or `None` if it never mounted ([`Phase::Settled`]). Highlighted
//!    targets are scrolled into view and measured once more after the scroll settles.
//!
//! Continuations carry a [`StepTicket`]. Anything that fires for a step the user already left is
//! dropped without touching the state.

use core::fmt;
use std::time::Duration;

use guidepost_placement::Placement;
use kurbo::Size;
use tracing::{debug, trace, warn};

use crate::config::TourConfig;
use crate::host::{Host, KeyValueStore};
use crate::registry::Registry;
use crate::resolver::{Attempt, ResolveTask, StepTicket};
use crate::settings::Settings;
use crate::spotlight::{Overlay, Spotlight};
use crate::state::{Direction, Phase, StepMove, TourState};
use crate::step::{Language, TourStep};
use crate::timers::Timers;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum WakeKind {
    Retry,
    Remeasure,
    Arrived,
    NavigationTimeout,
}

#[derive(Copy, Clone, Debug)]
struct Wake {
    ticket: StepTicket,
    kind: WakeKind,
}

/// Everything a presenter needs to draw the current step.
#[derive(Clone, Debug, PartialEq)]
pub struct TourFrame<'a> {
    /// Position of the current step.
    pub step_index: usize,
    /// Total number of steps.
    pub step_count: usize,
    /// Id of the current step.
    pub step_id: &'a str,
    /// Localized callout title.
    pub title: &'a str,
    /// Localized callout body.
    pub body: &'a str,
    /// Direction of the last step change, for the transition style.
    pub direction: Direction,
    /// A navigation is in flight; a "navigating" indicator may be shown.
    pub navigating: bool,
    /// Resolution finished, with or without a target.
    pub ready: bool,
    /// Overlay behind the callout.
    pub overlay: Overlay,
    /// Where to put the callout.
    pub callout: Placement,
}

/// A guided tour bound to a host page and a settings store.
pub struct Tour<H: Host, S: KeyValueStore> {
    registry: Registry,
    host: H,
    settings: Settings<S>,
    config: TourConfig,
    state: TourState,
    phase: Phase,
    epoch: u64,
    timers: Timers<Wake>,
    resolver: ResolveTask,
    spotlight: Spotlight,
}

impl<H: Host, S: KeyValueStore> fmt::Debug for Tour<H, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tour")
            .field("state", &self.state)
            .field("phase", &self.phase)
            .field("epoch", &self.epoch)
            .field("now", &self.timers.now())
            .finish_non_exhaustive()
    }
}

impl<H: Host, S: KeyValueStore> Tour<H, S> {
    /// Create a closed tour with the default configuration.
    pub fn new(registry: Registry, host: H, store: S) -> Self {
        Self::with_config(registry, host, store, TourConfig::default())
    }

    /// Create a closed tour.
    ///
    /// The display language is read from `store`.
    pub fn with_config(registry: Registry, host: H, store: S, config: TourConfig) -> Self {
        let settings = Settings::new(store);
        let state = TourState::new(settings.language());
        let resolver = ResolveTask::new(config.max_attempts);
        let spotlight = Spotlight::new(config.spotlight_padding, config.spring);
        Self {
            registry,
            host,
            settings,
            config,
            state,
            phase: Phase::Idle,
            epoch: 0,
            timers: Timers::new(),
            resolver,
            spotlight,
        }
    }

    /// Open the tour automatically unless it was already seen. Returns whether it is open.
    pub fn mount(&mut self) -> bool {
        if self.state.is_open() {
            return true;
        }
        if self.settings.has_seen_tour() {
            debug!("tour already seen; not auto-starting");
            return false;
        }
        self.open();
        true
    }

    /// Clear the "seen" flag and force the tour open at the first step.
    pub fn start(&mut self) {
        self.settings.clear_seen();
        self.open();
    }

    /// Clear the "seen" flag only; the tour auto-opens on the next [`Tour::mount`].
    pub fn reset(&mut self) {
        self.settings.clear_seen();
    }

    /// Persist and apply a display language. Independent of whether the tour is open.
    pub fn set_language(&mut self, language: Language) {
        self.settings.set_language(language);
        self.state.set_language(language);
    }

    /// Move to the next step, or finish the tour at the last one.
    pub fn advance(&mut self) {
        match self.state.forward(self.registry.len()) {
            StepMove::Moved(index) => {
                debug!(index, "tour advanced");
                self.enter_step();
            }
            StepMove::Finished => {
                debug!("tour completed");
                self.close();
            }
            StepMove::Ignored => {}
        }
    }

    /// Move to the previous step. No-op at the first step.
    pub fn retreat(&mut self) {
        if let StepMove::Moved(index) = self.state.backward() {
            debug!(index, "tour retreated");
            self.enter_step();
        }
    }

    /// Close the tour, cancel all pending work, and persist the "seen" flag.
    pub fn close(&mut self) {
        if !self.state.is_open() {
            return;
        }
        debug!(index = self.state.current_step_index(), "tour closed");
        self.abandon_step();
        self.epoch += 1;
        self.settings.mark_seen();
        self.state.tear_down();
        self.phase = Phase::Idle;
        self.spotlight.reset();
        self.host.set_resize_listener(false);
    }

    /// Report that the router now displays `route`.
    ///
    /// Arrival at the pending navigation target starts resolution. Leaving the route of a
    /// settled step drops its target rectangle, since it was measured on a page that is gone.
    pub fn on_route_changed(&mut self, route: &str) {
        if !self.state.is_open() {
            return;
        }
        let pending = self.state.pending_navigation_target();
        if pending != Some(route) {
            let left_step_route = pending.is_none()
                && self.phase == Phase::Settled
                && self
                    .current_step()
                    .is_some_and(|step| step.route != route);
            if left_step_route {
                debug!(route, "router left the current step's route; dropping its target");
                let ticket = self.ticket();
                self.publish_rect(ticket, None);
            } else {
                trace!(route, "route change is not the pending tour navigation");
            }
            return;
        }
        debug!(route, "tour navigation arrived");
        self.state.set_pending_navigation(None);
        self.timers
            .cancel_matching(|w| w.kind == WakeKind::NavigationTimeout);
        self.phase = Phase::Resolving;
        let ticket = self.ticket();
        self.timers.schedule(
            self.config.arrival_settle,
            Wake {
                ticket,
                kind: WakeKind::Arrived,
            },
        );
    }

    /// Report a window resize. Re-measures a settled target without retrying or scrolling.
    pub fn on_resize(&mut self) {
        if !self.state.is_open() || self.phase != Phase::Settled {
            return;
        }
        let ticket = self.ticket();
        self.measure(ticket);
    }

    /// Advance virtual time, firing due continuations and animating the spotlight.
    pub fn tick(&mut self, dt: Duration) {
        let until = self.timers.now().saturating_add(dt);
        while let Some((_, wake)) = self.timers.pop_due(until) {
            self.fire(wake);
        }
        self.timers.advance_to(until);
        self.spotlight.tick(dt);
    }

    /// Presentation of the current step for a callout of the given measured size.
    ///
    /// Returns `None` while the tour is closed.
    pub fn frame(&self, callout: Size) -> Option<TourFrame<'_>> {
        if !self.state.is_open() {
            return None;
        }
        let step_index = self.state.current_step_index();
        let step = self.registry.step(step_index)?;
        let language = self.state.language();
        let placement = self.config.placement.place(
            self.state.target_rect(),
            step.anchor,
            self.host.viewport_size(),
            callout,
        );
        Some(TourFrame {
            step_index,
            step_count: self.registry.len(),
            step_id: &step.id,
            title: step.title.get(language),
            body: step.body.get(language),
            direction: self.state.direction(),
            navigating: self.is_navigating(),
            ready: self.is_ready(),
            overlay: self.spotlight.overlay(step.highlight()),
            callout: placement,
        })
    }

    /// Current tour state.
    pub fn state(&self) -> &TourState {
        &self.state
    }

    /// Pipeline progress for the current step.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True once the current step finished resolving and can be displayed.
    pub fn is_ready(&self) -> bool {
        self.state.is_open() && self.phase == Phase::Settled
    }

    /// True while waiting for the router to arrive.
    pub fn is_navigating(&self) -> bool {
        self.state.pending_navigation_target().is_some()
    }

    /// The current step, while open.
    pub fn current_step(&self) -> Option<&TourStep> {
        if !self.state.is_open() {
            return None;
        }
        self.registry.step(self.state.current_step_index())
    }

    /// Lookups performed for the current target so far.
    pub fn resolve_attempts(&self) -> u32 {
        self.resolver.attempts()
    }

    /// Number of continuations waiting to fire.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// The step catalog.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The persisted settings.
    pub fn settings(&self) -> &Settings<S> {
        &self.settings
    }

    /// The configuration in use.
    pub fn config(&self) -> &TourConfig {
        &self.config
    }

    /// The host page.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host page, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Tear the tour apart, returning the host and the store.
    pub fn into_parts(self) -> (H, S) {
        (self.host, self.settings.into_store())
    }

    fn open(&mut self) {
        let was_open = self.state.is_open();
        self.abandon_step();
        self.state.open();
        self.spotlight.reset();
        if !was_open {
            self.host.set_resize_listener(true);
        }
        debug!(steps = self.registry.len(), "tour opened");
        self.enter_step();
    }

    fn ticket(&self) -> StepTicket {
        StepTicket {
            epoch: self.epoch,
            index: self.state.current_step_index(),
        }
    }

    fn is_live(&self, ticket: StepTicket) -> bool {
        self.state.is_open()
            && ticket.epoch == self.epoch
            && ticket.index == self.state.current_step_index()
    }

    fn abandon_step(&mut self) {
        self.resolver.cancel(&mut self.timers);
        let dropped = self.timers.clear();
        if dropped > 0 {
            trace!(dropped, "cancelled continuations of the previous step");
        }
    }

    fn enter_step(&mut self) {
        self.abandon_step();
        self.epoch += 1;
        let ticket = self.ticket();
        // Stale until proven otherwise.
        self.publish_rect(ticket, None);
        let Some(step) = self.registry.step(ticket.index) else {
            return;
        };
        debug!(step = %step.id, index = ticket.index, route = %step.route, "entering tour step");
        if self.host.current_route() == step.route {
            self.state.set_pending_navigation(None);
            self.begin_resolution(ticket);
            return;
        }
        let route = step.route.clone();
        debug!(route = %route, "navigating for tour step");
        self.state.set_pending_navigation(Some(route.clone()));
        self.phase = Phase::Navigating;
        self.host.navigate(&route);
        if let Some(timeout) = self.config.navigation_timeout {
            self.timers.schedule(
                timeout,
                Wake {
                    ticket,
                    kind: WakeKind::NavigationTimeout,
                },
            );
        }
    }

    fn begin_resolution(&mut self, ticket: StepTicket) {
        let Some(step) = self.registry.step(ticket.index) else {
            return;
        };
        self.phase = Phase::Resolving;
        if step.scroll_to_top() {
            self.host.scroll_to_origin();
        }
        self.resolver.start(&mut self.timers, ticket, &step.selector);
        self.poll_target(ticket);
    }

    fn poll_target(&mut self, ticket: StepTicket) {
        if !self.is_live(ticket) {
            trace!(?ticket, "discarding stale target lookup");
            return;
        }
        match self.resolver.poll(&self.host) {
            Attempt::Found(element) => {
                let rect = self.host.bounding_rect(&element);
                debug!(attempts = self.resolver.attempts(), ?rect, "tour target resolved");
                self.publish_rect(ticket, Some(rect));
                self.phase = Phase::Settled;
                let wants_scroll = self
                    .registry
                    .step(ticket.index)
                    .is_some_and(|s| s.highlight() && !s.scroll_to_top());
                if wants_scroll {
                    self.host.scroll_into_view(&element);
                    self.timers.schedule(
                        self.config.scroll_settle,
                        Wake {
                            ticket,
                            kind: WakeKind::Remeasure,
                        },
                    );
                }
            }
            Attempt::Retry => {
                trace!(
                    attempt = self.resolver.attempts(),
                    selector = self.resolver.selector(),
                    "tour target not mounted yet"
                );
                self.resolver.schedule_retry(
                    &mut self.timers,
                    self.config.retry_interval,
                    Wake {
                        ticket,
                        kind: WakeKind::Retry,
                    },
                );
            }
            Attempt::Exhausted => {
                debug!(
                    attempts = self.resolver.attempts(),
                    selector = self.resolver.selector(),
                    "tour target not found; showing step without highlight"
                );
                self.publish_rect(ticket, None);
                self.phase = Phase::Settled;
            }
            Attempt::Idle => {}
        }
    }

    fn measure(&mut self, ticket: StepTicket) {
        let Some(step) = self.registry.step(ticket.index) else {
            return;
        };
        if step.route != self.host.current_route() {
            trace!(route = %step.route, "not on the step's route; dropping its target");
            self.publish_rect(ticket, None);
            return;
        }
        if let Some(element) = self.host.query_selector(&step.selector) {
            let rect = self.host.bounding_rect(&element);
            self.publish_rect(ticket, Some(rect));
        }
    }

    fn publish_rect(&mut self, ticket: StepTicket, rect: Option<kurbo::Rect>) -> bool {
        if !self.is_live(ticket) {
            trace!(?ticket, "discarding stale target rect");
            return false;
        }
        self.state.set_target_rect(rect);
        self.spotlight.set_target(rect);
        true
    }

    fn fire(&mut self, wake: Wake) {
        if !self.is_live(wake.ticket) {
            trace!(?wake, "discarding stale continuation");
            return;
        }
        match wake.kind {
            WakeKind::Retry => self.poll_target(wake.ticket),
            WakeKind::Remeasure => self.measure(wake.ticket),
            WakeKind::Arrived => self.begin_resolution(wake.ticket),
            WakeKind::NavigationTimeout => {
                if let Some(route) = self.state.pending_navigation_target() {
                    warn!(route, "tour navigation never arrived; showing step without target");
                    self.state.set_pending_navigation(None);
                    self.publish_rect(wake.ticket, None);
                    self.phase = Phase::Settled;
                }
            }
        }
    }
}
