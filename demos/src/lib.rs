// Copyright 2025 the Guidepost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A console "browser" shared by the Guidepost demos.
//!
//! Routes hold a fixed set of elements. Navigation completes on the next [`ConsolePage::pump`],
//! and elements listed as lazy mount only after a number of lookups.

use std::cell::Cell;
use std::collections::BTreeMap;

use guidepost_tour::{Dom, KeyValueStore, Router, Tour, Viewport};
use kurbo::{Rect, Size};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install a console subscriber honoring `RUST_LOG` (default `guidepost_tour=debug`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("guidepost_tour=debug,info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[derive(Debug)]
struct Element {
    rect: Rect,
    mounts_after: u32,
}

/// Simulated single-page app.
#[derive(Debug)]
pub struct ConsolePage {
    route: String,
    requested: Option<String>,
    viewport: Size,
    routes: BTreeMap<String, BTreeMap<String, Element>>,
    lookups: Cell<u32>,
}

impl ConsolePage {
    /// An empty app sitting on `route`.
    pub fn new(route: &str) -> Self {
        Self {
            route: route.to_owned(),
            requested: None,
            viewport: Size::new(1280.0, 800.0),
            routes: BTreeMap::new(),
            lookups: Cell::new(0),
        }
    }

    /// Add an element to a route, mounted after `mounts_after` lookups of anything.
    #[must_use]
    pub fn element(mut self, route: &str, selector: &str, rect: Rect, mounts_after: u32) -> Self {
        self.routes
            .entry(route.to_owned())
            .or_default()
            .insert(selector.to_owned(), Element { rect, mounts_after });
        self
    }

    /// Change the window size.
    pub fn resize(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Complete a requested navigation, returning the new route.
    pub fn pump(&mut self) -> Option<String> {
        let route = self.requested.take()?;
        info!(%route, "router arrived");
        self.route.clone_from(&route);
        self.lookups.set(0);
        Some(route)
    }
}

impl Router for ConsolePage {
    fn navigate(&mut self, route: &str) {
        info!(route, "router navigating");
        self.requested = Some(route.to_owned());
    }

    fn current_route(&self) -> &str {
        &self.route
    }
}

impl Dom for ConsolePage {
    type Element = Rect;

    fn query_selector(&self, selector: &str) -> Option<Rect> {
        let n = self.lookups.get() + 1;
        self.lookups.set(n);
        self.routes
            .get(&self.route)?
            .get(selector)
            .filter(|e| n > e.mounts_after)
            .map(|e| e.rect)
    }

    fn bounding_rect(&self, element: &Rect) -> Rect {
        *element
    }

    fn scroll_into_view(&mut self, _: &Rect) {}

    fn scroll_to_origin(&mut self) {}
}

impl Viewport for ConsolePage {
    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn set_resize_listener(&mut self, attached: bool) {
        info!(attached, "resize listener");
    }
}

/// Forward any completed navigation to the tour.
pub fn pump<S: KeyValueStore>(tour: &mut Tour<ConsolePage, S>) {
    if let Some(route) = tour.host_mut().pump() {
        tour.on_route_changed(&route);
    }
}

/// Print the current frame, if the tour is open.
pub fn print_frame<S: KeyValueStore>(tour: &Tour<ConsolePage, S>) {
    let Some(frame) = tour.frame(Size::new(320.0, 180.0)) else {
        println!("(tour closed)");
        return;
    };
    println!(
        "[{}/{}] {:<10} ready={:<5} navigating={:<5} callout@({:.0},{:.0}) side={:?} overlay={:?}",
        frame.step_index + 1,
        frame.step_count,
        frame.step_id,
        frame.ready,
        frame.navigating,
        frame.callout.origin.x,
        frame.callout.origin.y,
        frame.callout.side,
        frame.overlay,
    );
    println!("    {}: {}", frame.title, frame.body);
}
