// Copyright 2025 the Guidepost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted page used by the scenario tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use guidepost_tour::{Dom, MemoryStore, Registry, Router, Tour, TourConfig, TourStep, Viewport};
use kurbo::{Rect, Size};
use tracing_subscriber::EnvFilter;

/// An element that exists on one route once it has been looked up often enough.
#[derive(Clone, Debug)]
struct Mounted {
    route: String,
    selector: String,
    rect: Rect,
    mounts_after: u32,
}

/// A fake single-page app.
///
/// - Navigation is asynchronous: [`FakePage::arrive`] completes the last request.
/// - Element positions are in document coordinates; [`Dom::bounding_rect`] subtracts the scroll.
/// - Scrolling is instant.
#[derive(Debug)]
pub struct FakePage {
    pub route: String,
    pub viewport: Size,
    pub scroll_y: f64,
    pub navigations: Vec<String>,
    pub scrolled_into_view: Vec<String>,
    pub scrolled_to_origin: u32,
    pub resize_listener: bool,
    elements: Vec<Mounted>,
    queries: RefCell<HashMap<String, u32>>,
}

impl FakePage {
    pub fn new(route: &str) -> Self {
        Self {
            route: route.to_owned(),
            viewport: Size::new(1280.0, 800.0),
            scroll_y: 0.0,
            navigations: Vec::new(),
            scrolled_into_view: Vec::new(),
            scrolled_to_origin: 0,
            resize_listener: false,
            elements: Vec::new(),
            queries: RefCell::new(HashMap::new()),
        }
    }

    /// Add an element that is present immediately.
    pub fn with(self, route: &str, selector: &str, rect: Rect) -> Self {
        self.with_late(route, selector, rect, 0)
    }

    /// Add an element that appears after `mounts_after` failed lookups.
    pub fn with_late(mut self, route: &str, selector: &str, rect: Rect, mounts_after: u32) -> Self {
        self.elements.push(Mounted {
            route: route.to_owned(),
            selector: selector.to_owned(),
            rect,
            mounts_after,
        });
        self
    }

    /// Complete the most recent navigation request, returning the new route.
    pub fn arrive(&mut self) -> String {
        let route = self
            .navigations
            .last()
            .cloned()
            .expect("no navigation was requested");
        self.route.clone_from(&route);
        self.scroll_y = 0.0;
        route
    }

    /// Move an element in document coordinates.
    pub fn move_element(&mut self, selector: &str, rect: Rect) {
        for e in self.elements.iter_mut().filter(|e| e.selector == selector) {
            e.rect = rect;
        }
    }

    /// Remove an element from every route.
    pub fn unmount(&mut self, selector: &str) {
        self.elements.retain(|e| e.selector != selector);
    }

    /// Lookups made for `selector` so far.
    pub fn queries(&self, selector: &str) -> u32 {
        self.queries.borrow().get(selector).copied().unwrap_or(0)
    }

    fn document_rect(&self, selector: &str) -> Option<Rect> {
        self.elements
            .iter()
            .find(|e| e.route == self.route && e.selector == selector)
            .map(|e| e.rect)
    }
}

impl Router for FakePage {
    fn navigate(&mut self, route: &str) {
        self.navigations.push(route.to_owned());
    }

    fn current_route(&self) -> &str {
        &self.route
    }
}

impl Dom for FakePage {
    type Element = String;

    fn query_selector(&self, selector: &str) -> Option<String> {
        let n = {
            let mut q = self.queries.borrow_mut();
            let n = q.entry(selector.to_owned()).or_insert(0);
            *n += 1;
            *n
        };
        self.elements
            .iter()
            .find(|e| e.route == self.route && e.selector == selector && n > e.mounts_after)
            .map(|e| e.selector.clone())
    }

    fn bounding_rect(&self, element: &String) -> Rect {
        self.document_rect(element)
            .map(|r| r - kurbo::Vec2::new(0.0, self.scroll_y))
            .unwrap_or(Rect::ZERO)
    }

    fn scroll_into_view(&mut self, element: &String) {
        if let Some(r) = self.document_rect(element) {
            self.scroll_y = (r.center().y - self.viewport.height / 2.0).max(0.0);
        }
        self.scrolled_into_view.push(element.clone());
    }

    fn scroll_to_origin(&mut self) {
        self.scroll_y = 0.0;
        self.scrolled_to_origin += 1;
    }
}

impl Viewport for FakePage {
    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn set_resize_listener(&mut self, attached: bool) {
        self.resize_listener = attached;
    }
}

pub type TestTour = Tour<FakePage, MemoryStore>;

pub fn tour(steps: Vec<TourStep>, page: FakePage) -> TestTour {
    tour_with(steps, page, MemoryStore::new(), TourConfig::default())
}

pub fn tour_with(
    steps: Vec<TourStep>,
    page: FakePage,
    store: MemoryStore,
    config: TourConfig,
) -> TestTour {
    init_tracing();
    Tour::with_config(Registry::new(steps).expect("valid steps"), page, store, config)
}

/// Route engine logs to the test writer; filter with `RUST_LOG=guidepost_tour=trace`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Report arrival at the last requested route.
pub fn arrive(tour: &mut TestTour) {
    let route = tour.host_mut().arrive();
    tour.on_route_changed(&route);
}

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Tick in 16 ms frames until `total` has elapsed.
pub fn run_for(tour: &mut TestTour, total: Duration) {
    let frame = ms(16);
    let mut left = total;
    while left > Duration::ZERO {
        let dt = left.min(frame);
        tour.tick(dt);
        left -= dt;
    }
}
