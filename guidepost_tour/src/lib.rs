// Copyright 2025 the Guidepost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Guidepost Tour: a deterministic, host-driven guided product tour engine.
//!
//! ## Overview
//!
//! A tour is an ordered list of [`TourStep`]s. Each step names a route, a CSS-like selector for
//! the element to highlight, a preferred callout [`Anchor`], and localized copy. While the tour
//! is open, [`Tour`] makes sure the router is on the step's route, waits for the target element to
//! mount, measures it, and exposes everything a presenter needs through [`Tour::frame`]:
//! a spotlight overlay around the target and a collision-aware callout [`Placement`].
//!
//! The engine never touches a real browser. Navigation, element lookup, scrolling, and the
//! viewport are reached through the [`Router`], [`Dom`], and [`Viewport`] traits; persistence
//! goes through [`KeyValueStore`].
//!
//! ## Time
//!
//! There is no background thread and no wall clock. Delays (retry interval, scroll settle,
//! arrival settle) live in a virtual-time queue that the host drives with [`Tour::tick`].
//! A given sequence of calls always produces the same observable states.
//!
//! ## Workflow
//!
//! 1) Build a [`Registry`] from steps (or from JSON with the `serde` feature).
//! 2) Create a [`Tour`] over your host and store, and call [`Tour::mount`] once the page is up.
//!    The tour opens automatically unless it was already seen.
//! 3) Forward router changes to [`Tour::on_route_changed`] and window resizes to
//!    [`Tour::on_resize`] (only while the resize listener is attached).
//! 4) Call [`Tour::tick`] every frame and draw [`Tour::frame`].
//! 5) Wire the callout buttons to [`Tour::advance`], [`Tour::retreat`], and [`Tour::close`]. The
//!    settings menu uses [`Tour::start`], [`Tour::reset`], and [`Tour::set_language`].
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use guidepost_tour::{Dom, MemoryStore, Registry, Router, Tour, TourStep, Viewport};
//! use kurbo::{Rect, Size};
//!
//! struct Page {
//!     route: String,
//! }
//!
//! impl Router for Page {
//!     fn navigate(&mut self, route: &str) {
//!         self.route = route.to_owned();
//!     }
//!     fn current_route(&self) -> &str {
//!         &self.route
//!     }
//! }
//!
//! impl Dom for Page {
//!     type Element = Rect;
//!     fn query_selector(&self, selector: &str) -> Option<Rect> {
//!         (self.route == "/data" && selector == "#chart").then(|| Rect::new(40.0, 80.0, 640.0, 400.0))
//!     }
//!     fn bounding_rect(&self, element: &Rect) -> Rect {
//!         *element
//!     }
//!     fn scroll_into_view(&mut self, _: &Rect) {}
//!     fn scroll_to_origin(&mut self) {}
//! }
//!
//! impl Viewport for Page {
//!     fn viewport_size(&self) -> Size {
//!         Size::new(1280.0, 800.0)
//!     }
//!     fn set_resize_listener(&mut self, _: bool) {}
//! }
//!
//! let registry = Registry::new(vec![
//!     TourStep::new("chart", "/data", "#chart").title("Your data"),
//! ])
//! .unwrap();
//! let mut tour = Tour::new(registry, Page { route: "/".into() }, MemoryStore::new());
//!
//! assert!(tour.mount());
//! assert!(tour.is_navigating());
//!
//! // The router reports arrival; the lookup runs after a short settle delay.
//! tour.on_route_changed("/data");
//! tour.tick(Duration::from_millis(100));
//!
//! let frame = tour.frame(Size::new(320.0, 180.0)).unwrap();
//! assert!(frame.ready);
//! assert_eq!(frame.title, "Your data");
//! assert_eq!(tour.state().target_rect(), Some(Rect::new(40.0, 80.0, 640.0, 400.0)));
//!
//! tour.advance();
//! assert!(!tour.state().is_open());
//! assert!(!tour.mount());
//! ```

pub mod timers;

#[cfg(feature = "serde")]
mod catalog;
mod config;
mod error;
mod host;
mod registry;
mod resolver;
mod settings;
mod spotlight;
mod state;
mod step;
mod tour;

pub use config::TourConfig;
pub use error::RegistryError;
pub use host::{Dom, Host, KeyValueStore, MemoryStore, Router, Viewport};
pub use registry::Registry;
pub use resolver::{Attempt, ResolveTask, StepTicket};
pub use settings::{LANGUAGE_KEY, SEEN_KEY, Settings};
pub use spotlight::{Overlay, Spotlight, SpringConfig};
pub use state::{Direction, Phase, StepMove, TourState};
pub use step::{Language, LocalizedText, StepFlags, TourStep};
pub use tour::{Tour, TourFrame};

pub use guidepost_placement::{Anchor, Placement, PlacementConfig, Side};
