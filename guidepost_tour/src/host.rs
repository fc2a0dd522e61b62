// Copyright 2025 the Guidepost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator interfaces supplied by the embedding application.
//!
//! The tour never touches a real router, DOM, or storage directly. The embedding
//! application implements these traits and forwards its asynchronous signals (route
//! changes, window resizes, elapsed time) to [`Tour`](crate::Tour).

use std::collections::BTreeMap;
use std::fmt::Debug;

use kurbo::{Rect, Size};

/// Client-side router.
pub trait Router {
    /// Request navigation to `route`. Arrival is reported later through
    /// [`Tour::on_route_changed`](crate::Tour::on_route_changed).
    fn navigate(&mut self, route: &str);

    /// The route currently displayed.
    fn current_route(&self) -> &str;
}

/// Element query surface of the rendered page.
pub trait Dom {
    /// Handle to a located element.
    type Element: Clone + Debug;

    /// Find the element matching `selector`, if mounted.
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;

    /// Bounding box of `element` in viewport coordinates.
    fn bounding_rect(&self, element: &Self::Element) -> Rect;

    /// Smoothly scroll `element` to the center of the viewport.
    fn scroll_into_view(&mut self, element: &Self::Element);

    /// Jump the page to its origin without animation.
    fn scroll_to_origin(&mut self);
}

/// Window size and resize subscription.
pub trait Viewport {
    /// Current inner size of the window.
    fn viewport_size(&self) -> Size;

    /// Attach or detach the resize listener. While attached, the host forwards resize events
    /// to [`Tour::on_resize`](crate::Tour::on_resize).
    fn set_resize_listener(&mut self, attached: bool);
}

/// Everything the tour needs from the page it runs on.
pub trait Host: Router + Dom + Viewport {}

impl<T: Router + Dom + Viewport> Host for T {}

/// String key-value persistence (for example browser local storage).
pub trait KeyValueStore {
    /// Read a value.
    fn get(&self, key: &str) -> Option<String>;
    /// Write a value.
    fn set(&mut self, key: &str, value: &str);
    /// Delete a value.
    fn remove(&mut self, key: &str);
}

/// In-memory [`KeyValueStore`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn remove(&mut self, key: &str) {
        (**self).remove(key);
    }
}
