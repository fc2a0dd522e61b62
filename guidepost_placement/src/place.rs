// Copyright 2025 the Guidepost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The placement function and the free-space measurement it is built on.

use kurbo::{Point, Rect, Size};

use crate::types::{Anchor, Placement, PlacementConfig, Side};

/// Place a callout with the default [`PlacementConfig`].
///
/// See [`PlacementConfig::place`].
pub fn place(target: Option<Rect>, anchor: Anchor, viewport: Size, callout: Size) -> Placement {
    PlacementConfig::DEFAULT.place(target, anchor, viewport, callout)
}

/// Free space around a target, each side already reduced by the gap.
///
/// Values may be negative when the target sits closer to an edge than the gap.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Space {
    /// Room above the target.
    pub above: f64,
    /// Room below the target.
    pub below: f64,
    /// Room left of the target.
    pub left: f64,
    /// Room right of the target.
    pub right: f64,
}

impl Space {
    /// Measure the room around `target` inside a viewport of the given size.
    pub fn around(target: Rect, viewport: Size, gap: f64) -> Self {
        Self {
            above: target.y0 - gap,
            below: viewport.height - target.y1 - gap,
            left: target.x0 - gap,
            right: viewport.width - target.x1 - gap,
        }
    }

    /// Room on one side.
    pub fn on(&self, side: Side) -> f64 {
        match side {
            Side::Top => self.above,
            Side::Bottom => self.below,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Apply the auto-flip rule to a preferred side.
    ///
    /// Flips to the opposite side only when the preferred side is too small for the callout
    /// along its axis and the opposite side is strictly roomier. Never flips twice.
    pub fn resolve(&self, preferred: Side, callout: Size) -> Side {
        let needed = if preferred.is_vertical() {
            callout.height
        } else {
            callout.width
        };
        let room = self.on(preferred);
        let opposite = preferred.opposite();
        if room < needed && self.on(opposite) > room {
            opposite
        } else {
            preferred
        }
    }
}

impl PlacementConfig {
    /// Compute the callout origin for a target rectangle and anchor.
    ///
    /// - `target == None` or `anchor == Center` yields a viewport-centered callout.
    /// - Otherwise the preferred side is resolved with [`Space::resolve`] and the callout is
    ///   attached to that side.
    /// - The origin is always clamped so the callout stays inside the viewport minus
    ///   [`margin`](Self::margin). A callout larger than the available area is pinned at the
    ///   margin on that axis.
    pub fn place(
        &self,
        target: Option<Rect>,
        anchor: Anchor,
        viewport: Size,
        callout: Size,
    ) -> Placement {
        let (Some(rect), Some(preferred)) = (target, anchor.side()) else {
            let origin = Point::new(
                (viewport.width - callout.width) / 2.0,
                (viewport.height - callout.height) / 2.0,
            );
            return Placement {
                origin: self.clamp_into(origin, viewport, callout),
                side: None,
            };
        };

        let side = Space::around(rect, viewport, self.gap).resolve(preferred, callout);
        let origin = match side {
            Side::Top | Side::Bottom => {
                let x = self.clamp_axis(
                    rect.center().x - callout.width / 2.0,
                    callout.width,
                    viewport.width,
                );
                let y = if side == Side::Bottom {
                    rect.y1 + self.gap
                } else {
                    rect.y0 - self.gap - callout.height
                };
                Point::new(x, y)
            }
            Side::Left | Side::Right => {
                let y = self.clamp_axis(
                    rect.y0 - self.side_offset,
                    callout.height,
                    viewport.height,
                );
                let x = if side == Side::Right {
                    rect.x1 + self.gap
                } else {
                    rect.x0 - self.gap - callout.width
                };
                Point::new(x, y)
            }
        };

        Placement {
            origin: self.clamp_into(origin, viewport, callout),
            side: Some(side),
        }
    }

    fn clamp_into(&self, origin: Point, viewport: Size, callout: Size) -> Point {
        Point::new(
            self.clamp_axis(origin.x, callout.width, viewport.width),
            self.clamp_axis(origin.y, callout.height, viewport.height),
        )
    }

    // `f64::clamp` panics when the bounds cross, which happens for oversized callouts.
    fn clamp_axis(&self, value: f64, extent: f64, available: f64) -> f64 {
        value.min(available - extent - self.margin).max(self.margin)
    }
}
