// Copyright 2025 the Guidepost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Guidepost Placement: collision-aware callout placement for guided tours.
//!
//! ## Overview
//!
//! Given the bounding box of a highlighted target, a preferred [`Anchor`], the viewport size,
//! and the measured size of the callout, [`place`] returns the callout's top-left corner in
//! viewport coordinates together with the [`Side`] it ended up on.
//!
//! The computation is a pure function: identical inputs always produce identical output, and
//! nothing is cached between calls. It does not measure anything itself; feed it rectangles from
//! whatever layout or DOM surface you have.
//!
//! ## Rules
//!
//! - No target, or [`Anchor::Center`]: the callout is centered in the viewport.
//! - Otherwise the free space on each side of the target is computed, minus a fixed gap.
//! - Auto-flip: when the preferred side cannot fit the callout and the opposite side has strictly
//!   more room, the callout moves to the opposite side. It never flips twice and never considers
//!   the perpendicular sides.
//! - `Top`/`Bottom`: horizontally centered on the target. `Left`/`Right`: top edge aligned a small
//!   offset above the target's top edge.
//! - The final origin is always clamped into the viewport, inset by a margin.
//!
//! ## Example
//!
//! ```
//! use guidepost_placement::{Anchor, Side, place};
//! use kurbo::{Rect, Size};
//!
//! let viewport = Size::new(1280.0, 800.0);
//! let callout = Size::new(320.0, 180.0);
//!
//! // A target hugging the bottom edge cannot host the callout below it.
//! let target = Rect::new(600.0, 760.0, 680.0, 790.0);
//! let placement = place(Some(target), Anchor::Bottom, viewport, callout);
//! assert_eq!(placement.side, Some(Side::Top));
//! assert!(placement.bounds(callout).y1 <= target.y0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod place;
mod types;

pub use place::{Space, place};
pub use types::{Anchor, Placement, PlacementConfig, Side};
