// Copyright 2025 the Guidepost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for placement: anchors, sides, tuning, and results.

use kurbo::{Point, Rect, Size};

/// Preferred placement of a callout relative to its target.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Anchor {
    /// Above the target.
    Top,
    /// Below the target.
    #[default]
    Bottom,
    /// Left of the target.
    Left,
    /// Right of the target.
    Right,
    /// Centered in the viewport, ignoring the target.
    Center,
}

impl Anchor {
    /// All anchors, in declaration order.
    pub const ALL: [Self; 5] = [Self::Top, Self::Bottom, Self::Left, Self::Right, Self::Center];

    /// The concrete side this anchor asks for, or `None` for [`Anchor::Center`].
    pub const fn side(self) -> Option<Side> {
        match self {
            Self::Top => Some(Side::Top),
            Self::Bottom => Some(Side::Bottom),
            Self::Left => Some(Side::Left),
            Self::Right => Some(Side::Right),
            Self::Center => None,
        }
    }

    /// Stable lowercase name, as used in step catalogs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }

    /// Parse a lowercase anchor name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == name)
    }
}

/// One of the four sides of a target.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    /// Above the target.
    Top,
    /// Below the target.
    Bottom,
    /// Left of the target.
    Left,
    /// Right of the target.
    Right,
}

impl Side {
    /// The side across the target.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// True for `Top` and `Bottom`.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Fixed distances used by the placement rules, in viewport pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacementConfig {
    /// Distance between the target edge and the callout.
    pub gap: f64,
    /// Minimum distance between the callout and the viewport edges.
    pub margin: f64,
    /// For `Left`/`Right`, how far above the target's top edge the callout starts.
    pub side_offset: f64,
}

impl PlacementConfig {
    /// Gap 16, margin 16, side offset 8.
    pub const DEFAULT: Self = Self {
        gap: 16.0,
        margin: 16.0,
        side_offset: 8.0,
    };

    /// Set the gap.
    #[must_use]
    pub fn gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Set the viewport margin.
    #[must_use]
    pub fn margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Set the side offset.
    #[must_use]
    pub fn side_offset(mut self, offset: f64) -> Self {
        self.side_offset = offset;
        self
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Result of a placement computation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Top-left corner of the callout in viewport coordinates.
    pub origin: Point,
    /// Side of the target the callout sits on; `None` when centered in the viewport.
    pub side: Option<Side>,
}

impl Placement {
    /// The callout's rectangle for a given callout size.
    pub fn bounds(&self, callout: Size) -> Rect {
        Rect::from_origin_size(self.origin, callout)
    }

    /// True when the callout was centered rather than attached to a side.
    pub fn is_centered(&self) -> bool {
        self.side.is_none()
    }
}
