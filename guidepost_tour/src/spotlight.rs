// Copyright 2025 the Guidepost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spotlight presenter: a smoothed cutout rectangle over a dimming overlay.
//!
//! Each edge of the cutout follows its target with a damped spring
//! (`F = -k·(x - target) - c·v`), integrated with semi-implicit Euler in steps of at most
//! 4 ms. The first rectangle ever shown snaps into place; later rectangles, including ones
//! that reappear after the target was briefly unresolved, animate from the last shown
//! position.

use std::time::Duration;

use kurbo::Rect;

const MAX_STEP_SECS: f64 = 0.004;
const REST_DISTANCE: f64 = 0.01;
const REST_VELOCITY: f64 = 0.1;
const MIN_STIFFNESS: f64 = 0.1;

/// Spring parameters for spotlight motion.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpringConfig {
    /// Restoring force strength.
    pub stiffness: f64,
    /// Velocity drag.
    pub damping: f64,
}

impl Default for SpringConfig {
    /// Slightly underdamped: stiffness 170, damping 26.
    fn default() -> Self {
        Self {
            stiffness: 170.0,
            damping: 26.0,
        }
    }
}

/// What the presenter draws behind the callout.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Overlay {
    /// A plain dimming layer.
    Dim,
    /// A dimming layer with a clear region.
    Cutout(Rect),
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct Edge {
    position: f64,
    velocity: f64,
    target: f64,
}

impl Edge {
    fn at(value: f64) -> Self {
        Self {
            position: value,
            velocity: 0.0,
            target: value,
        }
    }

    fn at_rest(&self) -> bool {
        (self.position - self.target).abs() < REST_DISTANCE && self.velocity.abs() < REST_VELOCITY
    }

    fn step(&mut self, dt: f64, spring: SpringConfig) {
        let k = spring.stiffness.max(MIN_STIFFNESS);
        let c = spring.damping.max(0.0);
        let force = -k * (self.position - self.target) - c * self.velocity;
        self.velocity += force * dt;
        self.position += self.velocity * dt;
    }
}

/// Smoothed spotlight rectangle.
#[derive(Clone, Debug)]
pub struct Spotlight {
    padding: f64,
    spring: SpringConfig,
    edges: Option<[Edge; 4]>,
    visible: bool,
}

impl Spotlight {
    /// A hidden spotlight that inflates targets by `padding` on every side.
    pub fn new(padding: f64, spring: SpringConfig) -> Self {
        Self {
            padding,
            spring,
            edges: None,
            visible: false,
        }
    }

    /// Point the spotlight at a target rectangle, or hide it.
    pub fn set_target(&mut self, target: Option<Rect>) {
        let Some(rect) = target else {
            self.visible = false;
            return;
        };
        let r = rect.inflate(self.padding, self.padding);
        let goal = [r.x0, r.y0, r.x1, r.y1];
        match &mut self.edges {
            Some(edges) => {
                for (edge, value) in edges.iter_mut().zip(goal) {
                    edge.target = value;
                }
            }
            None => self.edges = Some(goal.map(Edge::at)),
        }
        self.visible = true;
    }

    /// Forget all motion history; the next target snaps.
    pub fn reset(&mut self) {
        self.edges = None;
        self.visible = false;
    }

    /// Advance the animation.
    pub fn tick(&mut self, dt: Duration) {
        let Some(edges) = &mut self.edges else {
            return;
        };
        let mut remaining = dt.as_secs_f64();
        while remaining > 0.0 && !edges.iter().all(Edge::at_rest) {
            let h = remaining.min(MAX_STEP_SECS);
            for edge in edges.iter_mut() {
                edge.step(h, self.spring);
            }
            remaining -= h;
        }
        if edges.iter().all(Edge::at_rest) {
            for edge in edges.iter_mut() {
                *edge = Edge::at(edge.target);
            }
        }
    }

    /// The rectangle currently drawn, if visible.
    pub fn current(&self) -> Option<Rect> {
        let edges = self.edges.as_ref().filter(|_| self.visible)?;
        Some(Rect::new(
            edges[0].position,
            edges[1].position,
            edges[2].position,
            edges[3].position,
        ))
    }

    /// True when every edge has reached its target.
    pub fn is_settled(&self) -> bool {
        self.edges
            .as_ref()
            .is_none_or(|edges| edges.iter().all(Edge::at_rest))
    }

    /// Overlay to draw for a step that does (`highlight`) or does not want a spotlight.
    pub fn overlay(&self, highlight: bool) -> Overlay {
        match self.current() {
            Some(rect) if highlight => Overlay::Cutout(rect),
            _ => Overlay::Dim,
        }
    }
}
