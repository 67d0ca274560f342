// Copyright 2025 the Geodraw Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Drag session state.
//!
//! A `DragSession` lives from the press that starts a drag to the
//! release (or forced stop) that ends it. The anchors a parametric shape
//! is rebuilt from are captured once, when the session begins, and
//! travel with the session rather than with the feature, so nothing
//! from one drag can leak into the next.

use crate::model::{CoordPath, Feature, ShapeKind, opposite_corner_of};
use kurbo::{Point, Vec2};

/// Fixed reference points for rebuilding a parametric shape
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShapeAnchors {
    /// Circle or sector center
    pub center: Option<Point>,
    /// Sector arc start
    pub start: Option<Point>,
    /// Rectangle corner diagonally opposite the dragged one
    pub opposite_corner: Option<Point>,
}

impl ShapeAnchors {
    /// Capture the anchors `feature` needs for a drag of `pressed`
    ///
    /// Circles use the recorded construction center, falling back to the
    /// ring's vertex centroid. Sectors use the recorded center and arc
    /// start, falling back to the first two ring vertices. Rectangles fix
    /// the corner half a ring away from the pressed vertex.
    pub fn capture(feature: &Feature, pressed: Option<&CoordPath>) -> Self {
        let ring = feature.geometry().outer_ring().unwrap_or(&[]);
        match feature.kind() {
            ShapeKind::Circle => Self {
                center: feature.center().or_else(|| centroid(ring)),
                ..Self::default()
            },
            ShapeKind::Sector => Self {
                center: feature.center().or_else(|| ring.first().copied()),
                start: feature.start().or_else(|| ring.get(1).copied()),
                ..Self::default()
            },
            ShapeKind::Rectangle => Self {
                opposite_corner: pressed
                    .and_then(|path| opposite_corner_of(path, ring.len()))
                    .and_then(|path| feature.coordinate(&path)),
                ..Self::default()
            },
            _ => Self::default(),
        }
    }
}

fn centroid(ring: &[Point]) -> Option<Point> {
    if ring.is_empty() {
        return None;
    }
    let sum = ring.iter().fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
    Some((sum / ring.len() as f64).to_point())
}

/// An in-progress drag
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    last_location: Point,
    moving: bool,
    anchors: ShapeAnchors,
}

impl DragSession {
    /// Start a session at `location`; not moving until the first move
    pub fn begin(location: Point, anchors: ShapeAnchors) -> Self {
        Self {
            last_location: location,
            moving: false,
            anchors,
        }
    }

    /// Record a move and return the delta since the previous location
    pub fn advance(&mut self, location: Point) -> Vec2 {
        self.moving = true;
        let delta = location - self.last_location;
        self.last_location = location;
        delta
    }

    /// Whether any movement was observed (a drag rather than a click)
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn anchors(&self) -> &ShapeAnchors {
        &self.anchors
    }
}
