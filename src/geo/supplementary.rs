// Copyright 2025 the Geodraw Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Vertex and midpoint handles derived from a feature's geometry.
//!
//! Handles are synthetic: they are rebuilt from the current coordinates
//! on every render and never stored. A vertex handle carries the path of
//! the coordinate it stands for; a midpoint handle carries the path at
//! which a new vertex would be inserted, i.e. the path of the later of
//! the two vertices it sits between.

use crate::model::{CoordPath, Feature, FeatureId, Geometry};
use kurbo::Point;

/// What a handle lets the user do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleKind {
    /// Drag an existing vertex
    Vertex,
    /// Insert a vertex between two neighbors
    Midpoint,
}

/// A control point rendered on top of the active feature
#[derive(Debug, Clone, PartialEq)]
pub struct Handle {
    pub kind: HandleKind,
    /// Feature the handle belongs to
    pub parent: FeatureId,
    pub path: CoordPath,
    pub point: Point,
    /// Vertex is part of the current selection
    pub selected: bool,
}

/// Build handles for `feature`
///
/// `selected` marks vertex handles for distinct rendering. Midpoints are
/// generated only when `midpoints` is set; rings get one on their closing
/// segment as well.
pub fn supplementary_points(
    feature: &Feature,
    selected: &[CoordPath],
    midpoints: bool,
) -> Vec<Handle> {
    let parent = feature.id();
    let geometry = feature.geometry();

    if let Geometry::Point(point) = geometry {
        let path = CoordPath::default();
        let selected = selected.contains(&path);
        return vec![Handle {
            kind: HandleKind::Vertex,
            parent,
            path,
            point: *point,
            selected,
        }];
    }

    // Scattered points have no segments to split.
    let midpoints = midpoints && !matches!(geometry, Geometry::MultiPoint(_));

    let mut handles = Vec::new();
    for (prefix, points, closed) in geometry.arrays() {
        for (i, point) in points.iter().enumerate() {
            if midpoints && i > 0 {
                handles.push(midpoint(parent, prefix.child(i), points[i - 1], *point));
            }
            let path = prefix.child(i);
            handles.push(Handle {
                kind: HandleKind::Vertex,
                parent,
                selected: selected.contains(&path),
                path,
                point: *point,
            });
        }
        if midpoints
            && closed
            && points.len() > 2
            && let (Some(first), Some(last)) = (points.first(), points.last())
        {
            handles.push(midpoint(parent, prefix.child(points.len()), *last, *first));
        }
    }
    handles
}

fn midpoint(parent: FeatureId, path: CoordPath, a: Point, b: Point) -> Handle {
    Handle {
        kind: HandleKind::Midpoint,
        parent,
        path,
        point: a.midpoint(b),
        selected: false,
    }
}
