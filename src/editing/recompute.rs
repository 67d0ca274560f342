// Copyright 2025 the Geodraw Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Per-shape geometry updates applied on every drag move.
//!
//! Generic shapes move their selected vertices by the (constrained)
//! pointer delta. Circles, rectangles and sectors are parametric: their
//! vertices are an artifact of a construction rule, so a drag rebuilds
//! the whole ring from the session's fixed anchors and the pointer
//! location instead.

use super::drag::ShapeAnchors;
use super::selection::Selection;
use crate::geo::GeoToolkit;
use crate::geo::geodesy::bearing_to_360;
use crate::model::{CoordPath, Feature, ShapeKind};
use kurbo::{Point, Vec2};

/// How a drag move updates a feature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragStrategy {
    /// Displace each selected vertex by the pointer delta
    Vertex,
    /// Rebuild the ring around a fixed center at the pointer's distance
    Circle,
    /// Rebuild the ring from the fixed opposite corner to the pointer
    Rectangle,
    /// Rebuild the swept ring with a fixed radius and the pointer's bearing
    Sector,
}

impl DragStrategy {
    /// Strategy for a shape kind
    pub fn for_shape(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Circle => DragStrategy::Circle,
            ShapeKind::Rectangle => DragStrategy::Rectangle,
            ShapeKind::Sector => DragStrategy::Sector,
            ShapeKind::Point
            | ShapeKind::MultiPoint
            | ShapeKind::LineString
            | ShapeKind::MultiLineString
            | ShapeKind::Polygon
            | ShapeKind::MultiPolygon
            | ShapeKind::Feature
            | ShapeKind::FeatureCollection
            | ShapeKind::Triangle
            | ShapeKind::Arrow
            | ShapeKind::BezierArrow => DragStrategy::Vertex,
        }
    }

    /// Apply one drag move to `feature`
    ///
    /// Returns the path the dragged handle ended up at when a rebuild
    /// renumbered the ring, so the selection can follow it.
    pub fn apply<G: GeoToolkit + ?Sized>(
        self,
        feature: &mut Feature,
        selection: &Selection,
        anchors: &ShapeAnchors,
        pointer: Point,
        delta: Vec2,
        geo: &G,
    ) -> Option<CoordPath> {
        match self {
            DragStrategy::Vertex => {
                drag_vertices(feature, selection, delta, geo);
                None
            }
            DragStrategy::Circle => {
                drag_circle(feature, anchors, pointer, geo);
                None
            }
            DragStrategy::Rectangle => drag_rectangle(feature, anchors, pointer, geo),
            DragStrategy::Sector => {
                drag_sector(feature, anchors, pointer, geo);
                None
            }
        }
    }
}

fn drag_vertices<G: GeoToolkit + ?Sized>(
    feature: &mut Feature,
    selection: &Selection,
    delta: Vec2,
    geo: &G,
) {
    let originals: Vec<(CoordPath, Point)> = selection
        .iter()
        .filter_map(|path| feature.coordinate(path).map(|point| (path.clone(), point)))
        .collect();
    if originals.is_empty() {
        return;
    }

    // Each dragged vertex is constrained as its own point.
    let groups: Vec<Vec<Point>> = originals.iter().map(|(_, point)| vec![*point]).collect();
    let constrained = geo.constrain_movement(&groups, delta);

    for (path, point) in originals {
        feature.update_coordinate(&path, point + constrained);
    }
}

fn drag_circle<G: GeoToolkit + ?Sized>(
    feature: &mut Feature,
    anchors: &ShapeAnchors,
    pointer: Point,
    geo: &G,
) {
    let Some(center) = anchors.center else {
        tracing::debug!("[drag_circle] no center anchor, skipping");
        return;
    };
    let radius = geo.distance(center, pointer);
    feature.set_ring(geo.circle_ring(center, radius));
}

fn drag_rectangle<G: GeoToolkit + ?Sized>(
    feature: &mut Feature,
    anchors: &ShapeAnchors,
    pointer: Point,
    geo: &G,
) -> Option<CoordPath> {
    let Some(corner) = anchors.opposite_corner else {
        tracing::debug!("[drag_rectangle] no opposite corner anchor, skipping");
        return None;
    };
    feature.set_ring(geo.rectangle_ring(corner, pointer));
    // The builder puts its second corner at index 2.
    Some(CoordPath::new(vec![0, 2]))
}

fn drag_sector<G: GeoToolkit + ?Sized>(
    feature: &mut Feature,
    anchors: &ShapeAnchors,
    pointer: Point,
    geo: &G,
) {
    let (Some(center), Some(start)) = (anchors.center, anchors.start) else {
        tracing::debug!("[drag_sector] missing center or start anchor, skipping");
        return;
    };
    let bearing1 = geo.bearing(center, start);
    let bearing2 = geo.bearing(center, pointer);
    if bearing_to_360(bearing1) == bearing_to_360(bearing2) {
        // An empty sweep would come back as a full circle with no center
        // vertex.
        tracing::debug!("[drag_sector] pointer on the start bearing, keeping the last sweep");
        return;
    }
    let radius = geo.distance(center, start);

    let mut ring = geo.sector_ring(center, radius, bearing1, bearing2);
    ring.pop();
    feature.set_ring(ring);
}
