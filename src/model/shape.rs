// Copyright 2025 the Geodraw Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Shape-type tags carried by drawn features

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of shape a feature was drawn as
///
/// Plain GeoJSON kinds are edited vertex by vertex. Parametric kinds
/// (`Circle`, `Rectangle`, `Sector`) are stored as polygons but rebuilt
/// from anchors whenever one of their vertices is dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    /// Bare feature with no more specific tag
    Feature,
    /// Collection-backed generic feature
    FeatureCollection,
    Circle,
    Rectangle,
    Sector,
    Triangle,
    Arrow,
    BezierArrow,
}

impl ShapeKind {
    /// Whether the shape is a single point with no sub-vertices
    pub fn is_point(self) -> bool {
        matches!(self, ShapeKind::Point)
    }

    /// Whether the vertex count is fixed by construction
    ///
    /// These shapes accept corner drags only, never inserted vertices.
    pub fn has_fixed_vertex_count(self) -> bool {
        matches!(self, ShapeKind::Rectangle | ShapeKind::Triangle)
    }

    /// Whether clicking a midpoint handle may insert a vertex
    pub fn accepts_midpoints(self) -> bool {
        !self.has_fixed_vertex_count()
    }

    /// Name used in GeoJSON properties
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Point => "Point",
            ShapeKind::MultiPoint => "MultiPoint",
            ShapeKind::LineString => "LineString",
            ShapeKind::MultiLineString => "MultiLineString",
            ShapeKind::Polygon => "Polygon",
            ShapeKind::MultiPolygon => "MultiPolygon",
            ShapeKind::Feature => "Feature",
            ShapeKind::FeatureCollection => "FeatureCollection",
            ShapeKind::Circle => "Circle",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Sector => "Sector",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Arrow => "Arrow",
            ShapeKind::BezierArrow => "BezierArrow",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
