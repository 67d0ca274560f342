// Copyright 2025 the Geodraw Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Drawn features: identity, shape tag and editable geometry

use super::{CoordPath, FeatureId, Geometry, ShapeKind};
use kurbo::{Point, Vec2};
use serde_json::{Map, Value, json};

/// A feature being drawn or edited on the map
///
/// The geometry is the only persisted truth. `center` and `start` are
/// construction metadata recorded by the drawing tool for circles and
/// sectors. They are read when a drag begins and never written by
/// editing, so ring edits cannot move them.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    id: FeatureId,
    kind: ShapeKind,
    geometry: Geometry,
    center: Option<Point>,
    /// Sector arc start
    start: Option<Point>,
    properties: Map<String, Value>,
}

impl Feature {
    /// Create a feature with a fresh id
    pub fn new(kind: ShapeKind, geometry: Geometry) -> Self {
        Self {
            id: FeatureId::next(),
            kind,
            geometry,
            center: None,
            start: None,
            properties: Map::new(),
        }
    }

    /// Record the construction center (circles, sectors)
    pub fn with_center(mut self, center: Point) -> Self {
        self.center = Some(center);
        self
    }

    /// Record where a sector's arc starts
    pub fn with_start(mut self, start: Point) -> Self {
        self.start = Some(start);
        self
    }

    /// Attach a user property
    pub fn with_property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    pub fn id(&self) -> FeatureId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn center(&self) -> Option<Point> {
        self.center
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Whether this is a single-point feature
    pub fn is_point(&self) -> bool {
        self.kind.is_point() || matches!(self.geometry, Geometry::Point(_))
    }

    pub fn coordinate(&self, path: &CoordPath) -> Option<Point> {
        self.geometry.coordinate(path)
    }

    pub fn update_coordinate(&mut self, path: &CoordPath, point: Point) -> bool {
        self.geometry.update_coordinate(path, point)
    }

    pub fn add_coordinate(&mut self, path: &CoordPath, point: Point) -> bool {
        self.geometry.add_coordinate(path, point)
    }

    /// Remove every coordinate in `paths`, returning how many existed
    pub fn remove_coordinates(&mut self, paths: &[CoordPath]) -> usize {
        self.geometry.remove_coordinates(paths)
    }

    /// Replace the whole coordinate structure with a single open ring
    pub fn set_ring(&mut self, ring: Vec<Point>) {
        self.geometry = Geometry::Polygon(vec![ring]);
    }

    /// Translate every coordinate by `delta`
    pub fn translate(&mut self, delta: Vec2) {
        self.geometry.translate(delta);
    }

    pub fn is_valid(&self) -> bool {
        self.geometry.is_valid()
    }

    /// GeoJSON `Feature` object carrying id and shape tag
    pub fn to_geojson(&self) -> Value {
        let mut properties = self.properties.clone();
        properties.insert("_type_".to_string(), json!(self.kind.as_str()));
        if let Some(center) = self.center {
            properties.insert("center".to_string(), json!([center.x, center.y]));
        }
        if let Some(start) = self.start {
            properties.insert("start".to_string(), json!([start.x, start.y]));
        }
        json!({
            "id": self.id,
            "type": "Feature",
            "properties": properties,
            "geometry": self.geometry.to_geojson(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geojson_carries_id_type_and_center() {
        let f = Feature::new(
            ShapeKind::Circle,
            Geometry::Polygon(vec![vec![
                Point::new(0.0, 1.0),
                Point::new(1.0, 0.0),
                Point::new(0.0, -1.0),
            ]]),
        )
        .with_center(Point::new(0.0, 0.0))
        .with_property("name", json!("zone"));

        let json = f.to_geojson();
        assert_eq!(json["id"], json!(f.id().get()));
        assert_eq!(json["properties"]["_type_"], "Circle");
        assert_eq!(json["properties"]["center"], json!([0.0, 0.0]));
        assert_eq!(json["properties"]["name"], "zone");
        assert_eq!(json["geometry"]["type"], "Polygon");
        assert!(json["properties"].get("start").is_none());
    }

    #[test]
    fn sector_metadata_survives_ring_edits() {
        let center = Point::new(0.0, 0.0);
        let start = Point::new(0.0, 1.0);
        let mut f = Feature::new(
            ShapeKind::Sector,
            Geometry::Polygon(vec![vec![center, start, Point::new(1.0, 0.0)]]),
        )
        .with_center(center)
        .with_start(start);

        f.add_coordinate(&"0.1".parse().unwrap(), Point::new(0.0, 0.5));
        assert_eq!(f.start(), Some(start));
        assert_eq!(f.center(), Some(center));
        assert_eq!(f.to_geojson()["properties"]["start"], json!([0.0, 1.0]));
    }

    #[test]
    fn set_ring_replaces_geometry() {
        let mut f = Feature::new(
            ShapeKind::Rectangle,
            Geometry::Polygon(vec![vec![Point::ZERO; 4]]),
        );
        f.set_ring(vec![Point::new(1.0, 1.0), Point::new(1.0, 2.0), Point::new(2.0, 2.0)]);
        assert_eq!(f.geometry().outer_ring().map(<[Point]>::len), Some(3));
    }

    #[test]
    fn point_geometry_counts_as_point() {
        let f = Feature::new(ShapeKind::Feature, Geometry::Point(Point::ZERO));
        assert!(f.is_point());
    }
}
