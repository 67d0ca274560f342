// Copyright 2025 the Geodraw Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Nested coordinate storage addressed by `CoordPath`.
//!
//! Coordinates are `kurbo::Point`s with `x` as longitude and `y` as
//! latitude. Polygon rings are stored open: the closing duplicate of the
//! first vertex only appears in the GeoJSON output. That keeps every
//! stored vertex individually addressable and draggable.

use super::CoordPath;
use kurbo::{Point, Vec2};
use serde_json::{Value, json};

/// Coordinate structure of a feature
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Single position, addressed by the empty path
    Point(Point),
    /// Positions addressed by `[i]`
    MultiPoint(Vec<Point>),
    /// Vertices addressed by `[i]`
    LineString(Vec<Point>),
    /// Vertices addressed by `[line, i]`
    MultiLineString(Vec<Vec<Point>>),
    /// Open rings addressed by `[ring, i]`
    Polygon(Vec<Vec<Point>>),
    /// Open rings addressed by `[polygon, ring, i]`
    MultiPolygon(Vec<Vec<Vec<Point>>>),
}

impl Geometry {
    /// GeoJSON geometry type name
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::MultiPoint(_) => "MultiPoint",
            Geometry::LineString(_) => "LineString",
            Geometry::MultiLineString(_) => "MultiLineString",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPolygon(_) => "MultiPolygon",
        }
    }

    /// Get the coordinate at `path`
    pub fn coordinate(&self, path: &CoordPath) -> Option<Point> {
        if let Geometry::Point(point) = self {
            return path.indices().is_empty().then_some(*point);
        }
        let index = path.last_index()?;
        self.array(path.parent())?.get(index).copied()
    }

    /// Replace the coordinate at `path`, returning whether it existed
    pub fn update_coordinate(&mut self, path: &CoordPath, point: Point) -> bool {
        if let Geometry::Point(existing) = self {
            if path.indices().is_empty() {
                *existing = point;
                return true;
            }
            return false;
        }
        let Some(index) = path.last_index() else {
            return false;
        };
        match self.array_mut(path.parent()).and_then(|arr| arr.get_mut(index)) {
            Some(slot) => {
                *slot = point;
                true
            }
            None => false,
        }
    }

    /// Insert a coordinate so that it ends up at `path`
    ///
    /// Later coordinates of the same array shift up by one. Inserting at
    /// one past the end appends.
    pub fn add_coordinate(&mut self, path: &CoordPath, point: Point) -> bool {
        let Some(index) = path.last_index() else {
            return false;
        };
        match self.array_mut(path.parent()) {
            Some(arr) if index <= arr.len() => {
                arr.insert(index, point);
                true
            }
            _ => false,
        }
    }

    /// Remove the coordinate at `path`
    ///
    /// A polygon ring that drops below three vertices is removed along
    /// with it, matching how drawing tools treat collapsed rings.
    pub fn remove_coordinate(&mut self, path: &CoordPath) -> bool {
        self.remove_coordinates(std::slice::from_ref(path)) == 1
    }

    /// Remove every coordinate in `paths`, returning how many existed
    ///
    /// Later paths are removed first, and collapsed rings are only pruned
    /// once every vertex is gone, so no removal shifts a path that is
    /// still pending.
    pub fn remove_coordinates(&mut self, paths: &[CoordPath]) -> usize {
        let mut pending = paths.to_vec();
        pending.sort_unstable_by(|a, b| b.cmp(a));
        pending.dedup();

        let mut removed = 0;
        for path in &pending {
            let Some(index) = path.last_index() else {
                continue;
            };
            if let Some(arr) = self.array_mut(path.parent())
                && index < arr.len()
            {
                arr.remove(index);
                removed += 1;
            }
        }
        if removed > 0 {
            self.prune_collapsed_rings();
        }
        removed
    }

    /// Translate every coordinate by `delta`
    pub fn translate(&mut self, delta: Vec2) {
        self.for_each_point_mut(|p| *p += delta);
    }

    /// Every coordinate, in path order
    pub fn points(&self) -> Vec<Point> {
        let mut out = Vec::new();
        match self {
            Geometry::Point(p) => out.push(*p),
            Geometry::MultiPoint(pts) | Geometry::LineString(pts) => out.extend(pts),
            Geometry::MultiLineString(lines) | Geometry::Polygon(lines) => {
                lines.iter().for_each(|l| out.extend(l));
            }
            Geometry::MultiPolygon(polys) => {
                polys.iter().flatten().for_each(|r| out.extend(r));
            }
        }
        out
    }

    /// The innermost coordinate arrays with the path prefix leading to
    /// each, and whether the array is a closed ring
    pub fn arrays(&self) -> Vec<(CoordPath, &[Point], bool)> {
        match self {
            Geometry::Point(_) => Vec::new(),
            Geometry::MultiPoint(pts) | Geometry::LineString(pts) => {
                vec![(CoordPath::default(), pts.as_slice(), false)]
            }
            Geometry::MultiLineString(lines) => lines
                .iter()
                .enumerate()
                .map(|(i, l)| (CoordPath::new(vec![i]), l.as_slice(), false))
                .collect(),
            Geometry::Polygon(rings) => rings
                .iter()
                .enumerate()
                .map(|(i, r)| (CoordPath::new(vec![i]), r.as_slice(), true))
                .collect(),
            Geometry::MultiPolygon(polys) => polys
                .iter()
                .enumerate()
                .flat_map(|(k, poly)| {
                    poly.iter()
                        .enumerate()
                        .map(move |(r, ring)| (CoordPath::new(vec![k, r]), ring.as_slice(), true))
                })
                .collect(),
        }
    }

    /// Outer ring of a polygon
    pub fn outer_ring(&self) -> Option<&[Point]> {
        match self {
            Geometry::Polygon(rings) => rings.first().map(Vec::as_slice),
            _ => None,
        }
    }

    /// Whether the geometry is still drawable
    ///
    /// LineStrings need two vertices and polygon rings three; multi
    /// geometries need every part valid.
    pub fn is_valid(&self) -> bool {
        fn ring_ok(rings: &[Vec<Point>]) -> bool {
            !rings.is_empty() && rings.iter().all(|r| r.len() > 2)
        }
        match self {
            Geometry::Point(_) => true,
            Geometry::MultiPoint(pts) => !pts.is_empty(),
            Geometry::LineString(pts) => pts.len() > 1,
            Geometry::MultiLineString(lines) => {
                !lines.is_empty() && lines.iter().all(|l| l.len() > 1)
            }
            Geometry::Polygon(rings) => ring_ok(rings),
            Geometry::MultiPolygon(polys) => {
                !polys.is_empty() && polys.iter().all(|p| ring_ok(p))
            }
        }
    }

    /// GeoJSON geometry object; polygon rings come out closed
    pub fn to_geojson(&self) -> Value {
        fn pos(p: &Point) -> Value {
            json!([p.x, p.y])
        }
        fn line(pts: &[Point]) -> Value {
            Value::Array(pts.iter().map(pos).collect())
        }
        fn ring(pts: &[Point]) -> Value {
            let mut coords: Vec<Value> = pts.iter().map(pos).collect();
            if let Some(first) = pts.first() {
                coords.push(pos(first));
            }
            Value::Array(coords)
        }
        let coordinates = match self {
            Geometry::Point(p) => pos(p),
            Geometry::MultiPoint(pts) | Geometry::LineString(pts) => line(pts),
            Geometry::MultiLineString(lines) => {
                Value::Array(lines.iter().map(|l| line(l)).collect())
            }
            Geometry::Polygon(rings) => Value::Array(rings.iter().map(|r| ring(r)).collect()),
            Geometry::MultiPolygon(polys) => Value::Array(
                polys
                    .iter()
                    .map(|p| Value::Array(p.iter().map(|r| ring(r)).collect()))
                    .collect(),
            ),
        };
        json!({ "type": self.type_name(), "coordinates": coordinates })
    }

    // ===== PRIVATE HELPERS =====

    fn array(&self, parent: &[usize]) -> Option<&Vec<Point>> {
        match (self, parent) {
            (Geometry::MultiPoint(pts) | Geometry::LineString(pts), []) => Some(pts),
            (Geometry::MultiLineString(lines) | Geometry::Polygon(lines), [i]) => lines.get(*i),
            (Geometry::MultiPolygon(polys), [p, r]) => polys.get(*p)?.get(*r),
            _ => None,
        }
    }

    fn array_mut(&mut self, parent: &[usize]) -> Option<&mut Vec<Point>> {
        match (self, parent) {
            (Geometry::MultiPoint(pts) | Geometry::LineString(pts), []) => Some(pts),
            (Geometry::MultiLineString(lines) | Geometry::Polygon(lines), [i]) => {
                lines.get_mut(*i)
            }
            (Geometry::MultiPolygon(polys), [p, r]) => polys.get_mut(*p)?.get_mut(*r),
            _ => None,
        }
    }

    fn prune_collapsed_rings(&mut self) {
        match self {
            Geometry::Polygon(rings) => rings.retain(|ring| ring.len() > 2),
            Geometry::MultiPolygon(polys) => {
                for rings in polys.iter_mut() {
                    rings.retain(|ring| ring.len() > 2);
                }
            }
            _ => {}
        }
    }

    fn for_each_point_mut(&mut self, mut f: impl FnMut(&mut Point)) {
        match self {
            Geometry::Point(p) => f(p),
            Geometry::MultiPoint(pts) | Geometry::LineString(pts) => pts.iter_mut().for_each(f),
            Geometry::MultiLineString(lines) | Geometry::Polygon(lines) => {
                lines.iter_mut().flatten().for_each(f);
            }
            Geometry::MultiPolygon(polys) => {
                polys.iter_mut().flatten().flatten().for_each(f);
            }
        }
    }
}
