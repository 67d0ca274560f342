// Copyright 2025 the Geodraw Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Ring builders for the parametric shapes.
//!
//! Circle and rectangle rings come back open (no closing duplicate), the
//! form features store. The sector ring comes back closed, starting and
//! ending at its center, so callers decide whether to keep the closing
//! point.

use super::geodesy::{bearing_to_360, destination};
use crate::settings;
use kurbo::Point;

/// Open ring of `steps` vertices at `radius_km` around `center`
pub fn circle_ring(center: Point, radius_km: f64, steps: usize) -> Vec<Point> {
    let steps = steps.max(3);
    (0..steps)
        .map(|i| destination(center, radius_km, i as f64 * 360.0 / steps as f64))
        .collect()
}

/// Open axis-aligned ring with `from` at index 0 and `to` at index 2
pub fn rectangle_ring(from: Point, to: Point) -> Vec<Point> {
    vec![
        from,
        Point::new(from.x, to.y),
        to,
        Point::new(to.x, from.y),
    ]
}

/// Closed sector ring `[center, arc.., center]` sweeping clockwise from
/// `bearing1` to `bearing2`
///
/// Equal bearings describe a full turn and produce a closed circle ring
/// without the center vertex.
pub fn sector_ring(center: Point, radius_km: f64, bearing1: f64, bearing2: f64) -> Vec<Point> {
    let steps = settings::sector::STEPS.max(3);
    let start = bearing_to_360(bearing1);
    let end = bearing_to_360(bearing2);

    if start == end {
        let mut ring = circle_ring(center, radius_km, settings::circle::STEPS);
        if let Some(first) = ring.first().copied() {
            ring.push(first);
        }
        return ring;
    }

    let end = if start < end { end } else { end + 360.0 };
    let mut ring = vec![center];
    let mut alpha = start;
    let mut i = 0usize;
    while alpha < end {
        ring.push(destination(center, radius_km, alpha));
        i += 1;
        alpha = start + (i as f64 * 360.0) / steps as f64;
    }
    ring.push(destination(center, radius_km, end));
    ring.push(center);
    ring
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::geodesy::{bearing, distance};

    #[test]
    fn circle_vertices_share_radius() {
        let center = Point::new(12.0, 41.0);
        let ring = circle_ring(center, 3.5, 32);
        assert_eq!(ring.len(), 32);
        for p in &ring {
            assert!((distance(center, *p) - 3.5).abs() < 1e-6);
        }
    }

    #[test]
    fn rectangle_ring_places_endpoints_diagonally() {
        let ring = rectangle_ring(Point::new(1.0, 1.0), Point::new(2.0, 2.0));
        assert_eq!(ring.len(), 4);
        assert_eq!(ring[0], Point::new(1.0, 1.0));
        assert_eq!(ring[2], Point::new(2.0, 2.0));
        assert_eq!(ring[1], Point::new(1.0, 2.0));
        assert_eq!(ring[3], Point::new(2.0, 1.0));
    }

    #[test]
    fn sector_starts_and_ends_at_center() {
        let center = Point::new(0.0, 0.0);
        let ring = sector_ring(center, 10.0, 0.0, 90.0);
        assert_eq!(ring.first(), Some(&center));
        assert_eq!(ring.last(), Some(&center));
        // 0°, 5.625°, .. 84.375°, then the exact 90° end.
        assert_eq!(ring.len(), 1 + 16 + 1 + 1);
        let arc_start = ring[1];
        let arc_end = ring[ring.len() - 2];
        assert!(bearing(center, arc_start).abs() < 1e-6);
        assert!((bearing(center, arc_end) - 90.0).abs() < 1e-6);
    }

    #[test]
    fn sector_wraps_across_north() {
        let center = Point::new(0.0, 0.0);
        let ring = sector_ring(center, 10.0, -45.0, 45.0);
        let arc_end = ring[ring.len() - 2];
        assert!((bearing(center, arc_end) - 45.0).abs() < 1e-6);
        // 90° of sweep, not 270°.
        assert_eq!(ring.len(), 1 + 16 + 1 + 1);
    }

    #[test]
    fn equal_bearings_make_a_closed_circle() {
        let ring = sector_ring(Point::ZERO, 1.0, 30.0, 30.0);
        assert_eq!(ring.len(), settings::circle::STEPS + 1);
        assert_eq!(ring.first(), ring.last());
    }
}
