// Copyright 2025 the Geodraw Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Great-circle distance, bearing and destination on a spherical earth.
//!
//! Points are `(longitude, latitude)` in degrees, distances in
//! kilometers, bearings in degrees clockwise from north.

use crate::settings;
use kurbo::Point;

/// Haversine distance between two positions (kilometers)
pub fn distance(from: Point, to: Point) -> f64 {
    let lat1 = from.y.to_radians();
    let lat2 = to.y.to_radians();
    let d_lat = (to.y - from.y).to_radians();
    let d_lon = (to.x - from.x).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + (d_lon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
    2.0 * a.sqrt().atan2((1.0 - a).sqrt()) * settings::geodesy::EARTH_RADIUS_KM
}

/// Initial bearing from `from` towards `to`, in `[-180, 180]`
pub fn bearing(from: Point, to: Point) -> f64 {
    let lon1 = from.x.to_radians();
    let lon2 = to.x.to_radians();
    let lat1 = from.y.to_radians();
    let lat2 = to.y.to_radians();

    let a = (lon2 - lon1).sin() * lat2.cos();
    let b = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * (lon2 - lon1).cos();
    a.atan2(b).to_degrees()
}

/// Position reached by travelling `distance_km` from `origin` along
/// `bearing_deg`
pub fn destination(origin: Point, distance_km: f64, bearing_deg: f64) -> Point {
    let lon1 = origin.x.to_radians();
    let lat1 = origin.y.to_radians();
    let theta = bearing_deg.to_radians();
    let delta = distance_km / settings::geodesy::EARTH_RADIUS_KM;

    let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos()).asin();
    let lon2 = lon1
        + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());
    Point::new(lon2.to_degrees(), lat2.to_degrees())
}

/// Normalize a bearing into `[0, 360)`
pub fn bearing_to_360(bearing_deg: f64) -> f64 {
    let alpha = bearing_deg % 360.0;
    if alpha < 0.0 { alpha + 360.0 } else { alpha }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn one_degree_of_latitude() {
        let d = distance(Point::new(0.0, 0.0), Point::new(0.0, 1.0));
        assert!(close(d, 111.195, 0.01), "got {d}");
    }

    #[test]
    fn cardinal_bearings() {
        let o = Point::ZERO;
        assert!(close(bearing(o, Point::new(0.0, 1.0)), 0.0, 1e-9));
        assert!(close(bearing(o, Point::new(1.0, 0.0)), 90.0, 1e-9));
        assert!(close(bearing(o, Point::new(0.0, -1.0)).abs(), 180.0, 1e-9));
        assert!(close(bearing(o, Point::new(-1.0, 0.0)), -90.0, 1e-9));
    }

    #[test]
    fn destination_inverts_distance_and_bearing() {
        let origin = Point::new(10.0, 45.0);
        let target = destination(origin, 250.0, 33.0);
        assert!(close(distance(origin, target), 250.0, 1e-6));
        assert!(close(bearing(origin, target), 33.0, 1e-6));
    }

    #[test]
    fn bearing_normalization() {
        assert_eq!(bearing_to_360(-90.0), 270.0);
        assert_eq!(bearing_to_360(450.0), 90.0);
        assert_eq!(bearing_to_360(0.0), 0.0);
    }
}
