// Copyright 2025 the Geodraw Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Geometry collaborators used by the editing engine.
//!
//! The engine never does geodesy itself. It asks a `GeoToolkit` for
//! distances, bearings, shape rings and movement constraints, so a host
//! can swap in its own projection-aware primitives. `Spherical` is the
//! default: great-circle math on a spherical earth.

pub mod builders;
pub mod constrain;
pub mod geodesy;
pub mod supplementary;

pub use supplementary::{Handle, HandleKind, supplementary_points};

use crate::settings;
use kurbo::{Point, Vec2};

/// Geometric primitives consumed by the shape recompute strategies
pub trait GeoToolkit {
    /// Great-circle distance in kilometers
    fn distance(&self, from: Point, to: Point) -> f64;

    /// Initial bearing in degrees, `[-180, 180]`
    fn bearing(&self, from: Point, to: Point) -> f64;

    /// Open circle ring around `center`
    fn circle_ring(&self, center: Point, radius_km: f64) -> Vec<Point>;

    /// Open rectangle ring; `from` lands at index 0 and `to` at index 2
    fn rectangle_ring(&self, from: Point, to: Point) -> Vec<Point>;

    /// Closed sector ring `[center, arc.., center]`
    fn sector_ring(&self, center: Point, radius_km: f64, bearing1: f64, bearing2: f64)
    -> Vec<Point>;

    /// Possibly adjusted delta for moving every group by `delta`
    fn constrain_movement(&self, groups: &[Vec<Point>], delta: Vec2) -> Vec2;
}

/// Spherical-earth toolkit
#[derive(Debug, Clone, Copy, Default)]
pub struct Spherical;

impl GeoToolkit for Spherical {
    fn distance(&self, from: Point, to: Point) -> f64 {
        geodesy::distance(from, to)
    }

    fn bearing(&self, from: Point, to: Point) -> f64 {
        geodesy::bearing(from, to)
    }

    fn circle_ring(&self, center: Point, radius_km: f64) -> Vec<Point> {
        builders::circle_ring(center, radius_km, settings::circle::STEPS)
    }

    fn rectangle_ring(&self, from: Point, to: Point) -> Vec<Point> {
        builders::rectangle_ring(from, to)
    }

    fn sector_ring(
        &self,
        center: Point,
        radius_km: f64,
        bearing1: f64,
        bearing2: f64,
    ) -> Vec<Point> {
        builders::sector_ring(center, radius_km, bearing1, bearing2)
    }

    fn constrain_movement(&self, groups: &[Vec<Point>], delta: Vec2) -> Vec2 {
        constrain::constrain_movement(groups, delta)
    }
}
