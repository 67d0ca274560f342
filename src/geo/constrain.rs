// Copyright 2025 the Geodraw Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Movement constraint for dragged geometry.
//!
//! A drag delta is shortened so the moved set stays inside the latitude
//! bands the map can show, and wrapped by whole turns of longitude when
//! it would push the set past the world copies the map renders.

use crate::settings::bounds;
use kurbo::{Point, Vec2};

/// Adjust `delta` so that moving every group by it stays in bounds
///
/// Each group is one feature (or one dragged vertex). The innermost
/// edges keep at least one group inside the rendered band, the outermost
/// edges keep every group inside the hard band.
pub fn constrain_movement(groups: &[Vec<Point>], delta: Vec2) -> Vec2 {
    let mut north_inner = bounds::LAT_MIN;
    let mut south_inner = bounds::LAT_MAX;
    let mut north_outer = bounds::LAT_MIN;
    let mut south_outer = bounds::LAT_MAX;
    let mut west = bounds::LNG_MAX;
    let mut east = bounds::LNG_MIN;

    for group in groups.iter().filter(|g| !g.is_empty()) {
        let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
        let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in group {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        north_inner = north_inner.max(min_y);
        south_inner = south_inner.min(max_y);
        north_outer = north_outer.max(max_y);
        south_outer = south_outer.min(min_y);
        west = west.min(min_x);
        east = east.max(max_x);
    }

    let mut constrained = delta;
    if north_inner + constrained.y > bounds::LAT_RENDERED_MAX {
        constrained.y = bounds::LAT_RENDERED_MAX - north_inner;
    }
    if north_outer + constrained.y > bounds::LAT_MAX {
        constrained.y = bounds::LAT_MAX - north_outer;
    }
    if south_inner + constrained.y < bounds::LAT_RENDERED_MIN {
        constrained.y = bounds::LAT_RENDERED_MIN - south_inner;
    }
    if south_outer + constrained.y < bounds::LAT_MIN {
        constrained.y = bounds::LAT_MIN - south_outer;
    }
    if west + constrained.x <= bounds::LNG_MIN {
        constrained.x += (constrained.x.abs() / 360.0).ceil() * 360.0;
    }
    if east + constrained.x >= bounds::LNG_MAX {
        constrained.x -= (constrained.x.abs() / 360.0).ceil() * 360.0;
    }
    constrained
}
