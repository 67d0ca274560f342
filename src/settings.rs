// Copyright 2025 the Geodraw Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing settings and configuration constants.
//!
//! This module holds the numeric tuning of the geometry collaborators.
//! Everything here is in geographic units: degrees for coordinates and
//! bearings, kilometers for distances.

// ============================================================================
// GEODESY SETTINGS
// ============================================================================
/// Mean earth radius used for great-circle math (kilometers)
const EARTH_RADIUS_KM: f64 = 6371.0088;

// ============================================================================
// SHAPE BUILDER SETTINGS
// ============================================================================
/// Number of vertices in a rebuilt circle ring
const CIRCLE_STEPS: usize = 64;

/// Number of arc steps in a full turn for a rebuilt sector ring
///
/// A sector sweeping 90° gets a quarter of these.
const SECTOR_STEPS: usize = 64;

// ============================================================================
// MOVEMENT BOUNDS
// ============================================================================
// Dragged geometry is kept inside the hard latitude band, and its
// innermost edge inside the band the map actually renders.

/// Hard southern latitude limit
const LAT_MIN: f64 = -90.0;
/// Hard northern latitude limit
const LAT_MAX: f64 = 90.0;
/// Southern limit of the rendered band
const LAT_RENDERED_MIN: f64 = -85.0;
/// Northern limit of the rendered band
const LAT_RENDERED_MAX: f64 = 85.0;
/// Western longitude limit before a drag wraps around
const LNG_MIN: f64 = -270.0;
/// Eastern longitude limit before a drag wraps around
const LNG_MAX: f64 = 270.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Great-circle math settings
pub mod geodesy {
    /// Mean earth radius in kilometers
    pub const EARTH_RADIUS_KM: f64 = super::EARTH_RADIUS_KM;
}

/// Circle ring builder settings
pub mod circle {
    /// Vertices per rebuilt circle ring
    pub const STEPS: usize = super::CIRCLE_STEPS;
}

/// Sector ring builder settings
pub mod sector {
    /// Arc steps per full turn
    pub const STEPS: usize = super::SECTOR_STEPS;
}

/// Movement-constraint bounds (degrees)
pub mod bounds {
    pub const LAT_MIN: f64 = super::LAT_MIN;
    pub const LAT_MAX: f64 = super::LAT_MAX;
    pub const LAT_RENDERED_MIN: f64 = super::LAT_RENDERED_MIN;
    pub const LAT_RENDERED_MAX: f64 = super::LAT_RENDERED_MAX;
    pub const LNG_MIN: f64 = super::LNG_MIN;
    pub const LNG_MAX: f64 = super::LNG_MAX;
}
