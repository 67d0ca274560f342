// Copyright 2025 the Geodraw Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Feature data model

pub mod coord_path;
pub mod feature;
pub mod feature_id;
pub mod geometry;
pub mod shape;

pub use coord_path::{CoordPath, CoordPathError, opposite_corner_of};
pub use feature::Feature;
pub use feature_id::FeatureId;
pub use geometry::Geometry;
pub use shape::ShapeKind;
