// Copyright 2025 the Geodraw Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Render-ready features produced by a mode's display pass

use crate::geo::{Handle, HandleKind};
use crate::model::{CoordPath, Feature, FeatureId, Geometry};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Role of a displayed feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMeta {
    /// A stored feature
    Feature,
    /// Vertex handle of the edited feature
    Vertex,
    /// Midpoint handle of the edited feature
    Midpoint,
}

/// One item pushed to the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayFeature {
    pub meta: DisplayMeta,
    /// Edited feature, or selected vertex handle
    pub active: bool,
    /// The feature itself, or the parent of a handle
    pub feature_id: FeatureId,
    /// Handle path; `None` for features
    pub coord_path: Option<CoordPath>,
    pub geometry: Geometry,
}

impl DisplayFeature {
    /// Display copy of a stored feature
    pub fn from_feature(feature: &Feature, active: bool) -> Self {
        Self {
            meta: DisplayMeta::Feature,
            active,
            feature_id: feature.id(),
            coord_path: None,
            geometry: feature.geometry().clone(),
        }
    }

    /// Display item for a handle
    pub fn from_handle(handle: Handle) -> Self {
        let meta = match handle.kind {
            HandleKind::Vertex => DisplayMeta::Vertex,
            HandleKind::Midpoint => DisplayMeta::Midpoint,
        };
        Self {
            meta,
            active: handle.selected,
            feature_id: handle.parent,
            coord_path: Some(handle.path),
            geometry: Geometry::Point(handle.point),
        }
    }

    /// GeoJSON with the metadata a style layer filters on
    pub fn to_geojson(&self) -> Value {
        let mut properties = json!({
            "meta": self.meta,
            "active": self.active,
        });
        match self.meta {
            DisplayMeta::Feature => properties["id"] = json!(self.feature_id),
            DisplayMeta::Vertex | DisplayMeta::Midpoint => {
                properties["parent"] = json!(self.feature_id);
                properties["coord_path"] = json!(self.coord_path);
            }
        }
        json!({
            "type": "Feature",
            "properties": properties,
            "geometry": self.geometry.to_geojson(),
        })
    }
}
