// Copyright 2025 the Geodraw Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Vertex selection, insertion and deletion for EditSession

use super::EditSession;
use crate::editing::drag::ShapeAnchors;
use crate::editing::selection::Selection;
use crate::geo::GeoToolkit;
use crate::host::DrawHost;
use crate::model::CoordPath;
use kurbo::Point;

impl<G: GeoToolkit> EditSession<G> {
    /// Select the vertex at `path` and start dragging it
    ///
    /// With `additive` the vertex joins the existing selection, otherwise
    /// it replaces it.
    pub(crate) fn select_vertex<H: DrawHost>(
        &mut self,
        host: &mut H,
        path: CoordPath,
        additive: bool,
        location: Point,
    ) {
        self.selection.select(path.clone(), additive);
        self.start_dragging(host, location, Some(&path));
        self.publish_selected_coordinates(host);
        self.fire_actionable(host);
    }

    /// Insert a vertex at a midpoint handle and start dragging it
    ///
    /// Shapes with a fixed vertex count ignore the request.
    pub(crate) fn insert_midpoint<H: DrawHost>(
        &mut self,
        host: &mut H,
        path: CoordPath,
        point: Point,
        location: Point,
    ) {
        let feature_id = self.feature_id();
        let Some(feature) = host.feature_mut(feature_id) else {
            tracing::warn!("[insert_midpoint] feature {} is gone", feature_id);
            return;
        };
        if !feature.kind().accepts_midpoints() {
            tracing::debug!("[insert_midpoint] {} keeps its vertex count", feature.kind());
            return;
        }
        // Anchors come from the shape as drawn, before the new vertex
        // shifts the ring.
        let anchors = ShapeAnchors::capture(feature, Some(&path));
        if !feature.add_coordinate(&path, point) {
            tracing::debug!("[insert_midpoint] no array at {}", path);
            return;
        }

        self.fire_update(host);
        self.begin_drag(host, location, anchors);
        self.selection = Selection::single(path);
        self.publish_selected_coordinates(host);
        self.fire_actionable(host);
    }

    /// Press on the edited feature's body
    ///
    /// With nothing selected this starts moving the whole feature; with
    /// vertices selected it only closes any open drag.
    pub(crate) fn toggle_feature_drag<H: DrawHost>(&mut self, host: &mut H, location: Point) {
        if self.selection.is_empty() {
            self.start_dragging(host, location, None);
        } else {
            self.stop_dragging(host);
        }
    }

    /// Drop the vertex selection and redraw the feature
    pub(crate) fn clear_selection<H: DrawHost>(&mut self, host: &mut H) {
        self.pending_press = None;
        self.selection.clear();
        host.clear_selected_coordinates();
        host.feature_changed(self.feature_id());
        self.fire_actionable(host);
    }

    /// Delete every selected vertex
    ///
    /// A feature left without enough vertices for its geometry is
    /// deleted and the session exits.
    pub(crate) fn trash_selection<H: DrawHost>(&mut self, host: &mut H) {
        let feature_id = self.feature_id();
        let Some(feature) = host.feature_mut(feature_id) else {
            tracing::warn!("[trash] feature {} is gone", feature_id);
            return;
        };
        let removed = feature.remove_coordinates(self.selection.as_slice());
        tracing::debug!("[trash] removed {} of {} vertices", removed, self.selection.len());
        let valid = feature.is_valid();
        self.pending_press = None;

        self.fire_update(host);
        self.selection.clear();
        host.clear_selected_coordinates();
        self.fire_actionable(host);

        if !valid {
            tracing::info!("[trash] feature {} collapsed, deleting it", feature_id);
            self.stop_dragging(host);
            host.delete_features(&[feature_id]);
            self.exit_to_neutral(host);
        }
    }
}
