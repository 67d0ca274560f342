// Copyright 2025 the Geodraw Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Drag lifecycle for EditSession
//!
//! Camera panning is disabled for exactly as long as a drag session
//! exists: `begin_drag` is the only place that disables it and
//! `stop_dragging` the only place that restores it.

use super::EditSession;
use crate::editing::drag::{DragSession, ShapeAnchors};
use crate::editing::recompute::DragStrategy;
use crate::editing::selection::Selection;
use crate::geo::GeoToolkit;
use crate::host::DrawHost;
use crate::model::CoordPath;
use kurbo::{Point, Vec2};

impl<G: GeoToolkit> EditSession<G> {
    /// Open a drag session at `location`
    ///
    /// `pressed` is the vertex under the pointer, if any; parametric
    /// shapes derive their anchors from it.
    pub(crate) fn start_dragging<H: DrawHost>(
        &mut self,
        host: &mut H,
        location: Point,
        pressed: Option<&CoordPath>,
    ) {
        let anchors = host
            .feature(self.feature_id())
            .map(|feature| ShapeAnchors::capture(feature, pressed))
            .unwrap_or_default();
        self.begin_drag(host, location, anchors);
    }

    /// Open a drag session with anchors captured by the caller
    pub(crate) fn begin_drag<H: DrawHost>(
        &mut self,
        host: &mut H,
        location: Point,
        anchors: ShapeAnchors,
    ) {
        if self.drag.is_some() {
            // A press without a release; close the old session first.
            self.stop_dragging(host);
        }
        self.pending_press = None;
        host.set_drag_pan(false);
        self.drag = Some(DragSession::begin(location, anchors));
        tracing::debug!("[start_dragging] at ({}, {})", location.x, location.y);
    }

    /// Close the drag session, if there is one
    ///
    /// Restores camera panning, and publishes the final geometry when the
    /// pointer actually moved.
    pub(crate) fn stop_dragging<H: DrawHost>(&mut self, host: &mut H) {
        self.pending_press = None;
        let Some(drag) = self.drag.take() else {
            return;
        };
        host.set_drag_pan(true);
        if drag.is_moving() {
            tracing::debug!("[stop_dragging] drag finished, publishing update");
            self.fire_update(host);
        }
    }

    /// Apply one drag move to `location`
    ///
    /// The first move after a setup that continued a press opens the
    /// drag at the press location.
    pub(crate) fn drag_to<H: DrawHost>(&mut self, host: &mut H, location: Point) {
        if self.drag.is_none()
            && let Some((start, path)) = self.pending_press.take()
        {
            self.start_dragging(host, start, Some(&path));
        }
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        let delta = drag.advance(location);
        let anchors = *drag.anchors();

        if self.selection.is_empty() {
            self.drag_features(host, delta);
            return;
        }

        let feature_id = self.feature_id();
        let Some(feature) = host.feature_mut(feature_id) else {
            tracing::warn!("[drag_to] feature {} is gone", feature_id);
            return;
        };
        let strategy = DragStrategy::for_shape(feature.kind());
        let follow = strategy.apply(feature, &self.selection, &anchors, location, delta, self.geo());

        if let Some(path) = follow
            && !self.selection.contains(&path)
        {
            self.selection = Selection::single(path);
            self.publish_selected_coordinates(host);
        }
    }

    /// Translate every selected feature, constrained as one unit
    fn drag_features<H: DrawHost>(&self, host: &mut H, delta: Vec2) {
        let ids = host.selected_ids();
        let groups: Vec<Vec<Point>> = host
            .selected_features()
            .into_iter()
            .map(|feature| feature.geometry().points())
            .collect();
        let constrained = self.geo().constrain_movement(&groups, delta);
        for id in ids {
            if let Some(feature) = host.feature_mut(id) {
                feature.translate(constrained);
            }
        }
    }
}
