// Copyright 2025 the Geodraw Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit session - direct vertex editing of a single feature
//!
//! The session holds only what belongs to the interaction: which feature
//! is being edited, which of its vertices are selected, and the drag in
//! progress. Features themselves stay in the host's store and are looked
//! up by id on every event.

mod dragging;
mod pointer_handling;
mod vertex_editing;


use super::drag::DragSession;
use super::selection::Selection;
use crate::error::SetupError;
use crate::geo::{GeoToolkit, Spherical};
use crate::host::{
    ActionableState, DrawEvent, DrawHost, ModeName, ModeOptions, SelectedCoordinate, UpdateAction,
};
use crate::model::{CoordPath, FeatureId};
use kurbo::Point;
use serde_json::Value;

/// Options for entering direct select mode
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetupOptions {
    /// Feature to edit; required
    pub feature_id: Option<FeatureId>,
    /// Where the press that opened the mode happened
    pub start_pos: Option<Point>,
    /// Vertex to start with selected
    pub coord_path: Option<CoordPath>,
}

impl SetupOptions {
    pub fn for_feature(id: FeatureId) -> Self {
        Self {
            feature_id: Some(id),
            ..Self::default()
        }
    }

    /// Continue a press on `path` at `location` into this mode
    pub fn pressed_at(mut self, location: Point, path: CoordPath) -> Self {
        self.start_pos = Some(location);
        self.coord_path = Some(path);
        self
    }
}

/// Direct select mode state
///
/// Generic over the geodesy toolkit so tests can substitute their own.
#[derive(Debug, Clone)]
pub struct EditSession<G = Spherical> {
    feature_id: FeatureId,
    pub(crate) selection: Selection,
    pub(crate) drag: Option<DragSession>,
    /// Press carried over from setup, turned into a drag by the first move
    pub(crate) pending_press: Option<(Point, CoordPath)>,
    /// Set once the session has asked to leave the mode
    terminated: bool,
    geo: G,
}

impl<G: GeoToolkit> EditSession<G> {
    /// Enter the mode with an explicit toolkit
    pub fn setup_with<H: DrawHost>(
        host: &mut H,
        options: SetupOptions,
        geo: G,
    ) -> Result<Self, SetupError> {
        let feature_id = options.feature_id.ok_or(SetupError::MissingFeatureId)?;
        let feature = host
            .feature(feature_id)
            .ok_or(SetupError::UnknownFeature(feature_id))?;
        if feature.is_point() {
            return Err(SetupError::PointFeature(feature_id));
        }
        let kind = feature.kind();

        let selection = options
            .coord_path
            .clone()
            .map(Selection::single)
            .unwrap_or_default();

        let mut session = Self {
            feature_id,
            selection,
            drag: None,
            pending_press: None,
            terminated: false,
            geo,
        };

        session.publish_selected_coordinates(host);
        host.set_selected(feature_id);
        host.set_double_click_zoom(false);
        host.set_actionable_state(ActionableState {
            trash: true,
            ..ActionableState::default()
        });

        if let (Some(start), Some(path)) = (options.start_pos, options.coord_path) {
            session.pending_press = Some((start, path));
        }

        tracing::info!("[EditSession::setup] editing {} feature {}", kind, feature_id);
        Ok(session)
    }

    /// Leave the mode, releasing everything the session acquired
    ///
    /// Safe to call more than once.
    pub fn stop<H: DrawHost>(&mut self, host: &mut H) {
        self.stop_dragging(host);
        host.set_double_click_zoom(true);
        self.selection.clear();
        host.clear_selected_coordinates();
        tracing::debug!("[EditSession::stop] feature {}", self.feature_id);
    }

    pub fn feature_id(&self) -> FeatureId {
        self.feature_id
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether the current drag has moved
    pub fn is_moving(&self) -> bool {
        self.drag.as_ref().is_some_and(DragSession::is_moving)
    }

    /// Whether the session has requested a switch to another mode
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    pub fn geo(&self) -> &G {
        &self.geo
    }

    /// Emit the current geometry of every selected feature
    pub(crate) fn fire_update<H: DrawHost>(&self, host: &mut H) {
        let features: Vec<Value> = host
            .selected_features()
            .into_iter()
            .map(|feature| feature.to_geojson())
            .collect();
        tracing::debug!("[fire_update] {} feature(s)", features.len());
        host.emit(DrawEvent::Update {
            action: UpdateAction::ChangeCoordinates,
            features,
        });
    }

    /// Trash applies only while vertices are selected
    pub(crate) fn fire_actionable<H: DrawHost>(&self, host: &mut H) {
        host.set_actionable_state(ActionableState {
            trash: !self.selection.is_empty(),
            combine: false,
            uncombine: false,
        });
    }

    pub(crate) fn publish_selected_coordinates<H: DrawHost>(&self, host: &mut H) {
        let coordinates = self
            .selection
            .iter()
            .map(|path| SelectedCoordinate {
                feature_id: self.feature_id,
                coord_path: path.clone(),
            })
            .collect();
        host.set_selected_coordinates(coordinates);
    }

    /// Drop the vertex selection and ask for the neutral mode
    ///
    /// Every event after this is ignored until the host calls `stop`.
    pub(crate) fn exit_to_neutral<H: DrawHost>(&mut self, host: &mut H) {
        self.stop_dragging(host);
        self.selection.clear();
        host.clear_selected_coordinates();
        self.terminated = true;
        tracing::debug!("[exit_to_neutral] leaving feature {}", self.feature_id);
        host.change_mode(ModeName::SimpleSelect, ModeOptions::default());
    }
}
