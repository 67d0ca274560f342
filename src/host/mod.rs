// Copyright 2025 the Geodraw Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! The outer drawing framework as seen by an editing mode.
//!
//! A mode never owns features. It reaches them by id through a
//! `DrawHost`, which also owns the camera flags, the mode switch and the
//! event channel. Every mode handler receives the host as `&mut`, so all
//! feature mutation happens inside one synchronous call.

mod memory;

pub use memory::MemoryHost;

use crate::model::{CoordPath, Feature, FeatureId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Modes the framework can switch between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeName {
    /// Neutral selection mode: whole features are selected, none edited
    SimpleSelect,
    /// Vertex editing of a single feature
    DirectSelect,
}

/// Options passed along with a mode switch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeOptions {
    /// Features the next mode starts with selected
    pub feature_ids: Vec<FeatureId>,
}

/// Which toolbar actions currently apply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionableState {
    pub trash: bool,
    pub combine: bool,
    pub uncombine: bool,
}

/// A selected vertex as published to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedCoordinate {
    pub feature_id: FeatureId,
    pub coord_path: CoordPath,
}

/// Pointer cursor requested by the mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cursor {
    #[default]
    Default,
    Move,
}

/// Kind of persisted update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateAction {
    /// Vertices were moved, inserted or removed
    ChangeCoordinates,
}

/// Events a mode publishes to the host's listeners
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DrawEvent {
    /// Geometry of the listed features changed
    Update {
        action: UpdateAction,
        /// GeoJSON `Feature` objects
        features: Vec<Value>,
    },
}

/// The framework contract consumed by editing modes
pub trait DrawHost {
    /// Look up a feature
    fn feature(&self, id: FeatureId) -> Option<&Feature>;

    /// Look up a feature for mutation
    fn feature_mut(&mut self, id: FeatureId) -> Option<&mut Feature>;

    /// Ids of the features currently selected in the framework
    fn selected_ids(&self) -> Vec<FeatureId>;

    /// Make `id` the framework's selected feature
    fn set_selected(&mut self, id: FeatureId);

    /// Remove features from the store
    fn delete_features(&mut self, ids: &[FeatureId]);

    /// Request a switch to another mode
    fn change_mode(&mut self, mode: ModeName, options: ModeOptions);

    /// Publish which toolbar actions apply
    fn set_actionable_state(&mut self, state: ActionableState);

    /// Enable or disable camera panning by drag
    fn set_drag_pan(&mut self, enabled: bool);

    /// Enable or disable double-click zoom
    fn set_double_click_zoom(&mut self, enabled: bool);

    /// Publish the vertex selection for handle rendering
    fn set_selected_coordinates(&mut self, coordinates: Vec<SelectedCoordinate>);

    /// Publish an event to listeners
    fn emit(&mut self, event: DrawEvent);

    /// Drop the published vertex selection
    fn clear_selected_coordinates(&mut self) {
        self.set_selected_coordinates(Vec::new());
    }

    /// Change the pointer cursor
    fn set_cursor(&mut self, _cursor: Cursor) {}

    /// Ask the renderer to redraw a feature
    fn feature_changed(&mut self, _id: FeatureId) {}

    /// Every selected feature
    fn selected_features(&self) -> Vec<&Feature> {
        self.selected_ids()
            .into_iter()
            .filter_map(|id| self.feature(id))
            .collect()
    }
}
