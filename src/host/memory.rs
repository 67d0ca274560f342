// Copyright 2025 the Geodraw Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! In-memory `DrawHost` that records everything a mode asks of it.
//!
//! Used by the demo binary and by the controller tests: it keeps the
//! feature store in a `BTreeMap` and appends every event, mode request
//! and flag change to inspectable fields.

use super::{
    ActionableState, Cursor, DrawEvent, DrawHost, ModeName, ModeOptions, SelectedCoordinate,
};
use crate::model::{Feature, FeatureId};
use std::collections::BTreeMap;

/// Recording host backed by an in-memory feature store
#[derive(Debug, Clone)]
pub struct MemoryHost {
    features: BTreeMap<FeatureId, Feature>,
    selected: Vec<FeatureId>,

    /// Every event emitted, oldest first
    pub events: Vec<DrawEvent>,

    /// Every mode switch requested, oldest first
    pub mode_requests: Vec<(ModeName, ModeOptions)>,

    /// Last published actionable state
    pub actionable: ActionableState,

    /// Last published vertex selection
    pub selected_coordinates: Vec<SelectedCoordinate>,

    /// Last requested cursor
    pub cursor: Cursor,

    /// Features the mode asked to redraw
    pub redraws: Vec<FeatureId>,

    drag_pan: bool,
    double_click_zoom: bool,
}

impl MemoryHost {
    /// Create an empty store with camera interactions enabled
    pub fn new() -> Self {
        Self {
            features: BTreeMap::new(),
            selected: Vec::new(),
            events: Vec::new(),
            mode_requests: Vec::new(),
            actionable: ActionableState::default(),
            selected_coordinates: Vec::new(),
            cursor: Cursor::Default,
            redraws: Vec::new(),
            drag_pan: true,
            double_click_zoom: true,
        }
    }

    /// Add a feature, returning its id
    pub fn add(&mut self, feature: Feature) -> FeatureId {
        let id = feature.id();
        self.features.insert(id, feature);
        id
    }

    /// All stored features in id order
    pub fn features(&self) -> impl Iterator<Item = &Feature> {
        self.features.values()
    }

    pub fn contains(&self, id: FeatureId) -> bool {
        self.features.contains_key(&id)
    }

    pub fn drag_pan_enabled(&self) -> bool {
        self.drag_pan
    }

    pub fn double_click_zoom_enabled(&self) -> bool {
        self.double_click_zoom
    }

    /// The most recent mode request
    pub fn last_mode_request(&self) -> Option<&(ModeName, ModeOptions)> {
        self.mode_requests.last()
    }
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawHost for MemoryHost {
    fn feature(&self, id: FeatureId) -> Option<&Feature> {
        self.features.get(&id)
    }

    fn feature_mut(&mut self, id: FeatureId) -> Option<&mut Feature> {
        self.features.get_mut(&id)
    }

    fn selected_ids(&self) -> Vec<FeatureId> {
        self.selected.clone()
    }

    fn set_selected(&mut self, id: FeatureId) {
        self.selected = vec![id];
    }

    fn delete_features(&mut self, ids: &[FeatureId]) {
        for id in ids {
            self.features.remove(id);
        }
        self.selected.retain(|id| !ids.contains(id));
    }

    fn change_mode(&mut self, mode: ModeName, options: ModeOptions) {
        tracing::debug!("[MemoryHost] mode change requested: {:?}", mode);
        self.mode_requests.push((mode, options));
    }

    fn set_actionable_state(&mut self, state: ActionableState) {
        self.actionable = state;
    }

    fn set_drag_pan(&mut self, enabled: bool) {
        self.drag_pan = enabled;
    }

    fn set_double_click_zoom(&mut self, enabled: bool) {
        self.double_click_zoom = enabled;
    }

    fn set_selected_coordinates(&mut self, coordinates: Vec<SelectedCoordinate>) {
        self.selected_coordinates = coordinates;
    }

    fn emit(&mut self, event: DrawEvent) {
        self.events.push(event);
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }

    fn feature_changed(&mut self, id: FeatureId) {
        self.redraws.push(id);
    }
}
