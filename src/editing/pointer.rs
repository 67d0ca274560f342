// Copyright 2025 the Geodraw Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer events as delivered by the host.
//!
//! The host has already hit-tested the event against the rendered
//! layers; `PointerTarget` is the metadata of whatever was under the
//! pointer. The editing engine only ever reads these tags.

use crate::model::{CoordPath, FeatureId};
use kurbo::Point;

/// Keyboard modifiers held during the event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
}

/// What the pointer struck
#[derive(Debug, Clone, PartialEq)]
pub enum PointerTarget {
    /// Vertex handle of a feature
    Vertex {
        parent: FeatureId,
        path: CoordPath,
        point: Point,
    },
    /// Midpoint handle between two vertices
    Midpoint {
        parent: FeatureId,
        path: CoordPath,
        point: Point,
    },
    /// Body of a rendered feature; `active` when it is the edited one
    Feature { id: FeatureId, active: bool },
    /// Empty map
    None,
}

/// A pointer (mouse or touch) event in map coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    /// Position as `(longitude, latitude)`
    pub location: Point,
    pub target: PointerTarget,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Event over empty map
    pub fn at(location: Point) -> Self {
        Self {
            location,
            target: PointerTarget::None,
            modifiers: Modifiers::default(),
        }
    }

    /// Same event with a different target
    pub fn on(mut self, target: PointerTarget) -> Self {
        self.target = target;
        self
    }

    /// Same event with shift held
    pub fn with_shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    pub fn is_vertex(&self) -> bool {
        matches!(self.target, PointerTarget::Vertex { .. })
    }

    pub fn is_active_feature(&self) -> bool {
        matches!(self.target, PointerTarget::Feature { active: true, .. })
    }

    pub fn is_inactive_feature(&self) -> bool {
        matches!(self.target, PointerTarget::Feature { active: false, .. })
    }

    pub fn has_no_target(&self) -> bool {
        matches!(self.target, PointerTarget::None)
    }
}
