// Copyright 2025 the Geodraw Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Turning pointer targets into editing actions.
//!
//! Handles are drawn above the feature body, so a press resolves in the
//! order vertex, active body, midpoint, inactive feature, empty map. The
//! first match wins and every press maps to exactly one action.

use super::pointer::{PointerEvent, PointerTarget};
use crate::model::CoordPath;
use kurbo::Point;

/// Action for a pointer press (mouse down, touch start)
#[derive(Debug, Clone, PartialEq)]
pub enum PressAction {
    /// Select a vertex and start dragging it
    SelectVertex { path: CoordPath, additive: bool },
    /// Insert a vertex at a midpoint and start dragging it
    InsertMidpoint { path: CoordPath, point: Point },
    /// Start dragging the whole feature, or stop the current drag
    ToggleFeatureDrag,
    /// Pressed another feature: drop the selection and leave the mode
    DeselectAndExit,
    /// Pressed empty map: leave the mode
    ExitToNeutral,
    /// Nothing to do
    NoOp,
}

/// Action for a completed click or tap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Leave the mode
    ExitToNeutral,
    /// Clear the vertex selection and redraw the feature
    ClearSelection,
    /// Close a drag that is still open
    StopDrag,
}

/// Classify a press
pub fn classify_press(event: &PointerEvent) -> PressAction {
    let action = match &event.target {
        PointerTarget::Vertex { path, .. } => PressAction::SelectVertex {
            path: path.clone(),
            additive: event.modifiers.shift,
        },
        PointerTarget::Feature { active: true, .. } => PressAction::ToggleFeatureDrag,
        PointerTarget::Midpoint { path, point, .. } => PressAction::InsertMidpoint {
            path: path.clone(),
            point: *point,
        },
        PointerTarget::Feature { active: false, .. } => PressAction::DeselectAndExit,
        PointerTarget::None => PressAction::ExitToNeutral,
    };
    tracing::debug!("[classify_press] {:?}", action);
    action
}

/// Classify a click
pub fn classify_click(event: &PointerEvent) -> ClickAction {
    if event.has_no_target() || event.is_inactive_feature() {
        ClickAction::ExitToNeutral
    } else if event.is_active_feature() {
        ClickAction::ClearSelection
    } else {
        ClickAction::StopDrag
    }
}

/// Classify a tap; taps on handles are ignored
pub fn classify_tap(event: &PointerEvent) -> Option<ClickAction> {
    match classify_click(event) {
        ClickAction::StopDrag => None,
        action => Some(action),
    }
}
