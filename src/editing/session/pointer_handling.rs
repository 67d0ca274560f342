// Copyright 2025 the Geodraw Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Routing host events into EditSession actions

use super::{EditSession, SetupOptions};
use crate::editing::classify::{ClickAction, PressAction, classify_click, classify_press, classify_tap};
use crate::editing::display::DisplayFeature;
use crate::editing::mode::DrawMode;
use crate::editing::pointer::PointerEvent;
use crate::error::SetupError;
use crate::geo::{GeoToolkit, supplementary_points};
use crate::host::{Cursor, DrawHost};
use crate::model::Feature;

impl<G: GeoToolkit> EditSession<G> {
    fn apply_click<H: DrawHost>(&mut self, host: &mut H, action: ClickAction) {
        match action {
            ClickAction::ExitToNeutral => self.exit_to_neutral(host),
            ClickAction::ClearSelection => self.clear_selection(host),
            ClickAction::StopDrag => self.stop_dragging(host),
        }
    }
}

impl<G: GeoToolkit + Default> DrawMode for EditSession<G> {
    type Options = SetupOptions;

    fn setup<H: DrawHost>(host: &mut H, options: SetupOptions) -> Result<Self, SetupError> {
        Self::setup_with(host, options, G::default())
    }

    fn stop<H: DrawHost>(&mut self, host: &mut H) {
        EditSession::stop(self, host);
    }

    fn mouse_down<H: DrawHost>(&mut self, host: &mut H, event: &PointerEvent) {
        if self.is_terminated() {
            return;
        }
        match classify_press(event) {
            PressAction::SelectVertex { path, additive } => {
                self.select_vertex(host, path, additive, event.location)
            }
            PressAction::InsertMidpoint { path, point } => {
                self.insert_midpoint(host, path, point, event.location)
            }
            PressAction::ToggleFeatureDrag => self.toggle_feature_drag(host, event.location),
            PressAction::DeselectAndExit | PressAction::ExitToNeutral => self.exit_to_neutral(host),
            PressAction::NoOp => {}
        }
    }

    fn drag<H: DrawHost>(&mut self, host: &mut H, event: &PointerEvent) {
        if self.is_terminated() {
            return;
        }
        self.drag_to(host, event.location);
    }

    fn mouse_move<H: DrawHost>(&mut self, host: &mut H, event: &PointerEvent) {
        if self.is_terminated() {
            return;
        }
        let nothing_selected = self.selection.is_empty();
        let movable = (event.is_active_feature() && nothing_selected)
            || (event.is_vertex() && !nothing_selected);
        host.set_cursor(if movable { Cursor::Move } else { Cursor::Default });
        // A move without the button held means the release was missed.
        self.stop_dragging(host);
    }

    fn mouse_up<H: DrawHost>(&mut self, host: &mut H, _event: &PointerEvent) {
        if self.is_terminated() {
            return;
        }
        self.stop_dragging(host);
    }

    fn mouse_out<H: DrawHost>(&mut self, host: &mut H, _event: &PointerEvent) {
        if self.is_terminated() {
            return;
        }
        if self.is_moving() {
            self.stop_dragging(host);
        }
    }

    fn click<H: DrawHost>(&mut self, host: &mut H, event: &PointerEvent) {
        if self.is_terminated() {
            return;
        }
        let action = classify_click(event);
        self.apply_click(host, action);
    }

    fn tap<H: DrawHost>(&mut self, host: &mut H, event: &PointerEvent) {
        if self.is_terminated() {
            return;
        }
        if let Some(action) = classify_tap(event) {
            self.apply_click(host, action);
        }
    }

    fn trash<H: DrawHost>(&mut self, host: &mut H) {
        if self.is_terminated() {
            return;
        }
        self.trash_selection(host);
    }

    fn display_features(&self, feature: &Feature, push: &mut dyn FnMut(DisplayFeature)) {
        if feature.id() != self.feature_id() {
            push(DisplayFeature::from_feature(feature, false));
            return;
        }
        push(DisplayFeature::from_feature(feature, true));
        let midpoints = feature.kind().accepts_midpoints();
        for handle in supplementary_points(feature, self.selection.as_slice(), midpoints) {
            push(DisplayFeature::from_handle(handle));
        }
    }
}
