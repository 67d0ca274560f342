// Copyright 2025 the Geodraw Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! The lifecycle contract between the drawing framework and a mode

use super::display::DisplayFeature;
use super::pointer::PointerEvent;
use crate::error::SetupError;
use crate::host::DrawHost;
use crate::model::Feature;

/// An interaction mode driven by the host's event loop
///
/// The host calls `setup` on entry and `stop` on exit, and routes each
/// pointer event to exactly one handler. Handlers run to completion
/// before the next event; every handler has a no-op default so a mode
/// only implements what it reacts to.
#[allow(unused_variables)]
pub trait DrawMode: Sized {
    /// Options the host passes on entry
    type Options;

    /// Enter the mode
    fn setup<H: DrawHost>(host: &mut H, options: Self::Options) -> Result<Self, SetupError>;

    /// Leave the mode; must release everything `setup` and the handlers
    /// acquired
    fn stop<H: DrawHost>(&mut self, host: &mut H) {}

    fn mouse_down<H: DrawHost>(&mut self, host: &mut H, event: &PointerEvent) {}

    fn touch_start<H: DrawHost>(&mut self, host: &mut H, event: &PointerEvent) {
        self.mouse_down(host, event);
    }

    /// Pointer moved with the button held
    fn drag<H: DrawHost>(&mut self, host: &mut H, event: &PointerEvent) {}

    /// Pointer moved with no button held
    fn mouse_move<H: DrawHost>(&mut self, host: &mut H, event: &PointerEvent) {}

    fn mouse_up<H: DrawHost>(&mut self, host: &mut H, event: &PointerEvent) {}

    fn touch_end<H: DrawHost>(&mut self, host: &mut H, event: &PointerEvent) {
        self.mouse_up(host, event);
    }

    /// Pointer left the map canvas
    fn mouse_out<H: DrawHost>(&mut self, host: &mut H, event: &PointerEvent) {}

    fn click<H: DrawHost>(&mut self, host: &mut H, event: &PointerEvent) {}

    fn tap<H: DrawHost>(&mut self, host: &mut H, event: &PointerEvent) {}

    /// Delete key or trash button
    fn trash<H: DrawHost>(&mut self, host: &mut H) {}

    /// Push what to render for `feature`; must not change any state
    fn display_features(&self, feature: &Feature, push: &mut dyn FnMut(DisplayFeature)) {
        push(DisplayFeature::from_feature(feature, false));
    }
}
