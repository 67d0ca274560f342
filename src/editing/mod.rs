// Copyright 2025 the Geodraw Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Direct vertex editing and pointer interaction

pub mod classify;
pub mod display;
pub mod drag;
pub mod mode;
pub mod pointer;
pub mod recompute;
pub mod selection;
pub mod session;

pub use display::{DisplayFeature, DisplayMeta};
pub use mode::DrawMode;
pub use pointer::{Modifiers, PointerEvent, PointerTarget};
pub use selection::Selection;
pub use session::{EditSession, SetupOptions};
