// Copyright 2025 the Geodraw Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Errors surfaced to the host when entering an editing mode.
//!
//! Event handlers never fail: a missing feature or a disallowed edit is
//! logged and ignored. Only mode entry can be refused.

use crate::model::FeatureId;
use thiserror::Error;

/// Reasons an editing session cannot start
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// No feature id was given
    #[error("a feature id is required to enter direct select mode")]
    MissingFeatureId,

    /// The id does not resolve in the feature store
    #[error("feature {0} does not exist")]
    UnknownFeature(FeatureId),

    /// Points have no vertices to edit apart from the feature itself
    #[error("direct select mode does not handle point feature {0}")]
    PointFeature(FeatureId),
}
