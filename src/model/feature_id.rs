// Copyright 2025 the Geodraw Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Stable identifiers for drawn features.
//!
//! Each `FeatureId` is a monotonically increasing `u64` generated from a
//! global atomic counter. Ids key the host's feature store and tag every
//! handle emitted for display, so a vertex handle can always be traced
//! back to its parent feature. They are never reused within a process.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for a drawn feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureId(u64);

static FEATURE_COUNTER: AtomicU64 = AtomicU64::new(1);

impl FeatureId {
    /// Create a new unique feature ID
    pub fn next() -> Self {
        Self(FEATURE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value
    pub fn get(self) -> u64 {
        self.0
    }
}

impl Default for FeatureId {
    fn default() -> Self {
        Self::next()
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
