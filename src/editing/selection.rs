// Copyright 2025 the Geodraw Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Ordered selection of coordinate paths within the active feature.
//!
//! `Selection` wraps an `Arc<Vec<CoordPath>>` so it can be cheaply cloned
//! into display passes. Mutations go through `Arc::make_mut`
//! (copy-on-write). Insertion order is kept for handle rendering; it has
//! no effect on how a drag moves the selected vertices.

use crate::model::CoordPath;
use std::sync::Arc;

/// Selected coordinate paths, in the order they were selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    inner: Arc<Vec<CoordPath>>,
}

impl Selection {
    /// Create a new empty selection
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Vec::new()),
        }
    }

    /// Selection holding exactly one path
    pub fn single(path: CoordPath) -> Self {
        Self {
            inner: Arc::new(vec![path]),
        }
    }

    /// Check if the selection is empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Get the number of selected paths
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if a path is selected
    pub fn contains(&self, path: &CoordPath) -> bool {
        self.inner.contains(path)
    }

    /// Iterate over selected paths in selection order
    pub fn iter(&self) -> impl Iterator<Item = &CoordPath> {
        self.inner.iter()
    }

    pub fn as_slice(&self) -> &[CoordPath] {
        &self.inner
    }

    /// Append a path unless it is already selected
    pub fn insert(&mut self, path: CoordPath) {
        if !self.contains(&path) {
            Arc::make_mut(&mut self.inner).push(path);
        }
    }

    /// Apply a click on a vertex
    ///
    /// A plain click collapses the selection to `path`. An additive
    /// click appends `path`; clicking an already-selected path additively
    /// leaves the selection as it is (it never deselects).
    pub fn select(&mut self, path: CoordPath, additive: bool) {
        if additive {
            self.insert(path);
        } else {
            *self = Self::single(path);
        }
    }

    /// Remove every path
    pub fn clear(&mut self) {
        if !self.is_empty() {
            self.inner = Arc::new(Vec::new());
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<CoordPath> for Selection {
    fn from_iter<I: IntoIterator<Item = CoordPath>>(iter: I) -> Self {
        let mut sel = Selection::new();
        for path in iter {
            sel.insert(path);
        }
        sel
    }
}
