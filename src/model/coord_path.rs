// Copyright 2025 the Geodraw Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Structured locators for a single coordinate inside a feature.
//!
//! A `CoordPath` is the list of indices that walks a feature's nested
//! coordinate arrays down to one position: `[i]` for a LineString,
//! `[ring, i]` for a Polygon, `[part, ring, i]` for a MultiPolygon. The
//! host exchanges paths in their dotted string form (`"0.3"`), which is
//! what `Display`, `FromStr` and the serde impls use.
//!
//! Ordering is lexicographic over the numeric indices, so sorting paths
//! in descending order visits later coordinates of a ring before earlier
//! ones. Removing in that order never shifts a path that is still
//! waiting to be removed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing the dotted path form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordPathError {
    /// The string held no indices
    #[error("coordinate path is empty")]
    Empty,

    /// One of the dotted segments was not an index
    #[error("invalid coordinate path segment {segment:?} in {path:?}")]
    InvalidSegment {
        /// The offending segment
        segment: String,
        /// The full input
        path: String,
    },
}

/// Locator of one coordinate in a feature's coordinate structure
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct CoordPath(Vec<usize>);

impl CoordPath {
    /// Build a path from its indices, outermost first
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self(indices.into())
    }

    /// All indices, outermost first
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Index of the coordinate inside its innermost array
    pub fn last_index(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// Indices leading to the innermost array (everything but the last)
    pub fn parent(&self) -> &[usize] {
        match self.0.split_last() {
            Some((_, parent)) => parent,
            None => &[],
        }
    }

    /// The same path pointing at a different position in the same array
    pub fn with_last_index(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        match indices.last_mut() {
            Some(last) => *last = index,
            None => indices.push(index),
        }
        Self(indices)
    }

    /// A child path one level deeper
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }
}

/// Path of the corner diagonally opposite `path` in a ring of
/// `ring_len` corners.
///
/// The opposite corner sits half a ring away. For the 4-corner rectangle
/// ring this is `index ± 2`. Returns `None` for an empty path, a ring
/// with an odd or zero corner count, or an index outside the ring.
pub fn opposite_corner_of(path: &CoordPath, ring_len: usize) -> Option<CoordPath> {
    if ring_len == 0 || ring_len % 2 != 0 {
        return None;
    }
    let index = path.last_index()?;
    if index >= ring_len {
        return None;
    }
    let half = ring_len / 2;
    let opposite = if index >= half {
        index - half
    } else {
        index + half
    };
    Some(path.with_last_index(opposite))
}

impl fmt::Display for CoordPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}

impl FromStr for CoordPath {
    type Err = CoordPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(CoordPathError::Empty);
        }
        s.split('.')
            .map(|segment| {
                segment
                    .parse::<usize>()
                    .map_err(|_| CoordPathError::InvalidSegment {
                        segment: segment.to_string(),
                        path: s.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl From<CoordPath> for String {
    fn from(path: CoordPath) -> Self {
        path.to_string()
    }
}

impl TryFrom<String> for CoordPath {
    type Error = CoordPathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(s: &str) -> CoordPath {
        s.parse().unwrap()
    }

    #[test]
    fn parses_and_displays_dotted_form() {
        let p = path("1.0.12");
        assert_eq!(p.indices(), &[1, 0, 12]);
        assert_eq!(p.to_string(), "1.0.12");
        assert_eq!(p.last_index(), Some(12));
        assert_eq!(p.parent(), &[1, 0]);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!("".parse::<CoordPath>(), Err(CoordPathError::Empty));
        assert!(matches!(
            "0.x".parse::<CoordPath>(),
            Err(CoordPathError::InvalidSegment { .. })
        ));
        assert!("0..1".parse::<CoordPath>().is_err());
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(path("0.2"), CoordPath::new(vec![0, 2]));
        assert_ne!(path("0.2"), path("2.0"));
    }

    #[test]
    fn descending_order_is_numeric_not_textual() {
        // A textual sort would put "0.9" ahead of "0.10".
        let mut paths = vec![path("0.9"), path("0.10"), path("0.2")];
        paths.sort();
        paths.reverse();
        assert_eq!(paths, vec![path("0.10"), path("0.9"), path("0.2")]);
    }

    #[test]
    fn opposite_corner_of_rectangle_ring() {
        assert_eq!(opposite_corner_of(&path("0.0"), 4), Some(path("0.2")));
        assert_eq!(opposite_corner_of(&path("0.1"), 4), Some(path("0.3")));
        assert_eq!(opposite_corner_of(&path("0.2"), 4), Some(path("0.0")));
        assert_eq!(opposite_corner_of(&path("0.3"), 4), Some(path("0.1")));
    }

    #[test]
    fn opposite_corner_rejects_degenerate_rings() {
        assert_eq!(opposite_corner_of(&path("0.0"), 3), None);
        assert_eq!(opposite_corner_of(&path("0.0"), 0), None);
        assert_eq!(opposite_corner_of(&path("0.5"), 4), None);
        assert_eq!(opposite_corner_of(&CoordPath::default(), 4), None);
    }

    #[test]
    fn serde_uses_dotted_string() {
        let json = serde_json::to_value(path("0.3")).unwrap();
        assert_eq!(json, serde_json::json!("0.3"));
        let back: CoordPath = serde_json::from_value(json).unwrap();
        assert_eq!(back, path("0.3"));
    }

    #[test]
    fn with_last_index_and_child() {
        let p = path("2.1");
        assert_eq!(p.with_last_index(7), path("2.7"));
        assert_eq!(p.child(4), path("2.1.4"));
    }
}
