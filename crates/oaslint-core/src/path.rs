//! # Node Paths — Document Addresses as Diagnostic Identity
//!
//! Defines [`NodePath`], the ordered key sequence addressing one node in a
//! document tree. Paths are constructed from the same keys used to traverse
//! the document and appear verbatim in diagnostics; consumers assert on them
//! exactly.
//!
//! ## Invariant
//!
//! Segments are never sorted, deduplicated, or normalized. A status-code key
//! like `"400"` is a literal string segment, not a number; a path-template
//! key like `"/api/Paths"` is one segment even though it contains slashes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An ordered sequence of keys from the document root to one node.
///
/// `Display` joins segments with `.`, matching the dotted form consumers
/// use when asserting on diagnostic locations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodePath(Vec<String>);

impl NodePath {
    /// The empty path, addressing the document root.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Build a path from an ordered sequence of segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Append a segment in place.
    pub fn push(&mut self, segment: impl Into<String>) {
        self.0.push(segment.into());
    }

    /// Return a new path with one additional trailing segment.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    /// Access the segments in order.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the root path.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl From<Vec<String>> for NodePath {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl<S: Into<String>> FromIterator<S> for NodePath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_segments(iter)
    }
}
