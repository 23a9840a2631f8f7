//! Paths addressing nodes inside a graph.
//!
//! A path is a sequence of child indices consumed one element per level of
//! descent. At each node, subgraphs come first (`0..num_subgraphs`), followed
//! by atoms (`num_subgraphs..size`). The empty path addresses the node the
//! traversal starts from and is never a valid rule target.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A sequence of child indices locating a node relative to some ancestor.
///
/// Ordering is lexicographic on the index sequence (derived from the inner
/// `Vec`), which the rule appliers rely on when erasing several sites in one
/// pass: visiting sites in descending order means an earlier removal can
/// never shift the index of a later target.
#[repr(transparent)]
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<usize>);

impl Path {
    /// Creates an empty path.
    #[inline]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns the underlying index sequence.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Returns the number of descent steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true iff the path has no steps.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the first index, i.e. the top-level child slot the path
    /// descends through.
    #[inline]
    pub fn first(&self) -> Option<usize> {
        self.0.first().copied()
    }

    /// Prepends an index, used when lifting paths found in a subgraph up to
    /// its parent.
    #[inline]
    pub fn prepend(&mut self, index: usize) {
        self.0.insert(0, index);
    }

    /// Iterates over the indices in descent order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.0.iter()
    }
}

impl From<Vec<usize>> for Path {
    #[inline]
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl From<&[usize]> for Path {
    #[inline]
    fn from(indices: &[usize]) -> Self {
        Self(indices.to_vec())
    }
}

impl FromIterator<usize> for Path {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Path {
    /// Dot-joined indices, e.g. `0.2.1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for index in &self.0 {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{}", index)?;
            first = false;
        }
        Ok(())
    }
}
