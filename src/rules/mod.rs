//! The alpha inference rules: double cut, erasure, deiteration.
//!
//! Each rule comes as a pair: an enumerator listing every path where the
//! rule legally applies, and an applier that takes one such path and returns
//! a new graph. Appliers work on an independent copy, so the input graph is
//! never mutated, and they validate the path and the rule's structural
//! precondition before touching anything.
//!
//! # Citations
//! - Peirce, "Collected Papers", vol. 4, §4.505 (1933) – rules of transformation
//! - Roberts, "The Existential Graphs of Charles S. Peirce", ch. 3 (1973)
//! - Dau, "Mathematical Logic with Diagrams" (2008) – formal erasure/deiteration

pub mod deiterate;
pub mod double_cut;
pub mod erase;

use crate::graph::{ChildRef, Graph};
use std::fmt;

/// Error type for rule application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleError {
    /// The path is empty, indexes out of range, or descends through an atom.
    InvalidPath,
    /// The addressed node does not satisfy the rule's structural
    /// precondition (e.g. double cut on a node that is not `[[...]]`).
    PreconditionViolated,
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleError::InvalidPath => write!(f, "path is empty or out of range"),
            RuleError::PreconditionViolated => {
                write!(f, "rule precondition does not hold at the addressed node")
            }
        }
    }
}

impl std::error::Error for RuleError {}

/// Descends `path[..len-1]` through subgraph indices and returns the node
/// holding the terminal index, together with that index.
///
/// The terminal index is validated against the parent's child count;
/// intermediate indices must address subgraphs, never atoms.
pub(crate) fn locate_parent<'a>(
    graph: &'a mut Graph,
    path: &[usize],
) -> Result<(&'a mut Graph, usize), RuleError> {
    match path {
        [] => Err(RuleError::InvalidPath),
        [last] => {
            if *last < graph.size() {
                Ok((graph, *last))
            } else {
                Err(RuleError::InvalidPath)
            }
        }
        [first, rest @ ..] => {
            if *first >= graph.num_subgraphs() {
                return Err(RuleError::InvalidPath);
            }
            locate_parent(&mut graph.subgraphs[*first], rest)
        }
    }
}

/// Resolves the child addressed by `path` without mutating anything.
pub(crate) fn resolve<'a>(graph: &'a Graph, path: &[usize]) -> Result<ChildRef<'a>, RuleError> {
    match path {
        [] => Err(RuleError::InvalidPath),
        [last] => graph.child(*last).ok_or(RuleError::InvalidPath),
        [first, rest @ ..] => {
            if *first >= graph.num_subgraphs() {
                return Err(RuleError::InvalidPath);
            }
            resolve(&graph.subgraphs[*first], rest)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        let g = Graph::parse("(A, [B, [C]])").unwrap();
        // Canonical: ([[C], B], A)
        assert_eq!(resolve(&g, &[1]), Ok(ChildRef::Atom("A")));
        assert_eq!(resolve(&g, &[0, 1]), Ok(ChildRef::Atom("B")));
        assert!(matches!(resolve(&g, &[0, 0]), Ok(ChildRef::Cut(_))));
        assert_eq!(resolve(&g, &[]), Err(RuleError::InvalidPath));
        assert_eq!(resolve(&g, &[5]), Err(RuleError::InvalidPath));
        // Descending through an atom is invalid.
        assert_eq!(resolve(&g, &[1, 0]), Err(RuleError::InvalidPath));
    }

    #[test]
    fn test_locate_parent_validates_terminal_index() {
        let mut g = Graph::parse("(A, [B])").unwrap();
        assert!(locate_parent(&mut g, &[1]).is_ok());
        assert_eq!(
            locate_parent(&mut g, &[2]).unwrap_err(),
            RuleError::InvalidPath
        );
        assert_eq!(
            locate_parent(&mut g, &[0, 7]).unwrap_err(),
            RuleError::InvalidPath
        );
    }
}
