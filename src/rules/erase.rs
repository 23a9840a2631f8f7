//! Erasure.
//!
//! Erasure removes one item — an atom or a whole cut — from a positively
//! polarized context. Convention chosen here: a child at path length k sits
//! inside k−1 cuts, so odd path lengths are positive contexts. A direct
//! child of the sheet (path length 1) is always erasable; deeper items also
//! need sibling company at their level.

use crate::graph::Graph;
use crate::path::Path;
use crate::rules::{locate_parent, RuleError};

impl Graph {
    /// Every path at which erasure is permitted.
    ///
    /// Length-1 paths are always candidates. A longer path qualifies iff its
    /// length is odd (positive context) and the ambient sibling flag — set
    /// when the parent level holds more than one child — was raised on
    /// entry. `level` seeds that flag for the root call.
    pub fn possible_erasures(&self, level: i32) -> Vec<Path> {
        let mut sites = Vec::new();
        if self.size() > 0 {
            let mut prefix = Vec::new();
            self.collect_erasures(level != 0, &mut prefix, &mut sites);
        }
        sites
    }

    fn collect_erasures(&self, ambient: bool, prefix: &mut Vec<usize>, out: &mut Vec<Path>) {
        if prefix.len() == 1 || (prefix.len() % 2 == 1 && ambient) {
            out.push(Path::from(prefix.clone()));
        }
        let siblings = self.size() > 1;
        let num_subgraphs = self.num_subgraphs();
        for i in 0..self.size() {
            prefix.push(i);
            if i < num_subgraphs {
                self.subgraphs[i].collect_erasures(siblings, prefix, out);
            } else if prefix.len() == 1 || (prefix.len() % 2 == 1 && siblings) {
                out.push(Path::from(prefix.clone()));
            }
            prefix.pop();
        }
    }

    /// Erases exactly the one child addressed by `path`, returning a new
    /// graph. The input is left untouched.
    ///
    /// The terminal index selects a subgraph when below `num_subgraphs` and
    /// an atom otherwise. Shrinking a nested cut can change where it sorts
    /// among its siblings, so the result is re-canonicalized.
    ///
    /// # Errors
    /// [`RuleError::InvalidPath`] for an empty or out-of-range path.
    pub fn erase(&self, path: &Path) -> Result<Graph, RuleError> {
        let mut graph = self.clone();
        graph.erase_at(path.as_slice())?;
        graph.canonicalize();
        Ok(graph)
    }

    /// In-place erase on an already-owned tree. Shared with deiteration,
    /// which chains several erasures before handing the result out.
    pub(crate) fn erase_at(&mut self, path: &[usize]) -> Result<(), RuleError> {
        let (parent, index) = locate_parent(self, path)?;
        let num_subgraphs = parent.num_subgraphs();
        if index < num_subgraphs {
            parent.subgraphs.remove(index);
        } else {
            parent.atoms.remove(index - num_subgraphs);
        }
        Ok(())
    }
}
