//! Double cut removal.
//!
//! Two directly nested cuts with nothing else in the outer one (`[[...]]`)
//! are a double negation and can be removed freely. The enumerator reports
//! the path of the outer cut of every such pair; the applier splices the
//! inner cut's contents up into the outer cut's parent, eliminating both
//! levels.

use crate::graph::Graph;
use crate::path::Path;
use crate::rules::{locate_parent, RuleError};

impl Graph {
    /// Every path addressing the outer cut of a `[[...]]` pair.
    ///
    /// A site is any non-root subgraph holding exactly one subgraph and zero
    /// atoms. The root itself is never a site: the sheet is not a cut.
    pub fn possible_double_cuts(&self) -> Vec<Path> {
        let mut sites = Vec::new();
        let mut prefix = Vec::new();
        self.collect_double_cuts(&mut prefix, &mut sites);
        sites
    }

    fn collect_double_cuts(&self, prefix: &mut Vec<usize>, out: &mut Vec<Path>) {
        for (i, subgraph) in self.subgraphs.iter().enumerate() {
            prefix.push(i);
            if subgraph.num_subgraphs() == 1 && subgraph.num_atoms() == 0 {
                out.push(Path::from(prefix.clone()));
            }
            subgraph.collect_double_cuts(prefix, out);
            prefix.pop();
        }
    }

    /// Removes the double cut whose outer cut is addressed by `path`,
    /// returning a new graph. The input is left untouched.
    ///
    /// The inner cut's subgraphs and atoms are spliced up to replace the
    /// outer cut's position. Exactly one site is consumed per call.
    ///
    /// # Errors
    /// [`RuleError::InvalidPath`] for an empty or out-of-range path;
    /// [`RuleError::PreconditionViolated`] when the addressed node is not a
    /// cut wrapping exactly one inner cut and nothing else.
    pub fn double_cut(&self, path: &Path) -> Result<Graph, RuleError> {
        let mut graph = self.clone();
        let (parent, index) = locate_parent(&mut graph, path.as_slice())?;
        if index >= parent.num_subgraphs() {
            return Err(RuleError::PreconditionViolated);
        }
        let outer = &parent.subgraphs[index];
        if outer.num_subgraphs() != 1 || outer.num_atoms() != 0 {
            return Err(RuleError::PreconditionViolated);
        }
        let mut outer = parent.subgraphs.remove(index);
        if let Some(inner) = outer.subgraphs.pop() {
            parent.subgraphs.extend(inner.subgraphs);
            parent.atoms.extend(inner.atoms);
        }
        // Splicing appends, so sibling order must be re-established.
        graph.canonicalize();
        Ok(graph)
    }
}
