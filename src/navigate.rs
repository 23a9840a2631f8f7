//! Containment queries and path enumeration.
//!
//! These queries walk the canonical tree and report where a given atom or
//! cut occurs, as paths of child indices. They never mutate the graph; the
//! rule enumerators and appliers are built on top of them.

use crate::graph::{ChildRef, Graph};
use crate::path::Path;

impl Graph {
    /// Returns true iff `atom` occurs at this level or anywhere below.
    pub fn contains_atom(&self, atom: &str) -> bool {
        self.atoms.iter().any(|a| a == atom)
            || self.subgraphs.iter().any(|sg| sg.contains_atom(atom))
    }

    /// Returns true iff a cut structurally equal to `other` occurs at this
    /// level or anywhere below.
    pub fn contains_cut(&self, other: &Graph) -> bool {
        self.subgraphs
            .iter()
            .any(|sg| sg == other || sg.contains_cut(other))
    }

    /// Returns true iff the given child occurs anywhere in the graph.
    pub fn contains(&self, item: ChildRef<'_>) -> bool {
        match item {
            ChildRef::Atom(atom) => self.contains_atom(atom),
            ChildRef::Cut(cut) => self.contains_cut(cut),
        }
    }

    /// Every path from this node to a child atom equal to `atom`.
    ///
    /// A match inside a node of size 1 is excluded: a lone atom has no
    /// sibling context and is never a valid match target against itself. The
    /// exclusion applies per candidate node, not globally.
    pub fn paths_to_atom(&self, atom: &str) -> Vec<Path> {
        let mut paths = Vec::new();
        let num_subgraphs = self.num_subgraphs();
        if self.size() > 1 {
            for (i, a) in self.atoms.iter().enumerate() {
                if a == atom {
                    paths.push(Path::from(vec![num_subgraphs + i]));
                }
            }
        }
        for (i, subgraph) in self.subgraphs.iter().enumerate() {
            if subgraph.contains_atom(atom) {
                for mut path in subgraph.paths_to_atom(atom) {
                    path.prepend(i);
                    paths.push(path);
                }
            }
        }
        paths
    }

    /// Every path from this node to a subgraph structurally equal to
    /// `other`, under the same size-1 exclusion as [`Graph::paths_to_atom`].
    ///
    /// A matching subgraph is terminal: the search does not descend into it,
    /// since a graph cannot contain a copy of itself.
    pub fn paths_to_cut(&self, other: &Graph) -> Vec<Path> {
        let mut paths = Vec::new();
        for (i, subgraph) in self.subgraphs.iter().enumerate() {
            if subgraph == other && self.size() > 1 {
                paths.push(Path::from(vec![i]));
            } else {
                for mut path in subgraph.paths_to_cut(other) {
                    path.prepend(i);
                    paths.push(path);
                }
            }
        }
        paths
    }

    /// Every path to a child equal to `item`, with no size exclusion.
    ///
    /// Deiteration has to find copies that sit alone inside a cut (the `A`
    /// in `(A, [A])`), which the lone-child exclusion of `paths_to_*` would
    /// hide, so it uses this matcher instead.
    pub(crate) fn occurrences(&self, item: ChildRef<'_>) -> Vec<Path> {
        let mut paths = Vec::new();
        let mut prefix = Vec::new();
        self.collect_occurrences(item, &mut prefix, &mut paths);
        paths
    }

    fn collect_occurrences(
        &self,
        item: ChildRef<'_>,
        prefix: &mut Vec<usize>,
        out: &mut Vec<Path>,
    ) {
        match item {
            ChildRef::Atom(atom) => {
                let num_subgraphs = self.num_subgraphs();
                for (i, a) in self.atoms.iter().enumerate() {
                    if a == atom {
                        prefix.push(num_subgraphs + i);
                        out.push(Path::from(prefix.clone()));
                        prefix.pop();
                    }
                }
            }
            ChildRef::Cut(cut) => {
                for (i, subgraph) in self.subgraphs.iter().enumerate() {
                    if subgraph == cut {
                        prefix.push(i);
                        out.push(Path::from(prefix.clone()));
                        prefix.pop();
                    }
                }
            }
        }
        for (i, subgraph) in self.subgraphs.iter().enumerate() {
            prefix.push(i);
            subgraph.collect_occurrences(item, prefix, out);
            prefix.pop();
        }
    }
}
