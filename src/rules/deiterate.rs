//! Deiteration.
//!
//! Deiteration removes copies of a subgraph or atom when an identical
//! occurrence already exists elsewhere. The legality condition implemented
//! here is the simplified one: a copy may be removed when an equal
//! occurrence sits at a different top-level slot of the sheet; the full
//! enclosing-context condition of the textbook rule is deliberately not
//! enforced (see DESIGN.md).

use crate::graph::Graph;
use crate::path::Path;
use crate::rules::{resolve, RuleError};

impl Graph {
    /// Every path to a removable copy: an occurrence of some direct child
    /// of the root found under a different top-level slot than that child.
    ///
    /// Occurrence search uses the unrestricted matcher, so copies sitting
    /// alone inside a cut are found. Result is sorted and deduplicated.
    pub fn possible_deiterations(&self) -> Vec<Path> {
        let mut sites = Vec::new();
        for i in 0..self.size() {
            if let Some(child) = self.child(i) {
                for path in self.occurrences(child) {
                    if path.first() != Some(i) {
                        sites.push(path);
                    }
                }
            }
        }
        sites.sort();
        sites.dedup();
        sites
    }

    /// Deiterates the content addressed by `path`, returning a new graph.
    /// The input is left untouched.
    ///
    /// A licensing occurrence — a direct child of the root equal to the
    /// addressed content, at a different top-level slot — must exist. Every
    /// occurrence of the content outside the licensing slot is then erased,
    /// in descending path order so earlier erasures never shift later
    /// targets.
    ///
    /// # Errors
    /// [`RuleError::InvalidPath`] for an empty or unresolvable path;
    /// [`RuleError::PreconditionViolated`] when no licensing occurrence
    /// exists.
    pub fn deiterate(&self, path: &Path) -> Result<Graph, RuleError> {
        let target = resolve(self, path.as_slice())?.to_owned();
        let slot = match path.first() {
            Some(slot) => slot,
            None => return Err(RuleError::InvalidPath),
        };
        let licensor = (0..self.size())
            .filter(|&j| j != slot)
            .find(|&j| self.child(j) == Some(target.as_ref()));
        let licensor = match licensor {
            Some(j) => j,
            None => return Err(RuleError::PreconditionViolated),
        };

        let mut matches: Vec<Path> = self
            .occurrences(target.as_ref())
            .into_iter()
            .filter(|p| p.first() != Some(licensor))
            .collect();
        matches.sort();

        let mut graph = self.clone();
        for site in matches.iter().rev() {
            graph.erase_at(site.as_slice())?;
        }
        graph.canonicalize();
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Graph {
        Graph::parse(text).unwrap()
    }

    #[test]
    fn test_nested_copy_reported() {
        // Scenario D: the A inside the cut duplicates the top-level A.
        let g = parse("(A, [A])");
        assert_eq!(g.possible_deiterations(), vec![Path::from(vec![0, 0])]);
    }

    #[test]
    fn test_nested_copy_removed() {
        // Scenario D, applier half.
        let g = parse("(A, [A])");
        let deiterated = g.deiterate(&Path::from(vec![0, 0])).unwrap();
        assert_eq!(deiterated, parse("(A, [])"));
        assert_eq!(g, parse("(A, [A])"));
    }

    #[test]
    fn test_duplicate_top_level_atoms() {
        let g = parse("(A, A)");
        let sites = g.possible_deiterations();
        assert_eq!(sites, vec![Path::from(vec![0]), Path::from(vec![1])]);
        let deiterated = g.deiterate(&Path::from(vec![1])).unwrap();
        assert_eq!(deiterated, parse("(A)"));
    }

    #[test]
    fn test_duplicate_cuts() {
        let g = parse("([A], [A])");
        let sites = g.possible_deiterations();
        assert_eq!(sites, vec![Path::from(vec![0]), Path::from(vec![1])]);
        assert_eq!(
            g.deiterate(&Path::from(vec![1])).unwrap(),
            parse("([A])")
        );
    }

    #[test]
    fn test_all_duplicate_copies_removed() {
        // Two nested copies of the top-level A disappear in one application.
        let g = parse("(A, [A], [B, A])");
        let sites = g.possible_deiterations();
        assert!(sites.contains(&Path::from(vec![0, 0])));
        let deiterated = g.deiterate(&Path::from(vec![0, 0])).unwrap();
        assert_eq!(deiterated, parse("(A, [], [B])"));
    }

    #[test]
    fn test_deiterate_never_increases_size() {
        for text in ["(A, [A])", "(A, A)", "([A], [A])", "(A, [A], [B, A])"] {
            let g = parse(text);
            for site in g.possible_deiterations() {
                let deiterated = g.deiterate(&site).unwrap();
                assert!(deiterated.size() <= g.size(), "grew at {} in {}", site, text);
            }
        }
    }

    #[test]
    fn test_unrelated_atoms_survive() {
        let g = parse("(A, [A, B])");
        // Canonical: ([A, B], A); the copy of A sits at 0.0.
        let deiterated = g.deiterate(&Path::from(vec![0, 0])).unwrap();
        assert_eq!(deiterated, parse("(A, [B])"));
        assert!(deiterated.contains_atom("B"));
    }

    #[test]
    fn test_no_licensing_occurrence() {
        let g = parse("(A, [B])");
        // B has no copy at another top-level slot.
        assert_eq!(
            g.deiterate(&Path::from(vec![0, 0])),
            Err(RuleError::PreconditionViolated)
        );
        // Neither does the lone top-level A.
        assert_eq!(
            g.deiterate(&Path::from(vec![1])),
            Err(RuleError::PreconditionViolated)
        );
    }

    #[test]
    fn test_deiterate_invalid_path() {
        let g = parse("(A, [A])");
        assert_eq!(g.deiterate(&Path::new()), Err(RuleError::InvalidPath));
        assert_eq!(
            g.deiterate(&Path::from(vec![9])),
            Err(RuleError::InvalidPath)
        );
    }
}
