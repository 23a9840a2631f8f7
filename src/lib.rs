//! Alphagraph: Peirce alpha existential graphs with a structural proof calculus.
//!
//! This crate implements the alpha fragment of Peirce's existential graphs —
//! a diagrammatic system for propositional logic — as a recursive value
//! tree, providing:
//! - A parser and serializer for the bracket notation: the sheet of
//!   assertion in round brackets, cuts in square brackets, items
//!   comma-separated.
//! - A canonicalizer giving every graph a deterministic normal form, so
//!   structural equality is plain textual equality of serialized forms.
//! - Path-addressed navigation: containment queries and enumeration of
//!   every path leading to a matching atom or cut.
//! - The transformation rules of the calculus — double cut
//!   insertion/removal, erasure, and deiteration — each as a pair of
//!   candidate-path enumerator and path-addressed applier returning a new
//!   graph.
//! - Structural fingerprints and a replayable proof-step trace.
//!
//! All operations are pure functions over immutable value trees: appliers
//! work on an independent copy and never mutate the graph the caller holds.
//!
//! # Mathematical Foundations
//!
//! A cut negates its contents, and nesting depth parity determines the
//! polarity of a context: the sheet is positive, each cut flips it. Rule
//! legality depends on that parity, on sibling cardinality, and on the
//! multiplicity of matching subtrees elsewhere in the graph.
//!
//! # References
//!
//! - Peirce, "Collected Papers", vol. 4 (1933) – the alpha system and its rules
//! - Roberts, "The Existential Graphs of Charles S. Peirce" (1973)
//! - Shin, "The Iconic Logic of Peirce's Graphs" (2002)
//! - Dau, "Mathematical Logic with Diagrams" (2008)
//!
//! # Example
//!
//! ```
//! use alphagraph::prelude::*;
//!
//! let g = Graph::parse("([[A]])").unwrap();
//! let sites = g.possible_double_cuts();
//! let reduced = g.double_cut(&sites[0]).unwrap();
//! assert_eq!(reduced, Graph::parse("(A)").unwrap());
//! ```

pub mod fingerprint;
pub mod graph;
pub mod navigate;
pub mod path;
pub mod rules;
pub mod scanner;
pub mod trace;

pub use fingerprint::Fingerprint;
pub use graph::{Child, ChildRef, Graph, ParseError};
pub use path::Path;
pub use rules::RuleError;
pub use trace::{ProofStep, ProofTrace, Rule, TraceError};

/// Prelude for convenient usage.
pub mod prelude {
    pub use crate::fingerprint::Fingerprint;
    pub use crate::graph::{Child, ChildRef, Graph, ParseError};
    pub use crate::path::Path;
    pub use crate::rules::RuleError;
    pub use crate::trace::{ProofStep, ProofTrace, Rule, TraceError};
}
