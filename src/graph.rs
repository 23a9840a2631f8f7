//! Core data structure for Peirce alpha existential graphs.
//!
//! An existential graph is a recursive tree: atoms (propositional symbols)
//! and cuts (negating enclosures) nested inside the sheet of assertion. The
//! serialized form writes the sheet with round brackets and every cut with
//! square brackets, items comma-separated.
//!
//! # Citations
//! - Peirce, "Collected Papers", vol. 4, §4.372–4.417 (1933) – the alpha system
//! - Roberts, "The Existential Graphs of Charles S. Peirce" (1973)
//! - Shin, "The Iconic Logic of Peirce's Graphs" (2002) – cuts and polarity

use crate::scanner;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Error type for parsing the bracket notation.
///
/// Parsing failures reject the whole input; no partial tree is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input does not begin and end with the matching delimiter pair
    /// (`()` for the sheet, `[]` for a cut).
    MismatchedDelimiters,
    /// Square brackets are unbalanced somewhere in the input.
    UnbalancedBrackets,
    /// An empty item appeared between separators, e.g. `(A, , B)`.
    EmptyItem,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MismatchedDelimiters => write!(f, "mismatched outer delimiters"),
            ParseError::UnbalancedBrackets => write!(f, "unbalanced square brackets"),
            ParseError::EmptyItem => write!(f, "empty item between separators"),
        }
    }
}

impl std::error::Error for ParseError {}

/// A borrowed view of one child of a graph node: either a nested cut or an
/// atom. Children are indexed subgraphs first, then atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildRef<'a> {
    /// A nested cut.
    Cut(&'a Graph),
    /// A propositional symbol at this level.
    Atom(&'a str),
}

impl<'a> ChildRef<'a> {
    /// Detaches the child into an owned value.
    pub fn to_owned(self) -> Child {
        match self {
            ChildRef::Cut(g) => Child::Cut(g.clone()),
            ChildRef::Atom(a) => Child::Atom(a.to_string()),
        }
    }
}

/// An owned child of a graph node. Owned counterpart of [`ChildRef`], used
/// where a match target must outlive the graph it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Child {
    /// A nested cut.
    Cut(Graph),
    /// A propositional symbol.
    Atom(String),
}

impl Child {
    /// Borrows the child as a [`ChildRef`].
    #[inline]
    pub fn as_ref(&self) -> ChildRef<'_> {
        match self {
            Child::Cut(g) => ChildRef::Cut(g),
            Child::Atom(a) => ChildRef::Atom(a),
        }
    }
}

/// A Peirce alpha existential graph.
///
/// The root is the sheet of assertion (positive context); every nested cut
/// inverts the polarity of its contents. Atoms and subgraphs are ordered, and
/// after canonicalization the order is deterministic, so two graphs are
/// structurally equal iff their serialized forms are identical.
///
/// # Invariant
/// - Every graph handed out by a public operation is canonical: atoms sorted
///   lexicographically, subgraphs canonicalized and sorted by serialized
///   form, bottom-up.
/// - Only the root has `is_sheet() == true`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    /// True only for the outermost graph, rendered with round brackets.
    pub(crate) is_sheet: bool,
    /// Propositional symbols directly at this level.
    pub(crate) atoms: Vec<String>,
    /// Nested cuts directly at this level.
    pub(crate) subgraphs: Vec<Graph>,
}

impl Graph {
    /// Creates an empty sheet of assertion, `()`.
    #[inline]
    pub fn empty_sheet() -> Self {
        Self {
            is_sheet: true,
            atoms: Vec::new(),
            subgraphs: Vec::new(),
        }
    }

    /// Parses the serialized bracket notation into a canonical graph.
    ///
    /// The outermost delimiters must be `(` and `)`; nested cuts always use
    /// `[` and `]`. Atoms are whitespace-trimmed tokens not starting with
    /// `[`; there is no escaping mechanism. The result is canonicalized
    /// before being returned.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut graph = Self::parse_node(scanner::strip(text), true)?;
        graph.canonicalize();
        Ok(graph)
    }

    fn parse_node(text: &str, is_sheet: bool) -> Result<Self, ParseError> {
        let bytes = text.as_bytes();
        let (open, close) = if is_sheet { (b'(', b')') } else { (b'[', b']') };
        if bytes.len() < 2 || bytes[0] != open || bytes[bytes.len() - 1] != close {
            return Err(ParseError::MismatchedDelimiters);
        }
        let interior = &text[1..text.len() - 1];
        if !scanner::balanced(interior) {
            return Err(ParseError::UnbalancedBrackets);
        }

        let mut graph = Graph {
            is_sheet,
            atoms: Vec::new(),
            subgraphs: Vec::new(),
        };
        if scanner::strip(interior).is_empty() {
            return Ok(graph);
        }
        for item in scanner::split_level(interior, ',') {
            if item.is_empty() {
                return Err(ParseError::EmptyItem);
            }
            if item.starts_with('[') {
                graph.subgraphs.push(Self::parse_node(item, false)?);
            } else {
                graph.atoms.push(item.to_string());
            }
        }
        Ok(graph)
    }

    /// Serializes the graph: subgraphs first (recursively), then atoms,
    /// comma-joined, wrapped in `()` for the sheet and `[]` for a cut.
    ///
    /// Round-trip law: `parse(repr(g)) == g` for any canonical `g`.
    pub fn repr(&self) -> String {
        let (open, close) = if self.is_sheet { ('(', ')') } else { ('[', ']') };
        let mut parts: Vec<String> = self.subgraphs.iter().map(Graph::repr).collect();
        parts.extend(self.atoms.iter().cloned());
        format!("{}{}{}", open, parts.join(", "), close)
    }

    /// Rewrites the graph into its canonical normal form.
    ///
    /// Atoms are sorted lexicographically; subgraphs are canonicalized
    /// recursively and then sorted by their serialized form. Bottom-up order
    /// matters: children must be canonical before they are compared as
    /// siblings. Idempotent.
    pub fn canonicalize(&mut self) {
        self.atoms.sort();
        for subgraph in &mut self.subgraphs {
            subgraph.canonicalize();
        }
        self.subgraphs.sort_by_cached_key(Graph::repr);
    }

    /// Returns the number of atoms directly at this level.
    #[inline]
    pub fn num_atoms(&self) -> usize {
        self.atoms.len()
    }

    /// Returns the number of cuts directly at this level.
    #[inline]
    pub fn num_subgraphs(&self) -> usize {
        self.subgraphs.len()
    }

    /// Returns the number of children at this level. The empty cut `[]`
    /// (logical falsity) has size 0.
    #[inline]
    pub fn size(&self) -> usize {
        self.num_atoms() + self.num_subgraphs()
    }

    /// Returns true iff this node is the sheet of assertion.
    #[inline]
    pub fn is_sheet(&self) -> bool {
        self.is_sheet
    }

    /// Atoms directly at this level, in canonical order.
    #[inline]
    pub fn atoms(&self) -> &[String] {
        &self.atoms
    }

    /// Cuts directly at this level, in canonical order.
    #[inline]
    pub fn subgraphs(&self) -> &[Graph] {
        &self.subgraphs
    }

    /// Returns the child at `index`, subgraphs first, then atoms.
    pub fn child(&self, index: usize) -> Option<ChildRef<'_>> {
        if index < self.subgraphs.len() {
            Some(ChildRef::Cut(&self.subgraphs[index]))
        } else {
            self.atoms
                .get(index - self.subgraphs.len())
                .map(|atom| ChildRef::Atom(atom.as_str()))
        }
    }
}

/// Structural equality: serialized forms compared character for character.
/// Under the canonical-form invariant this is exactly canonical equality.
impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.repr() == other.repr()
    }
}

impl Eq for Graph {}

impl PartialOrd for Graph {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Graph {
    fn cmp(&self, other: &Self) -> Ordering {
        self.repr().cmp(&other.repr())
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.repr())
    }
}

impl FromStr for Graph {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Graph::parse(s)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::empty_sheet()
    }
}
