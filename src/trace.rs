//! Proof step history and replay.
//!
//! A trace records the sequence of rule applications performed on a graph,
//! with pre/post fingerprints per step, so any intermediate version can be
//! recovered and validated by replaying from the initial graph. Traces
//! round-trip through CBOR for storage.
//!
//! This is bookkeeping, not proof search: the trace replays exactly the
//! steps it was given.

use crate::fingerprint::Fingerprint;
use crate::graph::{Graph, ParseError};
use crate::path::Path;
use crate::rules::RuleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The inference rule applied in a proof step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    /// Double cut removal.
    DoubleCut,
    /// Erasure of one child from a positive context.
    Erasure,
    /// Deiteration of duplicated content.
    Deiteration,
}

impl Rule {
    /// Applies this rule to `graph` at `path`.
    pub fn apply(&self, graph: &Graph, path: &Path) -> Result<Graph, RuleError> {
        match self {
            Rule::DoubleCut => graph.double_cut(path),
            Rule::Erasure => graph.erase(path),
            Rule::Deiteration => graph.deiterate(path),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::DoubleCut => write!(f, "double-cut"),
            Rule::Erasure => write!(f, "erasure"),
            Rule::Deiteration => write!(f, "deiteration"),
        }
    }
}

/// One recorded rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    rule: Rule,
    path: Path,
    pre: Fingerprint,
    post: Fingerprint,
    /// 1-based position in the trace.
    version: u64,
}

impl ProofStep {
    /// Returns the applied rule.
    #[inline]
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Returns the path the rule was applied at.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fingerprint of the graph before this step.
    #[inline]
    pub fn pre_fingerprint(&self) -> Fingerprint {
        self.pre
    }

    /// Fingerprint of the graph after this step.
    #[inline]
    pub fn post_fingerprint(&self) -> Fingerprint {
        self.post
    }

    /// Returns the 1-based step version.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }
}

/// Error type for trace recording, replay, and storage.
#[derive(Debug)]
pub enum TraceError {
    /// Requested version exceeds the number of recorded steps.
    VersionOutOfRange,
    /// A replayed graph did not match the recorded fingerprint.
    FingerprintMismatch {
        /// Version of the offending step.
        version: u64,
    },
    /// A recorded step no longer applies.
    Rule(RuleError),
    /// The stored initial graph failed to parse.
    Parse(ParseError),
    /// CBOR encoding or decoding failed.
    Storage(String),
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceError::VersionOutOfRange => write!(f, "version out of range"),
            TraceError::FingerprintMismatch { version } => {
                write!(f, "fingerprint mismatch at step {}", version)
            }
            TraceError::Rule(err) => write!(f, "rule replay failed: {}", err),
            TraceError::Parse(err) => write!(f, "stored graph invalid: {}", err),
            TraceError::Storage(msg) => write!(f, "trace storage error: {}", msg),
        }
    }
}

impl std::error::Error for TraceError {}

impl From<RuleError> for TraceError {
    fn from(err: RuleError) -> Self {
        TraceError::Rule(err)
    }
}

impl From<ParseError> for TraceError {
    fn from(err: ParseError) -> Self {
        TraceError::Parse(err)
    }
}

/// A linear history of rule applications starting from an initial graph.
///
/// The current graph is not stored; it is recovered by replay, which
/// revalidates every step's fingerprints along the way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofTrace {
    initial: Graph,
    steps: Vec<ProofStep>,
}

impl ProofTrace {
    /// Creates a trace starting from `initial` (version 0).
    pub fn new(initial: Graph) -> Self {
        Self {
            initial,
            steps: Vec::new(),
        }
    }

    /// Returns the initial graph.
    #[inline]
    pub fn initial(&self) -> &Graph {
        &self.initial
    }

    /// Returns the recorded steps in application order.
    #[inline]
    pub fn steps(&self) -> &[ProofStep] {
        &self.steps
    }

    /// Returns the number of recorded steps.
    #[inline]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Applies `rule` at `path` to the current graph, records the step, and
    /// returns the new graph.
    pub fn apply(&mut self, rule: Rule, path: Path) -> Result<Graph, TraceError> {
        let current = self.current_graph()?;
        let pre = current.fingerprint();
        let next = rule.apply(&current, &path)?;
        let post = next.fingerprint();
        self.steps.push(ProofStep {
            rule,
            path,
            pre,
            post,
            version: self.steps.len() as u64 + 1,
        });
        Ok(next)
    }

    /// Returns the graph after all recorded steps.
    pub fn current_graph(&self) -> Result<Graph, TraceError> {
        self.replay_to(self.steps.len())
    }

    /// Replays the first `version` steps from the initial graph, validating
    /// each step's pre and post fingerprints.
    pub fn replay_to(&self, version: usize) -> Result<Graph, TraceError> {
        if version > self.steps.len() {
            return Err(TraceError::VersionOutOfRange);
        }
        let mut graph = self.initial.clone();
        for step in &self.steps[..version] {
            if graph.fingerprint() != step.pre {
                return Err(TraceError::FingerprintMismatch {
                    version: step.version,
                });
            }
            graph = step.rule.apply(&graph, &step.path)?;
            if graph.fingerprint() != step.post {
                return Err(TraceError::FingerprintMismatch {
                    version: step.version,
                });
            }
        }
        Ok(graph)
    }

    /// Encodes the trace as CBOR.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TraceError> {
        serde_cbor::to_vec(self).map_err(|e| TraceError::Storage(e.to_string()))
    }

    /// Decodes a trace from CBOR and validates it by a full replay.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TraceError> {
        let trace: ProofTrace =
            serde_cbor::from_slice(bytes).map_err(|e| TraceError::Storage(e.to_string()))?;
        trace.current_graph()?;
        Ok(trace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Graph {
        Graph::parse(text).unwrap()
    }

    #[test]
    fn test_apply_and_replay() {
        let mut trace = ProofTrace::new(parse("(A, [A], [[B]])"));
        // Canonical: ([A], [[B]], A). Remove the double cut first.
        let after_dc = trace.apply(Rule::DoubleCut, Path::from(vec![1])).unwrap();
        assert_eq!(after_dc, parse("(A, B, [A])"));
        // Canonical: ([A], A, B); the copy of A sits at 0.0.
        let after_deit = trace
            .apply(Rule::Deiteration, Path::from(vec![0, 0]))
            .unwrap();
        assert_eq!(after_deit, parse("(A, B, [])"));
        let after_erase = trace.apply(Rule::Erasure, Path::from(vec![2])).unwrap();
        assert_eq!(after_erase, parse("(A, [])"));

        assert_eq!(trace.step_count(), 3);
        assert_eq!(trace.replay_to(0).unwrap(), parse("(A, [A], [[B]])"));
        assert_eq!(trace.replay_to(1).unwrap(), after_dc);
        assert_eq!(trace.current_graph().unwrap(), after_erase);
    }

    #[test]
    fn test_replay_version_out_of_range() {
        let trace = ProofTrace::new(parse("(A)"));
        assert!(matches!(
            trace.replay_to(1),
            Err(TraceError::VersionOutOfRange)
        ));
    }

    #[test]
    fn test_failed_application_records_nothing() {
        let mut trace = ProofTrace::new(parse("(A)"));
        assert!(matches!(
            trace.apply(Rule::DoubleCut, Path::from(vec![0])),
            Err(TraceError::Rule(RuleError::PreconditionViolated))
        ));
        assert_eq!(trace.step_count(), 0);
    }

    #[test]
    fn test_cbor_round_trip() {
        let mut trace = ProofTrace::new(parse("(A, A)"));
        trace.apply(Rule::Erasure, Path::from(vec![1])).unwrap();
        let bytes = trace.to_bytes().unwrap();
        let decoded = ProofTrace::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, trace);
        assert_eq!(decoded.current_graph().unwrap(), parse("(A)"));
    }

    #[test]
    fn test_tampered_trace_detected() {
        let mut trace = ProofTrace::new(parse("(A, A)"));
        trace.apply(Rule::Erasure, Path::from(vec![1])).unwrap();
        // Swap in a different initial graph; the recorded pre fingerprint of
        // step 1 no longer matches.
        let tampered = ProofTrace {
            initial: parse("(A, B)"),
            steps: trace.steps.clone(),
        };
        assert!(matches!(
            tampered.current_graph(),
            Err(TraceError::FingerprintMismatch { version: 1 })
        ));
    }
}
