//! Structural fingerprints for graphs.
//!
//! A fingerprint is the SHA-256 of the canonical serialization, with domain
//! separation and length prefixing so the same bytes never collide across
//! uses. Structurally equal graphs fingerprint identically; the trace module
//! uses this to validate pre/post states during replay.
//!
//! # Citations
//! - SHA-256: NIST FIPS 180-4 (2015)
//! - Domain separation & length prefixing: Bernstein et al., "How to hash
//!   into elliptic curves" (2009)

use crate::graph::Graph;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// A 256-bit structural fingerprint.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(pub [u8; 32]);

impl Fingerprint {
    /// Creates a fingerprint from a raw byte array.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw byte array.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Computes SHA-256 of `data` under a domain tag.
    ///
    /// Layout: `b"AEG:" || domain || b":v1" || len_le64(data) || data`.
    pub fn hash_with_domain(domain: &[u8], data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(b"AEG:");
        hasher.update(domain);
        hasher.update(b":v1");
        hasher.update((data.len() as u64).to_le_bytes());
        hasher.update(data);
        Self(hasher.finalize().into())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fingerprint({:02x}{:02x}{:02x}{:02x}…)",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

impl Graph {
    /// Returns the structural fingerprint of this graph.
    ///
    /// Hashes the canonical serialization, so equal graphs hash equal
    /// regardless of the order they were written in.
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::hash_with_domain(b"graph", self.repr().as_bytes())
    }
}
