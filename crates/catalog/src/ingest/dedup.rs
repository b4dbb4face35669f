//! Exact-duplicate detection.
//!
//! Signatures are tracked **per architecture**: identical `(mnemonic, syntax, hex_opcode)`
//! triples in two different architectures are both kept.

use std::collections::{HashMap, HashSet};

use crate::isa::{Instruction, Signature};

/// Running signature sets keyed by architecture.
#[derive(Debug, Default)]
pub struct Deduplicator {
    seen: HashMap<String, HashSet<Signature>>,
}

impl Deduplicator {
    /// Creates an empty deduplicator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the instruction's signature and returns `true` if it was not seen before in
    /// its architecture.
    pub fn admit(&mut self, instruction: &Instruction) -> bool {
        self.seen
            .entry(instruction.architecture.clone())
            .or_default()
            .insert(instruction.signature())
    }

    /// Returns `true` if the signature is already recorded for `architecture`.
    pub fn contains(&self, architecture: &str, signature: &Signature) -> bool {
        self.seen
            .get(architecture)
            .is_some_and(|set| set.contains(signature))
    }

    /// Number of distinct signatures recorded for `architecture`.
    pub fn len(&self, architecture: &str) -> usize {
        self.seen.get(architecture).map_or(0, HashSet::len)
    }
}
