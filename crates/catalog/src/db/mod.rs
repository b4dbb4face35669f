//! Consolidation store.
//!
//! [`Database`] is the authoritative mapping from architecture name to its canonical, authored
//! instruction records. It is produced by the pure transform [`Database::merge`]
//! `(persisted snapshot, new documents) -> new snapshot`; writing it back with
//! [`Database::persist`] is the only side effect.

/// On-disk format and atomic commits.
pub mod store;

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::common::{Error, PersistenceError};
use crate::db::store::StagedWrite;
use crate::ingest::{Candidate, Deduplicator, Provenance, validate};
use crate::isa::{Instruction, Signature};
use crate::stats::BuildStats;

/// Canonical per-architecture instruction store.
///
/// Lists are kept in canonical order (mnemonic, then signature) and contain no two records
/// with the same signature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Database {
    archs: BTreeMap<String, Vec<Instruction>>,
}

/// Survivor per `(architecture, signature)`.
///
/// Among records sharing a signature the least one by [`Instruction`]'s `Ord` survives, so
/// neither provenance nor traversal order affects the outcome.
#[derive(Debug, Default)]
struct Survivors {
    winners: BTreeMap<(String, Signature), Instruction>,
}

impl Survivors {
    /// Offers a record; returns `false` when its signature was already taken.
    fn offer(&mut self, instruction: Instruction) -> bool {
        let key = (instruction.architecture.clone(), instruction.signature());
        match self.winners.entry(key) {
            Entry::Vacant(slot) => {
                let _ = slot.insert(instruction);
                true
            }
            Entry::Occupied(mut slot) => {
                if instruction < *slot.get() {
                    let _ = slot.insert(instruction);
                }
                false
            }
        }
    }

    /// Groups survivors by architecture in canonical order.
    fn into_archs(self) -> BTreeMap<String, Vec<Instruction>> {
        let mut archs: BTreeMap<String, Vec<Instruction>> = BTreeMap::new();
        for ((arch, _), instruction) in self.winners {
            archs.entry(arch).or_default().push(instruction);
        }
        for list in archs.values_mut() {
            list.sort_by(Instruction::canonical_cmp);
        }
        archs
    }
}

impl Database {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs validation and deduplication over `baseline` and `inputs`.
    ///
    /// Both sources weigh the same: when records share a signature, the least record by
    /// full-field order survives. The result therefore depends only on the union of candidates,
    /// never on which run first saw a record or on document order. A signature counts as
    /// `added` when the baseline did not already hold it.
    pub fn merge(baseline: &[Candidate], inputs: &[Candidate]) -> (Self, BuildStats) {
        let mut stats = BuildStats::default();
        let mut stored = Deduplicator::new();
        let mut survivors = Survivors::default();

        for candidate in baseline.iter().chain(inputs) {
            let instruction = match validate(candidate) {
                Ok(instruction) => instruction,
                Err(err) => {
                    tracing::warn!(error = %err, "record rejected");
                    let arch = candidate
                        .record
                        .get("architecture")
                        .and_then(Value::as_str)
                        .map(str::trim)
                        .filter(|a| !a.is_empty());
                    stats.record_rejection(arch, &err);
                    continue;
                }
            };

            if candidate.provenance == Provenance::Store {
                let _ = stored.admit(&instruction);
            }

            let arch = instruction.architecture.clone();
            let mnemonic = instruction.mnemonic.clone();
            if !survivors.offer(instruction) {
                stats.arch_mut(&arch).duplicates += 1;
                tracing::debug!(
                    arch = %arch,
                    mnemonic = %mnemonic,
                    origin = %candidate.origin.display(),
                    "duplicate signature"
                );
            }
        }

        let archs = survivors.into_archs();
        for (arch, list) in &archs {
            for instruction in list {
                let counts = stats.arch_mut(arch);
                counts.accepted += 1;
                if !stored.contains(arch, &instruction.signature()) {
                    counts.added += 1;
                    tracing::info!(arch = %arch, mnemonic = %instruction.mnemonic, "added");
                }
            }
        }

        (Self { archs }, stats)
    }

    /// Loads the persisted store in `dir`.
    ///
    /// # Errors
    ///
    /// See [`store::load_baseline`].
    pub fn load(dir: &Path) -> Result<Self, Error> {
        let baseline = store::load_baseline(dir)?;
        let (db, _) = Self::merge(&baseline.candidates, &[]);
        Ok(db)
    }

    /// Serializes every architecture into its store file bytes, keyed by file name.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Encode`] if any architecture fails to serialize.
    pub fn encode(&self) -> Result<Vec<(PathBuf, Vec<u8>)>, PersistenceError> {
        self.archs
            .iter()
            .map(|(arch, list)| {
                store::encode_architecture(arch, list)
                    .map(|bytes| (PathBuf::from(store::store_file_name(arch)), bytes))
            })
            .collect()
    }

    /// Stages every architecture's store file under `dir` into `batch`.
    ///
    /// # Errors
    ///
    /// Returns a [`PersistenceError`] if encoding or staging fails; nothing becomes visible.
    pub fn stage(&self, dir: &Path, batch: &mut StagedWrite) -> Result<(), PersistenceError> {
        batch.stage(dir, self.encode()?)
    }

    /// Atomically writes every architecture to `dir`.
    ///
    /// # Errors
    ///
    /// Returns a [`PersistenceError`] if encoding or any write fails; the previous store files
    /// stay intact in that case.
    pub fn persist(&self, dir: &Path) -> Result<(), PersistenceError> {
        let mut batch = StagedWrite::new();
        self.stage(dir, &mut batch)?;
        let count = batch.len();
        batch.commit()?;
        tracing::info!(dir = %dir.display(), architectures = count, "store persisted");
        Ok(())
    }

    /// Canonical records of one architecture.
    pub fn get(&self, architecture: &str) -> Option<&[Instruction]> {
        self.archs.get(architecture).map(Vec::as_slice)
    }

    /// Iterates architectures in sorted order.
    pub fn architectures(&self) -> impl Iterator<Item = (&str, &[Instruction])> {
        self.archs
            .iter()
            .map(|(name, list)| (name.as_str(), list.as_slice()))
    }

    /// Number of architectures.
    pub fn len(&self) -> usize {
        self.archs.len()
    }

    /// True when no architecture has records.
    pub fn is_empty(&self) -> bool {
        self.archs.is_empty()
    }

    /// Total number of records across architectures.
    pub fn instruction_count(&self) -> usize {
        self.archs.values().map(Vec::len).sum()
    }
}

impl FromIterator<Instruction> for Database {
    /// Builds a store from already-typed records, applying deduplication and canonical order.
    fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
        let mut survivors = Survivors::default();
        for instruction in iter {
            let _ = survivors.offer(instruction);
        }
        Self {
            archs: survivors.into_archs(),
        }
    }
}
