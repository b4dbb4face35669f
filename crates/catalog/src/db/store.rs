//! On-disk store format and atomic file commits.
//!
//! Each architecture lives in `<dir>/<architecture>.json`:
//!
//! ```json
//! { "architecture": "RISC-V", "instructions": [ ... ] }
//! ```
//!
//! Writes go through [`StagedWrite`], which stages every file in a temporary sibling and
//! renames them into place only after all of them were written. One batch may span several
//! directories, so the store and the renderer output become visible together.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;

use crate::common::{Error, PersistenceError};
use crate::ingest::loader::{self, LoadOutcome, Provenance};
use crate::isa::Instruction;

/// Key holding the record list in a store file.
pub const STORE_KEY: &str = "instructions";

/// Extension of store files.
pub const STORE_EXTENSION: &str = "json";

#[derive(Serialize)]
struct StoreDocument<'a> {
    architecture: &'a str,
    instructions: &'a [Instruction],
}

/// File name for an architecture's store file.
///
/// The mapping is one-to-one: `%`, `/` and `\` are percent-encoded, so `ARM/Thumb` becomes
/// `ARM%2FThumb.json` and never meets `ARM_Thumb.json`.
pub fn store_file_name(architecture: &str) -> String {
    format!("{}.{STORE_EXTENSION}", encode_file_stem(architecture))
}

/// Percent-encodes the characters that cannot appear literally in a file name.
pub fn encode_file_stem(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '%' => out.push_str("%25"),
            '/' => out.push_str("%2F"),
            '\\' => out.push_str("%5C"),
            _ => out.push(c),
        }
    }
    out
}

/// Serializes one architecture's canonical list.
///
/// Output is pretty-printed with a trailing newline, so identical input yields identical bytes.
///
/// # Errors
///
/// Returns [`PersistenceError::Encode`] if serialization fails.
pub fn encode_architecture(
    architecture: &str,
    instructions: &[Instruction],
) -> Result<Vec<u8>, PersistenceError> {
    let doc = StoreDocument {
        architecture,
        instructions,
    };
    encode_json(architecture, &doc)
}

/// Pretty-prints any serializable value with a trailing newline.
///
/// # Errors
///
/// Returns [`PersistenceError::Encode`] if serialization fails.
pub fn encode_json<T: Serialize + ?Sized>(name: &str, value: &T) -> Result<Vec<u8>, PersistenceError> {
    let mut bytes = serde_json::to_vec_pretty(value).map_err(|source| PersistenceError::Encode {
        name: name.to_string(),
        source,
    })?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Reads every store file in `dir` as baseline candidates.
///
/// A store file that cannot be parsed is fatal: silently skipping it would drop its records
/// from the next persisted snapshot.
///
/// # Errors
///
/// Returns [`Error::Store`] for an unparsable store file and [`Error::Io`] when the directory
/// cannot be listed.
pub fn load_baseline(dir: &Path) -> Result<LoadOutcome, Error> {
    let mut outcome = loader::load_dir(dir, STORE_EXTENSION, STORE_KEY, Provenance::Store)?;
    if let Some(first) = outcome.failures.drain(..).next() {
        return Err(Error::Store(first));
    }
    Ok(outcome)
}

/// A set of files written to temporaries, not yet visible.
///
/// Targets are compared case-insensitively when staged, so two outputs that one filesystem
/// would fold onto the same path are rejected instead of overwriting each other.
#[derive(Debug, Default)]
pub struct StagedWrite {
    staged: Vec<(NamedTempFile, PathBuf)>,
}

impl StagedWrite {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of staged files.
    pub fn len(&self) -> usize {
        self.staged.len()
    }

    /// True when nothing is staged.
    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    /// Writes `files` (paths relative to `dir`) to temporaries next to their targets.
    ///
    /// Parent directories are created as needed. Nothing becomes visible until [`commit`].
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Collision`] when a target was already staged and
    /// [`PersistenceError::Io`] naming the path that failed. Targets stay untouched either way.
    ///
    /// [`commit`]: StagedWrite::commit
    pub fn stage(
        &mut self,
        dir: &Path,
        files: Vec<(PathBuf, Vec<u8>)>,
    ) -> Result<(), PersistenceError> {
        for (relative, bytes) in files {
            let target = dir.join(relative);
            let folded = target.to_string_lossy().to_lowercase();
            if self
                .staged
                .iter()
                .any(|(_, other)| other.to_string_lossy().to_lowercase() == folded)
            {
                return Err(PersistenceError::Collision { path: target });
            }

            let io_err = |source| PersistenceError::Io {
                path: target.clone(),
                source,
            };

            let parent = target.parent().unwrap_or(dir);
            fs::create_dir_all(parent).map_err(io_err)?;

            let mut temp = NamedTempFile::new_in(parent).map_err(io_err)?;
            temp.write_all(&bytes).map_err(io_err)?;
            temp.as_file().sync_all().map_err(io_err)?;
            self.staged.push((temp, target));
        }
        Ok(())
    }

    /// Renames every staged file onto its target, in staging order.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Io`] for the first rename that fails.
    pub fn commit(self) -> Result<(), PersistenceError> {
        for (temp, target) in self.staged {
            let _file = temp.persist(&target).map_err(|e| PersistenceError::Io {
                path: target.clone(),
                source: e.error,
            })?;
            tracing::debug!(path = %target.display(), "committed");
        }
        Ok(())
    }
}

/// Writes `files` (paths relative to `dir`) so that either all of them become visible or none.
///
/// # Errors
///
/// See [`StagedWrite::stage`] and [`StagedWrite::commit`]. A failure during staging leaves every
/// target untouched.
pub fn commit_files(dir: &Path, files: Vec<(PathBuf, Vec<u8>)>) -> Result<(), PersistenceError> {
    let mut batch = StagedWrite::new();
    batch.stage(dir, files)?;
    batch.commit()
}
