//! Error definitions for the consolidation pipeline.
//!
//! Errors fall into two tiers:
//! 1. **Recoverable:** [`ParseError`] (a whole document is skipped) and [`ValidationError`]
//!    (a single record is excluded). These are reported and the batch continues.
//! 2. **Fatal:** [`Error`], which aborts the run. Persistence and render failures never leave
//!    a partially written store behind.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::diag::Diagnostic;

/// A document that could not be read or is not structurally valid.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("cannot parse {}: {reason}", .path.display())]
pub struct ParseError {
    /// Document that failed.
    pub path: PathBuf,
    /// Human-readable cause (I/O or JSON syntax message).
    pub reason: String,
}

impl ParseError {
    /// Creates a parse error for `path`.
    pub fn new(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// A candidate record missing one or more required fields.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error(
    "record #{index} in {} ({}): missing required field(s): {}",
    .origin.display(),
    .mnemonic.as_deref().unwrap_or("<no mnemonic>"),
    .missing.join(", ")
)]
pub struct ValidationError {
    /// Document the record came from.
    pub origin: PathBuf,
    /// Zero-based position of the record inside its document.
    pub index: usize,
    /// Mnemonic, when one was present, for readable reports.
    pub mnemonic: Option<String>,
    /// Every required field that was absent or empty.
    pub missing: Vec<&'static str>,
}

/// Failure while writing files to disk.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Filesystem failure (create, write, rename).
    #[error("cannot write {}: {source}", .path.display())]
    Io {
        /// Path being written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Two outputs resolve to the same file (paths compare case-insensitively).
    #[error("output path {} is produced twice", .path.display())]
    Collision {
        /// Path claimed by more than one output.
        path: PathBuf,
    },

    /// Serialization failure for one output document.
    #[error("cannot encode {name}: {source}")]
    Encode {
        /// Architecture or artifact name.
        name: String,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// Fatal build error. Any of these aborts the run with a non-zero exit.
#[derive(Debug, Error)]
pub enum Error {
    /// The canonical store could not be written.
    #[error("persistence failed: {0}")]
    Persistence(#[from] PersistenceError),

    /// Renderer-facing output could not be produced.
    #[error("render failed: {0}")]
    Render(#[source] PersistenceError),

    /// The cross-reference pattern could not be compiled.
    #[error("cannot build cross-reference index: {0}")]
    Linker(#[from] regex::Error),

    /// A persisted store file exists but cannot be trusted.
    #[error("persisted store is unreadable: {0}")]
    Store(#[source] ParseError),

    /// A directory could not be listed.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        /// Directory or file that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The configuration file is missing or malformed.
    #[error("invalid configuration {}: {reason}", .path.display())]
    Config {
        /// Configuration file path.
        path: PathBuf,
        /// Cause of the failure.
        reason: String,
    },

    /// Strict mode turned recoverable findings into a failure.
    #[error("strict mode: {} document or record failure(s)", .failures.len())]
    Strict {
        /// The findings that tripped strict mode.
        failures: Vec<Diagnostic>,
    },
}
