//! Document loader.
//!
//! This module reads candidate records from a set of JSON documents. It performs:
//! 1. **Discovery:** Lists documents with the configured extension in lexicographic order.
//! 2. **Parsing:** Accepts an object carrying the record list under a key, or a bare array.
//! 3. **Isolation:** A document that cannot be read or parsed is reported and skipped; the
//!    remaining documents are still processed.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::common::{Diagnostic, DiagnosticKind, Error, ParseError};

/// Where a candidate record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provenance {
    /// The previously persisted store.
    Store,
    /// A freshly read input document.
    Input,
}

/// One unvalidated record tagged with its origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Document the record was read from (diagnostics only).
    pub origin: PathBuf,
    /// Zero-based position inside the document's record list.
    pub index: usize,
    /// Store or input.
    pub provenance: Provenance,
    /// Raw JSON record.
    pub record: Value,
}

/// Result of loading a batch of documents.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Candidates in document order, then record order.
    pub candidates: Vec<Candidate>,
    /// Documents that were skipped.
    pub failures: Vec<ParseError>,
    /// Non-fatal findings (documents without a record list).
    pub diagnostics: Vec<Diagnostic>,
    /// Number of documents that parsed.
    pub documents: usize,
}

/// Lists documents in `dir` whose extension equals `extension`, sorted by path.
///
/// A missing directory is an empty batch, not an error.
///
/// # Errors
///
/// Returns [`Error::Io`] when the directory exists but cannot be listed.
pub fn list_documents(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, Error> {
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "document directory absent");
        return Ok(Vec::new());
    }

    let io_err = |source| Error::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(extension) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Extracts the record list from one document's text.
///
/// Returns `Ok(None)` for an object that has no `record_key` entry.
///
/// # Errors
///
/// Returns a [`ParseError`] when the text is not JSON, when `record_key` holds something other
/// than an array, or when the top level is neither an object nor an array.
pub fn parse_document(
    path: &Path,
    text: &str,
    record_key: &str,
) -> Result<Option<Vec<Value>>, ParseError> {
    let doc: Value = serde_json::from_str(text).map_err(|e| ParseError::new(path, e.to_string()))?;

    match doc {
        Value::Array(records) => Ok(Some(records)),
        Value::Object(mut map) => match map.remove(record_key) {
            None => Ok(None),
            Some(Value::Array(records)) => Ok(Some(records)),
            Some(_) => Err(ParseError::new(
                path,
                format!("`{record_key}` is not an array"),
            )),
        },
        _ => Err(ParseError::new(
            path,
            "top level is neither an object nor an array",
        )),
    }
}

/// Reads and parses every document in `paths`, in order.
pub fn load_documents(paths: &[PathBuf], record_key: &str, provenance: Provenance) -> LoadOutcome {
    let mut outcome = LoadOutcome::default();

    for path in paths {
        let parsed = fs::read_to_string(path)
            .map_err(|e| ParseError::new(path, e.to_string()))
            .and_then(|text| parse_document(path, &text, record_key));

        match parsed {
            Ok(Some(records)) => {
                outcome.documents += 1;
                tracing::debug!(doc = %path.display(), records = records.len(), "document loaded");
                outcome
                    .candidates
                    .extend(records.into_iter().enumerate().map(|(index, record)| Candidate {
                        origin: path.clone(),
                        index,
                        provenance,
                        record,
                    }));
            }
            Ok(None) => {
                outcome.documents += 1;
                tracing::warn!(doc = %path.display(), key = record_key, "document has no record list");
                outcome.diagnostics.push(Diagnostic::new(
                    path.display().to_string(),
                    DiagnosticKind::EmptyDocument,
                    format!("no `{record_key}` key"),
                ));
            }
            Err(err) => {
                tracing::warn!(error = %err, "skipping document");
                outcome.failures.push(err);
            }
        }
    }

    outcome
}

/// Lists and loads every document in a directory.
///
/// # Errors
///
/// Returns [`Error::Io`] when the directory cannot be listed; individual document failures are
/// collected in [`LoadOutcome::failures`] instead.
pub fn load_dir(
    dir: &Path,
    extension: &str,
    record_key: &str,
    provenance: Provenance,
) -> Result<LoadOutcome, Error> {
    let paths = list_documents(dir, extension)?;
    Ok(load_documents(&paths, record_key, provenance))
}
