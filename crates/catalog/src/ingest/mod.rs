//! Document ingest.
//!
//! Turns a directory of JSON documents into canonical instruction records:
//! 1. **Loader:** Reads every document, isolating per-document parse failures.
//! 2. **Validator:** Rejects records missing a required field.
//! 3. **Deduplicator:** Tracks seen signatures, scoped per architecture.

/// Per-architecture signature set.
pub mod dedup;

/// Document discovery and parsing.
pub mod loader;

/// Required-field checks and typed extraction.
pub mod validate;

pub use dedup::Deduplicator;
pub use loader::{Candidate, LoadOutcome, Provenance};
pub use validate::{REQUIRED_FIELDS, validate};
