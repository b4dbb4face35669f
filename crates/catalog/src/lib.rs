//! Instruction-set reference consolidation library.
//!
//! This crate turns independently authored JSON instruction records into a canonical,
//! cross-linked reference database. It provides:
//! 1. **Ingest:** Document loading, record validation, and per-architecture deduplication.
//! 2. **Database:** The persisted per-architecture store with atomic writes.
//! 3. **ISA model:** Instruction records, signatures, and bit-pattern normalization.
//! 4. **Classification:** Declarative per-family rule tables for sidebar categories.
//! 5. **Enrichment:** Slugs, URLs, and hyperlinked text computed as a per-build view.
//! 6. **Site data:** Search index, architecture summaries, and the page list.

/// Common types shared across the pipeline (errors, diagnostics).
pub mod common;
/// Build configuration (paths, ingest options, link policy).
pub mod config;
/// Persisted per-architecture instruction store.
pub mod db;
/// Per-build derived views (slugs, links, groups).
pub mod enrich;
/// Instruction categorization rule tables.
pub mod classify;
/// Document loading, validation, and deduplication.
pub mod ingest;
/// Single-record diagnostics for a mnemonic inside one architecture.
pub mod inspect;
/// Instruction data model and encoding normalization.
pub mod isa;
/// End-to-end build orchestration.
pub mod pipeline;
/// Site-wide data handed to the renderer.
pub mod site;
/// Per-architecture build counters and the summary report.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Authoritative per-architecture record set.
pub use crate::db::Database;
/// Top-level fatal error.
pub use crate::common::Error;
/// Canonical authored instruction record.
pub use crate::isa::Instruction;
