//! Common types used throughout the consolidation pipeline.
//!
//! This module provides the building blocks shared by every stage:
//! 1. **Error Handling:** Recoverable record/document errors and fatal build errors.
//! 2. **Diagnostics:** Non-fatal findings collected into the build report.

/// Diagnostic records for recoverable findings.
pub mod diag;

/// Error types for parsing, validation, persistence, and rendering.
pub mod error;

pub use diag::{Diagnostic, DiagnosticKind};
pub use error::{Error, ParseError, PersistenceError, ValidationError};
