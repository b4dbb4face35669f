//! Diagnostic records for recoverable findings.

use std::fmt;

use serde::Serialize;

use super::error::{ParseError, ValidationError};

/// Category of a recoverable finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticKind {
    /// A document was unreadable or malformed and was skipped.
    Parse,
    /// A record was missing required fields and was excluded.
    Validation,
    /// A document parsed but carried no record list.
    EmptyDocument,
    /// A record has no raw encoding pattern; its field list is empty.
    EmptyEncoding,
}

impl DiagnosticKind {
    /// True for kinds that strict mode escalates to a fatal error.
    pub const fn is_strict_failure(self) -> bool {
        matches!(self, Self::Parse | Self::Validation)
    }
}

/// One recoverable finding, kept for the build report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Document path or `architecture/mnemonic` the finding refers to.
    pub origin: String,
    /// What kind of finding this is.
    pub kind: DiagnosticKind,
    /// Human-readable detail.
    pub message: String,
}

impl Diagnostic {
    /// Creates a diagnostic.
    pub fn new(origin: impl Into<String>, kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}: {}", self.kind, self.origin, self.message)
    }
}

impl From<&ParseError> for Diagnostic {
    fn from(err: &ParseError) -> Self {
        Self::new(
            err.path.display().to_string(),
            DiagnosticKind::Parse,
            err.reason.clone(),
        )
    }
}

impl From<&ValidationError> for Diagnostic {
    fn from(err: &ValidationError) -> Self {
        Self::new(
            err.origin.display().to_string(),
            DiagnosticKind::Validation,
            err.to_string(),
        )
    }
}
