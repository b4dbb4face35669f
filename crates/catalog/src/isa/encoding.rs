//! Bit-pattern normalization.
//!
//! Converts a raw encoding layout such as `imm[11:0]|rs1|000|rd|0010011` into an ordered list
//! of fields for display:
//!
//! ```
//! use isaref_core::isa::encoding::parse_pattern;
//! let fields = parse_pattern("imm[11:0] | rs1 |000");
//! assert_eq!(fields[0].raw, "imm[11:0]");
//! assert_eq!(fields[0].clean, "imm");
//! assert_eq!(fields.len(), 3);
//! ```

use serde::Serialize;

use crate::common::{Diagnostic, DiagnosticKind};
use crate::isa::Instruction;

/// Field separator in a raw pattern.
pub const FIELD_DELIMITER: char = '|';

/// Characters that open a bit-range or annotation suffix, e.g. `imm[11:0]` or `Rt<4:0>`.
const BRACKETS: [char; 4] = ['[', '(', '{', '<'];

/// One field of a normalized encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodingField {
    /// Field text as written, trimmed.
    pub raw: String,
    /// Field name with any bracketed suffix removed.
    pub clean: String,
}

impl EncodingField {
    /// Builds a field from its trimmed raw text.
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            clean: clean_name(raw).to_string(),
        }
    }
}

/// Strips the bracketed suffix from a field name.
///
/// Falls back to the whole field when nothing precedes the first bracket.
fn clean_name(raw: &str) -> &str {
    let head = raw
        .find(|c: char| BRACKETS.contains(&c))
        .map_or(raw, |at| &raw[..at])
        .trim();
    if head.is_empty() { raw } else { head }
}

/// Splits a raw pattern into trimmed, non-empty fields.
pub fn parse_pattern(pattern: &str) -> Vec<EncodingField> {
    pattern
        .split(FIELD_DELIMITER)
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(EncodingField::new)
        .collect()
}

/// Normalizes an instruction's encoding.
///
/// A missing or blank pattern yields no fields together with an
/// [`DiagnosticKind::EmptyEncoding`] diagnostic; it is never an error.
pub fn normalize(instruction: &Instruction) -> (Vec<EncodingField>, Option<Diagnostic>) {
    let fields = instruction
        .encoding
        .raw_pattern()
        .map(parse_pattern)
        .unwrap_or_default();

    if fields.is_empty() {
        tracing::warn!(
            arch = %instruction.architecture,
            mnemonic = %instruction.mnemonic,
            "instruction has no encoding pattern"
        );
        let diagnostic = Diagnostic::new(
            format!("{}/{}", instruction.architecture, instruction.mnemonic),
            DiagnosticKind::EmptyEncoding,
            "no binary_pattern or pattern in encoding",
        );
        return (fields, Some(diagnostic));
    }

    (fields, None)
}
