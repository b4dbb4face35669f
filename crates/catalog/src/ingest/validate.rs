//! Record validation and typed extraction.
//!
//! A candidate is accepted only when every field in [`REQUIRED_FIELDS`] is present. A required
//! text field counts as missing when it is absent, `null`, not a string, or blank; `encoding`
//! counts as missing unless it is an object. Accepted records are converted into
//! [`Instruction`]s, keeping only authored fields.

use serde_json::{Map, Value};

use super::loader::Candidate;
use crate::common::ValidationError;
use crate::isa::{Encoding, Instruction};

/// Fields every record must carry.
pub const REQUIRED_FIELDS: [&str; 4] = ["mnemonic", "architecture", "summary", "encoding"];

/// Returns a required string field, trimmed, or `None` if absent or blank.
fn required_text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Returns an optional text field as authored.
///
/// Strings are kept verbatim, arrays of strings are joined with newlines (multi-line
/// pseudocode is often authored that way), and scalars are rendered as JSON text.
fn optional_text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    let text = match obj.get(key)? {
        Value::String(s) => s.clone(),
        Value::Array(lines) => lines
            .iter()
            .map(|line| line.as_str().map_or_else(|| line.to_string(), str::to_string))
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Object(_) => return None,
    };
    (!text.trim().is_empty()).then_some(text)
}

/// Returns the operand list; non-string operands are kept as their JSON text.
fn operands(obj: &Map<String, Value>) -> Vec<String> {
    match obj.get("operands") {
        Some(Value::Array(items)) => items
            .iter()
            .map(|op| op.as_str().map_or_else(|| op.to_string(), str::to_string))
            .collect(),
        Some(Value::String(s)) if !s.trim().is_empty() => vec![s.clone()],
        _ => Vec::new(),
    }
}

fn encoding(obj: &Map<String, Value>) -> Option<Encoding> {
    let enc = obj.get("encoding")?.as_object()?;
    Some(Encoding {
        binary_pattern: optional_text(enc, "binary_pattern"),
        pattern: optional_text(enc, "pattern"),
        hex_opcode: optional_text(enc, "hex_opcode"),
    })
}

/// Validates one candidate and extracts its authored fields.
///
/// # Errors
///
/// Returns a [`ValidationError`] listing every missing required field.
pub fn validate(candidate: &Candidate) -> Result<Instruction, ValidationError> {
    let reject = |mnemonic: Option<String>, missing: Vec<&'static str>| ValidationError {
        origin: candidate.origin.clone(),
        index: candidate.index,
        mnemonic,
        missing,
    };

    let Some(obj) = candidate.record.as_object() else {
        return Err(reject(None, REQUIRED_FIELDS.to_vec()));
    };

    let mnemonic = required_text(obj, "mnemonic");
    let architecture = required_text(obj, "architecture");
    let summary = required_text(obj, "summary");
    let encoding = encoding(obj);

    match (mnemonic, architecture, summary, encoding) {
        (Some(mnemonic), Some(architecture), Some(summary), Some(encoding)) => Ok(Instruction {
            mnemonic,
            architecture,
            extension: optional_text(obj, "extension"),
            summary,
            syntax: optional_text(obj, "syntax"),
            pseudocode: optional_text(obj, "pseudocode"),
            operands: operands(obj),
            encoding,
        }),
        (mnemonic, architecture, summary, encoding) => {
            let present = [
                mnemonic.is_some(),
                architecture.is_some(),
                summary.is_some(),
                encoding.is_some(),
            ];
            let missing = REQUIRED_FIELDS
                .iter()
                .zip(present)
                .filter(|(_, ok)| !ok)
                .map(|(field, _)| *field)
                .collect();
            Err(reject(mnemonic, missing))
        }
    }
}
