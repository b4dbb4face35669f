//! Authored instruction records.
//!
//! An [`Instruction`] carries only fields a human wrote. Everything derived from it (slug,
//! category, hyperlinked text, encoding fields) lives in the per-build view and is never
//! serialized back into the store.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// One architectural instruction variant as authored.
///
/// The derived `Ord` compares every authored field in declaration order; it picks the survivor
/// when two records share a [`Signature`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Instruction {
    /// Textual opcode name, e.g. `ADDI`.
    pub mnemonic: String,

    /// Architecture this record belongs to; partitions the store.
    pub architecture: String,

    /// Optional extension name used as a classification hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,

    /// One-line description.
    pub summary: String,

    /// Assembly syntax.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syntax: Option<String>,

    /// Operational pseudocode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pseudocode: Option<String>,

    /// Operand descriptions, in order.
    #[serde(default)]
    pub operands: Vec<String>,

    /// Binary encoding block.
    pub encoding: Encoding,
}

/// Authored encoding block of an instruction.
///
/// Inputs spell the bit pattern either `binary_pattern` or `pattern`; both are kept as
/// written so the store round-trips without rewriting authored data.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Encoding {
    /// Pipe-delimited bit-field layout, e.g. `imm[11:0]|rs1|000|rd|0010011`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary_pattern: Option<String>,

    /// Fallback spelling of the bit-field layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Opcode in hexadecimal, as written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex_opcode: Option<String>,
}

impl Encoding {
    /// Returns the raw bit pattern, preferring `binary_pattern` over `pattern`.
    ///
    /// A `binary_pattern` that is blank does not shadow a usable `pattern`.
    pub fn raw_pattern(&self) -> Option<&str> {
        self.binary_pattern
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .or(self.pattern.as_deref())
    }
}

/// Exact-duplicate key: trimmed `(mnemonic, syntax, hex_opcode)`.
///
/// Absent `syntax` or `hex_opcode` contribute an empty string, so a record without syntax
/// and one with a blank syntax collide.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Signature {
    /// Trimmed mnemonic.
    pub mnemonic: String,
    /// Trimmed syntax, or empty.
    pub syntax: String,
    /// Trimmed hex opcode, or empty.
    pub hex_opcode: String,
}

impl Instruction {
    /// Computes the duplicate-detection signature.
    pub fn signature(&self) -> Signature {
        fn trimmed(value: Option<&str>) -> String {
            value.map(str::trim).unwrap_or_default().to_string()
        }

        Signature {
            mnemonic: self.mnemonic.trim().to_string(),
            syntax: trimmed(self.syntax.as_deref()),
            hex_opcode: trimmed(self.encoding.hex_opcode.as_deref()),
        }
    }

    /// Canonical store order: by mnemonic, then by signature.
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.mnemonic
            .cmp(&other.mnemonic)
            .then_with(|| self.signature().cmp(&other.signature()))
    }
}
