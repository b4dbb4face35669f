//! Record inspection.
//!
//! Reports, for every variant of a mnemonic in one architecture, whether the fields that feed
//! the detail page are actually present. Mnemonics compare case-insensitively.

use std::fmt;

use serde::Serialize;

use crate::db::Database;
use crate::isa::encoding;

/// What one variant carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantCheck {
    /// Mnemonic as stored.
    pub mnemonic: String,
    /// Syntax, if any.
    pub syntax: Option<String>,
    /// Number of operand entries.
    pub operand_count: usize,
    /// First operand entry.
    pub first_operand: Option<String>,
    /// Raw pattern, when `binary_pattern` or `pattern` is non-blank.
    pub pattern: Option<String>,
    /// Number of normalized encoding fields.
    pub field_count: usize,
}

impl VariantCheck {
    /// True when a raw encoding pattern exists.
    pub const fn has_pattern(&self) -> bool {
        self.pattern.is_some()
    }
}

impl fmt::Display for VariantCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            self.mnemonic,
            self.syntax.as_deref().unwrap_or("")
        )?;
        match &self.first_operand {
            Some(first) => writeln!(f, "  operands: {} (first: {first})", self.operand_count)?,
            None => writeln!(f, "  operands: none")?,
        }
        match &self.pattern {
            Some(pattern) => write!(f, "  pattern:  {pattern} ({} fields)", self.field_count),
            None => write!(f, "  pattern:  missing"),
        }
    }
}

/// Checks every variant of `mnemonic` in `architecture`.
///
/// Returns an empty list when the architecture or mnemonic is unknown.
pub fn inspect(db: &Database, architecture: &str, mnemonic: &str) -> Vec<VariantCheck> {
    let wanted = mnemonic.trim().to_lowercase();
    db.get(architecture)
        .unwrap_or_default()
        .iter()
        .filter(|i| i.mnemonic.trim().to_lowercase() == wanted)
        .map(|i| {
            let pattern = i
                .encoding
                .raw_pattern()
                .map(str::trim)
                .filter(|p| !p.is_empty());
            VariantCheck {
                mnemonic: i.mnemonic.clone(),
                syntax: i.syntax.clone(),
                operand_count: i.operands.len(),
                first_operand: i.operands.first().cloned(),
                pattern: pattern.map(str::to_string),
                field_count: pattern.map_or(0, |p| encoding::parse_pattern(p).len()),
            }
        })
        .collect()
}
