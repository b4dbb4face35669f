//! Instruction categorization.
//!
//! Each architecture family owns an ordered rule table (see [`rules`]). A record is assigned
//! the category of the **first** rule whose predicate matches; when nothing matches it gets the
//! family default. Rule order is therefore part of the contract:
//!
//! 1. Extension keyword/token checks come before any mnemonic check.
//! 2. Specific mnemonic lists come before generic prefixes they would otherwise fall into
//!    (e.g. RISC-V `FENCE` is matched as *System* before the `F` prefix claims it as float).
//!
//! [`categorize`] is pure and total.

/// Per-family rule tables.
pub mod rules;

use crate::isa::{Family, Instruction};

/// A predicate over an instruction's extension or mnemonic.
///
/// Extension keywords are lower-case; mnemonic lists are upper-case. Comparisons are
/// case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Extension text contains any keyword as a substring.
    ExtensionKeyword(&'static [&'static str]),
    /// Extension, split on non-alphanumeric characters, has a token equal to any entry.
    ExtensionToken(&'static [&'static str]),
    /// Mnemonic starts with any prefix.
    MnemonicPrefix(&'static [&'static str]),
    /// Mnemonic ends with any suffix.
    MnemonicSuffix(&'static [&'static str]),
    /// Mnemonic equals any entry.
    MnemonicIn(&'static [&'static str]),
}

impl Matcher {
    /// Evaluates the predicate against pre-normalized fields.
    ///
    /// `extension` must be lower-case and `mnemonic` upper-case and trimmed.
    fn matches(self, extension: Option<&str>, mnemonic: &str) -> bool {
        match self {
            Self::ExtensionKeyword(keys) => {
                extension.is_some_and(|ext| keys.iter().any(|k| ext.contains(k)))
            }
            Self::ExtensionToken(tokens) => extension.is_some_and(|ext| {
                ext.split(|c: char| !c.is_ascii_alphanumeric())
                    .any(|tok| tokens.contains(&tok))
            }),
            Self::MnemonicPrefix(prefixes) => prefixes.iter().any(|p| mnemonic.starts_with(p)),
            Self::MnemonicSuffix(suffixes) => suffixes.iter().any(|s| mnemonic.ends_with(s)),
            Self::MnemonicIn(names) => names.contains(&mnemonic),
        }
    }
}

/// One entry of a rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Predicate.
    pub matcher: Matcher,
    /// Category assigned when the predicate matches.
    pub category: &'static str,
}

impl Rule {
    /// Creates a rule.
    pub const fn new(matcher: Matcher, category: &'static str) -> Self {
        Self { matcher, category }
    }
}

/// The ordered rules and default category of one family.
#[derive(Debug, Clone, Copy)]
pub struct RuleTable {
    /// Family this table classifies.
    pub family: Family,
    /// Rules in evaluation order.
    pub rules: &'static [Rule],
    /// Category used when no rule matches.
    pub default: &'static str,
}

impl RuleTable {
    /// Returns the table for a family.
    pub fn for_family(family: Family) -> &'static Self {
        match family {
            Family::RiscV => &rules::RISCV,
            Family::Arm => &rules::ARM,
            Family::Power => &rules::POWER,
            Family::X86 => &rules::X86,
            Family::Generic => &rules::GENERIC,
        }
    }

    /// Index of the first rule matching the instruction, if any.
    pub fn first_match(&self, instruction: &Instruction) -> Option<usize> {
        let extension = instruction
            .extension
            .as_deref()
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty());
        let mnemonic = instruction.mnemonic.trim().to_uppercase();

        self.rules
            .iter()
            .position(|rule| rule.matcher.matches(extension.as_deref(), &mnemonic))
    }

    /// Category of the instruction under this table.
    pub fn classify(&self, instruction: &Instruction) -> &'static str {
        self.first_match(instruction)
            .map_or(self.default, |idx| self.rules[idx].category)
    }

    /// Rule categories deduplicated in first-appearance order.
    ///
    /// This is the sidebar group order; the default category is not part of it unless a rule
    /// also names it.
    pub fn category_order(&self) -> Vec<&'static str> {
        let mut order: Vec<&'static str> = Vec::new();
        for rule in self.rules {
            if !order.contains(&rule.category) {
                order.push(rule.category);
            }
        }
        order
    }
}

/// Assigns the navigation category of an instruction.
///
/// The family is detected from the instruction's architecture name.
pub fn categorize(instruction: &Instruction) -> &'static str {
    RuleTable::for_family(Family::detect(&instruction.architecture)).classify(instruction)
}
