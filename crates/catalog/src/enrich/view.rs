//! Renderer-facing views.
//!
//! A view borrows a canonical [`Instruction`] and carries every derived field next to it. The
//! serialized form is what the templating collaborator consumes: the authored fields, the
//! derived `slug`, `rel_url`, `category`, `linked_summary` and `linked_pseudocode`, and an
//! `encoding` object extended with `visual_parts`.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::classify::RuleTable;
use crate::isa::{Encoding, EncodingField, Family, Instruction};

/// One enriched instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionView<'a> {
    /// Canonical authored record.
    pub instruction: &'a Instruction,
    /// Unique slug within the architecture.
    pub slug: String,
    /// `<architecture-lower>/<slug>/`.
    pub rel_url: String,
    /// Sidebar category.
    pub category: &'static str,
    /// Normalized encoding fields.
    pub visual_parts: Vec<EncodingField>,
    /// Escaped summary with cross-reference anchors.
    pub linked_summary: String,
    /// Escaped pseudocode with cross-reference anchors, when pseudocode exists.
    pub linked_pseudocode: Option<String>,
}

#[derive(Serialize)]
struct EncodingOut<'a> {
    #[serde(flatten)]
    authored: &'a Encoding,
    visual_parts: &'a [EncodingField],
}

#[derive(Serialize)]
struct InstructionOut<'a> {
    mnemonic: &'a str,
    architecture: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    extension: Option<&'a str>,
    summary: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    syntax: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pseudocode: Option<&'a str>,
    operands: &'a [String],
    encoding: EncodingOut<'a>,
    slug: &'a str,
    rel_url: &'a str,
    category: &'a str,
    linked_summary: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    linked_pseudocode: Option<&'a str>,
}

impl Serialize for InstructionView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let i = self.instruction;
        InstructionOut {
            mnemonic: &i.mnemonic,
            architecture: &i.architecture,
            extension: i.extension.as_deref(),
            summary: &i.summary,
            syntax: i.syntax.as_deref(),
            pseudocode: i.pseudocode.as_deref(),
            operands: &i.operands,
            encoding: EncodingOut {
                authored: &i.encoding,
                visual_parts: &self.visual_parts,
            },
            slug: &self.slug,
            rel_url: &self.rel_url,
            category: self.category,
            linked_summary: &self.linked_summary,
            linked_pseudocode: self.linked_pseudocode.as_deref(),
        }
        .serialize(serializer)
    }
}

/// Slugs of one sidebar category, in instruction order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    /// Category name.
    pub name: String,
    /// Member slugs.
    pub slugs: Vec<String>,
}

/// Everything the renderer needs for one architecture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchitectureView<'a> {
    /// Architecture name as stored.
    pub name: String,
    /// URL path segment (lower-cased name).
    pub slug: String,
    /// Detected family.
    pub family: Family,
    /// Views ordered by mnemonic, then slug.
    pub instructions: Vec<InstructionView<'a>>,
    /// Non-empty category groups in sidebar order.
    pub groups: Vec<CategoryGroup>,
}

impl ArchitectureView<'_> {
    /// Looks up a view by slug.
    pub fn find(&self, slug: &str) -> Option<&InstructionView<'_>> {
        self.instructions.iter().find(|v| v.slug == slug)
    }
}

/// Groups views by category.
///
/// Groups follow the family's rule order; categories outside it (the default included) come
/// after, sorted by name. Empty categories are omitted.
pub fn group_by_category(family: Family, views: &[InstructionView<'_>]) -> Vec<CategoryGroup> {
    let mut members: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    for view in views {
        members
            .entry(view.category)
            .or_default()
            .push(view.slug.clone());
    }

    let mut groups = Vec::with_capacity(members.len());
    for name in RuleTable::for_family(family).category_order() {
        if let Some(slugs) = members.remove(name) {
            groups.push(CategoryGroup {
                name: name.to_string(),
                slugs,
            });
        }
    }
    groups.extend(members.into_iter().map(|(name, slugs)| CategoryGroup {
        name: name.to_string(),
        slugs,
    }));
    groups
}
