//! Per-build enrichment.
//!
//! Derives everything the renderer needs from a finalized [`Database`] without touching it:
//! 1. **Slugs:** Unique per architecture, allocated in canonical order.
//! 2. **Categories:** From the family rule tables.
//! 3. **Encoding fields:** Normalized bit-pattern parts.
//! 4. **Links:** Summary and pseudocode rewritten with cross-reference anchors.
//!
//! The cross-reference index is built once over the whole corpus and is read-only afterwards;
//! each architecture is then enriched independently.

/// Cross-reference index and HTML-safe link rewriting.
pub mod linker;

/// Slug allocation and URLs.
pub mod slug;

/// Renderer-facing view types and category grouping.
pub mod view;

pub use linker::{CrossRefIndex, LinkContext, escape_html};
pub use slug::{SlugAllocator, SlugAssignment, assign_slugs};
pub use view::{ArchitectureView, CategoryGroup, InstructionView, group_by_category};

use crate::classify::RuleTable;
use crate::common::{Diagnostic, Error};
use crate::config::LinkConfig;
use crate::db::Database;
use crate::isa::{Family, encoding};

/// Result of enriching a database.
#[derive(Debug)]
pub struct Enrichment<'a> {
    /// One view per architecture, sorted by architecture name.
    pub views: Vec<ArchitectureView<'a>>,
    /// The corpus-wide cross-reference index.
    pub index: CrossRefIndex,
    /// Findings raised while enriching (empty encodings).
    pub diagnostics: Vec<Diagnostic>,
}

/// Builds views for every architecture in `db`.
///
/// # Errors
///
/// Returns [`Error::Linker`] if the cross-reference pattern cannot be compiled.
pub fn enrich<'a>(db: &'a Database, links: &LinkConfig) -> Result<Enrichment<'a>, Error> {
    let assigned: Vec<(&str, Vec<SlugAssignment<'a>>)> = db
        .architectures()
        .map(|(arch, records)| (arch, assign_slugs(arch, records)))
        .collect();

    let index = CrossRefIndex::build(assigned.iter().flat_map(|(arch, list)| {
        list.iter()
            .map(move |a| (*arch, a.instruction.mnemonic.as_str(), a.rel_url.as_str()))
    }))?;
    tracing::debug!(mnemonics = index.len(), "cross-reference index built");

    let mut diagnostics = Vec::new();
    let views = assigned
        .into_iter()
        .map(|(arch, list)| enrich_architecture(arch, list, &index, links, &mut diagnostics))
        .collect();

    Ok(Enrichment {
        views,
        index,
        diagnostics,
    })
}

fn enrich_architecture<'a>(
    architecture: &str,
    assigned: Vec<SlugAssignment<'a>>,
    index: &CrossRefIndex,
    links: &LinkConfig,
    diagnostics: &mut Vec<Diagnostic>,
) -> ArchitectureView<'a> {
    let family = Family::detect(architecture);
    let table = RuleTable::for_family(family);

    let mut instructions: Vec<InstructionView<'a>> = assigned
        .into_iter()
        .map(|SlugAssignment { instruction, slug, rel_url }| {
            let (visual_parts, diag) = encoding::normalize(instruction);
            diagnostics.extend(diag);

            let ctx = LinkContext {
                architecture,
                mnemonic: &instruction.mnemonic,
                self_links: links.self_links,
                href_prefix: &links.href_prefix,
            };

            InstructionView {
                instruction,
                slug,
                rel_url,
                category: table.classify(instruction),
                visual_parts,
                linked_summary: index.link(&instruction.summary, &ctx),
                linked_pseudocode: instruction
                    .pseudocode
                    .as_deref()
                    .map(|text| index.link(text, &ctx)),
            }
        })
        .collect();

    instructions.sort_by(|a, b| {
        a.instruction
            .mnemonic
            .cmp(&b.instruction.mnemonic)
            .then_with(|| a.slug.cmp(&b.slug))
    });

    let groups = group_by_category(family, &instructions);
    tracing::debug!(
        arch = architecture,
        instructions = instructions.len(),
        groups = groups.len(),
        "architecture enriched"
    );

    ArchitectureView {
        name: architecture.to_string(),
        slug: slug::arch_slug(architecture),
        family,
        instructions,
        groups,
    }
}
