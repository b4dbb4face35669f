//! Slug allocation.
//!
//! Slugs are unique within an architecture. Records are visited in canonical order
//! (mnemonic, then signature) so the assignment does not depend on input file order. The base
//! slug is the lower-cased mnemonic with spaces and periods replaced by `_`; on collision the
//! first free `_1`, `_2`, ... suffix is taken.

use std::collections::HashSet;

use crate::isa::Instruction;

/// Base slug of a mnemonic.
pub fn base_slug(mnemonic: &str) -> String {
    mnemonic
        .trim()
        .to_lowercase()
        .replace(|c: char| c == ' ' || c == '.', "_")
}

/// URL path segment of an architecture.
pub fn arch_slug(architecture: &str) -> String {
    architecture.trim().to_lowercase()
}

/// Relative URL of an instruction page: `<architecture-lower>/<slug>/`.
pub fn rel_url(architecture: &str, slug: &str) -> String {
    format!("{}/{slug}/", arch_slug(architecture))
}

/// Hands out unique slugs within one architecture.
#[derive(Debug, Default)]
pub struct SlugAllocator {
    used: HashSet<String>,
}

impl SlugAllocator {
    /// Creates an allocator with no slugs taken.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the first free slug for `mnemonic` and marks it used.
    pub fn allocate(&mut self, mnemonic: &str) -> String {
        let base = base_slug(mnemonic);
        if self.used.insert(base.clone()) {
            return base;
        }

        let mut n: usize = 1;
        loop {
            let candidate = format!("{base}_{n}");
            if self.used.insert(candidate.clone()) {
                tracing::debug!(mnemonic, slug = %candidate, "slug collision resolved");
                return candidate;
            }
            n += 1;
        }
    }
}

/// A record paired with its allocated slug and URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugAssignment<'a> {
    /// The canonical record.
    pub instruction: &'a Instruction,
    /// Unique slug within the architecture.
    pub slug: String,
    /// `<architecture-lower>/<slug>/`.
    pub rel_url: String,
}

/// Allocates slugs for one architecture's records, in canonical order.
pub fn assign_slugs<'a>(architecture: &str, records: &'a [Instruction]) -> Vec<SlugAssignment<'a>> {
    let mut ordered: Vec<&Instruction> = records.iter().collect();
    ordered.sort_by(|a, b| a.canonical_cmp(b));

    let mut allocator = SlugAllocator::new();
    ordered
        .into_iter()
        .map(|instruction| {
            let slug = allocator.allocate(&instruction.mnemonic);
            let url = rel_url(architecture, &slug);
            SlugAssignment {
                instruction,
                slug,
                rel_url: url,
            }
        })
        .collect()
}
