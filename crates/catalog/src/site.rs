//! Site-wide renderer data.
//!
//! Besides the per-architecture views, the renderer needs a few corpus-wide artifacts:
//! 1. **Search index:** One entry per instruction, consumed by the client-side search box.
//! 2. **Home summary:** Instruction counts per architecture.
//! 3. **Page list:** Every URL the renderer must produce, home page first.
//!
//! [`output_files`] serializes all of it into the files written next to the rendered pages.

use std::path::PathBuf;

use serde::Serialize;

use crate::common::PersistenceError;
use crate::db::store::{encode_file_stem, encode_json};
use crate::enrich::ArchitectureView;

/// Search index file name.
pub const SEARCH_FILE: &str = "search.json";

/// Site summary file name.
pub const SITE_FILE: &str = "site.json";

/// Directory holding one view file per architecture.
pub const DATA_DIR: &str = "data";

/// One client-side search entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchEntry {
    /// `<MNEMONIC> (<architecture>)`.
    pub label: String,
    /// Relative page URL.
    pub url: String,
    /// Mnemonic as authored.
    pub mnemonic: String,
    /// Plain summary text.
    pub summary: String,
    /// Architecture name; the search box filters on it.
    pub arch: String,
}

/// Home page entry for one architecture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchitectureSummary {
    /// Architecture name.
    pub name: String,
    /// URL path segment.
    pub slug: String,
    /// Number of canonical instructions.
    pub count: usize,
}

/// Corpus-wide data derived from the enriched views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SiteData {
    /// Per-architecture summaries, sorted by architecture.
    pub architectures: Vec<ArchitectureSummary>,
    /// Pages to render: home, architecture indexes, then instruction pages.
    pub pages: Vec<String>,
    /// Search entries ordered by architecture, then mnemonic.
    #[serde(skip)]
    pub search: Vec<SearchEntry>,
}

impl SiteData {
    /// Derives site data from architecture views.
    pub fn from_views(views: &[ArchitectureView<'_>]) -> Self {
        let mut data = Self {
            pages: vec![String::new()],
            ..Self::default()
        };

        for view in views {
            data.architectures.push(ArchitectureSummary {
                name: view.name.clone(),
                slug: view.slug.clone(),
                count: view.instructions.len(),
            });
            data.pages.push(format!("{}/", view.slug));
        }

        for view in views {
            for inst in &view.instructions {
                data.pages.push(inst.rel_url.clone());
                data.search.push(SearchEntry {
                    label: format!("{} ({})", inst.instruction.mnemonic, view.name),
                    url: inst.rel_url.clone(),
                    mnemonic: inst.instruction.mnemonic.clone(),
                    summary: inst.instruction.summary.clone(),
                    arch: view.name.clone(),
                });
            }
        }

        data
    }

    /// Total instructions across architectures.
    pub fn instruction_count(&self) -> usize {
        self.architectures.iter().map(|a| a.count).sum()
    }
}

/// Serializes the renderer-facing output, keyed by path relative to the output directory.
///
/// # Errors
///
/// Returns [`PersistenceError::Encode`] if any artifact fails to serialize.
pub fn output_files(
    views: &[ArchitectureView<'_>],
    site: &SiteData,
) -> Result<Vec<(PathBuf, Vec<u8>)>, PersistenceError> {
    let mut files = Vec::with_capacity(views.len() + 2);
    files.push((PathBuf::from(SEARCH_FILE), encode_json(SEARCH_FILE, &site.search)?));
    files.push((PathBuf::from(SITE_FILE), encode_json(SITE_FILE, site)?));
    for view in views {
        let path = PathBuf::from(DATA_DIR).join(format!("{}.json", encode_file_stem(&view.slug)));
        files.push((path, encode_json(&view.name, view)?));
    }
    Ok(files)
}
