//! End-to-end build orchestration.
//!
//! A build runs in two phases:
//! 1. **Consolidate:** Load the persisted store and the input documents, then merge them into
//!    a new [`Database`]. This phase is pure apart from reading files.
//! 2. **Publish:** Enrich the database, then stage the renderer-facing output and the store
//!    files as one batch. Renames start only once every file was written, so neither a render
//!    nor a store failure leaves new output next to an old store.
//!
//! Dry runs execute both phases without writing anything.

use std::mem;

use crate::common::Error;
use crate::config::Config;
use crate::db::Database;
use crate::db::store::{self, StagedWrite};
use crate::enrich;
use crate::ingest::{Provenance, loader};
use crate::site::{self, SiteData};
use crate::stats::BuildStats;

/// What a completed build produced.
#[derive(Debug)]
pub struct BuildOutcome {
    /// The new canonical store.
    pub database: Database,
    /// Counters and diagnostics.
    pub stats: BuildStats,
    /// Corpus-wide renderer data.
    pub site: SiteData,
    /// Whether anything was written to disk.
    pub written: bool,
}

/// Loads the persisted store and the inputs and merges them.
///
/// Diagnostics are ordered as observed: document findings first, then record findings.
///
/// # Errors
///
/// Returns [`Error::Store`] for an unreadable store file, [`Error::Io`] when a directory cannot
/// be listed, and [`Error::Strict`] in strict mode when any document or record failed.
pub fn consolidate(config: &Config) -> Result<(Database, BuildStats), Error> {
    let baseline = store::load_baseline(&config.paths.db_dir)?;
    let inputs = loader::load_dir(
        &config.paths.input_dir,
        &config.ingest.extension,
        &config.ingest.record_key,
        Provenance::Input,
    )?;
    tracing::info!(
        baseline = baseline.candidates.len(),
        inputs = inputs.candidates.len(),
        documents = inputs.documents,
        "documents loaded"
    );

    let (database, mut stats) = Database::merge(&baseline.candidates, &inputs.candidates);

    let record_diagnostics = mem::take(&mut stats.diagnostics);
    stats.documents_read = baseline.documents + inputs.documents;
    for failure in &inputs.failures {
        stats.record_parse_failure(failure);
    }
    stats.diagnostics.extend(baseline.diagnostics);
    stats.diagnostics.extend(inputs.diagnostics);
    stats.diagnostics.extend(record_diagnostics);

    if config.build.strict {
        let failures = stats.strict_failures();
        if !failures.is_empty() {
            tracing::error!(count = failures.len(), "strict mode violation");
            return Err(Error::Strict { failures });
        }
    }

    Ok((database, stats))
}

/// Runs a full build.
///
/// # Errors
///
/// Everything [`consolidate`] returns, plus [`Error::Linker`] when the cross-reference pattern
/// cannot be built, [`Error::Render`] when the output cannot be staged, and
/// [`Error::Persistence`] when the store cannot be staged or the batch cannot be committed.
pub fn run(config: &Config) -> Result<BuildOutcome, Error> {
    let (database, mut stats) = consolidate(config)?;

    let (site, files) = {
        let enrichment = enrich::enrich(&database, &config.links)?;
        stats.diagnostics.extend(enrichment.diagnostics.iter().cloned());
        let site = SiteData::from_views(&enrichment.views);
        let files = if config.build.dry_run {
            None
        } else {
            Some(site::output_files(&enrichment.views, &site).map_err(Error::Render)?)
        };
        (site, files)
    };
    tracing::info!(
        architectures = site.architectures.len(),
        pages = site.pages.len(),
        "site data prepared"
    );

    let Some(files) = files else {
        tracing::info!("dry run: nothing written");
        return Ok(BuildOutcome {
            database,
            stats,
            site,
            written: false,
        });
    };

    let mut batch = StagedWrite::new();
    batch
        .stage(&config.paths.output_dir, files)
        .map_err(Error::Render)?;
    database.stage(&config.paths.db_dir, &mut batch)?;
    batch.commit()?;
    tracing::info!(
        output = %config.paths.output_dir.display(),
        db = %config.paths.db_dir.display(),
        "renderer output and store committed"
    );

    Ok(BuildOutcome {
        database,
        stats,
        site,
        written: true,
    })
}
