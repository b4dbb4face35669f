//! Build statistics and reporting.
//!
//! This module tracks what happened to every candidate during a build. It provides:
//! 1. **Per-architecture counters:** Accepted, newly added, rejected, and duplicate records.
//! 2. **Document counters:** Documents read and documents skipped.
//! 3. **Diagnostics:** Every recoverable finding, in the order it was observed.

use std::collections::BTreeMap;
use std::time::Instant;

use serde::Serialize;

use crate::common::{Diagnostic, ParseError, ValidationError};

/// Bucket used for rejected records that carry no architecture.
pub const UNKNOWN_ARCH: &str = "(unknown)";

/// Counters for one architecture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ArchCounts {
    /// Records in the canonical store after the merge.
    pub accepted: usize,
    /// Accepted records that came from input documents rather than the persisted store.
    pub added: usize,
    /// Records excluded by validation.
    pub rejected: usize,
    /// Records dropped as exact duplicates.
    pub duplicates: usize,
}

/// Statistics for one build.
#[derive(Debug, Clone)]
pub struct BuildStats {
    start_time: Instant,
    /// Per-architecture counters, sorted by architecture name.
    pub archs: BTreeMap<String, ArchCounts>,
    /// Documents that parsed (store and input).
    pub documents_read: usize,
    /// Documents skipped because of a parse error.
    pub documents_skipped: usize,
    /// Recoverable findings.
    pub diagnostics: Vec<Diagnostic>,
}

impl Default for BuildStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            archs: BTreeMap::new(),
            documents_read: 0,
            documents_skipped: 0,
            diagnostics: Vec::new(),
        }
    }
}

impl BuildStats {
    /// Mutable counters for an architecture, created on first use.
    pub fn arch_mut(&mut self, arch: &str) -> &mut ArchCounts {
        self.archs.entry(arch.to_string()).or_default()
    }

    /// Counters for an architecture, zero if never seen.
    pub fn arch(&self, arch: &str) -> ArchCounts {
        self.archs.get(arch).copied().unwrap_or_default()
    }

    /// Records a skipped document.
    pub fn record_parse_failure(&mut self, err: &ParseError) {
        self.documents_skipped += 1;
        self.diagnostics.push(Diagnostic::from(err));
    }

    /// Records a rejected record under its architecture, or [`UNKNOWN_ARCH`].
    pub fn record_rejection(&mut self, architecture: Option<&str>, err: &ValidationError) {
        self.arch_mut(architecture.unwrap_or(UNKNOWN_ARCH)).rejected += 1;
        self.diagnostics.push(Diagnostic::from(err));
    }

    /// Total over all architectures.
    pub fn totals(&self) -> ArchCounts {
        self.archs.values().fold(ArchCounts::default(), |acc, c| ArchCounts {
            accepted: acc.accepted + c.accepted,
            added: acc.added + c.added,
            rejected: acc.rejected + c.rejected,
            duplicates: acc.duplicates + c.duplicates,
        })
    }

    /// Diagnostics that strict mode treats as fatal.
    pub fn strict_failures(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.kind.is_strict_failure())
            .cloned()
            .collect()
    }

    /// Prints the summary table to stdout.
    pub fn print(&self) {
        let elapsed = self.start_time.elapsed();
        let totals = self.totals();

        println!("\n==========================================================");
        println!("BUILD SUMMARY");
        println!("==========================================================");
        println!(
            "documents:  {} read, {} skipped   ({:.3}s)",
            self.documents_read,
            self.documents_skipped,
            elapsed.as_secs_f64()
        );
        println!("----------------------------------------------------------");
        println!(
            "{:<24} {:>8} {:>8} {:>8} {:>10}",
            "architecture", "accepted", "added", "rejected", "duplicates"
        );
        for (arch, c) in &self.archs {
            println!(
                "{:<24} {:>8} {:>8} {:>8} {:>10}",
                arch, c.accepted, c.added, c.rejected, c.duplicates
            );
        }
        println!("----------------------------------------------------------");
        println!(
            "{:<24} {:>8} {:>8} {:>8} {:>10}",
            "total", totals.accepted, totals.added, totals.rejected, totals.duplicates
        );

        if !self.diagnostics.is_empty() {
            println!("\ndiagnostics ({}):", self.diagnostics.len());
            for diag in &self.diagnostics {
                println!("  {diag}");
            }
        }
        println!("==========================================================");
    }
}
