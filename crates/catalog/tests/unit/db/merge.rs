//! # Merge Tests
//!
//! `Database::merge` is a pure transform from (persisted baseline, new inputs) to a new
//! snapshot. These tests pin duplicate resolution, per-architecture scoping, and ordering.

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use serde_json::json;

use isaref_core::Database;
use isaref_core::ingest::{Candidate, Provenance};
use isaref_core::stats::UNKNOWN_ARCH;

use crate::common::{candidates, instruction, record};

fn baseline(records: Vec<serde_json::Value>) -> Vec<Candidate> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| Candidate {
            origin: PathBuf::from("db/RISC-V.json"),
            index,
            provenance: Provenance::Store,
            record,
        })
        .collect()
}

#[test]
fn test_merge_single_record() {
    let inputs = candidates("a.json", vec![record("RISC-V", "ADDI", "Add immediate", "a|b")]);
    let (db, stats) = Database::merge(&[], &inputs);

    assert_eq!(db.len(), 1);
    assert_eq!(db.get("RISC-V").unwrap()[0].mnemonic, "ADDI");
    assert_eq!(stats.arch("RISC-V").accepted, 1);
    assert_eq!(stats.arch("RISC-V").added, 1);
}

#[test]
fn test_merge_duplicate_keeps_least_record() {
    let forward = candidates(
        "a.json",
        vec![
            record("RISC-V", "ADD", "second", "a|b"),
            record("RISC-V", "ADD", "first", "a|b"),
        ],
    );
    let mut reversed = forward.clone();
    reversed.reverse();

    for inputs in [forward, reversed] {
        let (db, stats) = Database::merge(&[], &inputs);
        let list = db.get("RISC-V").unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].summary, "first");
        assert_eq!(stats.arch("RISC-V").duplicates, 1);
    }
}

#[test]
fn test_merge_baseline_and_inputs_weigh_equally() {
    let stored_first = baseline(vec![record("RISC-V", "ADD", "from A", "a|b")]);
    let edited_first = candidates("b.json", vec![record("RISC-V", "ADD", "from B", "a|b")]);
    let (a, stats) = Database::merge(&stored_first, &edited_first);

    let stored_second = baseline(vec![record("RISC-V", "ADD", "from B", "a|b")]);
    let edited_second = candidates("a.json", vec![record("RISC-V", "ADD", "from A", "a|b")]);
    let (b, _) = Database::merge(&stored_second, &edited_second);

    assert_eq!(a, b);
    assert_eq!(a.get("RISC-V").unwrap()[0].summary, "from A");
    assert_eq!(stats.arch("RISC-V").added, 0);
    assert_eq!(stats.arch("RISC-V").duplicates, 1);
}

#[test]
fn test_merge_counts_only_new_signatures_as_added() {
    let base = baseline(vec![record("RISC-V", "ADD", "Add", "a|b")]);
    let inputs = candidates(
        "a.json",
        vec![
            record("RISC-V", "ADD", "Add", "a|b"),
            record("RISC-V", "SUB", "Subtract", "a|b"),
        ],
    );
    let (db, stats) = Database::merge(&base, &inputs);

    assert_eq!(db.instruction_count(), 2);
    assert_eq!(stats.arch("RISC-V").accepted, 2);
    assert_eq!(stats.arch("RISC-V").added, 1);
}

#[test]
fn test_merge_same_signature_in_two_architectures() {
    let inputs = candidates(
        "a.json",
        vec![
            record("RISC-V", "ADD", "Add", "a|b"),
            record("ARMv8-A", "ADD", "Add", "a|b"),
        ],
    );
    let (db, _) = Database::merge(&[], &inputs);

    assert_eq!(db.len(), 2);
    assert_eq!(db.instruction_count(), 2);
}

#[test]
fn test_merge_rejects_invalid_records() {
    let inputs = candidates(
        "a.json",
        vec![
            json!({ "mnemonic": "ADD", "architecture": "RISC-V", "encoding": {} }),
            json!({ "mnemonic": "SUB" }),
            record("RISC-V", "XOR", "Xor", "a|b"),
        ],
    );
    let (db, stats) = Database::merge(&[], &inputs);

    assert_eq!(db.instruction_count(), 1);
    assert_eq!(stats.arch("RISC-V").rejected, 1);
    assert_eq!(stats.arch(UNKNOWN_ARCH).rejected, 1);
    assert_eq!(stats.diagnostics.len(), 2);
}

#[test]
fn test_merge_sorts_canonically() {
    let inputs = candidates(
        "a.json",
        vec![
            record("RISC-V", "XOR", "Exclusive or", "a"),
            record("RISC-V", "ADD", "Add", "a"),
            record("RISC-V", "SUB", "Subtract", "a"),
        ],
    );
    let (db, _) = Database::merge(&[], &inputs);
    let names: Vec<_> = db
        .get("RISC-V")
        .unwrap()
        .iter()
        .map(|i| i.mnemonic.as_str())
        .collect();
    assert_eq!(names, vec!["ADD", "SUB", "XOR"]);
}

#[test]
fn test_merge_independent_of_input_order() {
    let forward = candidates(
        "a.json",
        vec![
            json!({ "mnemonic": "ADD", "architecture": "ARMv8-A", "summary": "w", "syntax": "ADD <Wd>", "encoding": {} }),
            json!({ "mnemonic": "ADD", "architecture": "ARMv8-A", "summary": "x", "syntax": "ADD <Xd>", "encoding": {} }),
        ],
    );
    let mut reversed = forward.clone();
    reversed.reverse();

    let (a, _) = Database::merge(&[], &forward);
    let (b, _) = Database::merge(&[], &reversed);
    assert_eq!(a, b);
}

#[test]
fn test_database_from_iterator_dedups() {
    let db: Database = vec![
        instruction("RISC-V", "SUB", "x"),
        instruction("RISC-V", "ADD", "x"),
        instruction("RISC-V", "ADD", "y"),
    ]
    .into_iter()
    .collect();

    assert_eq!(db.instruction_count(), 2);
    assert_eq!(db.get("RISC-V").unwrap()[0].mnemonic, "ADD");
    assert!(db.get("ARMv8-A").is_none());
}

#[test]
fn test_database_architectures_sorted() {
    let db: Database = vec![
        instruction("x86-64", "MOV", ""),
        instruction("ARMv8-A", "ADD", ""),
        instruction("RISC-V", "ADD", ""),
    ]
    .into_iter()
    .collect();
    let names: Vec<_> = db.architectures().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["ARMv8-A", "RISC-V", "x86-64"]);
}
