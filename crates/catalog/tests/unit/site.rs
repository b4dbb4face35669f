//! # Site Data Tests
//!
//! Search entries, architecture counts, page order, and the serialized output set.

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use serde_json::Value;

use isaref_core::Database;
use isaref_core::config::LinkConfig;
use isaref_core::enrich::enrich;
use isaref_core::site::{SearchEntry, SiteData, output_files};

use crate::common::instruction;

fn db() -> Database {
    vec![
        instruction("RISC-V", "SUB", "Subtract"),
        instruction("RISC-V", "ADD", "Add"),
        instruction("ARMv8-A", "ADC", "Add with carry"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_search_entries_ordered_by_arch_then_mnemonic() {
    let db = db();
    let out = enrich(&db, &LinkConfig::default()).unwrap();
    let site = SiteData::from_views(&out.views);

    let labels: Vec<_> = site.search.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["ADC (ARMv8-A)", "ADD (RISC-V)", "SUB (RISC-V)"]);
    assert_eq!(
        site.search[1],
        SearchEntry {
            label: "ADD (RISC-V)".to_string(),
            url: "risc-v/add/".to_string(),
            mnemonic: "ADD".to_string(),
            summary: "Add".to_string(),
            arch: "RISC-V".to_string(),
        }
    );
}

#[test]
fn test_architecture_counts() {
    let db = db();
    let out = enrich(&db, &LinkConfig::default()).unwrap();
    let site = SiteData::from_views(&out.views);

    let counts: Vec<_> = site
        .architectures
        .iter()
        .map(|a| (a.name.as_str(), a.slug.as_str(), a.count))
        .collect();
    assert_eq!(counts, vec![("ARMv8-A", "armv8-a", 1), ("RISC-V", "risc-v", 2)]);
    assert_eq!(site.instruction_count(), 3);
}

#[test]
fn test_page_list_order() {
    let db = db();
    let out = enrich(&db, &LinkConfig::default()).unwrap();
    let site = SiteData::from_views(&out.views);

    assert_eq!(
        site.pages,
        vec!["", "armv8-a/", "risc-v/", "armv8-a/adc/", "risc-v/add/", "risc-v/sub/"]
    );
}

#[test]
fn test_empty_site_has_home_page_only() {
    let site = SiteData::from_views(&[]);
    assert_eq!(site.pages, vec![String::new()]);
    assert!(site.search.is_empty());
}

#[test]
fn test_output_files_layout() {
    let db = db();
    let out = enrich(&db, &LinkConfig::default()).unwrap();
    let site = SiteData::from_views(&out.views);

    let files = output_files(&out.views, &site).unwrap();
    let paths: Vec<_> = files.iter().map(|(p, _)| p.clone()).collect();
    assert_eq!(
        paths,
        vec![
            PathBuf::from("search.json"),
            PathBuf::from("site.json"),
            PathBuf::from("data/armv8-a.json"),
            PathBuf::from("data/risc-v.json"),
        ]
    );

    let search: Value = serde_json::from_slice(&files[0].1).unwrap();
    assert_eq!(search.as_array().map(Vec::len), Some(3));

    let summary: Value = serde_json::from_slice(&files[1].1).unwrap();
    assert_eq!(summary["architectures"][1]["count"], 2);
    assert!(summary.get("search").is_none());

    let riscv: Value = serde_json::from_slice(&files[3].1).unwrap();
    assert_eq!(riscv["name"], "RISC-V");
    assert_eq!(riscv["instructions"][0]["slug"], "add");
}
