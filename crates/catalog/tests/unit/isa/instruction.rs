//! # Instruction Record Tests
//!
//! Signatures, canonical ordering, and authored-only serialization.

use std::cmp::Ordering;

use pretty_assertions::assert_eq;
use serde_json::json;

use isaref_core::isa::{Encoding, Instruction};

use crate::common::instruction;

#[test]
fn test_signature_trims_and_defaults_empty() {
    let mut a = instruction("RISC-V", "ADD", "Add");
    a.syntax = Some(" add rd, rs1, rs2 ".to_string());
    let sig = a.signature();
    assert_eq!(sig.mnemonic, "ADD");
    assert_eq!(sig.syntax, "add rd, rs1, rs2");
    assert_eq!(sig.hex_opcode, "");

    let mut b = a.clone();
    b.syntax = None;
    let mut c = a.clone();
    c.syntax = Some("   ".to_string());
    assert_eq!(b.signature(), c.signature());
}

#[test]
fn test_signature_ignores_summary() {
    let a = instruction("RISC-V", "ADD", "first");
    let b = instruction("RISC-V", "ADD", "second");
    assert_eq!(a.signature(), b.signature());
}

#[test]
fn test_canonical_order_mnemonic_then_signature() {
    let mut x = instruction("ARMv8-A", "ADD", "");
    x.syntax = Some("ADD <Xd>".to_string());
    let mut w = instruction("ARMv8-A", "ADD", "");
    w.syntax = Some("ADD <Wd>".to_string());
    let adc = instruction("ARMv8-A", "ADC", "");

    assert_eq!(adc.canonical_cmp(&w), Ordering::Less);
    assert_eq!(w.canonical_cmp(&x), Ordering::Less);
    assert_eq!(x.canonical_cmp(&x), Ordering::Equal);
}

#[test]
fn test_serialization_omits_absent_optionals() {
    let inst = Instruction {
        encoding: Encoding {
            binary_pattern: Some("a|b".to_string()),
            pattern: None,
            hex_opcode: None,
        },
        ..instruction("RISC-V", "ADD", "Add")
    };
    let value = serde_json::to_value(&inst).unwrap();
    assert_eq!(
        value,
        json!({
            "mnemonic": "ADD",
            "architecture": "RISC-V",
            "summary": "Add",
            "operands": [],
            "encoding": { "binary_pattern": "a|b" },
        })
    );
}

#[test]
fn test_deserialization_round_trips_store_form() {
    let mut inst = instruction("RISC-V", "ADDI", "Add immediate");
    inst.pseudocode = Some("x[rd] = x[rs1] + imm".to_string());
    inst.operands = vec!["rd".to_string(), "rs1".to_string()];

    let text = serde_json::to_string(&inst).unwrap();
    let back: Instruction = serde_json::from_str(&text).unwrap();
    assert_eq!(back, inst);
}
