//! # Inspection Tests

use pretty_assertions::assert_eq;

use isaref_core::Database;
use isaref_core::inspect::inspect;
use isaref_core::isa::{Encoding, Instruction};

use crate::common::instruction;

fn db() -> Database {
    let mut reg = instruction("ARMv8-A", "ADC", "Add with carry");
    reg.syntax = Some("ADC <Wd>, <Wn>, <Wm>".to_string());
    reg.operands = vec!["Wd".to_string(), "Wn".to_string(), "Wm".to_string()];
    reg.encoding.binary_pattern = Some("sf|0|0|11010000|Rm|000000|Rn|Rd".to_string());

    let bare = Instruction {
        syntax: Some("ADC <Xd>, <Xn>, <Xm>".to_string()),
        encoding: Encoding::default(),
        ..instruction("ARMv8-A", "ADC", "Add with carry")
    };

    vec![reg, bare, instruction("ARMv8-A", "ADD", "Add")]
        .into_iter()
        .collect()
}

#[test]
fn test_inspect_reports_each_variant() {
    let checks = inspect(&db(), "ARMv8-A", "adc");
    assert_eq!(checks.len(), 2);

    let w = &checks[0];
    assert_eq!(w.syntax.as_deref(), Some("ADC <Wd>, <Wn>, <Wm>"));
    assert_eq!(w.operand_count, 3);
    assert_eq!(w.first_operand.as_deref(), Some("Wd"));
    assert!(w.has_pattern());
    assert_eq!(w.field_count, 8);

    let x = &checks[1];
    assert_eq!(x.operand_count, 0);
    assert_eq!(x.first_operand, None);
    assert!(!x.has_pattern());
    assert_eq!(x.field_count, 0);
}

#[test]
fn test_inspect_unknown_mnemonic_or_arch() {
    assert!(inspect(&db(), "ARMv8-A", "sbc").is_empty());
    assert!(inspect(&db(), "RISC-V", "adc").is_empty());
}

#[test]
fn test_inspect_display() {
    let checks = inspect(&db(), "ARMv8-A", "ADC");
    let text = checks[1].to_string();
    assert!(text.contains("operands: none"));
    assert!(text.contains("pattern:  missing"));
}
