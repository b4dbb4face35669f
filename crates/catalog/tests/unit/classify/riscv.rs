//! # RISC-V Categorization
//!
//! Extension checks precede mnemonic checks, and exact lists precede the prefixes that
//! would otherwise swallow them (`FENCE` before `F`, `FLD` before `F`).

use rstest::rstest;

use isaref_core::classify::categorize;

use crate::common::{instruction, with_extension};

const ARCH: &str = "RISC-V";

#[rstest]
#[case("ADDI", "Base Integer")]
#[case("LUI", "Base Integer")]
#[case("LW", "Load & Store")]
#[case("SD", "Load & Store")]
#[case("BEQ", "Control Transfer")]
#[case("JALR", "Control Transfer")]
#[case("FENCE", "System")]
#[case("FENCE.I", "System")]
#[case("ECALL", "System")]
#[case("MRET", "Privileged")]
#[case("SFENCE.VMA", "Privileged")]
#[case("FLD", "Double-Precision Float")]
#[case("FADD.D", "Double-Precision Float")]
#[case("FLW", "Single-Precision Float")]
#[case("FADD.S", "Single-Precision Float")]
#[case("MULH", "Multiply & Divide")]
#[case("REMU", "Multiply & Divide")]
#[case("CSRRW", "CSR & Counters")]
#[case("RDCYCLE", "CSR & Counters")]
#[case("C.ADDI", "Compressed")]
#[case("AMOADD.W", "Atomic")]
#[case("LR.D", "Atomic")]
#[case("VADD.VV", "Vector")]
fn test_riscv_mnemonic_rules(#[case] mnemonic: &str, #[case] expected: &str) {
    assert_eq!(categorize(&instruction(ARCH, mnemonic, "")), expected);
}

#[rstest]
#[case("RV32I Base Integer", "ADDI", "Base Integer")]
#[case("Vector Extension", "ADDI", "Vector")]
#[case("V", "ADDI", "Vector")]
#[case("RV32C", "ADDI", "Base Integer")]
#[case("C", "ADDI", "Compressed")]
#[case("Atomic Instructions", "LW", "Atomic")]
#[case("Double-Precision Floating-Point", "FLW", "Double-Precision Float")]
#[case("RV64D", "FSW", "Double-Precision Float")]
#[case("Single-Precision Floating-Point", "FLD", "Single-Precision Float")]
#[case("Integer Multiplication and Division", "ADD", "Multiply & Divide")]
#[case("Zicsr", "ADD", "CSR & Counters")]
#[case("Machine-Level Privileged", "ADD", "Privileged")]
fn test_riscv_extension_rules(#[case] extension: &str, #[case] mnemonic: &str, #[case] expected: &str) {
    assert_eq!(categorize(&with_extension(ARCH, mnemonic, extension)), expected);
}

#[test]
fn test_riscv_extension_beats_mnemonic() {
    // MUL would be Multiply & Divide by mnemonic alone.
    assert_eq!(
        categorize(&with_extension(ARCH, "MUL", "Compressed")),
        "Compressed"
    );
}

#[test]
fn test_riscv_mnemonic_case_insensitive() {
    assert_eq!(categorize(&instruction(ARCH, "fence", "")), "System");
    assert_eq!(categorize(&instruction(ARCH, "fadd.d", "")), "Double-Precision Float");
}
