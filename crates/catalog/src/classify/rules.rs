//! Ordered categorization tables, one per architecture family.
//!
//! Tables are data: evaluation order is the slice order, and the first match wins. Extension
//! checks precede mnemonic checks; exact mnemonic lists precede the prefixes that would
//! otherwise swallow them.

use super::Matcher::{ExtensionKeyword, ExtensionToken, MnemonicIn, MnemonicPrefix, MnemonicSuffix};
use super::{Rule, RuleTable};
use crate::isa::Family;

// ══════════════════════════════════════════════════════════
// RISC-V
// ══════════════════════════════════════════════════════════

const RV_VECTOR: &str = "Vector";
const RV_COMPRESSED: &str = "Compressed";
const RV_ATOMIC: &str = "Atomic";
const RV_DOUBLE: &str = "Double-Precision Float";
const RV_SINGLE: &str = "Single-Precision Float";
const RV_MULDIV: &str = "Multiply & Divide";
const RV_CSR: &str = "CSR & Counters";
const RV_PRIV: &str = "Privileged";
const RV_SYSTEM: &str = "System";
const RV_MEMORY: &str = "Load & Store";
const RV_CONTROL: &str = "Control Transfer";

/// RISC-V rules. Default: `Base Integer`.
pub static RISCV: RuleTable = RuleTable {
    family: Family::RiscV,
    rules: &[
        Rule::new(ExtensionKeyword(&["vector"]), RV_VECTOR),
        Rule::new(
            ExtensionToken(&["v", "rvv", "zve32x", "zve32f", "zve64x", "zve64d"]),
            RV_VECTOR,
        ),
        Rule::new(ExtensionKeyword(&["compressed"]), RV_COMPRESSED),
        Rule::new(
            ExtensionToken(&["c", "zca", "zcb", "zcd", "zcf", "zcmp"]),
            RV_COMPRESSED,
        ),
        Rule::new(ExtensionKeyword(&["atomic"]), RV_ATOMIC),
        Rule::new(
            ExtensionToken(&["a", "zaamo", "zalrsc", "rv32a", "rv64a"]),
            RV_ATOMIC,
        ),
        // "double-precision floating-point" also contains "float".
        Rule::new(ExtensionKeyword(&["double"]), RV_DOUBLE),
        Rule::new(ExtensionToken(&["d", "rv32d", "rv64d"]), RV_DOUBLE),
        Rule::new(ExtensionKeyword(&["single", "float"]), RV_SINGLE),
        Rule::new(ExtensionToken(&["f", "rv32f", "rv64f"]), RV_SINGLE),
        Rule::new(ExtensionKeyword(&["multipl", "divis"]), RV_MULDIV),
        Rule::new(ExtensionToken(&["m", "rv32m", "rv64m", "zmmul"]), RV_MULDIV),
        Rule::new(ExtensionToken(&["zicsr", "zicntr", "zihpm"]), RV_CSR),
        Rule::new(
            ExtensionKeyword(&["privileged", "supervisor", "machine-level"]),
            RV_PRIV,
        ),
        Rule::new(MnemonicPrefix(&["C."]), RV_COMPRESSED),
        Rule::new(MnemonicPrefix(&["AMO", "LR.", "SC."]), RV_ATOMIC),
        Rule::new(
            MnemonicIn(&["FENCE", "FENCE.I", "FENCE.TSO", "ECALL", "EBREAK", "PAUSE"]),
            RV_SYSTEM,
        ),
        Rule::new(
            MnemonicIn(&["MRET", "SRET", "WFI", "SFENCE.VMA"]),
            RV_PRIV,
        ),
        Rule::new(MnemonicIn(&["FLD", "FSD"]), RV_DOUBLE),
        Rule::new(MnemonicSuffix(&[".D"]), RV_DOUBLE),
        Rule::new(MnemonicPrefix(&["F"]), RV_SINGLE),
        Rule::new(MnemonicPrefix(&["MUL", "DIV", "REM"]), RV_MULDIV),
        Rule::new(
            MnemonicPrefix(&["CSR", "RDCYCLE", "RDTIME", "RDINSTRET"]),
            RV_CSR,
        ),
        Rule::new(MnemonicPrefix(&["V"]), RV_VECTOR),
        Rule::new(
            MnemonicIn(&[
                "LB", "LH", "LW", "LD", "LBU", "LHU", "LWU", "SB", "SH", "SW", "SD",
            ]),
            RV_MEMORY,
        ),
        Rule::new(
            MnemonicIn(&[
                "BEQ", "BNE", "BLT", "BGE", "BLTU", "BGEU", "JAL", "JALR",
            ]),
            RV_CONTROL,
        ),
    ],
    default: "Base Integer",
};

// ══════════════════════════════════════════════════════════
// ARM
// ══════════════════════════════════════════════════════════

const ARM_SVE: &str = "SVE";
const ARM_SME: &str = "SME";
const ARM_CRYPTO: &str = "Cryptography";
const ARM_SIMD: &str = "Advanced SIMD";
const ARM_FP: &str = "Floating-Point";
const ARM_ATOMIC: &str = "Atomics";
const ARM_PAUTH: &str = "Pointer Authentication";
const ARM_MTE: &str = "Memory Tagging";
const ARM_SYSTEM: &str = "System";
const ARM_BRANCH: &str = "Branch";
const ARM_MEMORY: &str = "Load & Store";

/// ARM rules. Default: `Base Instruction`.
pub static ARM: RuleTable = RuleTable {
    family: Family::Arm,
    rules: &[
        Rule::new(ExtensionKeyword(&["sve"]), ARM_SVE),
        Rule::new(ExtensionKeyword(&["sme"]), ARM_SME),
        Rule::new(
            ExtensionKeyword(&["crypto", "aes", "sha", "sm3", "sm4"]),
            ARM_CRYPTO,
        ),
        Rule::new(ExtensionKeyword(&["neon", "simd"]), ARM_SIMD),
        Rule::new(ExtensionKeyword(&["float"]), ARM_FP),
        Rule::new(ExtensionToken(&["fp", "fp16", "vfp"]), ARM_FP),
        Rule::new(ExtensionKeyword(&["atomic"]), ARM_ATOMIC),
        Rule::new(ExtensionToken(&["lse", "lse2"]), ARM_ATOMIC),
        Rule::new(ExtensionKeyword(&["pointer auth", "pauth"]), ARM_PAUTH),
        Rule::new(ExtensionKeyword(&["memory tagging"]), ARM_MTE),
        Rule::new(ExtensionToken(&["mte", "mte2"]), ARM_MTE),
        // Atomic memory operations look like loads/stores by prefix.
        Rule::new(
            MnemonicPrefix(&[
                "LDADD", "LDCLR", "LDEOR", "LDSET", "LDSMAX", "LDSMIN", "LDUMAX", "LDUMIN",
                "STADD", "STCLR", "STEOR", "STSET", "SWP", "CAS",
            ]),
            ARM_ATOMIC,
        ),
        Rule::new(
            MnemonicPrefix(&[
                "PAC", "AUT", "XPAC", "RETAA", "RETAB", "BRAA", "BRAB", "BLRAA", "BLRAB",
            ]),
            ARM_PAUTH,
        ),
        Rule::new(
            MnemonicIn(&[
                "SVC", "HVC", "SMC", "MSR", "MRS", "ISB", "DSB", "DMB", "NOP", "WFI", "WFE",
                "SEV", "SEVL", "YIELD", "ERET", "HINT", "SYS", "SYSL", "CLREX", "BRK", "HLT",
            ]),
            ARM_SYSTEM,
        ),
        Rule::new(
            MnemonicIn(&[
                "B", "BL", "BR", "BLR", "RET", "CBZ", "CBNZ", "TBZ", "TBNZ",
            ]),
            ARM_BRANCH,
        ),
        Rule::new(MnemonicPrefix(&["B."]), ARM_BRANCH),
        Rule::new(MnemonicPrefix(&["LD", "ST", "PRFM"]), ARM_MEMORY),
        Rule::new(MnemonicPrefix(&["F", "SCVTF", "UCVTF"]), ARM_FP),
    ],
    default: "Base Instruction",
};

// ══════════════════════════════════════════════════════════
// Power ISA
// ══════════════════════════════════════════════════════════

const PPC_VSX: &str = "VSX";
const PPC_VMX: &str = "Vector (VMX)";
const PPC_DFP: &str = "Decimal Floating-Point";
const PPC_FP: &str = "Floating-Point";
const PPC_TM: &str = "Transactional Memory";
const PPC_SYSTEM: &str = "System";
const PPC_TRAP: &str = "Trap";
const PPC_SPR: &str = "Special Purpose Registers";
const PPC_MEMORY: &str = "Load & Store";
const PPC_BRANCH: &str = "Branch";
const PPC_CR: &str = "Condition Register";

/// Power ISA rules. Default: `Fixed-Point`.
pub static POWER: RuleTable = RuleTable {
    family: Family::Power,
    rules: &[
        Rule::new(ExtensionKeyword(&["vsx", "vector-scalar"]), PPC_VSX),
        Rule::new(ExtensionKeyword(&["altivec", "vmx", "vector"]), PPC_VMX),
        // "decimal floating-point" also contains "float".
        Rule::new(ExtensionKeyword(&["decimal"]), PPC_DFP),
        Rule::new(ExtensionKeyword(&["float", "fpu"]), PPC_FP),
        Rule::new(ExtensionKeyword(&["transactional"]), PPC_TM),
        Rule::new(ExtensionToken(&["htm", "tm"]), PPC_TM),
        Rule::new(
            MnemonicPrefix(&["XS", "XV", "XX", "LXV", "STXV", "LXS", "STXS"]),
            PPC_VSX,
        ),
        Rule::new(
            MnemonicPrefix(&["V", "LVX", "STVX", "LVE", "STVE", "LVSL", "LVSR"]),
            PPC_VMX,
        ),
        // LWSYNC would otherwise fall into the `L` load prefix.
        Rule::new(
            MnemonicIn(&[
                "SC", "SCV", "RFID", "HRFID", "RFSCV", "SYNC", "ISYNC", "LWSYNC", "PTESYNC",
                "EIEIO", "TLBIE", "TLBIEL", "TLBSYNC", "SLBIE", "SLBIA", "MSGSND", "MSGCLR",
            ]),
            PPC_SYSTEM,
        ),
        Rule::new(MnemonicIn(&["TW", "TWI", "TD", "TDI"]), PPC_TRAP),
        Rule::new(MnemonicPrefix(&["LF", "STF"]), PPC_FP),
        Rule::new(MnemonicPrefix(&["F", "MFFS", "MTFS"]), PPC_FP),
        Rule::new(MnemonicPrefix(&["MT", "MF"]), PPC_SPR),
        Rule::new(MnemonicPrefix(&["L", "ST"]), PPC_MEMORY),
        Rule::new(MnemonicPrefix(&["B"]), PPC_BRANCH),
        Rule::new(MnemonicPrefix(&["CR", "MCRF"]), PPC_CR),
    ],
    default: "Fixed-Point",
};

// ══════════════════════════════════════════════════════════
// x86
// ══════════════════════════════════════════════════════════

const X86_AVX512: &str = "AVX-512";
const X86_AVX: &str = "AVX";
const X86_SSE: &str = "SSE";
const X86_MMX: &str = "MMX";
const X86_X87: &str = "x87 FPU";
const X86_CRYPTO: &str = "Cryptography";
const X86_VIRT: &str = "Virtualization";
const X86_SYSTEM: &str = "System";
const X86_CONTROL: &str = "Control Transfer";
const X86_STRING: &str = "String";

/// x86 rules. Default: `General Purpose`.
pub static X86: RuleTable = RuleTable {
    family: Family::X86,
    rules: &[
        // "avx-512" also contains "avx".
        Rule::new(ExtensionKeyword(&["avx-512", "avx512"]), X86_AVX512),
        Rule::new(ExtensionKeyword(&["avx"]), X86_AVX),
        Rule::new(ExtensionKeyword(&["sse"]), X86_SSE),
        Rule::new(ExtensionKeyword(&["mmx"]), X86_MMX),
        Rule::new(ExtensionKeyword(&["x87"]), X86_X87),
        Rule::new(ExtensionToken(&["fpu"]), X86_X87),
        Rule::new(ExtensionKeyword(&["aes", "sha", "crypto"]), X86_CRYPTO),
        Rule::new(ExtensionKeyword(&["vmx", "svm", "virtualization"]), X86_VIRT),
        // VERR/VERW would otherwise fall into the `V` AVX prefix.
        Rule::new(
            MnemonicIn(&[
                "SYSCALL", "SYSRET", "SYSENTER", "SYSEXIT", "INT", "INT3", "INTO", "IRET",
                "IRETD", "IRETQ", "HLT", "CPUID", "RDMSR", "WRMSR", "RDTSC", "RDTSCP", "LGDT",
                "SGDT", "LIDT", "SIDT", "LLDT", "SLDT", "LTR", "STR", "INVLPG", "VERR", "VERW",
                "CLI", "STI",
            ]),
            X86_SYSTEM,
        ),
        Rule::new(MnemonicPrefix(&["V"]), X86_AVX),
        Rule::new(MnemonicPrefix(&["F"]), X86_X87),
        Rule::new(MnemonicPrefix(&["J"]), X86_CONTROL),
        Rule::new(
            MnemonicIn(&["CALL", "RET", "LOOP", "LOOPE", "LOOPNE", "ENTER", "LEAVE"]),
            X86_CONTROL,
        ),
        Rule::new(MnemonicPrefix(&["REP"]), X86_STRING),
        // Exact forms only: MOVSX/MOVSXD are general-purpose moves.
        Rule::new(
            MnemonicIn(&[
                "MOVS", "MOVSB", "MOVSW", "MOVSD", "MOVSQ", "CMPS", "CMPSB", "CMPSW", "CMPSD",
                "CMPSQ", "SCAS", "SCASB", "SCASW", "SCASD", "SCASQ", "LODS", "LODSB", "LODSW",
                "LODSD", "LODSQ", "STOS", "STOSB", "STOSW", "STOSD", "STOSQ",
            ]),
            X86_STRING,
        ),
    ],
    default: "General Purpose",
};

/// Fallback for unrecognized architectures: no rules, default `General`.
pub static GENERIC: RuleTable = RuleTable {
    family: Family::Generic,
    rules: &[],
    default: "General",
};
