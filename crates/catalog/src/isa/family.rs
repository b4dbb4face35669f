//! Architecture family detection.

use std::fmt;

use serde::{Serialize, Serializer};

/// A group of related instruction-set architectures sharing one categorization table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Family {
    /// RISC-V (RV32/RV64 and extensions).
    RiscV,
    /// ARM (A32/T32/A64).
    Arm,
    /// Power ISA / PowerPC.
    Power,
    /// x86 and x86-64.
    X86,
    /// Anything unrecognized.
    Generic,
}

/// Name fragments identifying each family, checked in this order.
const KEYWORDS: [(Family, &[&str]); 4] = [
    (Family::RiscV, &["risc-v", "riscv", "rv32", "rv64"]),
    (Family::Arm, &["arm", "aarch"]),
    (Family::Power, &["power", "ppc"]),
    (Family::X86, &["x86", "amd64", "ia-32", "intel 64"]),
];

impl Family {
    /// Detects the family from an architecture name, case-insensitively.
    ///
    /// The first family with a matching keyword wins; no match yields [`Family::Generic`].
    pub fn detect(architecture: &str) -> Self {
        let lower = architecture.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(_, keys)| keys.iter().any(|k| lower.contains(k)))
            .map_or(Self::Generic, |(family, _)| *family)
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::RiscV => "RISC-V",
            Self::Arm => "ARM",
            Self::Power => "PowerISA",
            Self::X86 => "x86",
            Self::Generic => "Generic",
        }
    }
}

impl Serialize for Family {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
