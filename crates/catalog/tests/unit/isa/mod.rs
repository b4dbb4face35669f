//! # ISA Model Tests



/// Signatures, canonical order, and store serialization of records.
pub mod instruction;
