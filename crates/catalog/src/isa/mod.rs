//! Instruction Set Architecture reference model.
//!
//! Contains the authored instruction record, its duplicate-detection signature, and the
//! normalization of raw bit-pattern strings into named fields.
//!
//! # Contents
//!
//! * `instruction`: The canonical record, its encoding block, and [`Signature`].
//! * `encoding`: Pipe-delimited bit-pattern parsing into [`EncodingField`]s.
//! * `family`: Architecture family detection from an architecture name.

/// Bit-pattern normalization.
pub mod encoding;

/// Architecture family detection.
pub mod family;

/// Authored instruction record and signature.
pub mod instruction;

pub use encoding::EncodingField;
pub use family::Family;
pub use instruction::{Encoding, Instruction, Signature};
