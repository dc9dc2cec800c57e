//! Error types for pitch parsing, structure building, and formatting.

use thiserror::Error;

/// Errors that can occur while parsing notes or building structures.
///
/// All errors are surfaced at the point of detection; no operation returns a
/// partially-constructed value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TheoryError {
    /// The symbol is neither a canonical pitch-class symbol nor a known
    /// accidental shorthand.
    #[error("invalid note '{symbol}': not a canonical pitch class or accidental shorthand")]
    InvalidNote { symbol: String },

    /// A structure-building routine was invoked with an incompatible tag.
    #[error("type mismatch: {expected} asked to build {requested}")]
    TypeMismatch {
        expected: &'static str,
        requested: &'static str,
    },

    /// The requested minor-scale variant has no defined offset table.
    #[error("unsupported minor variant '{name}' (expected natural, harmonic, or melodic)")]
    UnsupportedVariant { name: String },

    /// Formatting was requested for an empty member sequence.
    #[error("cannot format an empty structure")]
    EmptyStructure,
}
