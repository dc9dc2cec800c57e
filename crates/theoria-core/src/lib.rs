//! Theoria Core - Western Music Theory Primitives
//!
//! This crate models pitch classes, triads, tetrachords, and scales as small
//! composable value objects with transposition operations. Everything is pure
//! computation on the twelve-tone circular axis: no I/O, no audio, no rhythm.
//!
//! # Features
//!
//! - **Pitch classes**: the twelve enharmonic-grouped symbols on a fixed
//!   circular ordering, with mod-12 raise/lower arithmetic and reset to the
//!   construction-time identity
//! - **Enharmonic resolution**: accidental shorthands like `"Bb"` and `"A#"`
//!   resolve to the same canonical symbol through an explicit alias table
//! - **Structures**: major/minor triads, the whole-whole-half tetrachord, and
//!   major/minor scales built by chaining fixed interval sequences from a tonic
//! - **Formatting**: hyphen-joined rendering of member sequences
//!
//! # Example
//!
//! ```
//! use theoria_core::{format_members, PitchClass, Scale, ScaleKind};
//!
//! let tonic = PitchClass::from_symbol("C")?;
//! let scale = Scale::build(&tonic, ScaleKind::Major, None)?;
//! assert_eq!(
//!     format_members(scale.notes())?,
//!     "C - D - E - F - G - A - B - C",
//! );
//! # Ok::<(), theoria_core::TheoryError>(())
//! ```
//!
//! # Module Structure
//!
//! - [`pitch`]: the canonical axis and the `PitchClass` value type
//! - [`structure`]: triads, tetrachords, scales, and the tag-keyed builder
//! - [`format`]: member-sequence rendering
//! - [`error`]: the error taxonomy

pub mod error;
pub mod format;
pub mod pitch;
pub mod structure;

// Re-export main types
pub use error::TheoryError;
pub use format::format_members;
pub use pitch::{PitchClass, NOTES};
pub use structure::{
    build_structure, MinorVariant, Scale, ScaleKind, StructureKind, Tetrachord, Triad,
    TriadQuality,
};

/// Crate version for identification.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
