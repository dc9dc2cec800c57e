//! Compound interval structures built from a tonic.
//!
//! Each structure owns a copy of its tonic reset to the original value and an
//! ordered member list computed once at construction. Triad members are each
//! measured from the reset root; tetrachord and minor-scale members are built
//! from a running pitch. Both patterns are kept exactly as documented, not
//! generalized either way.

mod builder;
mod scale;
mod tetrachord;
mod triad;

#[cfg(test)]
mod tests;

pub use builder::{build_structure, StructureKind};
pub use scale::{MinorVariant, Scale, ScaleKind};
pub use tetrachord::Tetrachord;
pub use triad::{Triad, TriadQuality};
