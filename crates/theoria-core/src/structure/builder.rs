//! The tag-keyed structure-building entry point.

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::pitch::PitchClass;

use super::scale::{MinorVariant, Scale, ScaleKind};
use super::tetrachord::Tetrachord;
use super::triad::{Triad, TriadQuality};

/// Tag selecting which structure [`build_structure`] produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "structure", rename_all = "snake_case")]
pub enum StructureKind {
    Triad {
        quality: TriadQuality,
    },
    Tetrachord,
    Scale {
        kind: ScaleKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        variant: Option<MinorVariant>,
    },
}

/// Build the ordered member sequence for `kind` on `tonic`.
///
/// The single entry point keyed by `(tonic, structure type, variant)`. Member
/// zero is always the tonic at its original value; the caller's value is
/// never mutated.
///
/// # Errors
/// Returns [`TheoryError::TypeMismatch`] when a minor variant is paired with
/// a major scale tag.
pub fn build_structure(
    tonic: &PitchClass,
    kind: StructureKind,
) -> Result<Vec<PitchClass>, TheoryError> {
    match kind {
        StructureKind::Triad { quality } => Ok(Triad::new(tonic, quality).notes().to_vec()),
        StructureKind::Tetrachord => Ok(Tetrachord::new(tonic).notes().to_vec()),
        StructureKind::Scale { kind, variant } => {
            Ok(Scale::build(tonic, kind, variant)?.notes().to_vec())
        }
    }
}
