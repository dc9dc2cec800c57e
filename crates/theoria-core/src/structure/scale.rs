//! Eight-note scales spanning the octave.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::format::join_symbols;
use crate::pitch::PitchClass;

use super::tetrachord::Tetrachord;

/// Kind of scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleKind {
    Major,
    Minor,
}

impl ScaleKind {
    /// Look up a kind by its lowercase name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "major" => Some(ScaleKind::Major),
            "minor" => Some(ScaleKind::Minor),
            _ => None,
        }
    }

    /// The lowercase name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            ScaleKind::Major => "major",
            ScaleKind::Minor => "minor",
        }
    }
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Variant of the minor scale, selecting its step pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinorVariant {
    #[default]
    Natural,
    Harmonic,
    /// Ascending form.
    Melodic,
}

impl MinorVariant {
    /// Look up a variant by its lowercase name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "natural" => Some(MinorVariant::Natural),
            "harmonic" => Some(MinorVariant::Harmonic),
            "melodic" => Some(MinorVariant::Melodic),
            _ => None,
        }
    }

    /// The lowercase name of this variant.
    pub fn name(self) -> &'static str {
        match self {
            MinorVariant::Natural => "natural",
            MinorVariant::Harmonic => "harmonic",
            MinorVariant::Melodic => "melodic",
        }
    }

    /// Running semitone steps between consecutive degrees.
    ///
    /// Cumulative from the tonic: natural [0,2,3,5,7,8,10,12],
    /// harmonic [0,2,3,5,7,8,11,12], melodic [0,2,3,5,7,9,11,12].
    fn steps(self) -> [u32; 7] {
        match self {
            MinorVariant::Natural => [2, 1, 2, 2, 1, 2, 2],
            MinorVariant::Harmonic => [2, 1, 2, 2, 1, 3, 1],
            MinorVariant::Melodic => [2, 1, 2, 2, 2, 2, 1],
        }
    }
}

impl fmt::Display for MinorVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MinorVariant {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::by_name(s).ok_or_else(|| TheoryError::UnsupportedVariant {
            name: s.to_string(),
        })
    }
}

/// An eight-note scale; the last member coincides with the tonic one octave
/// up, which on the pitch-class axis is the tonic itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scale {
    tonic: PitchClass,
    kind: ScaleKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    variant: Option<MinorVariant>,
    notes: Vec<PitchClass>,
}

impl Scale {
    /// Build a major scale: two whole-whole-half tetrachords joined by a
    /// whole-step link.
    ///
    /// The link is the lower tetrachord's last member advanced by two more
    /// semitones (tonic+7), used as the tonic of the upper tetrachord.
    pub fn major(tonic: &PitchClass) -> Self {
        let lower = Tetrachord::new(tonic);
        let link = lower.notes()[3].raised_by(2).snapshot();
        let upper = Tetrachord::new(&link);

        let mut notes = Vec::with_capacity(8);
        notes.extend_from_slice(lower.notes());
        notes.extend_from_slice(upper.notes());

        Self {
            tonic: tonic.reset_to_original(),
            kind: ScaleKind::Major,
            variant: None,
            notes,
        }
    }

    /// Build a minor scale with the given variant's step pattern, applied to
    /// a running pitch from the tonic.
    pub fn minor(tonic: &PitchClass, variant: MinorVariant) -> Self {
        let root = tonic.reset_to_original();
        let mut notes = Vec::with_capacity(8);
        notes.push(root.clone());
        let mut pitch = root.clone();
        for step in variant.steps() {
            pitch = pitch.raised_by(step);
            notes.push(pitch.snapshot());
        }
        Self {
            tonic: root,
            kind: ScaleKind::Minor,
            variant: Some(variant),
            notes,
        }
    }

    /// Tag-keyed entry point: build a scale from `(tonic, kind, variant)`.
    ///
    /// A minor scale with no variant defaults to natural.
    ///
    /// # Errors
    /// Returns [`TheoryError::TypeMismatch`] when a minor variant is supplied
    /// for a major scale.
    pub fn build(
        tonic: &PitchClass,
        kind: ScaleKind,
        variant: Option<MinorVariant>,
    ) -> Result<Self, TheoryError> {
        match (kind, variant) {
            (ScaleKind::Major, None) => Ok(Self::major(tonic)),
            (ScaleKind::Major, Some(_)) => Err(TheoryError::TypeMismatch {
                expected: "major scale",
                requested: "minor variant",
            }),
            (ScaleKind::Minor, variant) => Ok(Self::minor(tonic, variant.unwrap_or_default())),
        }
    }

    /// The tonic this scale was built on, at its original value.
    pub fn tonic(&self) -> &PitchClass {
        &self.tonic
    }

    pub fn kind(&self) -> ScaleKind {
        self.kind
    }

    /// The minor variant, or `None` for a major scale.
    pub fn variant(&self) -> Option<MinorVariant> {
        self.variant
    }

    /// The eight members in ascending order.
    pub fn notes(&self) -> &[PitchClass] {
        &self.notes
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_symbols(&self.notes))
    }
}
