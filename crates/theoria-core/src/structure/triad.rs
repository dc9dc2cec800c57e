//! Three-note chords built by stacking a third and a fifth on a root.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::format::join_symbols;
use crate::pitch::PitchClass;

/// Quality of a triad: which third is stacked above the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriadQuality {
    Major,
    Minor,
}

impl TriadQuality {
    /// Look up a quality by its lowercase name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "major" => Some(TriadQuality::Major),
            "minor" => Some(TriadQuality::Minor),
            _ => None,
        }
    }

    /// The lowercase name of this quality.
    pub fn name(self) -> &'static str {
        match self {
            TriadQuality::Major => "major",
            TriadQuality::Minor => "minor",
        }
    }

    /// Semitone offset of the third above the root.
    fn third(self) -> u32 {
        match self {
            TriadQuality::Major => 4,
            TriadQuality::Minor => 3,
        }
    }
}

impl fmt::Display for TriadQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A three-note chord: root, third, and perfect fifth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Triad {
    tonic: PitchClass,
    quality: TriadQuality,
    notes: [PitchClass; 3],
}

impl Triad {
    /// Build a triad on `tonic`.
    ///
    /// Each upper member is measured from the tonic at its original value,
    /// not from the previous member: [0, 4, 7] semitones for major,
    /// [0, 3, 7] for minor.
    pub fn new(tonic: &PitchClass, quality: TriadQuality) -> Self {
        let root = tonic.reset_to_original();
        let third = root.raised_by(quality.third()).snapshot();
        let fifth = root.raised_by(7).snapshot();
        Self {
            notes: [root.clone(), third, fifth],
            tonic: root,
            quality,
        }
    }

    /// The root this triad was built on, at its original value.
    pub fn tonic(&self) -> &PitchClass {
        &self.tonic
    }

    pub fn quality(&self) -> TriadQuality {
        self.quality
    }

    /// The three members in root-third-fifth order.
    pub fn notes(&self) -> &[PitchClass] {
        &self.notes
    }
}

impl fmt::Display for Triad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_symbols(&self.notes))
    }
}
