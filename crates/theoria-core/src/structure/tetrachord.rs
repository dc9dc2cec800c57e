//! Four-note whole-whole-half segments, the scale-building block.

use std::fmt;

use serde::Serialize;

use crate::format::join_symbols;
use crate::pitch::PitchClass;

/// A four-note segment spanning a perfect fourth: whole, whole, half.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tetrachord {
    tonic: PitchClass,
    notes: [PitchClass; 4],
}

impl Tetrachord {
    /// Build the whole-whole-half tetrachord on `tonic`.
    ///
    /// Unlike a triad, members come from a running pitch: each step is
    /// applied to the previous member (+2, +2, +1), giving cumulative
    /// offsets [0, 2, 4, 5] from the tonic.
    pub fn new(tonic: &PitchClass) -> Self {
        let root = tonic.reset_to_original();
        let second = root.raised_by(2);
        let third = second.raised_by(2);
        let fourth = third.raised_by(1);
        Self {
            notes: [
                root.clone(),
                second.snapshot(),
                third.snapshot(),
                fourth.snapshot(),
            ],
            tonic: root,
        }
    }

    /// The root this tetrachord was built on, at its original value.
    pub fn tonic(&self) -> &PitchClass {
        &self.tonic
    }

    /// The four members in ascending order.
    pub fn notes(&self) -> &[PitchClass] {
        &self.notes
    }
}

impl fmt::Display for Tetrachord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_symbols(&self.notes))
    }
}
