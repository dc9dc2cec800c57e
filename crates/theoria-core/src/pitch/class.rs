//! The `PitchClass` value type and its transposition operations.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TheoryError;

use super::names::{resolve, NOTES};

/// One of the twelve equal-tempered pitch classes, identified independent of
/// octave.
///
/// A `PitchClass` remembers the text it was constructed from, so a value
/// derived through any chain of transpositions can be brought back to its
/// construction-time identity with [`reset_to_original`].
///
/// Transposition is pure: [`raised_by`] and [`lowered_by`] return new values
/// and never touch the receiver. Two pitch classes are equal iff their current
/// identities match; the construction-time text does not participate.
///
/// [`raised_by`]: PitchClass::raised_by
/// [`lowered_by`]: PitchClass::lowered_by
/// [`reset_to_original`]: PitchClass::reset_to_original
#[derive(Debug, Clone)]
pub struct PitchClass {
    /// Current position on the canonical axis (0-11).
    position: u8,
    /// Position derived from `original` at construction, never changed.
    original_position: u8,
    /// The construction text, verbatim.
    original: String,
}

impl PitchClass {
    /// Parse a note symbol into a pitch class.
    ///
    /// Accepts either one of the twelve canonical symbols (e.g. `"C"`,
    /// `"A#/Bb"`) or a single-accidental shorthand (e.g. `"Bb"`, `"F#"`) that
    /// resolves to exactly one canonical symbol.
    ///
    /// # Errors
    /// Returns [`TheoryError::InvalidNote`] for anything else; no
    /// half-initialized value is ever produced.
    ///
    /// # Examples
    /// ```
    /// use theoria_core::PitchClass;
    ///
    /// let pitch = PitchClass::from_symbol("Bb").unwrap();
    /// assert_eq!(pitch.current(), "A#/Bb");
    /// assert!(PitchClass::from_symbol("H#").is_err());
    /// ```
    pub fn from_symbol(symbol: &str) -> Result<Self, TheoryError> {
        let position = resolve(symbol).ok_or_else(|| TheoryError::InvalidNote {
            symbol: symbol.to_string(),
        })?;
        Ok(Self {
            position,
            original_position: position,
            original: symbol.to_string(),
        })
    }

    /// The current canonical symbol.
    pub fn current(&self) -> &'static str {
        NOTES[self.position as usize]
    }

    /// The text this pitch class was constructed from, verbatim.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Current position on the canonical axis (0-11).
    pub fn position(&self) -> u8 {
        self.position
    }

    /// A new pitch class raised by `semitones`, wrapping from G#/Ab back to A.
    ///
    /// Equivalent to `semitones` successive single-semitone raises. The
    /// construction-time identity carries over unchanged.
    ///
    /// # Examples
    /// ```
    /// use theoria_core::PitchClass;
    ///
    /// let pitch = PitchClass::from_symbol("G#/Ab").unwrap();
    /// assert_eq!(pitch.raised_by(1).current(), "A");
    /// ```
    pub fn raised_by(&self, semitones: u32) -> Self {
        let position = ((u32::from(self.position) + semitones % 12) % 12) as u8;
        Self {
            position,
            original_position: self.original_position,
            original: self.original.clone(),
        }
    }

    /// A new pitch class lowered by `semitones`, wrapping from A down to
    /// G#/Ab. Mirror of [`raised_by`](PitchClass::raised_by).
    pub fn lowered_by(&self, semitones: u32) -> Self {
        let down = (semitones % 12) as i32;
        let position = (i32::from(self.position) - down).rem_euclid(12) as u8;
        Self {
            position,
            original_position: self.original_position,
            original: self.original.clone(),
        }
    }

    /// A new pitch class restored to the construction-time identity.
    /// Idempotent.
    pub fn reset_to_original(&self) -> Self {
        Self {
            position: self.original_position,
            original_position: self.original_position,
            original: self.original.clone(),
        }
    }

    /// A fresh pitch class whose original identity is this value's current
    /// symbol. Structure builders use this so every member stands on its own.
    pub(crate) fn snapshot(&self) -> Self {
        Self {
            position: self.position,
            original_position: self.position,
            original: self.current().to_string(),
        }
    }
}

impl PartialEq for PitchClass {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl Eq for PitchClass {}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.current())
    }
}

impl Serialize for PitchClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.current())
    }
}

impl<'de> Deserialize<'de> for PitchClass {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let symbol = String::deserialize(deserializer)?;
        PitchClass::from_symbol(&symbol).map_err(serde::de::Error::custom)
    }
}
