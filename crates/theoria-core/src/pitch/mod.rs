//! Pitch classes on the twelve-tone circular axis.
//!
//! The axis is the fixed ordering A, A#/Bb, B, C, ... G#/Ab: index difference
//! is semitone distance, and all arithmetic wraps modulo 12.

mod class;
mod names;


pub use class::PitchClass;
pub use names::NOTES;
