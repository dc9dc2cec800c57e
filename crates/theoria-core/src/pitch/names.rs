//! The canonical symbol table and enharmonic alias resolution.

/// The twelve pitch-class symbols in circular order starting from A.
///
/// The index into this table IS the semitone axis: the difference between two
/// indices (mod 12) is the semitone distance between the pitch classes.
pub const NOTES: [&str; 12] = [
    "A", "A#/Bb", "B", "C", "C#/Db", "D", "D#/Eb", "E", "F", "F#/Gb", "G", "G#/Ab",
];

/// Accidental shorthands and the axis position each resolves to.
///
/// Only full two-character tokens appear here, so a single letter like "A"
/// can never land on "A#/Bb": plain letters resolve through exact canonical
/// match only.
const ALIASES: [(&str, u8); 10] = [
    ("A#", 1),
    ("Bb", 1),
    ("C#", 4),
    ("Db", 4),
    ("D#", 6),
    ("Eb", 6),
    ("F#", 9),
    ("Gb", 9),
    ("G#", 11),
    ("Ab", 11),
];

/// Resolve a note symbol to its position on the canonical axis.
///
/// Accepts a canonical symbol ("C", "A#/Bb") or a two-character accidental
/// shorthand ("Bb", "F#"). Returns `None` for anything else.
pub(crate) fn resolve(symbol: &str) -> Option<u8> {
    if let Some(position) = NOTES.iter().position(|n| *n == symbol) {
        return Some(position as u8);
    }
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == symbol)
        .map(|(_, position)| *position)
}
