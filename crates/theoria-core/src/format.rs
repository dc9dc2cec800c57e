//! Rendering member sequences as human-readable strings.

use crate::error::TheoryError;
use crate::pitch::PitchClass;

/// Separator placed between member symbols.
pub const SEPARATOR: &str = " - ";

/// Join the members' current symbols with [`SEPARATOR`], no trailing
/// separator.
///
/// # Errors
/// Returns [`TheoryError::EmptyStructure`] if `members` is empty.
///
/// # Examples
/// ```
/// use theoria_core::{format_members, PitchClass, Tetrachord};
///
/// let tonic = PitchClass::from_symbol("C")?;
/// let tetrachord = Tetrachord::new(&tonic);
/// assert_eq!(format_members(tetrachord.notes())?, "C - D - E - F");
/// # Ok::<(), theoria_core::TheoryError>(())
/// ```
pub fn format_members(members: &[PitchClass]) -> Result<String, TheoryError> {
    if members.is_empty() {
        return Err(TheoryError::EmptyStructure);
    }
    Ok(join_symbols(members))
}

/// Infallible join for structures, which are never empty by construction.
pub(crate) fn join_symbols(members: &[PitchClass]) -> String {
    members
        .iter()
        .map(PitchClass::current)
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_with_separator() {
        let members = [
            PitchClass::from_symbol("C").unwrap(),
            PitchClass::from_symbol("E").unwrap(),
            PitchClass::from_symbol("G").unwrap(),
        ];
        assert_eq!(format_members(&members).unwrap(), "C - E - G");
    }

    #[test]
    fn test_single_member_has_no_separator() {
        let members = [PitchClass::from_symbol("F#").unwrap()];
        assert_eq!(format_members(&members).unwrap(), "F#/Gb");
    }

    #[test]
    fn test_empty_sequence_is_rejected() {
        assert_eq!(format_members(&[]), Err(TheoryError::EmptyStructure));
    }
}
