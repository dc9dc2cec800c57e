//! Tests for triad, tetrachord, and scale construction.

use super::*;
use crate::error::TheoryError;
use crate::pitch::PitchClass;

fn pitch(symbol: &str) -> PitchClass {
    PitchClass::from_symbol(symbol).unwrap()
}

fn symbols(members: &[PitchClass]) -> Vec<&'static str> {
    members.iter().map(PitchClass::current).collect()
}

#[test]
fn test_major_triad_on_c() {
    let triad = Triad::new(&pitch("C"), TriadQuality::Major);
    assert_eq!(symbols(triad.notes()), ["C", "E", "G"]);
}

#[test]
fn test_minor_triad_on_c() {
    let triad = Triad::new(&pitch("C"), TriadQuality::Minor);
    assert_eq!(symbols(triad.notes()), ["C", "D#/Eb", "G"]);
}

#[test]
fn test_major_triad_on_a() {
    let triad = Triad::new(&pitch("A"), TriadQuality::Major);
    assert_eq!(symbols(triad.notes()), ["A", "C#/Db", "E"]);
}

#[test]
fn test_minor_triad_wraps_around_axis() {
    let triad = Triad::new(&pitch("G"), TriadQuality::Minor);
    assert_eq!(symbols(triad.notes()), ["G", "A#/Bb", "D"]);
}

#[test]
fn test_triad_resets_a_transposed_tonic() {
    // The root member is the tonic at its original value, not its current one
    let wandered = pitch("C").raised_by(3);
    let triad = Triad::new(&wandered, TriadQuality::Major);
    assert_eq!(triad.tonic().current(), "C");
    assert_eq!(symbols(triad.notes()), ["C", "E", "G"]);
}

#[test]
fn test_tetrachord_on_c() {
    let tetrachord = Tetrachord::new(&pitch("C"));
    assert_eq!(symbols(tetrachord.notes()), ["C", "D", "E", "F"]);
}

#[test]
fn test_tetrachord_on_a() {
    let tetrachord = Tetrachord::new(&pitch("A"));
    assert_eq!(symbols(tetrachord.notes()), ["A", "B", "C#/Db", "D"]);
}

#[test]
fn test_major_scale_on_c() {
    let scale = Scale::major(&pitch("C"));
    assert_eq!(
        symbols(scale.notes()),
        ["C", "D", "E", "F", "G", "A", "B", "C"]
    );
}

#[test]
fn test_major_scale_on_g() {
    let scale = Scale::major(&pitch("G"));
    assert_eq!(
        symbols(scale.notes()),
        ["G", "A", "B", "C", "D", "E", "F#/Gb", "G"]
    );
}

#[test]
fn test_major_scale_octave_wraps_to_tonic() {
    let scale = Scale::major(&pitch("E"));
    assert_eq!(scale.notes()[7], scale.notes()[0]);
    assert_eq!(scale.notes()[0], *scale.tonic());
}

#[test]
fn test_natural_minor_scale_on_c() {
    let scale = Scale::minor(&pitch("C"), MinorVariant::Natural);
    assert_eq!(
        symbols(scale.notes()),
        ["C", "D", "D#/Eb", "F", "G", "G#/Ab", "A#/Bb", "C"]
    );
}

#[test]
fn test_natural_minor_scale_on_a() {
    let scale = Scale::minor(&pitch("A"), MinorVariant::Natural);
    assert_eq!(
        symbols(scale.notes()),
        ["A", "B", "C", "D", "E", "F", "G", "A"]
    );
}

#[test]
fn test_harmonic_minor_raises_the_seventh() {
    let scale = Scale::minor(&pitch("A"), MinorVariant::Harmonic);
    assert_eq!(
        symbols(scale.notes()),
        ["A", "B", "C", "D", "E", "F", "G#/Ab", "A"]
    );
}

#[test]
fn test_melodic_minor_raises_sixth_and_seventh() {
    let scale = Scale::minor(&pitch("A"), MinorVariant::Melodic);
    assert_eq!(
        symbols(scale.notes()),
        ["A", "B", "C", "D", "E", "F#/Gb", "G#/Ab", "A"]
    );
}

#[test]
fn test_scale_build_defaults_minor_to_natural() {
    let tonic = pitch("D");
    let built = Scale::build(&tonic, ScaleKind::Minor, None).unwrap();
    assert_eq!(built, Scale::minor(&tonic, MinorVariant::Natural));
    assert_eq!(built.variant(), Some(MinorVariant::Natural));
}

#[test]
fn test_scale_build_rejects_variant_on_major() {
    let err = Scale::build(&pitch("C"), ScaleKind::Major, Some(MinorVariant::Harmonic))
        .unwrap_err();
    assert_eq!(
        err,
        TheoryError::TypeMismatch {
            expected: "major scale",
            requested: "minor variant",
        }
    );
}

#[test]
fn test_minor_variant_parses_known_names() {
    assert_eq!(
        "harmonic".parse::<MinorVariant>().unwrap(),
        MinorVariant::Harmonic
    );
    assert_eq!(
        "natural".parse::<MinorVariant>().unwrap(),
        MinorVariant::Natural
    );
}

#[test]
fn test_minor_variant_rejects_unknown_names() {
    let err = "dorian".parse::<MinorVariant>().unwrap_err();
    assert_eq!(
        err,
        TheoryError::UnsupportedVariant {
            name: "dorian".to_string()
        }
    );
}

#[test]
fn test_build_structure_matches_direct_constructors() {
    let tonic = pitch("F#");

    let triad = build_structure(
        &tonic,
        StructureKind::Triad {
            quality: TriadQuality::Minor,
        },
    )
    .unwrap();
    assert_eq!(triad, Triad::new(&tonic, TriadQuality::Minor).notes());

    let tetrachord = build_structure(&tonic, StructureKind::Tetrachord).unwrap();
    assert_eq!(tetrachord, Tetrachord::new(&tonic).notes());

    let scale = build_structure(
        &tonic,
        StructureKind::Scale {
            kind: ScaleKind::Minor,
            variant: Some(MinorVariant::Melodic),
        },
    )
    .unwrap();
    assert_eq!(scale, Scale::minor(&tonic, MinorVariant::Melodic).notes());
}

#[test]
fn test_build_structure_surfaces_type_mismatch() {
    let result = build_structure(
        &pitch("C"),
        StructureKind::Scale {
            kind: ScaleKind::Major,
            variant: Some(MinorVariant::Natural),
        },
    );
    assert!(matches!(result, Err(TheoryError::TypeMismatch { .. })));
}

#[test]
fn test_structure_display_joins_members() {
    assert_eq!(
        Triad::new(&pitch("C"), TriadQuality::Major).to_string(),
        "C - E - G"
    );
    assert_eq!(
        Scale::minor(&pitch("A"), MinorVariant::Natural).to_string(),
        "A - B - C - D - E - F - G - A"
    );
}

#[test]
fn test_members_stand_alone_from_the_tonic() {
    // Each member is a fresh value: resetting one goes back to its own
    // symbol, not the tonic's
    let scale = Scale::major(&pitch("C"));
    let fifth = scale.notes()[4].clone();
    assert_eq!(fifth.current(), "G");
    assert_eq!(fifth.reset_to_original().current(), "G");
}
