//! Tetrachord command implementation

use anyhow::{Context, Result};
use std::process::ExitCode;

use theoria_core::{format_members, PitchClass, Tetrachord};

use super::output::{emit, StructureReport};

/// Run the tetrachord command
///
/// # Arguments
/// * `tonic` - Tonic pitch-class symbol (e.g. "C", "Bb")
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(tonic: &str, json_output: bool) -> Result<ExitCode> {
    let tonic = PitchClass::from_symbol(tonic)
        .with_context(|| format!("failed to parse tonic '{}'", tonic))?;

    let tetrachord = Tetrachord::new(&tonic);
    let report = StructureReport {
        structure: "tetrachord".to_string(),
        tonic: tetrachord.tonic().current().to_string(),
        members: tetrachord
            .notes()
            .iter()
            .map(|n| n.current().to_string())
            .collect(),
        formatted: format_members(tetrachord.notes())?,
    };

    emit(&report, json_output)?;
    Ok(ExitCode::SUCCESS)
}
