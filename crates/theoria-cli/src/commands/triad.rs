//! Triad command implementation

use anyhow::{Context, Result};
use std::process::ExitCode;

use theoria_core::{format_members, PitchClass, Triad, TriadQuality};

use super::output::{emit, StructureReport};

/// Run the triad command
///
/// # Arguments
/// * `tonic` - Tonic pitch-class symbol (e.g. "C", "Bb")
/// * `quality` - Triad quality name ("major" or "minor")
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(tonic: &str, quality: &str, json_output: bool) -> Result<ExitCode> {
    let tonic = PitchClass::from_symbol(tonic)
        .with_context(|| format!("failed to parse tonic '{}'", tonic))?;
    let quality = TriadQuality::by_name(quality).ok_or_else(|| {
        anyhow::anyhow!("unknown triad quality: {} (expected major or minor)", quality)
    })?;

    let triad = Triad::new(&tonic, quality);
    let report = StructureReport {
        structure: format!("{} triad", quality),
        tonic: triad.tonic().current().to_string(),
        members: triad.notes().iter().map(|n| n.current().to_string()).collect(),
        formatted: format_members(triad.notes())?,
    };

    emit(&report, json_output)?;
    Ok(ExitCode::SUCCESS)
}
