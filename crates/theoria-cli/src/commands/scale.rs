//! Scale command implementation

use anyhow::{Context, Result};
use std::process::ExitCode;
use std::str::FromStr;

use theoria_core::{format_members, MinorVariant, PitchClass, Scale, ScaleKind};

use super::output::{emit, StructureReport};

/// Run the scale command
///
/// # Arguments
/// * `tonic` - Tonic pitch-class symbol (e.g. "C", "Bb")
/// * `kind` - Scale kind name ("major" or "minor")
/// * `variant` - Optional minor-scale variant name
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(tonic: &str, kind: &str, variant: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let tonic = PitchClass::from_symbol(tonic)
        .with_context(|| format!("failed to parse tonic '{}'", tonic))?;
    let kind = ScaleKind::by_name(kind)
        .ok_or_else(|| anyhow::anyhow!("unknown scale kind: {} (expected major or minor)", kind))?;
    let variant = variant.map(MinorVariant::from_str).transpose()?;

    let scale = Scale::build(&tonic, kind, variant)?;
    let label = match scale.variant() {
        Some(variant) => format!("{} minor scale", variant),
        None => "major scale".to_string(),
    };
    let report = StructureReport {
        structure: label,
        tonic: scale.tonic().current().to_string(),
        members: scale.notes().iter().map(|n| n.current().to_string()).collect(),
        formatted: format_members(scale.notes())?,
    };

    emit(&report, json_output)?;
    Ok(ExitCode::SUCCESS)
}
