//! Shared human/JSON rendering for built structures.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

/// One built structure, ready to print in either output mode.
#[derive(Serialize)]
pub(super) struct StructureReport {
    /// Human-readable structure label, e.g. "major triad".
    pub structure: String,
    /// The tonic's canonical symbol.
    pub tonic: String,
    /// Member symbols in order.
    pub members: Vec<String>,
    /// The hyphen-joined rendering of the members.
    pub formatted: String,
}

/// Print a report as colored human output or machine-readable JSON.
pub(super) fn emit(report: &StructureReport, json_output: bool) -> Result<()> {
    if json_output {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{} {}", "Structure:".cyan().bold(), report.structure);
        println!("{} {}", "Tonic:".cyan().bold(), report.tonic);
        println!("{}", report.formatted);
    }
    Ok(())
}
