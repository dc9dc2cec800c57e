//! Demo command: prints two worked example scales.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use theoria_core::{MinorVariant, PitchClass, Scale};

/// Run the demo command
pub fn run() -> Result<ExitCode> {
    let tonic = PitchClass::from_symbol("C")?;

    println!("{}", "theoria demo".bold());
    println!();

    let major = Scale::major(&tonic);
    println!("{} {}", "C major scale:".cyan().bold(), major);

    let minor = Scale::minor(&tonic, MinorVariant::Natural);
    println!("{} {}", "C natural minor scale:".cyan().bold(), minor);

    Ok(ExitCode::SUCCESS)
}
