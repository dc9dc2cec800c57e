//! Theoria CLI entry point.
//!
//! Parses arguments and dispatches to the command implementations in the
//! library crate.

use clap::Parser;
use std::process::ExitCode;

use theoria_cli::cli_args::{Cli, Commands};
use theoria_cli::commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Triad {
            tonic,
            quality,
            json,
        } => commands::triad::run(&tonic, &quality, json),
        Commands::Tetrachord { tonic, json } => commands::tetrachord::run(&tonic, json),
        Commands::Scale {
            tonic,
            kind,
            variant,
            json,
        } => commands::scale::run(&tonic, &kind, variant.as_deref(), json),
        Commands::Demo => commands::demo::run(),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
