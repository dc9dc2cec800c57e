//! CLI argument definitions for the theoria command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

/// Theoria - Music Theory Structures on the Command Line
#[derive(Parser)]
#[command(name = "theoria")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a triad on a tonic and print its members
    Triad {
        /// Tonic pitch class (e.g. C, F#, Bb)
        #[arg(short, long)]
        tonic: String,

        /// Triad quality
        #[arg(short, long, default_value = "major", value_parser = ["major", "minor"])]
        quality: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Build the whole-whole-half tetrachord on a tonic
    Tetrachord {
        /// Tonic pitch class (e.g. C, F#, Bb)
        #[arg(short, long)]
        tonic: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Build a scale on a tonic and print its members
    Scale {
        /// Tonic pitch class (e.g. C, F#, Bb)
        #[arg(short, long)]
        tonic: String,

        /// Scale kind
        #[arg(short, long, default_value = "major", value_parser = ["major", "minor"])]
        kind: String,

        /// Minor-scale variant (minor scales only)
        #[arg(long, value_parser = ["natural", "harmonic", "melodic"])]
        variant: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the built-in demonstration structures
    Demo,
}
