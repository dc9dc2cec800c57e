//! Theoria CLI - command-line interface for music theory structures
//!
//! This crate wraps `theoria-core` in a small set of subcommands that build
//! triads, tetrachords, and scales from a tonic and print them in either
//! human-readable (colored) or machine-readable JSON form.

pub mod cli_args;
pub mod commands;
