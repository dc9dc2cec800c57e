//! CLI command implementations

pub mod demo;
pub mod scale;
pub mod tetrachord;
pub mod triad;

mod output;
