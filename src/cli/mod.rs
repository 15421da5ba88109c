//! Command-line interface of the `nvgetopt` tool
//!
//! Argument definitions (clap) and table/JSON output formatting.

pub mod args;
pub mod output;

pub use args::{Cli, Commands, OutputFormat};
