//! nvgetopt - table-driven command-line option scanner
//!
//! A small replacement for `getopt_long()` that is driven entirely by an
//! option table: no option string, typed arguments, `--no-` negation and
//! short-option clusters.
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions for the `nvgetopt` tool
//! - [`commands`]: Command handlers
//! - [`config`]: Option table files
//! - [`error`]: Error types
//! - [`help`]: Help text generation
//! - [`option`]: Option descriptors, flags and tables
//! - [`scanner`]: The option scanner

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod help;
pub mod option;
pub mod scanner;

pub use error::{AppError, ParseError, Result, TableError};
pub use option::{OptionDescriptor, OptionFlags, OptionTable};
pub use scanner::{OptionMatch, OptionValue, Scanner};
