//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod check;
pub mod help_text;
pub mod scan;

pub use check::run_check;
pub use help_text::run_help_text;
pub use scan::run_scan;
