//! Help-text command implementation
//!
//! Prints the usage listing generated from an option table.

use crate::cli::args::HelpTextArgs;
use crate::config::TableFile;
use crate::error::Result;
use crate::help::format_help;
use std::io::Write;

/// Execute the help-text command
pub fn run_help_text(args: &HelpTextArgs, table_path: Option<&str>) -> Result<()> {
    let table = TableFile::load_or_default(table_path)?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write!(handle, "{}", format_help(&table, args.width))?;

    Ok(())
}
