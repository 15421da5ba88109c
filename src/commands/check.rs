//! Check command implementation
//!
//! Loads and validates an option table.

use crate::cli::args::OutputFormat;
use crate::cli::output::{print_output, TableSummary};
use crate::config::TableFile;
use crate::error::Result;

/// Execute the check command
pub fn run_check(format: OutputFormat, table_path: Option<&str>) -> Result<()> {
    let table = TableFile::load_or_default(table_path)?;
    log::info!("Option table is valid ({} options)", table.len());

    print_output(&TableSummary::from(&table), format)?;

    Ok(())
}
