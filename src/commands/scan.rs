//! Scan command implementation
//!
//! Runs the option scanner over the given arguments and reports each step.

use crate::cli::args::{OutputFormat, ScanArgs};
use crate::cli::output::{print_output, ScanReport, ScanStep};
use crate::config::TableFile;
use crate::error::{AppError, Result};
use crate::option::OptionTable;
use crate::scanner::{DiagnosticSink, Scanner};

/// Execute the scan command
pub fn run_scan(args: &ScanArgs, format: OutputFormat, table_path: Option<&str>) -> Result<()> {
    let table = TableFile::load_or_default(table_path)?;

    let argv: Vec<String> = std::iter::once(args.program.clone())
        .chain(args.args.iter().cloned())
        .collect();

    let report = scan_arguments(Scanner::new(&argv, &table), &table, args.fail_fast);
    print_output(&report, format)?;

    match report.error_count() {
        0 => Ok(()),
        n => Err(AppError::ScanFailed(n)),
    }
}

/// Drive a scanner to completion, collecting every step
///
/// With `fail_fast`, scanning stops after the first error and the tokens
/// not yet examined are listed in the report.
pub fn scan_arguments<A, S>(
    mut scanner: Scanner<'_, A, S>,
    table: &OptionTable,
    fail_fast: bool,
) -> ScanReport
where
    A: AsRef<str>,
    S: DiagnosticSink,
{
    let mut steps = Vec::new();

    while let Some(result) = scanner.next_option() {
        match result {
            Ok(m) => steps.push(ScanStep::from_match(m, table)),
            Err(e) => {
                steps.push(ScanStep::from_error(&e));
                if fail_fast {
                    log::debug!("stopping scan at first error");
                    break;
                }
            }
        }
    }

    ScanReport {
        program: scanner.program().to_string(),
        steps,
        unscanned: scanner
            .remaining()
            .iter()
            .map(|a| a.as_ref().to_string())
            .collect(),
    }
}
