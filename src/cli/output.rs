//! Output formatting utilities
//!
//! Provides table and JSON output formatting for CLI commands.

use crate::cli::args::OutputFormat;
use crate::error::ParseError;
use crate::help::option_usage;
use crate::option::{OptionDescriptor, OptionTable};
use crate::scanner::{OptionMatch, OptionValue};
use serde::Serialize;
use std::io::{self, Write};

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Table => {
            writeln!(handle, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
            writeln!(handle, "{}", json)?;
        }
        OutputFormat::Compact => {
            writeln!(handle, "{}", data.to_compact())?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

/// One step of a scan, as displayed
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum ScanStep {
    /// A matched option
    Match {
        id: u32,
        name: String,
        value: OptionValue,
        disabled: bool,
    },
    /// A parse error
    Error {
        kind: &'static str,
        token: String,
        message: String,
    },
}

impl ScanStep {
    /// Build a step from a matched option, resolving its name in the table
    pub fn from_match(m: OptionMatch, table: &OptionTable) -> Self {
        let name = table
            .by_id(m.id)
            .map(|o| o.name.clone())
            .unwrap_or_default();
        ScanStep::Match {
            id: m.id,
            name,
            value: m.value,
            disabled: m.disabled,
        }
    }

    /// Build a step from a parse error
    pub fn from_error(err: &ParseError) -> Self {
        ScanStep::Error {
            kind: err.kind(),
            token: err.token().to_string(),
            message: err.to_string(),
        }
    }

    /// True if this step is an error
    pub fn is_error(&self) -> bool {
        matches!(self, ScanStep::Error { .. })
    }
}

impl TableDisplay for ScanStep {
    fn to_table(&self) -> String {
        match self {
            ScanStep::Match {
                id,
                name,
                value,
                disabled,
            } => {
                let mut line = format!("--{} (id {}): {}", name, id, value);
                if *disabled {
                    line.push_str(" [disabled]");
                }
                line
            }
            ScanStep::Error { kind, message, .. } => format!("error[{}]: {}", kind, message),
        }
    }

    fn to_compact(&self) -> String {
        match self {
            ScanStep::Match {
                name,
                value,
                disabled,
                ..
            } => {
                if *disabled {
                    format!("!{}", name)
                } else if value.is_none() {
                    name.clone()
                } else {
                    format!("{}={}", name, value)
                }
            }
            ScanStep::Error { kind, .. } => format!("<{}>", kind),
        }
    }
}

/// Full scan result for display
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub program: String,
    pub steps: Vec<ScanStep>,
    /// Tokens left unexamined (only non-empty after a fail-fast stop)
    pub unscanned: Vec<String>,
}

impl ScanReport {
    /// Number of error steps
    pub fn error_count(&self) -> usize {
        self.steps.iter().filter(|s| s.is_error()).count()
    }
}

impl TableDisplay for ScanReport {
    fn to_table(&self) -> String {
        let mut output = format!("Program: {}\n", self.program);
        output.push_str(&format!(
            "Steps: {} ({} error(s))\n\n",
            self.steps.len(),
            self.error_count()
        ));

        for (i, step) in self.steps.iter().enumerate() {
            output.push_str(&format!("  [{}] {}\n", i, step.to_table()));
        }

        if !self.unscanned.is_empty() {
            output.push_str(&format!("\nNot scanned: {}\n", self.unscanned.join(" ")));
        }

        output
    }

    fn to_compact(&self) -> String {
        self.steps
            .iter()
            .map(|s| s.to_compact())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Option table entry for display
#[derive(Debug, Clone, Serialize)]
pub struct OptionSummary {
    pub name: String,
    pub id: u32,
    pub usage: String,
    pub flags: Vec<&'static str>,
}

impl From<&OptionDescriptor> for OptionSummary {
    fn from(opt: &OptionDescriptor) -> Self {
        Self {
            name: opt.name.clone(),
            id: opt.id,
            usage: option_usage(opt),
            flags: opt.flags.names(),
        }
    }
}

/// Validated option table for display
#[derive(Debug, Clone, Serialize)]
pub struct TableSummary {
    pub options: Vec<OptionSummary>,
}

impl From<&OptionTable> for TableSummary {
    fn from(table: &OptionTable) -> Self {
        Self {
            options: table.iter().map(OptionSummary::from).collect(),
        }
    }
}

impl TableDisplay for TableSummary {
    fn to_table(&self) -> String {
        let mut output = format!("Option table OK: {} option(s)\n\n", self.options.len());

        for opt in &self.options {
            let flags = if opt.flags.is_empty() {
                "none".to_string()
            } else {
                opt.flags.join(", ")
            };
            output.push_str(&format!("  {:<32} id {:<5} {}\n", opt.usage, opt.id, flags));
        }

        output
    }

    fn to_compact(&self) -> String {
        self.options
            .iter()
            .map(|o| o.name.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}
