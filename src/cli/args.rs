//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands of the `nvgetopt`
//! tool itself. The tool's own arguments go through clap; the argument
//! vectors it is asked to scan go through the option scanner.

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Table-driven option scanner
///
/// Scan argument vectors against an option table described in TOML.
#[derive(Parser, Debug)]
#[command(name = "nvgetopt")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Path to the option table file
    #[arg(short, long, global = true, env = "NVGETOPT_TABLE")]
    pub table: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan an argument vector against the option table
    Scan(ScanArgs),

    /// Validate the option table
    Check,

    /// Print help text generated from the option table
    HelpText(HelpTextArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the scan command
#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Program name used as the prefix of diagnostics
    #[arg(long, default_value = "nvgetopt")]
    pub program: String,

    /// Stop at the first parse error instead of scanning the rest
    #[arg(long)]
    pub fail_fast: bool,

    /// Arguments to scan (after `--`)
    #[arg(last = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

/// Arguments for the help-text command
#[derive(Parser, Debug)]
pub struct HelpTextArgs {
    /// Wrap descriptions at this many columns
    #[arg(long, default_value_t = crate::help::DEFAULT_WIDTH)]
    pub width: usize,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_check() {
        let args = Cli::try_parse_from(["nvgetopt", "check"]).unwrap();
        assert!(matches!(args.command, Commands::Check));
    }

    #[test]
    fn test_cli_parse_verbose() {
        let args = Cli::try_parse_from(["nvgetopt", "-v", "check"]).unwrap();
        assert!(args.verbose);
    }

    #[test]
    fn test_cli_parse_table_path() {
        let args =
            Cli::try_parse_from(["nvgetopt", "--table", "opts.toml", "check"]).unwrap();
        assert_eq!(args.table.as_deref(), Some("opts.toml"));
    }

    #[test]
    fn test_cli_parse_scan_args() {
        let args = Cli::try_parse_from([
            "nvgetopt",
            "scan",
            "--program",
            "nvidia-settings",
            "--",
            "-abc",
            "--ctrl-display=:0",
            "--verbose",
        ])
        .unwrap();

        if let Commands::Scan(scan) = args.command {
            assert_eq!(scan.program, "nvidia-settings");
            assert!(!scan.fail_fast);
            assert_eq!(scan.args, vec!["-abc", "--ctrl-display=:0", "--verbose"]);
        } else {
            panic!("Expected Scan command");
        }
        assert!(!args.verbose);
    }

    #[test]
    fn test_cli_parse_help_text_width() {
        let args = Cli::try_parse_from(["nvgetopt", "help-text", "--width", "60"]).unwrap();
        if let Commands::HelpText(help) = args.command {
            assert_eq!(help.width, 60);
        } else {
            panic!("Expected HelpText command");
        }
    }

    #[test]
    fn test_cli_parse_format() {
        let args = Cli::try_parse_from(["nvgetopt", "--format", "json", "check"]).unwrap();
        assert_eq!(args.format, OutputFormat::Json);
    }
}
