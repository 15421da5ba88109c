//! nvgetopt - table-driven option scanner tool
//!
//! Scans argument vectors against option tables loaded from TOML.

use clap::Parser;
use nvgetopt::cli::args::{generate_completions, Cli, Commands};
use nvgetopt::commands::{run_check, run_help_text, run_scan};
use nvgetopt::error::{AppError, ConfigError};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG still overrides the default filter
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_log_filter(cli.verbose)),
    )
    .format_timestamp(None)
    .init();

    // Run the appropriate command
    let result = run(&cli);

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let table = cli.table.as_deref();

    match &cli.command {
        Commands::Scan(args) => run_scan(args, cli.format, table),

        Commands::Check => run_check(cli.format, table),

        Commands::HelpText(args) => run_help_text(args, table),

        Commands::Completions { shell } => {
            generate_completions(*shell);
            Ok(())
        }
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Config(ConfigError::FileNotFound(_)) => {
            eprintln!();
            eprintln!("Hint: Pass an option table with --table or set NVGETOPT_TABLE.");
            eprintln!("      Without one, nvgetopt.toml in the current directory is used.");
        }
        AppError::Config(ConfigError::InvalidFlag { .. }) => {
            eprintln!();
            eprintln!("Hint: Valid flags are has-argument, is-boolean, integer-argument,");
            eprintln!("      string-argument, double-argument, argument-is-optional, allow-disable.");
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_raises_default_filter() {
        assert_eq!(default_log_filter(false), "warn");
        assert_eq!(default_log_filter(true), "debug");

        let cli = Cli::try_parse_from(["nvgetopt", "--verbose", "check"]).unwrap();
        assert_eq!(default_log_filter(cli.verbose), "debug");
    }
}
