//! Integration tests for option tables loaded from TOML files
//!
//! Tests the path the `nvgetopt` tool takes: file -> validated table ->
//! scan report / help text.

use nvgetopt::cli::output::{ScanStep, TableDisplay};
use nvgetopt::commands::scan::scan_arguments;
use nvgetopt::config::TableFile;
use nvgetopt::error::{ConfigError, TableError};
use nvgetopt::help::format_help;
use nvgetopt::scanner::SilentSink;
use nvgetopt::{OptionValue, Scanner};
use std::io::Write;

const SETTINGS_TABLE: &str = r#"
[[option]]
name = "ctrl-display"
id = "c"
flags = ["has-argument", "string-argument", "allow-disable"]
arg_name = "DISPLAY"
description = "Control the specified X display."

[[option]]
name = "verbose"
id = "V"
flags = ["has-argument", "integer-argument", "argument-is-optional"]
arg_name = "LEVEL"
description = "Controls how much information is printed."

[[option]]
name = "load-config-only"
id = "l"

[[option]]
name = "rewrite-config-file"
id = "r"

[[option]]
name = "use-gtk2"
id = 300
flags = ["is-boolean"]
"#;

fn write_table(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_table_file_scan_end_to_end() {
    let file = write_table(SETTINGS_TABLE);
    let table = TableFile::load(file.path()).unwrap();
    assert_eq!(table.len(), 5);

    let argv = [
        "nvidia-settings",
        "-lr",
        "--ctrl-display=:1",
        "--no-use-gtk2",
        "-V",
    ];
    let report = scan_arguments(Scanner::with_sink(&argv, &table, SilentSink), &table, false);

    assert_eq!(report.error_count(), 0);
    assert_eq!(
        report.to_compact(),
        "load-config-only rewrite-config-file ctrl-display=\":1\" use-gtk2=false verbose"
    );

    match &report.steps[2] {
        ScanStep::Match { id, value, .. } => {
            assert_eq!(*id, 'c' as u32);
            assert_eq!(*value, OptionValue::String(":1".to_string()));
        }
        other => panic!("Expected match, got {:?}", other),
    }
}

#[test]
fn test_table_file_help_text() {
    let table = TableFile::parse(SETTINGS_TABLE).unwrap();
    let help = format_help(&table, 60);

    assert!(help.contains("  -c, --[no-]ctrl-display=DISPLAY\n"));
    assert!(help.contains("  -V, --verbose[=LEVEL]\n"));
    assert!(help.contains("  --[no-]use-gtk2\n"));
    assert!(help.contains("      Control the specified X display.\n"));
}

#[test]
fn test_table_file_validation_error() {
    let file = write_table(
        r#"
[[option]]
name = "x"
id = "x"
flags = ["is-boolean", "has-argument", "string-argument"]
"#,
    );

    let err = TableFile::load(file.path()).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Table(TableError::BooleanWithArgument(ref name)) if name == "x"
    ));
}

#[test]
fn test_table_file_duplicate_names() {
    let err = TableFile::parse(
        r#"
[[option]]
name = "same"
id = 1

[[option]]
name = "same"
id = 2
"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Table(TableError::DuplicateName(_))));
}
