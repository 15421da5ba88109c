//! Help text generation
//!
//! Builds a usage listing straight from an option table, so the help a
//! program prints can never drift from what its scanner accepts.

use crate::option::{OptionDescriptor, OptionFlags, OptionTable};
use textwrap::{Options, WrapAlgorithm};

/// Default line width for wrapped descriptions
pub const DEFAULT_WIDTH: usize = 80;

const OPTION_INDENT: &str = "  ";
const DESCRIPTION_INDENT: &str = "      ";

/// Usage form of a single option, e.g. `-l, --level[=LEVEL]`
pub fn option_usage(opt: &OptionDescriptor) -> String {
    let mut usage = String::new();

    if let Some(c) = opt.short() {
        usage.push('-');
        usage.push(c);
        usage.push_str(", ");
    }

    usage.push_str("--");
    if opt.flags.allows_negation() {
        usage.push_str("[no-]");
    }
    usage.push_str(&opt.name);

    if opt.flags.takes_argument() {
        let placeholder = opt.arg_placeholder();
        if opt.flags.contains(OptionFlags::ARGUMENT_IS_OPTIONAL) {
            usage.push_str(&format!("[={}]", placeholder));
        } else {
            usage.push_str(&format!("={}", placeholder));
        }
    }

    usage
}

/// Format the full listing for a table
///
/// Each option gets its usage line followed by its description, word
/// wrapped to `width` columns.
pub fn format_help(table: &OptionTable, width: usize) -> String {
    let mut out = String::new();

    for opt in table {
        out.push_str(OPTION_INDENT);
        out.push_str(&option_usage(opt));
        out.push('\n');

        let description = opt.description.as_deref().unwrap_or("");
        if !description.trim().is_empty() {
            let options = Options::new(width.max(DESCRIPTION_INDENT.len() + 20))
                .initial_indent(DESCRIPTION_INDENT)
                .subsequent_indent(DESCRIPTION_INDENT)
                .break_words(false)
                .wrap_algorithm(WrapAlgorithm::FirstFit);
            for line in textwrap::wrap(description, options) {
                out.push_str(&line);
                out.push('\n');
            }
        }
        out.push('\n');
    }

    out
}
