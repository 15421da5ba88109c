//! Option scanner
//!
//! Walks an argument vector against an [`OptionTable`], yielding one
//! matched option (or parse error) per step. Each scan session owns its
//! cursor, so independent sessions over different vectors never interfere.
//!
//! ```
//! use nvgetopt::{OptionDescriptor, OptionFlags, OptionTable, Scanner};
//! use nvgetopt::scanner::SilentSink;
//!
//! let table = OptionTable::new(vec![
//!     OptionDescriptor::with_short("verbose", 'v', OptionFlags::NONE),
//!     OptionDescriptor::with_short(
//!         "config",
//!         'c',
//!         OptionFlags::HAS_ARGUMENT | OptionFlags::STRING_ARGUMENT,
//!     ),
//! ])
//! .unwrap();
//!
//! let args = ["prog", "-v", "--config=/etc/x.conf"];
//! let ids: Vec<u32> = Scanner::with_sink(&args, &table, SilentSink)
//!     .filter_map(Result::ok)
//!     .map(|m| m.id)
//!     .collect();
//! assert_eq!(ids, vec!['v' as u32, 'c' as u32]);
//! ```

pub mod coerce;
pub mod diagnostics;
pub mod result;

pub use diagnostics::{format_diagnostic, CollectSink, DiagnosticSink, SilentSink, StderrSink};
pub use result::{OptionMatch, OptionValue};

use crate::error::ParseError;
use crate::option::{ArgumentKind, OptionDescriptor, OptionFlags, OptionTable};
use std::iter::FusedIterator;

/// Progress through a token being expanded as a short-option cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cluster {
    /// Index of the token in the argument vector
    index: usize,
    /// Byte offset of the next character to yield
    next: usize,
    /// Byte offset one past the last cluster character
    end: usize,
}

/// A scan session over one argument vector
///
/// The first element of `args` is the program name, used as the prefix
/// of diagnostics; scanning starts at the second element.
pub struct Scanner<'a, A, S = StderrSink> {
    args: &'a [A],
    table: &'a OptionTable,
    cursor: usize,
    cluster: Option<Cluster>,
    sink: S,
}

impl<'a, A: AsRef<str>> Scanner<'a, A, StderrSink> {
    /// Create a scanner that reports errors to standard error
    pub fn new(args: &'a [A], table: &'a OptionTable) -> Self {
        Self::with_sink(args, table, StderrSink)
    }
}

impl<'a, A: AsRef<str>, S: DiagnosticSink> Scanner<'a, A, S> {
    /// Create a scanner that reports errors to `sink`
    pub fn with_sink(args: &'a [A], table: &'a OptionTable, sink: S) -> Self {
        Self {
            args,
            table,
            cursor: 1,
            cluster: None,
            sink,
        }
    }

    /// Program name used in diagnostics
    pub fn program(&self) -> &'a str {
        let args = self.args;
        args.first().map(AsRef::as_ref).unwrap_or("")
    }

    /// Index of the next token to examine
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Tokens not yet examined
    ///
    /// A cluster in progress is not included.
    pub fn remaining(&self) -> &'a [A] {
        let args = self.args;
        &args[self.cursor.min(args.len())..]
    }

    /// The diagnostic sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the scanner, returning its diagnostic sink
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Advance one step
    ///
    /// Returns `None` once the argument vector is exhausted, and on every
    /// call after that. Errors are reported to the sink before being
    /// returned; the offending token has already been skipped.
    pub fn next_option(&mut self) -> Option<Result<OptionMatch, ParseError>> {
        let result = match self.cluster {
            Some(cluster) => self.continue_cluster(cluster),
            None => {
                let args = self.args;
                let token: &'a str = args.get(self.cursor)?.as_ref();
                let index = self.cursor;
                self.cursor += 1;
                self.examine(index, token)
            }
        };

        if let Err(e) = &result {
            self.cluster = None;
            let program = self.program();
            self.sink.report(program, e);
        }

        Some(result)
    }

    /// Classify and match a fresh token
    fn examine(&mut self, index: usize, token: &'a str) -> Result<OptionMatch, ParseError> {
        let body = token
            .strip_prefix("--")
            .or_else(|| token.strip_prefix('-'))
            .ok_or_else(|| ParseError::InvalidToken {
                token: token.to_string(),
            })?;

        let (name, inline) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };

        // Diagnostics quote the token up to, not including, the `=`
        let dashes = token.len() - body.len();
        let token = &token[..dashes + name.len()];

        let table = self.table;
        let mut chars = name.chars();
        let found = match (chars.next(), chars.next()) {
            (Some(c), None) => table.by_short(c).map(|opt| (opt, false)),
            _ => table.by_long(name).or_else(|| {
                self.start_cluster(index, dashes, name)
                    .map(|opt| (opt, false))
            }),
        };

        let (opt, negated) = found.ok_or_else(|| ParseError::UnrecognizedOption {
            token: token.to_string(),
        })?;

        self.apply(opt, negated, inline, token)
    }

    /// Try to treat `name` as a run of argument-less short options
    ///
    /// Every character is checked before anything is committed; on
    /// success the first option is returned and the rest are queued.
    fn start_cluster(
        &mut self,
        index: usize,
        dashes: usize,
        name: &str,
    ) -> Option<&'a OptionDescriptor> {
        let table = self.table;
        let mut chars = name.chars();
        let first = chars.next()?;
        if chars.next().is_none() {
            return None;
        }

        let all_switches = name.chars().all(|c| {
            table
                .by_short(c)
                .is_some_and(|opt| !opt.flags.takes_argument())
        });
        if !all_switches {
            return None;
        }

        self.cluster = Some(Cluster {
            index,
            next: dashes + first.len_utf8(),
            end: dashes + name.len(),
        });
        log::debug!("expanding short option cluster \"{}\"", name);

        table.by_short(first)
    }

    /// Yield the next character of a cluster in progress
    fn continue_cluster(&mut self, cluster: Cluster) -> Result<OptionMatch, ParseError> {
        let args = self.args;
        let table = self.table;
        let token: &'a str = args[cluster.index].as_ref();
        let rest = &token[cluster.next..cluster.end];

        let found = rest.chars().next().and_then(|c| Some((c, table.by_short(c)?)));
        let (c, opt) = match found {
            Some(found) => found,
            None => {
                self.cluster = None;
                return Err(ParseError::UnrecognizedOption {
                    token: token.to_string(),
                });
            }
        };

        let next = cluster.next + c.len_utf8();
        self.cluster = (next < cluster.end).then_some(Cluster { next, ..cluster });

        self.apply(opt, false, None, token)
    }

    /// Apply negation, argument consumption and coercion for a matched option
    fn apply(
        &mut self,
        opt: &'a OptionDescriptor,
        negated: bool,
        inline: Option<&'a str>,
        token: &'a str,
    ) -> Result<OptionMatch, ParseError> {
        let flags = opt.flags;
        let disabled = negated && flags.contains(OptionFlags::ALLOW_DISABLE);

        let mut value = if flags.contains(OptionFlags::IS_BOOLEAN) {
            OptionValue::Bool(!negated)
        } else {
            OptionValue::None
        };

        if flags.takes_argument() && !disabled {
            let argument = match inline {
                Some("") => {
                    return Err(ParseError::MissingArgument {
                        token: token.to_string(),
                    })
                }
                Some(v) => Some(v),
                None => self.take_argument(flags, token)?,
            };

            if let Some(argument) = argument {
                value = convert_argument(opt, argument, token)?;
            }
        } else if let Some(v) = inline {
            return Err(ParseError::UnexpectedArgument {
                token: token.to_string(),
                value: v.to_string(),
            });
        }

        log::debug!(
            "matched option {} (id {}): value={} disabled={}",
            opt.name,
            opt.id,
            value,
            disabled
        );

        Ok(OptionMatch {
            id: opt.id,
            value,
            disabled,
        })
    }

    /// Pull the option argument from the next token
    ///
    /// Optional arguments are skipped when the vector is exhausted or the
    /// next token looks like an option.
    fn take_argument(
        &mut self,
        flags: OptionFlags,
        token: &str,
    ) -> Result<Option<&'a str>, ParseError> {
        let args = self.args;
        let next: Option<&'a str> = args.get(self.cursor).map(AsRef::as_ref);

        if flags.contains(OptionFlags::ARGUMENT_IS_OPTIONAL)
            && next.map_or(true, |n| n.starts_with('-'))
        {
            return Ok(None);
        }

        match next {
            Some(argument) => {
                self.cursor += 1;
                Ok(Some(argument))
            }
            None => Err(ParseError::MissingArgument {
                token: token.to_string(),
            }),
        }
    }
}

/// Convert an argument to the option's declared type
fn convert_argument(
    opt: &OptionDescriptor,
    argument: &str,
    token: &str,
) -> Result<OptionValue, ParseError> {
    let invalid = || ParseError::InvalidArgumentValue {
        token: token.to_string(),
        value: argument.to_string(),
    };

    match opt.kind() {
        ArgumentKind::Integer => coerce::parse_integer(argument)
            .map(OptionValue::Integer)
            .ok_or_else(invalid),
        ArgumentKind::Double => coerce::parse_double(argument)
            .map(OptionValue::Double)
            .ok_or_else(invalid),
        ArgumentKind::String => Ok(OptionValue::String(argument.to_string())),
        ArgumentKind::None | ArgumentKind::Boolean => Err(invalid()),
    }
}

impl<'a, A: AsRef<str>, S: DiagnosticSink> Iterator for Scanner<'a, A, S> {
    type Item = Result<OptionMatch, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_option()
    }
}

impl<'a, A: AsRef<str>, S: DiagnosticSink> FusedIterator for Scanner<'a, A, S> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> OptionTable {
        OptionTable::new(vec![
            OptionDescriptor::with_short("all", 'a', OptionFlags::NONE),
            OptionDescriptor::with_short("bell", 'b', OptionFlags::IS_BOOLEAN),
            OptionDescriptor::with_short("color", 'c', OptionFlags::NONE),
            OptionDescriptor::with_short(
                "file",
                'f',
                OptionFlags::HAS_ARGUMENT | OptionFlags::STRING_ARGUMENT,
            ),
            OptionDescriptor::with_short(
                "level",
                'l',
                OptionFlags::HAS_ARGUMENT
                    | OptionFlags::INTEGER_ARGUMENT
                    | OptionFlags::ARGUMENT_IS_OPTIONAL,
            ),
            OptionDescriptor::new(
                "display",
                256,
                OptionFlags::HAS_ARGUMENT
                    | OptionFlags::STRING_ARGUMENT
                    | OptionFlags::ALLOW_DISABLE,
            ),
        ])
        .unwrap()
    }

    fn scan_all(args: &[&str]) -> (Vec<Result<OptionMatch, ParseError>>, Vec<String>) {
        let table = table();
        let mut scanner = Scanner::with_sink(args, &table, CollectSink::new());
        let results: Vec<_> = scanner.by_ref().collect();
        (results, scanner.into_sink().into_lines())
    }

    #[test]
    fn test_empty_vectors() {
        let table = table();
        let empty: [&str; 0] = [];
        let mut scanner = Scanner::with_sink(&empty, &table, SilentSink);
        assert!(scanner.next_option().is_none());
        assert_eq!(scanner.program(), "");

        let mut scanner = Scanner::with_sink(&["prog"], &table, SilentSink);
        assert!(scanner.next_option().is_none());
        assert!(scanner.next_option().is_none());
    }

    #[test]
    fn test_cluster_state_and_cursor() {
        let table = table();
        let args = ["prog", "-ac", "rest"];
        let mut scanner = Scanner::with_sink(&args, &table, SilentSink);

        assert_eq!(scanner.next_option().unwrap().unwrap().id, 'a' as u32);
        assert!(scanner.cluster.is_some());
        assert_eq!(scanner.cursor(), 2);
        assert_eq!(scanner.next_option().unwrap().unwrap().id, 'c' as u32);
        assert!(scanner.cluster.is_none());
        assert_eq!(scanner.remaining(), ["rest"]);
    }

    #[test]
    fn test_cluster_does_not_touch_arguments() {
        let table = table();
        let args = vec!["prog".to_string(), "--ab".to_string()];
        let count = Scanner::with_sink(&args, &table, SilentSink)
            .filter(Result::is_ok)
            .count();
        assert_eq!(count, 2);
        assert_eq!(args[1], "--ab");
    }

    #[test]
    fn test_cluster_boolean_values() {
        let (results, _) = scan_all(&["prog", "-ba"]);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.id, 'b' as u32);
        assert_eq!(first.value, OptionValue::Bool(true));
        let second = results[1].as_ref().unwrap();
        assert_eq!(second.value, OptionValue::None);
    }

    #[test]
    fn test_cluster_with_inline_value_discards_token() {
        let (results, lines) = scan_all(&["prog", "-ac=1", "-b"]);
        assert_eq!(results.len(), 2);
        assert!(matches!(
            results[0],
            Err(ParseError::UnexpectedArgument { .. })
        ));
        assert_eq!(results[1].as_ref().unwrap().id, 'b' as u32);
        assert_eq!(
            lines,
            vec![
                "prog: option \"-ac\" does not take an argument, but was given an argument of \"1\"."
                    .to_string()
            ]
        );
    }

    #[test]
    fn test_disabled_with_inline_value() {
        let (results, _) = scan_all(&["prog", "--no-display=:0"]);
        assert_eq!(
            results[0],
            Err(ParseError::UnexpectedArgument {
                token: "--no-display".to_string(),
                value: ":0".to_string(),
            })
        );
    }

    #[test]
    fn test_inline_value_not_quoted_in_diagnostics() {
        let (results, lines) =
            scan_all(&["prog", "--level=12x", "--all=yes", "--file=", "--bogus=1", "x=y"]);
        assert_eq!(results.len(), 5);
        assert_eq!(
            lines,
            vec![
                "prog: \"12x\" is not a valid argument for option \"--level\".",
                "prog: option \"--all\" does not take an argument, but was given an argument of \"yes\".",
                "prog: option \"--file\" requires an argument.",
                "prog: unrecognized option: \"--bogus\"",
                "prog: invalid option: \"x=y\"",
            ]
        );
    }

    #[test]
    fn test_lone_dashes_unrecognized() {
        let (results, lines) = scan_all(&["prog", "-", "--"]);
        assert!(matches!(
            results[0],
            Err(ParseError::UnrecognizedOption { .. })
        ));
        assert!(matches!(
            results[1],
            Err(ParseError::UnrecognizedOption { .. })
        ));
        assert_eq!(lines[1], "prog: unrecognized option: \"--\"");
    }

    #[test]
    fn test_optional_argument_consumes_plain_token() {
        let (results, _) = scan_all(&["prog", "--level", "3", "-l"]);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].as_ref().unwrap().value, OptionValue::Integer(3));
        assert_eq!(results[1].as_ref().unwrap().value, OptionValue::None);
    }

    #[test]
    fn test_required_argument_may_start_with_dash() {
        let (results, _) = scan_all(&["prog", "-f", "-weird-name"]);
        assert_eq!(results.len(), 1);
        assert_eq!(
            results[0].as_ref().unwrap().value.as_str(),
            Some("-weird-name")
        );
    }
}
