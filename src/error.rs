//! Unified error types for nvgetopt
//!
//! This module defines all error types used throughout the crate.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from loading an option table file
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// One or more arguments failed to scan
    #[error("{0} argument(s) could not be parsed")]
    ScanFailed(usize),

    /// IO error (file operations, output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced while scanning an argument vector
///
/// None of these abort a scan; the scanner reports the error and moves
/// past the offending token. The `Display` form is the diagnostic line
/// without the leading program name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Token does not start with a dash
    #[error("invalid option: \"{token}\"")]
    InvalidToken { token: String },

    /// No table entry matches the token
    #[error("unrecognized option: \"{token}\"")]
    UnrecognizedOption { token: String },

    /// A required option argument is absent or empty
    #[error("option \"{token}\" requires an argument.")]
    MissingArgument { token: String },

    /// An inline `=value` was given to an option that takes none
    #[error("option \"{token}\" does not take an argument, but was given an argument of \"{value}\".")]
    UnexpectedArgument { token: String, value: String },

    /// The argument could not be coerced to the option's type
    #[error("\"{value}\" is not a valid argument for option \"{token}\".")]
    InvalidArgumentValue { token: String, value: String },
}

impl ParseError {
    /// The token being examined, without any `=value` suffix
    pub fn token(&self) -> &str {
        match self {
            ParseError::InvalidToken { token }
            | ParseError::UnrecognizedOption { token }
            | ParseError::MissingArgument { token }
            | ParseError::UnexpectedArgument { token, .. }
            | ParseError::InvalidArgumentValue { token, .. } => token,
        }
    }

    /// Short machine-friendly name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::InvalidToken { .. } => "invalid-token",
            ParseError::UnrecognizedOption { .. } => "unrecognized-option",
            ParseError::MissingArgument { .. } => "missing-argument",
            ParseError::UnexpectedArgument { .. } => "unexpected-argument",
            ParseError::InvalidArgumentValue { .. } => "invalid-argument-value",
        }
    }
}

/// Errors from option table validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Option name is empty
    #[error("Option with id {0} has an empty name")]
    EmptyName(u32),

    /// Option name contains characters that can never match
    #[error("Invalid option name '{0}': names must not start with '-' or contain '=' or whitespace")]
    InvalidName(String),

    /// Two options share a long name
    #[error("Duplicate option name '{0}'")]
    DuplicateName(String),

    /// HAS_ARGUMENT without a type flag
    #[error("Option '{0}' takes an argument but declares no argument type")]
    MissingArgumentType(String),

    /// More than one of the integer/string/double flags
    #[error("Option '{0}' declares more than one argument type")]
    ConflictingArgumentTypes(String),

    /// A type flag on an option that takes no argument
    #[error("Option '{0}' declares an argument type but does not take an argument")]
    TypeWithoutArgument(String),

    /// ARGUMENT_IS_OPTIONAL on an option that takes no argument
    #[error("Option '{0}' has an optional argument but does not take an argument")]
    OptionalWithoutArgument(String),

    /// IS_BOOLEAN combined with HAS_ARGUMENT
    #[error("Boolean option '{0}' cannot take an argument")]
    BooleanWithArgument(String),
}

/// Errors from option table file parsing
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Table file not found
    #[error("Option table file not found: {0}")]
    FileNotFound(String),

    /// Unknown flag name in a table file
    #[error("Unknown flag '{flag}' on option '{option}'")]
    InvalidFlag { option: String, flag: String },

    /// Option id given as a string that is not a single character
    #[error("Invalid id '{id}' on option '{option}': expected an integer or a single character")]
    InvalidId { option: String, id: String },

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// The parsed table failed validation
    #[error("{0}")]
    Table(#[from] TableError),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
