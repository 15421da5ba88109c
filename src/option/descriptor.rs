//! Option descriptor type
//!
//! Provides the OptionDescriptor struct describing one entry of an
//! option table.

use crate::option::OptionFlags;
use std::fmt;

/// Kind of value an option produces when matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentKind {
    /// No argument
    None,
    /// Boolean switch (negatable with `--no-`)
    Boolean,
    /// Integer argument
    Integer,
    /// String argument
    String,
    /// Floating-point argument
    Double,
}

/// One entry in an option table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDescriptor {
    /// Long option name, without leading dashes
    pub name: String,
    /// Identifier returned on a match; doubles as the short option
    /// character when it is a printable ASCII code
    pub id: u32,
    /// Behavior flags
    pub flags: OptionFlags,
    /// Placeholder for the argument in help text
    pub arg_name: Option<String>,
    /// Help text
    pub description: Option<String>,
}

impl OptionDescriptor {
    /// Create a new descriptor
    pub fn new(name: impl Into<String>, id: u32, flags: OptionFlags) -> Self {
        Self {
            name: name.into(),
            id,
            flags,
            arg_name: None,
            description: None,
        }
    }

    /// Create a descriptor reachable as `-c` as well as `--name`
    pub fn with_short(name: impl Into<String>, short: char, flags: OptionFlags) -> Self {
        Self::new(name, short as u32, flags)
    }

    /// Set the argument placeholder
    pub fn with_arg_name(mut self, arg_name: impl Into<String>) -> Self {
        self.arg_name = Some(arg_name.into());
        self
    }

    /// Set the help text
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The short option character, if the id is a printable ASCII code
    pub fn short(&self) -> Option<char> {
        char::from_u32(self.id).filter(|c| c.is_ascii_graphic())
    }

    /// True if `c` selects this option in short form
    #[inline]
    pub fn matches_short(&self, c: char) -> bool {
        self.short() == Some(c)
    }

    /// Value kind produced by a match on this option
    ///
    /// Meaningful for validated descriptors, where at most one type flag
    /// is set and only alongside HAS_ARGUMENT.
    pub fn kind(&self) -> ArgumentKind {
        let flags = self.flags;
        if flags.contains(OptionFlags::IS_BOOLEAN) {
            ArgumentKind::Boolean
        } else if !flags.takes_argument() {
            ArgumentKind::None
        } else if flags.contains(OptionFlags::INTEGER_ARGUMENT) {
            ArgumentKind::Integer
        } else if flags.contains(OptionFlags::DOUBLE_ARGUMENT) {
            ArgumentKind::Double
        } else {
            ArgumentKind::String
        }
    }

    /// Placeholder used for the argument in help text
    pub fn arg_placeholder(&self) -> String {
        self.arg_name
            .clone()
            .unwrap_or_else(|| self.name.to_uppercase().replace('-', "_"))
    }
}

impl fmt::Display for OptionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.short() {
            Some(c) => write!(f, "-{}, --{}", c, self.name),
            None => write!(f, "--{}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_character() {
        let opt = OptionDescriptor::with_short("verbose", 'v', OptionFlags::NONE);
        assert_eq!(opt.short(), Some('v'));
        assert!(opt.matches_short('v'));

        let opt = OptionDescriptor::new("ctrl-display", 256, OptionFlags::NONE);
        assert_eq!(opt.short(), None);
        assert!(!opt.matches_short('\u{100}'));

        let opt = OptionDescriptor::new("zero", 0, OptionFlags::NONE);
        assert_eq!(opt.short(), None);
    }

    #[test]
    fn test_kind() {
        let flags = OptionFlags::HAS_ARGUMENT | OptionFlags::DOUBLE_ARGUMENT;
        assert_eq!(OptionDescriptor::new("gamma", 1, flags).kind(), ArgumentKind::Double);
        assert_eq!(
            OptionDescriptor::new("quiet", 2, OptionFlags::IS_BOOLEAN).kind(),
            ArgumentKind::Boolean
        );
        assert_eq!(
            OptionDescriptor::new("reset", 3, OptionFlags::ALLOW_DISABLE).kind(),
            ArgumentKind::None
        );
    }

    #[test]
    fn test_display() {
        let opt = OptionDescriptor::with_short("config", 'c', OptionFlags::NONE);
        assert_eq!(opt.to_string(), "-c, --config");
        let opt = OptionDescriptor::new("no-probe", 300, OptionFlags::NONE);
        assert_eq!(opt.to_string(), "--no-probe");
    }

    #[test]
    fn test_arg_placeholder() {
        let opt = OptionDescriptor::new("ctrl-display", 256, OptionFlags::HAS_ARGUMENT);
        assert_eq!(opt.arg_placeholder(), "CTRL_DISPLAY");
        let opt = opt.with_arg_name("DISPLAY");
        assert_eq!(opt.arg_placeholder(), "DISPLAY");
    }
}
