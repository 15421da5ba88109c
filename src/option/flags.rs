//! Option flag set
//!
//! Bit set describing how an option behaves: whether it takes an
//! argument, what type that argument is, and whether it can be negated.

use std::fmt;

bitflags::bitflags! {
    /// Set of behavior flags for an option descriptor
    #[derive(Default)]
    pub struct OptionFlags: u32 {
        /// The option takes an argument
        const HAS_ARGUMENT         = 0x01;
        /// The option is a boolean; `--no-` negates it
        const IS_BOOLEAN           = 0x02;
        /// The argument is parsed as an integer
        const INTEGER_ARGUMENT     = 0x04;
        /// The argument is kept as a string
        const STRING_ARGUMENT      = 0x08;
        /// The argument may be omitted
        const ARGUMENT_IS_OPTIONAL = 0x10;
        /// `--no-` disables the option
        const ALLOW_DISABLE        = 0x20;
        /// The argument is parsed as a floating-point number
        const DOUBLE_ARGUMENT      = 0x40;
    }
}

impl OptionFlags {
    /// No flags: a plain argument-less switch
    pub const NONE: Self = Self::empty();

    const NAMED: [(&'static str, Self); 7] = [
        ("has-argument", Self::HAS_ARGUMENT),
        ("is-boolean", Self::IS_BOOLEAN),
        ("integer-argument", Self::INTEGER_ARGUMENT),
        ("string-argument", Self::STRING_ARGUMENT),
        ("argument-is-optional", Self::ARGUMENT_IS_OPTIONAL),
        ("allow-disable", Self::ALLOW_DISABLE),
        ("double-argument", Self::DOUBLE_ARGUMENT),
    ];

    /// The option takes an argument (required or optional)
    pub const fn takes_argument(self) -> bool {
        self.contains(Self::HAS_ARGUMENT)
    }

    /// The option accepts a `no-` prefix on its long name
    pub const fn allows_negation(self) -> bool {
        self.intersects(Self::IS_BOOLEAN.union(Self::ALLOW_DISABLE))
    }

    /// Look up a flag by its kebab-case name (as used in table files)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::NAMED
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, flag)| *flag)
    }

    /// Names of all flags set, in declaration order
    pub fn names(self) -> Vec<&'static str> {
        Self::NAMED
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(n, _)| *n)
            .collect()
    }
}

impl fmt::Display for OptionFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        write!(f, "{}", self.names().join("|"))
    }
}
