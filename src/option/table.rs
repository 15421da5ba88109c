//! Validated option table
//!
//! The table is validated once on construction so the scanner never has
//! to handle a descriptor whose flags contradict each other.

use crate::error::TableError;
use crate::option::{OptionDescriptor, OptionFlags};
use std::collections::HashSet;

const TYPE_FLAGS: [OptionFlags; 3] = [
    OptionFlags::INTEGER_ARGUMENT,
    OptionFlags::STRING_ARGUMENT,
    OptionFlags::DOUBLE_ARGUMENT,
];

/// An ordered, validated set of option descriptors
///
/// Lookups are linear and follow table order, so when two entries could
/// match the same token the earlier one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionTable {
    options: Vec<OptionDescriptor>,
}

impl OptionTable {
    /// Create a table, validating every descriptor
    ///
    /// # Errors
    /// Returns the first `TableError` found, in table order
    pub fn new(options: Vec<OptionDescriptor>) -> Result<Self, TableError> {
        let mut seen = HashSet::with_capacity(options.len());

        for opt in &options {
            validate(opt)?;
            if !seen.insert(opt.name.as_str()) {
                return Err(TableError::DuplicateName(opt.name.clone()));
            }
        }

        Ok(Self { options })
    }

    /// All descriptors in table order
    pub fn options(&self) -> &[OptionDescriptor] {
        &self.options
    }

    /// Number of descriptors
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// True if the table has no descriptors
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterate over descriptors in table order
    pub fn iter(&self) -> std::slice::Iter<'_, OptionDescriptor> {
        self.options.iter()
    }

    /// First descriptor with the given id
    pub fn by_id(&self, id: u32) -> Option<&OptionDescriptor> {
        self.options.iter().find(|o| o.id == id)
    }

    /// Descriptor with the given long name
    pub fn by_name(&self, name: &str) -> Option<&OptionDescriptor> {
        self.options.iter().find(|o| o.name == name)
    }

    /// First descriptor selected by the short character `c`
    pub fn by_short(&self, c: char) -> Option<&OptionDescriptor> {
        self.options.iter().find(|o| o.matches_short(c))
    }

    /// Long-name lookup honoring `no-` negation
    ///
    /// Returns the descriptor and whether the name was negated. For each
    /// candidate that allows negation a leading `no-` is stripped before
    /// comparing, so a negatable option can never be matched by a name
    /// that literally starts with `no-`.
    pub fn by_long(&self, name: &str) -> Option<(&OptionDescriptor, bool)> {
        self.options.iter().find_map(|o| {
            let (candidate, negated) = match name.strip_prefix("no-") {
                Some(rest) if o.flags.allows_negation() => (rest, true),
                _ => (name, false),
            };
            (candidate == o.name).then_some((o, negated))
        })
    }
}

impl<'a> IntoIterator for &'a OptionTable {
    type Item = &'a OptionDescriptor;
    type IntoIter = std::slice::Iter<'a, OptionDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<OptionDescriptor>> for OptionTable {
    type Error = TableError;

    fn try_from(options: Vec<OptionDescriptor>) -> Result<Self, Self::Error> {
        Self::new(options)
    }
}

fn validate(opt: &OptionDescriptor) -> Result<(), TableError> {
    let name = &opt.name;
    if name.is_empty() {
        return Err(TableError::EmptyName(opt.id));
    }
    if name.starts_with('-') || name.contains('=') || name.contains(char::is_whitespace) {
        return Err(TableError::InvalidName(name.clone()));
    }

    let flags = opt.flags;
    let types = TYPE_FLAGS.iter().filter(|f| flags.contains(**f)).count();

    if flags.takes_argument() {
        if flags.contains(OptionFlags::IS_BOOLEAN) {
            return Err(TableError::BooleanWithArgument(name.clone()));
        }
        match types {
            0 => return Err(TableError::MissingArgumentType(name.clone())),
            1 => {}
            _ => return Err(TableError::ConflictingArgumentTypes(name.clone())),
        }
    } else {
        if types > 0 {
            return Err(TableError::TypeWithoutArgument(name.clone()));
        }
        if flags.contains(OptionFlags::ARGUMENT_IS_OPTIONAL) {
            return Err(TableError::OptionalWithoutArgument(name.clone()));
        }
    }

    Ok(())
}
