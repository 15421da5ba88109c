//! Option table files
//!
//! Handles the TOML representation of option tables used by the
//! `nvgetopt` tool:
//!
//! ```toml
//! [[option]]
//! name = "config"
//! id = "c"
//! flags = ["has-argument", "string-argument"]
//! arg_name = "FILE"
//! description = "Read settings from FILE."
//! ```

pub mod file;

pub use file::TableFile;

use crate::error::ConfigError;
use crate::option::{OptionDescriptor, OptionFlags, OptionTable};
use serde::{Deserialize, Serialize};

/// Top-level table file structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TableConfig {
    /// Option entries in table order
    #[serde(rename = "option")]
    pub options: Vec<OptionEntry>,
}

impl TableConfig {
    /// Convert to a validated option table
    pub fn to_table(&self) -> Result<OptionTable, ConfigError> {
        let options: Result<Vec<_>, _> = self
            .options
            .iter()
            .map(OptionEntry::to_descriptor)
            .collect();

        Ok(OptionTable::new(options?)?)
    }
}

/// Option identifier as written in a table file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdSpec {
    /// Numeric id, e.g. `256`
    Number(u32),
    /// Single character, e.g. `"v"`
    Char(String),
}

/// One option entry in a table file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionEntry {
    /// Long option name
    pub name: String,
    /// Identifier / short character
    pub id: IdSpec,
    /// Flag names (kebab-case)
    #[serde(default)]
    pub flags: Vec<String>,
    /// Argument placeholder for help text
    #[serde(default)]
    pub arg_name: Option<String>,
    /// Help text
    #[serde(default)]
    pub description: Option<String>,
}

impl OptionEntry {
    /// Convert to an OptionDescriptor domain object
    pub fn to_descriptor(&self) -> Result<OptionDescriptor, ConfigError> {
        let id = match &self.id {
            IdSpec::Number(n) => *n,
            IdSpec::Char(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => c as u32,
                    _ => {
                        return Err(ConfigError::InvalidId {
                            option: self.name.clone(),
                            id: s.clone(),
                        })
                    }
                }
            }
        };

        let mut flags = OptionFlags::NONE;
        for name in &self.flags {
            flags |= OptionFlags::from_name(name).ok_or_else(|| ConfigError::InvalidFlag {
                option: self.name.clone(),
                flag: name.clone(),
            })?;
        }

        let mut descriptor = OptionDescriptor::new(self.name.clone(), id, flags);
        descriptor.arg_name = self.arg_name.clone();
        descriptor.description = self.description.clone();
        Ok(descriptor)
    }
}

impl From<&OptionDescriptor> for OptionEntry {
    fn from(opt: &OptionDescriptor) -> Self {
        let id = match opt.short() {
            Some(c) => IdSpec::Char(c.to_string()),
            None => IdSpec::Number(opt.id),
        };
        Self {
            name: opt.name.clone(),
            id,
            flags: opt.flags.names().into_iter().map(String::from).collect(),
            arg_name: opt.arg_name.clone(),
            description: opt.description.clone(),
        }
    }
}
