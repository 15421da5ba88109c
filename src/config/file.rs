//! Option table file loading
//!
//! Handles loading option tables from TOML files.

use crate::config::TableConfig;
use crate::error::ConfigError;
use crate::option::OptionTable;

use std::path::{Path, PathBuf};

/// Option table file handler
pub struct TableFile;

impl TableFile {
    /// Load and validate an option table from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<OptionTable, ConfigError> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path.display().to_string()))?;

        let table = Self::parse(&content)?;
        log::debug!("Loaded {} option(s) from {}", table.len(), path.display());
        Ok(table)
    }

    /// Parse and validate an option table from TOML text
    pub fn parse(content: &str) -> Result<OptionTable, ConfigError> {
        let config: TableConfig = toml::from_str(content)?;
        config.to_table()
    }

    /// Load the table from the given path, or the first default location
    /// that exists
    pub fn load_or_default(path: Option<&str>) -> Result<OptionTable, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let paths = Self::default_paths();
        match paths.iter().find(|p| p.exists()) {
            Some(path) => {
                log::info!("Using option table {}", path.display());
                Self::load(path)
            }
            None => Err(ConfigError::FileNotFound(
                paths
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            )),
        }
    }

    /// Get default table file paths
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // Current directory
        paths.push(PathBuf::from("nvgetopt.toml"));
        paths.push(PathBuf::from(".nvgetopt.toml"));

        // User config
        if let Some(home) = dirs_path_home() {
            paths.push(home.join(".config/nvgetopt/options.toml"));
        }

        paths
    }
}

fn dirs_path_home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}
