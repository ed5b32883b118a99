//! Pipeline configuration.
//!
//! Defaults reproduce the fixed file layout the tool has always used:
//! `google_dataset.csv` + `facebook_dataset.csv` → `merged_dataset.csv`.
//! A TOML file may override any part of it; CLI flags override the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::source::Source;

pub const DEFAULT_PRIMARY_PREFIX: &str = "google";
pub const DEFAULT_PRIMARY_PATH: &str = "google_dataset.csv";
pub const DEFAULT_SECONDARY_PREFIX: &str = "facebook";
pub const DEFAULT_SECONDARY_PATH: &str = "facebook_dataset.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "merged_dataset.csv";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Employee-bearing dataset; its rows lead the merged output.
    pub primary: Source,
    pub secondary: Source,
    pub output: PathBuf,
    pub check: CheckConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            primary: Source::new(DEFAULT_PRIMARY_PREFIX, DEFAULT_PRIMARY_PATH)
                .with_employee_info(true),
            secondary: Source::new(DEFAULT_SECONDARY_PREFIX, DEFAULT_SECONDARY_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            check: CheckConfig::default(),
        }
    }
}

/// Columns inspected by the merged-output check.
///
/// Unset columns fall back to the primary source's name and address keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// File to check (defaults to the pipeline output).
    pub input: Option<PathBuf>,
    pub key_column: Option<String>,
    pub address_column: Option<String>,
}

impl PipelineConfig {
    /// Read a TOML configuration file. Missing sections keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn check_input(&self) -> &Path {
        self.check.input.as_deref().unwrap_or(&self.output)
    }

    pub fn check_key_column(&self) -> String {
        self.check
            .key_column
            .clone()
            .unwrap_or_else(|| self.primary.name_key())
    }

    pub fn check_address_column(&self) -> String {
        self.check
            .address_column
            .clone()
            .unwrap_or_else(|| self.primary.key_for("address"))
    }
}
