//! Descriptors for the two input datasets.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Column suffix that marks the required, non-blank identifying field.
pub const DOMAIN_COLUMN: &str = "domain";

/// Column suffix holding the company name used as merge key.
pub const NAME_COLUMN: &str = "name";

/// Column suffix the employee aggregate is stored under.
pub const EMPLOYEE_INFO_COLUMN: &str = "employee_info";

/// One tabular input: where it lives and how its columns are prefixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Tag prepended to every column name, e.g. `google`.
    pub prefix: String,
    pub path: PathBuf,
    /// Whether `employee*` columns are aggregated into `{prefix}_employee_info`.
    #[serde(default)]
    pub employee_source: bool,
}

impl Source {
    pub fn new(prefix: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            prefix: prefix.into(),
            path: path.into(),
            employee_source: false,
        }
    }

    #[must_use]
    pub fn with_employee_info(mut self, enabled: bool) -> Self {
        self.employee_source = enabled;
        self
    }

    /// Prefixed output key for a source column (`{prefix}_{column lowercased}`).
    pub fn key_for(&self, column: &str) -> String {
        format!("{}_{}", self.prefix, column.to_lowercase())
    }

    pub fn domain_key(&self) -> String {
        self.key_for(DOMAIN_COLUMN)
    }

    pub fn name_key(&self) -> String {
        self.key_for(NAME_COLUMN)
    }

    pub fn employee_info_key(&self) -> String {
        self.key_for(EMPLOYEE_INFO_COLUMN)
    }
}
