//! Per-row cleaning and prefixing.

use bizmerge_model::{RawRecord, Record, Source};
use bizmerge_normalization::{normalize_company_name, normalize_text, split_categories_serialized};
use tracing::trace;

use crate::employee::EmployeeColumns;

/// Cleaning rule selected for a source column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRule {
    /// `|`-delimited list, stored as JSON array text.
    Categories,
    /// Company name with legal suffixes removed.
    CompanyName,
    /// Address, country, or region text.
    Location,
    General,
}

impl ColumnRule {
    /// Pick a rule by case-insensitive substring of the column name.
    ///
    /// Checked in order: `category`, `name`, `address`/`country`/`region`.
    pub fn for_column(column: &str) -> Self {
        let lowered = column.to_lowercase();
        if lowered.contains("category") {
            Self::Categories
        } else if lowered.contains("name") {
            Self::CompanyName
        } else if ["address", "country", "region"]
            .iter()
            .any(|marker| lowered.contains(marker))
        {
            Self::Location
        } else {
            Self::General
        }
    }

    pub fn apply(self, raw: &str) -> String {
        match self {
            Self::Categories => split_categories_serialized(raw),
            Self::CompanyName => normalize_company_name(raw),
            Self::Location | Self::General => normalize_text(raw),
        }
    }
}

/// Transforms raw rows of one source into prefixed, normalized records.
///
/// Column rules, output keys, and employee columns are resolved once from
/// the header row.
#[derive(Debug, Clone)]
pub struct RowTransformer {
    columns: Vec<(ColumnRule, String)>,
    employee: Option<(EmployeeColumns, String)>,
    domain_key: String,
}

impl RowTransformer {
    pub fn new<'a>(source: &Source, headers: impl IntoIterator<Item = &'a str>) -> Self {
        let headers: Vec<&str> = headers.into_iter().collect();
        let columns = headers
            .iter()
            .map(|column| (ColumnRule::for_column(column), source.key_for(column)))
            .collect();
        let employee = source.employee_source.then(|| {
            (
                EmployeeColumns::from_headers(headers.iter().copied()),
                source.employee_info_key(),
            )
        });
        Self {
            columns,
            employee,
            domain_key: source.domain_key(),
        }
    }

    /// Clean one row. Returns `None` when the domain value is absent or blank.
    pub fn transform(&self, row: &RawRecord) -> Option<Record> {
        let mut record = Record::new();
        for ((rule, key), (_, value)) in self.columns.iter().zip(row.iter()) {
            record.set(key.as_str(), rule.apply(value));
        }
        if let Some((employee_columns, key)) = &self.employee {
            record.set(key.as_str(), employee_columns.aggregate(row));
        }
        let has_domain = record
            .get(&self.domain_key)
            .is_some_and(|domain| !domain.trim().is_empty());
        if !has_domain {
            trace!(domain_key = %self.domain_key, "discarding row without domain");
            return None;
        }
        Some(record)
    }

    /// Cleaned values of every column joined by single spaces.
    ///
    /// Not stored in the transformed record.
    pub fn all_info(&self, row: &RawRecord) -> String {
        self.columns
            .iter()
            .zip(row.iter())
            .map(|((rule, _), (_, value))| rule.apply(value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Transform a single row, resolving rules from the row's own columns.
pub fn transform_row(row: &RawRecord, source: &Source) -> Option<Record> {
    RowTransformer::new(source, row.column_names()).transform(row)
}
