//! Employee-info aggregation for the employee-bearing source.

use bizmerge_model::RawRecord;
use bizmerge_normalization::is_space;

const EMPLOYEE_MARKER: &str = "employee";

/// Whether a source column contributes to the employee aggregate.
pub fn is_employee_column(name: &str) -> bool {
    name.to_lowercase().contains(EMPLOYEE_MARKER)
}

/// Positions of the employee columns in a header row.
///
/// Resolved once per source so the column scan is not repeated for every
/// row. A repeated column name contributes once, at its first position,
/// with the value of its last occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeColumns {
    indices: Vec<usize>,
}

impl EmployeeColumns {
    pub fn from_headers<'a>(headers: impl IntoIterator<Item = &'a str>) -> Self {
        let mut names: Vec<&str> = Vec::new();
        let mut indices = Vec::new();
        for (idx, name) in headers.into_iter().enumerate() {
            if !is_employee_column(name) {
                continue;
            }
            match names.iter().position(|seen| *seen == name) {
                Some(slot) => indices[slot] = idx,
                None => {
                    names.push(name);
                    indices.push(idx);
                }
            }
        }
        Self { indices }
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Space-join the raw values of the employee columns, trimmed.
    pub fn aggregate(&self, row: &RawRecord) -> String {
        let values: Vec<&str> = row.iter().map(|(_, value)| value).collect();
        let mut info = String::new();
        for &idx in &self.indices {
            info.push(' ');
            info.push_str(values.get(idx).copied().unwrap_or_default());
        }
        info.trim_matches(is_space).to_string()
    }
}

/// One-off aggregation over a single row's own columns.
pub fn aggregate_employee_info(row: &RawRecord) -> String {
    EmployeeColumns::from_headers(row.column_names()).aggregate(row)
}
