//! Validation report.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub total_rows: usize,
    /// Distinct key values; rows lacking the key column count as one value.
    pub unique_keys: usize,
    /// 1-based data row numbers with a missing or empty address.
    pub missing_address_rows: Vec<usize>,
}

impl ValidationReport {
    /// Diagnostic lines in output order: one per missing address, then the
    /// totals.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .missing_address_rows
            .iter()
            .map(|row| format!("Missing address in row {row}"))
            .collect();
        lines.push(format!("Total rows: {}", self.total_rows));
        lines.push(format!("Unique companies: {}", self.unique_keys));
        lines
    }

    pub fn has_missing_addresses(&self) -> bool {
        !self.missing_address_rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_lines() {
        assert_eq!(
            ValidationReport::default().lines(),
            vec!["Total rows: 0", "Unique companies: 0"]
        );
    }

    #[test]
    fn missing_rows_come_first() {
        let report = ValidationReport {
            total_rows: 3,
            unique_keys: 2,
            missing_address_rows: vec![2, 3],
        };
        assert_eq!(
            report.lines(),
            vec![
                "Missing address in row 2",
                "Missing address in row 3",
                "Total rows: 3",
                "Unique companies: 2",
            ]
        );
        assert!(report.has_missing_addresses());
    }
}
