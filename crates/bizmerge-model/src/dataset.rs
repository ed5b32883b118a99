//! Materialized datasets handed between pipeline stages.

use crate::record::Record;

/// Row counters collected while a source is loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub rows_read: usize,
    pub rows_kept: usize,
    /// Rows dropped because their domain value was blank.
    pub rows_discarded: usize,
}

/// Transformed rows of one source, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    /// Prefix shared by every key in `records`.
    pub prefix: String,
    pub records: Vec<Record>,
    pub stats: LoadStats,
}

impl Dataset {
    pub fn new(prefix: impl Into<String>, records: Vec<Record>, stats: LoadStats) -> Self {
        Self {
            prefix: prefix.into(),
            records,
            stats,
        }
    }

    /// Key under which this dataset stores the merge key.
    pub fn name_key(&self) -> String {
        format!("{}_{}", self.prefix, crate::source::NAME_COLUMN)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Counters describing one merge run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub primary: usize,
    pub secondary: usize,
    /// Primary records enriched with a secondary record.
    pub matched: usize,
    /// Secondary records appended because no primary record shares their key.
    pub unmatched_secondary: usize,
}

/// Merge output: primary-derived rows first, then unmatched secondary rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedDataset {
    pub records: Vec<Record>,
    pub stats: MergeStats,
}

impl MergedDataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
