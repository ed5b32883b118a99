//! Company-name join of the primary and secondary datasets.
//!
//! Every primary record is emitted, enriched with the first secondary
//! record sharing its merge key. Secondary records are then appended when
//! no primary record has their key at all. The second step compares keys,
//! not the pairs chosen in the first step: with duplicate keys on either
//! side a secondary record may be neither merged nor appended.

use std::collections::{HashMap, HashSet};

use bizmerge_model::{Dataset, MergeStats, MergedDataset, Record};
use tracing::{debug, info};

/// Merge `secondary` into `primary` by exact equality of the name keys.
///
/// A record without a name key matches other records without one.
pub fn merge_datasets(primary: &Dataset, secondary: &Dataset) -> MergedDataset {
    let primary_key = primary.name_key();
    let secondary_key = secondary.name_key();

    let mut first_secondary: HashMap<Option<&str>, &Record> = HashMap::new();
    for record in &secondary.records {
        first_secondary
            .entry(record.get(&secondary_key))
            .or_insert(record);
    }
    let primary_keys: HashSet<Option<&str>> = primary
        .records
        .iter()
        .map(|record| record.get(&primary_key))
        .collect();

    let mut stats = MergeStats {
        primary: primary.len(),
        secondary: secondary.len(),
        ..MergeStats::default()
    };
    let mut records = Vec::with_capacity(primary.len() + secondary.len());

    for record in &primary.records {
        match first_secondary.get(&record.get(&primary_key)) {
            Some(matched) => {
                stats.matched += 1;
                records.push(record.merged_with(matched));
            }
            None => records.push(record.clone()),
        }
    }

    for record in &secondary.records {
        if !primary_keys.contains(&record.get(&secondary_key)) {
            stats.unmatched_secondary += 1;
            records.push(record.clone());
        }
    }

    debug!(
        primary_key = %primary_key,
        secondary_key = %secondary_key,
        "merge keys"
    );
    info!(
        primary = stats.primary,
        secondary = stats.secondary,
        matched = stats.matched,
        unmatched_secondary = stats.unmatched_secondary,
        merged = records.len(),
        "merge complete"
    );
    MergedDataset { records, stats }
}
