//! Merge and check pipelines with explicit stages.
//!
//! Merge runs these stages in order:
//! 1. **Load**: stream the primary, then the secondary source
//! 2. **Merge**: join both datasets on the company-name key
//! 3. **Output**: write the merged CSV
//!
//! Check is an independent pass over the written file.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use bizmerge_ingest::load_dataset;
use bizmerge_model::{LoadStats, MergeStats, PipelineConfig, Source};
use bizmerge_output::write_merged;
use bizmerge_transform::merge_datasets;
use bizmerge_validate::{ValidateOptions, ValidationReport, validate_file};

/// Per-source load summary.
#[derive(Debug, Clone)]
pub struct SourceSummary {
    pub prefix: String,
    pub path: PathBuf,
    pub stats: LoadStats,
}

impl SourceSummary {
    fn new(source: &Source, stats: LoadStats) -> Self {
        Self {
            prefix: source.prefix.clone(),
            path: source.path.clone(),
            stats,
        }
    }
}

/// Result of a merge run.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub primary: SourceSummary,
    pub secondary: SourceSummary,
    pub merge: MergeStats,
    pub output: PathBuf,
    pub rows_written: usize,
}

/// Load both sources, merge them, and write the merged dataset.
///
/// # Errors
///
/// Fails on the first unreadable source or an unwritable output. Nothing is
/// written when either load fails.
pub fn run_merge(config: &PipelineConfig) -> Result<MergeOutcome> {
    let start = Instant::now();

    let primary = info_span!("primary")
        .in_scope(|| load_dataset(&config.primary))
        .with_context(|| format!("load {} dataset", config.primary.prefix))?;
    let secondary = info_span!("secondary")
        .in_scope(|| load_dataset(&config.secondary))
        .with_context(|| format!("load {} dataset", config.secondary.prefix))?;

    let merged = merge_datasets(&primary, &secondary);

    write_merged(&config.output, &merged)
        .with_context(|| format!("write {}", config.output.display()))?;

    info!(
        rows_written = merged.len(),
        duration_ms = start.elapsed().as_millis(),
        "merge pipeline complete"
    );
    Ok(MergeOutcome {
        primary: SourceSummary::new(&config.primary, primary.stats),
        secondary: SourceSummary::new(&config.secondary, secondary.stats),
        merge: merged.stats,
        output: config.output.clone(),
        rows_written: merged.len(),
    })
}

/// Validation options derived from the configuration's check section.
pub fn check_options(config: &PipelineConfig) -> ValidateOptions {
    ValidateOptions::new(config.check_key_column(), config.check_address_column())
}

/// Validate the merged file named by the configuration.
///
/// # Errors
///
/// Returns an error if the file cannot be read; no counts are produced then.
pub fn run_check(config: &PipelineConfig) -> Result<ValidationReport> {
    let input = config.check_input();
    let options = check_options(config);
    let span = info_span!("check", path = %input.display());
    let _guard = span.enter();
    let report =
        validate_file(input, &options).with_context(|| format!("check {}", input.display()))?;
    if report.has_missing_addresses() {
        warn!(
            rows = report.missing_address_rows.len(),
            column = %options.address_column,
            "merged dataset has rows without an address"
        );
    }
    Ok(report)
}
