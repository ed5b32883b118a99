//! Shared data model for the bizmerge pipeline.
//!
//! Records, datasets, source descriptors, and the pipeline configuration
//! used by the ingest, transform, output, and validate crates.

pub mod config;
pub mod dataset;
pub mod error;
pub mod record;
pub mod source;

pub use config::{CheckConfig, PipelineConfig};
pub use dataset::{Dataset, LoadStats, MergeStats, MergedDataset};
pub use error::ConfigError;
pub use record::{RawRecord, Record};
pub use source::{DOMAIN_COLUMN, EMPLOYEE_INFO_COLUMN, NAME_COLUMN, Source};
