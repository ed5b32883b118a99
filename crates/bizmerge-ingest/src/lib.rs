//! Dataset loading.
//!
//! Streams a CSV source row by row through the
//! [`RowTransformer`](bizmerge_transform::RowTransformer) and buffers the
//! kept rows in source order.
//!
//! # Example
//!
//! ```ignore
//! use bizmerge_ingest::load_dataset;
//! use bizmerge_model::Source;
//!
//! let source = Source::new("google", "google_dataset.csv").with_employee_info(true);
//! let dataset = load_dataset(&source)?;
//! println!("kept {} of {} rows", dataset.stats.rows_kept, dataset.stats.rows_read);
//! ```

mod error;
mod loader;

pub use error::{IngestError, Result};
pub use loader::{load_dataset, read_dataset};
