//! Merged dataset output.
//!
//! Writes one CSV row per merged record. The header is the union of all
//! record keys: the first record's keys in order, then any new key in the
//! order it is first encountered. Fields a record lacks are written empty.

mod error;
mod writer;

pub use error::{OutputError, Result};
pub use writer::{union_headers, write_merged, write_merged_to};
