//! Normalization rules applied to every source field.
//!
//! - [`normalize_text`]: lowercase, strip punctuation, collapse whitespace
//! - [`normalize_company_name`]: text rule plus legal-suffix removal
//! - [`split_categories`]: `|`-delimited category lists
//!
//! All functions are total: any input string yields an output string.

mod categories;
mod text;

pub use categories::{serialize_categories, split_categories, split_categories_serialized};
pub use text::{
    COMPANY_SUFFIXES, DISALLOWED_CHARS, collapse_whitespace, is_space, normalize_company_name,
    normalize_text,
};
