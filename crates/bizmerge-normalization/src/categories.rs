//! Category list splitting.

use crate::text::{is_space, normalize_text};

const CATEGORY_DELIMITER: char = '|';

/// Split on `|`, trim and normalize every piece.
///
/// Empty pieces and duplicates are kept so the output has one entry per
/// delimiter-separated segment.
pub fn split_categories(raw: &str) -> Vec<String> {
    raw.split(CATEGORY_DELIMITER)
        .map(|piece| normalize_text(piece.trim_matches(is_space)))
        .collect()
}

/// Encode a category list as JSON array text.
pub fn serialize_categories(categories: &[String]) -> String {
    serde_json::Value::from(categories.to_vec()).to_string()
}

/// [`split_categories`] followed by [`serialize_categories`].
pub fn split_categories_serialized(raw: &str) -> String {
    serialize_categories(&split_categories(raw))
}
