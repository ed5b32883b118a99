//! Free-text normalization.

use std::sync::LazyLock;

use regex::Regex;

/// Characters removed by [`normalize_text`].
///
/// Includes `.` alongside `,` `-` and `/`: the historical pattern was the
/// class `[+,-/()|]`, whose `,-/` range covers all four.
pub const DISALLOWED_CHARS: &[char] = &['+', ',', '-', '.', '/', '(', ')', '|'];

/// Legal-form tokens dropped from company names.
pub const COMPANY_SUFFIXES: &[&str] = &["inc", "ltd", "llc", "corp", "co"];

/// Word boundaries are ASCII-only, so a suffix next to a non-ASCII letter
/// still counts as a whole word (`écorp` loses `corp`).
static COMPANY_SUFFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"(?i)(?-u:\b)(?:{})(?-u:\b)", COMPANY_SUFFIXES.join("|"));
    Regex::new(&pattern).expect("Invalid company suffix regex")
});

/// Lowercase, drop [`DISALLOWED_CHARS`], collapse whitespace runs, trim.
pub fn normalize_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped: String = lowered
        .chars()
        .filter(|ch| !DISALLOWED_CHARS.contains(ch))
        .collect();
    collapse_whitespace(&stripped)
}

/// [`normalize_text`] followed by removal of whole-word legal suffixes.
pub fn normalize_company_name(name: &str) -> String {
    let normalized = normalize_text(name);
    let without_suffixes = COMPANY_SUFFIX_REGEX.replace_all(&normalized, "");
    collapse_whitespace(&without_suffixes)
}

/// Unicode whitespace plus the zero-width no-break space (U+FEFF).
pub fn is_space(ch: char) -> bool {
    ch.is_whitespace() || ch == '\u{feff}'
}

/// Replace every whitespace run with a single space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    let mut parts = text.split(is_space).filter(|part| !part.is_empty());
    let mut collapsed = String::with_capacity(text.len());
    if let Some(first) = parts.next() {
        collapsed.push_str(first);
        for part in parts {
            collapsed.push(' ');
            collapsed.push_str(part);
        }
    }
    collapsed
}
