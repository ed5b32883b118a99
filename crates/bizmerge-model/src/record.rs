//! Row representations shared by every pipeline stage.
//!
//! Both types keep their columns in insertion order. Output headers are
//! derived from that order, so a `HashMap` would make the merged file
//! non-deterministic.

/// One input row exactly as the tabular reader produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    columns: Vec<(String, String)>,
}

impl RawRecord {
    /// Build a raw record from parallel header and value slices.
    ///
    /// Missing trailing values become empty strings; surplus values are dropped.
    pub fn from_headers<H, V>(headers: &[H], values: &[V]) -> Self
    where
        H: AsRef<str>,
        V: AsRef<str>,
    {
        let columns = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let value: &str = values.get(idx).map_or("", |value| value.as_ref());
                let name: &str = header.as_ref();
                (name.to_string(), value.to_string())
            })
            .collect();
        Self { columns }
    }

    /// Raw value of the first column with exactly this name.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            columns: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

/// Ordered key/value mapping used for transformed and merged rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`.
    ///
    /// An existing key keeps its position and has its value replaced; a new
    /// key is appended.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Append `key` only if it is not present yet. Returns whether it was added.
    pub fn insert_if_absent(&mut self, key: &str, value: &str) -> bool {
        if self.contains_key(key) {
            return false;
        }
        self.fields.push((key.to_string(), value.to_string()));
        true
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.iter().any(|(existing, _)| existing == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Copy of `self` extended with every field of `other` whose key is not
    /// already present. Existing values are never overwritten.
    #[must_use]
    pub fn merged_with(&self, other: &Record) -> Record {
        let mut merged = self.clone();
        for (key, value) in other.iter() {
            merged.insert_if_absent(key, value);
        }
        merged
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (key, value) in iter {
            record.set(key, value);
        }
        record
    }
}
