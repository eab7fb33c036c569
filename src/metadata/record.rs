//! The per-document output record.
//!
//! A [`Record`] is an ordered string-keyed mapping. Successful records start
//! with the computed fields in a fixed order and then carry every frontmatter
//! key; error records hold only `file_path` and `error`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::collections::BTreeSet;
use std::path::Path;

/// Key holding the path of the source document.
pub const FILE_PATH: &str = "file_path";
/// Key holding the final path component.
pub const FILE_NAME: &str = "file_name";
/// Key holding everything before the final path component.
pub const DIRECTORY: &str = "directory";
/// Key holding the ISO-8601 modification timestamp.
pub const LAST_MODIFIED: &str = "last_modified";
/// Key holding the whitespace-separated token count of the body.
pub const WORD_COUNT: &str = "word_count";
/// Key holding the estimated reading time in minutes.
pub const READING_TIME: &str = "reading_time_minutes";
/// Key holding the failure message of an error record.
pub const ERROR: &str = "error";

/// Ordered metadata for one document.
///
/// Serializes as a plain mapping, so JSON and YAML output keep the insertion
/// order of the keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, JsonValue>);

impl Record {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Create an error record for a document that could not be processed.
    ///
    /// ```rust
    /// use mdmeta_cli::metadata::Record;
    /// use std::path::Path;
    ///
    /// let record = Record::error(Path::new("docs/bad.md"), "YAML parsing error: boom");
    /// assert!(record.is_error());
    /// assert_eq!(record.file_path(), Some("docs/bad.md"));
    /// ```
    #[must_use]
    pub fn error(path: &Path, message: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert(FILE_PATH.to_string(), JsonValue::String(path_to_string(path)));
        fields.insert(ERROR.to_string(), JsonValue::String(message.into()));
        Self(fields)
    }

    /// Insert a field, replacing any previous value but keeping its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up a field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.0.get(key)
    }

    /// Whether the record carries an `error` field.
    ///
    /// A frontmatter key named `error` also counts; the summary treats such a
    /// document the same way as a failed one.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.0.contains_key(ERROR)
    }

    /// The `error` field rendered as text, if present.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.field_text(ERROR)
    }

    /// A field rendered as text: strings as-is, anything else as compact JSON.
    #[must_use]
    pub fn field_text(&self, key: &str) -> Option<String> {
        self.0.get(key).map(value_to_text)
    }

    /// The `file_path` field, when it is a string.
    #[must_use]
    pub fn file_path(&self) -> Option<&str> {
        self.0.get(FILE_PATH).and_then(JsonValue::as_str)
    }

    /// Field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Borrow the underlying mapping.
    #[must_use]
    pub fn fields(&self) -> &Map<String, JsonValue> {
        &self.0
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, JsonValue>> for Record {
    fn from(fields: Map<String, JsonValue>) -> Self {
        Self(fields)
    }
}

impl From<Record> for Map<String, JsonValue> {
    fn from(record: Record) -> Self {
        record.0
    }
}

/// Sorted union of the field names across all records.
///
/// Drives both the CSV header and the "Metadata fields found" summary line.
#[must_use]
pub fn field_union(records: &[Record]) -> BTreeSet<String> {
    records.iter().flat_map(|record| record.keys().map(str::to_string)).collect()
}

/// Render a path the way it is stored in `file_path` and `directory`.
pub(crate) fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn value_to_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(text) => text.clone(),
        other => other.to_string(),
    }
}
