//! Per-document metadata extraction.
//!
//! [`MetadataExtractor`] reads one document, splits off its frontmatter and
//! hands the result to [`enrich`], which prepends the computed fields. Any
//! failure along the way becomes an error [`Record`] instead of aborting the
//! run.
//!
//! # Computed fields
//!
//! | Key | Value |
//! |-----|-------|
//! | `file_path` | The path as given, relative or absolute |
//! | `file_name` | Final path component |
//! | `directory` | Everything before the final component (empty when there is none) |
//! | `last_modified` | Local time, `YYYY-MM-DDTHH:MM:SS[.ffffff]` |
//! | `word_count` | Whitespace-separated tokens in the body |
//! | `reading_time_minutes` | `ceil(word_count / 200)` |
//!
//! Frontmatter keys are applied after these, so a document can override any
//! of them.

use anyhow::Result;
use chrono::{DateTime, Local, Timelike};
use serde_json::Value as JsonValue;
use std::fs;
use std::path::Path;
use std::time::SystemTime;
use tracing::{debug, warn};

use crate::core::{FileOperation, FileResultExt};
use crate::markdown::{FrontmatterParser, Metadata};
use crate::metadata::record::{
    DIRECTORY, FILE_NAME, FILE_PATH, LAST_MODIFIED, READING_TIME, Record, WORD_COUNT,
    path_to_string,
};

/// Words per minute used for the reading time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Extracts a [`Record`] from a single markdown document.
#[derive(Debug, Default, Clone, Copy)]
pub struct MetadataExtractor {
    parser: FrontmatterParser,
}

impl MetadataExtractor {
    /// Create an extractor with the default frontmatter parser.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract the record for `path`.
    ///
    /// Never fails: read errors, timestamp errors and frontmatter errors are
    /// all reported as an error record carrying the failure message.
    #[must_use]
    pub fn extract_from_file(&self, path: &Path) -> Record {
        match self.try_extract_from_file(path) {
            Ok(record) => record,
            Err(err) => {
                warn!("Failed to extract metadata from {}: {}", path.display(), err);
                Record::error(path, err.to_string())
            }
        }
    }

    /// Extract the record for `path`, returning the first failure.
    ///
    /// # Errors
    ///
    /// - [`FileOperationError`](crate::core::FileOperationError) when the file
    ///   cannot be read as UTF-8 or its modification time is unavailable
    /// - [`MdmetaError`](crate::core::MdmetaError) when the frontmatter block
    ///   does not parse to a mapping
    pub fn try_extract_from_file(&self, path: &Path) -> Result<Record> {
        let content = fs::read_to_string(path).with_file_context(FileOperation::Read, path)?;
        let parsed = self.parser.parse(&content)?;

        let modified = fs::metadata(path)
            .and_then(|meta| meta.modified())
            .with_file_context(FileOperation::Metadata, path)?;

        debug!(
            "Extracted {} frontmatter field(s) from {}",
            parsed.data.len(),
            path.display()
        );

        Ok(enrich(path, parsed.data, &parsed.content, modified))
    }
}

/// Build the full record for a document from its parsed parts.
///
/// The computed fields come first in a fixed order; frontmatter keys are
/// applied afterwards and replace computed values on collision.
///
/// ```rust
/// use mdmeta_cli::markdown::Metadata;
/// use mdmeta_cli::metadata::enrich;
/// use serde_json::json;
/// use std::path::Path;
/// use std::time::SystemTime;
///
/// let mut metadata = Metadata::new();
/// metadata.insert("title".into(), json!("Hi"));
///
/// let record = enrich(Path::new("docs/a.md"), metadata, "one two three\n", SystemTime::now());
/// assert_eq!(record.get("word_count"), Some(&json!(3)));
/// assert_eq!(record.get("reading_time_minutes"), Some(&json!(1)));
/// assert_eq!(record.get("title"), Some(&json!("Hi")));
/// ```
#[must_use]
pub fn enrich(path: &Path, metadata: Metadata, body: &str, modified: SystemTime) -> Record {
    let words = word_count(body);

    let mut record = Record::new();
    record.insert(FILE_PATH, path_to_string(path));
    record.insert(FILE_NAME, file_name(path));
    record.insert(DIRECTORY, directory(path));
    record.insert(LAST_MODIFIED, format_timestamp(modified));
    record.insert(WORD_COUNT, words);
    record.insert(READING_TIME, reading_time_minutes(words));

    for (key, value) in metadata {
        record.insert(key, value);
    }
    record
}

/// Count whitespace-separated tokens.
#[must_use]
pub fn word_count(body: &str) -> usize {
    body.split_whitespace().count()
}

/// Reading time in whole minutes, rounded up. Zero words take zero minutes.
#[must_use]
pub const fn reading_time_minutes(word_count: usize) -> usize {
    word_count.div_ceil(WORDS_PER_MINUTE)
}

/// Format a modification time as local ISO-8601 without an offset.
///
/// Fractional seconds are written with six digits, and only when the
/// microsecond part is nonzero.
#[must_use]
pub fn format_timestamp(modified: SystemTime) -> String {
    let local: DateTime<Local> = modified.into();
    let naive = local.naive_local();

    if naive.nanosecond() / 1_000 == 0 {
        naive.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        naive.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

fn file_name(path: &Path) -> JsonValue {
    path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default().into()
}

fn directory(path: &Path) -> JsonValue {
    path.parent().map(path_to_string).unwrap_or_default().into()
}
