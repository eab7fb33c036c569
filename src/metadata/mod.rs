//! Metadata records for markdown documents.
//!
//! This module turns documents into [`Record`]s: the frontmatter mapping
//! enriched with computed fields (path parts, modification time, word count
//! and reading time). [`DirectoryWalker`] applies the extractor to a whole
//! tree.

pub mod extractor;
pub mod record;
pub mod walker;

pub use extractor::{MetadataExtractor, enrich, format_timestamp, reading_time_minutes, word_count};
pub use record::{Record, field_union};
pub use walker::{DirectoryWalker, collect_records};
