//! mdmeta - markdown frontmatter metadata extractor
//!
//! Scans a markdown file or a directory tree of `.md`/`.mdx` documents, reads
//! each document's frontmatter, adds file statistics, and writes one record
//! per document as JSON, CSV or YAML.
//!
//! # Pipeline
//!
//! ```text
//! input path ──> DirectoryWalker ──> MetadataExtractor ──> Vec<Record> ──> save_output
//!                (walkdir)           (FrontmatterParser     (ordered maps)   (json/csv/yaml,
//!                                     + enrich)                               atomic write)
//! ```
//!
//! A document that cannot be read or whose frontmatter does not parse becomes
//! an error record (`file_path` + `error`) instead of stopping the run.
//!
//! # Frontmatter
//!
//! Two encodings are recognized at the very start of a document:
//!
//! ```text
//! ---                       ```json
//! title: Hello              {"title": "Hello"}
//! tags: [a, b]              ```
//! ---
//! ```
//!
//! The YAML form is tried first. Anything else means the document has no
//! metadata and its whole content is the body.
//!
//! # Modules
//!
//! - [`cli`] - Argument parsing, pipeline orchestration and the run summary
//! - [`core`] - Error types and user-facing error reporting
//! - [`markdown`] - Document eligibility and frontmatter parsing
//! - [`metadata`] - Records, enrichment and directory traversal
//! - [`output`] - JSON, CSV and YAML serialization
//! - [`utils`] - Atomic writes, path expansion and progress display
//!
//! # Example
//!
//! ```rust,no_run
//! use mdmeta_cli::metadata::collect_records;
//! use mdmeta_cli::output::{OutputFormat, save_output};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let records = collect_records(Path::new("docs"), None)?;
//! save_output(&records, Path::new("metadata-output.json"), OutputFormat::Json)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod markdown;
pub mod metadata;
pub mod output;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
