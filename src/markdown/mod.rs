//! Markdown document handling.
//!
//! This module decides which files count as documents and pulls the
//! frontmatter block out of their text.
//!
//! # Eligible documents
//!
//! A file is a document when its name ends in `.md` or `.mdx`. The suffix
//! check is case-sensitive: `README.MD` is skipped.
//!
//! # Frontmatter
//!
//! See [`frontmatter`] for the two supported encodings (`---` YAML blocks and
//! ```` ```json ```` fenced blocks) and how the body is separated from them.

pub mod frontmatter;

pub use frontmatter::{
    FrontmatterBoundaries, FrontmatterFormat, FrontmatterParser, Metadata, ParsedFrontmatter,
    extract,
};

use std::path::Path;

/// File name suffixes that mark a file as a markdown document.
pub const MARKDOWN_SUFFIXES: [&str; 2] = [".md", ".mdx"];

/// Check if a path names a markdown document.
///
/// Only the file name is inspected; the file does not have to exist.
///
/// # Examples
///
/// ```rust
/// use mdmeta_cli::markdown::is_markdown_file;
/// use std::path::Path;
///
/// assert!(is_markdown_file(Path::new("docs/intro.md")));
/// assert!(is_markdown_file(Path::new("docs/widget.mdx")));
/// assert!(!is_markdown_file(Path::new("README.MD")));
/// assert!(!is_markdown_file(Path::new("notes.markdown")));
/// ```
#[must_use]
pub fn is_markdown_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .is_some_and(|name| MARKDOWN_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)))
}
