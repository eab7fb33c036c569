//! Recursive discovery of markdown documents.
//!
//! [`DirectoryWalker`] visits every file under a root, keeps the ones whose
//! names end in `.md` or `.mdx`, and extracts one [`Record`] per document.
//! Symbolic links to directories are not followed. Unreadable directories are
//! skipped with a warning; an unreadable document becomes an error record.
//!
//! Within each directory the documents directly inside it come before those in
//! its subdirectories. Beyond that grouping the order follows the filesystem
//! and is not sorted by name.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::core::MdmetaError;
use crate::markdown::is_markdown_file;
use crate::metadata::extractor::MetadataExtractor;
use crate::metadata::record::Record;
use crate::utils::progress::ProgressBar;

/// Walks a directory tree and extracts a record for every markdown document.
#[derive(Debug, Clone)]
pub struct DirectoryWalker {
    root: PathBuf,
    extractor: MetadataExtractor,
    progress: Option<ProgressBar>,
}

impl DirectoryWalker {
    /// Create a walker rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extractor: MetadataExtractor::new(),
            progress: None,
        }
    }

    /// Report each processed document to `progress`.
    #[must_use]
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Visit the tree and return one record per eligible document.
    ///
    /// Paths in the records are the root joined with the relative path of
    /// each document, so a relative root yields relative paths.
    #[must_use]
    pub fn walk(&self) -> Vec<Record> {
        let mut records = Vec::new();

        // Files of a directory before its subdirectories; readdir order otherwise
        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_key(|entry| entry.file_type().is_dir());

        for entry in walker {
            match entry {
                Ok(entry) => {
                    if is_document(&entry) {
                        records.push(self.process(entry.path()));
                    }
                }
                Err(err) => match err.path() {
                    // A document whose own entry failed still gets a record
                    Some(path) if err.depth() > 0 && is_markdown_file(path) && !path.is_dir() => {
                        records.push(Record::error(path, err.to_string()));
                        self.tick();
                    }
                    _ => warn!("Skipping unreadable entry under {}: {}", self.root.display(), err),
                },
            }
        }

        debug!("Found {} markdown document(s) under {}", records.len(), self.root.display());
        records
    }

    fn process(&self, path: &Path) -> Record {
        let record = self.extractor.extract_from_file(path);
        self.tick();
        record
    }

    fn tick(&self) {
        if let Some(progress) = &self.progress {
            progress.inc(1);
        }
    }
}

/// Files and symlinks to files count; directories and links to directories do not.
fn is_document(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return false;
    }
    if file_type.is_symlink() && entry.path().is_dir() {
        return false;
    }
    is_markdown_file(entry.path())
}

/// Collect records for an input path that is either a directory or a single
/// markdown document.
///
/// # Errors
///
/// Returns [`MdmetaError::InvalidInputPath`] when `input` is neither an
/// existing directory nor an existing file whose name ends in `.md` or `.mdx`.
pub fn collect_records(
    input: &Path,
    progress: Option<ProgressBar>,
) -> Result<Vec<Record>, MdmetaError> {
    if input.is_dir() {
        let mut walker = DirectoryWalker::new(input);
        if let Some(progress) = progress {
            walker = walker.with_progress(progress);
        }
        return Ok(walker.walk());
    }

    if input.is_file() && is_markdown_file(input) {
        let record = MetadataExtractor::new().extract_from_file(input);
        if let Some(progress) = progress {
            progress.inc(1);
        }
        return Ok(vec![record]);
    }

    Err(MdmetaError::InvalidInputPath {
        path: input.to_string_lossy().into_owned(),
    })
}
