//! Structured file system error handling
//!
//! Captures the operation and path at the call site so per-document error
//! records read like `Failed reading 'docs/a.md': Permission denied (os error 13)`
//! instead of a bare OS message.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Types of file operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    /// Reading a document completely
    Read,
    /// Getting file metadata (modification time)
    Metadata,
}

impl std::fmt::Display for FileOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileOperation::Read => write!(f, "reading"),
            FileOperation::Metadata => write!(f, "getting metadata for"),
        }
    }
}

/// File operation error with the path and operation that failed
#[derive(Error, Debug)]
#[error("Failed {} '{}': {}", .operation, .file_path.display(), .source)]
pub struct FileOperationError {
    /// The type of operation that failed
    pub operation: FileOperation,
    /// The file path that was being accessed
    pub file_path: PathBuf,
    /// The underlying IO error
    #[source]
    pub source: std::io::Error,
}

impl FileOperationError {
    /// Create a new file operation error
    pub fn new(operation: FileOperation, file_path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self {
            operation,
            file_path: file_path.into(),
            source,
        }
    }
}

/// Extension trait for Result types to add file operation context
pub trait FileResultExt<T> {
    /// Attach the operation and path to an I/O error
    fn with_file_context(
        self,
        operation: FileOperation,
        file_path: &Path,
    ) -> Result<T, FileOperationError>;
}

impl<T> FileResultExt<T> for Result<T, std::io::Error> {
    fn with_file_context(
        self,
        operation: FileOperation,
        file_path: &Path,
    ) -> Result<T, FileOperationError> {
        self.map_err(|io_error| FileOperationError::new(operation, file_path, io_error))
    }
}
