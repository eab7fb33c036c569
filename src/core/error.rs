//! Error handling for mdmeta
//!
//! This module provides the error types and user-facing error reporting for the
//! metadata extractor. The error system follows two principles:
//! 1. **Strongly-typed errors** so callers can decide what is fatal and what is data
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`MdmetaError`] - Enumerated error types for every failure mode
//! - [`ErrorContext`] - Wrapper that adds suggestions and details for display
//!
//! # Fatal vs. per-document errors
//!
//! Per-document failures ([`MdmetaError::FrontmatterParse`], read failures) are
//! caught by the directory walker and turned into error records. Only
//! [`MdmetaError::InvalidInputPath`] and [`MdmetaError::OutputWrite`] reach
//! `main`, where [`user_friendly_error`] renders them before exiting with code 1.
//!
//! # Examples
//!
//! ```rust,no_run
//! use mdmeta_cli::core::{MdmetaError, user_friendly_error};
//!
//! let error = MdmetaError::InvalidInputPath {
//!     path: "notes.txt".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // Shows colored error with suggestions
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

use crate::markdown::FrontmatterFormat;

/// The main error type for mdmeta operations
///
/// # Error Categories
///
/// ## Per-document (downgraded to error records)
/// - [`FrontmatterParse`] - The metadata block interior is not valid YAML/JSON
/// - [`FrontmatterNotMapping`] - The metadata block parsed to something other than a mapping
/// - [`FileOperationError`](crate::core::file_error::FileOperationError) - A document could not be read or stat'ed
///
/// ## Fatal
/// - [`InvalidInputPath`] - The input path is neither a directory nor a markdown file
/// - [`OutputWrite`] - The output destination could not be written
///
/// [`FrontmatterParse`]: MdmetaError::FrontmatterParse
/// [`FrontmatterNotMapping`]: MdmetaError::FrontmatterNotMapping
/// [`InvalidInputPath`]: MdmetaError::InvalidInputPath
/// [`OutputWrite`]: MdmetaError::OutputWrite
#[derive(Error, Debug)]
pub enum MdmetaError {
    /// The interior of a matched frontmatter block failed to parse.
    ///
    /// The message carries the parser's own error text so the error record
    /// tells the user where the syntax broke.
    #[error("{format} parsing error: {reason}")]
    FrontmatterParse {
        /// Which encoding the block was detected as
        format: FrontmatterFormat,
        /// The parser's error message
        reason: String,
    },

    /// The frontmatter parsed successfully but is a sequence or scalar.
    #[error("{format} frontmatter must be a mapping, found {found}")]
    FrontmatterNotMapping {
        /// Which encoding the block was detected as
        format: FrontmatterFormat,
        /// Short description of the value kind that was found
        found: String,
    },

    /// The input path is neither a directory nor an existing `.md`/`.mdx` file.
    #[error("Input path must be a markdown file or directory: {path}")]
    InvalidInputPath {
        /// The path supplied on the command line
        path: String,
    },

    /// Serialized output could not be written to its destination.
    #[error("Failed to write output to '{path}': {reason}")]
    OutputWrite {
        /// The destination path
        path: String,
        /// Description of the underlying failure
        reason: String,
    },

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl Clone for MdmetaError {
    fn clone(&self) -> Self {
        match self {
            Self::FrontmatterParse {
                format,
                reason,
            } => Self::FrontmatterParse {
                format: *format,
                reason: reason.clone(),
            },
            Self::FrontmatterNotMapping {
                format,
                found,
            } => Self::FrontmatterNotMapping {
                format: *format,
                found: found.clone(),
            },
            Self::InvalidInputPath {
                path,
            } => Self::InvalidInputPath {
                path: path.clone(),
            },
            Self::OutputWrite {
                path,
                reason,
            } => Self::OutputWrite {
                path: path.clone(),
                reason: reason.clone(),
            },
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Error context wrapper that provides user-friendly error information
///
/// When displayed, errors show:
/// 1. **Error**: The main error message in red
/// 2. **Details**: Additional context about the error in yellow (optional)
/// 3. **Suggestion**: Actionable steps to resolve the issue in green (optional)
///
/// # Examples
///
/// ```rust,no_run
/// use mdmeta_cli::core::{ErrorContext, MdmetaError};
///
/// let context = ErrorContext::new(MdmetaError::InvalidInputPath {
///     path: "notes.txt".to_string(),
/// })
/// .with_suggestion("Pass a directory or a .md/.mdx file");
///
/// println!("{}", context);
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: MdmetaError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: MdmetaError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error context to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions
///
/// Recognizes [`MdmetaError`] variants and [`std::io::Error`] kinds; everything
/// else is reported with its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(mdmeta_error) = error.downcast_ref::<MdmetaError>() {
        return create_error_context(mdmeta_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(MdmetaError::Other {
                    message: format!("Permission denied: {io_error}"),
                })
                .with_suggestion("Check file ownership and permissions of the input and output paths");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(MdmetaError::Other {
                    message: format!("File not found: {io_error}"),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    // Generic error - include the full error chain for better diagnostics
    let mut message = error.to_string();

    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(MdmetaError::Other {
        message,
    })
}

fn create_error_context(error: MdmetaError) -> ErrorContext {
    match &error {
        MdmetaError::InvalidInputPath {
            path,
        } => ErrorContext::new(error.clone())
            .with_suggestion("Pass a directory to scan recursively, or a single .md/.mdx file")
            .with_details(format!("'{path}' is neither a directory nor an existing .md/.mdx file")),
        MdmetaError::OutputWrite {
            path,
            ..
        } => ErrorContext::new(error.clone())
            .with_suggestion("Choose a different --output path or check directory permissions")
            .with_details(format!("No output was written to '{path}'")),
        MdmetaError::FrontmatterParse {
            ..
        }
        | MdmetaError::FrontmatterNotMapping {
            ..
        } => ErrorContext::new(error.clone())
            .with_suggestion("Fix the frontmatter block at the top of the document"),
        _ => ErrorContext::new(error),
    }
}
