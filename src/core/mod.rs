//! Core types and error handling for mdmeta
//!
//! - [`error`] - The [`MdmetaError`] enum, [`ErrorContext`] and [`user_friendly_error`]
//! - [`file_error`] - File operation errors that carry the failing path

pub mod error;
pub mod file_error;

pub use error::{ErrorContext, MdmetaError, user_friendly_error};
pub use file_error::{FileOperation, FileOperationError, FileResultExt};
