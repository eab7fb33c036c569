//! Shared utilities
//!
//! # Modules
//!
//! - [`fs`] - Atomic writes and directory helpers
//! - [`paths`] - `~` expansion for command-line paths
//! - [`progress`] - Spinner shown while scanning a directory tree
//!
//! # Example
//!
//! ```rust,no_run
//! use mdmeta_cli::utils::{ProgressBar, atomic_write};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let progress = ProgressBar::new_spinner();
//! progress.set_message("Scanning docs");
//!
//! atomic_write(Path::new("metadata-output.json"), b"[]")?;
//! progress.finish_and_clear();
//! # Ok(())
//! # }
//! ```

pub mod fs;
pub mod paths;
pub mod progress;

pub use fs::{atomic_write, ensure_dir};
pub use paths::expand_path;
pub use progress::ProgressBar;
