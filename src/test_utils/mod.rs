//! Test utilities for mdmeta
//!
//! Helpers shared by unit tests and the CLI integration tests: a logging
//! initializer that plays well with the test harness, and fixtures that build
//! temporary documentation trees.
//!
//! # Example
//!
//! ```rust,no_run
//! use mdmeta_cli::metadata::DirectoryWalker;
//! use mdmeta_cli::test_utils::{DocsFixture, MarkdownFixture, init_test_logging};
//!
//! # fn example() -> anyhow::Result<()> {
//! init_test_logging(None);
//!
//! let docs = DocsFixture::new()?.with_file(MarkdownFixture::post("first"))?;
//! let records = DirectoryWalker::new(docs.root()).walk();
//! assert_eq!(records.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod fixtures;

pub use fixtures::{DocsFixture, MarkdownFixture};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. Uses `level` when given, otherwise
/// `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}
